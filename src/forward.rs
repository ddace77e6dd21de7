use ndarray::Array2;

use crate::{
    activation::Activation,
    error::{BnnError, Result},
};

/// Feeds input data forward through the network's layers.
///
/// `weights` and `bias` follow the initializer's shape conventions: index 0 is
/// the unused placeholder and is skipped, entry `i` holds the realized weight
/// matrix and bias column of layer `i` (see `ParamTensor::sample` /
/// `ParamTensor::mean` for realizing the prior definitions).
///
/// # Arguments
/// * `x` - Input data, a matrix or column vector with one row per input unit.
/// * `weights` - Realized weight matrices, one per layer index.
/// * `bias` - Realized bias columns, one per layer index.
/// * `activation` - The activation applied at each layer index.
///
/// # Errors
/// Returns `BnnError::ShapeMismatch` if the list lengths disagree or the input's
/// row count does not match the first computed layer's width.
pub fn simple_feed_forward(
    x: &Array2<f32>,
    weights: &[Array2<f32>],
    bias: &[Array2<f32>],
    activation: &[Activation],
) -> Result<Array2<f32>> {
    if bias.len() != weights.len() {
        return Err(BnnError::ShapeMismatch {
            what: "bias list",
            got: bias.len(),
            expected: weights.len(),
        });
    }
    if activation.len() != weights.len() {
        return Err(BnnError::ShapeMismatch {
            what: "activation list",
            got: activation.len(),
            expected: weights.len(),
        });
    }
    if let Some(w) = weights.get(1) {
        if x.nrows() != w.ncols() {
            return Err(BnnError::ShapeMismatch {
                what: "input rows",
                got: x.nrows(),
                expected: w.ncols(),
            });
        }
    }

    let mut a = x.clone();
    for i in 1..weights.len() {
        let z = weights[i].dot(&a) + &bias[i];
        a = activation[i].apply(z);
    }

    Ok(a)
}
