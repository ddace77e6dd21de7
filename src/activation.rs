use std::str::FromStr;

use ndarray::Array2;

use crate::error::BnnError;

/// Elementwise nonlinearity applied after a layer's affine transform.
///
/// One variant per recognized tag; `none` parses to [`Activation::Identity`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    Tanh,
    Relu,
    Sigmoid,
    /// Sign nonlinearity, kept for theoretical constructions (Neal-style
    /// derivations). Zero maps to zero.
    Sign,
    Identity,
}
use Activation::*;

impl Activation {
    /// Applies the nonlinearity elementwise to a pre-activation matrix.
    pub fn apply(&self, z: Array2<f32>) -> Array2<f32> {
        match self {
            Tanh => z.mapv(f32::tanh),
            Relu => z.mapv(|x| x.max(0.0)),
            Sigmoid => z.mapv(|x| 1.0 / (1.0 + (-x).exp())),
            Sign => z.mapv(|x| {
                if x > 0.0 {
                    1.0
                } else if x < 0.0 {
                    -1.0
                } else {
                    0.0
                }
            }),
            Identity => z,
        }
    }
}

impl FromStr for Activation {
    type Err = BnnError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "tanh" => Ok(Tanh),
            "relu" => Ok(Relu),
            "sigmoid" => Ok(Sigmoid),
            "sign" => Ok(Sign),
            "none" => Ok(Identity),
            other => Err(BnnError::InvalidActivation(other.to_string())),
        }
    }
}
