use ndarray::Array2;
use ndarray_rand::{rand::Rng, rand_distr::StandardNormal, RandomExt};

/// A parameter tensor of the network: either the fixed layer-0 placeholder or a
/// matrix of independent normal random variables.
///
/// Random-variable entries are *definitions* (per-element location and scale),
/// not drawn values; realize them with [`ParamTensor::sample`] or collapse them
/// to their location with [`ParamTensor::mean`].
#[derive(Clone, Debug, PartialEq)]
pub enum ParamTensor {
    /// Constant all-ones tensor. Kept at index 0 of weight/bias lists purely so
    /// storage indices line up with 1-indexed layer numbering; never sampled and
    /// never used in computation.
    Ones(Array2<f32>),

    /// Independent normal random variables with per-element location and scale.
    /// `scale` is a standard deviation, not a variance.
    Normal {
        loc: Array2<f32>,
        scale: Array2<f32>,
    },
}

impl ParamTensor {
    /// Creates the all-ones placeholder of the given shape.
    pub fn ones(shape: (usize, usize)) -> Self {
        ParamTensor::Ones(Array2::ones(shape))
    }

    /// Creates a normal random-variable tensor with a uniform location and scale.
    pub fn normal(shape: (usize, usize), loc: f32, scale: f32) -> Self {
        ParamTensor::Normal {
            loc: Array2::from_elem(shape, loc),
            scale: Array2::from_elem(shape, scale),
        }
    }

    /// Returns the tensor shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        match self {
            ParamTensor::Ones(t) => t.dim(),
            ParamTensor::Normal { loc, .. } => loc.dim(),
        }
    }

    /// Returns the tensor's mean: the constant itself for the placeholder, the
    /// location for a random-variable tensor.
    pub fn mean(&self) -> Array2<f32> {
        match self {
            ParamTensor::Ones(t) => t.clone(),
            ParamTensor::Normal { loc, .. } => loc.clone(),
        }
    }

    /// Realizes one draw of the tensor.
    ///
    /// The placeholder is returned as-is; a normal tensor is drawn as
    /// `loc + scale * z` with `z ~ N(0, 1)` elementwise.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Array2<f32> {
        match self {
            ParamTensor::Ones(t) => t.clone(),
            ParamTensor::Normal { loc, scale } => {
                let z: Array2<f32> = Array2::random_using(loc.raw_dim(), StandardNormal, rng);
                loc + &(z * scale)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn placeholder_is_all_ones() {
        let t = ParamTensor::ones((3, 1));
        assert_eq!(t.shape(), (3, 1));
        assert_eq!(t.mean(), Array2::ones((3, 1)));
    }

    #[test]
    fn sample_keeps_defining_shape() {
        let t = ParamTensor::normal((4, 3), 0.0, 1.0);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(t.sample(&mut rng).dim(), (4, 3));
    }

    #[test]
    fn zero_scale_draw_equals_location() {
        let t = ParamTensor::normal((2, 2), 1.5, 0.0);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(t.sample(&mut rng), Array2::from_elem((2, 2), 1.5));
    }
}
