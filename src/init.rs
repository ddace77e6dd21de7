use std::{collections::BTreeMap, str::FromStr};

use log::debug;

use crate::{
    error::{BnnError, Result},
    params::ParamTensor,
};

/// Weights of the network, one entry per layer index. Entry 0 is the unused
/// placeholder; entry `i >= 1` has shape `(dims[i], dims[i - 1])`.
pub type WeightList = Vec<ParamTensor>;

/// Biases of the network, one entry per layer index. Entry 0 is the unused
/// placeholder; entry `i >= 1` has shape `(dims[i], 1)`.
pub type BiasList = Vec<ParamTensor>;

/// Variance of the output layer's bias prior, fixed regardless of
/// hyperparameters.
const OUTPUT_BIAS_VAR: f32 = 0.1;

/// Prior hyperparameters for a layer's weight and bias distributions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hyperparams {
    mean: f32,
    var: f32,
}

impl Default for Hyperparams {
    fn default() -> Self {
        Self {
            mean: 0.0,
            var: 1.0,
        }
    }
}

impl Hyperparams {
    /// Creates hyperparameters from a mean and a variance.
    ///
    /// # Errors
    /// Returns `BnnError::NonPositiveVariance` unless `var` is a strictly
    /// positive finite number.
    pub fn new(mean: f32, var: f32) -> Result<Self> {
        if !(var.is_finite() && var > 0.0) {
            return Err(BnnError::NonPositiveVariance { var });
        }
        Ok(Self { mean, var })
    }

    /// Creates hyperparameters from a string-keyed map, the boundary for
    /// callers holding loosely-typed configuration.
    ///
    /// # Errors
    /// Returns `BnnError::InvalidHyperparams` listing the supplied keys unless
    /// the map holds exactly the keys `mean` and `var`, and
    /// `BnnError::NonPositiveVariance` if the variance value is invalid.
    pub fn from_map(map: &BTreeMap<String, f32>) -> Result<Self> {
        match (map.get("mean"), map.get("var")) {
            (Some(&mean), Some(&var)) if map.len() == 2 => Self::new(mean, var),
            _ => Err(BnnError::InvalidHyperparams {
                keys: map.keys().cloned().collect(),
            }),
        }
    }

    pub fn mean(&self) -> f32 {
        self.mean
    }

    pub fn var(&self) -> f32 {
        self.var
    }
}

/// The family of prior distributions used for weights and biases.
///
/// The `match` in [`initialise_params`] is the extension point: adding a family
/// means adding a variant and its builder, call sites stay unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Prior {
    #[default]
    Normal,
}

impl FromStr for Prior {
    type Err = BnnError;

    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        match name {
            "normal" => Ok(Prior::Normal),
            other => Err(BnnError::DistributionNotImplemented(other.to_string())),
        }
    }
}

/// Initialises the prior weight and bias tensors of a feed-forward network.
///
/// `dims[i]` is the unit count of layer `i`; `dims[0]` is the input width and
/// is only used as a shape reference. Both returned lists carry an all-ones
/// placeholder at index 0 so storage indices match 1-indexed layer numbering.
///
/// # Arguments
/// * `dims` - The unit count of each layer, input layer first.
/// * `prior` - The prior family; only [`Prior::Normal`] is implemented.
/// * `hyperparams` - Prior mean and variance; `None` means `{mean: 0, var: 1}`.
///
/// # Errors
/// Returns `BnnError::InvalidDimensions` if `dims` is empty or contains a
/// zero-width layer.
pub fn initialise_params(
    dims: &[usize],
    prior: Prior,
    hyperparams: Option<Hyperparams>,
) -> Result<(WeightList, BiasList)> {
    if dims.is_empty() {
        return Err(BnnError::InvalidDimensions {
            reason: "layer size list is empty",
            index: 0,
        });
    }
    if let Some(index) = dims.iter().position(|&d| d == 0) {
        return Err(BnnError::InvalidDimensions {
            reason: "layer width must be positive",
            index,
        });
    }

    match prior {
        Prior::Normal => Ok(initialise_normal(dims, hyperparams.unwrap_or_default())),
    }
}

/// Builds normal-prior weight and bias tensors for each computed layer.
///
/// Hidden layers use the hyperparameter variance for both tensors. The output
/// layer overrides it: the bias variance is the constant [`OUTPUT_BIAS_VAR`]
/// and the weight variance is `1 / sqrt(sum of hidden widths)`, which keeps the
/// output variance stable as the network widens. Scales handed to the
/// distribution are standard deviations, so every variance goes through one
/// `sqrt` on the way in.
fn initialise_normal(dims: &[usize], hp: Hyperparams) -> (WeightList, BiasList) {
    let mut weights = vec![ParamTensor::ones((dims[0], 1))];
    let mut bias = vec![ParamTensor::ones((dims[0], 1))];

    let last = dims.len() - 1;
    for i in 1..dims.len() {
        let (weight_var, bias_var) = if i == last {
            (output_weight_var(dims), OUTPUT_BIAS_VAR)
        } else {
            (hp.var(), hp.var())
        };

        debug!(
            "layer {i}: weights ({}, {}) var {weight_var}, bias ({}, 1) var {bias_var}",
            dims[i],
            dims[i - 1],
            dims[i],
        );

        weights.push(ParamTensor::normal(
            (dims[i], dims[i - 1]),
            hp.mean(),
            weight_var.sqrt(),
        ));
        bias.push(ParamTensor::normal((dims[i], 1), hp.mean(), bias_var.sqrt()));
    }

    (weights, bias)
}

/// Output-layer weight variance: `1 / sqrt(sum of hidden widths)`.
///
/// A network with no hidden layers would make that sum 0 and the variance
/// undefined; the sum is floored to 1 instead, giving unit variance.
fn output_weight_var(dims: &[usize]) -> f32 {
    let hidden: usize = dims[1..dims.len() - 1].iter().sum();
    1.0 / (hidden.max(1) as f32).sqrt()
}

#[cfg(test)]
mod test {
    use super::*;

    fn scale_of(t: &ParamTensor) -> f32 {
        match t {
            ParamTensor::Normal { scale, .. } => scale[(0, 0)],
            ParamTensor::Ones(_) => panic!("expected a random-variable tensor"),
        }
    }

    #[test]
    fn shapes_follow_dims() {
        let dims = [3, 4, 2];
        let (weights, bias) = initialise_params(&dims, Prior::Normal, None).unwrap();

        assert_eq!(weights.len(), dims.len());
        assert_eq!(bias.len(), dims.len());
        for i in 1..dims.len() {
            assert_eq!(weights[i].shape(), (dims[i], dims[i - 1]));
            assert_eq!(bias[i].shape(), (dims[i], 1));
        }
    }

    #[test]
    fn index_zero_is_all_ones_placeholder() {
        let (weights, bias) = initialise_params(&[3, 4, 2], Prior::Normal, None).unwrap();
        assert_eq!(weights[0], ParamTensor::ones((3, 1)));
        assert_eq!(bias[0], ParamTensor::ones((3, 1)));
    }

    #[test]
    fn hidden_layers_use_hyperparameter_variance() {
        let hp = Hyperparams::new(0.0, 4.0).unwrap();
        let (weights, bias) = initialise_params(&[3, 5, 5, 2], Prior::Normal, Some(hp)).unwrap();
        // scale = sqrt(var)
        assert!((scale_of(&weights[1]) - 2.0).abs() < 1e-6);
        assert!((scale_of(&bias[2]) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn output_layer_overrides_variances() {
        let (weights, bias) = initialise_params(&[3, 4, 2], Prior::Normal, None).unwrap();
        // hidden widths sum to 4, so weight var = 1 / sqrt(4) = 0.5
        assert!((scale_of(&weights[2]) - 0.5_f32.sqrt()).abs() < 1e-6);
        assert!((scale_of(&bias[2]) - 0.1_f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn no_hidden_layers_falls_back_to_unit_variance() {
        let (weights, _) = initialise_params(&[3, 2], Prior::Normal, None).unwrap();
        assert!((scale_of(&weights[1]) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_empty_dims() {
        let err = initialise_params(&[], Prior::Normal, None).unwrap_err();
        assert!(matches!(err, BnnError::InvalidDimensions { .. }));
    }

    #[test]
    fn rejects_zero_width_layer() {
        let err = initialise_params(&[3, 0, 2], Prior::Normal, None).unwrap_err();
        assert_eq!(
            err,
            BnnError::InvalidDimensions {
                reason: "layer width must be positive",
                index: 1,
            }
        );
    }

    #[test]
    fn unknown_prior_name_is_rejected_at_parse() {
        let err = "cauchy".parse::<Prior>().unwrap_err();
        assert_eq!(
            err,
            BnnError::DistributionNotImplemented("cauchy".to_string())
        );
        assert_eq!("normal".parse::<Prior>().unwrap(), Prior::Normal);
    }

    #[test]
    fn from_map_accepts_exactly_mean_and_var() {
        let map = BTreeMap::from([("mean".to_string(), 1.0), ("var".to_string(), 2.0)]);
        assert_eq!(
            Hyperparams::from_map(&map).unwrap(),
            Hyperparams::new(1.0, 2.0).unwrap()
        );
    }

    #[test]
    fn from_map_rejects_missing_key() {
        let map = BTreeMap::from([("mean".to_string(), 1.0)]);
        let err = Hyperparams::from_map(&map).unwrap_err();
        assert_eq!(
            err,
            BnnError::InvalidHyperparams {
                keys: vec!["mean".to_string()],
            }
        );
    }

    #[test]
    fn from_map_rejects_extra_key() {
        let map = BTreeMap::from([
            ("mean".to_string(), 1.0),
            ("var".to_string(), 2.0),
            ("skew".to_string(), 3.0),
        ]);
        let err = Hyperparams::from_map(&map).unwrap_err();
        assert_eq!(
            err,
            BnnError::InvalidHyperparams {
                keys: vec!["mean".to_string(), "skew".to_string(), "var".to_string()],
            }
        );
    }

    #[test]
    fn rejects_non_positive_variance() {
        assert_eq!(
            Hyperparams::new(0.0, 0.0).unwrap_err(),
            BnnError::NonPositiveVariance { var: 0.0 }
        );
        assert!(Hyperparams::new(0.0, -1.0).is_err());
        assert!(Hyperparams::new(0.0, f32::NAN).is_err());
    }

    #[test]
    fn default_hyperparams_are_standard_normal() {
        let hp = Hyperparams::default();
        assert_eq!(hp.mean(), 0.0);
        assert_eq!(hp.var(), 1.0);
    }
}
