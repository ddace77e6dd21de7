use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, BnnError>;

/// Errors produced when defining or evaluating a Bayesian network.
#[derive(Debug, Clone, PartialEq)]
pub enum BnnError {
    /// The layer size list cannot describe a network.
    InvalidDimensions {
        reason: &'static str,
        /// Index of the offending entry, when one exists.
        index: usize,
    },

    /// The requested prior family has no builder.
    DistributionNotImplemented(String),

    /// The hyperparameter map does not hold exactly the keys `mean` and `var`.
    InvalidHyperparams {
        /// The full key set that was supplied.
        keys: Vec<String>,
    },

    /// A variance hyperparameter is not a strictly positive finite number.
    NonPositiveVariance { var: f32 },

    /// An activation tag outside the recognized set.
    InvalidActivation(String),

    /// A shape invariant was violated when wiring evaluator inputs together.
    ShapeMismatch {
        /// Human-readable context for the mismatch (e.g. "bias", "input rows").
        what: &'static str,
        got: usize,
        expected: usize,
    },
}

impl Display for BnnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BnnError::InvalidDimensions { reason, index } => {
                write!(f, "invalid layer dimensions at index {index}: {reason}")
            }
            BnnError::DistributionNotImplemented(dist) => {
                write!(f, "{dist} distribution not implemented")
            }
            BnnError::InvalidHyperparams { keys } => {
                write!(
                    f,
                    "invalid hyperparameter keys {keys:?}, expected exactly \"mean\" and \"var\""
                )
            }
            BnnError::NonPositiveVariance { var } => {
                write!(f, "variance must be a positive finite number, got {var}")
            }
            BnnError::InvalidActivation(tag) => {
                write!(f, "invalid activation name {tag:?}")
            }
            BnnError::ShapeMismatch {
                what,
                got,
                expected,
            } => {
                write!(f, "shape mismatch for {what}: got {got}, expected {expected}")
            }
        }
    }
}

impl Error for BnnError {}
