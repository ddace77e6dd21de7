//! Definition and evaluation primitives for a small Bayesian neural network.
//!
//! [`initialise_params`] builds per-layer prior weight/bias tensors (normal
//! random-variable definitions); [`simple_feed_forward`] evaluates realized
//! parameters on input data. Training and posterior inference are out of scope.

mod activation;
mod error;
mod forward;
mod init;
mod params;

pub use activation::Activation;
pub use error::{BnnError, Result};
pub use forward::simple_feed_forward;
pub use init::{initialise_params, BiasList, Hyperparams, Prior, WeightList};
pub use params::ParamTensor;
