//! `carprice` estimates the price of a car from its mileage with a univariate
//! linear model trained by batch gradient descent.
//!
//! This crate holds the pieces shared by the workspace: the [`Dataset`] of
//! (mileage, price) pairs, the [`Float`] scalar trait, the crate-wide
//! [`Error`] and regression metrics. The optimizer lives in
//! `carprice-linear`, file loading in `carprice-datasets`.
//!

pub mod dataset;
pub mod error;
mod metrics_regression;
pub mod prelude;

pub use dataset::{Dataset, Float};
pub use error::{Error, Result};

/// Common metrics functions for regression
pub mod metrics {
    pub use crate::metrics_regression::Regression;
}
