//! Re-exports of the commonly used types.

pub use crate::dataset::{Dataset, Float};
pub use crate::error::{Error, Result};
pub use crate::metrics::Regression;
