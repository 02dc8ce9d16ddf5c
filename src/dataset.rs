//! Paired mileage/price observations.

use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

use ndarray::{Array1, LinalgScalar, ScalarOperand};

use crate::error::{Error, Result};

/// Floating point scalar usable for training.
///
/// Implemented for `f32` and `f64`.
pub trait Float:
    num_traits::Float
    + LinalgScalar
    + ScalarOperand
    + FromStr<Err = ParseFloatError>
    + fmt::Display
    + fmt::Debug
    + Default
    + Send
    + Sync
{
    /// Converts a sample count into the scalar type.
    fn cast(x: usize) -> Self;
}

impl Float for f32 {
    fn cast(x: usize) -> Self {
        x as f32
    }
}

impl Float for f64 {
    fn cast(x: usize) -> Self {
        x as f64
    }
}

/// Mileage values paired positionally with prices.
///
/// Both arrays always have the same length. The dataset may be empty; the
/// training functions reject it with [`Error::EmptyDataset`].
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<F> {
    mileage: Array1<F>,
    price: Array1<F>,
}

impl<F: Float> Dataset<F> {
    pub fn new(mileage: Array1<F>, price: Array1<F>) -> Result<Self> {
        if mileage.len() != price.len() {
            return Err(Error::LengthMismatch {
                mileage: mileage.len(),
                price: price.len(),
            });
        }
        Ok(Dataset { mileage, price })
    }

    pub fn from_vecs(mileage: Vec<F>, price: Vec<F>) -> Result<Self> {
        Dataset::new(Array1::from(mileage), Array1::from(price))
    }

    pub fn mileage(&self) -> &Array1<F> {
        &self.mileage
    }

    pub fn price(&self) -> &Array1<F> {
        &self.price
    }

    /// Number of samples, `m`.
    pub fn len(&self) -> usize {
        self.mileage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mileage.is_empty()
    }

    /// Returns `m`, or [`Error::EmptyDataset`] if there is nothing to train on.
    pub fn ensure_not_empty(&self) -> Result<usize> {
        if self.is_empty() {
            Err(Error::EmptyDataset)
        } else {
            Ok(self.len())
        }
    }
}
