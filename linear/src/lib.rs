extern crate ndarray;
use std::fmt;

use ndarray::Array1;

use carprice::{Dataset, Error, Float, Result};

mod cost;
mod gradient_descent;
mod params;

pub use cost::cost;
pub use gradient_descent::gradient_descent;
pub use params::{predict, HyperParameters, ModelParameters};

pub struct Linear<F> {
    hyper: HyperParameters<F>,
    params: Option<ModelParameters<F>>,
}

impl<F: Float> Default for Linear<F> {
    fn default() -> Self {
        Linear {
            hyper: HyperParameters::default(),
            params: None,
        }
    }
}

/// Configure and fit a linear regression model
impl<F: Float> Linear<F> {
    /// Create an unfitted model that trains for `iterations` steps with learning rate `lr`.
    pub fn new(iterations: usize, lr: F) -> Result<Linear<F>> {
        Ok(Linear {
            hyper: HyperParameters::new(lr, iterations)?,
            params: None,
        })
    }

    pub fn hyper_parameters(&self) -> &HyperParameters<F> {
        &self.hyper
    }

    /// Learned parameters, `None` until [`Linear::fit`] succeeds.
    pub fn params(&self) -> Option<ModelParameters<F>> {
        self.params
    }

    /// Train from `(0, 0)` on `dataset`.
    ///
    /// A failed fit leaves any previously learned parameters in place.
    pub fn fit(&mut self, dataset: &Dataset<F>) -> Result<&Self> {
        let params = gradient_descent(dataset, ModelParameters::zeros(), &self.hyper)?;
        self.params = Some(params);
        Ok(self)
    }

    pub fn predict(&self, mileage: F) -> Result<F> {
        self.params
            .map(|params| params.predict(mileage))
            .ok_or(Error::NotFitted)
    }

    pub fn predict_batch(&self, mileage: &Array1<F>) -> Result<Array1<F>> {
        self.params
            .map(|params| params.predict_batch(mileage))
            .ok_or(Error::NotFitted)
    }

    /// Cost of the learned parameters on `dataset`.
    pub fn cost(&self, dataset: &Dataset<F>) -> Result<F> {
        let params = self.params.ok_or(Error::NotFitted)?;
        cost(dataset, &params)
    }
}

impl<F: Float> fmt::Display for Linear<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.params {
            None => write!(f, "unfitted"),
            Some(params) => write!(f, "{}", params),
        }
    }
}
