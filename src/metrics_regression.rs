use ndarray::Array1;

use crate::dataset::Float;
use crate::error::{Error, Result};

/// Regression metrics comparing predictions (`self`) with observed targets.
pub trait Regression<F: Float> {
    /// Mean of the squared residuals, `(1/m) * Σ (prediction - target)^2`.
    fn mean_squared_error(&self, targets: &Array1<F>) -> Result<F>;

    /// Coefficient of determination.
    ///
    /// Constant targets give `1` for a perfect fit and `0` otherwise.
    fn r2(&self, targets: &Array1<F>) -> Result<F>;
}

fn check_shapes<F: Float>(predictions: &Array1<F>, targets: &Array1<F>) -> Result<usize> {
    if predictions.len() != targets.len() {
        return Err(Error::ShapeMismatch {
            predictions: predictions.len(),
            targets: targets.len(),
        });
    }
    if targets.is_empty() {
        return Err(Error::EmptyDataset);
    }
    Ok(targets.len())
}

impl<F: Float> Regression<F> for Array1<F> {
    fn mean_squared_error(&self, targets: &Array1<F>) -> Result<F> {
        let m = check_shapes(self, targets)?;
        let residuals = self - targets;
        Ok(residuals.dot(&residuals) / F::cast(m))
    }

    fn r2(&self, targets: &Array1<F>) -> Result<F> {
        let m = check_shapes(self, targets)?;
        let residuals = self - targets;
        let ss_res = residuals.dot(&residuals);

        let mean = targets.sum() / F::cast(m);
        let deviations = targets.mapv(|v| v - mean);
        let ss_tot = deviations.dot(&deviations);

        let r2 = if ss_tot == F::zero() {
            if ss_res == F::zero() {
                F::one()
            } else {
                F::zero()
            }
        } else {
            F::one() - ss_res / ss_tot
        };
        Ok(r2)
    }
}
