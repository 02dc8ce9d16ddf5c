use carprice::{Dataset, Float, Result};

use crate::params::ModelParameters;

/// Mean squared error of `params` on `dataset`, scaled by `1/(2m)`.
///
/// Fails with `EmptyDataset` when there are no samples.
pub fn cost<F: Float>(dataset: &Dataset<F>, params: &ModelParameters<F>) -> Result<F> {
    let m = dataset.ensure_not_empty()?;
    let errors = params.predict_batch(dataset.mileage()) - dataset.price();
    Ok(errors.dot(&errors) / F::cast(2 * m))
}
