use log::{debug, trace};
use ndarray::Zip;

use carprice::{Dataset, Float, Result};

use crate::params::{HyperParameters, ModelParameters};

/// Runs exactly `hyper.iterations()` batch gradient descent steps from `initial`.
///
/// Every step accumulates the gradient over the whole dataset with the
/// parameters it started from, then updates both of them at once. There is
/// no early stopping. With zero iterations `initial` is returned unchanged.
///
/// Fails with `EmptyDataset` when there are no samples, even if no
/// iteration would run.
pub fn gradient_descent<F: Float>(
    dataset: &Dataset<F>,
    initial: ModelParameters<F>,
    hyper: &HyperParameters<F>,
) -> Result<ModelParameters<F>> {
    let m = F::cast(dataset.ensure_not_empty()?);
    debug!(
        "gradient descent over {} samples: alpha = {}, {} iterations, start at {}",
        dataset.len(),
        hyper.alpha(),
        hyper.iterations(),
        initial
    );

    let mut params = initial;
    for iteration in 0..hyper.iterations() {
        params = step(dataset, params, hyper.alpha(), m);
        trace!("iteration {}: {}", iteration + 1, params);
    }

    debug!("gradient descent finished at {}", params);
    Ok(params)
}

fn step<F: Float>(
    dataset: &Dataset<F>,
    current: ModelParameters<F>,
    alpha: F,
    m: F,
) -> ModelParameters<F> {
    let mut sum0 = F::zero();
    let mut sum1 = F::zero();
    Zip::from(dataset.mileage())
        .and(dataset.price())
        .apply(|&x, &y| {
            let error = current.predict(x) - y;
            sum0 = sum0 + error;
            sum1 = sum1 + error * x;
        });

    ModelParameters {
        theta0: current.theta0 - alpha * (sum0 / m),
        theta1: current.theta1 - alpha * (sum1 / m),
    }
}
