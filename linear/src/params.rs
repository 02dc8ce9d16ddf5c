use std::fmt;

use ndarray::Array1;

use carprice::{Error, Float, Result};

/// Intercept and slope of the fitted line, `price = theta0 + theta1 * mileage`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ModelParameters<F> {
    pub theta0: F,
    pub theta1: F,
}

impl<F: Float> ModelParameters<F> {
    pub fn new(theta0: F, theta1: F) -> Self {
        ModelParameters { theta0, theta1 }
    }

    /// Starting point of a training run.
    pub fn zeros() -> Self {
        ModelParameters::new(F::zero(), F::zero())
    }

    /// Estimated price for `mileage`.
    ///
    /// Not guarded: pathological inputs may give infinities or NaN.
    pub fn predict(&self, mileage: F) -> F {
        self.theta0 + self.theta1 * mileage
    }

    pub fn predict_batch(&self, mileage: &Array1<F>) -> Array1<F> {
        mileage.mapv(|x| self.predict(x))
    }

    pub fn is_finite(&self) -> bool {
        self.theta0.is_finite() && self.theta1.is_finite()
    }
}

impl<F: Float> fmt::Display for ModelParameters<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + mileage * {}", self.theta0, self.theta1)
    }
}

/// Applies `params` to a single mileage value.
pub fn predict<F: Float>(mileage: F, params: &ModelParameters<F>) -> F {
    params.predict(mileage)
}

/// Learning rate and iteration count of a training run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HyperParameters<F> {
    alpha: F,
    iterations: usize,
}

impl<F: Float> HyperParameters<F> {
    pub fn new(alpha: F, iterations: usize) -> Result<Self> {
        if !alpha.is_finite() || alpha <= F::zero() {
            return Err(Error::InvalidLearningRate(alpha.to_string()));
        }
        Ok(HyperParameters { alpha, iterations })
    }

    pub fn alpha(&self) -> F {
        self.alpha
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

impl<F: Float> Default for HyperParameters<F> {
    /// `alpha = 0.00001`, `10000` iterations.
    fn default() -> Self {
        HyperParameters {
            alpha: F::one() / F::cast(100_000),
            iterations: 10_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn predict_works() {
        let params = ModelParameters::new(1.0, 2.0);

        assert_eq!(params.predict(10.0), 21.0);
        assert_eq!(predict(0.0, &params), 1.0);
        assert_eq!(
            params.predict_batch(&Array1::from(vec![1.0, 2.0, 3.0])),
            Array1::from(vec![3.0, 5.0, 7.0])
        );
    }

    #[test]
    fn predict_is_linear_in_mileage() {
        let params = ModelParameters::new(8499.6, -0.0214);
        let origin = params.predict(0.0);

        for &k in &[-3.0, 0.5, 2.0, 17.0] {
            for &x in &[0.0, 1.0, 1234.5, 240000.0] {
                let lhs = params.predict(k * x) - origin;
                let rhs = k * (params.predict(x) - origin);
                assert_abs_diff_eq!(lhs, rhs, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn predict_does_not_guard_pathological_inputs() {
        let params = ModelParameters::new(0.0_f64, f64::MAX);

        assert!(params.predict(2.0).is_infinite());
        assert!(!ModelParameters::new(f64::NAN, 1.0).is_finite());
    }

    #[test]
    fn display_works() {
        assert_eq!(ModelParameters::new(1.5, -2.0).to_string(), "1.5 + mileage * -2");
    }

    #[test]
    fn hyper_parameters_reject_bad_learning_rates() {
        for &alpha in &[0.0, -0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                HyperParameters::new(alpha, 10),
                Err(Error::InvalidLearningRate(_))
            ));
        }
        assert_eq!(HyperParameters::new(0.1, 0).unwrap().iterations(), 0);
    }

    #[test]
    fn default_hyper_parameters() {
        let hyper = HyperParameters::<f64>::default();

        assert_eq!(hyper.alpha(), 0.00001);
        assert_eq!(hyper.iterations(), 10000);
    }
}
