//! Error types shared by the workspace.

/// Errors raised by dataset construction, training and prediction.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("dataset is empty: at least one (mileage, price) pair is required")]
    EmptyDataset,
    #[error("mileage has {mileage} values but price has {price}")]
    LengthMismatch { mileage: usize, price: usize },
    #[error("{predictions} predictions cannot be scored against {targets} targets")]
    ShapeMismatch { predictions: usize, targets: usize },
    #[error("learning rate must be a positive finite number, got {0}")]
    InvalidLearningRate(String),
    #[error("model has not been fitted yet")]
    NotFitted,
}

pub type Result<T> = std::result::Result<T, Error>;
