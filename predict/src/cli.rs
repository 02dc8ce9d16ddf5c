use std::path::PathBuf;

use clap::Parser;

/// Defaults of the training run.
pub const DEFAULT_ALPHA: f64 = 0.00001;
pub const DEFAULT_ITERATIONS: usize = 10000;

#[derive(Debug, Parser)]
#[command(
    name = "carprice",
    about = "Fit price against mileage by gradient descent and estimate a car's price",
    version
)]
pub struct Cli {
    /// CSV file with a header line and mileage,price records (`.gz` is decompressed)
    #[arg(short, long, value_name = "PATH", default_value = "data.csv")]
    pub data: PathBuf,

    /// Train on the bundled car dataset instead of a file
    #[arg(long, conflicts_with = "data")]
    pub builtin: bool,

    /// Learning rate
    #[arg(short, long, default_value_t = DEFAULT_ALPHA)]
    pub alpha: f64,

    /// Number of gradient descent iterations
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,

    /// Mileage to estimate; prompted for on stdin when omitted
    #[arg(short, long, allow_negative_numbers = true)]
    pub mileage: Option<f64>,
}
