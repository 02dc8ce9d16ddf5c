use std::io::{self, BufRead, Write};
use std::num::ParseFloatError;

pub const PROMPT: &str = "Enter the mileage of the car: ";

#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("invalid mileage {input:?}: expected a number")]
    InvalidMileage {
        input: String,
        source: ParseFloatError,
    },
    #[error("no mileage was entered")]
    Eof,
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub fn parse_mileage(input: &str) -> Result<f64, InputError> {
    let input = input.trim();
    input.parse().map_err(|source| InputError::InvalidMileage {
        input: input.to_string(),
        source,
    })
}

/// Prompts on `output` and reads one mileage line from `input`.
pub fn read_mileage<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<f64, InputError> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::Eof);
    }
    parse_mileage(&line)
}

pub fn estimate_message(mileage: f64, price: f64) -> String {
    format!("Estimated price for mileage {}: ${:.2}", mileage, price)
}
