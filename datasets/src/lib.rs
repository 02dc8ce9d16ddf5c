//! Loading of (mileage, price) datasets from delimited files.
//!
//! Files have one header record followed by records whose first two fields
//! are the mileage and the price. Anything after the second field is ignored.

use std::ffi::OsStr;
use std::fs::File;
use std::io::Read;
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use log::debug;
use ndarray::Array1;

use carprice::{Dataset, Float};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: expected mileage and price, found {found} field(s)")]
    MissingField { line: u64, found: usize },
    #[error("line {line}: {column} value {value:?} is not a number")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
        source: ParseFloatError,
    },
    #[error(transparent)]
    Dataset(#[from] carprice::Error),
}

/// Reads a dataset, skipping exactly one header record.
///
/// Stops at the first record that is short or not numeric. A file with no
/// data records fails with `EmptyDataset`.
pub fn from_reader<F: Float, R: Read>(reader: R) -> Result<Dataset<F>, Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut mileage = Vec::new();
    let mut price = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        // header is line 1
        let line = record.position().map_or(i as u64 + 2, |pos| pos.line());
        if record.len() < 2 {
            return Err(Error::MissingField {
                line,
                found: record.len(),
            });
        }
        mileage.push(parse_field(&record[0], "mileage", line)?);
        price.push(parse_field(&record[1], "price", line)?);
    }

    let dataset = Dataset::new(Array1::from(mileage), Array1::from(price))?;
    dataset.ensure_not_empty()?;
    debug!("read {} samples", dataset.len());
    Ok(dataset)
}

fn parse_field<F: Float>(value: &str, column: &'static str, line: u64) -> Result<F, Error> {
    value.parse().map_err(|source| Error::InvalidNumber {
        line,
        column,
        value: value.to_string(),
        source,
    })
}

/// Loads a dataset from `path`, gunzipping it first if the name ends in `.gz`.
pub fn load<F: Float, P: AsRef<Path>>(path: P) -> Result<Dataset<F>, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loading {}", path.display());

    if path.extension() == Some(OsStr::new("gz")) {
        from_reader(GzDecoder::new(file))
    } else {
        from_reader(file)
    }
}

/// Mileage (km) and advertised price of 24 used cars.
#[cfg(feature = "cars")]
pub fn cars() -> Result<Dataset<f64>, Error> {
    let data = include_bytes!("../data/cars.csv.gz");
    from_reader(GzDecoder::new(&data[..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use flate2::write::GzEncoder;
    use flate2::Compression;

    #[test]
    fn from_reader_works() {
        let data = "km,price\n240000,3650\n139800,3800\n";

        let dataset: Dataset<f64> = from_reader(data.as_bytes()).unwrap();

        assert_eq!(dataset.mileage(), &Array1::from(vec![240000.0, 139800.0]));
        assert_eq!(dataset.price(), &Array1::from(vec![3650.0, 3800.0]));
    }

    #[test]
    fn from_reader_tolerates_whitespace_and_extra_fields() {
        let data = "km , price, note\n 1.5 ,  2 ,cheap\n\n3,4\n";

        let dataset: Dataset<f32> = from_reader(data.as_bytes()).unwrap();

        assert_eq!(dataset.mileage(), &Array1::from(vec![1.5, 3.0]));
        assert_eq!(dataset.price(), &Array1::from(vec![2.0, 4.0]));
    }

    #[test]
    fn non_numeric_field_reports_line() {
        let data = "km,price\nabc,123\n";

        let err = from_reader::<f64, _>(data.as_bytes()).unwrap_err();

        match err {
            Error::InvalidNumber {
                line,
                column,
                ref value,
                ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(column, "mileage");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {}", other),
        }
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn non_numeric_price_stops_ingestion() {
        let data = "km,price\n1,2\n3,\n5,x\n";

        let err = from_reader::<f64, _>(data.as_bytes()).unwrap_err();

        assert!(matches!(
            err,
            Error::InvalidNumber {
                line: 3,
                column: "price",
                ..
            }
        ));
    }

    #[test]
    fn short_record_is_rejected() {
        let data = "km,price\n1,2\n42\n";

        let err = from_reader::<f64, _>(data.as_bytes()).unwrap_err();

        assert!(matches!(err, Error::MissingField { line: 3, found: 1 }));
    }

    #[test]
    fn header_only_is_empty() {
        for data in &["km,price\n", ""] {
            let err = from_reader::<f64, _>(data.as_bytes()).unwrap_err();
            assert!(matches!(
                err,
                Error::Dataset(carprice::Error::EmptyDataset)
            ));
        }
    }

    #[test]
    fn load_reads_gzipped_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(b"km,price\n10,20\n30,40\n").unwrap();
        encoder.finish().unwrap();

        let dataset: Dataset<f64> = load(&path).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.price(), &Array1::from(vec![20.0, 40.0]));
    }

    #[test]
    fn load_reads_plain_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, "km,price\n10,20\n").unwrap();

        let dataset: Dataset<f64> = load(&path).unwrap();

        assert_eq!(dataset.mileage(), &Array1::from(vec![10.0]));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");

        let err = load::<f64, _>(&path).unwrap_err();

        assert!(matches!(err, Error::Open { .. }));
        assert!(err.to_string().contains("missing.csv"));
    }

    #[cfg(feature = "cars")]
    #[test]
    fn cars_works() {
        let dataset = cars().unwrap();

        assert_eq!(dataset.len(), 24);
        assert_eq!(dataset.mileage()[0], 240000.0);
        assert_eq!(dataset.price()[23], 8290.0);
    }
}
