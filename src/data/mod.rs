//! Loading labeled examples from delimited text.
//!
//! The first row names the columns. Every column but the last is a feature, the last one holds
//! the label. All values must be numeric; labels equal to `0` are stored as `-1`.

use crate::common_types::{DataPoint, Dataset, normalize_label};
use crate::error::{PerceptronError, Result};
use num_traits::Float;
use std::fs::File;
use std::io;
use std::path::Path;
use std::str::FromStr;

/// How the delimited text is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Field separator, a single byte.
    pub delimiter: u8,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        LoaderOptions { delimiter: b',' }
    }
}

/// Loads a dataset and its feature names from a file.
///
/// The file is closed when this returns, whether loading succeeded or not.
///
/// # Errors
/// Returns an error if the file cannot be opened, a row does not have as many fields as the
/// header, or a field is not a number. Nothing is returned for the rows read before the failure.
pub fn load_dataset<F, P>(path: P, options: &LoaderOptions) -> Result<(Dataset<F>, Vec<String>)>
where
    F: Float + FromStr,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PerceptronError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_from(file, options, &path.display().to_string())
}

/// Same as [`load_dataset`] for any reader (an in-memory buffer, stdin, ...).
pub fn read_dataset<F, R>(reader: R, options: &LoaderOptions) -> Result<(Dataset<F>, Vec<String>)>
where
    F: Float + FromStr,
    R: io::Read,
{
    read_from(reader, options, "<reader>")
}

fn read_from<F, R>(
    reader: R,
    options: &LoaderOptions,
    source_name: &str,
) -> Result<(Dataset<F>, Vec<String>)>
where
    F: Float + FromStr,
    R: io::Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false) // a row with the wrong number of fields is an error
        .quoting(false) // fields are plain numbers, "1" is not one
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(PerceptronError::MissingHeader {
            path: source_name.to_string(),
        });
    }
    // The last column is the label; its name is not needed downstream
    let n_features = headers.len() - 1;
    let feature_names: Vec<String> = headers.iter().take(n_features).map(str::to_string).collect();

    let mut dataset: Dataset<F> = Vec::new();
    // The csv reader drops empty lines; a gap in line numbers is a blank row
    let mut prev_line = headers.position().map_or(1, |pos| pos.line());
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(prev_line + 1, |pos| pos.line());
        if line > prev_line + 1 {
            return Err(PerceptronError::Parse {
                line: prev_line + 1,
                column: headers.get(0).unwrap_or_default().to_string(),
                value: String::new(),
            });
        }
        prev_line = line;

        let mut values = Vec::with_capacity(record.len());
        for (idx, field) in record.iter().enumerate() {
            let value = field.parse::<F>().map_err(|_| PerceptronError::Parse {
                line,
                column: headers.get(idx).unwrap_or_default().to_string(),
                value: field.to_string(),
            })?;
            values.push(value);
        }

        // flexible(false) guarantees values.len() == headers.len() >= 1
        let label = match values.pop() {
            Some(raw) => normalize_label(raw),
            None => {
                return Err(PerceptronError::DimensionMismatch {
                    expected: headers.len(),
                    actual: 0,
                });
            }
        };
        dataset.push(DataPoint::new(values, label));
    }

    Ok((dataset, feature_names))
}
