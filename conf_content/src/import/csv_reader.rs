use std::{fs::File, io::ErrorKind, path::Path};

use serde::de::DeserializeOwned;

use crate::error::ContentError;

/// Reads every row of the CSV file at `path` into `T`, keyed by header name.
///
/// Fails on the first row that does not decode; no partial result is returned.
pub fn read_records<T>(path: &Path) -> Result<Vec<T>, ContentError>
where
    T: DeserializeOwned,
{
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ContentError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ContentError::filesystem(path, e),
    })?;

    parse_records(file, path)
}

/// Like [`read_records`], but over any reader. `source` only names the input in errors.
pub fn parse_records<T, R>(reader: R, source: &Path) -> Result<Vec<T>, ContentError>
where
    T: DeserializeOwned,
    R: std::io::Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = vec![];
    for (row_idx, row) in reader.deserialize().enumerate() {
        let record: T = row.map_err(|e| ContentError::Parse {
            path: source.to_path_buf(),
            row: row_idx + 1,
            source: e,
        })?;
        records.push(record);
    }

    Ok(records)
}
