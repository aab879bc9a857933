use crate::error::LoadError;
use serde::de::DeserializeOwned;
use std::io::Read;

/// Reads every row of a headed CSV table into `T`.
///
/// The header is checked for `required` columns before any row is parsed, so a
/// header-only file with the right columns yields an empty table.
pub(crate) fn read_table<R, T>(
    reader: R,
    table: &'static str,
    required: &[&'static str],
) -> Result<Vec<T>, LoadError>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|source| LoadError::Header { table, source })?;
    if let Some(column) = required
        .iter()
        .copied()
        .find(|column| !headers.iter().any(|h| h == *column))
    {
        return Err(LoadError::MissingColumn { table, column });
    }

    let mut rows = Vec::new();
    for (index, result) in csv_reader.deserialize().enumerate() {
        let row: T = result.map_err(|source| {
            let line = source
                .position()
                .map(|p| p.line())
                .unwrap_or(index as u64 + 2);
            LoadError::Parse { table, line, source }
        })?;
        rows.push(row);
    }

    Ok(rows)
}
