use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read the {table} table header: {source}")]
    Header {
        table: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error("The {table} table is missing required column '{column}'")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },

    #[error("CSV parse error in the {table} table at line {line}: {source}")]
    Parse {
        table: &'static str,
        line: u64,
        #[source]
        source: csv::Error,
    },
}
