use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read input file")]
    FileError(#[from] std::io::Error),
    #[error("could not read CSV rows")]
    CsvError(#[from] csv::Error),
    #[error("{0}")]
    ConfigurationError(String),
    #[error("{file}, line {line}: {detail}")]
    ParseError {
        file: String,
        line: u64,
        detail: String,
    },
    #[error(transparent)]
    DataError(#[from] crate::domain::error::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
