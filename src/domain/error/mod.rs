use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("{file}, line {line}: unknown country code \"{country}\"")]
    UnknownCountry {
        country: String,
        file: String,
        line: u64,
    },
    #[error("{file}, line {line}: no exchange rate for sales in {country} made in {currency}")]
    MissingRate {
        country: String,
        currency: String,
        file: String,
        line: u64,
    },
    #[error("{file}, line {line}: duplicate exchange rate for {country}/{currency}")]
    DuplicateRate {
        country: String,
        currency: String,
        file: String,
        line: u64,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
