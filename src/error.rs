use thiserror::Error;

/// Error type in qqgjyx.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or empty input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A parameter outside its valid numeric bounds.
    #[error("{name} must be between {low} and {high}, got {value}")]
    InvalidRange {
        name: String,
        value: f64,
        low: f64,
        high: f64,
    },

    /// The dataset does not honour its length/indexing contract.
    #[error("unsupported dataset: {0}")]
    UnsupportedDataset(String),

    #[error("input contains no records")]
    EmptyFile,

    #[error("invalid split specification: {0}")]
    InvalidSplitSpecification(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    ParseFloat(#[from] std::num::ParseFloatError),
    #[error(transparent)]
    ProgressTemplate(#[from] indicatif::style::TemplateError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_range(name: &str, value: f64, low: f64, high: f64) -> Self {
        Error::InvalidRange {
            name: name.to_string(),
            value,
            low,
            high,
        }
    }
}
