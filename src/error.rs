use chrono::NaiveDate;
use thiserror::Error;

/// Why a coefficient vector was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoefficientFault {
    #[error("expected {expected} coefficients, got {actual}")]
    Arity { expected: usize, actual: usize },

    #[error("coefficient {index} is not finite ({value})")]
    NonFinite { index: usize, value: f64 },
}

/// Validation failures for a single case.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CaseError {
    #[error("End date {end} is before start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid coefficients: {0}")]
    InvalidCoefficient(#[from] CoefficientFault),

    #[error("Cannot compute metrics of an empty series")]
    EmptySeries,

    #[error("Dates do not advance by one day at row {index}")]
    NonContiguousDates { index: usize },
}

/// Failures while writing or reading an exported series.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed series: {0}")]
    Series(#[from] CaseError),
}
