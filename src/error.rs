use thiserror::Error;

/// Structural problems in an input file. Data gaps are not errors.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading CSV input")]
    Csv(#[from] csv::Error),

    #[error("line {line}: year '{value}' is out of range")]
    InvalidYear { line: u64, value: String },

    #[error("line {line}: figure for {year}-{month:02} is not a number: '{value}'")]
    InvalidFigure {
        line: u64,
        year: i32,
        month: u32,
        value: String,
    },

    #[error("line {line}: invalid term record '{record}'")]
    InvalidTerm {
        line: u64,
        record: String,
        #[source]
        source: csv::Error,
    },
}
