// File: src/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumerologyError {
    #[error("please enter a valid date in the format dd/mm/yyyy, got '{0}'")]
    InvalidDateFormat(String),

    #[error("{part} must be a number, got '{value}'")]
    InvalidDatePart { part: &'static str, value: String },

    #[error("{0} is not valid UTF-8")]
    InvalidUtf8(&'static str),

    #[error("null pointer passed for {0}")]
    NullArgument(&'static str),
}

pub type Result<T> = std::result::Result<T, NumerologyError>;
