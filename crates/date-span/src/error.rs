//! Error types for date-span operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateSpanError {
    #[error("Empty date input")]
    EmptyInput,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),
}

pub type Result<T> = std::result::Result<T, DateSpanError>;
