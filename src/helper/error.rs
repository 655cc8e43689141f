//! Simple error types and helpers for consistent error handling.
//!
//! It uses the thiserror crate to reduce boilerplate.
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QmError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Can not merge terms {left} and {right} (distance {distance})")]
    UnmergeableTermPair {
        left: String,
        right: String,
        distance: usize,
    },

    #[error("The function has no minterm (constant 0)")]
    EmptyFunction,

    #[error("The function is always true (constant 1)")]
    TautologyFunction,

    #[error("No function was provided")]
    MissingFunction(),

    #[error(transparent)]
    Generic(#[from] GenericError),
}

#[derive(Error, Debug)]
pub struct GenericError {
    s: String,
}

impl GenericError {
    pub fn new(s: String) -> Self {
        GenericError { s }
    }
}

impl fmt::Display for GenericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.s)
    }
}

pub type QmResult<T> = Result<T, QmError>;

pub type EmptyQmResult = QmResult<()>;

pub fn generic_error(s: String) -> QmError {
    QmError::Generic(GenericError::new(s))
}

pub fn invalid_input(s: String) -> QmError {
    QmError::InvalidInput(s)
}
