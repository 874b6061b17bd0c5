use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    #[error("element {value} at index {index} is not comparable")]
    NotComparable { index: usize, value: String },

    #[error("'{token}' is not a number")]
    NotANumber { token: String },

    #[error("sequence is empty")]
    EmptySequence,
}

pub type Result<T> = std::result::Result<T, InvalidInputError>;
