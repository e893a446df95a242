use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("grid width must be a positive integer, got {0}")]
    InvalidWidth(i64),
}
