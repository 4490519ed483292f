// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// The catalog or existence-check collaborator failed.
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("could not find a free slug for `{base}` after {attempts} attempts")]
    SlugExhausted { base: String, attempts: u32 },
}
