use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Bin not found: {0}")]
    BinNotFound(i32),

    #[error("Repository error: {0}")]
    RepositoryError(#[from] anyhow::Error),
}
