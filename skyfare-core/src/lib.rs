pub mod money;
pub mod offer;
pub mod payment;
pub mod query;
pub mod supplier;
pub mod traveler;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Malformed supplier payload: {0}")]
    PayloadError(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
