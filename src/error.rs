use thiserror::Error;

/// Errors surfaced by the stores and the relation services.
///
/// Every variant carries a message naming the offending field or id. None of
/// them is fatal: the adapter layer turns them into responses via
/// [`FilmorateError::status_code`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilmorateError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Conditions not met: {0}")]
    ConditionsNotMet(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Duplicate: {0}")]
    Duplicate(String),
    #[error("Unsupported operation: {0}")]
    Unsupported(String),
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

pub type FilmorateResult<T> = std::result::Result<T, FilmorateError>;

impl FilmorateError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(kind: &str, id: u64) -> Self {
        Self::NotFound(format!("{} with id = {} not found", kind, id))
    }

    /// HTTP status the adapter layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) | Self::ConditionsNotMet(_) => 400,
            Self::NotFound(_) => 404,
            Self::Unsupported(_) => 405,
            Self::Duplicate(_) => 409,
            Self::ActorCommunication(_) => 500,
        }
    }
}
