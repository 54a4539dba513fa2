use thiserror::Error;

pub type Result<T> = std::result::Result<T, SeeActError>;

#[derive(Debug, Error)]
pub enum SeeActError {
    #[error("config field `{0}` is missing")]
    MissingField(String),
    #[error("config field `{field}` is invalid: {reason}")]
    InvalidField { field: String, reason: String },
    #[error("agent `{0}` not registered")]
    AgentNotRegistered(String),
    #[error("actor `{operation}` failed: {message}")]
    Actor {
        operation: &'static str,
        message: String,
    },
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SeeActError {
    pub fn actor<T: Into<String>>(operation: &'static str, message: T) -> Self {
        Self::Actor {
            operation,
            message: message.into(),
        }
    }
}
