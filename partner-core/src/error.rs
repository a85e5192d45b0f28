//! Error types for the partner companion.

use thiserror::Error;

/// Errors that can occur in partner operations.
#[derive(Error, Debug)]
pub enum PartnerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("An event with id '{0}' already exists")]
    DuplicateEvent(String),

    #[error("Still waiting on a reply to the previous message")]
    ReplyPending,

    #[error("Reply {0} was cancelled before it was delivered")]
    ReplyCancelled(u64),

    #[error("Quiz error: {0}")]
    Quiz(String),

    #[error("Onboarding error: {0}")]
    Onboarding(String),
}

/// Result type alias for partner operations.
pub type PartnerResult<T> = Result<T, PartnerError>;
