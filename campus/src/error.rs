use thiserror::Error;

use crate::models::EventId;

/// Everything that can go wrong while driving the event manager.
///
/// All of these are local to the operation that raised them: the console
/// reports the message and keeps going.
#[derive(Debug, Error)]
pub enum CampusError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Invalid event ID: {0}")]
    InvalidEventId(EventId),
    #[error("Invalid category '{0}'")]
    InvalidCategory(String),
    #[error("Invalid rating {0}. Please enter a number between 1 and 5")]
    InvalidRating(i64),
    #[error("Invalid choice '{0}'")]
    InvalidMenuChoice(String),
    #[error("Expected a number, got '{0}'")]
    InvalidNumber(String),
    #[error("Invalid capacity {0}. Capacity must be at least 1")]
    InvalidCapacity(i64),
    #[error("User is not known to this event manager")]
    UnknownUser,
    #[error("Malformed seed data: {0}")]
    Seed(#[from] ron::error::SpannedError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = CampusError> = std::result::Result<T, E>;
