use chrono::NaiveTime;
use thiserror::Error;

use crate::db::store::StoreError;
use crate::models::game::GameStatus;
use crate::schedule::clock::GamePhase;

/// Top-level error type surfaced to the presentation layer.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    #[error("persistence failure: {0}")]
    Dependency(#[from] StoreError),
}

impl CoreError {
    pub fn game_not_found(id: &str) -> Self {
        CoreError::NotFound {
            resource: "game",
            id: id.to_owned(),
        }
    }

    /// Dependency failures are transient; validation and not-found are not.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CoreError::Dependency(_))
    }
}

/// Rule violations detected before anything is persisted. Each variant is a
/// machine-readable kind the caller can map to a field-level message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("malformed game date '{value}', expected YYYY-MM-DD")]
    MalformedDate { value: String },

    #[error("malformed {field} '{value}', expected HH:MM or HH:MM:SS")]
    MalformedTime { field: &'static str, value: String },

    #[error("end time {end} must be after start time {start}")]
    EndBeforeStart { start: NaiveTime, end: NaiveTime },

    #[error("status '{status}' is not allowed while the game is {phase}")]
    StatusNotAllowed { status: GameStatus, phase: GamePhase },

    #[error("field '{field}' cannot be changed while the game is {phase}")]
    FieldFrozen { field: &'static str, phase: GamePhase },

    #[error("a game with id '{id}' already exists")]
    DuplicateGame { id: String },

    #[error("{field} must not be blank")]
    BlankIdentifier { field: &'static str },
}
