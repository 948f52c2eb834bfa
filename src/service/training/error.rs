//! Error types for training sessions

use thiserror::Error;
use uuid::Uuid;

use crate::service::llm::GenerationError;

/// Error type for training session operations
#[derive(Debug, Error)]
pub enum TrainingError {
    /// No session with this id exists
    #[error("session not found: {0}")]
    SessionNotFound(Uuid),

    /// The session reached a terminal state; no further turns accepted
    #[error("session {0} has ended and accepts no further turns")]
    SessionFinished(Uuid),

    /// Another turn for this session is still being processed
    #[error("session {0} is already processing a turn")]
    TurnInProgress(Uuid),

    /// The adversarial reply could not be generated
    #[error(transparent)]
    Generation(#[from] GenerationError),
}
