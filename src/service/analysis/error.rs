//! Error types for message analysis

use thiserror::Error;

use crate::service::llm::GenerationError;

/// Error type for message analysis
///
/// Configuration problems (missing credential) are not represented
/// here: the credential is validated once at startup, before this
/// service can be constructed.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The generation collaborator call failed
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// The model produced no recognizable structure; the raw text is
    /// carried so callers can fall back to displaying it
    #[error("model output contained no recognizable sections")]
    Unstructured { raw: String },
}
