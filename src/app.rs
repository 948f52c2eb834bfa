//! Application state and service initialization
//!
//! This module centralizes all service initialization and dependency injection,
//! making it easier to manage the application lifecycle and test services.

use std::sync::Arc;

use rig::providers::openai;

use crate::model::Config;
use crate::service::{
    DisclosureDetector, LlmClient, MessageAnalysisService, OpenAiGenerator, TrainingSessionService,
};
use crate::service::analysis::ENV_ANALYSIS_MODEL;
use crate::service::training::ENV_TRAINING_MODEL;

/// Default model for both analysis and training generation
const DEFAULT_MODEL: &str = openai::GPT_4O_MINI;

/// Application state containing all services and shared resources
pub struct AppState {
    /// Phishing message analysis service
    pub analysis_service: Arc<MessageAnalysisService>,
    /// Awareness training session service
    pub training_service: Arc<TrainingSessionService>,
}

impl AppState {
    /// Initialize all services and build application state
    ///
    /// The LLM credential is checked here, before any generation call
    /// can be attempted; a missing key fails startup with a
    /// configuration error rather than surfacing later as a
    /// generation failure.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let llm_client = LlmClient::from_env().map_err(AppError::Configuration)?;

        let analysis_model =
            std::env::var(ENV_ANALYSIS_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let training_model =
            std::env::var(ENV_TRAINING_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        tracing::info!(
            analysis_model = %analysis_model,
            training_model = %training_model,
            "LLM client initialized"
        );

        let analysis_service = Arc::new(MessageAnalysisService::new(Arc::new(
            OpenAiGenerator::new(llm_client.clone(), analysis_model),
        )));

        let training_service = Arc::new(TrainingSessionService::new(
            Arc::new(OpenAiGenerator::new(llm_client, training_model)),
            DisclosureDetector::new(&config.detection),
            &config.training,
        ));

        Ok(Self {
            analysis_service,
            training_service,
        })
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// The generation collaborator cannot be configured
    #[error("Configuration error: {0}")]
    Configuration(#[from] crate::service::llm::ConfigurationError),
}
