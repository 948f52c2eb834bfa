//! Shared LLM client and the generation collaborator boundary
//!
//! Provides a common interface for OpenAI API interactions used across
//! services. The `Generator` trait is the seam that lets tests swap the
//! provider for a deterministic stub.

use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::{Chat, Message};
use rig::providers::openai;
use thiserror::Error;

/// Environment variable holding the provider credential
pub const ENV_API_KEY: &str = "OPENAI_API_KEY";

/// Required configuration for the generation collaborator is missing or unusable
///
/// Raised before any generation call is attempted; never retryable.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("missing required environment variable: {0}")]
    MissingApiKey(&'static str),

    #[error("failed to create OpenAI client: {0}")]
    InvalidCredentials(String),
}

/// The generation collaborator call failed
///
/// The provider's error text is preserved; retry policy is the caller's
/// decision, nothing is retried here.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation request failed: {0}")]
    RequestFailed(String),
}

/// Role of one message in a generation request history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One prior message handed to the generation collaborator
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }
}

/// Opaque text-generation collaborator
///
/// Everything the core knows about the language model: given a system
/// prompt, prior history, and the new user text, it returns text or
/// fails. No timeout, retry, or cancellation is defined at this
/// boundary.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(
        &self,
        system_prompt: &str,
        history: &[ChatTurn],
        new_user_text: &str,
    ) -> Result<String, GenerationError>;
}

/// Shared LLM client wrapper
#[derive(Clone)]
pub struct LlmClient {
    client: openai::Client,
}

impl LlmClient {
    /// Create a new LLM client with the provided API key
    pub fn new(api_key: &str) -> Result<Self, ConfigurationError> {
        let client = openai::Client::builder(api_key)
            .build()
            .map_err(|e| ConfigurationError::InvalidCredentials(e.to_string()))?;

        Ok(Self { client })
    }

    /// Create a client from `OPENAI_API_KEY`, failing before any call is made
    pub fn from_env() -> Result<Self, ConfigurationError> {
        let api_key =
            std::env::var(ENV_API_KEY).map_err(|_| ConfigurationError::MissingApiKey(ENV_API_KEY))?;
        Self::new(&api_key)
    }

    /// Get a reference to the underlying OpenAI client
    pub fn openai_client(&self) -> &openai::Client {
        &self.client
    }
}

/// rig-backed generator for a fixed model
#[derive(Clone)]
pub struct OpenAiGenerator {
    client: LlmClient,
    model: String,
}

impl OpenAiGenerator {
    pub fn new(client: LlmClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Generator for OpenAiGenerator {
    async fn generate(
        &self,
        system_prompt: &str,
        history: &[ChatTurn],
        new_user_text: &str,
    ) -> Result<String, GenerationError> {
        let agent = self
            .client
            .openai_client()
            .agent(&self.model)
            .preamble(system_prompt)
            .build();

        let chat_history: Vec<Message> = history
            .iter()
            .map(|turn| match turn.role {
                ChatRole::User => Message::user(turn.text.clone()),
                ChatRole::Assistant => Message::assistant(turn.text.clone()),
            })
            .collect();

        agent
            .chat(new_user_text, chat_history)
            .await
            .map_err(|e| GenerationError::RequestFailed(e.to_string()))
    }
}
