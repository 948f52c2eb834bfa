pub mod analysis;
pub mod detection;
pub mod llm;
pub mod training;

pub use analysis::MessageAnalysisService;
pub use detection::{DisclosureDetector, DisclosureResult};
pub use llm::{Generator, LlmClient, OpenAiGenerator};
pub use training::TrainingSessionService;
