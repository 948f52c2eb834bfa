//! Phishing message analysis service
//!
//! Builds a deterministic indicator prompt, invokes the generation
//! collaborator, and parses the labeled response into a typed report.

pub mod error;
pub mod parser;
pub mod prompts;

use std::sync::Arc;

use crate::model::{AnalysisReport, PHISHING_INDICATORS};
use crate::service::llm::Generator;
use prompts::{build_analysis_prompt, ANALYSIS_SYSTEM_PROMPT};

pub use error::AnalysisError;
pub use parser::{parse_report, ParseError};

/// Environment variable for the analysis model (defaults to gpt-4o-mini)
pub const ENV_ANALYSIS_MODEL: &str = "ANALYSIS_MODEL";

/// Service for scoring a candidate message against the phishing indicators
pub struct MessageAnalysisService {
    generator: Arc<dyn Generator>,
}

impl MessageAnalysisService {
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self { generator }
    }

    /// Analyze a candidate message for phishing characteristics.
    ///
    /// Each call is processed to completion: prompt build, one
    /// generation call (no history), one parse. Nothing is retried
    /// here; retry policy belongs to the caller.
    pub async fn analyze(&self, message: &str) -> Result<AnalysisReport, AnalysisError> {
        let start_time = std::time::Instant::now();

        let prompt = build_analysis_prompt(message, &PHISHING_INDICATORS);
        let prompt_length = prompt.len();

        tracing::debug!(
            prompt_length = prompt_length,
            "Initiating generation call for message analysis"
        );

        let raw_output = match self
            .generator
            .generate(ANALYSIS_SYSTEM_PROMPT, &[], &prompt)
            .await
        {
            Ok(output) => {
                let elapsed = start_time.elapsed();
                tracing::info!(
                    elapsed_ms = elapsed.as_millis(),
                    prompt_length = prompt_length,
                    output_length = output.len(),
                    "Generation call for message analysis completed"
                );
                output
            }
            Err(e) => {
                let elapsed = start_time.elapsed();
                tracing::error!(
                    elapsed_ms = elapsed.as_millis(),
                    prompt_length = prompt_length,
                    error = %e,
                    "Generation call for message analysis failed"
                );
                return Err(e.into());
            }
        };

        match parse_report(&raw_output) {
            Ok(report) => {
                tracing::debug!(
                    is_phishing = report.is_phishing,
                    confidence = ?report.confidence_level,
                    "Parsed analysis report"
                );
                Ok(report)
            }
            Err(ParseError::NoSectionsFound) => {
                tracing::warn!(
                    output_length = raw_output.len(),
                    "Model output had no recognizable sections, surfacing raw text"
                );
                Err(AnalysisError::Unstructured { raw: raw_output })
            }
        }
    }
}
