use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Confidence level a model attached to its conclusion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
    /// No recognizable confidence statement was found in the conclusion
    Unknown,
}

/// Structured view of a model's phishing analysis
///
/// Built once from the raw model output and never mutated afterwards;
/// missing sections keep their defaults rather than failing the parse.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalysisReport {
    /// Body of the `Analysis:` section, empty if absent
    pub analysis: String,
    /// Body of the `Conclusion:` section, empty if absent
    pub conclusion: String,
    /// Confidence extracted from the conclusion body
    pub confidence_level: ConfidenceLevel,
    /// Verdict extracted from the conclusion body
    pub is_phishing: bool,
    /// Body of the `Recommendation:` section, empty if absent
    pub recommendation: String,
}

impl Default for AnalysisReport {
    fn default() -> Self {
        Self {
            analysis: String::new(),
            conclusion: String::new(),
            confidence_level: ConfidenceLevel::Unknown,
            is_phishing: false,
            recommendation: String::new(),
        }
    }
}
