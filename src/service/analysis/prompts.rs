//! Prompts for phishing message analysis

use crate::model::Indicator;

/// System prompt for message analysis
pub const ANALYSIS_SYSTEM_PROMPT: &str = r#"You are a cybersecurity expert specializing in identifying phishing attempts.

You must:
- Base your analysis strictly on the message provided
- Evaluate the message against each listed characteristic
- State a clear conclusion with a confidence level
- Keep the required section labels exactly as requested

Do not:
- Invent message content that was not provided
- Omit any of the three required sections
- Add sections beyond the required three"#;

/// Build the analysis prompt embedding the indicator list and the
/// target message.
///
/// Pure string composition; the same message and indicator sequence
/// always renders the same prompt. The required output shape names the
/// three labeled sections the report parser recognizes.
pub fn build_analysis_prompt(message: &str, indicators: &[Indicator]) -> String {
    let characteristics = indicators
        .iter()
        .enumerate()
        .map(|(i, indicator)| format!("{}. {}", i + 1, indicator.description))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Analyze the following message and determine if it's likely a phishing attempt.
Consider these characteristics of phishing messages:

{characteristics}

Message to analyze:
{message}

First, provide a detailed analysis of the message based on the characteristics above.
Then, provide your conclusion with a confidence level (High, Medium, Low) on whether this is a phishing attempt or legitimate message.

Your response should be in this format:

Analysis:
[Your detailed analysis here]

Conclusion:
[Your conclusion with confidence level]

Recommendation:
[What the user should do with this message]"#,
        characteristics = characteristics,
        message = message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PHISHING_INDICATORS;

    #[test]
    fn test_prompt_is_deterministic() {
        let a = build_analysis_prompt("click here now", &PHISHING_INDICATORS);
        let b = build_analysis_prompt("click here now", &PHISHING_INDICATORS);
        assert_eq!(a, b);
    }

    #[test]
    fn test_prompt_embeds_message_and_all_indicators() {
        let prompt = build_analysis_prompt("verify your account", &PHISHING_INDICATORS);

        assert!(prompt.contains("verify your account"));
        for indicator in &PHISHING_INDICATORS {
            assert!(prompt.contains(indicator.description));
        }
        assert!(prompt.contains("Analysis:"));
        assert!(prompt.contains("Conclusion:"));
        assert!(prompt.contains("Recommendation:"));
    }

    #[test]
    fn test_indicators_render_numbered_in_order() {
        let prompt = build_analysis_prompt("x", &PHISHING_INDICATORS);
        let first = prompt.find("1. Creates a sense of urgency").unwrap();
        let last = prompt.find("8. Lacks specific personalization").unwrap();
        assert!(first < last);
    }
}
