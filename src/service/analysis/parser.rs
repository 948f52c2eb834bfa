//! Tolerant parsing of the model's labeled free-text report
//!
//! The model's output format is not contractually guaranteed beyond
//! three labeled sections, so parsing is deliberately forgiving: extra
//! chatter is ignored, missing sections default, and only the total
//! absence of all three labels is a hard failure.

use thiserror::Error;

use crate::model::{AnalysisReport, ConfidenceLevel};

const ANALYSIS_LABEL: &str = "Analysis:";
const CONCLUSION_LABEL: &str = "Conclusion:";
const RECOMMENDATION_LABEL: &str = "Recommendation:";

/// The model output contained none of the expected section labels
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("model output contains none of the expected section labels")]
    NoSectionsFound,
}

/// Parse raw model output into an `AnalysisReport`.
///
/// Splits on blank-line boundaries, prefix-matches each block against
/// the three labels (case-sensitive), and strips label plus surrounding
/// whitespace for the body. Unrecognized blocks are skipped so extra
/// model chatter stays forward-compatible.
pub fn parse_report(raw_output: &str) -> Result<AnalysisReport, ParseError> {
    let mut report = AnalysisReport::default();
    let mut matched_any = false;

    for section in split_sections(raw_output) {
        if let Some(body) = section.strip_prefix(ANALYSIS_LABEL) {
            report.analysis = body.trim().to_string();
            matched_any = true;
        } else if let Some(body) = section.strip_prefix(CONCLUSION_LABEL) {
            let conclusion = body.trim().to_string();
            report.confidence_level = extract_confidence(&conclusion);
            report.is_phishing = extract_verdict(&conclusion);
            report.conclusion = conclusion;
            matched_any = true;
        } else if let Some(body) = section.strip_prefix(RECOMMENDATION_LABEL) {
            report.recommendation = body.trim().to_string();
            matched_any = true;
        }
    }

    if !matched_any {
        return Err(ParseError::NoSectionsFound);
    }

    Ok(report)
}

/// Split text into candidate sections on blank-line boundaries.
///
/// A boundary is any line that is empty after trimming, so both `\n\n`
/// and whitespace-only separator lines delimit sections.
fn split_sections(text: &str) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                sections.push(std::mem::take(&mut current));
            }
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }

    if !current.is_empty() {
        sections.push(current);
    }

    sections
}

/// Extract the confidence level from a conclusion body.
///
/// Case-insensitive; the earliest occurring of "high"/"medium"/"low"
/// wins, absence maps to `Unknown`.
fn extract_confidence(conclusion: &str) -> ConfidenceLevel {
    let lower = conclusion.to_lowercase();

    let candidates = [
        (ConfidenceLevel::High, "high"),
        (ConfidenceLevel::Medium, "medium"),
        (ConfidenceLevel::Low, "low"),
    ];

    candidates
        .iter()
        .filter_map(|(level, needle)| lower.find(needle).map(|pos| (pos, *level)))
        .min_by_key(|(pos, _)| *pos)
        .map(|(_, level)| level)
        .unwrap_or(ConfidenceLevel::Unknown)
}

/// Extract the phishing verdict from a conclusion body.
///
/// Classified as phishing when the word appears unless the explicit
/// negation "not a phishing" also appears. The negation heuristic can
/// misread compound sentences ("not a phishing attempt, but still
/// suspicious"); that ambiguity is a documented property of the
/// contract, not something to harden away.
fn extract_verdict(conclusion: &str) -> bool {
    let lower = conclusion.to_lowercase();
    lower.contains("phishing") && !lower.contains("not a phishing")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_report() {
        let raw = "Analysis:\nfoo\n\nConclusion:\nThis is a phishing attempt. Confidence: High\n\nRecommendation:\ndelete it";
        let report = parse_report(raw).unwrap();

        assert_eq!(report.analysis, "foo");
        assert_eq!(
            report.conclusion,
            "This is a phishing attempt. Confidence: High"
        );
        assert_eq!(report.confidence_level, ConfidenceLevel::High);
        assert!(report.is_phishing);
        assert_eq!(report.recommendation, "delete it");
    }

    #[test]
    fn test_negated_conclusion_only() {
        let raw = "Conclusion:\nThis is not a phishing message. Confidence: Low";
        let report = parse_report(raw).unwrap();

        assert!(!report.is_phishing);
        assert_eq!(report.confidence_level, ConfidenceLevel::Low);
        // Missing sections keep their defaults
        assert_eq!(report.analysis, "");
        assert_eq!(report.recommendation, "");
    }

    #[test]
    fn test_garbled_output_fails() {
        let err = parse_report("garbled nonsense with no labels").unwrap_err();
        assert!(matches!(err, ParseError::NoSectionsFound));
    }

    #[test]
    fn test_extra_chatter_is_ignored() {
        let raw = "Sure, here is my assessment.\n\nAnalysis:\nlooks bad\n\nNote: I am an AI model.\n\nConclusion:\nPhishing. Confidence: Medium";
        let report = parse_report(raw).unwrap();

        assert_eq!(report.analysis, "looks bad");
        assert!(report.is_phishing);
        assert_eq!(report.confidence_level, ConfidenceLevel::Medium);
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        let err = parse_report("ANALYSIS:\nshouting does not count").unwrap_err();
        assert!(matches!(err, ParseError::NoSectionsFound));
    }

    #[test]
    fn test_whitespace_only_separator_lines() {
        let raw = "Analysis:\nfoo\n   \nConclusion:\nlegitimate message";
        let report = parse_report(raw).unwrap();

        assert_eq!(report.analysis, "foo");
        assert_eq!(report.conclusion, "legitimate message");
        assert!(!report.is_phishing);
        assert_eq!(report.confidence_level, ConfidenceLevel::Unknown);
    }

    #[test]
    fn test_confidence_earliest_match_wins() {
        assert_eq!(
            extract_confidence("Low likelihood, though some high-risk traits"),
            ConfidenceLevel::Low
        );
        assert_eq!(
            extract_confidence("Confidence: HIGH"),
            ConfidenceLevel::High
        );
        assert_eq!(extract_confidence("no statement here"), ConfidenceLevel::Unknown);
    }

    #[test]
    fn test_verdict_requires_the_word_phishing() {
        assert!(!extract_verdict("This message is suspicious"));
        assert!(extract_verdict("This is a PHISHING attempt"));
        assert!(!extract_verdict("This is not a phishing attempt"));
        // Documented heuristic limit: negation overrides even when the
        // sentence continues with a positive claim.
        assert!(!extract_verdict(
            "This is not a phishing attempt, but still phishing-adjacent"
        ));
    }

    #[test]
    fn test_multiline_section_bodies() {
        let raw = "Analysis:\nline one\nline two\n\nConclusion:\nphishing, medium confidence";
        let report = parse_report(raw).unwrap();
        assert_eq!(report.analysis, "line one\nline two");
    }
}
