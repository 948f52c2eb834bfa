//! Credential disclosure detection over free-form text
//!
//! A disclosure is an email-shaped identifier plus a strong-token
//! secret somewhere in the same text. The scan is pure and total:
//! every string input yields a result, nothing fails.

pub mod patterns;

use regex::Regex;

use crate::model::DetectionConfig;
use patterns::{secret_token_pattern, IDENTIFIER_PATTERN};

/// Outcome of scanning one piece of text
///
/// Derived on every call, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisclosureResult {
    pub has_identifier: bool,
    pub has_secret: bool,
}

impl DisclosureResult {
    /// A disclosure requires both halves of a credential pair
    pub fn revealed(&self) -> bool {
        self.has_identifier && self.has_secret
    }
}

/// Scanner for credential disclosures
///
/// Patterns are compiled once at construction from the configured
/// thresholds.
pub struct DisclosureDetector {
    identifier: Regex,
    secret_token: Regex,
    symbols: Vec<char>,
}

impl DisclosureDetector {
    pub fn new(config: &DetectionConfig) -> Self {
        let identifier = Regex::new(IDENTIFIER_PATTERN).expect("identifier pattern is valid");
        let secret_token = Regex::new(&secret_token_pattern(
            &config.secret_symbols,
            config.min_secret_length,
        ))
        .expect("secret pattern escapes its configured symbols");

        Self {
            identifier,
            secret_token,
            symbols: config.secret_symbols.chars().collect(),
        }
    }

    /// Scan text for a credential disclosure.
    ///
    /// Deterministic and side-effect free. A qualifying secret is a
    /// contiguous run of letters, digits, and configured symbols of at
    /// least the configured length that contains at least one of each
    /// character class; the first qualifying run suffices.
    ///
    /// Known tradeoff: any coincidental strong token (an order ID, a
    /// commit hash with a symbol) matches the secret pattern. That is
    /// an accepted heuristic false positive, not a defect.
    pub fn scan(&self, text: &str) -> DisclosureResult {
        let has_identifier = self.identifier.is_match(text);

        let has_secret = self
            .secret_token
            .find_iter(text)
            .any(|m| self.qualifies_as_secret(m.as_str()));

        DisclosureResult {
            has_identifier,
            has_secret,
        }
    }

    /// Conjunction check over one candidate run: letter, digit, and
    /// symbol must each appear somewhere within it, in any order.
    fn qualifies_as_secret(&self, token: &str) -> bool {
        let mut has_letter = false;
        let mut has_digit = false;
        let mut has_symbol = false;

        for c in token.chars() {
            if c.is_ascii_alphabetic() {
                has_letter = true;
            } else if c.is_ascii_digit() {
                has_digit = true;
            } else if self.symbols.contains(&c) {
                has_symbol = true;
            }

            if has_letter && has_digit && has_symbol {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> DisclosureDetector {
        DisclosureDetector::new(&DetectionConfig::default())
    }

    #[test]
    fn test_empty_input() {
        let result = detector().scan("");
        assert!(!result.has_identifier);
        assert!(!result.has_secret);
        assert!(!result.revealed());
    }

    #[test]
    fn test_email_and_strong_password_revealed() {
        let result = detector().scan("contact me at a@b.co, pw: Abc12345!");
        assert!(result.has_identifier);
        assert!(result.has_secret);
        assert!(result.revealed());
    }

    #[test]
    fn test_email_alone_is_not_revealed() {
        let result = detector().scan("a@b.co");
        assert!(result.has_identifier);
        assert!(!result.has_secret);
        assert!(!result.revealed());
    }

    #[test]
    fn test_secret_alone_is_not_revealed() {
        let result = detector().scan("Abc12345!");
        assert!(!result.has_identifier);
        assert!(result.has_secret);
        assert!(!result.revealed());
    }

    #[test]
    fn test_scan_is_pure() {
        let d = detector();
        let input = "my login is jane.doe@corp.example and my password is Xy7$pass99";
        assert_eq!(d.scan(input), d.scan(input));
    }

    #[test]
    fn test_credentials_buried_in_surrounding_text() {
        let result = detector().scan(
            "Sure, whatever, the account is jane.doe@corp.example \
             and I type Xy7$pass99 to get in, now fix my laptop",
        );
        assert!(result.revealed());
    }

    #[test]
    fn test_weak_password_does_not_qualify() {
        // No symbol from the set
        let result = detector().scan("a@b.co password123");
        assert!(result.has_identifier);
        assert!(!result.has_secret);

        // No digit
        let result = detector().scan("a@b.co Password!");
        assert!(!result.has_secret);

        // Long enough only when split runs are not joined
        let result = detector().scan("a@b.co abcdefg 1234567 !!!");
        assert!(!result.has_secret);
    }

    #[test]
    fn test_multiple_candidates_first_match_suffices() {
        let result = detector().scan("ids: aaaaaaaa, Abc12345!, Zz9$zzzzz");
        assert!(result.has_secret);
    }

    #[test]
    fn test_coincidental_strong_token_false_positive_is_accepted() {
        // An unrelated alphanumeric ID with a symbol trips the secret
        // heuristic by design; this documents the accepted tradeoff.
        let result = detector().scan("ticket ref a@b.co / INC4852!x9");
        assert!(result.revealed());
    }

    #[test]
    fn test_configured_thresholds_are_honored() {
        let config = DetectionConfig {
            min_secret_length: 12,
            secret_symbols: "#".to_string(),
        };
        let d = DisclosureDetector::new(&config);

        // Qualifies under defaults, too short and wrong symbol here
        assert!(!d.scan("a@b.co Abc12345!").has_secret);
        assert!(d.scan("a@b.co Abc123456789#").has_secret);
    }
}
