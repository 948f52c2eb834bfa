//! Versioned pattern definitions for credential disclosure detection
//!
//! Kept separate from the scan logic so thresholds and alphabets can be
//! reviewed and tuned as data, not code.

/// Email-shaped identifier: local part, `@`, dot-separated domain
/// labels, top-level label of at least two letters.
pub const IDENTIFIER_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

/// Build the pattern matching a maximal contiguous run of secret-token
/// characters of at least `min_length`.
///
/// Conjunction checks (letter present, digit present, symbol present)
/// happen over the matched run in the detector; the regex engine has no
/// lookahead, and the run check is equivalent for existence anyway.
pub fn secret_token_pattern(symbols: &str, min_length: usize) -> String {
    format!(
        "[A-Za-z0-9{}]{{{},}}",
        regex::escape(symbols),
        min_length
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_identifier_pattern_compiles_and_matches() {
        let re = Regex::new(IDENTIFIER_PATTERN).unwrap();
        assert!(re.is_match("someone@example.co.uk"));
        assert!(re.is_match("first.last+tag@sub.domain.org"));
        assert!(!re.is_match("not-an-email"));
        assert!(!re.is_match("user@host"));
    }

    #[test]
    fn test_secret_pattern_escapes_symbols() {
        let re = Regex::new(&secret_token_pattern("@$!%*?&", 8)).unwrap();
        assert!(re.is_match("Abc12345!"));
        assert!(!re.is_match("short1!"));
    }
}
