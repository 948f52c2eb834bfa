//! The fixed set of phishing indicators used to structure analysis prompts

/// A named phishing characteristic
///
/// Indicators are statically enumerated and referenced by the prompt
/// builder; they are not user-configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub name: &'static str,
    pub description: &'static str,
}

/// The canonical indicator list, in the order it appears in prompts
pub const PHISHING_INDICATORS: [Indicator; 8] = [
    Indicator {
        name: "urgency",
        description: "Creates a sense of urgency or fear",
    },
    Indicator {
        name: "suspicious_link",
        description: "Contains suspicious links or attachments",
    },
    Indicator {
        name: "credential_request",
        description: "Requests personal information, credentials, or financial details",
    },
    Indicator {
        name: "grammar_errors",
        description: "Has spelling or grammatical errors",
    },
    Indicator {
        name: "spoofed_sender",
        description: "Uses an unusual sender address",
    },
    Indicator {
        name: "threats",
        description: "Contains threats or extreme consequences",
    },
    Indicator {
        name: "too_good_to_be_true",
        description: "Offers deals that are too good to be true",
    },
    Indicator {
        name: "lacks_personalization",
        description: "Lacks specific personalization",
    },
];
