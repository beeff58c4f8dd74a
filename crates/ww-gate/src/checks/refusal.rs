//! Detection of model refusals.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ErrorDetails, ErrorKind, ValidationError};

/// A phrase that marks a response as a refusal.
#[derive(Debug)]
pub struct RefusalPattern {
    /// The phrase as reported in diagnostics.
    pub phrase: &'static str,
    /// Case-insensitive matcher for the phrase.
    pub regex: Regex,
}

impl RefusalPattern {
    fn new(phrase: &'static str, pattern: &str) -> Self {
        let regex = Regex::new(&format!("(?i){pattern}")).expect("refusal pattern");
        Self { phrase, regex }
    }

    /// Whether the phrase occurs anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Refusal phrases in match order. The first match is the one reported.
pub static REFUSAL_PATTERNS: LazyLock<Vec<RefusalPattern>> = LazyLock::new(|| {
    vec![
        RefusalPattern::new("I cannot", r"I cannot"),
        RefusalPattern::new("I can't", r"I can['’]t"),
        RefusalPattern::new("I'm not able to", r"I['’]m not able to"),
        RefusalPattern::new("I am unable to", r"I am unable to"),
        RefusalPattern::new("I apologize, but I", r"I apologize, but I"),
        RefusalPattern::new("I'm sorry, but I", r"I['’]m sorry, but I"),
        RefusalPattern::new("I don't feel comfortable", r"I don['’]t feel comfortable"),
        RefusalPattern::new("I would not be appropriate", r"I would not be appropriate"),
        RefusalPattern::new("against my programming", r"against my programming"),
        RefusalPattern::new("I must decline", r"I must decline"),
        RefusalPattern::new("I will not", r"I will not"),
        RefusalPattern::new("I won't", r"I won['’]t"),
    ]
});

/// Find the first refusal pattern occurring in `text`.
pub fn detect_refusal(text: &str) -> Option<&'static RefusalPattern> {
    REFUSAL_PATTERNS.iter().find(|p| p.is_match(text))
}

/// Fail with [`ErrorKind::AiRefusal`] if `text` contains a refusal phrase.
pub fn check_refusal(text: &str) -> Result<(), ValidationError> {
    match detect_refusal(text) {
        Some(pattern) => {
            tracing::debug!(pattern = pattern.phrase, "refusal phrase matched");
            Err(
                ValidationError::new(ErrorKind::AiRefusal, "AI refused to generate content")
                    .with_details(ErrorDetails::Refusal {
                        pattern: pattern.phrase.to_string(),
                    }),
            )
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched_phrase(text: &str) -> Option<&'static str> {
        detect_refusal(text).map(|p| p.phrase)
    }

    #[test]
    fn plain_refusal() {
        let err = check_refusal("I cannot help with that.").unwrap_err();
        assert_eq!(err.kind, ErrorKind::AiRefusal);
        assert_eq!(
            err.details,
            Some(ErrorDetails::Refusal {
                pattern: "I cannot".to_string(),
            })
        );
    }

    #[test]
    fn case_insensitive_substring() {
        assert_eq!(
            matched_phrase("The knight shook her head, and said that i cannot stay here."),
            Some("I cannot")
        );
        assert_eq!(matched_phrase("AGAINST MY PROGRAMMING"), Some("against my programming"));
    }

    #[test]
    fn typographic_apostrophes() {
        assert_eq!(matched_phrase("Sorry, I can’t write that."), Some("I can't"));
        assert_eq!(matched_phrase("I won’t do it."), Some("I won't"));
    }

    #[test]
    fn first_pattern_wins() {
        // Matches both "I will not" and "I cannot"; table order decides.
        assert_eq!(
            matched_phrase("I will not and I cannot continue."),
            Some("I cannot")
        );
        assert_eq!(
            matched_phrase("I'm sorry, but I must decline."),
            Some("I'm sorry, but I")
        );
    }

    #[test]
    fn ordinary_narrative_passes() {
        let text = "You step through the gate. The wind carries the smell of rain, \
                    and somewhere below a bell begins to ring.";
        assert!(detect_refusal(text).is_none());
        assert!(check_refusal(text).is_ok());
    }

    #[test]
    fn table_order_is_fixed() {
        let phrases: Vec<_> = REFUSAL_PATTERNS.iter().map(|p| p.phrase).collect();
        assert_eq!(phrases.first(), Some(&"I cannot"));
        assert_eq!(phrases.last(), Some(&"I won't"));
        assert_eq!(phrases.len(), 12);
    }
}
