//! Error types for the quality gate.
//!
//! [`ValidationError`] is the verdict on a piece of text and is always
//! returned inside a [`ValidationResult`](crate::ValidationResult), never
//! propagated with `?` out of the validator. [`GateError`] covers the
//! surfaces around it: profile lookup and configuration loading.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of reasons a response can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Fewer words than the profile minimum.
    LengthTooShort,
    /// More words than the profile maximum.
    LengthTooLong,
    /// The model declined to produce the content.
    AiRefusal,
    /// Nothing but whitespace.
    EmptyResponse,
    /// Too many `...` sequences for a finished response.
    ExcessiveEllipsis,
    /// A player choice with fewer words than allowed.
    ChoiceTooShort,
    /// A player choice with more words than allowed.
    ChoiceTooLong,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [ErrorKind; 7] = [
        ErrorKind::LengthTooShort,
        ErrorKind::LengthTooLong,
        ErrorKind::AiRefusal,
        ErrorKind::EmptyResponse,
        ErrorKind::ExcessiveEllipsis,
        ErrorKind::ChoiceTooShort,
        ErrorKind::ChoiceTooLong,
    ];

    /// The stable snake_case code for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::LengthTooShort => "length_too_short",
            ErrorKind::LengthTooLong => "length_too_long",
            ErrorKind::AiRefusal => "ai_refusal",
            ErrorKind::EmptyResponse => "empty_response",
            ErrorKind::ExcessiveEllipsis => "excessive_ellipsis",
            ErrorKind::ChoiceTooShort => "choice_too_short",
            ErrorKind::ChoiceTooLong => "choice_too_long",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured diagnostics attached to a [`ValidationError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetails {
    /// Measured length against the allowed bounds.
    Length {
        /// Words counted in the text.
        word_count: usize,
        /// Inclusive lower bound.
        min_words: usize,
        /// Inclusive upper bound.
        max_words: usize,
    },
    /// The refusal phrase that matched first.
    Refusal {
        /// Human-readable form of the matching pattern.
        pattern: String,
    },
    /// Number of `...` sequences found.
    Ellipsis {
        /// Non-overlapping occurrences of `...`.
        ellipsis_count: usize,
    },
}

/// A hard failure found while validating a response.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    /// Which rule failed.
    pub kind: ErrorKind,
    /// Human-readable description.
    pub message: String,
    /// Diagnostics for logging and telemetry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ErrorDetails>,
}

impl ValidationError {
    /// Create an error without details.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    /// Attach structured details.
    pub fn with_details(mut self, details: ErrorDetails) -> Self {
        self.details = Some(details);
        self
    }

    /// A length violation for `kind`, with the message derived from the bounds.
    pub(crate) fn length(
        kind: ErrorKind,
        word_count: usize,
        min_words: usize,
        max_words: usize,
    ) -> Self {
        let subject = match kind {
            ErrorKind::ChoiceTooShort | ErrorKind::ChoiceTooLong => "Choice",
            _ => "Response",
        };
        let message = match kind {
            ErrorKind::LengthTooLong | ErrorKind::ChoiceTooLong => {
                format!("{subject} too long: {word_count} words (maximum {max_words})")
            }
            _ => format!("{subject} too short: {word_count} words (minimum {min_words})"),
        };
        Self::new(kind, message).with_details(ErrorDetails::Length {
            word_count,
            min_words,
            max_words,
        })
    }
}

/// Result type for configuration and profile operations.
pub type GateResult<T> = Result<T, GateError>;

/// Errors from the surfaces around the validator.
#[derive(Debug, Error)]
pub enum GateError {
    /// No built-in profile has this name.
    #[error("unknown profile: {0} (expected generic, narrative, choice, or world)")]
    UnknownProfile(String),

    /// The configuration file could not be read.
    #[error("cannot read config {path}: {source}")]
    ConfigRead {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for a [`GateConfig`](crate::GateConfig).
    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A minimum word count above the maximum.
    #[error("invalid bounds for {profile}: min_words ({min_words}) > max_words ({max_words})")]
    InvalidBounds {
        /// Profile or option set the bounds belong to.
        profile: String,
        /// Configured lower bound.
        min_words: usize,
        /// Configured upper bound.
        max_words: usize,
    },

    /// An override for a setting the profile does not use.
    #[error("profile {profile} does not support overriding {field}")]
    UnsupportedOverride {
        /// Profile the override was given for.
        profile: String,
        /// Name of the ignored field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_codes_match_serde() {
        for kind in ErrorKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn length_messages() {
        let short = ValidationError::length(ErrorKind::LengthTooShort, 12, 50, 500);
        assert_eq!(short.to_string(), "Response too short: 12 words (minimum 50)");

        let long = ValidationError::length(ErrorKind::ChoiceTooLong, 25, 3, 20);
        assert_eq!(long.to_string(), "Choice too long: 25 words (maximum 20)");
        assert_eq!(
            long.details,
            Some(ErrorDetails::Length {
                word_count: 25,
                min_words: 3,
                max_words: 20,
            })
        );
    }

    #[test]
    fn details_serialize_flat() {
        let err = ValidationError::new(ErrorKind::ExcessiveEllipsis, "too many")
            .with_details(ErrorDetails::Ellipsis { ellipsis_count: 5 });
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["kind"], "excessive_ellipsis");
        assert_eq!(value["details"]["ellipsis_count"], 5);
    }

    #[test]
    fn details_omitted_when_absent() {
        let err = ValidationError::new(ErrorKind::EmptyResponse, "Response is empty");
        let value = serde_json::to_value(&err).unwrap();
        assert!(value.get("details").is_none());

        let back: ValidationError = serde_json::from_value(value).unwrap();
        assert_eq!(back, err);
    }
}
