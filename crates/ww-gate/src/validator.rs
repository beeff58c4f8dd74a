//! Aggregate validator.
//!
//! Runs the length, refusal, and completeness checks in that order and
//! collects every failure, so a single call surfaces all problems with a
//! response.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::checks::{check_bounds, check_completeness, check_refusal};
use crate::error::{ErrorKind, GateError, GateResult, ValidationError};
use crate::words::count_words;

/// Which checks run, and the word bounds for the length check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Inclusive lower word bound.
    pub min_words: usize,
    /// Inclusive upper word bound.
    pub max_words: usize,
    /// Run refusal detection.
    pub check_refusal: bool,
    /// Run the completeness check.
    pub check_completeness: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            min_words: 50,
            max_words: 500,
            check_refusal: true,
            check_completeness: true,
        }
    }
}

impl ValidationOptions {
    /// Create options with the generic defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the word bounds.
    pub fn with_bounds(mut self, min_words: usize, max_words: usize) -> Self {
        self.min_words = min_words;
        self.max_words = max_words;
        self
    }

    /// Enable or disable refusal detection.
    pub fn with_refusal_check(mut self, enabled: bool) -> Self {
        self.check_refusal = enabled;
        self
    }

    /// Enable or disable the completeness check.
    pub fn with_completeness_check(mut self, enabled: bool) -> Self {
        self.check_completeness = enabled;
        self
    }

    /// Reject bounds where the minimum exceeds the maximum.
    ///
    /// `label` names the option set in the error.
    pub fn validate_bounds(&self, label: &str) -> GateResult<()> {
        if self.min_words > self.max_words {
            return Err(GateError::InvalidBounds {
                profile: label.to_string(),
                min_words: self.min_words,
                max_words: self.max_words,
            });
        }
        Ok(())
    }
}

/// The verdict on one response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredResult")]
pub struct ValidationResult {
    /// True iff `errors` is empty.
    pub valid: bool,
    /// Hard failures, in check order.
    pub errors: Vec<ValidationError>,
    /// Soft signals that do not affect `valid`.
    pub warnings: Vec<String>,
    /// Words in the response, regardless of the length check outcome.
    pub word_count: usize,
}

impl ValidationResult {
    /// Build a result, deriving `valid` from `errors`.
    pub fn new(errors: Vec<ValidationError>, warnings: Vec<String>, word_count: usize) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
            word_count,
        }
    }

    /// Whether any error has the given kind.
    pub fn has_error(&self, kind: ErrorKind) -> bool {
        self.errors.iter().any(|e| e.kind == kind)
    }

    /// Error kinds in check order.
    pub fn error_kinds(&self) -> Vec<ErrorKind> {
        self.errors.iter().map(|e| e.kind).collect()
    }
}

/// Serialized form of a [`ValidationResult`]; `valid` is recomputed on load.
#[derive(Deserialize)]
struct StoredResult {
    #[serde(default)]
    errors: Vec<ValidationError>,
    #[serde(default)]
    warnings: Vec<String>,
    word_count: usize,
}

impl From<StoredResult> for ValidationResult {
    fn from(stored: StoredResult) -> Self {
        Self::new(stored.errors, stored.warnings, stored.word_count)
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.valid { "valid" } else { "invalid" };
        write!(f, "{verdict} ({} words)", self.word_count)?;
        for error in &self.errors {
            write!(f, "\nerror[{}]: {}", error.kind, error.message)?;
        }
        for warning in &self.warnings {
            write!(f, "\nwarning: {warning}")?;
        }
        Ok(())
    }
}

/// Validate `text` against `options`.
///
/// Every enabled check runs even after an earlier one fails.
pub fn validate(text: &str, options: &ValidationOptions) -> ValidationResult {
    let word_count = count_words(text);
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if let Err(e) = check_bounds(
        word_count,
        options.min_words,
        options.max_words,
        ErrorKind::LengthTooShort,
        ErrorKind::LengthTooLong,
    ) {
        errors.push(e);
    }

    if options.check_refusal
        && let Err(e) = check_refusal(text)
    {
        errors.push(e);
    }

    if options.check_completeness
        && let Err(e) = check_completeness(text, &mut warnings)
    {
        errors.push(e);
    }

    let result = ValidationResult::new(errors, warnings, word_count);
    tracing::debug!(
        word_count,
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "validated response"
    );
    result
}
