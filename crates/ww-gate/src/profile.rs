//! Named validation profiles.
//!
//! A profile is a fixed preset of [`ValidationOptions`] for one category of
//! generated content, plus any rule specific to that category.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::checks::check_bounds;
use crate::error::{ErrorKind, GateError};
use crate::validator::{ValidationOptions, ValidationResult, validate};
use crate::words::count_words;

/// Warning added to otherwise valid narrative text written without "you".
pub const SECOND_PERSON_WARNING: &str = "Narrative may not use second-person perspective";

static SECOND_PERSON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\byou\b").expect("second-person regex"));

/// A category of generated content.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Any generated text.
    #[default]
    Generic,
    /// A story continuation shown to the player.
    Narrative,
    /// A short action the player can pick.
    Choice,
    /// A world description.
    World,
}

impl Profile {
    /// Every profile.
    pub const ALL: [Profile; 4] = [
        Profile::Generic,
        Profile::Narrative,
        Profile::Choice,
        Profile::World,
    ];

    /// Lowercase name of the profile.
    pub fn name(self) -> &'static str {
        match self {
            Profile::Generic => "generic",
            Profile::Narrative => "narrative",
            Profile::Choice => "choice",
            Profile::World => "world",
        }
    }

    /// The built-in options for this profile.
    ///
    /// Choices are only length-checked, so both optional checks are off.
    pub fn options(self) -> ValidationOptions {
        let base = ValidationOptions::new();
        match self {
            Profile::Generic => base,
            Profile::Narrative => base.with_bounds(100, 400),
            Profile::Choice => base
                .with_bounds(3, 20)
                .with_refusal_check(false)
                .with_completeness_check(false),
            Profile::World => base.with_bounds(200, 800),
        }
    }

    /// Validate `text` with this profile's built-in options.
    pub fn validate(self, text: &str) -> ValidationResult {
        self.validate_with(text, &self.options())
    }

    /// Validate `text` with `options` and this profile's extra rule.
    pub fn validate_with(self, text: &str, options: &ValidationOptions) -> ValidationResult {
        let result = match self {
            Profile::Choice => choice_length(text, options),
            Profile::Narrative => second_person(text, validate(text, options)),
            Profile::Generic | Profile::World => validate(text, options),
        };
        tracing::debug!(profile = self.name(), valid = result.valid, "profile validated");
        result
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Profile {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Profile::ALL
            .into_iter()
            .find(|p| p.name() == lower)
            .ok_or_else(|| GateError::UnknownProfile(s.to_string()))
    }
}

/// Choices get a single length check with their own error kinds.
fn choice_length(text: &str, options: &ValidationOptions) -> ValidationResult {
    let word_count = count_words(text);
    let errors = check_bounds(
        word_count,
        options.min_words,
        options.max_words,
        ErrorKind::ChoiceTooShort,
        ErrorKind::ChoiceTooLong,
    )
    .err()
    .into_iter()
    .collect();
    ValidationResult::new(errors, Vec::new(), word_count)
}

/// Only a passing narrative is checked for second-person voice.
fn second_person(text: &str, mut result: ValidationResult) -> ValidationResult {
    if result.valid && !SECOND_PERSON.is_match(text) {
        result.warnings.push(SECOND_PERSON_WARNING.to_string());
    }
    result
}

/// Validate general text (50-500 words).
pub fn validate_generic(text: &str) -> ValidationResult {
    Profile::Generic.validate(text)
}

/// Validate a narrative continuation (100-400 words, second person expected).
pub fn validate_narrative(text: &str) -> ValidationResult {
    Profile::Narrative.validate(text)
}

/// Validate a player choice (3-20 words, length only).
pub fn validate_choice(text: &str) -> ValidationResult {
    Profile::Choice.validate(text)
}

/// Validate a world description (200-800 words).
pub fn validate_world(text: &str) -> ValidationResult {
    Profile::World.validate(text)
}
