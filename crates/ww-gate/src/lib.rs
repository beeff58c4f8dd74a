//! Quality gate for generated narrative text.
//!
//! Decides whether a piece of model output is fit to show to the player.
//! Text is run through independent checks (length, refusal phrasing,
//! completeness) selected by a named [`Profile`], and the outcome is a
//! [`ValidationResult`] listing every hard error and soft warning at once.
//! The gate only classifies; retrying or surfacing a failure is up to the
//! caller.

/// Individual checks run by the validator.
pub mod checks;
/// File-based profile overrides.
pub mod config;
/// Validation error values and ambient error types.
pub mod error;
/// Named validation profiles.
pub mod profile;
/// Aggregate validator.
pub mod validator;
/// Word counting.
pub mod words;

pub use checks::{
    ELLIPSIS_LIMIT, INCOMPLETE_WARNING, REFUSAL_PATTERNS, RefusalPattern, check_completeness,
    check_length, check_refusal, count_ellipses, detect_refusal,
};
pub use config::{GateConfig, ProfileOverrides};
pub use error::{ErrorDetails, ErrorKind, GateError, GateResult, ValidationError};
pub use profile::{
    Profile, SECOND_PERSON_WARNING, validate_choice, validate_generic, validate_narrative,
    validate_world,
};
pub use validator::{ValidationOptions, ValidationResult, validate};
pub use words::count_words;
