//! Signs of a truncated or rambling response.

use crate::error::{ErrorDetails, ErrorKind, ValidationError};

/// Most `...` sequences a finished response may contain.
pub const ELLIPSIS_LIMIT: usize = 3;

/// Warning emitted when a response does not end in terminal punctuation.
pub const INCOMPLETE_WARNING: &str = "Response may be incomplete (doesn't end with punctuation)";

/// Count non-overlapping `...` sequences in `text`.
pub fn count_ellipses(text: &str) -> usize {
    text.matches("...").count()
}

/// Check that `text` looks like a finished response.
///
/// Empty text fails with [`ErrorKind::EmptyResponse`] and nothing else is
/// examined. A missing `.`, `!` or `?` at the end only adds a warning.
/// More than [`ELLIPSIS_LIMIT`] ellipses fails with
/// [`ErrorKind::ExcessiveEllipsis`].
pub fn check_completeness(text: &str, warnings: &mut Vec<String>) -> Result<(), ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(
            ErrorKind::EmptyResponse,
            "Response is empty",
        ));
    }

    if !trimmed.ends_with(['.', '!', '?']) {
        tracing::debug!("response does not end with terminal punctuation");
        warnings.push(INCOMPLETE_WARNING.to_string());
    }

    let ellipsis_count = count_ellipses(text);
    if ellipsis_count > ELLIPSIS_LIMIT {
        return Err(ValidationError::new(
            ErrorKind::ExcessiveEllipsis,
            format!("Response contains excessive ellipsis ({ellipsis_count})"),
        )
        .with_details(ErrorDetails::Ellipsis { ellipsis_count }));
    }

    Ok(())
}
