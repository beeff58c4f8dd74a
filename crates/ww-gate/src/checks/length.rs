//! Word-count bounds.

use crate::error::{ErrorKind, ValidationError};
use crate::words::count_words;

/// Check that `text` has between `min_words` and `max_words` words, inclusive.
///
/// Returns the measured word count when the text is within bounds.
pub fn check_length(
    text: &str,
    min_words: usize,
    max_words: usize,
) -> Result<usize, ValidationError> {
    check_bounds(
        count_words(text),
        min_words,
        max_words,
        ErrorKind::LengthTooShort,
        ErrorKind::LengthTooLong,
    )
}

/// Compare an already measured word count against inclusive bounds.
///
/// The lower bound is tested first, so inverted bounds report `short_kind`.
pub fn check_bounds(
    word_count: usize,
    min_words: usize,
    max_words: usize,
    short_kind: ErrorKind,
    long_kind: ErrorKind,
) -> Result<usize, ValidationError> {
    if word_count < min_words {
        Err(ValidationError::length(
            short_kind, word_count, min_words, max_words,
        ))
    } else if word_count > max_words {
        Err(ValidationError::length(
            long_kind, word_count, min_words, max_words,
        ))
    } else {
        Ok(word_count)
    }
}
