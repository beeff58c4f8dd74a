//! Word counting.

/// Count whitespace-delimited words in `text`.
///
/// Runs of whitespace collapse, and empty or whitespace-only input
/// counts as zero words.
pub fn count_words(text: &str) -> usize {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0;
    }
    trimmed.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_is_zero() {
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn whitespace_only_is_zero() {
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words("\n\t  \r\n"), 0);
    }

    #[test]
    fn interior_runs_collapse() {
        assert_eq!(count_words("one two  three"), 3);
        assert_eq!(count_words("  one\ttwo\n\nthree  "), 3);
    }

    #[test]
    fn punctuation_stays_attached() {
        assert_eq!(count_words("Wait... what?! No."), 3);
    }

    proptest! {
        #[test]
        fn counts_joined_words(words in prop::collection::vec("[a-zA-Z]{1,8}", 0..60), sep in "[ \t\n]{1,3}") {
            let text = words.join(&sep);
            prop_assert_eq!(count_words(&text), words.len());
        }
    }
}
