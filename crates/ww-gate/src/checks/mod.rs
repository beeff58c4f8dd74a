//! Independent checks run by the validator.
//!
//! Each check inspects the text on its own and reports a failure as a
//! returned [`ValidationError`](crate::ValidationError). Soft signals are
//! pushed onto a caller-owned warning list.

mod completeness;
mod length;
mod refusal;

pub use completeness::{ELLIPSIS_LIMIT, INCOMPLETE_WARNING, check_completeness, count_ellipses};
pub use length::{check_bounds, check_length};
pub use refusal::{REFUSAL_PATTERNS, RefusalPattern, check_refusal, detect_refusal};
