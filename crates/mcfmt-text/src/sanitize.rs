#![forbid(unsafe_code)]

//! Sanitation of raw markup text before parsing or persistence.
//!
//! [`purify`] repairs the string itself (unknown codes, dangling markers) and
//! is idempotent. Structural limits such as a maximum line count are caller
//! policy, checked separately with [`validate_line_count`] at the editing
//! boundary; `purify` never truncates lines.

use mcfmt_style::{ESCAPE_MARKER, FormatCode};
use std::fmt;

/// Errors for caller-supplied structural constraints on sanitized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The text has more newline-delimited lines than the caller allows.
    TooManyLines {
        /// Number of lines in the text.
        count: usize,
        /// Maximum the caller accepts.
        max: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyLines { count, max } => {
                write!(f, "text has {count} lines, but at most {max} are allowed")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Normalize raw markup so the parser and the persistence channel never see a
/// malformed code.
///
/// Applied in order:
/// - a marker followed by an unrecognized alphanumeric selector is an
///   unsupported code; the pair is removed,
/// - a marker followed by a non-selector character (whitespace, punctuation,
///   another marker) can never form a code; the marker alone is removed and
///   the character kept,
/// - a trailing marker with nothing after it is removed,
/// - everything else, newlines included, passes through untouched.
///
/// Idempotent: `purify(purify(x)) == purify(x)`. Every marker in the output
/// is the start of a recognized code.
#[must_use]
pub fn purify(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut dropped = 0usize;

    let mut chars = raw.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != ESCAPE_MARKER {
            out.push(ch);
            continue;
        }
        match chars.peek().copied() {
            Some(next) if FormatCode::from_selector(next).is_some() => {
                chars.next();
                out.push(ch);
                out.push(next);
            }
            Some(next) if next.is_alphanumeric() => {
                // Unsupported code: drop marker and selector together.
                chars.next();
                dropped += 1;
            }
            Some(_) => {
                // The following character can never be a selector; drop the
                // marker only so the text itself survives.
                dropped += 1;
            }
            None => {
                // Dangling marker at end of input.
                dropped += 1;
            }
        }
    }

    if dropped > 0 {
        tracing::debug!(dropped, "purify removed malformed format codes");
    }
    out
}

/// Check a caller-supplied maximum line count.
///
/// Counts newline-delimited segments; the sanitized text itself is left
/// untouched either way.
pub fn validate_line_count(text: &str, max_lines: usize) -> Result<(), ValidationError> {
    let count = text.split('\n').count();
    if count > max_lines {
        return Err(ValidationError::TooManyLines {
            count,
            max: max_lines,
        });
    }
    Ok(())
}

/// Keep at most the first `max_lines` newline-delimited segments.
///
/// Renderer-side policy: the remainder is silently discarded, never re-flowed
/// into the visible lines, and clipping never fails.
#[must_use]
pub fn clip_lines(text: &str, max_lines: usize) -> &str {
    if max_lines == 0 {
        return "";
    }
    match text.match_indices('\n').nth(max_lines - 1) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =========================================================================
    // purify
    // =========================================================================

    #[test]
    fn clean_text_is_unchanged() {
        assert_eq!(purify("hello world"), "hello world");
        assert_eq!(purify("§cHello§r World"), "§cHello§r World");
    }

    #[test]
    fn unknown_code_pair_is_removed() {
        assert_eq!(purify("a§zb"), "ab");
        assert_eq!(purify("§g§h§j"), "");
    }

    #[test]
    fn dangling_trailing_marker_is_removed() {
        assert_eq!(purify("abc§"), "abc");
        assert_eq!(purify("§"), "");
    }

    #[test]
    fn marker_before_non_selector_drops_marker_only() {
        assert_eq!(purify("a§ b"), "a b");
        assert_eq!(purify("a§\nb"), "a\nb");
    }

    #[test]
    fn newlines_are_never_touched() {
        assert_eq!(purify("line1\nline2\nline3"), "line1\nline2\nline3");
    }

    #[test]
    fn uppercase_selectors_are_recognized() {
        assert_eq!(purify("§CHello"), "§CHello");
    }

    #[test]
    fn doubled_marker_keeps_at_most_a_valid_code() {
        // The first marker is dropped; the second forms a valid pair.
        assert_eq!(purify("§§cx"), "§cx");
        assert_eq!(purify("§§"), "");
    }

    #[test]
    fn purified_output_parses_without_literal_markers() {
        let clean = purify("start§zmiddle§qend§");
        for run in crate::parse(&clean) {
            assert!(!run.text.contains(mcfmt_style::ESCAPE_MARKER));
        }
    }

    proptest! {
        #[test]
        fn purify_is_idempotent(s in any::<String>()) {
            let once = purify(&s);
            prop_assert_eq!(purify(&once), once);
        }

        #[test]
        fn purify_never_leaves_a_trailing_marker(s in any::<String>()) {
            prop_assert!(!purify(&s).ends_with(mcfmt_style::ESCAPE_MARKER));
        }
    }

    // =========================================================================
    // line-count policy
    // =========================================================================

    #[test]
    fn line_count_within_limit_is_ok() {
        assert!(validate_line_count("one\ntwo", 2).is_ok());
        assert!(validate_line_count("", 1).is_ok());
    }

    #[test]
    fn line_count_over_limit_reports_a_reason() {
        let err = validate_line_count("line1\nline2\nline3", 2).unwrap_err();
        assert_eq!(err, ValidationError::TooManyLines { count: 3, max: 2 });
        assert_eq!(
            err.to_string(),
            "text has 3 lines, but at most 2 are allowed"
        );
    }

    #[test]
    fn validation_does_not_mutate_the_text() {
        let text = "line1\nline2\nline3";
        let _ = validate_line_count(text, 2);
        assert_eq!(text.split('\n').count(), 3);
    }

    // =========================================================================
    // clip_lines
    // =========================================================================

    #[test]
    fn clip_keeps_first_segments() {
        assert_eq!(clip_lines("a\nb\nc", 2), "a\nb");
        assert_eq!(clip_lines("a\nb\nc", 1), "a");
    }

    #[test]
    fn clip_is_a_no_op_when_under_the_limit() {
        assert_eq!(clip_lines("a\nb", 2), "a\nb");
        assert_eq!(clip_lines("a", 5), "a");
    }

    #[test]
    fn clip_to_zero_is_empty() {
        assert_eq!(clip_lines("a\nb", 0), "");
    }
}
