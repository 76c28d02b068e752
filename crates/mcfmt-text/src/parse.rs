#![forbid(unsafe_code)]

//! Single-pass format-code parser.
//!
//! The parser scans the input once, left to right, maintaining a running
//! [`StyleState`]. Each recognized `§` + selector pair closes the current
//! literal span (if non-empty) under the style that was in effect *before*
//! the code, then updates the state. A marker that is not followed by a
//! recognized selector is ordinary text; parsing never fails.

use crate::run::StyledRun;
use mcfmt_style::{ColorPolicy, ESCAPE_MARKER, FormatCode, StyleState};

/// Parser configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// How color codes interact with active toggles. See [`ColorPolicy`].
    pub color_policy: ColorPolicy,
}

/// Parse text into styled runs with default options.
#[must_use]
pub fn parse(raw: &str) -> Vec<StyledRun> {
    parse_with(raw, ParseOptions::default())
}

/// Parse text into styled runs.
///
/// Single pass, O(n) in input length, no lookahead beyond one selector
/// character. The same input always yields the same run sequence.
#[must_use]
pub fn parse_with(raw: &str, options: ParseOptions) -> Vec<StyledRun> {
    let mut runs = Vec::new();
    let mut state = StyleState::DEFAULT;
    let mut span = String::new();

    let mut chars = raw.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == ESCAPE_MARKER
            && let Some(code) = chars.peek().copied().and_then(FormatCode::from_selector)
        {
            chars.next();
            if !span.is_empty() {
                runs.push(StyledRun::new(std::mem::take(&mut span), state));
            }
            state.apply_with(code, options.color_policy);
            continue;
        }
        // Either an ordinary character or a marker with no recognized
        // selector after it; both stay literal.
        span.push(ch);
    }

    if !span.is_empty() {
        runs.push(StyledRun::new(span, state));
    }
    runs
}
