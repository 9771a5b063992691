//! Scanner state machine.
//!
//! The scanner has two states and reacts to each character immediately, with
//! no lookahead. `transition` is the whole of its character-level behavior.

use crate::config::{QUOTE_CHARS, SEPARATOR_CHAR, SPACE_CHAR};

/// Whether the scanner is inside a quoted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanState {
    /// Outside quotes: spaces and `=` close tokens
    Normal,
    /// Inside a quoted span: spaces are kept, `=` is an error
    InQuote,
}

/// What the scanner does with the character that caused a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Add the character to the current token.
    Append,
    /// Close the current token; the character itself is dropped.
    Emit,
    /// Drop the character without closing the token (quote toggles).
    Discard,
    /// Abort the scan.
    Fail,
}

/// Maps a state and an input character to the next state and an action.
///
/// Quote characters are not kind-aware: any quote closes a span opened by
/// any other quote.
pub fn transition(state: ScanState, c: char) -> (ScanState, Action) {
    match (state, c) {
        (ScanState::Normal, q) if QUOTE_CHARS.contains(&q) => (ScanState::InQuote, Action::Discard),
        (ScanState::InQuote, q) if QUOTE_CHARS.contains(&q) => (ScanState::Normal, Action::Discard),
        (ScanState::Normal, SPACE_CHAR) => (ScanState::Normal, Action::Emit),
        (ScanState::InQuote, SPACE_CHAR) => (ScanState::InQuote, Action::Append),
        (ScanState::Normal, SEPARATOR_CHAR) => (ScanState::Normal, Action::Emit),
        (ScanState::InQuote, SEPARATOR_CHAR) => (ScanState::InQuote, Action::Fail),
        (state, _) => (state, Action::Append),
    }
}
