//! Single-line configuration parsing.
//!
//! Turns a string such as `name="my app" port=8080` into a key/value map.
//! The scanner is an explicit two-state machine (see [`transition`]); the
//! token list it produces is paired by parity into the final map.
//!
//! Parsing is a pure function of its input: all state is local to the call.

mod scanner;
mod state;

// Re-export public API
pub use scanner::{pair_tokens, parse_config, tokenize, ConfigMap};
pub use state::{transition, Action, ScanState};
