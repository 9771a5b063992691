//! Configuration constants.
//!
//! Character classes recognized by the scanner, limits applied to error
//! messages, and the exit codes used by the CLI binary.

// Scanner character classes
/// Characters that open or close a quoted span.
///
/// The two are interchangeable: a span opened with `"` may be closed with `'`.
pub const QUOTE_CHARS: [char; 2] = ['"', '\''];
/// Key/value separator. Illegal inside a quoted span.
pub const SEPARATOR_CHAR: char = '=';
/// Token boundary outside a quoted span. Only U+0020; tabs and other
/// whitespace are ordinary token characters.
pub const SPACE_CHAR: char = ' ';

// Error reporting
/// Maximum number of characters of quoted context kept in an
/// `IllegalSeparatorInQuote` error.
pub const MAX_ERROR_CONTEXT_CHARS: usize = 64;

// Input files
/// Lines whose trimmed form starts with this prefix are skipped.
pub const COMMENT_PREFIX: char = '#';
/// Path value meaning "read from stdin".
pub const STDIN_PATH: &str = "-";

// Exit codes
/// Returned when the input was read and the exit policy is satisfied.
pub const EXIT_SUCCESS: i32 = 0;
/// Returned when `--fail-on any-failure` is set and at least one line failed.
pub const EXIT_PARSE_FAILURES: i32 = 2;

/// HTTP status used when a parse failure is surfaced to a client.
pub const HTTP_STATUS_BAD_REQUEST: u16 = 400;
