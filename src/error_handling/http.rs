//! Client-facing error body.
//!
//! Embedding HTTP layers surface a failed parse as a bad request. `HttpError`
//! is the body they send; it carries no framework types.

use serde::{Deserialize, Serialize};

use super::types::ParseError;
use crate::config::HTTP_STATUS_BAD_REQUEST;

/// Error body with a status code and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpError {
    /// HTTP status code
    pub code: u16,
    /// Display text of the underlying error
    pub message: String,
}

impl From<&ParseError> for HttpError {
    fn from(err: &ParseError) -> Self {
        HttpError {
            code: HTTP_STATUS_BAD_REQUEST,
            message: err.to_string(),
        }
    }
}
