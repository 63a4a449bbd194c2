//! # Parse Error Types Module
//!
//! This module defines the errors a delegated item parser can report. The
//! deterministic parser never fails; these errors only travel as far as the
//! fallback combinator, which logs them and falls back.

/// Errors from delegated item parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The parser is not available (not configured, or failing fast)
    Unavailable(String),
    /// The request could not be sent or the response could not be read
    Transport(String),
    /// The service answered with a non-success HTTP status
    Status(u16),
    /// The service answered with a body that is not a usable item
    InvalidResponse(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Unavailable(msg) => write!(f, "Parser unavailable: {msg}"),
            ParseError::Transport(msg) => write!(f, "Transport error: {msg}"),
            ParseError::Status(code) => write!(f, "Unexpected HTTP status: {code}"),
            ParseError::InvalidResponse(msg) => write!(f, "Invalid response: {msg}"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<reqwest::Error> for ParseError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ParseError::InvalidResponse(err.to_string())
        } else if let Some(status) = err.status() {
            ParseError::Status(status.as_u16())
        } else {
            ParseError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::InvalidResponse(err.to_string())
    }
}
