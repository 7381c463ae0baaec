//! Error types for the TGStat API client.
//!
//! # Design
//! Errors are grouped by the stage that produced them: configuration and
//! validation failures happen before any request exists, construction
//! failures before anything is sent, transport failures while talking to the
//! server, and `Api` / `Status` after a response came back. Every variant is
//! returned to the caller; the client never retries or swallows an error.

use std::fmt;

use thiserror::Error;

use crate::http::HttpResponse;

/// Errors returned by `TgStatClient` and the request builder.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing token or unusable endpoint, detected before any I/O.
    #[error("invalid client configuration: {message}")]
    Config { message: String },

    /// The endpoint plus path did not form a parseable URL.
    #[error("unable to parse URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request path is not an absolute API path.
    #[error("invalid request path {path:?}: must start with '/'")]
    InvalidPath { path: String },

    /// One or more request fields violate their declared rules.
    #[error("{0}")]
    Validation(ValidationErrors),

    /// DNS, connect or timeout failure from the HTTP agent.
    #[error("transport error: {0}")]
    Transport(#[source] ureq::Error),

    /// The response arrived but its body could not be read.
    #[error("failed to read response body: {0}")]
    BodyRead(#[source] ureq::Error),

    /// The server answered with a structured error payload. The buffered
    /// response is kept so callers can still inspect status and headers.
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        response: Box<HttpResponse>,
    },

    /// The server answered 4xx/5xx without a structured error payload.
    #[error("tgstat server responded with status code {status}")]
    Status { status: u16, response: Box<HttpResponse> },

    /// The response body could not be decoded into the expected type.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Copying the body into a caller-supplied writer failed.
    #[error("failed to write response body: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        ApiError::Config {
            message: message.into(),
        }
    }

    /// HTTP status of the response that produced this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } | ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The response behind an `Api` or `Status` error.
    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            ApiError::Api { response, .. } | ApiError::Status { response, .. } => Some(&**response),
            _ => None,
        }
    }
}

/// A single violated rule on a single request field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every rule violation found on one request, sorted by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub(crate) fn new(mut errors: Vec<FieldError>) -> Self {
        errors.sort_by(|a, b| a.field.cmp(b.field));
        Self { errors }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// True when `field` has at least one violation.
    pub fn has(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}
