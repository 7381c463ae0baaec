//! Error classification for buffered responses.
//!
//! # Design
//! The remote API reports domain failures as `{"status":"error","error":...}`,
//! usually with HTTP 200. One exception: callback registration answers with
//! the same shape plus a `verify_code`, which is a handshake step rather than
//! a failure. `classify` keeps that case separate so callers can act on it.
//! Bodies that are not JSON, or not this shape, are never treated as errors
//! here; `check_response` then falls back to the HTTP status.

use serde::Deserialize;

use crate::error::ApiError;
use crate::http::HttpResponse;

/// What the body of a response says about success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// No structured error found.
    Clean,
    /// An error-shaped payload carrying a verification code.
    Verification { code: String, message: String },
    /// A structured error payload.
    Failure { message: String },
}

#[derive(Debug, Default, Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    verify_code: Option<String>,
}

pub fn classify(response: &HttpResponse) -> Classification {
    let is_json = response
        .content_type()
        .is_some_and(|ct| ct.starts_with("application/json"));
    if !is_json {
        return Classification::Clean;
    }

    let Ok(payload) = serde_json::from_slice::<ErrorPayload>(&response.body) else {
        return Classification::Clean;
    };
    let message = payload.error.unwrap_or_default();
    if message.is_empty() {
        return Classification::Clean;
    }
    match payload.verify_code.filter(|c| !c.is_empty()) {
        Some(code) => Classification::Verification { code, message },
        None => Classification::Failure { message },
    }
}

/// Turn a buffered response into `Ok(())` or the error it represents. Errors
/// carry a copy of the response.
pub fn check_response(response: &HttpResponse) -> Result<(), ApiError> {
    if let Classification::Failure { message } = classify(response) {
        return Err(ApiError::Api {
            status: response.status,
            message,
            response: Box::new(response.clone()),
        });
    }
    if (400..=599).contains(&response.status) {
        return Err(ApiError::Status {
            status: response.status,
            response: Box::new(response.clone()),
        });
    }
    Ok(())
}
