//! The TGStat API client.
//!
//! # Design
//! `TgStatClient` holds an immutable `ClientConfig` and one `Transport`, and
//! carries no other state between calls. Every operation goes through the
//! same three steps:
//!
//! 1. A per-resource `build_*` method validates its request struct, then
//!    `build` turns the path and parameters into an `HttpRequest`.
//! 2. `dispatch` executes the request, buffers the body and runs the error
//!    classifier over it.
//! 3. `decode` (or `call_to_writer` for raw bytes) hands the buffered body to
//!    the caller.
//!
//! Keeping `build_*` separate from sending makes request construction
//! deterministic and testable without a server.

use std::io::Write;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::classify::check_response;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::request::{build_request, Params};
use crate::transport::{Transport, UreqTransport};

/// Synchronous client for the TGStat API.
///
/// Cheap to share by reference across threads when its transport is; each
/// call is independent.
#[derive(Debug, Clone)]
pub struct TgStatClient<T = UreqTransport> {
    config: ClientConfig,
    transport: T,
}

impl TgStatClient {
    /// Validate `config` and create a client with its own pooled agent.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        config.validate()?;
        let transport = UreqTransport::new(&config);
        Ok(Self { config, transport })
    }
}

impl<T: Transport> TgStatClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self, ApiError> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build an authenticated request for `path` on the configured endpoint.
    pub fn build(&self, method: HttpMethod, path: &str, params: &Params) -> Result<HttpRequest, ApiError> {
        build_request(self.config.endpoint(), self.config.token(), method, path, params)
    }

    /// Execute `request` and return the buffered response if it is not an
    /// error. Domain errors and 4xx/5xx statuses become `Err`.
    pub fn dispatch(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let path = log_path(&request.url);
        debug!(method = request.method.as_str(), path, "sending request");

        let response = self.transport.execute(request)?;
        debug!(
            method = request.method.as_str(),
            path,
            status = response.status,
            bytes = response.body.len(),
            "received response"
        );

        check_response(&response)?;
        Ok(response)
    }

    /// Dispatch `request` and decode its body as JSON.
    pub fn send<R: DeserializeOwned>(&self, request: &HttpRequest) -> Result<R, ApiError> {
        let response = self.dispatch(request)?;
        decode(&response)
    }

    /// Build, dispatch and decode in one step.
    pub fn call<R: DeserializeOwned>(&self, method: HttpMethod, path: &str, params: &Params) -> Result<R, ApiError> {
        let request = self.build(method, path, params)?;
        self.send(&request)
    }

    /// Like `call`, but copies the body verbatim into `sink` instead of
    /// decoding it. The response (with its body) is returned as well.
    pub fn call_to_writer<W: Write + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        params: &Params,
        sink: &mut W,
    ) -> Result<HttpResponse, ApiError> {
        let request = self.build(method, path, params)?;
        let response = self.dispatch(&request)?;
        sink.write_all(&response.body)?;
        Ok(response)
    }
}

/// Decode a buffered JSON body.
pub fn decode<R: DeserializeOwned>(response: &HttpResponse) -> Result<R, ApiError> {
    Ok(serde_json::from_slice(&response.body)?)
}

// GET URLs carry the token in the query string; never log it.
fn log_path(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}
