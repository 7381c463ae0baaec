//! In-memory transport for unit tests.

use std::sync::Mutex;

use crate::client::TgStatClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;

pub const TEST_ENDPOINT: &str = "http://localhost:3000";
pub const TEST_TOKEN: &str = "test-token";

/// Answers every request with the same canned response and records what
/// it was asked to send.
#[derive(Debug)]
pub struct StubTransport {
    response: HttpResponse,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn new(response: HttpResponse) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests().pop().expect("no request was sent")
    }
}

impl Transport for StubTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.response.clone())
    }
}

pub fn stub_client(response: HttpResponse) -> TgStatClient<StubTransport> {
    TgStatClient::with_transport(
        ClientConfig::new(TEST_TOKEN).with_endpoint(TEST_ENDPOINT),
        StubTransport::new(response),
    )
    .unwrap()
}

/// Client whose stub answers `{"status":"ok","response":<payload>}`.
pub fn ok_client(payload: &str) -> TgStatClient<StubTransport> {
    stub_client(HttpResponse::json(200, format!(r#"{{"status":"ok","response":{payload}}}"#)))
}

/// Query parameters of a built GET request, decoded.
pub fn query_params(request: &HttpRequest) -> Vec<(String, String)> {
    url::Url::parse(&request.url)
        .unwrap()
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Form parameters of a built POST request, decoded.
pub fn form_params(request: &HttpRequest) -> Vec<(String, String)> {
    url::form_urlencoded::parse(request.body.as_deref().unwrap_or_default().as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

pub fn param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}
