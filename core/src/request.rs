//! Request construction.
//!
//! # Design
//! Every operation reduces to a path plus a flat string map of parameters.
//! `build_request` turns that into an `HttpRequest` using one encoding rule
//! per method:
//!
//! - `GET`: parameters and `token` go into the query string; no body.
//! - `POST`: parameters and `token` are form-url-encoded into the body with
//!   `Content-Type: application/x-www-form-urlencoded`; no query string.
//!
//! `Params` is ordered, so building twice from the same input produces the
//! same bytes.

use std::collections::BTreeMap;

use url::{form_urlencoded, Url};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};

pub const TOKEN_PARAM: &str = "token";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Request parameters keyed by their wire name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: impl Into<String>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Set `key` only when a value is present.
    pub fn set_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.set(key, v.to_string()),
            None => self,
        }
    }

    /// Boolean flags travel as `"1"` / `"0"`.
    pub fn set_flag(self, key: &str, value: bool) -> Self {
        self.set(key, flag(value))
    }

    pub fn set_opt_flag(self, key: &str, value: Option<bool>) -> Self {
        self.set_opt(key, value.map(flag))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// Build a request for `path` on `endpoint`, authenticated with `token`.
///
/// `endpoint` is expected without a trailing slash (`ClientConfig` strips
/// it). A `token` entry in `params` is ignored; the explicit token wins.
pub fn build_request(
    endpoint: &str,
    token: &str,
    method: HttpMethod,
    path: &str,
    params: &Params,
) -> Result<HttpRequest, ApiError> {
    if token.is_empty() {
        return Err(ApiError::config("token not found"));
    }
    if !path.starts_with('/') {
        return Err(ApiError::InvalidPath {
            path: path.to_string(),
        });
    }

    let mut url = Url::parse(&format!("{endpoint}{path}"))?;
    let pairs = params.iter().filter(|(k, _)| *k != TOKEN_PARAM);
    let mut headers = vec![("Cache-Control".to_string(), "no-cache".to_string())];

    let body = match method {
        HttpMethod::Get => {
            let mut query = url.query_pairs_mut();
            for (k, v) in pairs {
                query.append_pair(k, v);
            }
            query.append_pair(TOKEN_PARAM, token);
            None
        }
        HttpMethod::Post => {
            let mut form = form_urlencoded::Serializer::new(String::new());
            for (k, v) in pairs {
                form.append_pair(k, v);
            }
            form.append_pair(TOKEN_PARAM, token);
            headers.push(("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string()));
            Some(form.finish())
        }
    };

    Ok(HttpRequest {
        method,
        url: url.to_string(),
        headers,
        body,
    })
}
