//! Synchronous client for the TGStat statistics API.
//!
//! # Overview
//! Covers channels, posts, keyword mentions, usage, dictionaries and
//! callback subscriptions. Each operation is split into a `build_*` method,
//! which validates input and produces an `HttpRequest` without touching the
//! network, and a calling method that sends it through a `Transport`,
//! classifies the response and decodes the JSON payload.
//!
//! # Design
//! - `TgStatClient` holds an immutable `ClientConfig` and a transport; it
//!   keeps no other state between calls.
//! - `GET` parameters travel in the query string, `POST` parameters in a
//!   form-url-encoded body. The token is always added by `build_request`.
//! - Error payloads come back with HTTP 200, so the classifier inspects every
//!   body before the status code is considered.
//! - Response types are defined independently from the mock-server crate;
//!   integration tests catch schema drift.

pub mod api;
pub mod classify;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod request;
pub mod transport;
pub mod types;
pub mod validate;

#[cfg(test)]
mod testing;

pub use api::{
    AddRequest, ForwardsRequest, MentionsByChannelsRequest, MentionsByPeriodRequest, MentionsRequest,
    PostSearchRequest, PostStatRequest, PostsRequest, SearchRequest, SubscribeChannelRequest, SubscribeWordRequest,
    SubscribersRequest, SubscriptionsListRequest, ViewsRequest,
};
pub use classify::{check_response, classify, Classification};
pub use client::{decode, TgStatClient};
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use error::{ApiError, FieldError, ValidationErrors};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use request::{build_request, Params};
pub use transport::{Transport, UreqTransport};
