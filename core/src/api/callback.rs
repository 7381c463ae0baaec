//! `/callback/*`: webhook registration and event subscriptions.
//!
//! These endpoints use snake_case parameter names, unlike the rest of the API.

use super::PEER_TYPES;
use crate::client::TgStatClient;
use crate::endpoints;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::request::Params;
use crate::transport::Transport;
use crate::types::{ApiResult, CallbackInfo, SetCallbackResult, StatusOnly, Subscribed, SubscriptionList};
use crate::validate::Validator;

pub const CHANNEL_EVENTS: &[&str] = &["new_post", "edit_post", "remove_post"];
pub const WORD_EVENTS: &[&str] = &["new_post"];
pub const SUBSCRIPTION_TYPES: &[&str] = &["channel", "keyword"];

/// Subscribe to events of one channel. `event_types` is a comma-separated
/// list; passing `subscription_id` edits an existing subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscribeChannelRequest {
    pub subscription_id: Option<String>,
    pub channel_id: String,
    pub event_types: String,
}

impl SubscribeChannelRequest {
    pub fn new(channel_id: impl Into<String>, event_types: impl Into<String>) -> Self {
        Self {
            subscription_id: None,
            channel_id: channel_id.into(),
            event_types: event_types.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        Validator::new()
            .required("channel_id", &self.channel_id)
            .required("event_types", &self.event_types)
            .each_of("event_types", Some(&self.event_types), CHANNEL_EVENTS)
            .finish()
    }

    pub fn params(&self) -> Params {
        Params::new()
            .set_opt("subscription_id", self.subscription_id.as_deref())
            .set("channel_id", self.channel_id.as_str())
            .set("event_types", self.event_types.as_str())
    }
}

/// Subscribe to new posts matching a keyword query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscribeWordRequest {
    pub subscription_id: Option<String>,
    pub q: String,
    pub event_types: String,
    pub strong_search: Option<bool>,
    pub minus_words: Option<String>,
    pub extended_syntax: Option<bool>,
    pub peer_types: Option<String>,
}

impl SubscribeWordRequest {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            event_types: "new_post".to_string(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        Validator::new()
            .required("q", &self.q)
            .required("event_types", &self.event_types)
            .each_of("event_types", Some(&self.event_types), WORD_EVENTS)
            .one_of("peer_types", self.peer_types.as_deref(), PEER_TYPES)
            .finish()
    }

    pub fn params(&self) -> Params {
        Params::new()
            .set_opt("subscription_id", self.subscription_id.as_deref())
            .set("q", self.q.as_str())
            .set("event_types", self.event_types.as_str())
            .set_opt_flag("strong_search", self.strong_search)
            .set_opt("minus_words", self.minus_words.as_deref())
            .set_opt_flag("extended_syntax", self.extended_syntax)
            .set_opt("peer_types", self.peer_types.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionsListRequest {
    pub subscription_id: Option<String>,
    pub subscription_type: Option<String>,
}

impl SubscriptionsListRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        Validator::new()
            .one_of("subscription_type", self.subscription_type.as_deref(), SUBSCRIPTION_TYPES)
            .finish()
    }

    pub fn params(&self) -> Params {
        Params::new()
            .set_opt("subscription_id", self.subscription_id.as_deref())
            .set_opt("subscription_type", self.subscription_type.as_deref())
    }
}

impl<T: Transport> TgStatClient<T> {
    pub fn build_set_callback_url(&self, callback_url: &str) -> Result<HttpRequest, ApiError> {
        Validator::new()
            .required("callback_url", callback_url)
            .url("callback_url", callback_url)
            .finish()?;
        self.build(
            HttpMethod::Post,
            endpoints::CALLBACK_SET_URL,
            &Params::new().set("callback_url", callback_url),
        )
    }

    /// Register the webhook address. Until the address has echoed the
    /// verification code back, the result carries
    /// `SetCallbackOutcome::VerificationRequired`; see
    /// [`SetCallbackResult::outcome`].
    pub fn set_callback_url(&self, callback_url: &str) -> Result<SetCallbackResult, ApiError> {
        self.send(&self.build_set_callback_url(callback_url)?)
    }

    pub fn build_get_callback_info(&self) -> Result<HttpRequest, ApiError> {
        self.build(HttpMethod::Get, endpoints::CALLBACK_GET_INFO, &Params::new())
    }

    pub fn get_callback_info(&self) -> Result<ApiResult<CallbackInfo>, ApiError> {
        self.send(&self.build_get_callback_info()?)
    }

    pub fn build_subscribe_channel(&self, request: &SubscribeChannelRequest) -> Result<HttpRequest, ApiError> {
        request.validate()?;
        self.build(HttpMethod::Post, endpoints::CALLBACK_SUBSCRIBE_CHANNEL, &request.params())
    }

    pub fn subscribe_channel(&self, request: &SubscribeChannelRequest) -> Result<ApiResult<Subscribed>, ApiError> {
        self.send(&self.build_subscribe_channel(request)?)
    }

    pub fn build_subscribe_word(&self, request: &SubscribeWordRequest) -> Result<HttpRequest, ApiError> {
        request.validate()?;
        self.build(HttpMethod::Post, endpoints::CALLBACK_SUBSCRIBE_WORD, &request.params())
    }

    pub fn subscribe_word(&self, request: &SubscribeWordRequest) -> Result<ApiResult<Subscribed>, ApiError> {
        self.send(&self.build_subscribe_word(request)?)
    }

    pub fn build_subscriptions_list(&self, request: &SubscriptionsListRequest) -> Result<HttpRequest, ApiError> {
        request.validate()?;
        self.build(HttpMethod::Get, endpoints::CALLBACK_SUBSCRIPTIONS_LIST, &request.params())
    }

    pub fn subscriptions_list(
        &self,
        request: &SubscriptionsListRequest,
    ) -> Result<ApiResult<SubscriptionList>, ApiError> {
        self.send(&self.build_subscriptions_list(request)?)
    }

    pub fn build_unsubscribe(&self, subscription_id: &str) -> Result<HttpRequest, ApiError> {
        Validator::new().required("subscription_id", subscription_id).finish()?;
        self.build(
            HttpMethod::Post,
            endpoints::CALLBACK_UNSUBSCRIBE,
            &Params::new().set("subscription_id", subscription_id),
        )
    }

    pub fn unsubscribe(&self, subscription_id: &str) -> Result<StatusOnly, ApiError> {
        self.send(&self.build_unsubscribe(subscription_id)?)
    }
}
