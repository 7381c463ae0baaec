//! `/words/*`: keyword mention statistics.

use super::PEER_TYPES;
use crate::client::TgStatClient;
use crate::endpoints;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::request::Params;
use crate::transport::Transport;
use crate::types::{ApiResult, MentionsByChannels, MentionsByPeriod};
use crate::validate::Validator;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MentionsByPeriodRequest {
    pub q: String,
    pub peer_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub hide_forwards: Option<bool>,
    pub strong_search: Option<bool>,
    pub minus_words: Option<String>,
    pub group: Option<String>,
    pub extended_syntax: Option<bool>,
}

impl MentionsByPeriodRequest {
    pub const GROUPS: &'static [&'static str] = &["day", "week", "month"];

    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        Validator::new()
            .required("q", &self.q)
            .one_of("peerType", self.peer_type.as_deref(), PEER_TYPES)
            .timestamp("startDate", self.start_date.as_deref())
            .timestamp("endDate", self.end_date.as_deref())
            .one_of("group", self.group.as_deref(), Self::GROUPS)
            .finish()
    }

    pub fn params(&self) -> Params {
        Params::new()
            .set("q", self.q.as_str())
            .set_opt("peerType", self.peer_type.as_deref())
            .set_opt("startDate", self.start_date.as_deref())
            .set_opt("endDate", self.end_date.as_deref())
            .set_opt_flag("hideForwards", self.hide_forwards)
            .set_opt_flag("strongSearch", self.strong_search)
            .set_opt("minusWords", self.minus_words.as_deref())
            .set_opt("group", self.group.as_deref())
            .set_opt_flag("extendedSyntax", self.extended_syntax)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MentionsByChannelsRequest {
    pub q: String,
    pub peer_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub hide_forwards: Option<bool>,
    pub strong_search: Option<bool>,
    pub minus_words: Option<String>,
    pub extended_syntax: Option<bool>,
}

impl MentionsByChannelsRequest {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        Validator::new()
            .required("q", &self.q)
            .one_of("peerType", self.peer_type.as_deref(), PEER_TYPES)
            .timestamp("startDate", self.start_date.as_deref())
            .timestamp("endDate", self.end_date.as_deref())
            .finish()
    }

    pub fn params(&self) -> Params {
        Params::new()
            .set("q", self.q.as_str())
            .set_opt("peerType", self.peer_type.as_deref())
            .set_opt("startDate", self.start_date.as_deref())
            .set_opt("endDate", self.end_date.as_deref())
            .set_opt_flag("hideForwards", self.hide_forwards)
            .set_opt_flag("strongSearch", self.strong_search)
            .set_opt("minusWords", self.minus_words.as_deref())
            .set_opt_flag("extendedSyntax", self.extended_syntax)
    }
}

impl<T: Transport> TgStatClient<T> {
    pub fn build_words_mentions_by_period(&self, request: &MentionsByPeriodRequest) -> Result<HttpRequest, ApiError> {
        request.validate()?;
        self.build(HttpMethod::Get, endpoints::WORDS_MENTIONS_BY_PERIOD, &request.params())
    }

    pub fn words_mentions_by_period(
        &self,
        request: &MentionsByPeriodRequest,
    ) -> Result<ApiResult<MentionsByPeriod>, ApiError> {
        self.send(&self.build_words_mentions_by_period(request)?)
    }

    pub fn build_words_mentions_by_channels(
        &self,
        request: &MentionsByChannelsRequest,
    ) -> Result<HttpRequest, ApiError> {
        request.validate()?;
        self.build(HttpMethod::Get, endpoints::WORDS_MENTIONS_BY_CHANNELS, &request.params())
    }

    pub fn words_mentions_by_channels(
        &self,
        request: &MentionsByChannelsRequest,
    ) -> Result<ApiResult<MentionsByChannels>, ApiError> {
        self.send(&self.build_words_mentions_by_channels(request)?)
    }
}
