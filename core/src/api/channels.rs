//! `/channels/*`: channel cards, search, statistics and time series.

use crate::client::TgStatClient;
use crate::endpoints;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::request::Params;
use crate::transport::Transport;
use crate::types::{
    ApiResult, ChannelAddResult, ChannelDetails, ChannelErrPoint, ChannelForwards, ChannelForwardsExtended,
    ChannelMentions, ChannelMentionsExtended, ChannelPosts, ChannelPostsExtended, ChannelSearch, ChannelStat,
    ReachPoint, SubscribersPoint, ViewsPoint,
};
use crate::validate::Validator;

pub const MAX_LIMIT: u64 = 50;
pub const MAX_OFFSET: u64 = 1000;

const EITHER_QUERY_OR_CATEGORY: &str = "either query or category is required";

fn validate_channel_id(channel_id: &str) -> Result<(), ApiError> {
    Validator::new().required("channelId", channel_id).finish()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub q: String,
    pub search_by_description: bool,
    pub country: String,
    pub language: Option<String>,
    pub category: Option<String>,
    pub limit: Option<u32>,
}

impl SearchRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        let category_empty = self.category.as_deref().map_or(true, str::is_empty);
        Validator::new()
            .required("country", &self.country)
            .required_when("q", Some(&self.q), category_empty, EITHER_QUERY_OR_CATEGORY)
            .required_when(
                "category",
                self.category.as_deref(),
                self.q.is_empty(),
                EITHER_QUERY_OR_CATEGORY,
            )
            .finish()
    }

    pub fn params(&self) -> Params {
        let q = Some(self.q.as_str()).filter(|q| !q.is_empty());
        Params::new()
            .set_opt("q", q)
            .set_flag("search_by_description", self.search_by_description)
            .set("country", self.country.as_str())
            .set_opt("language", self.language.as_deref())
            .set_opt("category", self.category.as_deref())
            .set_opt("limit", self.limit)
    }
}

/// Parameters for `/channels/posts`. `start_time` / `end_time` are Unix
/// timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostsRequest {
    pub channel_id: String,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub hide_forwards: Option<bool>,
    pub hide_deleted: Option<bool>,
}

impl PostsRequest {
    pub fn new(channel_id: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        Validator::new()
            .required("channelId", &self.channel_id)
            .max("limit", self.limit, MAX_LIMIT)
            .max("offset", self.offset, MAX_OFFSET)
            .timestamp("startTime", self.start_time.as_deref())
            .timestamp("endTime", self.end_time.as_deref())
            .finish()
    }

    pub fn params(&self, extended: bool) -> Params {
        Params::new()
            .set("channelId", self.channel_id.as_str())
            .set_opt("limit", self.limit)
            .set_opt("offset", self.offset)
            .set_opt("startTime", self.start_time.as_deref())
            .set_opt("endTime", self.end_time.as_deref())
            .set_opt_flag("hideForwards", self.hide_forwards)
            .set_opt_flag("hideDeleted", self.hide_deleted)
            .set_flag("extended", extended)
    }
}

/// Parameters for `/channels/mentions` and `/channels/forwards`. Dates are
/// Unix timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MentionsRequest {
    pub channel_id: String,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

pub type ForwardsRequest = MentionsRequest;

impl MentionsRequest {
    pub fn new(channel_id: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        Validator::new()
            .required("channelId", &self.channel_id)
            .max("limit", self.limit, MAX_LIMIT)
            .max("offset", self.offset, MAX_OFFSET)
            .timestamp("startDate", self.start_date.as_deref())
            .timestamp("endDate", self.end_date.as_deref())
            .finish()
    }

    pub fn params(&self, extended: bool) -> Params {
        Params::new()
            .set("channelId", self.channel_id.as_str())
            .set_opt("limit", self.limit)
            .set_opt("offset", self.offset)
            .set_opt("startDate", self.start_date.as_deref())
            .set_opt("endDate", self.end_date.as_deref())
            .set_flag("extended", extended)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscribersRequest {
    pub channel_id: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub group: Option<String>,
}

impl SubscribersRequest {
    pub const GROUPS: &'static [&'static str] = &["hour", "day", "week", "month"];

    pub fn new(channel_id: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        Validator::new()
            .required("channelId", &self.channel_id)
            .timestamp("startDate", self.start_date.as_deref())
            .timestamp("endDate", self.end_date.as_deref())
            .one_of("group", self.group.as_deref(), Self::GROUPS)
            .finish()
    }

    pub fn params(&self) -> Params {
        period_params(
            &self.channel_id,
            self.start_date.as_deref(),
            self.end_date.as_deref(),
            self.group.as_deref(),
        )
    }
}

/// Parameters shared by `/channels/views`, `/channels/avg-posts-reach` and
/// `/channels/err`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewsRequest {
    pub channel_id: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub group: Option<String>,
}

impl ViewsRequest {
    pub const GROUPS: &'static [&'static str] = &["day", "week", "month"];

    pub fn new(channel_id: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        Validator::new()
            .required("channelId", &self.channel_id)
            .timestamp("startDate", self.start_date.as_deref())
            .timestamp("endDate", self.end_date.as_deref())
            .one_of("group", self.group.as_deref(), Self::GROUPS)
            .finish()
    }

    pub fn params(&self) -> Params {
        period_params(
            &self.channel_id,
            self.start_date.as_deref(),
            self.end_date.as_deref(),
            self.group.as_deref(),
        )
    }
}

fn period_params(channel_id: &str, start_date: Option<&str>, end_date: Option<&str>, group: Option<&str>) -> Params {
    Params::new()
        .set("channelId", channel_id)
        .set_opt("startDate", start_date)
        .set_opt("endDate", end_date)
        .set_opt("group", group)
}

/// Ask TGStat to start indexing a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddRequest {
    pub channel_name: String,
    pub country: Option<String>,
    pub language: Option<String>,
    pub category: Option<String>,
}

impl AddRequest {
    pub fn new(channel_name: impl Into<String>) -> Self {
        Self {
            channel_name: channel_name.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        Validator::new().required("channelName", &self.channel_name).finish()
    }

    pub fn params(&self) -> Params {
        Params::new()
            .set("channelName", self.channel_name.as_str())
            .set_opt("country", self.country.as_deref())
            .set_opt("language", self.language.as_deref())
            .set_opt("category", self.category.as_deref())
    }
}

impl<T: Transport> TgStatClient<T> {
    pub fn build_channel_get(&self, channel_id: &str) -> Result<HttpRequest, ApiError> {
        validate_channel_id(channel_id)?;
        self.build(
            HttpMethod::Get,
            endpoints::CHANNELS_GET,
            &Params::new().set("channelId", channel_id),
        )
    }

    /// Channel card, by `@username`, `t.me/...` link or numeric id.
    pub fn channel_get(&self, channel_id: &str) -> Result<ApiResult<ChannelDetails>, ApiError> {
        self.send(&self.build_channel_get(channel_id)?)
    }

    pub fn build_channel_search(&self, request: &SearchRequest) -> Result<HttpRequest, ApiError> {
        request.validate()?;
        self.build(HttpMethod::Get, endpoints::CHANNELS_SEARCH, &request.params())
    }

    pub fn channel_search(&self, request: &SearchRequest) -> Result<ApiResult<ChannelSearch>, ApiError> {
        self.send(&self.build_channel_search(request)?)
    }

    pub fn build_channel_stat(&self, channel_id: &str) -> Result<HttpRequest, ApiError> {
        validate_channel_id(channel_id)?;
        self.build(
            HttpMethod::Get,
            endpoints::CHANNELS_STAT,
            &Params::new().set("channelId", channel_id),
        )
    }

    pub fn channel_stat(&self, channel_id: &str) -> Result<ApiResult<ChannelStat>, ApiError> {
        self.send(&self.build_channel_stat(channel_id)?)
    }

    pub fn build_channel_posts(&self, request: &PostsRequest, extended: bool) -> Result<HttpRequest, ApiError> {
        request.validate()?;
        self.build(HttpMethod::Get, endpoints::CHANNELS_POSTS, &request.params(extended))
    }

    pub fn channel_posts(&self, request: &PostsRequest) -> Result<ApiResult<ChannelPosts>, ApiError> {
        self.send(&self.build_channel_posts(request, false)?)
    }

    /// Posts together with the channel card.
    pub fn channel_posts_extended(&self, request: &PostsRequest) -> Result<ApiResult<ChannelPostsExtended>, ApiError> {
        self.send(&self.build_channel_posts(request, true)?)
    }

    pub fn build_channel_mentions(&self, request: &MentionsRequest, extended: bool) -> Result<HttpRequest, ApiError> {
        request.validate()?;
        self.build(HttpMethod::Get, endpoints::CHANNELS_MENTIONS, &request.params(extended))
    }

    pub fn channel_mentions(&self, request: &MentionsRequest) -> Result<ApiResult<ChannelMentions>, ApiError> {
        self.send(&self.build_channel_mentions(request, false)?)
    }

    pub fn channel_mentions_extended(
        &self,
        request: &MentionsRequest,
    ) -> Result<ApiResult<ChannelMentionsExtended>, ApiError> {
        self.send(&self.build_channel_mentions(request, true)?)
    }

    pub fn build_channel_forwards(&self, request: &ForwardsRequest, extended: bool) -> Result<HttpRequest, ApiError> {
        request.validate()?;
        self.build(HttpMethod::Get, endpoints::CHANNELS_FORWARDS, &request.params(extended))
    }

    pub fn channel_forwards(&self, request: &ForwardsRequest) -> Result<ApiResult<ChannelForwards>, ApiError> {
        self.send(&self.build_channel_forwards(request, false)?)
    }

    pub fn channel_forwards_extended(
        &self,
        request: &ForwardsRequest,
    ) -> Result<ApiResult<ChannelForwardsExtended>, ApiError> {
        self.send(&self.build_channel_forwards(request, true)?)
    }

    pub fn build_channel_subscribers(&self, request: &SubscribersRequest) -> Result<HttpRequest, ApiError> {
        request.validate()?;
        self.build(HttpMethod::Get, endpoints::CHANNELS_SUBSCRIBERS, &request.params())
    }

    pub fn channel_subscribers(
        &self,
        request: &SubscribersRequest,
    ) -> Result<ApiResult<Vec<SubscribersPoint>>, ApiError> {
        self.send(&self.build_channel_subscribers(request)?)
    }

    pub fn build_channel_views(&self, request: &ViewsRequest) -> Result<HttpRequest, ApiError> {
        request.validate()?;
        self.build(HttpMethod::Get, endpoints::CHANNELS_VIEWS, &request.params())
    }

    pub fn channel_views(&self, request: &ViewsRequest) -> Result<ApiResult<Vec<ViewsPoint>>, ApiError> {
        self.send(&self.build_channel_views(request)?)
    }

    pub fn build_channel_avg_posts_reach(&self, request: &ViewsRequest) -> Result<HttpRequest, ApiError> {
        request.validate()?;
        self.build(HttpMethod::Get, endpoints::CHANNELS_AVG_POSTS_REACH, &request.params())
    }

    pub fn channel_avg_posts_reach(&self, request: &ViewsRequest) -> Result<ApiResult<Vec<ReachPoint>>, ApiError> {
        self.send(&self.build_channel_avg_posts_reach(request)?)
    }

    pub fn build_channel_err(&self, request: &ViewsRequest) -> Result<HttpRequest, ApiError> {
        request.validate()?;
        self.build(HttpMethod::Get, endpoints::CHANNELS_ERR, &request.params())
    }

    /// Engagement rate (ERR) per period.
    pub fn channel_err(&self, request: &ViewsRequest) -> Result<ApiResult<Vec<ChannelErrPoint>>, ApiError> {
        self.send(&self.build_channel_err(request)?)
    }

    pub fn build_channel_add(&self, request: &AddRequest) -> Result<HttpRequest, ApiError> {
        request.validate()?;
        self.build(HttpMethod::Post, endpoints::CHANNELS_ADD, &request.params())
    }

    pub fn channel_add(&self, request: &AddRequest) -> Result<ChannelAddResult, ApiError> {
        self.send(&self.build_channel_add(request)?)
    }
}
