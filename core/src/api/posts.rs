//! `/posts/*`: single posts, their statistics, and full-text search.

use super::PEER_TYPES;
use crate::client::TgStatClient;
use crate::endpoints;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::request::Params;
use crate::transport::Transport;
use crate::types::{ApiResult, Post, PostSearch, PostSearchExtended, PostStat};
use crate::validate::Validator;

pub const MAX_SEARCH_LIMIT: u64 = 50;
pub const MAX_SEARCH_OFFSET: u64 = 50;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostStatRequest {
    pub post_id: String,
    pub group: Option<String>,
}

impl PostStatRequest {
    pub const GROUPS: &'static [&'static str] = &["hour", "day"];

    pub fn new(post_id: impl Into<String>) -> Self {
        Self {
            post_id: post_id.into(),
            group: None,
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        Validator::new()
            .required("postId", &self.post_id)
            .one_of("group", self.group.as_deref(), Self::GROUPS)
            .finish()
    }

    pub fn params(&self) -> Params {
        Params::new()
            .set("postId", self.post_id.as_str())
            .set_opt("group", self.group.as_deref())
    }
}

/// Full-text search over posts. Dates are Unix timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostSearchRequest {
    pub q: String,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub peer_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub hide_forwards: Option<bool>,
    pub hide_deleted: Option<bool>,
    pub strong_search: Option<bool>,
    pub minus_words: Option<String>,
    pub extended_syntax: Option<bool>,
}

impl PostSearchRequest {
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        Validator::new()
            .required("q", &self.q)
            .max("limit", self.limit, MAX_SEARCH_LIMIT)
            .max("offset", self.offset, MAX_SEARCH_OFFSET)
            .one_of("peerType", self.peer_type.as_deref(), PEER_TYPES)
            .timestamp("startDate", self.start_date.as_deref())
            .timestamp("endDate", self.end_date.as_deref())
            .finish()
    }

    pub fn params(&self, extended: bool) -> Params {
        Params::new()
            .set("q", self.q.as_str())
            .set_opt("limit", self.limit)
            .set_opt("offset", self.offset)
            .set_opt("peerType", self.peer_type.as_deref())
            .set_opt("startDate", self.start_date.as_deref())
            .set_opt("endDate", self.end_date.as_deref())
            .set_opt_flag("hideForwards", self.hide_forwards)
            .set_opt_flag("hideDeleted", self.hide_deleted)
            .set_opt_flag("strongSearch", self.strong_search)
            .set_opt("minusWords", self.minus_words.as_deref())
            .set_opt_flag("extendedSyntax", self.extended_syntax)
            .set_flag("extended", extended)
    }
}

impl<T: Transport> TgStatClient<T> {
    pub fn build_post_get(&self, post_id: &str) -> Result<HttpRequest, ApiError> {
        Validator::new().required("postId", post_id).finish()?;
        self.build(HttpMethod::Get, endpoints::POSTS_GET, &Params::new().set("postId", post_id))
    }

    /// A single post, by `t.me/channel/123` link or TGStat post id.
    pub fn post_get(&self, post_id: &str) -> Result<ApiResult<Post>, ApiError> {
        self.send(&self.build_post_get(post_id)?)
    }

    pub fn build_post_stat(&self, request: &PostStatRequest) -> Result<HttpRequest, ApiError> {
        request.validate()?;
        self.build(HttpMethod::Get, endpoints::POSTS_STAT, &request.params())
    }

    pub fn post_stat(&self, request: &PostStatRequest) -> Result<ApiResult<PostStat>, ApiError> {
        self.send(&self.build_post_stat(request)?)
    }

    pub fn build_post_search(&self, request: &PostSearchRequest, extended: bool) -> Result<HttpRequest, ApiError> {
        request.validate()?;
        self.build(HttpMethod::Get, endpoints::POSTS_SEARCH, &request.params(extended))
    }

    pub fn post_search(&self, request: &PostSearchRequest) -> Result<ApiResult<PostSearch>, ApiError> {
        self.send(&self.build_post_search(request, false)?)
    }

    /// Search results together with cards of the channels they came from.
    pub fn post_search_extended(
        &self,
        request: &PostSearchRequest,
    ) -> Result<ApiResult<PostSearchExtended>, ApiError> {
        self.send(&self.build_post_search(request, true)?)
    }
}
