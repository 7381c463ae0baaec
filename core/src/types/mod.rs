//! Response schema for the TGStat API.
//!
//! # Design
//! Every successful response is `{"status": "...", "response": ...}`, so one
//! generic `ApiResult<T>` envelope wraps a per-endpoint payload. Payload
//! fields default when absent because the API omits fields freely between
//! plans and "extended" modes. Loosely-typed fields (restrictions,
//! counters that arrive as strings) are resolved during deserialization.

pub mod callback;
pub mod channels;
pub mod database;
pub mod posts;
pub mod usage;
pub mod words;

use serde::{Deserialize, Serialize};

pub use callback::{
    CallbackInfo, Keyword, SetCallbackOutcome, SetCallbackResult, Subscribed, Subscription, SubscriptionList,
};
pub use channels::{
    ChannelAddResult, ChannelAdded, ChannelDetails, ChannelErrPoint, ChannelForwards, ChannelForwardsExtended,
    ChannelMentions, ChannelMentionsExtended, ChannelPosts, ChannelPostsExtended, ChannelSearch, ChannelStat,
    ForwardItem, MentionItem, ReachPoint, Restrictions, SubscribersPoint, ViewsPoint,
};
pub use database::{Category, Country, DictionaryEntry, Language};
pub use posts::{PostReference, PostSearch, PostSearchExtended, PostStat, ViewGrowth};
pub use usage::UsageStat;
pub use words::{ChannelMentionStat, MentionsByChannels, MentionsByPeriod, PeriodMentionStat};

/// The `{"status", "response"}` envelope of a successful call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResult<T> {
    pub status: String,
    pub response: T,
}

/// Responses that only carry a status, e.g. unsubscribe.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusOnly {
    pub status: String,
}

/// Short channel card embedded in search results and extended responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Channel {
    pub id: i64,
    pub link: String,
    pub username: String,
    pub title: String,
    pub about: String,
    pub image100: String,
    pub image640: String,
    pub participants_count: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Media {
    pub media_type: String,
    pub mime_type: String,
    pub size: i64,
    pub caption: String,
}

/// A single post as returned by posts/get, channels/posts and posts/search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Post {
    pub id: i64,
    pub date: i64,
    pub views: i64,
    pub link: String,
    pub channel_id: i64,
    /// Source channel of a forwarded post; its shape varies by post type.
    pub forwarded_from: Option<serde_json::Value>,
    pub is_deleted: i64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    pub media: Media,
}

/// Deserializers for values the API sends either as numbers or as strings.
pub(crate) mod flexible {
    use serde::de::{self, Deserializer};
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(serde_json::Number),
        String(String),
    }

    pub fn u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Number(n) => n
                .as_u64()
                .ok_or_else(|| de::Error::custom(format!("expected unsigned integer, got {n}"))),
            NumberOrString::String(s) => s.trim().parse().map_err(de::Error::custom),
        }
    }

    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match Option::<NumberOrString>::deserialize(deserializer)? {
            Some(NumberOrString::Number(n)) => n.to_string(),
            Some(NumberOrString::String(s)) => s,
            None => String::new(),
        })
    }

    pub fn opt_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        Ok(match Option::<NumberOrString>::deserialize(deserializer)? {
            Some(NumberOrString::Number(n)) => Some(n.to_string()),
            Some(NumberOrString::String(s)) => Some(s),
            None => None,
        })
    }
}
