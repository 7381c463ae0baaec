//! Payloads of the `/posts/*` endpoints. Single posts use [`Post`].

use serde::{Deserialize, Serialize};

use super::{flexible, Channel, Post};

/// A post that forwarded or mentioned the post being inspected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct PostReference {
    #[serde(deserialize_with = "flexible::string")]
    pub post_id: String,
    pub post_link: String,
    #[serde(deserialize_with = "flexible::string")]
    pub post_date: String,
    pub channel_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewGrowth {
    pub date: String,
    pub views_growth: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct PostStat {
    pub views_count: i64,
    pub forwards_count: i64,
    pub mentions_count: i64,
    pub forwards: Vec<PostReference>,
    pub mentions: Vec<PostReference>,
    pub views: Vec<ViewGrowth>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PostSearch {
    pub count: i64,
    pub total_count: i64,
    pub items: Vec<Post>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PostSearchExtended {
    pub count: i64,
    pub total_count: i64,
    pub items: Vec<Post>,
    pub channels: Vec<Channel>,
}
