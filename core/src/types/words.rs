//! Payloads of the `/words/*` endpoints.

use serde::{Deserialize, Serialize};

use super::Channel;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PeriodMentionStat {
    pub period: String,
    pub mentions_count: i64,
    pub views_count: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MentionsByPeriod {
    pub items: Vec<PeriodMentionStat>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChannelMentionStat {
    pub channel_id: i64,
    pub mentions_count: i64,
    pub views_count: i64,
    pub last_mention_date: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MentionsByChannels {
    pub items: Vec<ChannelMentionStat>,
    pub channels: Vec<Channel>,
}
