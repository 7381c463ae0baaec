//! Payloads of the `/channels/*` endpoints.

use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

use super::{flexible, Channel, Post};

/// TGStat moderation labels on a channel.
///
/// The API sends an array (normally `[]`) for an unlabelled channel and an
/// object otherwise; the distinction is made here, while deserializing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Restrictions {
    #[default]
    None,
    Restricted { red_label: bool, black_label: bool },
}

impl Restrictions {
    pub fn is_restricted(&self) -> bool {
        matches!(self, Restrictions::Restricted { .. })
    }
}

#[derive(Deserialize)]
struct RestrictionFlags {
    #[serde(default)]
    red_label: bool,
    #[serde(default)]
    black_label: bool,
}

impl<'de> Deserialize<'de> for Restrictions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Null => Ok(Restrictions::None),
            serde_json::Value::Array(_) => Ok(Restrictions::None),
            serde_json::Value::Object(map) => {
                let flags: RestrictionFlags =
                    serde_json::from_value(serde_json::Value::Object(map)).map_err(de::Error::custom)?;
                Ok(Restrictions::Restricted {
                    red_label: flags.red_label,
                    black_label: flags.black_label,
                })
            }
            other => Err(de::Error::custom(format!(
                "unexpected tgstat_restrictions value: {other}"
            ))),
        }
    }
}

impl Serialize for Restrictions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Restrictions::None => serializer.collect_seq(std::iter::empty::<()>()),
            Restrictions::Restricted {
                red_label,
                black_label,
            } => {
                let mut s = serializer.serialize_struct("Restrictions", 2)?;
                s.serialize_field("red_label", red_label)?;
                s.serialize_field("black_label", black_label)?;
                s.end()
            }
        }
    }
}

/// Full channel card from `/channels/get`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChannelDetails {
    pub id: i64,
    pub link: String,
    pub username: String,
    pub title: String,
    pub about: String,
    pub category: String,
    pub country: String,
    #[serde(alias = "Language")]
    pub language: String,
    pub image100: String,
    pub image640: String,
    pub participants_count: i64,
    #[serde(rename = "tgstat_restrictions")]
    pub restrictions: Restrictions,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChannelSearch {
    pub count: i64,
    pub items: Vec<Channel>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChannelStat {
    pub id: i64,
    pub title: String,
    pub username: String,
    pub participants_count: i64,
    pub avg_post_reach: i64,
    pub err_percent: f64,
    pub daily_reach: i64,
    pub ci_index: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChannelPosts {
    pub count: i64,
    pub total_count: i64,
    pub items: Vec<Post>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChannelPostsExtended {
    pub count: i64,
    pub total_count: i64,
    pub channel: Channel,
    pub items: Vec<Post>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct MentionItem {
    pub mention_id: i64,
    pub mention_type: String,
    pub post_id: i64,
    pub post_link: String,
    pub post_date: i64,
    pub channel_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChannelMentions {
    pub items: Vec<MentionItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChannelMentionsExtended {
    pub items: Vec<MentionItem>,
    pub channels: Vec<Channel>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ForwardItem {
    pub forward_id: i64,
    pub post_id: i64,
    pub post_link: String,
    pub post_date: i64,
    pub channel_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChannelForwards {
    pub items: Vec<ForwardItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChannelForwardsExtended {
    pub items: Vec<ForwardItem>,
    pub channels: Vec<Channel>,
}

/// Subscriber count for one period; the API sends the count as a string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubscribersPoint {
    pub period: String,
    #[serde(deserialize_with = "flexible::u64")]
    pub participants_count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewsPoint {
    pub period: String,
    pub views_count: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReachPoint {
    pub period: String,
    pub avg_posts_reach: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChannelErrPoint {
    pub period: String,
    pub err: f64,
}

/// Result of `/channels/add`: either queued (`response` absent) or added.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChannelAddResult {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<ChannelAdded>,
}

impl ChannelAddResult {
    /// Channel accepted but not indexed yet.
    pub fn is_pending(&self) -> bool {
        self.response.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelAdded {
    pub channel_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_means_no_restrictions() {
        let channel: ChannelDetails =
            serde_json::from_str(r#"{"id":1,"title":"A","tgstat_restrictions":[]}"#).unwrap();
        assert_eq!(channel.restrictions, Restrictions::None);
        assert!(!channel.restrictions.is_restricted());
    }

    #[test]
    fn any_list_means_no_restrictions() {
        let channel: ChannelDetails =
            serde_json::from_str(r#"{"id":1,"tgstat_restrictions":["red_label"]}"#).unwrap();
        assert_eq!(channel.restrictions, Restrictions::None);
    }

    #[test]
    fn object_means_restricted() {
        let channel: ChannelDetails = serde_json::from_str(
            r#"{"id":1,"tgstat_restrictions":{"red_label":true,"black_label":false}}"#,
        )
        .unwrap();
        assert_eq!(
            channel.restrictions,
            Restrictions::Restricted {
                red_label: true,
                black_label: false
            }
        );
    }

    #[test]
    fn missing_or_null_restrictions_default_to_none() {
        let a: ChannelDetails = serde_json::from_str(r#"{"id":1}"#).unwrap();
        let b: ChannelDetails = serde_json::from_str(r#"{"id":1,"tgstat_restrictions":null}"#).unwrap();
        assert_eq!(a.restrictions, Restrictions::None);
        assert_eq!(b.restrictions, Restrictions::None);
    }

    #[test]
    fn scalar_restrictions_are_rejected() {
        let result: Result<ChannelDetails, _> = serde_json::from_str(r#"{"tgstat_restrictions":5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn restrictions_serialize_back_to_wire_shapes() {
        assert_eq!(serde_json::to_value(Restrictions::None).unwrap(), serde_json::json!([]));
        assert_eq!(
            serde_json::to_value(Restrictions::Restricted {
                red_label: false,
                black_label: true
            })
            .unwrap(),
            serde_json::json!({"red_label": false, "black_label": true})
        );
    }

    #[test]
    fn subscribers_count_accepts_string() {
        let points: Vec<SubscribersPoint> =
            serde_json::from_str(r#"[{"period":"2022-01-25","participants_count":"1500"}]"#).unwrap();
        assert_eq!(points[0].participants_count, 1500);
    }

    #[test]
    fn add_result_distinguishes_pending() {
        let pending: ChannelAddResult = serde_json::from_str(r#"{"status":"pending"}"#).unwrap();
        assert!(pending.is_pending());
        let added: ChannelAddResult =
            serde_json::from_str(r#"{"status":"ok","response":{"channelId":42}}"#).unwrap();
        assert_eq!(added.response, Some(ChannelAdded { channel_id: 42 }));
    }

    #[test]
    fn mention_items_use_camel_case() {
        let m: MentionItem = serde_json::from_str(
            r#"{"mentionId":1,"mentionType":"channel","postId":2,"postLink":"t.me/x/2","postDate":3,"channelId":4}"#,
        )
        .unwrap();
        assert_eq!(m.mention_type, "channel");
        assert_eq!(m.channel_id, 4);
    }
}
