//! Payload of `/usage/stat`.

use serde::{Deserialize, Serialize};

use super::flexible;

/// Quota usage for one purchased service key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct UsageStat {
    pub service_key: String,
    pub title: String,
    #[serde(deserialize_with = "flexible::opt_string", skip_serializing_if = "Option::is_none")]
    pub spent_channels: Option<String>,
    #[serde(deserialize_with = "flexible::string")]
    pub spent_requests: String,
    pub expired_at: i64,
    #[serde(deserialize_with = "flexible::opt_string", skip_serializing_if = "Option::is_none")]
    pub spent_words: Option<String>,
    #[serde(deserialize_with = "flexible::opt_string", skip_serializing_if = "Option::is_none")]
    pub spent_objects: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_counters_stay_absent() {
        let stat: UsageStat = serde_json::from_str(
            r#"{"serviceKey":"stat","title":"Stat API","spentRequests":"10/1000","expiredAt":1700000000}"#,
        )
        .unwrap();
        assert_eq!(stat.spent_requests, "10/1000");
        assert!(stat.spent_channels.is_none());
        assert!(stat.spent_words.is_none());
    }

    #[test]
    fn numeric_counters_become_strings() {
        let stat: UsageStat = serde_json::from_str(r#"{"spentRequests":10,"spentWords":3}"#).unwrap();
        assert_eq!(stat.spent_requests, "10");
        assert_eq!(stat.spent_words.as_deref(), Some("3"));
    }
}
