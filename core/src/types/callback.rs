//! Payloads of the `/callback/*` endpoints.

use serde::{Deserialize, Serialize};

use super::Channel;

/// Raw answer of `/callback/set-callback-url`.
///
/// Registration is a two-step handshake: the server first answers with an
/// error-shaped body carrying `verify_code`, which the callback endpoint must
/// echo back before the next attempt succeeds.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetCallbackResult {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetCallbackOutcome {
    /// The callback URL is registered.
    Confirmed,
    /// The server wants the callback endpoint to answer with `verify_code`.
    VerificationRequired { verify_code: String, message: String },
}

impl SetCallbackResult {
    pub fn outcome(&self) -> SetCallbackOutcome {
        match self.verify_code.as_deref().filter(|c| !c.is_empty()) {
            Some(code) => SetCallbackOutcome::VerificationRequired {
                verify_code: code.to_string(),
                message: self.error.clone().unwrap_or_default(),
            },
            None => SetCallbackOutcome::Confirmed,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CallbackInfo {
    pub url: String,
    pub pending_update_count: i64,
    pub last_error_date: i64,
    pub last_error_message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subscribed {
    pub subscription_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SubscriptionList {
    pub total_count: i64,
    pub subscriptions: Vec<Subscription>,
}

/// One callback subscription. `kind` is `"channel"` or `"keyword"` and tells
/// which of `channel` / `keyword` is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Subscription {
    pub subscription_id: i64,
    pub event_types: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
    pub created_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<Keyword>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Keyword {
    pub q: String,
    pub strong_search: bool,
    pub minus_words: String,
    pub extended_syntax: bool,
    pub peer_types: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_code_means_verification_required() {
        let result: SetCallbackResult = serde_json::from_str(
            r#"{"status":"error","error":"wrong verify code","verify_code":"X"}"#,
        )
        .unwrap();
        assert_eq!(result.status, "error");
        assert_eq!(
            result.outcome(),
            SetCallbackOutcome::VerificationRequired {
                verify_code: "X".to_string(),
                message: "wrong verify code".to_string(),
            }
        );
    }

    #[test]
    fn plain_ok_is_confirmed() {
        let result: SetCallbackResult = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert_eq!(result.outcome(), SetCallbackOutcome::Confirmed);
    }

    #[test]
    fn subscription_kind_reads_type_field() {
        let list: SubscriptionList = serde_json::from_str(
            r#"{"total_count":1,"subscriptions":[{"subscription_id":5,"event_types":["new_post"],"type":"keyword","created_at":1,"keyword":{"q":"rust","strong_search":true}}]}"#,
        )
        .unwrap();
        let sub = &list.subscriptions[0];
        assert_eq!(sub.kind, "keyword");
        assert!(sub.channel.is_none());
        assert_eq!(sub.keyword.as_ref().map(|k| k.q.as_str()), Some("rust"));
    }
}
