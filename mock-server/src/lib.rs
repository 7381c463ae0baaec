//! In-process stand-in for the TGStat API.
//!
//! Serves every endpoint the client knows about with fixture data, checks
//! the `token` parameter the way the real service does, and keeps callback
//! subscriptions in memory so subscribe, list and unsubscribe round-trip.
//! Domain errors are answered with HTTP 200 and an error payload.

pub mod fixtures;

use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

/// Token value the server rejects with `wrong_token`.
pub const INVALID_TOKEN: &str = "invalid";

pub type Params = HashMap<String, String>;

pub type Db = Arc<RwLock<Store>>;

#[derive(Debug, Default)]
pub struct Store {
    next_subscription_id: i64,
    subscriptions: BTreeMap<i64, Subscription>,
    callback_url: Option<String>,
    pending_callback: Option<PendingCallback>,
    issued_codes: u64,
}

#[derive(Debug, Clone)]
struct PendingCallback {
    url: String,
    verify_code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Subscription {
    pub subscription_id: i64,
    pub event_types: Vec<String>,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<Value>,
    pub created_at: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<Value>,
}

/// A domain error, sent as `{"status":"error","error":...}` with HTTP 200.
#[derive(Debug)]
pub struct ApiFailure(String);

impl ApiFailure {
    fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        Json(json!({"status": "error", "error": self.0})).into_response()
    }
}

type Reply = Result<Json<Value>, ApiFailure>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/channels/get", get(channel_get))
        .route("/channels/search", get(channel_search))
        .route("/channels/stat", get(channel_stat))
        .route("/channels/posts", get(channel_posts))
        .route("/channels/mentions", get(channel_mentions))
        .route("/channels/forwards", get(channel_forwards))
        .route("/channels/subscribers", get(channel_subscribers))
        .route("/channels/views", get(channel_views))
        .route("/channels/avg-posts-reach", get(channel_avg_posts_reach))
        .route("/channels/err", get(channel_err))
        .route("/channels/add", post(channel_add))
        .route("/posts/get", get(post_get))
        .route("/posts/stat", get(post_stat))
        .route("/posts/search", get(post_search))
        .route("/words/mentions-by-period", get(words_mentions_by_period))
        .route("/words/mentions-by-channels", get(words_mentions_by_channels))
        .route("/usage/stat", get(usage_stat))
        .route("/database/countries", get(database_countries))
        .route("/database/categories", get(database_categories))
        .route("/database/languages", get(database_languages))
        .route("/callback/set-callback-url", post(set_callback_url))
        .route("/callback/get-callback-info", get(get_callback_info))
        .route("/callback/subscribe-channel", post(subscribe_channel))
        .route("/callback/subscribe-word", post(subscribe_word))
        .route("/callback/subscriptions-list", get(subscriptions_list))
        .route("/callback/unsubscribe", post(unsubscribe))
        .fallback(not_found)
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, [(header::CONTENT_TYPE, "text/plain")], "Not Found")
}

fn authorize(params: &Params) -> Result<(), ApiFailure> {
    match params.get("token").map(String::as_str) {
        None | Some("") => Err(ApiFailure::new("empty_token")),
        Some(INVALID_TOKEN) => Err(ApiFailure::new("wrong_token")),
        Some(_) => Ok(()),
    }
}

fn require<'a>(params: &'a Params, key: &str) -> Result<&'a str, ApiFailure> {
    params
        .get(key)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiFailure::new(format!("{key} is required")))
}

fn flag(params: &Params, key: &str) -> bool {
    params.get(key).is_some_and(|v| v == "1")
}

fn ok(response: Value) -> Reply {
    Ok(Json(json!({"status": "ok", "response": response})))
}

fn known_channel(params: &Params) -> Result<(), ApiFailure> {
    authorize(params)?;
    if fixtures::is_known_channel(require(params, "channelId")?) {
        Ok(())
    } else {
        Err(ApiFailure::new("channel_not_found"))
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

// --- channels ---

async fn channel_get(Query(params): Query<Params>) -> Reply {
    known_channel(&params)?;
    ok(fixtures::channel_details())
}

async fn channel_search(Query(params): Query<Params>) -> Reply {
    authorize(&params)?;
    let q = params.get("q").map(String::as_str).unwrap_or_default();
    let category = params.get("category").map(String::as_str).unwrap_or_default();
    if q.is_empty() && category.is_empty() {
        return Err(ApiFailure::new("q or category is required"));
    }
    ok(json!({"count": 1, "items": [fixtures::channel_card()]}))
}

async fn channel_stat(Query(params): Query<Params>) -> Reply {
    known_channel(&params)?;
    ok(fixtures::channel_stat())
}

async fn channel_posts(Query(params): Query<Params>) -> Reply {
    known_channel(&params)?;
    let mut response = json!({"count": 1, "total_count": 1, "items": [fixtures::post()]});
    if flag(&params, "extended") {
        response["channel"] = fixtures::channel_card();
    }
    ok(response)
}

fn with_channels(items: Value, extended: bool) -> Value {
    let mut response = json!({"items": items});
    if extended {
        response["channels"] = json!([fixtures::channel_card()]);
    }
    response
}

async fn channel_mentions(Query(params): Query<Params>) -> Reply {
    known_channel(&params)?;
    ok(with_channels(fixtures::mentions(), flag(&params, "extended")))
}

async fn channel_forwards(Query(params): Query<Params>) -> Reply {
    known_channel(&params)?;
    ok(with_channels(fixtures::forwards(), flag(&params, "extended")))
}

async fn channel_subscribers(Query(params): Query<Params>) -> Reply {
    known_channel(&params)?;
    ok(fixtures::subscribers())
}

async fn channel_views(Query(params): Query<Params>) -> Reply {
    known_channel(&params)?;
    ok(fixtures::views())
}

async fn channel_avg_posts_reach(Query(params): Query<Params>) -> Reply {
    known_channel(&params)?;
    ok(fixtures::avg_posts_reach())
}

async fn channel_err(Query(params): Query<Params>) -> Reply {
    known_channel(&params)?;
    ok(fixtures::err())
}

/// Known channels are added at once; anything else is queued, which the
/// API signals by leaving out `response`.
async fn channel_add(Form(params): Form<Params>) -> Reply {
    authorize(&params)?;
    let name = require(&params, "channelName")?;
    if fixtures::is_known_channel(name) {
        ok(json!({"channelId": fixtures::CHANNEL_ID}))
    } else {
        Ok(Json(json!({"status": "ok"})))
    }
}

// --- posts ---

async fn post_get(Query(params): Query<Params>) -> Reply {
    authorize(&params)?;
    if fixtures::is_known_post(require(&params, "postId")?) {
        ok(fixtures::post())
    } else {
        Err(ApiFailure::new("post_not_found"))
    }
}

async fn post_stat(Query(params): Query<Params>) -> Reply {
    authorize(&params)?;
    if fixtures::is_known_post(require(&params, "postId")?) {
        ok(fixtures::post_stat())
    } else {
        Err(ApiFailure::new("post_not_found"))
    }
}

async fn post_search(Query(params): Query<Params>) -> Reply {
    authorize(&params)?;
    let q = require(&params, "q")?;
    let mut response = json!({"count": 1, "total_count": 1, "items": [fixtures::search_hit(q)]});
    if flag(&params, "extended") {
        response["channels"] = json!([fixtures::channel_card()]);
    }
    ok(response)
}

// --- words ---

async fn words_mentions_by_period(Query(params): Query<Params>) -> Reply {
    authorize(&params)?;
    require(&params, "q")?;
    ok(json!({"items": fixtures::mentions_by_period()}))
}

async fn words_mentions_by_channels(Query(params): Query<Params>) -> Reply {
    authorize(&params)?;
    require(&params, "q")?;
    ok(json!({
        "items": fixtures::mentions_by_channels(),
        "channels": [fixtures::channel_card()]
    }))
}

// --- usage & database ---

async fn usage_stat(Query(params): Query<Params>) -> Reply {
    authorize(&params)?;
    ok(fixtures::usage())
}

fn english(params: &Params) -> bool {
    params.get("lang").is_some_and(|l| l == "en")
}

async fn database_countries(Query(params): Query<Params>) -> Reply {
    authorize(&params)?;
    ok(fixtures::countries(english(&params)))
}

async fn database_categories(Query(params): Query<Params>) -> Reply {
    authorize(&params)?;
    ok(fixtures::categories(english(&params)))
}

async fn database_languages(Query(params): Query<Params>) -> Reply {
    authorize(&params)?;
    ok(fixtures::languages(english(&params)))
}

// --- callback ---

/// The first attempt for a URL answers with a verification code; repeating
/// the call for the same URL confirms it.
async fn set_callback_url(State(db): State<Db>, Form(params): Form<Params>) -> Reply {
    authorize(&params)?;
    let url = require(&params, "callback_url")?.to_string();

    let mut store = db.write().await;
    if store.callback_url.as_deref() == Some(url.as_str()) {
        return Ok(Json(json!({"status": "ok"})));
    }
    if store.pending_callback.as_ref().is_some_and(|p| p.url == url) {
        store.pending_callback = None;
        info!(url = url.as_str(), "callback url confirmed");
        store.callback_url = Some(url);
        return Ok(Json(json!({"status": "ok"})));
    }

    store.issued_codes += 1;
    let verify_code = format!("vc{:06}", store.issued_codes);
    debug!(url = url.as_str(), verify_code = verify_code.as_str(), "callback url awaiting verification");
    store.pending_callback = Some(PendingCallback {
        url,
        verify_code: verify_code.clone(),
    });
    Ok(Json(json!({
        "status": "error",
        "error": "Callback URL verification required",
        "verify_code": verify_code
    })))
}

async fn get_callback_info(State(db): State<Db>, Query(params): Query<Params>) -> Reply {
    authorize(&params)?;
    let store = db.read().await;
    ok(json!({
        "url": store.callback_url.clone().unwrap_or_default(),
        "pending_update_count": 0,
        "last_error_date": 0,
        "last_error_message": store
            .pending_callback
            .as_ref()
            .map(|p| format!("verification pending, code {}", p.verify_code))
            .unwrap_or_default()
    }))
}

fn event_types(params: &Params, allowed: &[&str]) -> Result<Vec<String>, ApiFailure> {
    let raw = require(params, "event_types")?;
    let events: Vec<String> = raw.split(',').map(|e| e.trim().to_string()).collect();
    if events.iter().all(|e| allowed.contains(&e.as_str())) {
        Ok(events)
    } else {
        Err(ApiFailure::new("wrong event_types"))
    }
}

/// Store `subscription`, replacing the one named by `subscription_id` when
/// the caller passed an existing id.
async fn save_subscription(db: &Db, params: &Params, mut subscription: Subscription) -> Reply {
    let mut store = db.write().await;
    let existing = params
        .get("subscription_id")
        .and_then(|id| id.parse::<i64>().ok())
        .filter(|id| store.subscriptions.contains_key(id));
    let id = match existing {
        Some(id) => id,
        None => {
            store.next_subscription_id += 1;
            store.next_subscription_id
        }
    };
    subscription.subscription_id = id;
    store.subscriptions.insert(id, subscription);
    debug!(subscription_id = id, "subscription saved");
    ok(json!({"subscription_id": id}))
}

async fn subscribe_channel(State(db): State<Db>, Form(params): Form<Params>) -> Reply {
    authorize(&params)?;
    let channel_id = require(&params, "channel_id")?;
    if !fixtures::is_known_channel(channel_id) {
        return Err(ApiFailure::new("channel_not_found"));
    }
    let subscription = Subscription {
        subscription_id: 0,
        event_types: event_types(&params, &["new_post", "edit_post", "remove_post"])?,
        kind: "channel",
        channel: Some(fixtures::channel_card()),
        created_at: unix_now(),
        keyword: None,
    };
    save_subscription(&db, &params, subscription).await
}

async fn subscribe_word(State(db): State<Db>, Form(params): Form<Params>) -> Reply {
    authorize(&params)?;
    let q = require(&params, "q")?;
    let keyword = json!({
        "q": q,
        "strong_search": flag(&params, "strong_search"),
        "minus_words": params.get("minus_words").cloned().unwrap_or_default(),
        "extended_syntax": flag(&params, "extended_syntax"),
        "peer_types": params.get("peer_types").cloned().unwrap_or_else(|| "all".to_string())
    });
    let subscription = Subscription {
        subscription_id: 0,
        event_types: event_types(&params, &["new_post"])?,
        kind: "keyword",
        channel: None,
        created_at: unix_now(),
        keyword: Some(keyword),
    };
    save_subscription(&db, &params, subscription).await
}

async fn subscriptions_list(State(db): State<Db>, Query(params): Query<Params>) -> Reply {
    authorize(&params)?;
    let id = params.get("subscription_id").and_then(|id| id.parse::<i64>().ok());
    let kind = params.get("subscription_type").map(String::as_str);

    let store = db.read().await;
    let subscriptions: Vec<&Subscription> = store
        .subscriptions
        .values()
        .filter(|s| id.map_or(true, |id| s.subscription_id == id))
        .filter(|s| kind.map_or(true, |k| s.kind == k))
        .collect();
    ok(json!({
        "total_count": subscriptions.len(),
        "subscriptions": subscriptions
    }))
}

async fn unsubscribe(State(db): State<Db>, Form(params): Form<Params>) -> Reply {
    authorize(&params)?;
    let id = require(&params, "subscription_id")?
        .parse::<i64>()
        .map_err(|_| ApiFailure::new("wrong subscription_id"))?;
    match db.write().await.subscriptions.remove(&id) {
        Some(_) => Ok(Json(json!({"status": "ok"}))),
        None => Err(ApiFailure::new("subscription_not_found")),
    }
}
