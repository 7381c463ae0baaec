//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the real client
//! (`UreqTransport` over HTTP) through every resource family. Validates that
//! request encoding, error classification and response decoding agree with
//! the server's wire format.

use std::io::{Read, Write};
use std::time::Duration;

use tgstat_core::api::{
    MentionsByChannelsRequest, MentionsByPeriodRequest, MentionsRequest, PostSearchRequest, PostStatRequest,
    PostsRequest, SearchRequest, SubscribeChannelRequest, SubscribeWordRequest, SubscribersRequest,
    SubscriptionsListRequest, ViewsRequest,
};
use tgstat_core::types::{Restrictions, SetCallbackOutcome};
use tgstat_core::{AddRequest, ApiError, ClientConfig, HttpMethod, Params, TgStatClient};

/// Start the mock server on `127.0.0.1:0` and return its base URL.
fn spawn_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

/// Serve one connection with a hand-written response, then close it.
fn spawn_raw_server(head: String, body: Vec<u8>) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                return;
            }
            request.extend_from_slice(&buf[..n]);
        }
        stream.write_all(head.as_bytes()).unwrap();
        let _ = stream.write_all(&body);
    });

    format!("http://{addr}")
}

fn client(endpoint: &str, token: &str) -> TgStatClient {
    let config = ClientConfig::new(token)
        .with_endpoint(endpoint)
        .with_timeout(Duration::from_secs(10));
    TgStatClient::new(config).unwrap()
}

#[test]
fn channel_reads() {
    let endpoint = spawn_server();
    let client = client(&endpoint, "secret");

    let channel = client.channel_get("@varlamov").unwrap();
    assert_eq!(channel.status, "ok");
    assert_eq!(channel.response.id, 321);
    assert_eq!(channel.response.title, "Varlamov.ru");
    assert_eq!(channel.response.restrictions, Restrictions::None);

    let search = SearchRequest {
        q: "varlamov".to_string(),
        country: "ru".to_string(),
        ..SearchRequest::default()
    };
    let found = client.channel_search(&search).unwrap();
    assert_eq!(found.response.items[0].id, 321);

    let stat = client.channel_stat("321").unwrap();
    assert_eq!(stat.response.participants_count, 180000);

    let posts = PostsRequest {
        limit: Some(10),
        ..PostsRequest::new("t.me/varlamov")
    };
    assert_eq!(client.channel_posts(&posts).unwrap().response.items[0].id, 1000);
    let extended = client.channel_posts_extended(&posts).unwrap();
    assert_eq!(extended.response.channel.id, 321);

    let mentions = MentionsRequest::new("321");
    assert_eq!(client.channel_mentions(&mentions).unwrap().response.items[0].mention_id, 9001);
    let extended = client.channel_mentions_extended(&mentions).unwrap();
    assert_eq!(extended.response.channels[0].id, 321);
    assert_eq!(client.channel_forwards(&mentions).unwrap().response.items[0].forward_id, 8001);

    let subscribers = client.channel_subscribers(&SubscribersRequest::new("321")).unwrap();
    assert_eq!(subscribers.response[0].participants_count, 180000);
    assert_eq!(subscribers.response[1].participants_count, 179500);

    let views = ViewsRequest::new("321");
    assert_eq!(client.channel_views(&views).unwrap().response.len(), 2);
    assert_eq!(client.channel_avg_posts_reach(&views).unwrap().response[0].avg_posts_reach, 42000.5);
    assert_eq!(client.channel_err(&views).unwrap().response[0].err, 23.3);
}

#[test]
fn channel_add_known_and_queued() {
    let endpoint = spawn_server();
    let client = client(&endpoint, "secret");

    let added = client.channel_add(&AddRequest::new("@varlamov")).unwrap();
    assert!(!added.is_pending());
    assert_eq!(added.response.unwrap().channel_id, 321);

    let queued = client.channel_add(&AddRequest::new("@somebody_new")).unwrap();
    assert_eq!(queued.status, "ok");
    assert!(queued.is_pending());
}

#[test]
fn post_and_word_reads() {
    let endpoint = spawn_server();
    let client = client(&endpoint, "secret");

    let post = client.post_get("t.me/varlamov/1000").unwrap();
    assert_eq!(post.response.channel_id, 321);
    assert!(post.response.forwarded_from.is_none());

    let stat = client.post_stat(&PostStatRequest::new("1000")).unwrap();
    assert_eq!(stat.response.forwards[0].post_id, "2001");
    assert_eq!(stat.response.mentions[0].post_id, "3001");
    assert_eq!(stat.response.views.len(), 2);

    let search = client.post_search(&PostSearchRequest::new("ролик")).unwrap();
    assert_eq!(search.response.items[0].snippet.as_deref(), Some("...<b>ролик</b>..."));
    let extended = client.post_search_extended(&PostSearchRequest::new("ролик")).unwrap();
    assert_eq!(extended.response.channels[0].id, 321);

    let by_period = client
        .words_mentions_by_period(&MentionsByPeriodRequest::new("varlamov"))
        .unwrap();
    assert_eq!(by_period.response.items[0].mentions_count, 14);
    let by_channels = client
        .words_mentions_by_channels(&MentionsByChannelsRequest::new("varlamov"))
        .unwrap();
    assert_eq!(by_channels.response.items[0].channel_id, 321);
}

#[test]
fn usage_and_dictionaries() {
    let endpoint = spawn_server();
    let client = client(&endpoint, "secret");

    let usage = client.usage_stat().unwrap();
    assert_eq!(usage.response[0].spent_channels.as_deref(), Some("12/100"));
    assert_eq!(usage.response[1].spent_requests, "17");
    assert_eq!(usage.response[1].spent_words.as_deref(), Some("3"));

    let ru = client.database_countries(None).unwrap();
    assert_eq!(ru.response[0].name, "Россия");
    let en = client.database_categories(Some("en")).unwrap();
    assert_eq!(en.response[0].name, "Blogs");
    assert_eq!(client.database_languages(Some("ru")).unwrap().response.len(), 2);
}

#[test]
fn errors_are_classified() {
    let endpoint = spawn_server();

    // Validation fails before anything is sent.
    let good = client(&endpoint, "secret");
    let err = good.channel_get("").unwrap_err();
    assert_eq!(err.to_string(), "channelId: cannot be blank");

    // Domain errors arrive with HTTP 200.
    let err = client(&endpoint, "invalid").usage_stat().unwrap_err();
    match err {
        ApiError::Api { status, message, .. } => {
            assert_eq!(status, 200);
            assert_eq!(message, "wrong_token");
        }
        other => panic!("expected api error, got {other:?}"),
    }

    let err = good.channel_get("@durov").unwrap_err();
    assert_eq!(err.to_string(), "channel_not_found");

    // Unknown paths fall back to the status code.
    let err = good
        .call::<serde_json::Value>(HttpMethod::Get, "/channels/unknown", &Params::new())
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "tgstat server responded with status code 404");
    let response = err.response().unwrap();
    assert_eq!(response.content_type(), Some("text/plain"));
    assert_eq!(response.text(), "Not Found");
}

#[test]
fn unreachable_server_is_a_transport_error() {
    // Bind and drop to get a port nothing listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let err = client(&format!("http://127.0.0.1:{port}"), "secret")
        .usage_stat()
        .unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
}

#[test]
fn raw_body_is_copied_to_writer() {
    let endpoint = spawn_server();
    let client = client(&endpoint, "secret");

    let mut sink = Vec::new();
    let response = client
        .call_to_writer(HttpMethod::Get, "/usage/stat", &Params::new(), &mut sink)
        .unwrap();
    assert_eq!(response.status, 200);
    let body: serde_json::Value = serde_json::from_slice(&sink).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["response"][0]["serviceKey"], "stat");
}

#[test]
fn large_body_is_copied_to_writer() {
    // Larger than ureq's default 10 MiB buffering cap.
    const LEN: usize = 11 * 1024 * 1024;
    let head = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: {LEN}\r\nConnection: close\r\n\r\n"
    );
    let endpoint = spawn_raw_server(head, vec![b'x'; LEN]);
    let client = client(&endpoint, "secret");

    let mut sink = Vec::new();
    let response = client
        .call_to_writer(HttpMethod::Get, "/usage/stat", &Params::new(), &mut sink)
        .unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(sink.len(), LEN);
    assert!(sink.iter().all(|&b| b == b'x'));
}

#[test]
fn truncated_body_is_a_body_read_error() {
    let head =
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 100\r\nConnection: close\r\n\r\n"
            .to_string();
    let endpoint = spawn_raw_server(head, br#"{"status":"#.to_vec());

    let err = client(&endpoint, "secret").usage_stat().unwrap_err();
    assert!(matches!(err, ApiError::BodyRead(_)), "got {err:?}");
    assert_eq!(err.status(), None);
}

#[test]
fn callback_lifecycle() {
    let endpoint = spawn_server();
    let client = client(&endpoint, "secret");

    // Step 1: register the webhook; first answer asks for verification.
    let first = client.set_callback_url("https://example.com/hook").unwrap();
    let SetCallbackOutcome::VerificationRequired { verify_code, .. } = first.outcome() else {
        panic!("expected verification request, got {first:?}");
    };
    assert!(!verify_code.is_empty());

    let info = client.get_callback_info().unwrap();
    assert_eq!(info.response.url, "");

    // Step 2: repeat the call; the URL is now confirmed.
    let second = client.set_callback_url("https://example.com/hook").unwrap();
    assert_eq!(second.outcome(), SetCallbackOutcome::Confirmed);
    let info = client.get_callback_info().unwrap();
    assert_eq!(info.response.url, "https://example.com/hook");

    // Step 3: subscribe to a channel and a keyword.
    let channel_sub = client
        .subscribe_channel(&SubscribeChannelRequest::new("@varlamov", "new_post,remove_post"))
        .unwrap()
        .response
        .subscription_id;
    let word = SubscribeWordRequest {
        strong_search: Some(true),
        peer_types: Some("channel".to_string()),
        ..SubscribeWordRequest::new("rust")
    };
    let word_sub = client.subscribe_word(&word).unwrap().response.subscription_id;
    assert_ne!(channel_sub, word_sub);

    // Step 4: list everything, then only channel subscriptions.
    let all = client.subscriptions_list(&SubscriptionsListRequest::default()).unwrap();
    assert_eq!(all.response.total_count, 2);

    let only_channels = SubscriptionsListRequest {
        subscription_type: Some("channel".to_string()),
        ..SubscriptionsListRequest::default()
    };
    let channels = client.subscriptions_list(&only_channels).unwrap();
    assert_eq!(channels.response.total_count, 1);
    let sub = &channels.response.subscriptions[0];
    assert_eq!(sub.subscription_id, channel_sub);
    assert_eq!(sub.event_types, vec!["new_post", "remove_post"]);
    assert_eq!(sub.channel.as_ref().unwrap().id, 321);

    let keyword = client
        .subscriptions_list(&SubscriptionsListRequest {
            subscription_id: Some(word_sub.to_string()),
            subscription_type: None,
        })
        .unwrap();
    let kw = keyword.response.subscriptions[0].keyword.as_ref().unwrap();
    assert_eq!(kw.q, "rust");
    assert!(kw.strong_search);
    assert_eq!(kw.peer_types, "channel");

    // Step 5: edit the channel subscription in place.
    let edit = SubscribeChannelRequest {
        subscription_id: Some(channel_sub.to_string()),
        ..SubscribeChannelRequest::new("@varlamov", "edit_post")
    };
    assert_eq!(client.subscribe_channel(&edit).unwrap().response.subscription_id, channel_sub);

    // Step 6: unsubscribe; a second attempt is a domain error.
    assert_eq!(client.unsubscribe(&channel_sub.to_string()).unwrap().status, "ok");
    let err = client.unsubscribe(&channel_sub.to_string()).unwrap_err();
    assert!(matches!(err, ApiError::Api { ref message, .. } if message == "subscription_not_found"));

    let left = client.subscriptions_list(&SubscriptionsListRequest::default()).unwrap();
    assert_eq!(left.response.total_count, 1);
    assert_eq!(left.response.subscriptions[0].subscription_id, word_sub);
}
