//! Canned payloads. All of them describe one well-known channel so tests can
//! cross-reference ids between endpoints.

use serde_json::{json, Value};

pub const CHANNEL_ID: i64 = 321;
pub const CHANNEL_USERNAME: &str = "@varlamov";
pub const CHANNEL_TITLE: &str = "Varlamov.ru";
pub const POST_ID: i64 = 1000;

/// Identifiers the API accepts for the channel: id, username, or link.
pub fn is_known_channel(channel_id: &str) -> bool {
    let id = channel_id.trim_start_matches("https://").trim_start_matches("t.me/");
    matches!(id, "321" | "@varlamov" | "varlamov")
}

pub fn is_known_post(post_id: &str) -> bool {
    matches!(post_id, "1000" | "t.me/varlamov/1000" | "https://t.me/varlamov/1000")
}

pub fn channel_card() -> Value {
    json!({
        "id": CHANNEL_ID,
        "link": "t.me/varlamov",
        "username": CHANNEL_USERNAME,
        "title": CHANNEL_TITLE,
        "about": "Илья Варламов",
        "image100": "//static.tgstat.ru/channels/_100/varlamov.jpg",
        "image640": "//static.tgstat.ru/channels/_640/varlamov.jpg",
        "participants_count": 180000
    })
}

pub fn channel_details() -> Value {
    let mut card = channel_card();
    if let Some(obj) = card.as_object_mut() {
        obj.insert("category".into(), json!("Блоги"));
        obj.insert("country".into(), json!("Россия"));
        obj.insert("language".into(), json!("Русский"));
        obj.insert("tgstat_restrictions".into(), json!([]));
    }
    card
}

pub fn channel_stat() -> Value {
    json!({
        "id": CHANNEL_ID,
        "title": CHANNEL_TITLE,
        "username": CHANNEL_USERNAME,
        "participants_count": 180000,
        "avg_post_reach": 42000,
        "err_percent": 23.3,
        "daily_reach": 510000,
        "ci_index": 48.12
    })
}

pub fn post() -> Value {
    json!({
        "id": POST_ID,
        "date": 1643113399,
        "views": 52000,
        "link": "t.me/varlamov/1000",
        "channel_id": CHANNEL_ID,
        "forwarded_from": null,
        "is_deleted": 0,
        "text": "Новый ролик на канале",
        "media": {
            "media_type": "mediaPhoto",
            "mime_type": "image/jpeg",
            "size": 120000,
            "caption": ""
        }
    })
}

pub fn search_hit(q: &str) -> Value {
    let mut hit = post();
    if let Some(obj) = hit.as_object_mut() {
        obj.insert("snippet".into(), json!(format!("...<b>{q}</b>...")));
    }
    hit
}

pub fn post_stat() -> Value {
    json!({
        "viewsCount": 52000,
        "forwardsCount": 12,
        "mentionsCount": 3,
        "forwards": [
            {"postId": "2001", "postLink": "t.me/other/2001", "postDate": "1643114000", "channelId": 55}
        ],
        "mentions": [
            {"postId": 3001, "postLink": "t.me/third/3001", "postDate": 1643115000, "channelId": 56}
        ],
        "views": [
            {"date": "2022-01-25", "viewsGrowth": 40000},
            {"date": "2022-01-26", "viewsGrowth": 12000}
        ]
    })
}

pub fn mentions() -> Value {
    json!([
        {
            "mentionId": 9001,
            "mentionType": "channel",
            "postId": 4001,
            "postLink": "t.me/other/4001",
            "postDate": 1643116000,
            "channelId": 55
        }
    ])
}

pub fn forwards() -> Value {
    json!([
        {
            "forwardId": 8001,
            "postId": 5001,
            "postLink": "t.me/other/5001",
            "postDate": 1643117000,
            "channelId": 55
        }
    ])
}

pub fn subscribers() -> Value {
    json!([
        {"period": "2022-01-26", "participants_count": "180000"},
        {"period": "2022-01-25", "participants_count": 179500}
    ])
}

pub fn views() -> Value {
    json!([
        {"period": "2022-01-26", "views_count": 510000},
        {"period": "2022-01-25", "views_count": 498000}
    ])
}

pub fn avg_posts_reach() -> Value {
    json!([
        {"period": "2022-01-26", "avg_posts_reach": 42000.5}
    ])
}

pub fn err() -> Value {
    json!([
        {"period": "2022-01-26", "err": 23.3}
    ])
}

pub fn mentions_by_period() -> Value {
    json!([
        {"period": "2022-01-25", "mentions_count": 14, "views_count": 91000},
        {"period": "2022-01-26", "mentions_count": 9, "views_count": 60000}
    ])
}

pub fn mentions_by_channels() -> Value {
    json!([
        {"channel_id": CHANNEL_ID, "mentions_count": 4, "views_count": 200000, "last_mention_date": 1643113399}
    ])
}

pub fn usage() -> Value {
    json!([
        {
            "serviceKey": "stat",
            "title": "Stat API S",
            "spentChannels": "12/100",
            "spentRequests": "340/10000",
            "expiredAt": 1798761600
        },
        {
            "serviceKey": "search",
            "title": "Search API S",
            "spentWords": 3,
            "spentRequests": 17,
            "expiredAt": 1798761600
        }
    ])
}

fn localized(entries: &[(&str, &str, &str)], english: bool) -> Value {
    entries
        .iter()
        .map(|(code, ru, en)| json!({"code": code, "name": if english { en } else { ru }}))
        .collect()
}

pub fn countries(english: bool) -> Value {
    localized(
        &[
            ("ru", "Россия", "Russia"),
            ("ua", "Украина", "Ukraine"),
            ("by", "Беларусь", "Belarus"),
        ],
        english,
    )
}

pub fn categories(english: bool) -> Value {
    localized(
        &[
            ("blogs", "Блоги", "Blogs"),
            ("news", "Новости и СМИ", "News and media"),
            ("tech", "Технологии", "Technologies"),
        ],
        english,
    )
}

pub fn languages(english: bool) -> Value {
    localized(
        &[("russian", "Русский", "Russian"), ("english", "Английский", "English")],
        english,
    )
}
