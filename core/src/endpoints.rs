//! Remote operation paths, relative to the configured endpoint.

pub const CHANNELS_GET: &str = "/channels/get";
pub const CHANNELS_SEARCH: &str = "/channels/search";
pub const CHANNELS_POSTS: &str = "/channels/posts";
pub const CHANNELS_STAT: &str = "/channels/stat";
pub const CHANNELS_MENTIONS: &str = "/channels/mentions";
pub const CHANNELS_FORWARDS: &str = "/channels/forwards";
pub const CHANNELS_SUBSCRIBERS: &str = "/channels/subscribers";
pub const CHANNELS_VIEWS: &str = "/channels/views";
pub const CHANNELS_AVG_POSTS_REACH: &str = "/channels/avg-posts-reach";
pub const CHANNELS_ERR: &str = "/channels/err";
pub const CHANNELS_ADD: &str = "/channels/add";

pub const POSTS_GET: &str = "/posts/get";
pub const POSTS_STAT: &str = "/posts/stat";
pub const POSTS_SEARCH: &str = "/posts/search";

pub const WORDS_MENTIONS_BY_PERIOD: &str = "/words/mentions-by-period";
pub const WORDS_MENTIONS_BY_CHANNELS: &str = "/words/mentions-by-channels";

pub const USAGE_STAT: &str = "/usage/stat";

pub const DATABASE_COUNTRIES: &str = "/database/countries";
pub const DATABASE_CATEGORIES: &str = "/database/categories";
pub const DATABASE_LANGUAGES: &str = "/database/languages";

pub const CALLBACK_SET_URL: &str = "/callback/set-callback-url";
pub const CALLBACK_GET_INFO: &str = "/callback/get-callback-info";
pub const CALLBACK_SUBSCRIBE_CHANNEL: &str = "/callback/subscribe-channel";
pub const CALLBACK_SUBSCRIBE_WORD: &str = "/callback/subscribe-word";
pub const CALLBACK_SUBSCRIPTIONS_LIST: &str = "/callback/subscriptions-list";
pub const CALLBACK_UNSUBSCRIBE: &str = "/callback/unsubscribe";
