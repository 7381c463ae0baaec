//! Per-resource operations.
//!
//! Each submodule adds `build_*` and calling methods to `TgStatClient` for
//! one resource family, together with the request structs and their
//! validation rules. Field names given to the validator are the wire names,
//! so error messages match what the API documents.

pub mod callback;
pub mod channels;
pub mod database;
pub mod posts;
pub mod usage;
pub mod words;

pub use callback::{SubscribeChannelRequest, SubscribeWordRequest, SubscriptionsListRequest};
pub use channels::{
    AddRequest, ForwardsRequest, MentionsRequest, PostsRequest, SearchRequest, SubscribersRequest, ViewsRequest,
};
pub use posts::{PostSearchRequest, PostStatRequest};
pub use words::{MentionsByChannelsRequest, MentionsByPeriodRequest};

/// Accepted values of the `peerType` / `peer_types` parameters.
pub const PEER_TYPES: &[&str] = &["channel", "chat", "all"];
