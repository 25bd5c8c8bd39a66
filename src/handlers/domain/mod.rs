//! Domain types shared by the built-in handlers.

mod feed;
mod text;

pub use feed::{FeedItem, FeedKind, MAX_BODY_LEN, MAX_TITLE_LEN};
pub use text::{code_list, truncate};
