//! Feed items and the filters applied to them.

use serde::{Deserialize, Serialize};

/// Longest title a feed embed shows.
pub const MAX_TITLE_LEN: usize = 256;

/// Longest body a feed embed shows.
pub const MAX_BODY_LEN: usize = 2000;

const IMAGE_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".gif", ".png", ".webp"];

/// One post returned by a feed source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedItem {
    /// Post title.
    pub title: String,
    /// Linked content, usually the image for image posts.
    pub url: String,
    /// Path of the post on the feed's site.
    pub permalink: String,
    /// Display name of the poster.
    pub author: String,
    /// Text body of self posts.
    pub body: String,
    /// Content hint reported by the source, such as `image`.
    pub post_hint: Option<String>,
}

impl FeedItem {
    /// Returns `true` when the post links to an image.
    #[must_use]
    pub fn is_image(&self) -> bool {
        if self.post_hint.as_deref() == Some("image") {
            return true;
        }
        let url = self.url.to_lowercase();
        IMAGE_EXTENSIONS.iter().any(|ext| url.contains(ext))
    }
}

/// Which posts a feed command shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedKind {
    /// Posts linking to an image.
    Image,
    /// Self posts short enough to fit an embed.
    Text,
}

impl FeedKind {
    /// Returns `true` when `item` can be shown by a feed of this kind.
    #[must_use]
    pub fn accepts(self, item: &FeedItem) -> bool {
        match self {
            Self::Image => item.is_image(),
            Self::Text => {
                !item.body.is_empty()
                    && item.body.chars().count() <= MAX_BODY_LEN
                    && item.title.chars().count() <= MAX_TITLE_LEN
            }
        }
    }
}
