//! Paginated feed commands.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::command::{
    domain::{CommandDescriptor, CommandResponse},
    ports::{CommandHandler, HandlerResult, InvocationContext},
};
use crate::gateway::domain::{Capability, Embed};
use crate::handlers::{
    domain::{FeedItem, FeedKind, MAX_BODY_LEN, MAX_TITLE_LEN, truncate},
    ports::FeedSource,
};

/// Reply when the feed has nothing to show.
pub const NO_POSTS_MESSAGE: &str = "No posts found!";

/// Shows the next post of a feed, cycling per tenant.
pub struct FeedCommand {
    source: Arc<dyn FeedSource>,
    endpoint: String,
    kind: FeedKind,
}

impl FeedCommand {
    /// Creates a feed command reading `endpoint` from `source`.
    #[must_use]
    pub fn new(source: Arc<dyn FeedSource>, endpoint: impl Into<String>, kind: FeedKind) -> Self {
        Self {
            source,
            endpoint: endpoint.into(),
            kind,
        }
    }

    /// Adds the capabilities every feed command needs.
    #[must_use]
    pub fn describe(descriptor: CommandDescriptor) -> CommandDescriptor {
        descriptor.requiring(Capability::EmbedLinks)
    }

    fn render(&self, item: FeedItem) -> Embed {
        let embed = Embed::new()
            .with_title(truncate(&item.title, MAX_TITLE_LEN))
            .with_url(format!("https://reddit.com{}", item.permalink))
            .with_footer(format!("posted by {}", item.author));
        match self.kind {
            FeedKind::Image => embed.with_image(item.url),
            FeedKind::Text => embed.with_description(truncate(&item.body, MAX_BODY_LEN)),
        }
    }
}

#[async_trait]
impl CommandHandler for FeedCommand {
    async fn run(&self, ctx: &InvocationContext) -> HandlerResult {
        let items: Vec<FeedItem> = match self.source.fetch(&self.endpoint).await {
            Ok(items) => items
                .into_iter()
                .filter(|item| self.kind.accepts(item))
                .collect(),
            Err(err) => {
                debug!(endpoint = %self.endpoint, error = %err, "feed fetch failed");
                return Ok(Some(CommandResponse::text(format!(
                    "Error fetching feed: {err}"
                ))));
            }
        };
        if items.is_empty() {
            return Ok(Some(CommandResponse::text(NO_POSTS_MESSAGE)));
        }

        let index = ctx.rotation().next(
            ctx.tenant_id(),
            ctx.command().canonical_trigger(),
            items.len(),
        )?;
        let Some(item) = items.into_iter().nth(index) else {
            return Ok(Some(CommandResponse::text(NO_POSTS_MESSAGE)));
        };
        Ok(Some(CommandResponse::embed(self.render(item))))
    }
}
