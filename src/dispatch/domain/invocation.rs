//! Prefix resolution and tokenizing.

use crate::gateway::domain::{Mention, UserId};

/// A message resolved to a candidate command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInvocation {
    /// The prefix exactly as typed.
    pub prefix: String,
    /// The first token, lower-cased.
    pub trigger: String,
    /// Remaining whitespace-separated tokens.
    pub args: Vec<String>,
}

/// Matches `<@id>` or `<@!id>` for the bot's own id at the start of
/// `content`. Returns the mention and the trimmed remainder.
fn strip_mention<'a>(content: &'a str, bot: &UserId) -> Option<(&'a str, &'a str)> {
    let after_open = content.strip_prefix("<@")?;
    let after_bang = after_open.strip_prefix('!').unwrap_or(after_open);
    let rest = after_bang
        .strip_prefix(bot.as_str())?
        .strip_prefix('>')?;
    let mention = content.get(..content.len() - rest.len())?;
    Some((mention, rest.trim()))
}

/// Matches `prefix` case-insensitively at the start of `content`.
fn strip_literal<'a>(content: &'a str, prefix: &str) -> Option<(&'a str, &'a str)> {
    if prefix.is_empty() {
        return None;
    }
    let head = content.get(..prefix.len())?;
    if head.to_lowercase() != prefix.to_lowercase() {
        return None;
    }
    let rest = content.get(prefix.len()..)?;
    Some((head, rest.trim()))
}

/// Resolves the prefix and splits the rest into trigger and arguments.
///
/// A mention of `bot_user_id` is tried before the tenant's literal
/// prefix. Returns `None` when neither matches or nothing follows the
/// prefix.
#[must_use]
pub fn parse_invocation(
    content: &str,
    bot_user_id: Option<&UserId>,
    tenant_prefix: &str,
) -> Option<ParsedInvocation> {
    let (prefix, rest) = bot_user_id
        .and_then(|bot| strip_mention(content, bot))
        .or_else(|| strip_literal(content, tenant_prefix))?;

    let mut tokens = rest.split_whitespace();
    let trigger = tokens.next()?.to_lowercase();
    Some(ParsedInvocation {
        prefix: prefix.to_owned(),
        trigger,
        args: tokens.map(str::to_owned).collect(),
    })
}

/// Replaces `<@id>` and `<@!id>` arguments with resolved user names.
///
/// Arguments that are not mentions, or mention users the gateway did not
/// resolve, are kept as typed.
#[must_use]
pub fn clean_args(args: &[String], mentions: &[Mention]) -> Vec<String> {
    args.iter()
        .map(|arg| {
            arg.strip_prefix("<@")
                .and_then(|inner| inner.strip_suffix('>'))
                .map(|inner| inner.strip_prefix('!').unwrap_or(inner))
                .and_then(|id| {
                    mentions
                        .iter()
                        .find(|mention| mention.user_id.as_str() == id)
                })
                .map_or_else(|| arg.clone(), |mention| mention.username.clone())
        })
        .collect()
}
