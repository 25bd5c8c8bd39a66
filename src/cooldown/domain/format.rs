//! Human-readable cooldown durations.

use std::time::Duration;

/// Cooldown applied to commands that do not declare one.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(3);

/// Placeholder replaced by the remaining cooldown.
pub const COOLDOWN_PLACEHOLDER: &str = "{cooldown}";

/// Message sent when a command is still cooling down.
pub const DEFAULT_COOLDOWN_MESSAGE: &str =
    "stop spamming my commands dude, you have to wait {cooldown}";

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

fn unit(count: u64, singular: &str) -> String {
    if count == 1 {
        format!("1 {singular}")
    } else {
        format!("{count} {singular}s")
    }
}

/// Formats a duration as `"1 day, 2 hours, 3 minutes and 4 seconds"`.
///
/// Partial seconds round up so that a pending cooldown never reads as
/// zero. Zero-valued units are omitted; an empty duration is
/// `"0 seconds"`.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs() + u64::from(duration.subsec_nanos() > 0);

    let days = total.div_euclid(SECONDS_PER_DAY);
    let hours = total.rem_euclid(SECONDS_PER_DAY).div_euclid(SECONDS_PER_HOUR);
    let minutes = total
        .rem_euclid(SECONDS_PER_HOUR)
        .div_euclid(SECONDS_PER_MINUTE);
    let seconds = total.rem_euclid(SECONDS_PER_MINUTE);

    let mut parts: Vec<String> = [(days, "day"), (hours, "hour"), (minutes, "minute")]
        .into_iter()
        .filter(|&(count, _)| count > 0)
        .map(|(count, name)| unit(count, name))
        .collect();
    if seconds > 0 || parts.is_empty() {
        parts.push(unit(seconds, "second"));
    }

    match parts.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} and {last}", rest.join(", ")),
        Some((last, _)) => last.clone(),
        None => String::new(),
    }
}

/// Fills the first `{cooldown}` placeholder in `template`.
#[must_use]
pub fn render_cooldown_message(template: &str, remaining: Duration) -> String {
    template.replacen(COOLDOWN_PLACEHOLDER, &format_duration(remaining), 1)
}
