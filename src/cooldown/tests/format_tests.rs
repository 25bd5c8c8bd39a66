//! Unit tests for cooldown duration formatting.

use std::time::Duration;

use crate::cooldown::domain::{
    DEFAULT_COOLDOWN_MESSAGE, format_duration, render_cooldown_message,
};
use rstest::rstest;

#[rstest]
#[case(Duration::ZERO, "0 seconds")]
#[case(Duration::from_millis(200), "1 second")]
#[case(Duration::from_millis(2_400), "3 seconds")]
#[case(Duration::from_secs(60), "1 minute")]
#[case(Duration::from_secs(65), "1 minute and 5 seconds")]
#[case(Duration::from_secs(7_200), "2 hours")]
#[case(Duration::from_secs(90_061), "1 day, 1 hour, 1 minute and 1 second")]
#[case(Duration::from_secs(2 * 86_400 + 30), "2 days and 30 seconds")]
fn formats_human_durations(#[case] duration: Duration, #[case] expected: &str) {
    assert_eq!(format_duration(duration), expected);
}

#[rstest]
fn default_message_embeds_remaining_time() {
    let message = render_cooldown_message(DEFAULT_COOLDOWN_MESSAGE, Duration::from_secs(2));

    assert_eq!(
        message,
        "stop spamming my commands dude, you have to wait 2 seconds"
    );
}

#[rstest]
fn only_first_placeholder_is_filled() {
    let message = render_cooldown_message("{cooldown} / {cooldown}", Duration::from_secs(1));

    assert_eq!(message, "1 second / {cooldown}");
}
