//! Small text helpers for handler responses.

/// Returns at most `max_chars` characters of `text`.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Formats names as a comma-separated list of inline code spans.
#[must_use]
pub fn code_list<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(|name| format!("`{}`", name.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}
