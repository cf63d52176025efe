//! Transcript scrubbing.
//!
//! Recorded request/response transcripts carry the card number, the card
//! verification value and the merchant secret in plain text. [`scrub`]
//! replaces the body of those elements with [`FILTERED`] and leaves every
//! other byte untouched.

use std::sync::LazyLock;

use regex::Regex;

/// Replacement marker written in place of a redacted element body.
pub const FILTERED: &str = "[FILTERED]";

/// Element names whose text content is redacted.
pub const SENSITIVE_ELEMENTS: [&str; 3] = ["number", "cv2", "secret"];

static SENSITIVE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    SENSITIVE_ELEMENTS
        .iter()
        .map(|name| {
            Regex::new(&format!(r"(<{name}>).+?(</{name}>)"))
                .expect("sensitive element pattern is a valid regex")
        })
        .collect()
});

/// Redacts sensitive element bodies from a transcript.
///
/// Idempotent: scrubbing an already scrubbed transcript is a no-op.
#[must_use]
pub fn scrub(transcript: &str) -> String {
    let replacement = format!("${{1}}{FILTERED}${{2}}");
    SENSITIVE_PATTERNS
        .iter()
        .fold(transcript.to_owned(), |text, pattern| {
            pattern.replace_all(&text, replacement.as_str()).into_owned()
        })
}
