//! Compiled regular expressions shared by the markdown passes.

use regex::Regex;

#[expect(
    clippy::expect_used,
    reason = "patterns are string literals exercised by the unit tests"
)]
pub(super) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("markdown pattern must compile")
}
