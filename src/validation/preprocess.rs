//! Attribute file cleanup before content checks.
//!
//! Strips regions that never carry attribute definitions: comment blocks,
//! line comments, listing and literal blocks, and internal-only conditionals.

use regex::{Captures, Regex};
use std::sync::LazyLock;

// Compile regexes once at startup
static MULTI_LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"(/{4,})(.*\n)*?(/{4,})").expect("Invalid comment block regex")
});
static SINGLE_LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"(?m)^//(.*)\n").expect("Invalid line comment regex")
});
static CODE_BLOCK_DASHES: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"(-{4,})(.*\n)*?(-{4,})").expect("Invalid listing block regex")
});
static CODE_BLOCK_DOTS: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"(\.{4,})(.*\n)*?(\.{4,})").expect("Invalid literal block regex")
});
static INTERNAL_IFDEF: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"(ifdef::internal\[\])(.*\n)*?(endif::\[\])").expect("Invalid ifdef regex")
});

/// Drop `//` line comments. A line opening with `////` is a comment block
/// delimiter and stays.
fn strip_line_comments(text: &str) -> String {
    SINGLE_LINE_COMMENT
        .replace_all(text, |caps: &Captures<'_>| {
            if caps[1].starts_with("//") {
                caps[0].to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
}

/// Remove comments, code blocks and internal conditionals from `text`.
///
/// Passes run in a fixed order and each removes every non-overlapping match.
pub fn clean(text: &str) -> String {
    let stripped = MULTI_LINE_COMMENT.replace_all(text, "");
    let stripped = strip_line_comments(&stripped);
    let stripped = CODE_BLOCK_DASHES.replace_all(&stripped, "");
    let stripped = CODE_BLOCK_DOTS.replace_all(&stripped, "");
    let stripped = INTERNAL_IFDEF.replace_all(&stripped, "");
    stripped.into_owned()
}
