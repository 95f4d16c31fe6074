//! Mention token extraction.
//!
//! A mention is `<@` followed by one or more word characters and `>`. A pair
//! of delimiters wrapping only whitespace is not a mention.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::grammar::compile;

static MENTION: Lazy<Regex> = Lazy::new(|| compile(r"<@\w+>"));

/// Formats a platform user identifier as a mention token.
#[must_use]
pub fn mention_for(user_id: &str) -> String {
    format!("<@{user_id}>")
}

/// Returns the first mention token anywhere in `text`.
#[must_use]
pub fn first_mention(text: &str) -> Option<String> {
    MENTION.find(text).map(|found| found.as_str().to_owned())
}

/// Returns every mention token in `text`, in order of appearance.
#[must_use]
pub fn mentions(text: &str) -> Vec<String> {
    MENTION
        .find_iter(text)
        .map(|found| found.as_str().to_owned())
        .collect()
}
