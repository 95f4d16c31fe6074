//! Ordered recognition rules for chat commands.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::intent::Intent;
use crate::mention::{first_mention, mentions};

/// `q` or `queue` followed by a clear call or a bracketed mention list.
///
/// Group 1 holds the method name of a clear call; group 2 holds the list body
/// of an assignment.
static QUEUE_CHANGE: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?i)q(?:ueue)?(?:\.(clear|empty)\(\s*\)|\s*=\s*\[\s*((?:<@\w+>\s*)*)\s*\])")
});

static DEQUEUE: Lazy<Regex> = Lazy::new(|| compile(r"^(?:omw|de?q(?:ueue)?)\b"));

static ENQUEUE: Lazy<Regex> = Lazy::new(|| compile(r"^e?nq(?:ueue)?\b"));

static HELP: Lazy<Regex> = Lazy::new(|| compile(r"^q(?:ueue)?(?:bot)?\b.+\bhelp\b"));

static STATUS: Lazy<Regex> = Lazy::new(|| compile(r"^q(?:ueue)?(?:bot)?\b.+\bstatus\b"));

#[expect(clippy::expect_used, reason = "patterns are compile-time constants")]
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("command pattern should compile")
}

fn normalise(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Classifies `text` into exactly one [`Intent`].
#[must_use]
pub fn classify(text: &str) -> Intent {
    if let Some(intent) = classify_override(text) {
        return intent;
    }

    if is_dequeue(text) {
        return Intent::Dequeue {
            target: first_mention(text),
        };
    }

    if is_enqueue(text) {
        return Intent::Enqueue;
    }

    if is_help(text) {
        return Intent::HelpRequest;
    }

    if is_status(text) {
        return Intent::StatusRequest;
    }

    Intent::Unrecognized
}

/// Returns the requested queue contents, or `None` when `text` holds no
/// well-formed override.
///
/// A clear call yields an empty list. Stray text inside the brackets makes
/// the whole expression fail to match.
#[must_use]
pub fn queue_change(text: &str) -> Option<Vec<String>> {
    match classify_override(text)? {
        Intent::QueueOverride { tokens } => Some(tokens),
        _ => Some(Vec::new()),
    }
}

fn classify_override(text: &str) -> Option<Intent> {
    let captures = QUEUE_CHANGE.captures(text)?;
    if captures.get(1).is_some() {
        return Some(Intent::QueueClear);
    }
    let body = captures.get(2).map_or("", |body| body.as_str());
    Some(Intent::QueueOverride {
        tokens: mentions(body),
    })
}

/// Whether `text` starts with a dequeue keyword.
#[must_use]
pub fn is_dequeue(text: &str) -> bool {
    DEQUEUE.is_match(&normalise(text))
}

/// Whether `text` starts with an enqueue keyword.
#[must_use]
pub fn is_enqueue(text: &str) -> bool {
    ENQUEUE.is_match(&normalise(text))
}

/// Whether `text` addresses the bot and asks for help.
#[must_use]
pub fn is_help(text: &str) -> bool {
    HELP.is_match(&normalise(text))
}

/// Whether `text` addresses the bot and asks for its status.
#[must_use]
pub fn is_status(text: &str) -> bool {
    STATUS.is_match(&normalise(text))
}
