//! Resolution of the bot credential.
//!
//! The credential may arrive through any configuration layer (file,
//! `QUEUEBOT_BOT_TOKEN`, or `--bot-token`). Deployments that predate the
//! layered configuration export `SLACK_BOT_TOKEN` instead, so that variable is
//! consulted last.

use std::env;
use std::fmt;

use thiserror::Error;

use crate::defaults::LEGACY_TOKEN_ENV_VAR;

/// Secret token exchanged for a connection endpoint.
///
/// Formatting never reveals the secret; call [`BotToken::expose`] when the raw
/// value must be sent to the platform.
#[derive(Clone, PartialEq, Eq)]
pub struct BotToken(String);

impl BotToken {
    /// Wraps a raw token value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw secret.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BotToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("BotToken(<redacted>)")
    }
}

impl fmt::Display for BotToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<redacted>")
    }
}

/// Errors raised while resolving the credential.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    /// No configuration layer or legacy variable supplied a token.
    #[error("no bot token configured; set QUEUEBOT_BOT_TOKEN or SLACK_BOT_TOKEN")]
    Missing,
}

/// Resolves the credential from the configured value or the process
/// environment.
pub(crate) fn resolve(configured: Option<&str>) -> Result<BotToken, CredentialError> {
    resolve_with(configured, |key| env::var(key).ok())
}

/// Resolves the credential using the supplied environment lookup.
///
/// Blank values count as absent so an exported but empty variable still
/// fails fast.
pub(crate) fn resolve_with<F>(configured: Option<&str>, lookup: F) -> Result<BotToken, CredentialError>
where
    F: FnOnce(&str) -> Option<String>,
{
    if let Some(value) = configured.map(str::trim).filter(|value| !value.is_empty()) {
        return Ok(BotToken::new(value));
    }

    lookup(LEGACY_TOKEN_ENV_VAR)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .map(BotToken::new)
        .ok_or(CredentialError::Missing)
}
