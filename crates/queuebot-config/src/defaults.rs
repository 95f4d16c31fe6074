use crate::logging::LogFormat;

/// Base URL of the chat platform's web API.
pub const DEFAULT_API_BASE_URL: &str = "https://slack.com/api";

/// Channel served when none is configured.
pub const DEFAULT_CHANNEL: &str = "C77DZM4F9";

/// Default log filter expression used by the binaries.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Delay before the first reconnect attempt, in milliseconds.
pub const DEFAULT_RECONNECT_INITIAL_BACKOFF_MS: u64 = 500;

/// Upper bound on the reconnect delay, in milliseconds.
pub const DEFAULT_RECONNECT_MAX_BACKOFF_MS: u64 = 30_000;

/// Consecutive reconnect failures tolerated; zero retries forever.
pub const DEFAULT_MAX_RECONNECT_ATTEMPTS: u32 = 0;

/// Environment variable holding the credential when no configuration layer
/// supplies one.
pub const LEGACY_TOKEN_ENV_VAR: &str = "SLACK_BOT_TOKEN";

/// Default log filter expression used by the binaries.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format for the binaries.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Json
}

/// Owned API base URL for serde defaults.
#[must_use]
pub fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_owned()
}

/// Owned channel identifier for serde defaults.
#[must_use]
pub fn default_channel() -> String {
    DEFAULT_CHANNEL.to_owned()
}

/// Initial reconnect backoff for serde defaults.
#[must_use]
pub const fn default_reconnect_initial_backoff_ms() -> u64 {
    DEFAULT_RECONNECT_INITIAL_BACKOFF_MS
}

/// Maximum reconnect backoff for serde defaults.
#[must_use]
pub const fn default_reconnect_max_backoff_ms() -> u64 {
    DEFAULT_RECONNECT_MAX_BACKOFF_MS
}

/// Reconnect attempt budget for serde defaults.
#[must_use]
pub const fn default_max_reconnect_attempts() -> u32 {
    DEFAULT_MAX_RECONNECT_ATTEMPTS
}
