//! Structured reporting of bot lifecycle events.

use std::sync::Arc;
use std::time::Duration;

use queuebot_config::Config;

use crate::bootstrap::BootstrapError;
use crate::protocol::{ConnectError, SessionEnd};

const HEALTH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::health");

/// Observer notified as the bot starts, connects and reconnects.
pub trait HealthReporter: Send + Sync {
    /// Bootstrap is about to load configuration.
    fn bootstrap_starting(&self);

    /// Bootstrap completed.
    fn bootstrap_succeeded(&self, config: &Config);

    /// Bootstrap failed.
    fn bootstrap_failed(&self, error: &BootstrapError);

    /// A connection attempt is starting; `attempt` counts consecutive tries.
    fn connecting(&self, attempt: u32);

    /// A socket is open at `endpoint`.
    fn connected(&self, endpoint: &str);

    /// An open connection ended.
    fn connection_lost(&self, end: &SessionEnd);

    /// A connection attempt failed.
    fn connect_failed(&self, error: &ConnectError);

    /// Retry number `attempt` will run after `delay`.
    fn reconnect_scheduled(&self, attempt: u32, delay: Duration);
}

impl<T> HealthReporter for Arc<T>
where
    T: HealthReporter + ?Sized,
{
    fn bootstrap_starting(&self) {
        (**self).bootstrap_starting();
    }

    fn bootstrap_succeeded(&self, config: &Config) {
        (**self).bootstrap_succeeded(config);
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        (**self).bootstrap_failed(error);
    }

    fn connecting(&self, attempt: u32) {
        (**self).connecting(attempt);
    }

    fn connected(&self, endpoint: &str) {
        (**self).connected(endpoint);
    }

    fn connection_lost(&self, end: &SessionEnd) {
        (**self).connection_lost(end);
    }

    fn connect_failed(&self, error: &ConnectError) {
        (**self).connect_failed(error);
    }

    fn reconnect_scheduled(&self, attempt: u32, delay: Duration) {
        (**self).reconnect_scheduled(attempt, delay);
    }
}

/// Reporter that emits each event through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuredHealthReporter;

impl StructuredHealthReporter {
    /// Builds a new reporter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl HealthReporter for StructuredHealthReporter {
    fn bootstrap_starting(&self) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "bootstrap_starting",
            "starting bot bootstrap"
        );
    }

    fn bootstrap_succeeded(&self, config: &Config) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "bootstrap_succeeded",
            channel = %config.channel(),
            api_base_url = %config.api_base_url(),
            log_format = %config.log_format(),
            "bot bootstrap completed"
        );
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        tracing::error!(
            target: HEALTH_TARGET,
            event = "bootstrap_failed",
            %error,
            "bot bootstrap failed"
        );
    }

    fn connecting(&self, attempt: u32) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "connecting",
            attempt,
            "connecting to chat platform"
        );
    }

    fn connected(&self, endpoint: &str) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "connected",
            endpoint,
            "connection established"
        );
    }

    fn connection_lost(&self, end: &SessionEnd) {
        tracing::warn!(
            target: HEALTH_TARGET,
            event = "connection_lost",
            reason = %end,
            "connection lost; reconnecting"
        );
    }

    fn connect_failed(&self, error: &ConnectError) {
        tracing::error!(
            target: HEALTH_TARGET,
            event = "connect_failed",
            %error,
            retryable = error.is_retryable(),
            "connection attempt failed"
        );
    }

    fn reconnect_scheduled(&self, attempt: u32, delay: Duration) {
        tracing::info!(
            target: HEALTH_TARGET,
            event = "reconnect_scheduled",
            attempt,
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            "reconnect scheduled"
        );
    }
}
