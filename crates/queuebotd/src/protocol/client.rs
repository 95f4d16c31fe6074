//! Reconnecting client loop.

use std::sync::Arc;
use std::time::Duration;

use queuebot_config::Config;
use tracing::debug;

use super::PROTOCOL_TARGET;
use super::connector::{Connection, Connector};
use super::errors::ClientError;
use super::session::{Session, SessionReport};
use crate::dispatch::EventDispatcher;
use crate::health::HealthReporter;

/// Backoff applied between failed reconnect attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconnectPolicy {
    initial: Duration,
    max: Duration,
    max_attempts: Option<u32>,
}

impl ReconnectPolicy {
    /// Builds a policy. `max_attempts` of `None` retries forever.
    #[must_use]
    pub const fn new(initial: Duration, max: Duration, max_attempts: Option<u32>) -> Self {
        Self {
            initial,
            max,
            max_attempts,
        }
    }

    /// Builds the policy described by `config`.
    #[must_use]
    pub const fn from_config(config: &Config) -> Self {
        Self::new(
            config.reconnect_initial_backoff(),
            config.reconnect_max_backoff(),
            config.max_reconnect_attempts(),
        )
    }

    /// Delay before the `attempt`th consecutive retry, counting from 1.
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        self.initial
            .checked_mul(1_u32 << exponent)
            .map_or(self.max, |delay| delay.min(self.max))
    }

    /// Whether another attempt may follow `failures` consecutive failures.
    #[must_use]
    pub const fn allows(&self, failures: u32) -> bool {
        match self.max_attempts {
            Some(limit) => failures < limit,
            None => true,
        }
    }
}

/// Keeps the bot connected, reconnecting whenever a session ends.
///
/// The dispatcher, and with it the queue, lives as long as the client, so
/// queue state survives reconnects.
pub struct ProtocolClient<C> {
    connector: C,
    dispatcher: EventDispatcher,
    policy: ReconnectPolicy,
    reporter: Arc<dyn HealthReporter>,
}

impl<C: Connector> ProtocolClient<C> {
    /// Creates a client.
    pub const fn new(
        connector: C,
        dispatcher: EventDispatcher,
        policy: ReconnectPolicy,
        reporter: Arc<dyn HealthReporter>,
    ) -> Self {
        Self {
            connector,
            dispatcher,
            policy,
            reporter,
        }
    }

    /// Event dispatcher holding the queue.
    pub const fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    /// Connects and serves sessions until a fatal connection error occurs.
    ///
    /// Failing to establish the first connection is fatal, as is a rejected
    /// handshake. Other failures after a successful connection are retried
    /// with exponential backoff until the policy's attempt limit is reached.
    /// A session that ends is followed immediately by a fresh connection.
    pub async fn run(&mut self) -> ClientError {
        let mut connected_before = false;
        let mut failures: u32 = 0;
        loop {
            self.reporter.connecting(failures.saturating_add(1));
            let error = match self.connector.connect().await {
                Ok(connection) => {
                    connected_before = true;
                    failures = 0;
                    let report = self.serve(connection).await;
                    debug!(
                        target: PROTOCOL_TARGET,
                        sent = report.pending.len(),
                        awaiting = report.pending.awaiting(),
                        "session finished"
                    );
                    continue;
                }
                Err(error) => error,
            };
            self.reporter.connect_failed(&error);
            if !connected_before {
                return ClientError::InitialConnect { source: error };
            }
            if !error.is_retryable() {
                return ClientError::Rejected { source: error };
            }
            failures = failures.saturating_add(1);
            if !self.policy.allows(failures) {
                return ClientError::ReconnectExhausted {
                    attempts: failures,
                    source: error,
                };
            }
            let delay = self.policy.delay_for(failures);
            self.reporter.reconnect_scheduled(failures, delay);
            tokio::time::sleep(delay).await;
        }
    }

    async fn serve(&mut self, connection: Connection<C::Sink, C::Stream>) -> SessionReport {
        self.reporter.connected(&connection.endpoint);
        self.dispatcher.set_self_user(connection.bot_user_id);
        let report = Session::new(&mut self.dispatcher)
            .run(connection.sink, connection.stream)
            .await;
        self.reporter.connection_lost(&report.end);
        report
    }
}
