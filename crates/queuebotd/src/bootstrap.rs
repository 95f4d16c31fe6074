//! Start-up orchestration: configuration, telemetry and credential.

use std::sync::Arc;

use ortho_config::OrthoError;
use queuebot_config::{BotToken, Config, CredentialError};
use thiserror::Error;

use crate::dispatch::EventDispatcher;
use crate::health::HealthReporter;
use crate::protocol::{ProtocolClient, ReconnectPolicy, RtmConnector};
use crate::telemetry::{self, TelemetryError, TelemetryHandle};

/// Source of the bot configuration.
pub trait ConfigLoader: Send + Sync {
    /// Loads the configuration.
    fn load(&self) -> Result<Config, Arc<OrthoError>>;
}

/// Loader that reads every configuration layer via [`Config::load`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemConfigLoader;

impl ConfigLoader for SystemConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Config::load()
    }
}

/// Loader returning a fixed configuration.
#[derive(Debug, Clone)]
pub struct StaticConfigLoader {
    config: Config,
}

impl StaticConfigLoader {
    /// Wraps `config`.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ConfigLoader for StaticConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Ok(self.config.clone())
    }
}

/// Errors that stop the bot before it connects.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Configuration failed to load.
    #[error("failed to load configuration: {source}")]
    Configuration {
        /// Underlying loader error.
        #[source]
        source: Arc<OrthoError>,
    },
    /// Telemetry failed to initialise.
    #[error("failed to initialise telemetry: {source}")]
    Telemetry {
        /// Underlying telemetry error.
        #[source]
        source: TelemetryError,
    },
    /// No credential is configured.
    #[error("failed to resolve credential: {source}")]
    Credential {
        /// Underlying credential error.
        #[source]
        source: CredentialError,
    },
}

/// A bootstrapped bot, ready to connect.
pub struct Bot {
    config: Config,
    token: BotToken,
    telemetry: TelemetryHandle,
    reporter: Arc<dyn HealthReporter>,
}

impl Bot {
    /// Resolved configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Resolved credential.
    #[must_use]
    pub const fn token(&self) -> &BotToken {
        &self.token
    }

    /// Telemetry handle, mainly useful in tests.
    #[must_use]
    pub const fn telemetry(&self) -> TelemetryHandle {
        self.telemetry
    }

    /// Builds the client that connects through the platform handshake.
    #[must_use]
    pub fn into_client(self) -> ProtocolClient<RtmConnector> {
        let connector = RtmConnector::new(self.config.api_base_url(), self.token);
        let dispatcher = EventDispatcher::new(self.config.channel());
        let policy = ReconnectPolicy::from_config(&self.config);
        ProtocolClient::new(connector, dispatcher, policy, self.reporter)
    }
}

impl std::fmt::Debug for Bot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bot")
            .field("config", &self.config)
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

/// Loads configuration, installs telemetry and resolves the credential.
///
/// Every failure is reported to `reporter` before it is returned.
///
/// # Errors
///
/// Returns [`BootstrapError`] naming the step that failed.
pub fn bootstrap_with(
    loader: &dyn ConfigLoader,
    reporter: Arc<dyn HealthReporter>,
) -> Result<Bot, BootstrapError> {
    reporter.bootstrap_starting();
    let fail = |error: BootstrapError| {
        reporter.bootstrap_failed(&error);
        error
    };

    let config = loader
        .load()
        .map_err(|source| fail(BootstrapError::Configuration { source }))?;
    let telemetry = telemetry::initialise(&config)
        .map_err(|source| fail(BootstrapError::Telemetry { source }))?;
    let token = config
        .bot_token()
        .map_err(|source| fail(BootstrapError::Credential { source }))?;

    reporter.bootstrap_succeeded(&config);
    Ok(Bot {
        config,
        token,
        telemetry,
        reporter,
    })
}
