//! Runs the bot and races it against the shutdown signal.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};

use super::PROCESS_TARGET;
use super::errors::LaunchError;
use super::shutdown::{ShutdownSignal, SystemShutdownSignal};
use crate::bootstrap::{ConfigLoader, SystemConfigLoader, bootstrap_with};
use crate::health::{HealthReporter, StructuredHealthReporter};
use crate::protocol::{Connector, ProtocolClient};

/// Runs the bot until interrupted and maps the outcome to an exit status.
///
/// An operator interrupt exits with success; bootstrap failures and fatal
/// connection errors exit with failure.
#[must_use]
pub fn run_bot() -> ExitCode {
    let reporter: Arc<dyn HealthReporter> = Arc::new(StructuredHealthReporter::new());
    match run_with(&SystemConfigLoader, reporter, &SystemShutdownSignal) {
        Ok(()) => ExitCode::SUCCESS,
        Err(launch_error) => {
            error!(target: PROCESS_TARGET, error = %launch_error, "queuebotd stopped");
            // Telemetry may not be installed yet when configuration fails.
            writeln!(io::stderr().lock(), "queuebotd: {launch_error}").ok();
            ExitCode::FAILURE
        }
    }
}

/// Bootstraps with `loader`, then runs the client on a current-thread
/// runtime until `shutdown` fires or the client fails.
///
/// # Errors
///
/// Returns [`LaunchError`] when bootstrap, runtime construction, the client
/// or the shutdown listener fails.
pub fn run_with(
    loader: &dyn ConfigLoader,
    reporter: Arc<dyn HealthReporter>,
    shutdown: &impl ShutdownSignal,
) -> Result<(), LaunchError> {
    let bot = bootstrap_with(loader, reporter)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|source| LaunchError::Runtime { source })?;
    let mut client = bot.into_client();
    runtime.block_on(run_until_shutdown(&mut client, shutdown))
}

/// Races the client against `shutdown`.
///
/// # Errors
///
/// Returns [`LaunchError::Client`] when the client stops on its own, and
/// [`LaunchError::Shutdown`] when the listener cannot be installed.
pub async fn run_until_shutdown<C: Connector>(
    client: &mut ProtocolClient<C>,
    shutdown: &impl ShutdownSignal,
) -> Result<(), LaunchError> {
    tokio::select! {
        biased;
        signal = shutdown.wait() => {
            signal?;
            info!(target: PROCESS_TARGET, "stopping on operator request");
            Ok(())
        }
        source = client.run() => Err(LaunchError::Client { source }),
    }
}
