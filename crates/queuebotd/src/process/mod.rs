//! Process entry point: bootstrap, runtime, and graceful shutdown.

mod errors;
mod launch;
mod shutdown;

pub use errors::LaunchError;
pub use launch::{run_bot, run_until_shutdown, run_with};
pub use shutdown::{ShutdownError, ShutdownSignal, SystemShutdownSignal};

pub(crate) const PROCESS_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::process");
