//! Command-line entry point for the queue bot.

use std::process::ExitCode;

fn main() -> ExitCode {
    queuebotd::run_bot()
}
