//! Test suites for the queue bot.

pub(crate) mod support;
