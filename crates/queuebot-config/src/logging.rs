//! Log output format selection.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How the bot writes log events to standard error.
///
/// Parsed case-insensitively from `json` or `compact`, whether the value comes
/// from a configuration file, `QUEUEBOT_LOG_FORMAT`, or `--log-format`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// One flattened JSON object per event.
    #[default]
    Json,
    /// Terse human-readable lines.
    Compact,
}

/// Error returned when text names no [`LogFormat`].
pub type LogFormatParseError = strum::ParseError;
