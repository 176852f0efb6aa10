//! Crate-level error types.

use std::{fmt, num::ParseFloatError};

/// Errors produced by the orbitcam crate.
#[derive(Debug)]
pub enum OrbitError {
    /// A setter received text that is not a decimal number.
    Parse {
        /// Name of the setting that rejected the input.
        setting: &'static str,
        /// The rejected text, verbatim.
        input: String,
        /// Underlying float parse failure.
        source: ParseFloatError,
    },
    /// A keyed setting received a flag or selector it cannot interpret.
    InvalidValue {
        /// Name of the setting that rejected the input.
        setting: &'static str,
        /// The rejected text, verbatim.
        input: String,
    },
    /// A keyed setting name that no setter handles.
    UnknownSetting(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for OrbitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse {
                setting,
                input,
                source,
            } => {
                write!(f, "invalid value {input:?} for {setting}: {source}")
            }
            Self::InvalidValue { setting, input } => {
                write!(f, "invalid value {input:?} for {setting}")
            }
            Self::UnknownSetting(key) => write!(f, "unknown setting: {key}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for OrbitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse { source, .. } => Some(source),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrbitError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
