// envstack: Layered Environment Variable Resolution
//
// SPDX-FileCopyrightText: 2026 envstack contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        EnvStackError (16 bytes)
//!               |
//!      +--------+--------+--------+
//!      v        v        v        v
//!    Parse    Config     Io     Other
//!    Box      Box        Box    Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Parse   InvalidInput, MalformedEntry
//!   Config  ReadError, ParseError, InvalidValue, Deserialize
//!
//! All variants boxed => EnvStackError stays pointer-sized.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvStackError`].
pub type EnvStackResult<T> = std::result::Result<T, EnvStackError>;

/// Result type for collector parsing.
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum EnvStackError {
    /// Environment variable string parsing failed.
    #[error("parse error: {0}")]
    Parse(#[from] Box<ParseError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvStackError {
                fn from(err: $error) -> Self {
                    EnvStackError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ParseError => Parse,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Parse Errors ---

/// Errors raised while turning a delimited string into a collector.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The raw string was rejected by the validator.
    #[error("invalid environment variable input '{input}': {message}")]
    InvalidInput { input: String, message: String },

    /// An entry did not split into exactly one key and one value.
    #[error("malformed environment variable entry '{entry}': expected exactly one '{kv_delim}'")]
    MalformedEntry { entry: String, kv_delim: char },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Merged configuration could not be deserialized.
    #[error("failed to load configuration: {0}")]
    Deserialize(String),
}

#[cfg(test)]
mod tests;
