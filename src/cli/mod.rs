// envstack: Layered Environment Variable Resolution
//
// SPDX-FileCopyrightText: 2026 envstack contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envstack using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envstack [global options] <command>
//! version
//! resolve [--env STRING]... [--json]
//! check <STRING>
//! ```

pub mod global;
pub mod resolve;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::resolve::{CheckArgs, ResolveArgs};
use clap::{Parser, Subcommand};

/// Layered environment variable resolution for deployment CLIs.
///
/// Collects environment variable add/remove instructions from config files
/// and `--env` strings, merges them in ascending priority, and prints the
/// reconciled result.
#[derive(Debug, Parser)]
#[command(
    name = "envstack",
    author,
    version,
    about = "Layered environment variable resolution",
    after_help = "CONFIG FILES:\n\n\
                  By default, envstack loads an optional `envstack.toml` from\n\
                  the current directory. Additional files can be specified\n\
                  with --config; later files override earlier ones. Layers\n\
                  from config files always have lower priority than --env\n\
                  strings. Use --no-default-config to only use --config."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Resolves all environment layers and prints the final variables.
    Resolve(ResolveArgs),

    /// Validates a single delimited environment variable string.
    Check(CheckArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
