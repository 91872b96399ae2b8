// envstack: Layered Environment Variable Resolution
//
// SPDX-FileCopyrightText: 2026 envstack contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the resolve and check commands.

use clap::Args;

/// Arguments for the resolve command.
#[derive(Debug, Clone, Default, Args)]
pub struct ResolveArgs {
    /// Delimited environment variable string such as 'KEY=VALUE,DROP='.
    /// Can be specified multiple times; later strings take priority.
    #[arg(short = 'e', long = "env", value_name = "STRING", action = clap::ArgAction::Append)]
    pub env: Vec<String>,

    /// Print the resolved variables as a JSON object.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the check command.
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Delimited environment variable string to validate.
    #[arg(value_name = "STRING")]
    pub envvars: String,
}
