// envstack: Layered Environment Variable Resolution
//
// SPDX-FileCopyrightText: 2026 envstack contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   resolve, check
//! ```


use anyhow::Context;

use crate::cli::resolve::{CheckArgs, ResolveArgs};
use crate::collector::{EnvvarCollector, FormatValidator, resolve_layers};
use crate::config::EnvConfig;
use crate::error::{EnvStackResult, Result};

/// Main handler for the resolve command.
///
/// Config-file layers are parsed first (lowest priority), then each `--env`
/// string in order. The merged result is filtered and printed as sorted
/// `KEY=VALUE` lines, or as a JSON object with `--json`.
///
/// # Errors
///
/// Returns an error if any layer fails to validate or parse.
pub fn run_resolve_command(args: &ResolveArgs, config: &EnvConfig) -> Result<()> {
    let layers = collect_layers(config, &args.env)?;
    let resolved = resolve_layers(layers.iter()).filtered();

    let output = if args.json {
        render_json(&resolved)?
    } else {
        render_lines(&resolved)
    };
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Main handler for the check command.
///
/// # Errors
///
/// Returns an error if the string fails to validate or parse.
pub fn run_check_command(args: &CheckArgs) -> Result<()> {
    let collector = parse_layer(&args.envvars)
        .with_context(|| format!("invalid environment variable string '{}'", args.envvars))?;

    println!(
        "ok: {} variable(s) to set, {} to remove",
        collector.len(),
        collector.to_remove().len()
    );
    Ok(())
}

/// Parses config-file layers followed by CLI layers, ascending priority.
fn collect_layers(config: &EnvConfig, cli_layers: &[String]) -> EnvStackResult<Vec<EnvvarCollector>> {
    config
        .env
        .layers
        .iter()
        .chain(cli_layers)
        .map(|raw| {
            tracing::debug!(layer = %raw, "parsing environment layer");
            parse_layer(raw)
        })
        .collect()
}

fn parse_layer(raw: &str) -> EnvStackResult<EnvvarCollector> {
    use crate::collector::{KV_DELIM, VARIABLE_DELIM};
    let collector =
        EnvvarCollector::from_delimited(raw, VARIABLE_DELIM, KV_DELIM, &FormatValidator)?;
    Ok(collector)
}

fn render_lines(collector: &EnvvarCollector) -> String {
    collector
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_json(collector: &EnvvarCollector) -> Result<String> {
    serde_json::to_string_pretty(collector.vars()).context("failed to serialize resolved variables")
}
