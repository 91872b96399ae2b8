// envstack: Layered Environment Variable Resolution
//
// SPDX-FileCopyrightText: 2026 envstack contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use envstack::cli::{Cli, Command};

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["envstack", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

// =============================================================================
// Resolve Command
// =============================================================================

#[test]
fn cli_resolve_no_args() {
    let cli = Cli::try_parse_from(["envstack", "resolve"]).unwrap();
    let Some(Command::Resolve(args)) = cli.command else {
        panic!("expected resolve command");
    };
    assert!(args.env.is_empty());
    assert!(!args.json);
}

#[test]
fn cli_resolve_multiple_env_strings_keep_order() {
    let cli = Cli::try_parse_from([
        "envstack",
        "resolve",
        "--env",
        "BASE=1",
        "-e",
        "OVERRIDE=2,BASE=",
    ])
    .unwrap();
    let Some(Command::Resolve(args)) = cli.command else {
        panic!("expected resolve command");
    };
    assert_eq!(args.env, ["BASE=1", "OVERRIDE=2,BASE="]);
}

#[test]
fn cli_resolve_json_flag() {
    let cli = Cli::try_parse_from(["envstack", "resolve", "--json"]).unwrap();
    let Some(Command::Resolve(args)) = cli.command else {
        panic!("expected resolve command");
    };
    assert!(args.json);
}

// =============================================================================
// Check Command
// =============================================================================

#[test]
fn cli_check_takes_positional_string() {
    let cli = Cli::try_parse_from(["envstack", "check", "A=1,B=,C=3"]).unwrap();
    let Some(Command::Check(args)) = cli.command else {
        panic!("expected check command");
    };
    assert_eq!(args.envvars, "A=1,B=,C=3");
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_global_options_config_files() {
    let cli = Cli::try_parse_from([
        "envstack",
        "-c",
        "base.toml",
        "--config",
        "override.toml",
        "resolve",
    ])
    .unwrap();
    assert_eq!(cli.global.configs.len(), 2);
    assert_eq!(cli.global.configs[0].to_string_lossy(), "base.toml");
    assert_eq!(cli.global.configs[1].to_string_lossy(), "override.toml");
}

#[test]
fn cli_global_options_log_settings() {
    let cli =
        Cli::try_parse_from(["envstack", "-l", "5", "--log-file", "out.log", "resolve"]).unwrap();
    assert_eq!(cli.global.log_level, Some(5));
    assert!(cli.global.log_file.is_some());
}

#[test]
fn cli_global_options_no_default_config() {
    let cli = Cli::try_parse_from(["envstack", "--no-default-config", "resolve"]).unwrap();
    assert!(cli.global.no_default_config);
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn cli_invalid_log_level() {
    // Log level must be 0-5
    let result = Cli::try_parse_from(["envstack", "-l", "10", "resolve"]);
    assert!(result.is_err());
}

#[test]
fn cli_unknown_command() {
    let result = Cli::try_parse_from(["envstack", "deploy"]);
    assert!(result.is_err());
}
