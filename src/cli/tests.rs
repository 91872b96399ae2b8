// envstack: Layered Environment Variable Resolution
//
// SPDX-FileCopyrightText: 2026 envstack contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use clap::Parser;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["envstack", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_resolve_with_env_strings() {
    let cli = Cli::try_parse_from([
        "envstack",
        "resolve",
        "-e",
        "A=1,B=",
        "--env",
        "C=3",
        "--json",
    ])
    .unwrap();

    let Some(Command::Resolve(args)) = cli.command else {
        panic!("expected resolve command");
    };
    assert_eq!(args.env, ["A=1,B=", "C=3"]);
    assert!(args.json);
}

#[test]
fn test_parse_check() {
    let cli = Cli::try_parse_from(["envstack", "check", "A=1,B="]).unwrap();
    let Some(Command::Check(args)) = cli.command else {
        panic!("expected check command");
    };
    assert_eq!(args.envvars, "A=1,B=");
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "envstack",
        "-l",
        "4",
        "-c",
        "base.toml",
        "-c",
        "override.toml",
        "--no-default-config",
        "resolve",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(cli.global.configs.len(), 2);
    assert!(cli.global.no_default_config);
}

#[test]
fn test_parse_invalid_log_level() {
    // Log level must be 0-5
    let result = Cli::try_parse_from(["envstack", "-l", "9", "resolve"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_check_requires_string() {
    let result = Cli::try_parse_from(["envstack", "check"]);
    assert!(result.is_err());
}
