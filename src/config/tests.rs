// envstack: Layered Environment Variable Resolution
//
// SPDX-FileCopyrightText: 2026 envstack contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for configuration loading.

use super::EnvConfig;
use super::loader::ConfigLoader;

#[test]
fn test_default_config_is_empty() {
    let config = EnvConfig::default();
    assert!(config.env.layers.is_empty());
}

#[test]
fn test_load_from_toml_str() {
    let config = ConfigLoader::new()
        .add_toml_str(
            r#"
            [env]
            layers = ["BASE=1,DEBUG=", "REGION=us-east-1"]
            "#,
        )
        .build()
        .unwrap();

    assert_eq!(config.env.layers, ["BASE=1,DEBUG=", "REGION=us-east-1"]);
}

#[test]
fn test_later_sources_override_earlier() {
    let config = ConfigLoader::new()
        .add_toml_str("[env]\nlayers = [\"A=1\"]\n")
        .add_toml_str("[env]\nlayers = [\"B=2\"]\n")
        .build()
        .unwrap();

    assert_eq!(config.env.layers, ["B=2"]);
}

#[test]
fn test_empty_sources_yield_defaults() {
    let config = ConfigLoader::new().build().unwrap();
    assert!(config.env.layers.is_empty());
}

#[test]
fn test_unknown_keys_rejected() {
    let result = ConfigLoader::new()
        .add_toml_str("[env]\nlayer = [\"A=1\"]\n")
        .build();
    assert!(result.is_err());
}

#[test]
fn test_missing_required_file_fails() {
    let result = ConfigLoader::new()
        .add_toml_file("does-not-exist.toml")
        .build();
    assert!(result.is_err());
}
