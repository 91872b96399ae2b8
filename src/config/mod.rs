// envstack: Layered Environment Variable Resolution
//
// SPDX-FileCopyrightText: 2026 envstack contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for envstack.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. envstack.toml (cwd, optional)
//! 3. --config FILE (repeatable, later files win)
//! 4. --env CLI flags (consumed by the resolve command)
//! ```
//!
//! ```toml
//! [env]
//! layers = ["BASE_URL=https://example.test,DEBUG=", "REGION=us-east-1"]
//! ```
//!
//! `layers` holds raw collector strings in ascending priority. They are
//! all lower priority than `--env` flags.

pub mod loader;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvConfig {
    /// Environment layer settings.
    pub env: EnvSection,
}

/// The `[env]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvSection {
    /// Raw collector strings in ascending priority order.
    pub layers: Vec<String>,
}
