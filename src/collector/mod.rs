// envstack: Layered Environment Variable Resolution
//
// SPDX-FileCopyrightText: 2026 envstack contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable collection and layering.
//!
//! # Architecture
//!
//! ```text
//! "K1=V1,K2=,K3=V3"
//!        |
//!        v  validate (injected) + parse
//! EnvvarCollector { vars, to_remove }
//!        |
//!        v  resolve_layers() ascending priority
//! merged collector --> filtered() --> final vars
//! ```
//!
//! - **Immutable**: every operation returns a new collector
//! - **Empty value marks removal**: `K2=` above unsets `K2`
//! - **Reconciliation is terminal**: only `filtered()` applies `to_remove`

pub mod container;
pub mod validate;


pub use container::EnvvarCollector;
pub use validate::{AcceptAll, FormatValidator, Validate};

/// Default delimiter between variable entries.
pub const VARIABLE_DELIM: char = ',';

/// Default delimiter between a key and its value.
pub const KV_DELIM: char = '=';

/// Merges collectors in ascending priority order.
///
/// The first layer has the lowest priority; each subsequent layer overrides
/// it per [`EnvvarCollector::merge`]. An empty iterator yields an empty
/// collector. Callers usually apply [`EnvvarCollector::filtered`] to the
/// result before use.
pub fn resolve_layers<'a, I>(layers: I) -> EnvvarCollector
where
    I: IntoIterator<Item = &'a EnvvarCollector>,
{
    let resolved = layers
        .into_iter()
        .fold(EnvvarCollector::new(), |acc, layer| acc.merge(layer));

    tracing::debug!(
        vars = resolved.len(),
        to_remove = resolved.to_remove().len(),
        "resolved environment layers"
    );

    resolved
}
