// envstack: Layered Environment Variable Resolution
//
// SPDX-FileCopyrightText: 2026 envstack contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Immutable collector for environment variables to set and to remove.
//!
//! # Architecture
//!
//! ```text
//! EnvvarCollector
//! vars:      BTreeMap<String, String>  (deterministic order)
//! to_remove: BTreeSet<String>
//!
//! from_delimited() --> merge() chain --> filtered()
//! ```

use super::validate::Validate;
use super::{KV_DELIM, VARIABLE_DELIM};
use crate::error::{ParseError, ParseResult};
use crate::utility::merge::merge_maps;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// An immutable grouping of environment variables to set and keys to unset.
///
/// A key may appear in both collections at once; the two are only
/// reconciled by [`filtered`](Self::filtered). All operations return a new
/// collector and never mutate `self`.
///
/// # Thread Safety
/// `EnvvarCollector` is `Send` and `Sync`; instances are never mutated
/// after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvvarCollector {
    vars: BTreeMap<String, String>,
    to_remove: BTreeSet<String>,
}

impl EnvvarCollector {
    /// Creates a collector with no variables and no removals.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
            to_remove: BTreeSet::new(),
        }
    }

    /// Creates a collector from already-partitioned parts.
    #[must_use]
    pub const fn from_parts(vars: BTreeMap<String, String>, to_remove: BTreeSet<String>) -> Self {
        Self { vars, to_remove }
    }

    /// Parses a delimited string such as `K1=V1,K2=,K3=V3`.
    ///
    /// The injected `validator` runs on the raw string before any parsing;
    /// its rejection is propagated unchanged. An empty string yields an
    /// empty collector. Entries with an empty value mark the key for
    /// removal; duplicate keys resolve last-seen-wins before partitioning.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidInput`] from the validator, or
    /// [`ParseError::MalformedEntry`] if an entry does not split into
    /// exactly one key and one value on `kv_delim`.
    pub fn from_delimited(
        raw: &str,
        variable_delim: char,
        kv_delim: char,
        validator: &dyn Validate,
    ) -> ParseResult<Self> {
        validator.validate(raw)?;

        if raw.is_empty() {
            return Ok(Self::new());
        }

        // Single map first so duplicates resolve last-seen-wins, then
        // partition on empty values.
        let mut all = BTreeMap::new();
        for entry in raw.split(variable_delim) {
            let mut parts = entry.splitn(3, kv_delim);
            match (parts.next(), parts.next(), parts.next()) {
                (Some(key), Some(value), None) => {
                    all.insert(key.to_owned(), value.to_owned());
                }
                _ => {
                    return Err(ParseError::MalformedEntry {
                        entry: entry.to_owned(),
                        kv_delim,
                    });
                }
            }
        }

        let mut vars = BTreeMap::new();
        let mut to_remove = BTreeSet::new();
        for (key, value) in all {
            if value.is_empty() {
                to_remove.insert(key);
            } else {
                vars.insert(key, value);
            }
        }

        tracing::trace!(
            vars = vars.len(),
            to_remove = to_remove.len(),
            "parsed environment variable string"
        );

        Ok(Self { vars, to_remove })
    }

    /// Merges `self` with a higher-priority collector.
    ///
    /// Variables are a key-wise union where `higher_priority` wins on
    /// conflicts; removal sets are a plain union. A higher-priority value
    /// does not un-mark a key for removal; that only happens in
    /// [`filtered`](Self::filtered).
    #[must_use]
    pub fn merge(&self, higher_priority: &Self) -> Self {
        let vars = merge_maps(&self.vars, &higher_priority.vars);
        let to_remove = self
            .to_remove
            .union(&higher_priority.to_remove)
            .cloned()
            .collect();

        Self { vars, to_remove }
    }

    /// Returns a collector with all variables whose key is not marked for
    /// removal, and an empty removal set.
    ///
    /// This is the terminal reconciliation step; the result carries no
    /// further removal instructions and filtering it again is a no-op.
    #[must_use]
    pub fn filtered(&self) -> Self {
        let vars = self
            .vars
            .iter()
            .filter(|(key, _)| !self.to_remove.contains(*key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Self {
            vars,
            to_remove: BTreeSet::new(),
        }
    }

    /// Gets a variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Returns the variables to set.
    #[must_use]
    pub const fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    /// Returns the keys marked for removal.
    #[must_use]
    pub const fn to_remove(&self) -> &BTreeSet<String> {
        &self.to_remove
    }

    /// Returns an iterator over the variables to set.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if there are no variables and no removals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty() && self.to_remove.is_empty()
    }

    /// Number of variables to set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}

impl std::str::FromStr for EnvvarCollector {
    type Err = ParseError;

    /// Parses with the default delimiters and the stock format validator.
    fn from_str(s: &str) -> ParseResult<Self> {
        Self::from_delimited(
            s,
            VARIABLE_DELIM,
            KV_DELIM,
            &super::validate::FormatValidator,
        )
    }
}
