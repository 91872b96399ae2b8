// envstack: Layered Environment Variable Resolution
//
// SPDX-FileCopyrightText: 2026 envstack contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Validation of raw environment variable strings.
//!
//! ```text
//! Validate (trait, injected into parsing)
//!   FormatValidator   KEY=... per comma-separated entry
//!   AcceptAll         no-op, for custom delimiters and tests
//! ```

use crate::error::{ParseError, ParseResult};
use regex::Regex;
use std::sync::OnceLock;

/// Checks a raw environment variable string before parsing.
///
/// Implementations own the policy of what counts as malformed; the parser
/// propagates their rejection unchanged and still defends against entries
/// that do not split cleanly.
pub trait Validate {
    /// Validates the raw string.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidInput`] describing the first offending
    /// entry.
    fn validate(&self, raw: &str) -> ParseResult<()>;
}

/// Stock validator for the default `K1=V1,K2=` format.
///
/// Each comma-separated entry must start with a key of the form
/// `[A-Za-z_][A-Za-z0-9_]*` followed by `=`. An empty raw string is valid
/// and parses to an empty collector.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatValidator;

fn entry_regex() -> &'static Regex {
    static ENTRY_RE: OnceLock<Regex> = OnceLock::new();
    ENTRY_RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*=").expect("hardcoded entry regex compiles")
    })
}

impl Validate for FormatValidator {
    fn validate(&self, raw: &str) -> ParseResult<()> {
        if raw.is_empty() {
            return Ok(());
        }

        for (index, entry) in raw.split(super::VARIABLE_DELIM).enumerate() {
            if entry.is_empty() {
                return Err(ParseError::InvalidInput {
                    input: raw.to_owned(),
                    message: format!("entry {} is empty", index + 1),
                });
            }
            if !entry_regex().is_match(entry) {
                return Err(ParseError::InvalidInput {
                    input: raw.to_owned(),
                    message: format!(
                        "entry {} ('{}') must look like KEY=VALUE or KEY=",
                        index + 1,
                        entry
                    ),
                });
            }
        }

        Ok(())
    }
}

/// Validator that accepts any input.
///
/// Parsing still rejects entries that do not split into exactly one key
/// and one value.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Validate for AcceptAll {
    fn validate(&self, _raw: &str) -> ParseResult<()> {
        Ok(())
    }
}
