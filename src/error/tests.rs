// envstack: Layered Environment Variable Resolution
//
// SPDX-FileCopyrightText: 2026 envstack contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{EnvStackError, EnvStackResult, ParseError};

#[test]
fn test_malformed_entry_display() {
    let err = ParseError::MalformedEntry {
        entry: "BADENTRY".to_string(),
        kv_delim: '=',
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"malformed environment variable entry 'BADENTRY': expected exactly one '='"
    );
}

#[test]
fn test_invalid_input_display() {
    let err = ParseError::InvalidInput {
        input: "A=1,=2".to_string(),
        message: "entry 2 has an empty key".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid environment variable input 'A=1,=2': entry 2 has an empty key"
    );
}

#[test]
fn test_parse_error_propagates_through_top_level() {
    let err: EnvStackError = ParseError::MalformedEntry {
        entry: "X".to_string(),
        kv_delim: '=',
    }
    .into();
    assert!(matches!(err, EnvStackError::Parse(_)));
    assert!(err.to_string().starts_with("parse error:"));
}

#[test]
fn test_envstack_error_size() {
    // Box<str> variants (Other) are 16 bytes (fat pointer: ptr + len)
    let size = std::mem::size_of::<EnvStackError>();
    assert!(size <= 24, "EnvStackError is {size} bytes, expected <= 24");
}

#[test]
fn test_envstack_result_size() {
    let size = std::mem::size_of::<EnvStackResult<()>>();
    assert!(size <= 24, "EnvStackResult<()> is {size} bytes, expected <= 24");
}
