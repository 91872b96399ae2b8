// envstack: Layered Environment Variable Resolution
//
// SPDX-FileCopyrightText: 2026 envstack contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                main.rs
//!                   |
//!         +---------+---------+
//!         v                   v
//!      cli (clap)        cmd (handlers)
//!         |             resolve / check
//!         +---------+---------+
//!                   v
//!      ,-----------------------------,
//!      |           config            |
//!      |  TOML layers, ascending     |
//!      '------------+----------------'
//!                   v
//!              collector
//!      EnvvarCollector + validate
//!      parse -> merge -> filtered
//!                   |
//!   +-------------------------------+
//!   | foundation  error, logging,   |
//!   |             utility (merge)   |
//!   +-------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod collector;
pub mod config;
pub mod error;
pub mod logging;
pub mod utility;
