// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # fk
//!
//! Command line front end for [`formkit`]. Each subcommand feeds its args through one of
//! the engines, the same way an input surface would, and prints the result.
//!
//! ```text
//! fk mask "999-99-9999" 123456789
//! fk number 1500 --currency USD --locale en-US
//! fk number 100 --min 10 --decrement 95
//! fk contrast "#000" "#fff"
//! fk ramp "#3366cc" --steps 10
//! ```
//!
//! Pass `--enable-logging` to see the engines' `tracing` events on stderr, or
//! `--log-file PATH` to write them to a file instead.

// Production code is not allowed to use .unwrap() in functions that return a Result.
// Tests are.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod fk;

// Re-export.
pub use fk::*;
