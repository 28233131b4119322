// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # formkit
//!
//! Input engines for form components. Every engine here is a pure, synchronous
//! transformation driven by UI events: an input surface forwards keystrokes, paste,
//! focus and blur, and renders whatever string the engine hands back.
//!
//! # Table of contents
//!
//! - [Masked input](#masked-input)
//! - [Numeric input](#numeric-input)
//! - [Color utilities](#color-utilities)
//! - [Logging and errors](#logging-and-errors)
//!
//! # Masked input
//!
//! A mask pattern is compiled once into slots and literals. `9` accepts a digit, `a` an
//! ASCII letter, `*` either. Everything else is a literal that the user never types.
//!
//! ```
//! use formkit::{MaskInput, MaskInputConfig};
//!
//! let mut input = MaskInput::try_new(MaskInputConfig::new("(999) 999-9999")).unwrap();
//! input.focus();
//! input.paste("5551234567");
//! assert_eq!(input.display_string(), "(555) 123-4567");
//! assert_eq!(input.raw_value(), "5551234567");
//! assert!(input.is_complete());
//! ```
//!
//! # Numeric input
//!
//! ```
//! use formkit::{NumberFormatConfig, NumberFormatter};
//!
//! let config = NumberFormatConfig::currency("USD").with_locale("en-US");
//! let formatter = NumberFormatter::try_new(&config).unwrap();
//! assert_eq!(formatter.format(Some(1500.0)), "$1,500.00");
//! assert_eq!(formatter.parse("$1,500.00"), Some(1500.0));
//! ```
//!
//! # Color utilities
//!
//! WCAG contrast ratio and shade ramps for theme building.
//!
//! ```
//! use formkit::{RgbValue, contrast_ratio};
//!
//! let ratio = contrast_ratio(RgbValue::from_hex("#000"), RgbValue::from_hex("#fff"));
//! assert!((ratio - 21.0).abs() < 1e-9);
//! ```
//!
//! # Logging and errors
//!
//! Engines emit [`tracing`] events at `debug` and `trace` level. Use
//! [`try_initialize_logging_global`] to see them. Configuration errors are
//! [`FormkitError`] values wrapped in [`CommonResult`], which is [`miette::Result`].

// Production code is not allowed to use .unwrap() in functions that return a Result.
// Tests are.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod color;
pub mod core;
pub mod input_mask;
pub mod input_number;

// Re-export.
pub use color::*;
pub use core::*;
pub use input_mask::*;
pub use input_number::*;
