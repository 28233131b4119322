// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Locale aware numeric input: formatting, lenient parsing, clamping and stepping.

// Attach sources.
pub mod currency_data;
pub mod locale_data;
pub mod number_format_config;
pub mod number_formatter;
pub mod number_input;

// Re-export.
pub use currency_data::*;
pub use locale_data::*;
pub use number_format_config::*;
pub use number_formatter::*;
pub use number_input::*;
