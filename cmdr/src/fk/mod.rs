// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod clap_config;
pub mod command_handlers;
pub mod types;
pub mod ui_str;

// Re-export.
pub use clap_config::*;
pub use command_handlers::*;
pub use types::*;
