// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod mask_buffer;
pub mod mask_display;
pub mod mask_input;
pub mod mask_input_config;
pub mod mask_pattern;

// Re-export.
pub use mask_buffer::*;
pub use mask_display::*;
pub use mask_input::*;
pub use mask_input_config::*;
pub use mask_pattern::*;
