// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color math used by the theme builder: hex parsing, RGB and HSL conversion, WCAG
//! contrast ratios and shade ramps.

// Attach sources.
pub mod contrast;
pub mod hex_color_parser;
pub mod hsl_value;
pub mod rgb_value;
pub mod shade_ramp;

// Re-export.
pub use contrast::*;
pub use hex_color_parser::*;
pub use hsl_value::*;
pub use rgb_value::*;
pub use shade_ramp::*;
