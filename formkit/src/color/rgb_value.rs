// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{CommonResult, FormkitError, HslValue, LossyConvertToByte, parse_hex_color};

/// Represents a color in RGB (24-bit truecolor) format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl From<u32> for RgbValue {
    fn from(value: u32) -> Self {
        let [_, red, green, blue] = value.to_be_bytes();
        Self { red, green, blue }
    }
}

impl Default for RgbValue {
    fn default() -> Self { Self::from_u8(255, 255, 255) }
}

impl RgbValue {
    pub const BLACK: RgbValue = RgbValue { red: 0, green: 0, blue: 0 };
    pub const WHITE: RgbValue = RgbValue { red: 255, green: 255, blue: 255 };

    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Each channel in `0.0..=1.0`. Out of range channels are clamped.
    #[must_use]
    pub fn from_f64(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red: (red * 255.0).to_u8_lossy(),
            green: (green * 255.0).to_u8_lossy(),
            blue: (blue * 255.0).to_u8_lossy(),
        }
    }

    /// Parse `#RGB` or `#RRGGBB`. Surrounding whitespace is ignored, anything else after
    /// the color is an error.
    ///
    /// # Errors
    ///
    /// Returns [`FormkitError::InvalidHexColor`] if the input string is not a valid hex
    /// color.
    pub fn try_from_hex_color(input: &str) -> CommonResult<RgbValue> {
        match parse_hex_color(input.trim()) {
            Ok(("", color)) => Ok(color),
            _ => Err(FormkitError::InvalidHexColor {
                input: input.to_string(),
            }
            .into()),
        }
    }

    /// # Panics
    ///
    /// This function will panic if the input string is not a valid hex color format.
    /// Use [`RgbValue::try_from_hex_color`] for fallible parsing.
    #[must_use]
    pub fn from_hex(input: &str) -> RgbValue {
        #[allow(clippy::match_wild_err_arm)]
        match Self::try_from_hex_color(input) {
            Ok(color) => color,
            Err(_) => {
                panic!("Invalid hex color format: {input}")
            }
        }
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    #[must_use]
    pub fn to_hsl(&self) -> HslValue { HslValue::from(*self) }
}

impl Display for RgbValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult { write!(f, "{}", self.to_hex()) }
}
