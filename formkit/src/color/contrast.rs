// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! WCAG 2.x contrast math.
//!
//! - [Relative luminance](https://www.w3.org/TR/WCAG20/#relativeluminancedef)
//! - [Contrast ratio](https://www.w3.org/TR/WCAG20/#contrast-ratiodef)

use crate::RgbValue;

/// Relative luminance of an sRGB color, `0.0` for black and `1.0` for white.
#[must_use]
pub fn relative_luminance(color: RgbValue) -> f64 {
    fn channel(value: u8) -> f64 {
        let it = f64::from(value) / 255.0;
        if it <= 0.03928 {
            it / 12.92
        } else {
            ((it + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * channel(color.red) + 0.7152 * channel(color.green) + 0.0722 * channel(color.blue)
}

/// Contrast ratio between two colors, in `1.0..=21.0`. The order of the args doesn't
/// matter.
#[must_use]
pub fn contrast_ratio(lhs: RgbValue, rhs: RgbValue) -> f64 {
    let lhs = relative_luminance(lhs);
    let rhs = relative_luminance(rhs);
    let lighter = lhs.max(rhs);
    let darker = lhs.min(rhs);
    (lighter + 0.05) / (darker + 0.05)
}

/// Conformance level that a contrast ratio meets for text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, strum_macros::Display)]
pub enum WcagLevel {
    #[strum(serialize = "Fail")]
    Fail,
    /// Large text only (18pt, or 14pt bold).
    #[strum(serialize = "AA Large")]
    AaLarge,
    #[strum(serialize = "AA")]
    Aa,
    #[strum(serialize = "AAA")]
    Aaa,
}

impl WcagLevel {
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        match ratio {
            it if it >= 7.0 => WcagLevel::Aaa,
            it if it >= 4.5 => WcagLevel::Aa,
            it if it >= 3.0 => WcagLevel::AaLarge,
            _ => WcagLevel::Fail,
        }
    }
}

/// Pick black or white text for `background`, whichever has more contrast. Ties go to
/// black.
#[must_use]
pub fn best_text_color(background: RgbValue) -> RgbValue {
    let on_black = contrast_ratio(RgbValue::BLACK, background);
    let on_white = contrast_ratio(RgbValue::WHITE, background);
    if on_white > on_black {
        RgbValue::WHITE
    } else {
        RgbValue::BLACK
    }
}
