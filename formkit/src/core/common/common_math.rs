// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Largest number of fraction digits that the numeric engine will round to. Beyond this
/// `f64` can't represent the digits anyway.
pub const MAX_ROUNDING_DIGITS: u8 = 15;

/// Clamp `value` into `[min, max]`. Either bound may be missing. The caller guarantees
/// `min <= max` when both are present (see
/// [`NumberFormatConfig::validate`](crate::NumberFormatConfig::validate)).
///
/// ```
/// use formkit::clamp_to_bounds;
/// assert_eq!(clamp_to_bounds(5.0, Some(10.0), Some(20.0)), 10.0);
/// assert_eq!(clamp_to_bounds(25.0, Some(10.0), Some(20.0)), 20.0);
/// assert_eq!(clamp_to_bounds(15.0, Some(10.0), Some(20.0)), 15.0);
/// assert_eq!(clamp_to_bounds(-1.0, None, None), -1.0);
/// ```
#[must_use]
pub fn clamp_to_bounds(value: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    let value = match min {
        Some(min) if value < min => min,
        _ => value,
    };
    match max {
        Some(max) if value > max => max,
        _ => value,
    }
}

/// Round half away from zero to `digits` fraction digits, which is what
/// `Intl.NumberFormat` style formatting does (`2.5 -> 3`, `-2.5 -> -3`). A value too
/// large to scale by `10^digits` has no fraction left to round and comes back as is.
#[must_use]
pub fn round_half_away_from_zero(value: f64, digits: u8) -> f64 {
    let digits = digits.min(MAX_ROUNDING_DIGITS);
    let factor = 10_f64.powi(i32::from(digits));
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    // `f64::round` already rounds half away from zero. Nudge values that sit just below
    // the half way mark because of binary representation, eg: `1.005 * 100 = 100.49999`.
    let nudged = scaled + scaled.signum() * f64::EPSILON * scaled.abs().max(1.0) * 8.0;
    let rounded = nudged.round() / factor;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Number of fraction digits needed to write `value` out in decimal, eg: `0.25 -> 2`,
/// `1.0 -> 0`. Used to keep increment / decrement arithmetic free of binary float noise.
#[must_use]
pub fn fraction_digits_of(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    let text = value.abs().to_string();
    match text.split_once('.') {
        Some((_, fraction)) => {
            u8::try_from(fraction.len()).unwrap_or(MAX_ROUNDING_DIGITS).min(MAX_ROUNDING_DIGITS)
        }
        None => 0,
    }
}

/// Trait for performing potentially lossy conversions from primitive types to `u8`. Avoid
/// triggering warnings from:
/// - `clippy::cast_sign_loss`
/// - `clippy::cast_lossless`
/// - `clippy::cast_possible_truncation`
///
/// The `as` keyword is the designated tool for primitive, potentially lossy conversions.
/// Values are clamped into `0..=255` after rounding.
pub trait LossyConvertToByte {
    #[must_use]
    fn to_u8_lossy(self) -> u8;
}

impl LossyConvertToByte for f64 {
    #[allow(
        clippy::cast_sign_loss,
        clippy::cast_lossless,
        clippy::cast_possible_truncation
    )]
    fn to_u8_lossy(self) -> u8 { self.round().clamp(0.0, 255.0) as u8 }
}
