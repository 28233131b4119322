// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::RgbValue;

/// A color in the HSL cylinder.
/// - `hue` is in degrees, `0.0..360.0`.
/// - `saturation` and `lightness` are in `0.0..=1.0`.
///
/// Shade ramps are built by walking `lightness` while keeping the other two fixed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HslValue {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl HslValue {
    /// Normalizes the hue into `0.0..360.0` and clamps the other two into `0.0..=1.0`.
    #[must_use]
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue: hue.rem_euclid(360.0),
            saturation: saturation.clamp(0.0, 1.0),
            lightness: lightness.clamp(0.0, 1.0),
        }
    }

    #[must_use]
    pub fn with_lightness(&self, lightness: f64) -> Self {
        Self::new(self.hue, self.saturation, lightness)
    }

    #[must_use]
    pub fn to_rgb(&self) -> RgbValue { RgbValue::from(*self) }
}

impl From<RgbValue> for HslValue {
    fn from(rgb: RgbValue) -> Self {
        let red = f64::from(rgb.red) / 255.0;
        let green = f64::from(rgb.green) / 255.0;
        let blue = f64::from(rgb.blue) / 255.0;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let lightness = (max + min) / 2.0;
        let delta = max - min;

        // Achromatic.
        if delta == 0.0 {
            return Self::new(0.0, 0.0, lightness);
        }

        let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());

        let hue_sector = if max == red {
            ((green - blue) / delta).rem_euclid(6.0)
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };

        Self::new(hue_sector * 60.0, saturation, lightness)
    }
}

impl From<HslValue> for RgbValue {
    fn from(hsl: HslValue) -> Self {
        let chroma = (1.0 - (2.0 * hsl.lightness - 1.0).abs()) * hsl.saturation;
        let hue_sector = hsl.hue / 60.0;
        let second = chroma * (1.0 - (hue_sector.rem_euclid(2.0) - 1.0).abs());
        let offset = hsl.lightness - chroma / 2.0;

        let (red, green, blue) = match hue_sector {
            it if it < 1.0 => (chroma, second, 0.0),
            it if it < 2.0 => (second, chroma, 0.0),
            it if it < 3.0 => (0.0, chroma, second),
            it if it < 4.0 => (0.0, second, chroma),
            it if it < 5.0 => (second, 0.0, chroma),
            _ => (chroma, 0.0, second),
        };

        RgbValue::from_f64(red + offset, green + offset, blue + offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    fn assert_close(lhs: f64, rhs: f64) {
        assert!((lhs - rhs).abs() < 0.005, "{lhs} != {rhs}");
    }

    #[test_case("#ff0000", 0.0, 1.0, 0.5)]
    #[test_case("#00ff00", 120.0, 1.0, 0.5)]
    #[test_case("#0000ff", 240.0, 1.0, 0.5)]
    #[test_case("#808080", 0.0, 0.0, 0.502)]
    #[test_case("#3b82f6", 217.2, 0.912, 0.598)]
    fn test_rgb_to_hsl(hex: &str, hue: f64, saturation: f64, lightness: f64) {
        let hsl = RgbValue::from_hex(hex).to_hsl();
        assert!((hsl.hue - hue).abs() < 0.1, "hue {} != {hue}", hsl.hue);
        assert_close(hsl.saturation, saturation);
        assert_close(hsl.lightness, lightness);
    }

    #[test_case("#000000")]
    #[test_case("#ffffff")]
    #[test_case("#ff8800")]
    #[test_case("#3b82f6")]
    #[test_case("#10b981")]
    #[test_case("#a21caf")]
    fn test_round_trip(hex: &str) {
        let rgb = RgbValue::from_hex(hex);
        assert_eq2!(rgb.to_hsl().to_rgb(), rgb);
    }

    #[test]
    fn test_new_normalizes() {
        let hsl = HslValue::new(-30.0, 1.5, -0.2);
        assert_close(hsl.hue, 330.0);
        assert_close(hsl.saturation, 1.0);
        assert_close(hsl.lightness, 0.0);
    }
}
