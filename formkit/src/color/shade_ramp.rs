// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, FormkitError, RgbValue};

/// Lightness of the first (lightest) shade.
pub const RAMP_LIGHTEST: f64 = 0.95;
/// Lightness of the last (darkest) shade.
pub const RAMP_DARKEST: f64 = 0.10;

/// A list of shades of one hue, ordered light to dark. The base color is always one of
/// the shades, at [`ShadeRamp::base_index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadeRamp {
    pub shades: Vec<RgbValue>,
    pub base_index: usize,
}

impl ShadeRamp {
    #[must_use]
    pub fn base(&self) -> RgbValue { self.shades[self.base_index] }

    #[must_use]
    pub fn len(&self) -> usize { self.shades.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.shades.is_empty() }
}

/// Generate `steps` shades of `base`. Hue and saturation are kept, lightness is spread
/// evenly between [`RAMP_LIGHTEST`] and [`RAMP_DARKEST`]. The shade whose lightness is
/// closest to the base color's is replaced by the base color itself.
///
/// # Errors
///
/// Returns [`FormkitError::InvalidRampSteps`] if `steps < 2`.
pub fn generate_shade_ramp(base: RgbValue, steps: usize) -> CommonResult<ShadeRamp> {
    if steps < 2 {
        return Err(FormkitError::InvalidRampSteps { steps }.into());
    }

    let hsl = base.to_hsl();
    #[allow(clippy::cast_precision_loss)]
    let lightness_at = |index: usize| {
        let fraction = index as f64 / (steps - 1) as f64;
        RAMP_LIGHTEST - (RAMP_LIGHTEST - RAMP_DARKEST) * fraction
    };

    let base_index = (0..steps)
        .min_by(|lhs, rhs| {
            let lhs = (lightness_at(*lhs) - hsl.lightness).abs();
            let rhs = (lightness_at(*rhs) - hsl.lightness).abs();
            lhs.total_cmp(&rhs)
        })
        .unwrap_or(0);

    let shades = (0..steps)
        .map(|index| {
            if index == base_index {
                base
            } else {
                hsl.with_lightness(lightness_at(index)).to_rgb()
            }
        })
        .collect();

    tracing::debug!(
        message = "shade ramp generated",
        base = %base,
        steps,
        base_index
    );

    Ok(ShadeRamp { shades, base_index })
}
