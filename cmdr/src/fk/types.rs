// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result as FmtResult};

use formkit::{RgbValue, ShadeRamp, WcagLevel};

use super::ui_str;

/// What a subcommand produced. [`Display`] renders it for the terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum FkResult {
    Mask(MaskOutcome),
    Number(NumberOutcome),
    Contrast(ContrastOutcome),
    Ramp(ShadeRamp),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskOutcome {
    pub display: String,
    pub raw_value: String,
    pub is_complete: bool,
    /// Shown when the display string is empty.
    pub placeholder_hint: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberOutcome {
    pub formatted: String,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastOutcome {
    pub foreground: RgbValue,
    pub background: RgbValue,
    pub ratio: f64,
    pub level: WcagLevel,
    pub best_text_color: RgbValue,
}

impl Display for FkResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            FkResult::Mask(it) => write!(f, "{}", ui_str::mask_outcome_msg(it)),
            FkResult::Number(it) => write!(f, "{}", ui_str::number_outcome_msg(it)),
            FkResult::Contrast(it) => write!(f, "{}", ui_str::contrast_outcome_msg(it)),
            FkResult::Ramp(it) => write!(f, "{}", ui_str::ramp_msg(it)),
        }
    }
}
