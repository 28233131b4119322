// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Write;

use formkit::{ShadeRamp, best_text_color, contrast_ratio};

use super::{ContrastOutcome, MaskOutcome, NumberOutcome};

#[must_use]
pub fn unrecoverable_error_msg() -> &'static str {
    "❌ Could not run fk due to the following problem:"
}

#[must_use]
pub fn mask_outcome_msg(outcome: &MaskOutcome) -> String {
    let display = if outcome.display.is_empty() {
        format!("(empty, hint: {})", outcome.placeholder_hint)
    } else {
        outcome.display.clone()
    };
    format!(
        "display:  {display}\nraw:      {raw}\ncomplete: {complete}",
        raw = outcome.raw_value,
        complete = outcome.is_complete,
    )
}

#[must_use]
pub fn number_outcome_msg(outcome: &NumberOutcome) -> String {
    let value = match outcome.value {
        Some(it) => it.to_string(),
        None => "(empty)".to_string(),
    };
    format!("formatted: {}\nvalue:     {value}", outcome.formatted)
}

#[must_use]
pub fn contrast_outcome_msg(outcome: &ContrastOutcome) -> String {
    format!(
        "{fg} on {bg}\nratio: {ratio:.2}:1\nlevel: {level}\nbest text on {bg}: {best}",
        fg = outcome.foreground,
        bg = outcome.background,
        ratio = outcome.ratio,
        level = outcome.level,
        best = outcome.best_text_color,
    )
}

/// One line per shade: index, hex, contrast against its best text color, and a marker on
/// the base color.
#[must_use]
pub fn ramp_msg(ramp: &ShadeRamp) -> String {
    let mut acc = String::new();
    for (index, shade) in ramp.shades.iter().enumerate() {
        let text_color = best_text_color(*shade);
        let marker = if index == ramp.base_index { "  <- base" } else { "" };
        // Writing to a String can't fail.
        let _unused = writeln!(
            acc,
            "{index:>2}  {shade}  {ratio:>5.2}:1 with {text_color}{marker}",
            ratio = contrast_ratio(*shade, text_color),
        );
    }
    acc.trim_end().to_string()
}
