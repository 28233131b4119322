// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error types for the configuration boundary of the input engines.
//!
//! Editing itself never fails: a rejected keystroke leaves the value unchanged and an
//! out of bounds number is clamped on blur. The only things that can go wrong are a bad
//! configuration (an empty mask, `min > max`, an unknown currency) or a bad color string
//! handed to the theme utilities. Those are reported as [`FormkitError`], wrapped in a
//! [`miette::Report`] so that callers get codes and help text for free.
//!
//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`].
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`FormkitError`] and any other type of error.
///
/// # Example
///
/// ```
/// use formkit::{CommonResult, FormkitError};
///
/// fn try_step(step: f64) -> CommonResult<f64> {
///     if step > 0.0 {
///         Ok(step)
///     } else {
///         Err(FormkitError::InvalidStep { step }.into())
///     }
/// }
///
/// assert!(try_step(1.0).is_ok());
/// assert!(try_step(0.0).is_err());
/// ```
pub type CommonResult<T> = miette::Result<T>;

#[derive(Debug, Clone, PartialEq, thiserror::Error, miette::Diagnostic)]
pub enum FormkitError {
    #[error("Mask pattern is empty")]
    #[diagnostic(
        code(formkit::mask::empty),
        help("Use `9` for a digit, `a` for a letter, `*` for either, e.g. \"999-99-9999\"")
    )]
    EmptyMask,

    #[error("Mask pattern '{pattern}' has no placeholder slots")]
    #[diagnostic(
        code(formkit::mask::no_slots),
        help("A mask made only of literals can't accept input, add at least one `9`, `a` or `*`")
    )]
    MaskWithoutSlots { pattern: String },

    #[error("Slot char '{slot_char}' must be exactly one character")]
    #[diagnostic(code(formkit::mask::slot_char))]
    InvalidSlotChar { slot_char: String },

    #[error("Currency mode requires a currency code")]
    #[diagnostic(
        code(formkit::number::missing_currency),
        help("Set `currency` to an ISO 4217 code such as \"USD\" or \"EUR\"")
    )]
    MissingCurrency,

    #[error("Unknown currency code '{code}'")]
    #[diagnostic(code(formkit::number::unknown_currency))]
    UnknownCurrency { code: String },

    #[error("max_fraction_digits ({max}) is less than min_fraction_digits ({min})")]
    #[diagnostic(code(formkit::number::fraction_digits))]
    InvalidFractionDigits { min: u8, max: u8 },

    #[error("min ({min}) is greater than max ({max})")]
    #[diagnostic(code(formkit::number::bounds))]
    InvalidBounds { min: f64, max: f64 },

    #[error("Step {step} must be a finite number greater than zero")]
    #[diagnostic(code(formkit::number::step))]
    InvalidStep { step: f64 },

    #[error("Invalid hex color '{input}'")]
    #[diagnostic(
        code(formkit::color::hex),
        help("Valid formats are #RGB and #RRGGBB, e.g. \"#0af\" or \"#00aaff\"")
    )]
    InvalidHexColor { input: String },

    #[error("A shade ramp needs at least 2 steps, got {steps}")]
    #[diagnostic(code(formkit::color::ramp_steps))]
    InvalidRampSteps { steps: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic;

    #[test]
    fn test_error_converts_into_report() {
        let result: CommonResult<()> = Err(FormkitError::EmptyMask.into());
        let report = result.unwrap_err();
        assert_eq!(report.to_string(), "Mask pattern is empty");
        assert!(report.downcast_ref::<FormkitError>().is_some());
    }

    #[test]
    fn test_diagnostic_code() {
        let error = FormkitError::UnknownCurrency { code: "XYZ".into() };
        let code = error.code().map(|it| it.to_string());
        assert_eq!(code.as_deref(), Some("formkit::number::unknown_currency"));
        assert_eq!(error.to_string(), "Unknown currency code 'XYZ'");
    }
}
