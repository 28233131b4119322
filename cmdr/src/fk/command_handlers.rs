// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use formkit::{CommonResult, MaskInput, MaskInputConfig, NumberFormatConfig, NumberInput,
              NumberInputConfig, NumberMode, RgbValue, WcagLevel, best_text_color,
              contrast_ratio, generate_shade_ramp, ok};
use miette::{IntoDiagnostic, WrapErr};

use super::{CLIArg, CLICommand, ContrastOutcome, FkResult, MaskOutcome, NumberArgs,
            NumberOutcome};

/// Run the subcommand in `cli_arg`.
///
/// # Errors
///
/// Returns an error for a bad mask, number config, config file, or color.
pub fn handle_fk_command(cli_arg: CLIArg) -> CommonResult<FkResult> {
    match cli_arg.command {
        CLICommand::Mask {
            pattern,
            input,
            slot_char,
            auto_clear,
            blur,
        } => {
            let config = MaskInputConfig::new(pattern)
                .with_slot_char(slot_char)
                .with_auto_clear(auto_clear);
            handle_mask(config, &input, blur).map(FkResult::Mask)
        }
        CLICommand::Number(args) => handle_number(&args).map(FkResult::Number),
        CLICommand::Contrast {
            foreground,
            background,
        } => handle_contrast(&foreground, &background).map(FkResult::Contrast),
        CLICommand::Ramp { base, steps } => {
            let base = RgbValue::try_from_hex_color(&base)?;
            generate_shade_ramp(base, steps).map(FkResult::Ramp)
        }
    }
}

/// Focus the field, type `input` one char at a time, then optionally blur.
///
/// # Errors
///
/// Returns an error if the mask config is invalid.
pub fn handle_mask(config: MaskInputConfig, input: &str, blur: bool) -> CommonResult<MaskOutcome> {
    let mut mask_input = MaskInput::try_new(config)?;
    mask_input.focus();
    mask_input.type_str(input);
    if blur {
        mask_input.blur();
    }

    ok!(MaskOutcome {
        display: mask_input.display_string(),
        raw_value: mask_input.raw_value(),
        is_complete: mask_input.is_complete(),
        placeholder_hint: mask_input.placeholder_hint(),
    })
}

/// Enter `args.value` into a numeric input, press the step keys, then blur.
///
/// # Errors
///
/// Returns an error if the config file can't be read or parsed, or the resulting config
/// is invalid.
pub fn handle_number(args: &NumberArgs) -> CommonResult<NumberOutcome> {
    let config = match &args.config {
        Some(path) => load_number_format_config(path)?,
        None => NumberFormatConfig::default(),
    };
    let config = apply_number_args(config, args);
    tracing::debug!(message = "number config", config = ?config);

    let mut number_input = NumberInput::try_new(NumberInputConfig::from(config))?;
    number_input.focus();
    if let Some(value) = &args.value {
        number_input.set_text(value.as_str());
    }
    for _ in 0..args.increment {
        number_input.increment();
    }
    for _ in 0..args.decrement {
        number_input.decrement();
    }
    number_input.blur();

    ok!(NumberOutcome {
        formatted: number_input.display_string(),
        value: number_input.value(),
    })
}

/// # Errors
///
/// Returns an error if the file can't be read, or isn't a valid config.
pub fn load_number_format_config(path: &Path) -> CommonResult<NumberFormatConfig> {
    let content = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Could not read config file {}", path.display()))?;
    serde_json::from_str(&content)
        .into_diagnostic()
        .wrap_err_with(|| format!("Could not parse config file {}", path.display()))
}

/// Flags win over the config file.
#[must_use]
pub fn apply_number_args(mut config: NumberFormatConfig, args: &NumberArgs) -> NumberFormatConfig {
    if let Some(locale) = &args.locale {
        config.locale.clone_from(locale);
    }
    if let Some(currency) = &args.currency {
        config.mode = NumberMode::Currency;
        config.currency = Some(currency.clone());
    }
    if let Some(currency_display) = args.currency_display {
        config.currency_display = currency_display.into();
    }
    if args.min.is_some() {
        config.min = args.min;
    }
    if args.max.is_some() {
        config.max = args.max;
    }
    if let Some(step) = args.step {
        config.step = step;
    }
    if args.prefix.is_some() {
        config.prefix.clone_from(&args.prefix);
    }
    if args.suffix.is_some() {
        config.suffix.clone_from(&args.suffix);
    }
    if args.no_grouping {
        config.use_grouping = false;
    }
    if args.min_fraction_digits.is_some() {
        config.min_fraction_digits = args.min_fraction_digits;
    }
    if args.max_fraction_digits.is_some() {
        config.max_fraction_digits = args.max_fraction_digits;
    }
    config
}

/// # Errors
///
/// Returns an error if either color isn't a valid hex color.
pub fn handle_contrast(foreground: &str, background: &str) -> CommonResult<ContrastOutcome> {
    let foreground = RgbValue::try_from_hex_color(foreground)?;
    let background = RgbValue::try_from_hex_color(background)?;
    let ratio = contrast_ratio(foreground, background);
    ok!(ContrastOutcome {
        foreground,
        background,
        ratio,
        level: WcagLevel::from_ratio(ratio),
        best_text_color: best_text_color(background),
    })
}
