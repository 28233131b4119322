// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Locale aware formatting and lenient parsing of numbers, for a numeric input.
//!
//! ```text
//! value ─► round (half away from zero) ─► trim zeros ─► group ─► currency ─► prefix/suffix
//! text  ─► strip affixes ─► keep digits, decimal separator, leading minus ─► f64
//! ```
//!
//! [`NumberFormatter::parse`] accepts everything that [`NumberFormatter::format`] produces,
//! plus whatever a user might type or paste in between.

use crate::{CommonResult, CurrencyData, CurrencyDisplay, CurrencyPattern, LocaleData,
            NBSP, NumberFormatConfig, clamp_to_bounds, fraction_digits_of,
            round_half_away_from_zero};

/// Direction of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}

/// A validated [`NumberFormatConfig`] with its locale and currency resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormatter {
    config: NumberFormatConfig,
    locale: &'static LocaleData,
    currency: Option<&'static CurrencyData>,
    min_fraction_digits: u8,
    max_fraction_digits: u8,
}

impl NumberFormatter {
    /// # Errors
    ///
    /// Any error from [`NumberFormatConfig::validate`].
    pub fn try_new(config: &NumberFormatConfig) -> CommonResult<Self> {
        config.validate()?;
        let (min_fraction_digits, max_fraction_digits) = config.try_fraction_digits()?;
        Ok(Self {
            locale: LocaleData::lookup(&config.locale),
            currency: config.try_currency_data()?,
            config: config.clone(),
            min_fraction_digits,
            max_fraction_digits,
        })
    }

    #[must_use]
    pub fn config(&self) -> &NumberFormatConfig { &self.config }

    #[must_use]
    pub fn locale(&self) -> &'static LocaleData { self.locale }

    #[must_use]
    pub fn currency(&self) -> Option<&'static CurrencyData> { self.currency }

    #[must_use]
    pub fn fraction_digits(&self) -> (u8, u8) {
        (self.min_fraction_digits, self.max_fraction_digits)
    }

    /// Full display form, eg: `$1,500.00`. [`None`] and non finite values format as
    /// `""`.
    #[must_use]
    pub fn format(&self, value: Option<f64>) -> String {
        let Some((is_negative, number)) = self.format_number(value, self.config.use_grouping)
        else {
            return String::new();
        };

        let body = match self.currency {
            Some(currency) => self.apply_currency(currency, &number),
            None => number,
        };

        let mut acc = String::new();
        if is_negative {
            acc.push('-');
        }
        if let Some(prefix) = &self.config.prefix {
            acc.push_str(prefix);
        }
        acc.push_str(&body);
        if let Some(suffix) = &self.config.suffix {
            acc.push_str(suffix);
        }
        acc
    }

    /// What the user edits while the input is focused: no grouping, no currency, no
    /// affixes, but the locale's decimal separator, eg: `1500,5` in `de-DE`.
    #[must_use]
    pub fn format_editable(&self, value: Option<f64>) -> String {
        match self.format_number(value, false) {
            Some((true, number)) => format!("-{number}"),
            Some((false, number)) => number,
            None => String::new(),
        }
    }

    /// Round and lay out the digits. Returns the sign separately so that it can lead
    /// the whole display string.
    fn format_number(&self, value: Option<f64>, use_grouping: bool) -> Option<(bool, String)> {
        let value = value.filter(|it| it.is_finite())?;
        let rounded = round_half_away_from_zero(value, self.max_fraction_digits);
        let is_negative = rounded < 0.0;

        let text = format!(
            "{:.*}",
            usize::from(self.max_fraction_digits),
            rounded.abs()
        );
        let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

        let mut fraction = fraction.to_string();
        while fraction.len() > usize::from(self.min_fraction_digits) && fraction.ends_with('0')
        {
            fraction.pop();
        }

        let mut acc = if use_grouping {
            self.locale.group_digits(integer)
        } else {
            integer.to_string()
        };
        if !fraction.is_empty() {
            acc.push(self.locale.decimal_separator);
            acc.push_str(&fraction);
        }
        Some((is_negative, acc))
    }

    fn apply_currency(&self, currency: &CurrencyData, number: &str) -> String {
        let (marker, pattern) = match self.config.currency_display {
            CurrencyDisplay::Symbol => (currency.symbol, self.locale.currency_pattern),
            // A code always gets a space, even where the symbol sits flush.
            CurrencyDisplay::Code => (
                currency.code,
                match self.locale.currency_pattern {
                    CurrencyPattern::SymbolBefore => CurrencyPattern::SymbolBeforeSpace,
                    it => it,
                },
            ),
        };
        match pattern {
            CurrencyPattern::SymbolBefore => format!("{marker}{number}"),
            CurrencyPattern::SymbolBeforeSpace => format!("{marker}{NBSP}{number}"),
            CurrencyPattern::SymbolAfterSpace => format!("{number}{NBSP}{marker}"),
        }
    }

    /// Lenient parse of user text. Affixes, currency symbol and code, whitespace and
    /// group separators are dropped, the locale's decimal separator becomes the decimal
    /// point, and any other char is ignored. A minus before the first digit makes the
    /// value negative. Returns [`None`] if no digit is left, or if the digits don't fit
    /// in an `f64`.
    #[must_use]
    pub fn parse(&self, text: &str) -> Option<f64> {
        let text = self.strip_affixes(text);
        let mut is_negative = false;
        let mut has_digits = false;
        let mut has_decimal_point = false;
        let mut acc = String::with_capacity(text.len());

        for ch in text.chars() {
            match ch {
                '0'..='9' => {
                    has_digits = true;
                    acc.push(ch);
                }
                '-' | '\u{2212}' if !has_digits && !has_decimal_point => is_negative = true,
                it if it == self.locale.decimal_separator && !has_decimal_point => {
                    has_decimal_point = true;
                    acc.push('.');
                }
                _ => {}
            }
        }

        if !has_digits {
            return None;
        }

        let value = acc.parse::<f64>().ok().filter(|it| it.is_finite())?;
        Some(if is_negative { -value } else { value })
    }

    /// Whether `ch` may extend `current`, the text being typed: a digit, the locale's
    /// decimal separator once, or a minus sign as the first char.
    #[must_use]
    pub fn accepts_char(&self, current: &str, ch: char) -> bool {
        match ch {
            '0'..='9' => true,
            '-' | '\u{2212}' => current.is_empty(),
            it if it == self.locale.decimal_separator => !current.contains(it),
            _ => false,
        }
    }

    /// Editable text from anything typed or pasted, eg: `$1,500.25` becomes `1500.25`.
    /// Affixes go first, then every char that [`NumberFormatter::accepts_char`] turns
    /// down is dropped.
    #[must_use]
    pub fn filter_editable(&self, text: &str) -> String {
        self.strip_affixes(text)
            .chars()
            .fold(String::new(), |mut acc, ch| {
                if self.accepts_char(&acc, ch) {
                    acc.push(ch);
                }
                acc
            })
    }

    /// Trim, then drop the first occurrence of the prefix, suffix, currency code and
    /// symbol.
    fn strip_affixes(&self, text: &str) -> String {
        let affixes = [
            self.config.prefix.as_deref(),
            self.config.suffix.as_deref(),
            self.currency.map(|it| it.code),
            self.currency.map(|it| it.symbol),
        ];
        affixes
            .into_iter()
            .flatten()
            .filter(|affix| !affix.is_empty())
            .fold(text.trim().to_string(), |acc, affix| acc.replacen(affix, "", 1))
    }

    /// Apply one step to `value`. A missing value steps from `min`, or from `0` without
    /// a `min`. The result is clamped and rounded to the precision of the step or the
    /// display, whichever is finer, so `0.1 + 0.2` comes out as `0.3`.
    #[must_use]
    pub fn step(&self, value: Option<f64>, direction: StepDirection) -> f64 {
        let NumberFormatConfig { min, max, step, .. } = self.config;
        let base = value.unwrap_or_else(|| min.unwrap_or(0.0));
        let stepped = match direction {
            StepDirection::Up => base + step,
            StepDirection::Down => base - step,
        };
        let digits = fraction_digits_of(step).max(self.max_fraction_digits);
        clamp_to_bounds(round_half_away_from_zero(stepped, digits), min, max)
    }

    #[must_use]
    pub fn increment(&self, value: Option<f64>) -> f64 { self.step(value, StepDirection::Up) }

    #[must_use]
    pub fn decrement(&self, value: Option<f64>) -> f64 {
        self.step(value, StepDirection::Down)
    }

    /// Clamp into `[min, max]`. Out of range values are pulled in, never rejected.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        let clamped = clamp_to_bounds(value, self.config.min, self.config.max);
        if clamped != value {
            tracing::debug!(message = "value clamped", value, clamped);
        }
        clamped
    }
}
