// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::Deserialize;

use crate::{CommonResult, CurrencyData, DEFAULT_LOCALE, FormkitError, MAX_ROUNDING_DIGITS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
pub enum NumberMode {
    #[default]
    #[strum(serialize = "decimal")]
    Decimal,
    #[strum(serialize = "currency")]
    Currency,
}

/// How a currency is shown: `$1,500.00` or `USD 1,500.00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyDisplay {
    #[default]
    #[strum(serialize = "symbol")]
    Symbol,
    #[strum(serialize = "code")]
    Code,
}

pub const DEFAULT_MIN_FRACTION_DIGITS: u8 = 0;
pub const DEFAULT_MAX_FRACTION_DIGITS: u8 = 3;

/// Options of a numeric input. Deserializes from a camelCase option bag:
///
/// ```
/// use formkit::{NumberFormatConfig, NumberMode};
///
/// let config: NumberFormatConfig = serde_json::from_str(
///     r#"{ "mode": "currency", "currency": "EUR", "locale": "de-DE", "min": 0 }"#,
/// ).unwrap();
/// assert_eq!(config.mode, NumberMode::Currency);
/// assert_eq!(config.min, Some(0.0));
/// assert_eq!(config.step, 1.0);
/// assert!(config.use_grouping);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberFormatConfig {
    #[serde(default)]
    pub mode: NumberMode,
    /// ISO 4217 code, required in [`NumberMode::Currency`].
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub currency_display: CurrencyDisplay,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default = "default_step")]
    pub step: f64,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default = "default_true")]
    pub use_grouping: bool,
    #[serde(default)]
    pub min_fraction_digits: Option<u8>,
    #[serde(default)]
    pub max_fraction_digits: Option<u8>,
    /// When `false`, an empty entry becomes `min` (or `0`) on blur.
    #[serde(default = "default_true")]
    pub allow_empty: bool,
}

fn default_locale() -> String { DEFAULT_LOCALE.to_string() }

fn default_step() -> f64 { 1.0 }

fn default_true() -> bool { true }

impl Default for NumberFormatConfig {
    fn default() -> Self {
        Self {
            mode: NumberMode::default(),
            currency: None,
            currency_display: CurrencyDisplay::default(),
            locale: default_locale(),
            min: None,
            max: None,
            step: default_step(),
            prefix: None,
            suffix: None,
            use_grouping: true,
            min_fraction_digits: None,
            max_fraction_digits: None,
            allow_empty: true,
        }
    }
}

impl NumberFormatConfig {
    #[must_use]
    pub fn decimal() -> Self { Self::default() }

    #[must_use]
    pub fn currency(code: impl Into<String>) -> Self {
        Self {
            mode: NumberMode::Currency,
            currency: Some(code.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    #[must_use]
    pub fn with_currency_display(mut self, currency_display: CurrencyDisplay) -> Self {
        self.currency_display = currency_display;
        self
    }

    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    #[must_use]
    pub fn with_grouping(mut self, use_grouping: bool) -> Self {
        self.use_grouping = use_grouping;
        self
    }

    #[must_use]
    pub fn with_fraction_digits(mut self, min: Option<u8>, max: Option<u8>) -> Self {
        self.min_fraction_digits = min;
        self.max_fraction_digits = max;
        self
    }

    #[must_use]
    pub fn with_allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    /// The currency for [`NumberMode::Currency`], [`None`] in decimal mode.
    ///
    /// # Errors
    ///
    /// - [`FormkitError::MissingCurrency`]
    /// - [`FormkitError::UnknownCurrency`]
    pub fn try_currency_data(&self) -> CommonResult<Option<&'static CurrencyData>> {
        match (self.mode, self.currency.as_deref()) {
            (NumberMode::Decimal, _) => Ok(None),
            (NumberMode::Currency, None) => Err(FormkitError::MissingCurrency.into()),
            (NumberMode::Currency, Some(code)) if code.trim().is_empty() => {
                Err(FormkitError::MissingCurrency.into())
            }
            (NumberMode::Currency, Some(code)) => CurrencyData::try_lookup(code).map(Some),
        }
    }

    /// Resolve `(min, max)` fraction digits. Defaults come from the currency's minor
    /// units, or `0..=3` in decimal mode. A default never contradicts an explicit value:
    /// `max_fraction_digits: 1` in USD gives `(1, 1)`.
    ///
    /// # Errors
    ///
    /// - [`FormkitError::InvalidFractionDigits`] if both are explicit and `max < min`.
    /// - Any error from [`NumberFormatConfig::try_currency_data`].
    pub fn try_fraction_digits(&self) -> CommonResult<(u8, u8)> {
        let (default_min, default_max) = match self.try_currency_data()? {
            Some(currency) => (currency.minor_units, currency.minor_units),
            None => (DEFAULT_MIN_FRACTION_DIGITS, DEFAULT_MAX_FRACTION_DIGITS),
        };

        let (min, max) = match (self.min_fraction_digits, self.max_fraction_digits) {
            (Some(min), Some(max)) if max < min => {
                return Err(FormkitError::InvalidFractionDigits { min, max }.into());
            }
            (Some(min), Some(max)) => (min, max),
            (Some(min), None) => (min, default_max.max(min)),
            (None, Some(max)) => (default_min.min(max), max),
            (None, None) => (default_min, default_max),
        };

        Ok((min.min(MAX_ROUNDING_DIGITS), max.min(MAX_ROUNDING_DIGITS)))
    }

    /// Check everything that [`NumberFormatter`](crate::NumberFormatter) relies on.
    ///
    /// # Errors
    ///
    /// - [`FormkitError::InvalidBounds`] if `min > max`.
    /// - [`FormkitError::InvalidStep`] if `step` isn't finite and positive.
    /// - Any error from [`NumberFormatConfig::try_fraction_digits`].
    pub fn validate(&self) -> CommonResult<()> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => {
                return Err(FormkitError::InvalidBounds { min, max }.into());
            }
            _ => {}
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(FormkitError::InvalidStep { step: self.step }.into());
        }
        self.try_fraction_digits()?;
        Ok(())
    }
}
