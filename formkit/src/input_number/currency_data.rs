// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, FormkitError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyData {
    /// ISO 4217 code.
    pub code: &'static str,
    pub symbol: &'static str,
    /// Digits after the decimal separator, `0` for JPY and KRW.
    pub minor_units: u8,
}

const fn currency(code: &'static str, symbol: &'static str, minor_units: u8) -> CurrencyData {
    CurrencyData {
        code,
        symbol,
        minor_units,
    }
}

pub static CURRENCIES: &[CurrencyData] = &[
    currency("USD", "$", 2),
    currency("EUR", "€", 2),
    currency("GBP", "£", 2),
    currency("JPY", "¥", 0),
    currency("INR", "₹", 2),
    currency("CHF", "CHF", 2),
    currency("CAD", "CA$", 2),
    currency("AUD", "A$", 2),
    currency("BRL", "R$", 2),
    currency("CNY", "CN¥", 2),
    currency("RUB", "₽", 2),
    currency("KRW", "₩", 0),
    currency("SEK", "kr", 2),
    currency("MXN", "MX$", 2),
];

impl CurrencyData {
    /// Case insensitive lookup by ISO code.
    ///
    /// # Errors
    ///
    /// Returns [`FormkitError::UnknownCurrency`] if the code isn't in [`CURRENCIES`].
    pub fn try_lookup(code: &str) -> CommonResult<&'static CurrencyData> {
        let code = code.trim();
        CURRENCIES
            .iter()
            .find(|it| it.code.eq_ignore_ascii_case(code))
            .ok_or_else(|| {
                FormkitError::UnknownCurrency {
                    code: code.to_string(),
                }
                .into()
            })
    }
}
