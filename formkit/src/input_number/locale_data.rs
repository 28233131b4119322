// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Built-in number formatting rules for the locales that the form components ship with.
//! The data mirrors what CLDR says for each locale, reduced to what a numeric input needs.

/// No-break space, used between a number and its currency symbol.
pub const NBSP: char = '\u{a0}';
/// Narrow no-break space, the French group separator.
pub const NNBSP: char = '\u{202f}';

pub const DEFAULT_LOCALE: &str = "en-US";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingStyle {
    /// `1,234,567`
    Standard,
    /// `12,34,567`: the last group has 3 digits, every group before it 2.
    Indian,
}

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyPattern {
    /// `$1,500.00`
    SymbolBefore,
    /// `R$ 1.500,00`
    SymbolBeforeSpace,
    /// `1.500,00 €`
    SymbolAfterSpace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleData {
    pub tag: &'static str,
    pub decimal_separator: char,
    pub group_separator: char,
    pub grouping_style: GroupingStyle,
    /// Digits that the leading group must have before grouping kicks in. With `2`,
    /// `1500` stays ungrouped while `15.000` is grouped.
    pub min_grouping_digits: u8,
    pub currency_pattern: CurrencyPattern,
}

const fn locale(
    tag: &'static str,
    decimal_separator: char,
    group_separator: char,
    currency_pattern: CurrencyPattern,
) -> LocaleData {
    LocaleData {
        tag,
        decimal_separator,
        group_separator,
        grouping_style: GroupingStyle::Standard,
        min_grouping_digits: 1,
        currency_pattern,
    }
}

/// Order matters for the language fallback: the first entry of a language is the one
/// that a regional variant without its own entry falls back to.
pub static LOCALES: &[LocaleData] = &[
    locale("en-US", '.', ',', CurrencyPattern::SymbolBefore),
    locale("en-GB", '.', ',', CurrencyPattern::SymbolBefore),
    LocaleData {
        grouping_style: GroupingStyle::Indian,
        ..locale("en-IN", '.', ',', CurrencyPattern::SymbolBefore)
    },
    locale("de-DE", ',', '.', CurrencyPattern::SymbolAfterSpace),
    locale("de-CH", '.', '\u{2019}', CurrencyPattern::SymbolBeforeSpace),
    locale("fr-FR", ',', NNBSP, CurrencyPattern::SymbolAfterSpace),
    LocaleData {
        min_grouping_digits: 2,
        ..locale("es-ES", ',', '.', CurrencyPattern::SymbolAfterSpace)
    },
    locale("it-IT", ',', '.', CurrencyPattern::SymbolAfterSpace),
    locale("pt-BR", ',', '.', CurrencyPattern::SymbolBeforeSpace),
    locale("ru-RU", ',', NBSP, CurrencyPattern::SymbolAfterSpace),
    locale("ja-JP", '.', ',', CurrencyPattern::SymbolBefore),
    locale("zh-CN", '.', ',', CurrencyPattern::SymbolBefore),
];

impl LocaleData {
    /// Resolve a BCP 47 tag. Matching is case insensitive and accepts `_` for `-`. A tag
    /// without its own entry falls back to the first entry of its language, and then to
    /// [`DEFAULT_LOCALE`].
    #[must_use]
    pub fn lookup(tag: &str) -> &'static LocaleData {
        let normalized = tag.trim().replace('_', "-");

        if let Some(it) = LOCALES
            .iter()
            .find(|it| it.tag.eq_ignore_ascii_case(&normalized))
        {
            return it;
        }

        let language = normalized.split('-').next().unwrap_or_default();
        if let Some(it) = LOCALES
            .iter()
            .find(|it| it.language().eq_ignore_ascii_case(language))
        {
            tracing::debug!(
                message = "locale fell back to language",
                requested = tag,
                resolved = it.tag
            );
            return it;
        }

        tracing::debug!(
            message = "unknown locale, using default",
            requested = tag,
            resolved = DEFAULT_LOCALE
        );
        &LOCALES[0]
    }

    #[must_use]
    pub fn language(&self) -> &'static str {
        self.tag.split('-').next().unwrap_or(self.tag)
    }

    /// Insert group separators into a string of ASCII digits.
    #[must_use]
    pub fn group_digits(&self, digits: &str) -> String {
        let len = digits.len();
        let min_len = 3 + usize::from(self.min_grouping_digits);
        if len < min_len {
            return digits.to_string();
        }

        // Group boundaries, counted as digits from the right.
        let mut boundaries = vec![];
        let mut boundary = 3;
        while boundary < len {
            boundaries.push(len - boundary);
            boundary += match self.grouping_style {
                GroupingStyle::Standard => 3,
                GroupingStyle::Indian => 2,
            };
        }

        let mut acc = String::with_capacity(len + boundaries.len() * 3);
        for (index, ch) in digits.chars().enumerate() {
            if boundaries.contains(&index) {
                acc.push(self.group_separator);
            }
            acc.push(ch);
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case("en-US", "en-US")]
    #[test_case("EN-us", "en-US")]
    #[test_case("de_DE", "de-DE")]
    #[test_case("de-AT", "de-DE")]
    #[test_case("pt-PT", "pt-BR")]
    #[test_case("en-AU", "en-US")]
    #[test_case("fr", "fr-FR")]
    #[test_case("tlh-KX", "en-US")]
    #[test_case("", "en-US")]
    fn test_lookup(tag: &str, expected: &str) {
        assert_eq2!(LocaleData::lookup(tag).tag, expected);
    }

    #[test_case("en-US", "1", "1")]
    #[test_case("en-US", "123", "123")]
    #[test_case("en-US", "1234", "1,234")]
    #[test_case("en-US", "1234567", "1,234,567")]
    #[test_case("en-IN", "1234567", "12,34,567")]
    #[test_case("en-IN", "150000", "1,50,000")]
    #[test_case("de-DE", "1500", "1.500")]
    #[test_case("es-ES", "1500", "1500")]
    #[test_case("es-ES", "15000", "15.000")]
    #[test_case("fr-FR", "1500", "1\u{202f}500")]
    fn test_group_digits(tag: &str, digits: &str, expected: &str) {
        assert_eq2!(LocaleData::lookup(tag).group_digits(digits), expected);
    }
}
