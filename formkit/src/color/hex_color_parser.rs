// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [`RgbValue`]
//! struct. The hex color string can be in one of the following formats:
//! - `#RRGGBB`, eg: `#FF0000` for red.
//! - `#RGB`, eg: `#F00` for red, where each digit is doubled.
//!
//! Digits are case insensitive.

use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::{tag, take_while_m_n},
          combinator::map_res};

use crate::RgbValue;

/// Parse function that generates an [`RgbValue`] struct from a valid hex color string.
/// Anything after the color is returned as the remainder, untouched.
///
/// # Errors
///
/// Returns a [`nom::Err`] if the input doesn't start with `#` followed by 3 or 6 hex
/// digits.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbValue> {
    let (input, _) = tag("#").parse(input)?;
    alt((parse_long_form, parse_short_form)).parse(input)
}

/// `RRGGBB`.
fn parse_long_form(input: &str) -> IResult<&str, RgbValue> {
    let (input, (red, green, blue)) =
        (helper_fns::parse_hex_seg, helper_fns::parse_hex_seg, helper_fns::parse_hex_seg)
            .parse(input)?;
    Ok((input, RgbValue { red, green, blue }))
}

/// `RGB`, each digit stands for the same digit twice: `#f80` is `#ff8800`.
fn parse_short_form(input: &str) -> IResult<&str, RgbValue> {
    let (input, (red, green, blue)) = (
        helper_fns::parse_hex_nibble,
        helper_fns::parse_hex_nibble,
        helper_fns::parse_hex_nibble,
    )
        .parse(input)?;
    Ok((input, RgbValue { red, green, blue }))
}

/// Helper functions to match and parse hex digits.
mod helper_fns {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    /// This function is used by [`map_res`] and it returns a [`Result`], not
    /// [`IResult`].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// As long as this returns `true` items will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(2, 2, match_is_hex_digit), parse_str_to_hex_num)
            .parse(input)
    }

    pub fn parse_hex_nibble(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(1, 1, match_is_hex_digit), |it: &str| {
            parse_str_to_hex_num(it).map(|nibble| nibble * 17)
        })
        .parse(input)
    }
}
