// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::Deserialize;

use crate::{CommonResult, DEFAULT_SLOT_CHAR, FormkitError, ValueMode};

/// Options for a [`MaskInput`](crate::MaskInput). Deserializes from the same camelCase
/// option bag that a form definition would carry:
///
/// ```
/// use formkit::MaskInputConfig;
///
/// let config: MaskInputConfig = serde_json::from_str(
///     r##"{ "mask": "99/99/9999", "slotChar": "#", "autoClear": true }"##,
/// ).unwrap();
/// assert_eq!(config.slot_char, "#");
/// assert!(config.auto_clear);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskInputConfig {
    pub mask: String,
    #[serde(default = "default_slot_char")]
    pub slot_char: String,
    /// Controlled value. When set, the owner of the input holds the value.
    #[serde(default)]
    pub value: Option<String>,
    /// Starting value of an uncontrolled input.
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub auto_clear: bool,
    /// Hint shown when the field is blurred and empty. Falls back to the pattern.
    #[serde(default)]
    pub placeholder: Option<String>,
}

fn default_slot_char() -> String { DEFAULT_SLOT_CHAR.to_string() }

impl MaskInputConfig {
    #[must_use]
    pub fn new(mask: impl Into<String>) -> Self {
        Self {
            mask: mask.into(),
            slot_char: default_slot_char(),
            value: None,
            default_value: None,
            auto_clear: false,
            placeholder: None,
        }
    }

    #[must_use]
    pub fn with_slot_char(mut self, slot_char: impl Into<String>) -> Self {
        self.slot_char = slot_char.into();
        self
    }

    /// Make the input controlled, starting from `value`.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    #[must_use]
    pub fn with_auto_clear(mut self, auto_clear: bool) -> Self {
        self.auto_clear = auto_clear;
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn value_mode(&self) -> ValueMode {
        if self.value.is_some() {
            ValueMode::Controlled
        } else {
            ValueMode::Uncontrolled
        }
    }

    /// The value to start from, controlled value first.
    #[must_use]
    pub fn initial_value(&self) -> Option<&str> {
        self.value.as_deref().or(self.default_value.as_deref())
    }

    /// # Errors
    ///
    /// Returns [`FormkitError::InvalidSlotChar`] unless `slot_char` is exactly one char.
    pub fn try_slot_char(&self) -> CommonResult<char> {
        let mut chars = self.slot_char.chars();
        match (chars.next(), chars.next()) {
            (Some(it), None) => Ok(it),
            _ => Err(FormkitError::InvalidSlotChar {
                slot_char: self.slot_char.clone(),
            }
            .into()),
        }
    }
}
