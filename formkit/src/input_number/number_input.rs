// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A numeric input: the text being edited, the parsed value, and the change callback.
//!
//! While focused the surface shows [`NumberInput::text`], a plain editable form of the
//! number (no grouping, no currency). On blur the value is clamped into bounds and the
//! surface shows the fully formatted string again.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use serde::Deserialize;

use crate::{CommonResult, EditOutcome, FocusState, NumberFormatConfig, NumberFormatter,
            StepDirection, ValueMode, fire_callback};

pub type OnNumberValueChange = Box<dyn FnMut(Option<f64>)>;

/// A [`NumberFormatConfig`] plus the starting value. The format options are flattened,
/// so the JSON looks like `{ "locale": "de-DE", "min": 0, "defaultValue": 100 }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberInputConfig {
    #[serde(flatten)]
    pub format: NumberFormatConfig,
    /// Controlled value. When set, the owner of the input holds the value.
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub default_value: Option<f64>,
}

impl From<NumberFormatConfig> for NumberInputConfig {
    fn from(format: NumberFormatConfig) -> Self {
        Self {
            format,
            value: None,
            default_value: None,
        }
    }
}

impl NumberInputConfig {
    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn with_default_value(mut self, default_value: f64) -> Self {
        self.default_value = Some(default_value);
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
}

#[derive(Debug, Clone, PartialEq)]
pub enum NumberInputEvent {
    /// Replace the whole text being edited.
    Text(String),
    Char(char),
    Backspace,
    Increment,
    Decrement,
    Focus,
    Blur,
}

pub struct NumberInput {
    formatter: NumberFormatter,
    value_mode: ValueMode,
    value: Option<f64>,
    text: String,
    focus_state: FocusState,
    on_value_change: Option<OnNumberValueChange>,
}

impl Debug for NumberInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("NumberInput")
            .field("formatter", &self.formatter)
            .field("value_mode", &self.value_mode)
            .field("value", &self.value)
            .field("text", &self.text)
            .field("focus_state", &self.focus_state)
            .finish_non_exhaustive()
    }
}

impl NumberInput {
    /// # Errors
    ///
    /// Any error from [`NumberFormatter::try_new`].
    pub fn try_new(config: impl Into<NumberInputConfig>) -> CommonResult<Self> {
        let config = config.into();
        let formatter = NumberFormatter::try_new(&config.format)?;
        let value = config
            .value
            .or(config.default_value)
            .filter(|it| it.is_finite());
        Ok(Self {
            text: formatter.format_editable(value),
            value_mode: config.value_mode(),
            formatter,
            value,
            focus_state: FocusState::default(),
            on_value_change: None,
        })
    }

    #[must_use]
    pub fn on_value_change(mut self, callback: impl FnMut(Option<f64>) + 'static) -> Self {
        self.on_value_change = Some(Box::new(callback));
        self
    }

    pub fn handle_event(&mut self, event: NumberInputEvent) -> EditOutcome {
        match event {
            NumberInputEvent::Text(text) => self.set_text(text),
            NumberInputEvent::Char(ch) => {
                if !self.formatter.accepts_char(&self.text, ch) {
                    return EditOutcome::Unchanged;
                }
                let mut text = self.text.clone();
                text.push(ch);
                self.set_text(text)
            }
            NumberInputEvent::Backspace => {
                let mut text = self.text.clone();
                text.pop();
                self.set_text(text)
            }
            NumberInputEvent::Increment => self.step(StepDirection::Up),
            NumberInputEvent::Decrement => self.step(StepDirection::Down),
            NumberInputEvent::Focus => {
                self.focus();
                EditOutcome::Unchanged
            }
            NumberInputEvent::Blur => self.blur(),
        }
    }

    /// Replace the text being edited, eg: on paste. Chars that can't be part of a number
    /// are dropped (see [`NumberFormatter::filter_editable`]).
    ///
    /// Typing is never clamped, a user on the way to `150` has to pass through `1`.
    pub fn set_text(&mut self, text: impl AsRef<str>) -> EditOutcome {
        self.text = self.formatter.filter_editable(text.as_ref());
        let parsed = self.formatter.parse(&self.text);
        self.commit(parsed)
    }

    pub fn increment(&mut self) -> EditOutcome { self.step(StepDirection::Up) }

    pub fn decrement(&mut self) -> EditOutcome { self.step(StepDirection::Down) }

    fn step(&mut self, direction: StepDirection) -> EditOutcome {
        let next = self.formatter.step(self.value, direction);
        self.text = self.formatter.format_editable(Some(next));
        self.commit(Some(next))
    }

    pub fn focus(&mut self) {
        self.focus_state = FocusState::Focused;
        self.text = self.formatter.format_editable(self.value);
    }

    /// Clamp into bounds and reformat. With `allow_empty: false` an empty entry becomes
    /// `min`, or `0` without a `min`.
    pub fn blur(&mut self) -> EditOutcome {
        self.focus_state = FocusState::Blurred;
        let config = self.formatter.config();
        let next = match self.value {
            Some(value) => Some(self.formatter.clamp(value)),
            None if !config.allow_empty => {
                Some(self.formatter.clamp(config.min.unwrap_or(0.0)))
            }
            None => None,
        };
        self.text = self.formatter.format_editable(next);
        self.commit(next)
    }

    /// Push a new value in from the owner. Fires no callbacks.
    pub fn set_value(&mut self, value: Option<f64>) {
        self.value = value.filter(|it| it.is_finite());
        self.text = self.formatter.format_editable(self.value);
    }

    /// Apply `next` (uncontrolled) or propose it (controlled), then notify.
    fn commit(&mut self, next: Option<f64>) -> EditOutcome {
        if next == self.value {
            return EditOutcome::Unchanged;
        }
        if let ValueMode::Uncontrolled = self.value_mode {
            self.value = next;
        }
        fire_callback!(self.on_value_change, next);
        EditOutcome::Changed
    }

    #[must_use]
    pub fn value(&self) -> Option<f64> { self.value }

    /// Text being edited.
    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    #[must_use]
    pub fn formatter(&self) -> &NumberFormatter { &self.formatter }

    #[must_use]
    pub fn value_mode(&self) -> ValueMode { self.value_mode }

    #[must_use]
    pub fn is_focused(&self) -> bool { self.focus_state.is_focused() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.value.is_none() && self.text.is_empty() }

    /// What the input surface shows: the editable text while focused, the formatted
    /// value otherwise.
    #[must_use]
    pub fn display_string(&self) -> String {
        if self.focus_state.is_focused() {
            self.text.clone()
        } else {
            self.formatter.format(self.value)
        }
    }
}
