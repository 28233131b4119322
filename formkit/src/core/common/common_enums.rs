// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Who owns the current value of an input.
///
/// - [`ValueMode::Uncontrolled`]: the input owns its value. It starts from the default
///   value and every accepted edit is committed right away, then the owner is notified.
/// - [`ValueMode::Controlled`]: the owner holds the value. Edits are only proposed via
///   the change callback, and nothing is committed until the owner pushes the value
///   back with `set_value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display)]
pub enum ValueMode {
    #[default]
    #[strum(serialize = "uncontrolled")]
    Uncontrolled,
    #[strum(serialize = "controlled")]
    Controlled,
}

impl ValueMode {
    #[must_use]
    pub fn is_controlled(&self) -> bool { matches!(self, ValueMode::Controlled) }
}

/// Whether an event changed the value of an input. Rejected keystrokes are silent, so
/// this is the only signal a caller gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Changed,
    Unchanged,
}

impl EditOutcome {
    #[must_use]
    pub fn is_changed(&self) -> bool { matches!(self, EditOutcome::Changed) }
}

impl From<bool> for EditOutcome {
    fn from(changed: bool) -> Self {
        if changed {
            EditOutcome::Changed
        } else {
            EditOutcome::Unchanged
        }
    }
}

/// Focus state of the input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    Focused,
    #[default]
    Blurred,
}

impl FocusState {
    #[must_use]
    pub fn is_focused(&self) -> bool { matches!(self, FocusState::Focused) }
}
