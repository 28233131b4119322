// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A masked text input: the compiled pattern, the buffer, focus state and the change /
//! completion callbacks, driven by [`MaskInputEvent`]s.
//!
//! # Callbacks
//!
//! - `on_value_change(raw_value, is_complete)` fires after every accepted mutation:
//!   insert, delete, paste, and the reset done by `auto_clear`.
//! - `on_complete(raw_value)` fires in addition, when the value goes from incomplete to
//!   complete.
//!
//! Rejected chars, cursor moves and focus changes that don't touch the value fire
//! nothing.
//!
//! # Controlled mode
//!
//! In [`ValueMode::Controlled`] an edit is only proposed: the callbacks see the value
//! the edit would produce, the cursor moves, but the slots stay as they are until the
//! owner calls [`MaskInput::set_value`].

use std::{fmt::{Debug, Formatter, Result as FmtResult},
          sync::Arc};

use crate::{CommonResult, CursorMove, EditOutcome, FocusState, MaskBuffer,
            MaskInputConfig, MaskPattern, ValueMode, caret_column, fire_callback,
            placeholder_hint, render_display};

pub type OnMaskValueChange = Box<dyn FnMut(&str, bool)>;
pub type OnMaskComplete = Box<dyn FnMut(&str)>;

/// Events that the input surface forwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskInputEvent {
    Char(char),
    Backspace,
    Delete,
    Paste(String),
    Move(CursorMove),
    Focus,
    Blur,
}

pub struct MaskInput {
    pattern: Arc<MaskPattern>,
    slot_char: char,
    auto_clear: bool,
    placeholder: Option<String>,
    value_mode: ValueMode,
    buffer: MaskBuffer,
    /// Last edit proposed to the owner in controlled mode.
    proposal: Option<MaskBuffer>,
    focus_state: FocusState,
    on_value_change: Option<OnMaskValueChange>,
    on_complete: Option<OnMaskComplete>,
}

impl Debug for MaskInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("MaskInput")
            .field("pattern", &self.pattern.source())
            .field("slot_char", &self.slot_char)
            .field("auto_clear", &self.auto_clear)
            .field("value_mode", &self.value_mode)
            .field("buffer", &self.buffer)
            .field("focus_state", &self.focus_state)
            .finish_non_exhaustive()
    }
}

impl MaskInput {
    /// # Errors
    ///
    /// Returns an error if the mask is empty or has no slots, or if the slot char is
    /// not exactly one char.
    pub fn try_new(config: MaskInputConfig) -> CommonResult<Self> {
        let pattern = MaskPattern::compile_cached(&config.mask);
        pattern.validate()?;
        let slot_char = config.try_slot_char()?;

        let buffer = match config.initial_value() {
            Some(value) => MaskBuffer::from_value(&pattern, value, slot_char),
            None => MaskBuffer::new(&pattern),
        };

        Ok(Self {
            pattern,
            slot_char,
            auto_clear: config.auto_clear,
            value_mode: config.value_mode(),
            placeholder: config.placeholder,
            buffer,
            proposal: None,
            focus_state: FocusState::default(),
            on_value_change: None,
            on_complete: None,
        })
    }

    #[must_use]
    pub fn on_value_change(mut self, callback: impl FnMut(&str, bool) + 'static) -> Self {
        self.on_value_change = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_complete(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    pub fn handle_event(&mut self, event: MaskInputEvent) -> EditOutcome {
        match event {
            MaskInputEvent::Char(ch) => self.insert_char(ch),
            MaskInputEvent::Backspace => self.backspace(),
            MaskInputEvent::Delete => self.delete(),
            MaskInputEvent::Paste(text) => self.paste(&text),
            MaskInputEvent::Move(cursor_move) => {
                self.move_cursor(cursor_move);
                EditOutcome::Unchanged
            }
            MaskInputEvent::Focus => {
                self.focus();
                EditOutcome::Unchanged
            }
            MaskInputEvent::Blur => self.blur(),
        }
    }

    pub fn insert_char(&mut self, ch: char) -> EditOutcome {
        let mut next = self.buffer.clone();
        next.insert_char(&self.pattern, ch);
        self.commit(next)
    }

    /// Same as a sequence of [`MaskInput::insert_char`], with one notification per
    /// accepted char.
    pub fn type_str(&mut self, text: &str) -> EditOutcome {
        text.chars().fold(EditOutcome::Unchanged, |acc, ch| {
            if self.insert_char(ch).is_changed() {
                EditOutcome::Changed
            } else {
                acc
            }
        })
    }

    pub fn backspace(&mut self) -> EditOutcome {
        let mut next = self.buffer.clone();
        next.backspace();
        self.commit(next)
    }

    pub fn delete(&mut self) -> EditOutcome {
        let mut next = self.buffer.clone();
        next.delete();
        self.commit(next)
    }

    /// One notification for the whole paste.
    pub fn paste(&mut self, text: &str) -> EditOutcome {
        let mut next = self.buffer.clone();
        next.paste(&self.pattern, text);
        self.commit(next)
    }

    pub fn move_cursor(&mut self, cursor_move: CursorMove) {
        self.buffer.move_cursor(cursor_move);
    }

    /// Put the cursor on the first unfilled slot.
    pub fn focus(&mut self) {
        self.focus_state = FocusState::Focused;
        let first_unfilled = self.buffer.first_unfilled_slot();
        self.buffer.set_cursor(first_unfilled);
    }

    /// With `auto_clear`, an incomplete value is reset to empty. A complete value is
    /// never touched.
    pub fn blur(&mut self) -> EditOutcome {
        self.focus_state = FocusState::Blurred;
        if !self.auto_clear || self.buffer.is_complete() || self.buffer.is_empty() {
            return EditOutcome::Unchanged;
        }
        tracing::debug!(
            message = "auto clear on blur",
            pattern = self.pattern.source(),
            discarded = %self.buffer.raw_value()
        );
        let mut next = self.buffer.clone();
        next.clear();
        self.commit(next)
    }

    /// Push a new value in from the owner. Accepts the raw value or the display form.
    /// Fires no callbacks, the owner already knows.
    ///
    /// If the value is the last proposed edit, the cursor lands where that edit put it.
    /// Any other value keeps the cursor where it is.
    pub fn set_value(&mut self, value: &str) {
        let next = MaskBuffer::from_value(&self.pattern, value, self.slot_char);
        let cursor = match self.proposal.take() {
            Some(proposal) if proposal.same_value(&next) => proposal.cursor(),
            _ => self.buffer.cursor(),
        };
        self.buffer = next;
        self.buffer.set_cursor(cursor);
    }

    /// Apply `next` (uncontrolled) or propose it (controlled), then notify.
    fn commit(&mut self, next: MaskBuffer) -> EditOutcome {
        if self.buffer.same_value(&next) {
            self.buffer.set_cursor(next.cursor());
            return EditOutcome::Unchanged;
        }

        let was_complete = self.buffer.is_complete();
        let raw_value = next.raw_value();
        let is_complete = next.is_complete();

        // Controlled: slots and cursor wait for the owner's `set_value`.
        match self.value_mode {
            ValueMode::Uncontrolled => self.buffer = next,
            ValueMode::Controlled => self.proposal = Some(next),
        }

        fire_callback!(self.on_value_change, raw_value.as_str(), is_complete);
        if is_complete && !was_complete {
            tracing::debug!(
                message = "mask complete",
                pattern = self.pattern.source(),
                raw_value = %raw_value
            );
            fire_callback!(self.on_complete, raw_value.as_str());
        }

        EditOutcome::Changed
    }

    #[must_use]
    pub fn pattern(&self) -> &MaskPattern { &self.pattern }

    #[must_use]
    pub fn buffer(&self) -> &MaskBuffer { &self.buffer }

    #[must_use]
    pub fn raw_value(&self) -> String { self.buffer.raw_value() }

    #[must_use]
    pub fn is_complete(&self) -> bool { self.buffer.is_complete() }

    /// Used by a floating label to decide where to sit.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    #[must_use]
    pub fn is_focused(&self) -> bool { self.focus_state.is_focused() }

    #[must_use]
    pub fn value_mode(&self) -> ValueMode { self.value_mode }

    #[must_use]
    pub fn display_string(&self) -> String {
        render_display(&self.pattern, &self.buffer, self.slot_char, self.focus_state)
    }

    #[must_use]
    pub fn placeholder_hint(&self) -> String {
        placeholder_hint(&self.pattern, self.slot_char, self.placeholder.as_deref())
    }

    /// Char column of the caret in [`MaskInput::display_string`].
    #[must_use]
    pub fn caret_column(&self) -> usize { caret_column(&self.pattern, &self.buffer) }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::assert_eq2;

    type ChangeLog = Rc<RefCell<Vec<(String, bool)>>>;
    type CompleteLog = Rc<RefCell<Vec<String>>>;

    fn new_input(config: MaskInputConfig) -> (MaskInput, ChangeLog, CompleteLog) {
        let changes: ChangeLog = Rc::default();
        let completes: CompleteLog = Rc::default();
        let input = MaskInput::try_new(config)
            .unwrap()
            .on_value_change({
                let changes = Rc::clone(&changes);
                move |value, is_complete| {
                    changes.borrow_mut().push((value.to_string(), is_complete));
                }
            })
            .on_complete({
                let completes = Rc::clone(&completes);
                move |value| completes.borrow_mut().push(value.to_string())
            });
        (input, changes, completes)
    }

    #[test]
    fn test_ssn() {
        let (mut input, changes, completes) = new_input(MaskInputConfig::new("999-99-9999"));
        input.focus();
        input.type_str("123456789");

        assert_eq2!(input.raw_value(), "123456789");
        assert_eq2!(input.display_string(), "123-45-6789");
        assert!(input.is_complete());
        assert_eq2!(changes.borrow().len(), 9);
        assert_eq2!(changes.borrow()[8], ("123456789".to_string(), true));
        assert_eq2!(*completes.borrow(), vec!["123456789".to_string()]);
    }

    #[test]
    fn test_rejected_char_fires_nothing() {
        let (mut input, changes, completes) = new_input(MaskInputConfig::new("999"));
        input.focus();
        input.type_str("12a");

        assert_eq2!(input.raw_value(), "12");
        assert_eq2!(input.display_string(), "12_");
        assert!(!input.is_complete());
        assert_eq2!(changes.borrow().len(), 2);
        assert!(completes.borrow().is_empty());
    }

    #[test]
    fn test_complete_fires_only_on_transition() {
        let (mut input, changes, completes) = new_input(MaskInputConfig::new("99"));
        input.focus();
        input.type_str("12");
        input.backspace();
        input.insert_char('3');
        // Overwriting a slot of a complete value keeps it complete: no new completion.
        input.move_cursor(CursorMove::Home);
        input.insert_char('9');

        assert_eq2!(input.raw_value(), "93");
        assert_eq2!(*completes.borrow(), vec!["12".to_string(), "13".to_string()]);
        assert_eq2!(
            *changes.borrow(),
            vec![
                ("1".to_string(), false),
                ("12".to_string(), true),
                ("1".to_string(), false),
                ("13".to_string(), true),
                ("93".to_string(), true),
            ]
        );
    }

    #[test]
    fn test_paste_fires_once() {
        let (mut input, changes, completes) =
            new_input(MaskInputConfig::new("(999) 999-9999"));
        input.focus();
        assert_eq2!(input.paste("(555) 123-4567"), EditOutcome::Changed);
        assert_eq2!(input.display_string(), "(555) 123-4567");
        assert_eq2!(changes.borrow().len(), 1);
        assert_eq2!(completes.borrow().len(), 1);
    }

    #[test]
    fn test_auto_clear() {
        let (mut input, changes, _) =
            new_input(MaskInputConfig::new("99/99").with_auto_clear(true));
        input.focus();
        input.type_str("12");
        assert_eq2!(input.blur(), EditOutcome::Changed);

        assert!(input.is_empty());
        assert_eq2!(input.display_string(), "");
        assert_eq2!(input.placeholder_hint(), "__/__");
        assert_eq2!(changes.borrow().last().cloned(), Some((String::new(), false)));

        // Already empty, nothing to emit.
        input.focus();
        assert_eq2!(input.blur(), EditOutcome::Unchanged);
    }

    #[test]
    fn test_auto_clear_keeps_complete_value() {
        let (mut input, changes, _) =
            new_input(MaskInputConfig::new("99/99").with_auto_clear(true));
        input.focus();
        input.type_str("1231");
        let count = changes.borrow().len();
        assert_eq2!(input.blur(), EditOutcome::Unchanged);
        assert_eq2!(input.display_string(), "12/31");
        assert_eq2!(changes.borrow().len(), count);
    }

    #[test]
    fn test_blur_without_auto_clear_keeps_partial_value() {
        let (mut input, _, _) = new_input(MaskInputConfig::new("99/99"));
        input.focus();
        input.type_str("1");
        assert_eq2!(input.blur(), EditOutcome::Unchanged);
        assert_eq2!(input.display_string(), "1_/__");
    }

    #[test]
    fn test_default_value_and_focus_cursor() {
        let (mut input, changes, _) =
            new_input(MaskInputConfig::new("999-99-9999").with_default_value("123-45"));
        assert_eq2!(input.raw_value(), "12345");
        assert_eq2!(input.display_string(), "123-45-____");
        input.focus();
        assert_eq2!(input.buffer().cursor(), 5);
        assert_eq2!(input.caret_column(), 7);
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn test_controlled_mode() {
        let (mut input, changes, _) = new_input(MaskInputConfig::new("999").with_value("1"));
        assert_eq2!(input.value_mode(), ValueMode::Controlled);
        input.focus();

        // Proposed, not committed.
        assert_eq2!(input.insert_char('2'), EditOutcome::Changed);
        assert_eq2!(changes.borrow().last().cloned(), Some(("12".to_string(), false)));
        assert_eq2!(input.raw_value(), "1");

        // The owner accepts.
        input.set_value("12");
        assert_eq2!(input.raw_value(), "12");
        assert_eq2!(input.buffer().cursor(), 2);

        input.insert_char('3');
        assert_eq2!(changes.borrow().last().cloned(), Some(("123".to_string(), true)));
        // The owner overrides with something else entirely.
        input.set_value("999");
        assert_eq2!(input.display_string(), "999");
    }

    #[test]
    fn test_controlled_mode_ignored_proposal_keeps_cursor() {
        let (mut input, changes, _) = new_input(MaskInputConfig::new("999").with_value(""));
        input.focus();

        // The owner never accepts the first edit.
        assert_eq2!(input.insert_char('1'), EditOutcome::Changed);
        assert_eq2!(input.buffer().cursor(), 0);

        // So the next char is proposed into the same slot, with no gap.
        assert_eq2!(input.insert_char('2'), EditOutcome::Changed);
        assert_eq2!(input.buffer().cursor(), 0);
        assert_eq2!(input.display_string(), "___");
        assert_eq2!(
            changes.borrow().clone(),
            vec![("1".to_string(), false), ("2".to_string(), false)]
        );

        // Accepting the latest proposal moves the cursor past it.
        input.set_value("2");
        assert_eq2!(input.buffer().cursor(), 1);
        input.insert_char('3');
        assert_eq2!(changes.borrow().last().cloned(), Some(("23".to_string(), false)));
    }

    #[test]
    fn test_events() {
        let (mut input, _, _) = new_input(MaskInputConfig::new("aa-99"));
        let events = vec![
            MaskInputEvent::Focus,
            MaskInputEvent::Char('A'),
            MaskInputEvent::Char('1'),
            MaskInputEvent::Char('b'),
            MaskInputEvent::Paste("42".into()),
            MaskInputEvent::Move(CursorMove::Left),
            MaskInputEvent::Delete,
        ];
        for event in events {
            input.handle_event(event);
        }
        assert_eq2!(input.display_string(), "Ab-4_");
        assert_eq2!(input.handle_event(MaskInputEvent::Backspace), EditOutcome::Changed);
        assert_eq2!(input.display_string(), "Ab-__");
        assert!(input.is_focused());
        input.handle_event(MaskInputEvent::Blur);
        assert!(!input.is_focused());
    }

    #[test]
    fn test_try_new_errors() {
        assert!(MaskInput::try_new(MaskInputConfig::new("")).is_err());
        assert!(MaskInput::try_new(MaskInputConfig::new("--")).is_err());
        assert!(MaskInput::try_new(MaskInputConfig::new("99").with_slot_char("")).is_err());
    }
}
