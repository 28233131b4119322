// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The raw value of a masked input, one cell per slot, plus the cursor.
//!
//! Every edit takes the compiled [`MaskPattern`] and decides on its own whether to accept
//! a char. Literals are not part of the buffer at all, so the cursor can only ever sit on
//! a slot (or just past the last one), and skipping literals in both directions comes
//! for free.

use crate::{EditOutcome, MaskPattern};

/// Cursor movement that doesn't touch the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    /// First slot.
    Home,
    /// Just after the last filled slot.
    End,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MaskBuffer {
    slots: Vec<Option<char>>,
    /// Slot index in `0..=slots.len()`. `slots.len()` means past the end.
    cursor: usize,
}

impl MaskBuffer {
    /// An empty buffer with the cursor on the first slot.
    #[must_use]
    pub fn new(pattern: &MaskPattern) -> Self {
        Self {
            slots: vec![None; pattern.slot_count()],
            cursor: 0,
        }
    }

    /// Build a buffer from a default or controlled value. If `value` is already in
    /// display form (same width, literals line up) the literals are stripped, otherwise
    /// it is fed through [`MaskBuffer::paste`]. The cursor ends up on the first unfilled
    /// slot.
    #[must_use]
    pub fn from_value(pattern: &MaskPattern, value: &str, slot_char: char) -> Self {
        let mut acc = Self::new(pattern);
        match pattern.split_display(value, slot_char) {
            Some(slots) => acc.slots = slots,
            None => {
                acc.paste(pattern, value);
            }
        }
        acc.cursor = acc.first_unfilled_slot();
        acc
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<char>] { &self.slots }

    #[must_use]
    pub fn cursor(&self) -> usize { self.cursor }

    #[must_use]
    pub fn slot_count(&self) -> usize { self.slots.len() }

    /// Filled chars in slot order. Unfilled slots are skipped.
    #[must_use]
    pub fn raw_value(&self) -> String { self.slots.iter().flatten().collect() }

    /// Every slot is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool { self.slots.iter().all(Option::is_some) }

    /// No slot is filled.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.slots.iter().all(Option::is_none) }

    /// Index of the first unfilled slot, or [`MaskBuffer::slot_count`] if complete.
    #[must_use]
    pub fn first_unfilled_slot(&self) -> usize {
        self.slots
            .iter()
            .position(Option::is_none)
            .unwrap_or(self.slots.len())
    }

    /// Index just past the last filled slot, `0` if empty.
    #[must_use]
    pub fn end_of_value(&self) -> usize {
        self.slots
            .iter()
            .rposition(Option::is_some)
            .map_or(0, |it| it + 1)
    }

    /// `true` if the values are the same, regardless of where the cursors are.
    #[must_use]
    pub fn same_value(&self, other: &Self) -> bool { self.slots == other.slots }

    /// Try to put `ch` into the slot under the cursor. On success the cursor moves to
    /// the next slot. If the slot's class refuses `ch`, or the cursor is past the end,
    /// nothing changes.
    pub fn insert_char(&mut self, pattern: &MaskPattern, ch: char) -> EditOutcome {
        let Some(char_class) = pattern.slot_class(self.cursor) else {
            tracing::trace!(message = "mask full, char dropped", ch = %ch);
            return EditOutcome::Unchanged;
        };

        if !char_class.accepts(ch) {
            tracing::trace!(
                message = "char rejected by slot",
                ch = %ch,
                slot = self.cursor,
                char_class = %char_class
            );
            return EditOutcome::Unchanged;
        }

        let previous = self.slots[self.cursor].replace(ch);
        self.cursor += 1;
        EditOutcome::from(previous != Some(ch))
    }

    /// Clear the slot before the cursor and move the cursor onto it.
    pub fn backspace(&mut self) -> EditOutcome {
        if self.cursor == 0 {
            return EditOutcome::Unchanged;
        }
        self.cursor -= 1;
        EditOutcome::from(self.slots[self.cursor].take().is_some())
    }

    /// Clear the slot under the cursor. The cursor stays put.
    pub fn delete(&mut self) -> EditOutcome {
        match self.slots.get_mut(self.cursor) {
            Some(slot) => EditOutcome::from(slot.take().is_some()),
            None => EditOutcome::Unchanged,
        }
    }

    /// Feed `text` char by char through [`MaskBuffer::insert_char`], starting at the
    /// cursor. A rejected char does not use up the slot: the next char is tried against
    /// the same slot. Stops once the cursor is past the last slot.
    pub fn paste(&mut self, pattern: &MaskPattern, text: &str) -> EditOutcome {
        let mut changed = false;
        for ch in text.chars() {
            if self.cursor >= self.slots.len() {
                break;
            }
            changed |= self.insert_char(pattern, ch).is_changed();
        }
        EditOutcome::from(changed)
    }

    pub fn move_cursor(&mut self, cursor_move: CursorMove) {
        self.cursor = match cursor_move {
            CursorMove::Left => self.cursor.saturating_sub(1),
            CursorMove::Right => (self.cursor + 1).min(self.slots.len()),
            CursorMove::Home => 0,
            CursorMove::End => self.end_of_value(),
        };
    }

    /// Move the cursor onto a slot, clamped to `0..=slot_count`.
    pub fn set_cursor(&mut self, slot_index: usize) {
        self.cursor = slot_index.min(self.slots.len());
    }

    /// Empty every slot, cursor to the first slot.
    pub fn clear(&mut self) -> EditOutcome {
        let was_empty = self.is_empty();
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.cursor = 0;
        EditOutcome::from(!was_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    fn type_str(buffer: &mut MaskBuffer, pattern: &MaskPattern, text: &str) {
        for ch in text.chars() {
            buffer.insert_char(pattern, ch);
        }
    }

    #[test]
    fn test_insert_skips_literals() {
        let pattern = MaskPattern::compile("999-99-9999");
        let mut buffer = MaskBuffer::new(&pattern);
        type_str(&mut buffer, &pattern, "123456789");
        assert_eq2!(buffer.raw_value(), "123456789");
        assert_eq2!(buffer.cursor(), 9);
        assert!(buffer.is_complete());
    }

    #[test]
    fn test_rejected_char_leaves_state_unchanged() {
        let pattern = MaskPattern::compile("999");
        let mut buffer = MaskBuffer::new(&pattern);
        type_str(&mut buffer, &pattern, "12");
        let before = buffer.clone();

        assert_eq2!(buffer.insert_char(&pattern, 'a'), EditOutcome::Unchanged);
        assert_eq2!(buffer, before);
    }

    #[test]
    fn test_insert_past_end_is_dropped() {
        let pattern = MaskPattern::compile("99");
        let mut buffer = MaskBuffer::new(&pattern);
        type_str(&mut buffer, &pattern, "12");
        assert_eq2!(buffer.insert_char(&pattern, '3'), EditOutcome::Unchanged);
        assert_eq2!(buffer.raw_value(), "12");
    }

    #[test]
    fn test_alpha_preserves_case() {
        let pattern = MaskPattern::compile("aa-99");
        let mut buffer = MaskBuffer::new(&pattern);
        type_str(&mut buffer, &pattern, "xY42");
        assert_eq2!(buffer.raw_value(), "xY42");
    }

    #[test]
    fn test_backspace_and_delete() {
        let pattern = MaskPattern::compile("99-99");
        let mut buffer = MaskBuffer::new(&pattern);
        type_str(&mut buffer, &pattern, "123");

        assert_eq2!(buffer.backspace(), EditOutcome::Changed);
        assert_eq2!(buffer.raw_value(), "12");
        assert_eq2!(buffer.cursor(), 2);

        // Backspace over the literal lands on slot 1.
        assert_eq2!(buffer.backspace(), EditOutcome::Changed);
        assert_eq2!(buffer.raw_value(), "1");
        assert_eq2!(buffer.cursor(), 1);

        buffer.move_cursor(CursorMove::Home);
        assert_eq2!(buffer.delete(), EditOutcome::Changed);
        assert_eq2!(buffer.cursor(), 0);
        assert!(buffer.is_empty());

        assert_eq2!(buffer.backspace(), EditOutcome::Unchanged);
        assert_eq2!(buffer.delete(), EditOutcome::Unchanged);
    }

    #[test]
    fn test_delete_in_the_middle_leaves_a_gap() {
        let pattern = MaskPattern::compile("9999");
        let mut buffer = MaskBuffer::new(&pattern);
        type_str(&mut buffer, &pattern, "1234");
        buffer.set_cursor(1);
        buffer.delete();
        assert_eq2!(buffer.slots(), &[Some('1'), None, Some('3'), Some('4')]);
        assert_eq2!(buffer.raw_value(), "134");
        assert!(!buffer.is_complete());
        assert_eq2!(buffer.first_unfilled_slot(), 1);
        assert_eq2!(buffer.end_of_value(), 4);
    }

    #[test]
    fn test_paste_stays_on_slot_after_reject() {
        let pattern = MaskPattern::compile("(999) 999-9999");
        let mut buffer = MaskBuffer::new(&pattern);
        assert_eq2!(buffer.paste(&pattern, "555-123-4567"), EditOutcome::Changed);
        assert_eq2!(buffer.raw_value(), "5551234567");
        assert!(buffer.is_complete());
    }

    #[test]
    fn test_paste_all_rejected() {
        let pattern = MaskPattern::compile("999");
        let mut buffer = MaskBuffer::new(&pattern);
        assert_eq2!(buffer.paste(&pattern, "abc"), EditOutcome::Unchanged);
        assert_eq2!(buffer.cursor(), 0);
    }

    #[test]
    fn test_overwrite_filled_slot() {
        let pattern = MaskPattern::compile("999");
        let mut buffer = MaskBuffer::new(&pattern);
        type_str(&mut buffer, &pattern, "123");
        buffer.move_cursor(CursorMove::Home);
        assert_eq2!(buffer.insert_char(&pattern, '1'), EditOutcome::Unchanged);
        assert_eq2!(buffer.insert_char(&pattern, '9'), EditOutcome::Changed);
        assert_eq2!(buffer.raw_value(), "193");
        assert_eq2!(buffer.cursor(), 2);
    }

    #[test]
    fn test_cursor_moves() {
        let pattern = MaskPattern::compile("99-99");
        let mut buffer = MaskBuffer::new(&pattern);
        buffer.move_cursor(CursorMove::Left);
        assert_eq2!(buffer.cursor(), 0);

        type_str(&mut buffer, &pattern, "12");
        buffer.move_cursor(CursorMove::Home);
        assert_eq2!(buffer.cursor(), 0);
        buffer.move_cursor(CursorMove::End);
        assert_eq2!(buffer.cursor(), 2);
        buffer.move_cursor(CursorMove::Right);
        buffer.move_cursor(CursorMove::Right);
        buffer.move_cursor(CursorMove::Right);
        assert_eq2!(buffer.cursor(), 4);
    }

    #[test]
    fn test_from_value() {
        let pattern = MaskPattern::compile("999-99-9999");

        let buffer = MaskBuffer::from_value(&pattern, "123-45-6789", '_');
        assert_eq2!(buffer.raw_value(), "123456789");
        assert_eq2!(buffer.cursor(), 9);

        let buffer = MaskBuffer::from_value(&pattern, "12345", '_');
        assert_eq2!(buffer.raw_value(), "12345");
        assert_eq2!(buffer.cursor(), 5);

        let buffer = MaskBuffer::from_value(&pattern, "123-4_-____", '_');
        assert_eq2!(buffer.raw_value(), "1234");
        assert_eq2!(buffer.cursor(), 4);
    }

    #[test]
    fn test_clear() {
        let pattern = MaskPattern::compile("99");
        let mut buffer = MaskBuffer::new(&pattern);
        assert_eq2!(buffer.clear(), EditOutcome::Unchanged);
        type_str(&mut buffer, &pattern, "1");
        assert_eq2!(buffer.clear(), EditOutcome::Changed);
        assert!(buffer.is_empty());
        assert_eq2!(buffer.cursor(), 0);
    }
}
