// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{FocusState, MaskBuffer, MaskPattern, MaskToken};

/// Default char shown for an unfilled slot.
pub const DEFAULT_SLOT_CHAR: char = '_';

/// Render every position of the pattern: literals as is, filled slots as their char,
/// unfilled slots as `slot_char`. The result is always exactly
/// [`MaskPattern::len`] chars wide.
#[must_use]
pub fn render_mask(pattern: &MaskPattern, buffer: &MaskBuffer, slot_char: char) -> String {
    let mut slots = buffer.slots().iter();
    pattern
        .tokens()
        .iter()
        .map(|token| match token {
            MaskToken::Literal(literal) => *literal,
            MaskToken::Slot(_) => slots.next().copied().flatten().unwrap_or(slot_char),
        })
        .collect()
}

/// What the input surface shows. While blurred, an empty buffer renders as `""` so the
/// pattern doesn't sit in the field as a block of slot chars; see [`placeholder_hint`]
/// for what to show instead.
#[must_use]
pub fn render_display(
    pattern: &MaskPattern,
    buffer: &MaskBuffer,
    slot_char: char,
    focus_state: FocusState,
) -> String {
    if !focus_state.is_focused() && buffer.is_empty() {
        return String::new();
    }
    render_mask(pattern, buffer, slot_char)
}

/// Hint text for an empty, blurred field: the explicit placeholder if there is one,
/// otherwise the pattern with every slot unfilled, eg: `___-__-____`.
#[must_use]
pub fn placeholder_hint(
    pattern: &MaskPattern,
    slot_char: char,
    placeholder: Option<&str>,
) -> String {
    match placeholder {
        Some(it) => it.to_string(),
        None => render_mask(pattern, &MaskBuffer::new(pattern), slot_char),
    }
}

/// Char column of the caret in the display string for the buffer's cursor.
#[must_use]
pub fn caret_column(pattern: &MaskPattern, buffer: &MaskBuffer) -> usize {
    pattern.display_position_of_slot(buffer.cursor())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_render_mask() {
        let pattern = MaskPattern::compile("999-99-9999");
        let buffer = MaskBuffer::from_value(&pattern, "12345", DEFAULT_SLOT_CHAR);
        assert_eq2!(render_mask(&pattern, &buffer, '_'), "123-45-____");
        assert_eq2!(render_mask(&pattern, &buffer, '#'), "123-45-####");
    }

    #[test]
    fn test_render_display_hides_empty_when_blurred() {
        let pattern = MaskPattern::compile("99/99");
        let empty = MaskBuffer::new(&pattern);
        assert_eq2!(render_display(&pattern, &empty, '_', FocusState::Blurred), "");
        assert_eq2!(render_display(&pattern, &empty, '_', FocusState::Focused), "__/__");

        let partial = MaskBuffer::from_value(&pattern, "1", '_');
        assert_eq2!(render_display(&pattern, &partial, '_', FocusState::Blurred), "1_/__");
    }

    #[test]
    fn test_placeholder_hint() {
        let pattern = MaskPattern::compile("(999) 999-9999");
        assert_eq2!(placeholder_hint(&pattern, '_', None), "(___) ___-____");
        assert_eq2!(placeholder_hint(&pattern, '_', Some("Phone")), "Phone");
    }

    #[test]
    fn test_caret_column() {
        let pattern = MaskPattern::compile("(999) 999-9999");
        let mut buffer = MaskBuffer::new(&pattern);
        assert_eq2!(caret_column(&pattern, &buffer), 1);
        buffer.paste(&pattern, "555");
        assert_eq2!(caret_column(&pattern, &buffer), 6);
        buffer.paste(&pattern, "1234567");
        assert_eq2!(caret_column(&pattern, &buffer), 14);
    }
}
