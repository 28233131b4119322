// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Properties of the mask engine that must hold for any pattern and any keystrokes.

use formkit::{CharClass, MaskBuffer, MaskInput, MaskInputConfig, MaskPattern, MaskToken,
              render_mask};
use proptest::prelude::*;

/// Patterns built from slot chars and a few common literals.
fn arb_pattern() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            4 => Just('9'),
            2 => Just('a'),
            2 => Just('*'),
            1 => Just('-'),
            1 => Just('('),
            1 => Just(')'),
            1 => Just(' '),
            1 => Just('/'),
        ],
        1..16,
    )
    .prop_map(|chars| chars.into_iter().collect::<String>())
    .prop_filter("at least one slot", |it| it.contains(['9', 'a', '*']))
}

/// Keystrokes: mostly accepted chars, some that no slot takes.
fn arb_keystrokes() -> impl Strategy<Value = String> {
    "[0-9A-Za-z#@!é ]{0,24}"
}

/// A value that fills every slot of `pattern`.
fn fill_for(pattern: &MaskPattern) -> String {
    pattern
        .tokens()
        .iter()
        .filter_map(|token| match token {
            MaskToken::Slot(CharClass::Alpha) => Some('x'),
            MaskToken::Slot(_) => Some('7'),
            MaskToken::Literal(_) => None,
        })
        .collect()
}

proptest! {
    #[test]
    fn raw_value_only_holds_accepted_chars_in_order(
        pattern in arb_pattern(),
        keystrokes in arb_keystrokes(),
    ) {
        let compiled = MaskPattern::compile(&pattern);
        let mut buffer = MaskBuffer::new(&compiled);
        for ch in keystrokes.chars() {
            let before = buffer.clone();
            let accepted = compiled
                .slot_class(buffer.cursor())
                .is_some_and(|it| it.accepts(ch));
            buffer.insert_char(&compiled, ch);
            if !accepted {
                prop_assert_eq!(&buffer, &before);
            }
        }
        for (index, slot) in buffer.slots().iter().enumerate() {
            if let Some(ch) = slot {
                let char_class = compiled.slot_class(index).unwrap();
                prop_assert!(char_class.accepts(*ch));
            }
        }
    }

    #[test]
    fn display_is_always_as_wide_as_the_pattern(
        pattern in arb_pattern(),
        keystrokes in arb_keystrokes(),
    ) {
        let compiled = MaskPattern::compile(&pattern);
        let mut buffer = MaskBuffer::new(&compiled);
        buffer.paste(&compiled, &keystrokes);
        prop_assert_eq!(render_mask(&compiled, &buffer, '_').chars().count(), compiled.len());
    }

    #[test]
    fn complete_exactly_when_last_slot_is_filled(pattern in arb_pattern()) {
        let compiled = MaskPattern::compile(&pattern);
        let fill = fill_for(&compiled);
        let mut buffer = MaskBuffer::new(&compiled);
        for (index, ch) in fill.chars().enumerate() {
            prop_assert!(!buffer.is_complete());
            buffer.insert_char(&compiled, ch);
            prop_assert_eq!(buffer.is_complete(), index + 1 == compiled.slot_count());
        }
    }

    #[test]
    fn strip_literals_of_full_display_is_raw(pattern in arb_pattern()) {
        let compiled = MaskPattern::compile(&pattern);
        let fill = fill_for(&compiled);
        let buffer = MaskBuffer::from_value(&compiled, &fill, '_');
        let display = render_mask(&compiled, &buffer, '_');
        prop_assert_eq!(compiled.strip_literals(&display, '_'), Some(buffer.raw_value()));
        prop_assert_eq!(buffer.raw_value(), fill);
    }

    #[test]
    fn backspace_then_retype_restores_state(
        pattern in arb_pattern(),
        count in 0_usize..16,
    ) {
        let compiled = MaskPattern::compile(&pattern);
        let fill = fill_for(&compiled);
        let mut buffer = MaskBuffer::new(&compiled);
        buffer.paste(&compiled, &fill);
        let before = buffer.clone();

        let count = count.min(compiled.slot_count());
        for _ in 0..count {
            buffer.backspace();
        }
        let retyped: String = fill.chars().skip(compiled.slot_count() - count).collect();
        for ch in retyped.chars() {
            buffer.insert_char(&compiled, ch);
        }
        prop_assert_eq!(buffer, before);
    }

    #[test]
    fn auto_clear_empties_only_incomplete_values(
        pattern in arb_pattern(),
        keystrokes in arb_keystrokes(),
        auto_clear in any::<bool>(),
    ) {
        let config = MaskInputConfig::new(pattern).with_auto_clear(auto_clear);
        let mut input = MaskInput::try_new(config).unwrap();
        input.focus();
        input.paste(&keystrokes);
        let was_complete = input.is_complete();
        let raw_before = input.raw_value();
        input.blur();
        if was_complete || !auto_clear {
            prop_assert_eq!(input.raw_value(), raw_before);
        } else {
            prop_assert!(input.is_empty());
        }
    }
}
