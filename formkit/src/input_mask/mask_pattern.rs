// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Compile a mask pattern string into slots and literals.
//!
//! | Pattern char | Meaning                                 |
//! |--------------|-----------------------------------------|
//! | `9`          | slot, accepts an ASCII digit            |
//! | `a`          | slot, accepts an ASCII letter           |
//! | `*`          | slot, accepts an ASCII digit or letter  |
//! | anything else| literal, shown as is, never typed       |
//!
//! Compilation is total. The only patterns that an input refuses are the empty one and
//! one without any slot, see [`MaskPattern::validate`].

use std::sync::{Arc, LazyLock, Mutex, PoisonError};

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{CommonResult, FormkitError};

/// Most real world masks (phone numbers, dates, SSNs, card numbers) fit inline.
pub const INLINE_MASK_SIZE: usize = 20;

pub type MaskTokens = SmallVec<[MaskToken; INLINE_MASK_SIZE]>;
pub type SlotPositions = SmallVec<[usize; INLINE_MASK_SIZE]>;

/// The set of characters that a slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum CharClass {
    #[strum(serialize = "digit")]
    Digit,
    #[strum(serialize = "alpha")]
    Alpha,
    #[strum(serialize = "alphanumeric")]
    Alphanumeric,
}

impl CharClass {
    /// Case is preserved, `a` slots take both `A` and `a`. Non ASCII is never accepted.
    #[must_use]
    pub fn accepts(&self, ch: char) -> bool {
        match self {
            CharClass::Digit => ch.is_ascii_digit(),
            CharClass::Alpha => ch.is_ascii_alphabetic(),
            CharClass::Alphanumeric => ch.is_ascii_alphanumeric(),
        }
    }

    #[must_use]
    pub fn from_pattern_char(ch: char) -> Option<Self> {
        match ch {
            '9' => Some(CharClass::Digit),
            'a' => Some(CharClass::Alpha),
            '*' => Some(CharClass::Alphanumeric),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskToken {
    Slot(CharClass),
    Literal(char),
}

/// A compiled mask. Immutable once built, cheap to share via [`Arc`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskPattern {
    source: String,
    tokens: MaskTokens,
    /// `slot_positions[slot_index]` is the index of that slot in `tokens`.
    slot_positions: SlotPositions,
}

static PATTERN_CACHE: LazyLock<Mutex<FxHashMap<String, Arc<MaskPattern>>>> =
    LazyLock::new(|| Mutex::new(FxHashMap::default()));

impl MaskPattern {
    /// Classify every char of `pattern`. Never fails.
    #[must_use]
    pub fn compile(pattern: &str) -> Self {
        let tokens: MaskTokens = pattern
            .chars()
            .map(|ch| match CharClass::from_pattern_char(ch) {
                Some(char_class) => MaskToken::Slot(char_class),
                None => MaskToken::Literal(ch),
            })
            .collect();

        let slot_positions: SlotPositions = tokens
            .iter()
            .enumerate()
            .filter_map(|(position, token)| {
                matches!(token, MaskToken::Slot(_)).then_some(position)
            })
            .collect();

        Self {
            source: pattern.to_string(),
            tokens,
            slot_positions,
        }
    }

    /// Same as [`MaskPattern::compile`], but memoized per distinct pattern string for
    /// the lifetime of the process.
    #[must_use]
    pub fn compile_cached(pattern: &str) -> Arc<Self> {
        let mut cache = PATTERN_CACHE.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(it) = cache.get(pattern) {
            return Arc::clone(it);
        }
        let it = Arc::new(Self::compile(pattern));
        tracing::debug!(
            message = "mask pattern compiled",
            pattern,
            slot_count = it.slot_count()
        );
        cache.insert(pattern.to_string(), Arc::clone(&it));
        it
    }

    /// An input can't work with an empty pattern, or one that has no slots.
    ///
    /// # Errors
    ///
    /// - [`FormkitError::EmptyMask`]
    /// - [`FormkitError::MaskWithoutSlots`]
    pub fn validate(&self) -> CommonResult<()> {
        if self.tokens.is_empty() {
            return Err(FormkitError::EmptyMask.into());
        }
        if self.slot_positions.is_empty() {
            return Err(FormkitError::MaskWithoutSlots {
                pattern: self.source.clone(),
            }
            .into());
        }
        Ok(())
    }

    #[must_use]
    pub fn source(&self) -> &str { &self.source }

    #[must_use]
    pub fn tokens(&self) -> &[MaskToken] { &self.tokens }

    /// Width of the display string, in chars.
    #[must_use]
    pub fn len(&self) -> usize { self.tokens.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.tokens.is_empty() }

    #[must_use]
    pub fn slot_count(&self) -> usize { self.slot_positions.len() }

    #[must_use]
    pub fn slot_class(&self, slot_index: usize) -> Option<CharClass> {
        let position = *self.slot_positions.get(slot_index)?;
        match self.tokens[position] {
            MaskToken::Slot(char_class) => Some(char_class),
            MaskToken::Literal(_) => None,
        }
    }

    /// Display position (char index) of a slot. Past the last slot this is the width of
    /// the display string, which is where a caret goes when the mask is full.
    #[must_use]
    pub fn display_position_of_slot(&self, slot_index: usize) -> usize {
        self.slot_positions
            .get(slot_index)
            .copied()
            .unwrap_or(self.tokens.len())
    }

    /// Split a string that is already in display form back into slots. Returns [`None`]
    /// if `display` isn't as wide as the pattern, or a literal doesn't line up, or a
    /// slot holds a char its class refuses (that isn't `slot_char`).
    ///
    /// A char in a slot position is read as filled if the class accepts it, and as
    /// unfilled if it is `slot_char`.
    #[must_use]
    pub fn split_display(&self, display: &str, slot_char: char) -> Option<Vec<Option<char>>> {
        if display.chars().count() != self.tokens.len() {
            return None;
        }

        let mut acc = Vec::with_capacity(self.slot_count());
        for (token, ch) in self.tokens.iter().zip(display.chars()) {
            match token {
                MaskToken::Literal(literal) if *literal == ch => {}
                MaskToken::Literal(_) => return None,
                MaskToken::Slot(char_class) if char_class.accepts(ch) => acc.push(Some(ch)),
                MaskToken::Slot(_) if ch == slot_char => acc.push(None),
                MaskToken::Slot(_) => return None,
            }
        }
        Some(acc)
    }

    /// Remove the literals from a display string, returning the raw value. See
    /// [`MaskPattern::split_display`] for when this returns [`None`].
    #[must_use]
    pub fn strip_literals(&self, display: &str, slot_char: char) -> Option<String> {
        self.split_display(display, slot_char)
            .map(|slots| slots.into_iter().flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test]
    fn test_compile_ssn() {
        let pattern = MaskPattern::compile("999-99-9999");
        assert_eq2!(pattern.len(), 11);
        assert_eq2!(pattern.slot_count(), 9);
        assert_eq2!(pattern.tokens()[3], MaskToken::Literal('-'));
        assert_eq2!(pattern.tokens()[0], MaskToken::Slot(CharClass::Digit));
        assert_eq2!(pattern.display_position_of_slot(3), 4);
        assert_eq2!(pattern.display_position_of_slot(9), 11);
    }

    #[test]
    fn test_compile_is_total() {
        let pattern = MaskPattern::compile("A9 *a🦀");
        assert_eq2!(
            pattern.tokens(),
            &[
                MaskToken::Literal('A'),
                MaskToken::Slot(CharClass::Digit),
                MaskToken::Literal(' '),
                MaskToken::Slot(CharClass::Alphanumeric),
                MaskToken::Slot(CharClass::Alpha),
                MaskToken::Literal('🦀'),
            ]
        );
        assert_eq2!(pattern.len(), 6);
    }

    #[test_case('5', CharClass::Digit, true)]
    #[test_case('x', CharClass::Digit, false)]
    #[test_case('Q', CharClass::Alpha, true)]
    #[test_case('q', CharClass::Alpha, true)]
    #[test_case('7', CharClass::Alpha, false)]
    #[test_case('é', CharClass::Alpha, false)]
    #[test_case('7', CharClass::Alphanumeric, true)]
    #[test_case('z', CharClass::Alphanumeric, true)]
    #[test_case('-', CharClass::Alphanumeric, false)]
    #[test_case('٣', CharClass::Digit, false)]
    fn test_char_class_accepts(ch: char, char_class: CharClass, expected: bool) {
        assert_eq2!(char_class.accepts(ch), expected);
    }

    #[test]
    fn test_validate() {
        assert!(MaskPattern::compile("99").validate().is_ok());

        let report = MaskPattern::compile("").validate().unwrap_err();
        assert_eq2!(report.downcast_ref::<FormkitError>(), Some(&FormkitError::EmptyMask));

        let report = MaskPattern::compile("(--)").validate().unwrap_err();
        assert_eq2!(
            report.downcast_ref::<FormkitError>(),
            Some(&FormkitError::MaskWithoutSlots {
                pattern: "(--)".into()
            })
        );
    }

    #[test]
    fn test_compile_cached_returns_shared_pattern() {
        let lhs = MaskPattern::compile_cached("99/99/9999");
        let rhs = MaskPattern::compile_cached("99/99/9999");
        assert!(Arc::ptr_eq(&lhs, &rhs));
        assert_eq2!(*lhs, MaskPattern::compile("99/99/9999"));
    }

    #[test]
    fn test_strip_literals() {
        let pattern = MaskPattern::compile("(999) 999-9999");
        assert_eq2!(
            pattern.strip_literals("(555) 123-4567", '_').as_deref(),
            Some("5551234567")
        );
        assert_eq2!(pattern.strip_literals("(555) 12_-____", '_').as_deref(), Some("55512"));
        // Literal doesn't line up.
        assert_eq2!(pattern.strip_literals("[555] 123-4567", '_'), None);
        // Wrong width.
        assert_eq2!(pattern.strip_literals("5551234567", '_'), None);
    }

    #[test]
    fn test_strip_literals_with_letter_literal() {
        // `X` is a literal, and it is also accepted by the `*` slot next to it.
        let pattern = MaskPattern::compile("X*");
        assert_eq2!(pattern.strip_literals("Xq", '_').as_deref(), Some("q"));
    }
}
