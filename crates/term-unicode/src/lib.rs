//! Three-stage Unicode property table and grapheme-cluster-boundary
//! segmentation core for a terminal emulator.
//!
//! Two public entry points cover everything a terminal needs to lay out
//! text: [`width`] for a single scalar value's display width, and
//! [`grapheme_break`] for whether a boundary exists between two
//! consecutive scalar values, threading a small caller-owned [`BreakState`]
//! across the scan. Normalization, word/sentence/line breaking, and full
//! UAX#29 conformance are explicitly out of scope (see `SPEC_FULL.md`).
//!
//! Grounded on the teacher's `core-text::width::egc_width` idiom: one
//! authoritative function everything else calls instead of reaching past it
//! into the underlying table.

mod record;
mod segmentation;
mod table;

pub use record::BreakState;

/// Display width, in terminal columns, of a single scalar value: `0`, `1`,
/// or `2`. Combining marks and other zero-width codepoints return `0`.
///
/// Total over every `char`; never panics.
pub fn width(c: char) -> u8 {
    table::get(c).width
}

/// Whether a grapheme-cluster boundary exists between `c1` and `c2`, given
/// the state left over from the previous call in a left-to-right scan.
///
/// Returns the break decision and the state to pass into the *next* call
/// (where `c2` becomes that call's `c1`). Callers scanning a string start
/// with `BreakState::default()` and a boundary before the first codepoint.
pub fn grapheme_break(state: BreakState, c1: char, c2: char) -> (bool, BreakState) {
    segmentation::lookup(state, c1, c2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_digits_are_single_width() {
        for c in '0'..='9' {
            assert_eq!(width(c), 1);
        }
    }

    #[test]
    fn combining_acute_accent_is_zero_width() {
        assert_eq!(width('\u{0301}'), 0);
    }

    #[test]
    fn cjk_ideograph_is_double_width() {
        assert_eq!(width('\u{4E2D}'), 2);
    }

    #[test]
    fn hangul_lv_then_t_does_not_break() {
        let state = BreakState::default();
        let (break_here, _) = grapheme_break(state, '\u{AC00}', '\u{11A8}');
        assert!(!break_here);
    }

    #[test]
    fn two_unrelated_ascii_letters_break() {
        let state = BreakState::default();
        let (break_here, _) = grapheme_break(state, 'x', 'y');
        assert!(break_here);
    }

    #[test]
    fn flag_sequence_then_a_third_regional_indicator_breaks() {
        let state = BreakState::default();
        let (first_break, next) = grapheme_break(state, '\u{1F1FA}', '\u{1F1F8}');
        assert!(!first_break);
        let (second_break, _) = grapheme_break(next, '\u{1F1FA}', '\u{1F1F8}');
        assert!(second_break);
    }

    #[test]
    fn width_agrees_with_unicode_width_for_plain_ascii() {
        for c in 'a'..='z' {
            assert_eq!(width(c) as usize, unicode_width::UnicodeWidthChar::width(c).unwrap_or(0));
        }
    }
}
