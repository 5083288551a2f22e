//! Runtime grapheme-cluster-boundary lookup (§4.4 consumer side).
//!
//! Consumes the `build.rs`-generated `BREAK_TABLE` byte array: a single
//! indexed load decodes into a break decision plus the next [`BreakState`],
//! no rule re-evaluation at runtime. The rule-evaluation logic itself lives
//! only in `term-unicode-tables::breaktable::SegmentationOracle`, which this
//! crate cross-checks against in tests (see `tests::` below) without
//! depending on it outside `#[cfg(test)]`.

use crate::record::{break_key, BreakState};
use crate::table;

/// Decodes one `BREAK_TABLE` byte: bit 0 is the break decision, bits 1-2 are
/// the next [`BreakState`].
fn decode_cell(byte: u8) -> (bool, BreakState) {
    let break_here = byte & 0b001 != 0;
    let next = BreakState::from_bits((byte >> 1) & 0b11);
    (break_here, next)
}

pub(crate) fn lookup(state: BreakState, c1: char, c2: char) -> (bool, BreakState) {
    let class1 = table::get(c1).boundary_class;
    let class2 = table::get(c2).boundary_class;
    let key = break_key(state, class1, class2) as usize;
    decode_cell(table::BREAK_TABLE[key])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::BoundaryClass;
    use term_unicode_tables::{BoundaryClass as RefClass, BreakState as RefState, SegmentationOracle};

    fn to_ref_class(class: BoundaryClass) -> RefClass {
        match class {
            BoundaryClass::Invalid => RefClass::Invalid,
            BoundaryClass::L => RefClass::L,
            BoundaryClass::V => RefClass::V,
            BoundaryClass::T => RefClass::T,
            BoundaryClass::Lv => RefClass::Lv,
            BoundaryClass::Lvt => RefClass::Lvt,
            BoundaryClass::Prepend => RefClass::Prepend,
            BoundaryClass::Extend => RefClass::Extend,
            BoundaryClass::Zwj => RefClass::Zwj,
            BoundaryClass::SpacingMark => RefClass::SpacingMark,
            BoundaryClass::RegionalIndicator => RefClass::RegionalIndicator,
            BoundaryClass::ExtendedPictographic => RefClass::ExtendedPictographic,
            BoundaryClass::ExtendedPictographicBase => RefClass::ExtendedPictographicBase,
            BoundaryClass::EmojiModifier => RefClass::EmojiModifier,
        }
    }

    fn to_ref_state(state: BreakState) -> RefState {
        RefState {
            extended_pictographic: state.extended_pictographic,
            regional_indicator: state.regional_indicator,
        }
    }

    /// Testable Property 5: the precomputed table agrees with the reference
    /// oracle for every pair of scalar values exercised by the concrete
    /// scenarios, across all four possible incoming states.
    fn assert_matches_oracle(c1: char, c2: char) {
        let oracle = SegmentationOracle;
        for &ep in &[false, true] {
            for &ri in &[false, true] {
                let state = BreakState {
                    extended_pictographic: ep,
                    regional_indicator: ri,
                };
                let (actual_break, actual_next) = lookup(state, c1, c2);

                let class1 = to_ref_class(table::get(c1).boundary_class);
                let class2 = to_ref_class(table::get(c2).boundary_class);
                let (expected_break, expected_next) =
                    oracle.classify_pair(to_ref_state(state), class1, class2);

                assert_eq!(actual_break, expected_break, "break mismatch for {c1:?},{c2:?} at {state:?}");
                assert_eq!(
                    actual_next.extended_pictographic,
                    expected_next.extended_pictographic
                );
                assert_eq!(actual_next.regional_indicator, expected_next.regional_indicator);
            }
        }
    }

    #[test]
    fn ascii_pair_matches_reference_oracle() {
        assert_matches_oracle('a', 'b');
    }

    #[test]
    fn hangul_syllable_pair_matches_reference_oracle() {
        assert_matches_oracle('\u{1100}', '\u{1161}');
    }

    #[test]
    fn regional_indicator_pair_matches_reference_oracle() {
        assert_matches_oracle('\u{1F1E6}', '\u{1F1E7}');
    }

    #[test]
    fn emoji_modifier_base_and_modifier_do_not_break() {
        let state = BreakState::default();
        let (break_here, _) = lookup(state, '\u{261D}', '\u{1F3FB}');
        assert!(!break_here);
    }

    #[test]
    fn emoji_modifier_after_plain_pictographic_breaks() {
        // Scenario from the pinned EP/RI asymmetry: a plain
        // Extended_Pictographic codepoint (not an Emoji_Modifier_Base) is
        // followed by a skin-tone modifier; this does break, unlike the
        // base+modifier case above.
        let state = BreakState::default();
        let (break_here, _) = lookup(state, '\u{2600}', '\u{1F3FB}');
        assert!(break_here);
    }
}
