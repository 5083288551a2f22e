//! Reference grapheme-cluster-boundary oracle (§4.3) and its offline
//! precomputation into a 1024-entry break table (§4.4).
//!
//! The rule-ordering shape — named rules applied in listed priority order,
//! with "break" as the default fallback — is grounded on `other_examples`
//! `axelf4-unicode-linebreak build.rs`'s `rules2pair_table!` macro, which
//! encodes a UAX#14 pair table the same way. The rule set itself is a
//! UAX#29 subset (GB6/7/8/9/9a/9b/11/12/13 plus a pictographic-entry rule
//! and an emoji-modifier-sequence rule); GB3/GB4 (control/CR/LF) are
//! intentionally excluded, matching this crate's Non-goals.

use crate::record::{break_key, BoundaryClass, BreakCell, BreakState, BREAK_TABLE_LEN};

/// Offline-only reference implementation, never compiled into the runtime
/// crate's default build. Callers who need to cross-check the precomputed
/// table use this directly instead of the `BreakCell` lookup.
pub struct SegmentationOracle;

impl SegmentationOracle {
    /// Decides whether a boundary exists between a codepoint classified as
    /// `c1` and one classified as `c2`, given the state left over from the
    /// previous pair. Returns the decision and the state to carry into the
    /// *next* pair (where `c2` becomes the next pair's `c1`).
    pub fn classify_pair(
        &self,
        state: BreakState,
        c1: BoundaryClass,
        c2: BoundaryClass,
    ) -> (bool, BreakState) {
        use BoundaryClass::*;

        // R0: stateful bookkeeping, not itself a verdict. Runs before every
        // verdict rule below.
        let mut ep = state.extended_pictographic;
        if !ep && matches!(c1, ExtendedPictographic | ExtendedPictographicBase) {
            ep = true;
        }
        let persist = |ep: bool| BreakState {
            extended_pictographic: ep,
            regional_indicator: false,
        };

        // GB6/GB7/GB8: Hangul syllable sequences.
        if c1 == L && matches!(c2, L | V | Lv | Lvt) {
            return (false, persist(ep));
        }
        if matches!(c1, Lv | V) && matches!(c2, V | T) {
            return (false, persist(ep));
        }
        if matches!(c1, Lvt | T) && c2 == T {
            return (false, persist(ep));
        }
        // GB9: x (Extend | ZWJ).
        if matches!(c2, Extend | Zwj) {
            return (false, persist(ep));
        }
        // GB9a: x SpacingMark.
        if c2 == SpacingMark {
            return (false, persist(ep));
        }
        // GB9b: Prepend x.
        if c1 == Prepend {
            return (false, persist(ep));
        }
        // GB12/GB13: RI x RI, every other pair.
        if c1 == RegionalIndicator && c2 == RegionalIndicator {
            return if state.regional_indicator {
                (true, BreakState::default())
            } else {
                (
                    false,
                    BreakState {
                        extended_pictographic: ep,
                        regional_indicator: true,
                    },
                )
            };
        }
        // GB11: EP Extend* ZWJ x EP. Clears the pictographic flag: the run
        // is complete.
        if ep && c1 == Zwj && matches!(c2, ExtendedPictographic | ExtendedPictographicBase) {
            return (false, BreakState::default());
        }
        // Ext: emoji modifier sequence, base only (not plain ExtendedPictographic).
        if c1 == ExtendedPictographicBase && c2 == EmojiModifier {
            return (false, persist(ep));
        }

        // default: break. The sequence is over; both flags clear.
        (true, BreakState::default())
    }
}

const ALL_CLASSES: [BoundaryClass; 14] = [
    BoundaryClass::Invalid,
    BoundaryClass::L,
    BoundaryClass::V,
    BoundaryClass::T,
    BoundaryClass::Lv,
    BoundaryClass::Lvt,
    BoundaryClass::Prepend,
    BoundaryClass::Extend,
    BoundaryClass::Zwj,
    BoundaryClass::SpacingMark,
    BoundaryClass::RegionalIndicator,
    BoundaryClass::ExtendedPictographic,
    BoundaryClass::ExtendedPictographicBase,
    BoundaryClass::EmojiModifier,
];

const ALL_STATES: [BreakState; 4] = [
    BreakState {
        extended_pictographic: false,
        regional_indicator: false,
    },
    BreakState {
        extended_pictographic: true,
        regional_indicator: false,
    },
    BreakState {
        extended_pictographic: false,
        regional_indicator: true,
    },
    BreakState {
        extended_pictographic: true,
        regional_indicator: true,
    },
];

pub struct BreakTableBuilder;

impl BreakTableBuilder {
    /// Precomputes every `(state, class1, class2)` combination into a flat
    /// 1024-entry array, indexed by [`break_key`].
    pub fn build() -> [BreakCell; BREAK_TABLE_LEN] {
        let oracle = SegmentationOracle;
        let mut table = [BreakCell {
            break_here: true,
            next: BreakState::default(),
        }; BREAK_TABLE_LEN];

        for &state in &ALL_STATES {
            for &c1 in &ALL_CLASSES {
                for &c2 in &ALL_CLASSES {
                    let (break_here, next) = oracle.classify_pair(state, c1, c2);
                    let key = break_key(state, c1, c2) as usize;
                    table[key] = BreakCell { break_here, next };
                }
            }
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hangul_jamo_sequence_never_breaks() {
        let oracle = SegmentationOracle;
        let state = BreakState::default();
        let (break_here, _) = oracle.classify_pair(state, BoundaryClass::L, BoundaryClass::V);
        assert!(!break_here);
    }

    #[test]
    fn regional_indicator_pairs_alternate() {
        let oracle = SegmentationOracle;
        let state = BreakState::default();
        let (break_here, next) = oracle.classify_pair(
            state,
            BoundaryClass::RegionalIndicator,
            BoundaryClass::RegionalIndicator,
        );
        assert!(!break_here);
        assert!(next.regional_indicator);

        let (break_here2, next2) = oracle.classify_pair(
            next,
            BoundaryClass::RegionalIndicator,
            BoundaryClass::RegionalIndicator,
        );
        assert!(break_here2);
        assert!(!next2.regional_indicator);
    }

    #[test]
    fn emoji_modifier_requires_base_not_plain_pictographic() {
        let oracle = SegmentationOracle;
        let state = BreakState::default();
        let (break_base, _) = oracle.classify_pair(
            state,
            BoundaryClass::ExtendedPictographicBase,
            BoundaryClass::EmojiModifier,
        );
        assert!(!break_base);

        let (break_plain, _) = oracle.classify_pair(
            state,
            BoundaryClass::ExtendedPictographic,
            BoundaryClass::EmojiModifier,
        );
        assert!(break_plain);
    }

    #[test]
    fn gb11_zwj_emoji_sequence_requires_pictographic_state() {
        let oracle = SegmentationOracle;
        let entered = BreakState {
            extended_pictographic: true,
            regional_indicator: false,
        };
        let (break_here, _) =
            oracle.classify_pair(entered, BoundaryClass::Zwj, BoundaryClass::ExtendedPictographic);
        assert!(!break_here);

        let fresh = BreakState::default();
        let (break_without_state, _) =
            oracle.classify_pair(fresh, BoundaryClass::Zwj, BoundaryClass::ExtendedPictographic);
        assert!(break_without_state);
    }

    #[test]
    fn built_table_matches_oracle_for_every_combination() {
        let table = BreakTableBuilder::build();
        let oracle = SegmentationOracle;
        for &state in &ALL_STATES {
            for &c1 in &ALL_CLASSES {
                for &c2 in &ALL_CLASSES {
                    let (expected_break, expected_next) = oracle.classify_pair(state, c1, c2);
                    let key = break_key(state, c1, c2) as usize;
                    let cell = table[key];
                    assert_eq!(cell.break_here, expected_break, "break mismatch at {key}");
                    assert_eq!(cell.next, expected_next, "state mismatch at {key}");
                }
            }
        }
    }
}
