//! Per-codepoint value types (§3).
//!
//! Mirrors `term-unicode-tables::record` exactly (same discriminant
//! numbering — that numbering is the contract `table.rs` relies on to
//! decode the generated `STAGE3_CLASS` bytes). The two crates keep separate
//! copies rather than sharing one: `term-unicode-tables` is a build
//! dependency only, and `term-unicode` never depends on it at runtime.

/// One codepoint's compressed Unicode property payload: a display width in
/// terminal columns and a grapheme-cluster-boundary classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyRecord {
    pub width: u8,
    pub boundary_class: BoundaryClass,
}

/// Grapheme-cluster-boundary classification of a scalar value (§3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BoundaryClass {
    Invalid = 0,
    L = 1,
    V = 2,
    T = 3,
    Lv = 4,
    Lvt = 5,
    Prepend = 6,
    Extend = 7,
    Zwj = 8,
    SpacingMark = 9,
    RegionalIndicator = 10,
    ExtendedPictographic = 11,
    ExtendedPictographicBase = 12,
    EmojiModifier = 13,
}

impl BoundaryClass {
    /// Decodes a tag byte written by `term-unicode-tables::emit::Emitter`.
    /// The generated table is produced and consumed by code in this
    /// workspace, so an out-of-range tag is a generation bug, not
    /// recoverable caller input.
    pub(crate) fn from_tag(tag: u8) -> BoundaryClass {
        match tag {
            0 => BoundaryClass::Invalid,
            1 => BoundaryClass::L,
            2 => BoundaryClass::V,
            3 => BoundaryClass::T,
            4 => BoundaryClass::Lv,
            5 => BoundaryClass::Lvt,
            6 => BoundaryClass::Prepend,
            7 => BoundaryClass::Extend,
            8 => BoundaryClass::Zwj,
            9 => BoundaryClass::SpacingMark,
            10 => BoundaryClass::RegionalIndicator,
            11 => BoundaryClass::ExtendedPictographic,
            12 => BoundaryClass::ExtendedPictographicBase,
            13 => BoundaryClass::EmojiModifier,
            other => unreachable!("generated table contains unknown boundary class tag {other}"),
        }
    }

    pub(crate) fn to_tag(self) -> u8 {
        self as u8
    }
}

/// Caller-owned two-bit state threaded across successive
/// [`crate::grapheme_break`] calls. Externalized rather than hidden inside
/// the lookup function, since segmentation is inherently a left-to-right
/// scan over a stream the caller controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BreakState {
    pub extended_pictographic: bool,
    pub regional_indicator: bool,
}

impl BreakState {
    pub(crate) fn to_bits(self) -> u8 {
        (self.extended_pictographic as u8) | ((self.regional_indicator as u8) << 1)
    }

    pub(crate) fn from_bits(bits: u8) -> BreakState {
        BreakState {
            extended_pictographic: bits & 0b01 != 0,
            regional_indicator: bits & 0b10 != 0,
        }
    }
}

/// Encodes `(state, class1, class2)` into the 10-bit break-table key used by
/// both `term-unicode-tables`'s offline precomputation and this crate's
/// runtime lookup.
pub(crate) fn break_key(state: BreakState, class1: BoundaryClass, class2: BoundaryClass) -> u16 {
    let state_bits = state.to_bits() as u16;
    let c1 = class1.to_tag() as u16;
    let c2 = class2.to_tag() as u16;
    state_bits | (c1 << 2) | (c2 << 6)
}
