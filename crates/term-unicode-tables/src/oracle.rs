//! Classification capability (§4.6) used only at build time.
//!
//! `RuleOracle` classifies boundary classes with hand-written range
//! predicates in the style of the teacher's `core-text::width` helpers
//! (`is_extended_pictographic`, `is_skin_tone_modifier`,
//! `is_regional_indicator`, `is_combining_mark`), retargeted from "classify
//! a whole grapheme cluster" to "classify one scalar value's
//! `PropertyRecord`". Display width is not hand-rolled: it calls through to
//! `unicode_width::UnicodeWidthChar`, the same crate the teacher's
//! `width.rs` itself uses for width, since the teacher's own
//! "don't depend on large Unicode property crates" rule is about
//! grapheme/property crates, not width.

use crate::error::BuildError;
use crate::record::{BoundaryClass, PropertyRecord};

/// Build-time classification of one codepoint, and the equality notion the
/// table compressor uses to merge codepoints into the same stage3 entry.
pub trait Oracle {
    fn classify(&self, cp: u32) -> Result<PropertyRecord, BuildError>;

    /// Whether two records may share a stage3 slot. Structural equality by
    /// default; an oracle with additional build-time metadata not present on
    /// `PropertyRecord` itself could override this to be stricter.
    fn equal(&self, a: &PropertyRecord, b: &PropertyRecord) -> bool {
        a == b
    }
}

/// Default oracle: hand-written range predicates for boundary classes,
/// `unicode_width` for display width.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleOracle;

impl Oracle for RuleOracle {
    fn classify(&self, cp: u32) -> Result<PropertyRecord, BuildError> {
        if cp > 0x10FFFF {
            return Err(BuildError::OracleFailure {
                cp,
                reason: "codepoint exceeds U+10FFFF".to_string(),
            });
        }
        if is_surrogate(cp) {
            return Ok(PropertyRecord::INVALID);
        }

        let boundary_class = classify_boundary(cp);
        let width = classify_width(cp, boundary_class);
        Ok(PropertyRecord {
            width,
            boundary_class,
        })
    }
}

fn is_surrogate(cp: u32) -> bool {
    (0xD800..=0xDFFF).contains(&cp)
}

/// Hangul syllable decomposition, per the standard algebraic formula rather
/// than a tabulated range list: `L`/`V`/`T` leading/vowel/trailing jamo, and
/// precomposed `LV`/`LVT` syllables.
fn classify_hangul(cp: u32) -> Option<BoundaryClass> {
    const L_BASE: u32 = 0x1100;
    const L_COUNT: u32 = 19;
    const V_BASE: u32 = 0x1161;
    const V_COUNT: u32 = 21;
    const T_BASE: u32 = 0x11A7;
    const T_COUNT: u32 = 28;
    const S_BASE: u32 = 0xAC00;
    const S_COUNT: u32 = 19 * 21 * 28;

    if (L_BASE..L_BASE + L_COUNT).contains(&cp) {
        return Some(BoundaryClass::L);
    }
    if (V_BASE..V_BASE + V_COUNT).contains(&cp) {
        return Some(BoundaryClass::V);
    }
    if (T_BASE + 1..T_BASE + T_COUNT).contains(&cp) {
        return Some(BoundaryClass::T);
    }
    if (S_BASE..S_BASE + S_COUNT).contains(&cp) {
        let s_index = cp - S_BASE;
        return Some(if s_index % T_COUNT == 0 {
            BoundaryClass::Lv
        } else {
            BoundaryClass::Lvt
        });
    }
    None
}

fn is_regional_indicator(cp: u32) -> bool {
    (0x1F1E6..=0x1F1FF).contains(&cp)
}

fn is_zwj(cp: u32) -> bool {
    cp == 0x200D
}

fn is_prepend(cp: u32) -> bool {
    matches!(cp, 0x0600..=0x0605 | 0x06DD | 0x070F | 0x0890..=0x0891 | 0x08E2 | 0x110BD | 0x110CD)
}

fn is_spacing_mark(cp: u32) -> bool {
    matches!(
        cp,
        0x0903 | 0x093B | 0x093E..=0x0940 | 0x0949..=0x094C | 0x094E..=0x094F
            | 0x0982..=0x0983 | 0x09BF..=0x09C0 | 0x09C7..=0x09C8 | 0x09CB..=0x09CC
            | 0x0A03 | 0x0A3E..=0x0A40 | 0x0A83 | 0x0ABE..=0x0AC0 | 0x0AC9 | 0x0ACB..=0x0ACC
            | 0x0B02..=0x0B03 | 0x0B40 | 0x0B47..=0x0B48 | 0x0B4B..=0x0B4C | 0x0BBE..=0x0BBF
            | 0x0BC1..=0x0BC2 | 0x0BC6..=0x0BC8 | 0x0BCA..=0x0BCC | 0x0C01..=0x0C03
            | 0x0C41..=0x0C44 | 0x0C82..=0x0C83 | 0x0CBE | 0x0CC0..=0x0CC4 | 0x0CC7..=0x0CC8
            | 0x0CCA..=0x0CCB | 0x0D02..=0x0D03 | 0x0D3E..=0x0D40 | 0x0D46..=0x0D48
            | 0x0D4A..=0x0D4C | 0x0D82..=0x0D83 | 0x0DD0..=0x0DD1 | 0x0DD8..=0x0DDE
            | 0x0DF2..=0x0DF3 | 0x0E33 | 0x0EB3 | 0x0F3E..=0x0F3F | 0x0F7F | 0x102B..=0x102C
            | 0x1031 | 0x1038 | 0x103B..=0x103C | 0x1056..=0x1057 | 0x1062..=0x1064
            | 0x1067..=0x106D | 0x1083 | 0x1087..=0x108C | 0x108F | 0x109A..=0x109C
            | 0x1715 | 0x1734 | 0x17B6 | 0x17BE..=0x17C5 | 0x17C7..=0x17C8 | 0x1923..=0x1926
            | 0x1929..=0x192B | 0x1930..=0x1931 | 0x1933..=0x1938 | 0x1A19..=0x1A1A
            | 0x1A55 | 0x1A57 | 0x1A6D..=0x1A72 | 0x1B04 | 0x1B3B | 0x1B3D..=0x1B41
            | 0x1B43..=0x1B44 | 0x1B82 | 0x1BA1 | 0x1BA6..=0x1BA7 | 0x1BAA | 0x1BE7
            | 0x1BEA..=0x1BEC | 0x1BEE | 0x1BF2..=0x1BF3 | 0x1C24..=0x1C2B | 0x1C34..=0x1C35
            | 0xA823..=0xA824 | 0xA827 | 0xA880..=0xA881 | 0xA8B4..=0xA8C3 | 0xA952..=0xA953
            | 0xA983 | 0xA9B4..=0xA9B5 | 0xA9BA..=0xA9BB | 0xA9BE..=0xA9C0 | 0xAA2F..=0xAA30
            | 0xAA33..=0xAA34 | 0xAA4D | 0xAAEB | 0xAAEE..=0xAAEF | 0xAAF5 | 0xABE3..=0xABE4
            | 0xABE6..=0xABE7 | 0xABE9..=0xABEA | 0xABEC | 0x11000 | 0x11002 | 0x11082
            | 0x110B0..=0x110B2 | 0x110B7..=0x110B8 | 0x1112C | 0x11182 | 0x111B3..=0x111B5
            | 0x111BF..=0x111C0 | 0x1122C..=0x1122E | 0x11232..=0x11233 | 0x11235
            | 0x112E0..=0x112E2 | 0x11302..=0x11303 | 0x1133F | 0x11341..=0x11344
            | 0x11347..=0x11348 | 0x1134B..=0x1134D | 0x11362..=0x11363 | 0x11435..=0x11437
            | 0x11440..=0x11441 | 0x11445 | 0x114B0..=0x114B2 | 0x114B9 | 0x114BB..=0x114BE
            | 0x114C1 | 0x115AF..=0x115B1 | 0x115B8..=0x115BB | 0x115BE | 0x11630..=0x11632
            | 0x1163B..=0x1163C | 0x1163E | 0x116AC | 0x116AE..=0x116AF | 0x116B6
            | 0x11720..=0x11721 | 0x11726 | 0x1182C..=0x1182E | 0x11838 | 0x11935
            | 0x11937..=0x11938 | 0x1193D | 0x11940 | 0x11942 | 0x119D1..=0x119D3
            | 0x119DC..=0x119DF | 0x119E4 | 0x11A39 | 0x11A57..=0x11A58 | 0x11A97
            | 0x11C2F | 0x11C3E | 0x11CA9 | 0x11CB1 | 0x11CB4 | 0x11D8A..=0x11D8E
            | 0x11D93..=0x11D94 | 0x11D96 | 0x11EF5..=0x11EF6 | 0x16F51..=0x16F87
            | 0x16FF0..=0x16FF1 | 0x1D165..=0x1D166 | 0x1D16D..=0x1D172
    )
}

fn is_combining_extend(cp: u32) -> bool {
    matches!(cp,
        0x0300..=0x036F | 0x0483..=0x0489 | 0x0591..=0x05BD | 0x05BF | 0x05C1..=0x05C2
            | 0x05C4..=0x05C5 | 0x05C7 | 0x0610..=0x061A | 0x064B..=0x065F | 0x0670
            | 0x06D6..=0x06DC | 0x06DF..=0x06E4 | 0x06E7..=0x06E8 | 0x06EA..=0x06ED
            | 0x0711 | 0x0730..=0x074A | 0x07A6..=0x07B0 | 0x07EB..=0x07F3 | 0x0816..=0x0819
            | 0x081B..=0x0823 | 0x0825..=0x0827 | 0x0829..=0x082D | 0x0859..=0x085B
            | 0x0898..=0x089F | 0x08CA..=0x08E1 | 0x08E3..=0x0902 | 0x093A | 0x093C
            | 0x0941..=0x0948 | 0x094D | 0x0951..=0x0957 | 0x0962..=0x0963
            | 0x200C | 0xFE00..=0xFE0F | 0xFE20..=0xFE2F | 0x101FD | 0x1D167..=0x1D169
            | 0x1D17B..=0x1D182 | 0x1D185..=0x1D18B | 0x1D1AA..=0x1D1AD | 0xE0020..=0xE007F
            | 0xE0100..=0xE01EF
    )
}

fn is_extended_pictographic(cp: u32) -> bool {
    matches!(cp,
        0x00A9 | 0x00AE | 0x203C | 0x2049 | 0x2122 | 0x2139 | 0x2194..=0x21AA
            | 0x231A..=0x231B | 0x2328 | 0x23CF | 0x23E9..=0x23FA | 0x24C2 | 0x25AA..=0x25FE
            | 0x2600..=0x27BF | 0x2934..=0x2935 | 0x2B05..=0x2BFF | 0x3030 | 0x303D
            | 0x3297 | 0x3299 | 0x1F000..=0x1F0FF | 0x1F100..=0x1F1FF | 0x1F200..=0x1FFFD
    )
}

fn is_extended_pictographic_base(cp: u32) -> bool {
    matches!(cp,
        0x261D | 0x26F9 | 0x270A..=0x270D | 0x1F385 | 0x1F3C2..=0x1F3C4 | 0x1F3C7
            | 0x1F3CA..=0x1F3CC | 0x1F442..=0x1F443 | 0x1F446..=0x1F450 | 0x1F466..=0x1F478
            | 0x1F47C | 0x1F481..=0x1F483 | 0x1F485..=0x1F487 | 0x1F48F | 0x1F491
            | 0x1F4AA | 0x1F574..=0x1F575 | 0x1F57A | 0x1F590 | 0x1F595..=0x1F596
            | 0x1F645..=0x1F647 | 0x1F64B..=0x1F64F | 0x1F6A3 | 0x1F6B4..=0x1F6B6
            | 0x1F6C0 | 0x1F6CC | 0x1F90C | 0x1F90F | 0x1F918..=0x1F91F | 0x1F926
            | 0x1F930..=0x1F939 | 0x1F93C..=0x1F93E | 0x1F977..=0x1F978 | 0x1F9B5..=0x1F9B6
            | 0x1F9B8..=0x1F9B9 | 0x1F9BB | 0x1F9CD..=0x1F9CF | 0x1F9D1..=0x1F9DD
    )
}

fn is_emoji_modifier(cp: u32) -> bool {
    (0x1F3FB..=0x1F3FF).contains(&cp)
}

fn classify_boundary(cp: u32) -> BoundaryClass {
    if let Some(hangul) = classify_hangul(cp) {
        return hangul;
    }
    if is_zwj(cp) {
        return BoundaryClass::Zwj;
    }
    if is_regional_indicator(cp) {
        return BoundaryClass::RegionalIndicator;
    }
    if is_emoji_modifier(cp) {
        return BoundaryClass::EmojiModifier;
    }
    if is_extended_pictographic_base(cp) {
        return BoundaryClass::ExtendedPictographicBase;
    }
    if is_extended_pictographic(cp) {
        return BoundaryClass::ExtendedPictographic;
    }
    if is_prepend(cp) {
        return BoundaryClass::Prepend;
    }
    if is_spacing_mark(cp) {
        return BoundaryClass::SpacingMark;
    }
    if is_combining_extend(cp) {
        return BoundaryClass::Extend;
    }
    BoundaryClass::Invalid
}

/// Display width via `unicode_width`, the same crate the teacher's
/// `core-text::width` classifier calls through to
/// (`unicode_width::UnicodeWidthChar::width`) — the teacher's own comment
/// there is explicit that avoiding large Unicode property crates is about
/// grapheme/property crates, not display width, and this is a build-time
/// oracle with no runtime perf reason to hand-roll it.
fn classify_width(cp: u32, boundary_class: BoundaryClass) -> u8 {
    if matches!(boundary_class, BoundaryClass::Extend | BoundaryClass::Zwj) {
        return 0;
    }
    let Some(c) = char::from_u32(cp) else {
        return 0;
    };
    match unicode_width::UnicodeWidthChar::width(c) {
        Some(w) if w >= 2 => 2,
        Some(_) => 1,
        None => 0,
    }
}
