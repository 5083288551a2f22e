//! Runtime three-stage lookup (§4.2): three dependent indexed loads, no
//! branches, total over every `char`.
//!
//! Grounded on `other_examples` `pascalkuthe-grapheme-width-rs`'s generated
//! `TABLE_0`/`TABLE_1`/`TABLE_2` consumption pattern and
//! `axelf4-unicode-linebreak`'s `include!(concat!(env!("OUT_DIR"), ...))`
//! pattern — the same pattern the teacher's own `core-text::width::overrides`
//! module used for its generated override table.

use crate::record::{BoundaryClass, PropertyRecord};

include!(concat!(env!("OUT_DIR"), "/tables.rs"));

const BLOCK_SIZE: u32 = 256;

/// Looks up the compressed property record for a scalar value.
///
/// `char` already excludes surrogates and values above `U+10FFFF`, so every
/// input is in-domain: this function never panics and never falls back to a
/// default.
pub(crate) fn get(c: char) -> PropertyRecord {
    let cp = c as u32;
    let block = (cp / BLOCK_SIZE) as usize;
    let offset = STAGE1[block] as usize;
    let within_block = (cp % BLOCK_SIZE) as usize;
    let stage3_index = STAGE2[offset + within_block] as usize;

    PropertyRecord {
        width: STAGE3_WIDTH[stage3_index],
        boundary_class: BoundaryClass::from_tag(STAGE3_CLASS[stage3_index]),
    }
}
