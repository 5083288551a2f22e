//! Serializes the compressed tables as Rust source text (§4.5).
//!
//! Grounded on `other_examples` `axelf4-unicode-linebreak build.rs`'s plain
//! `BufWriter`/`write!`/`writeln!` emission: no `quote!`/`proc_macro2`
//! templating, since `term-unicode-tables` is a build-dependency and its own
//! transitive weight matters to every consumer's build time. The generated
//! file declares four flat arrays (stage1/stage2, two parallel stage3
//! columns, and the packed break table) with explicit lengths; nothing in
//! it names `PropertyRecord` or `BoundaryClass`, so the consumer is free to
//! decode the raw integers into its own types.

use std::io::{self, Write};

use crate::builder::Tables;
use crate::record::{BreakCell, BREAK_TABLE_LEN};

/// Default Unicode property-oracle revision tag, used when a caller doesn't
/// pin one explicitly.
pub const DEFAULT_UNICODE_VERSION: &str = "15.1.0";

pub struct Emitter;

impl Emitter {
    /// Writes `STAGE1`, `STAGE2`, `STAGE3_WIDTH`, `STAGE3_CLASS`, and
    /// `BREAK_TABLE` as `pub static` array items to `out`, with
    /// `unicode_version` stamped into the header comment (§3.1
    /// `GeneratorConfig`).
    pub fn emit(
        out: &mut impl Write,
        tables: &Tables,
        break_table: &[BreakCell; BREAK_TABLE_LEN],
        unicode_version: &str,
    ) -> io::Result<()> {
        writeln!(
            out,
            "// @generated by term-unicode-tables. Do not edit by hand."
        )?;
        writeln!(out, "// Unicode property oracle revision: {unicode_version}")?;
        writeln!(out)?;

        write_u16_array(out, "STAGE1", &tables.stage1)?;
        write_u16_array(out, "STAGE2", &tables.stage2)?;

        let widths: Vec<u8> = tables.stage3.iter().map(|r| r.width).collect();
        let classes: Vec<u8> = tables
            .stage3
            .iter()
            .map(|r| r.boundary_class.to_tag())
            .collect();
        write_u8_array(out, "STAGE3_WIDTH", &widths)?;
        write_u8_array(out, "STAGE3_CLASS", &classes)?;

        let break_bits: Vec<u8> = break_table.iter().map(|cell| cell.to_bits()).collect();
        write_u8_array(out, "BREAK_TABLE", &break_bits)?;

        Ok(())
    }
}

fn write_u16_array(out: &mut impl Write, name: &str, values: &[u16]) -> io::Result<()> {
    writeln!(out, "pub static {name}: [u16; {}] = [", values.len())?;
    for chunk in values.chunks(16) {
        let line = chunk
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "    {line},")?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;
    Ok(())
}

fn write_u8_array(out: &mut impl Write, name: &str, values: &[u8]) -> io::Result<()> {
    writeln!(out, "pub static {name}: [u8; {}] = [", values.len())?;
    for chunk in values.chunks(16) {
        let line = chunk
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "    {line},")?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breaktable::BreakTableBuilder;
    use crate::builder::TableBuilder;
    use crate::oracle::RuleOracle;

    #[test]
    fn emits_well_formed_rust_source() {
        let tables = TableBuilder::build(&RuleOracle).unwrap();
        let break_table = BreakTableBuilder::build();
        let mut buf = Vec::new();
        Emitter::emit(&mut buf, &tables, &break_table, DEFAULT_UNICODE_VERSION).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Unicode property oracle revision: 15.1.0"));
        assert!(text.contains("pub static STAGE1"));
        assert!(text.contains("pub static STAGE2"));
        assert!(text.contains("pub static STAGE3_WIDTH"));
        assert!(text.contains("pub static STAGE3_CLASS"));
        assert!(text.contains("pub static BREAK_TABLE: [u8; 1024]"));
    }
}
