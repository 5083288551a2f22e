//! Drives `term-unicode-tables` once at compile time and writes the
//! generated arrays to `OUT_DIR`, consumed by `src/table.rs` and
//! `src/segmentation.rs` via `include!`.
//!
//! Grounded end to end on `other_examples` `axelf4-unicode-linebreak
//! build.rs`: the build-dependency does the heavy lifting, this file is a
//! thin driver that writes one file to `OUT_DIR`.

use std::env;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use term_unicode_tables::{
    BreakTableBuilder, Emitter, RuleOracle, TableBuilder, DEFAULT_UNICODE_VERSION,
};

fn main() {
    println!("cargo::rerun-if-changed=build.rs");

    let tables = TableBuilder::build(&RuleOracle).unwrap_or_else(|err| {
        panic!("term-unicode table generation failed: {err}");
    });
    let break_table = BreakTableBuilder::build();

    let out_dir = env::var_os("OUT_DIR").expect("OUT_DIR not set by cargo");
    let dest = Path::new(&out_dir).join("tables.rs");
    let mut writer = BufWriter::new(File::create(&dest).expect("failed to create tables.rs"));
    Emitter::emit(&mut writer, &tables, &break_table, DEFAULT_UNICODE_VERSION)
        .expect("failed to write tables.rs");
}
