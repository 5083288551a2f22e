//! Standalone table-generation CLI (§6): "emits the artifact to standard
//! output; exit status zero on success, non-zero on overflow or oracle
//! failure."
//!
//! Grounded on the teacher's `crates/ox-bin/src/main.rs` (`clap::Parser`
//! args struct, `anyhow::Result` return from `main`, `tracing_subscriber`
//! `EnvFilter::from_default_env()` logging bootstrap) and `other_examples`
//! `pascalkuthe-grapheme-width-rs`'s `xtask gen-tables` entrypoint, which
//! this binary plays the same role as.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use term_unicode_tables::{
    BreakTableBuilder, Emitter, RuleOracle, TableBuilder, DEFAULT_UNICODE_VERSION,
};

/// Regenerate the compressed Unicode property and grapheme-break tables.
#[derive(Debug, Parser)]
#[command(name = "term-unicode-gen", version)]
struct Args {
    /// Write the generated Rust source here instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Unicode property-oracle revision tag stamped into the generated
    /// artifact's header comment.
    #[arg(long, default_value = DEFAULT_UNICODE_VERSION)]
    unicode_version: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
        .ok();

    let args = Args::parse();

    info!("building three-stage property table");
    let tables = TableBuilder::build(&RuleOracle).context("table generation failed")?;
    info!("precomputing grapheme-break table");
    let break_table = BreakTableBuilder::build();

    match args.output {
        Some(path) => {
            let mut writer = BufWriter::new(
                File::create(&path).with_context(|| format!("creating {}", path.display()))?,
            );
            Emitter::emit(&mut writer, &tables, &break_table, &args.unicode_version)?;
            writer.flush()?;
            info!(path = %path.display(), "wrote generated tables");
        }
        None => {
            let mut writer = BufWriter::new(io::stdout().lock());
            Emitter::emit(&mut writer, &tables, &break_table, &args.unicode_version)?;
            writer.flush()?;
        }
    }

    Ok(())
}
