//! Offline table-generation library for `term-unicode`.
//!
//! This crate is never a runtime dependency of `term-unicode` — it is
//! consumed as a `[build-dependencies]` entry by `term-unicode/build.rs` and
//! as a regular dependency by the standalone `term-unicode-gen` binary.
//! Nothing here is `no_std` or perf-sensitive; it runs once, offline,
//! either at compile time or when a developer explicitly regenerates the
//! tables.

pub mod breaktable;
pub mod builder;
pub mod emit;
pub mod error;
pub mod oracle;
pub mod record;

pub use breaktable::{BreakTableBuilder, SegmentationOracle};
pub use builder::{TableBuilder, Tables};
pub use emit::{Emitter, DEFAULT_UNICODE_VERSION};
pub use error::BuildError;
pub use oracle::{Oracle, RuleOracle};
pub use record::{BoundaryClass, BreakCell, BreakState, PropertyRecord};
