use thiserror::Error;

/// Failure modes of offline table generation (§7).
#[derive(Debug, Error)]
pub enum BuildError {
    /// A 256-entry stage3 block could not be packed: more distinct records
    /// fell into one block than fit a `u16` stage3 index.
    #[error("stage3 block at codepoint range starting {block_start:#x} overflowed: {len} distinct records, max {max}")]
    BlockTooLarge {
        block_start: u32,
        len: usize,
        max: usize,
    },

    /// The deduplicated stage2 table grew past what a `u16` stage1 offset
    /// can index.
    #[error("stage2 table overflowed: {len} entries, max {max}")]
    Stage2TooLarge { len: usize, max: usize },

    /// The oracle refused to classify a codepoint it was asked about.
    #[error("oracle failed to classify codepoint {cp:#x}: {reason}")]
    OracleFailure { cp: u32, reason: String },
}
