//! Binary outcome streams and their derived forms.
//!
//! This module covers everything upstream of the entropy coders: turning raw
//! H/T text into a bit stream, deriving the same/different transition stream,
//! segmenting it into runs, and partitioning runs or bits into fixed-size
//! groups for tuple-based coding.

pub mod bits;
pub mod runs;

pub use bits::{
    alternation_rate, extract_bits, generate_biased, generate_with_alternations, to_transitions,
    BitStream,
};
pub use runs::{
    group_bits, group_runs, run_stats, segment_runs, BitGrouping, Run, RunGrouping, RunStats,
};
