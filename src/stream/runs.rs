//! Run-length segmentation and grouping.
//!
//! A run is a maximal subsequence of consecutive identical bits. Segmenting a
//! transition stream into runs and coding the run lengths is the backbone of
//! every strategy the comparator evaluates: adjacent runs always differ in
//! value, so once the first run's value is known the value sequence carries
//! no further information and only the lengths need coding.

use crate::error::{Error, Result};
use bitvec::prelude::*;

/// A maximal run of identical bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    /// The repeated bit value.
    pub value: bool,
    /// Number of repetitions, always at least 1.
    pub length: u32,
}

/// Segment a bit stream into maximal runs, left to right.
///
/// The concatenation of each run's value repeated `length` times reproduces
/// the input exactly; the lengths sum to the input length.
pub fn segment_runs(stream: &BitSlice<u8, Msb0>) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut iter = stream.iter().by_vals();
    let Some(first) = iter.next() else {
        return runs;
    };
    let mut value = first;
    let mut length = 1u32;
    for bit in iter {
        if bit == value {
            length += 1;
        } else {
            runs.push(Run { value, length });
            value = bit;
            length = 1;
        }
    }
    runs.push(Run { value, length });
    runs
}

/// A lossless partition of a run sequence into fixed-size tuples of lengths
/// plus a trailing leftover.
///
/// Concatenating the tuple elements followed by the leftover lengths, in
/// order, reproduces the original run-length sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunGrouping {
    /// `floor(count / k)` tuples of `k` consecutive run lengths.
    pub tuples: Vec<Vec<u32>>,
    /// The `count mod k` trailing runs, values retained so each can be coded
    /// through its per-value table.
    pub leftover: Vec<Run>,
}

/// Partition `runs` into `k`-tuples of lengths plus leftover runs.
///
/// `k = 1` is the degenerate per-run case and never has a leftover.
pub fn group_runs(runs: &[Run], k: usize) -> Result<RunGrouping> {
    if k == 0 {
        return Err(Error::InvalidParameter(
            "group size must be at least 1".to_string(),
        ));
    }
    let grouped = runs.len() / k * k;
    let tuples = runs[..grouped]
        .chunks_exact(k)
        .map(|chunk| chunk.iter().map(|r| r.length).collect())
        .collect();
    Ok(RunGrouping {
        tuples,
        leftover: runs[grouped..].to_vec(),
    })
}

/// A lossless partition of a bit stream into fixed-size bit tuples plus
/// leftover bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitGrouping {
    pub tuples: Vec<Vec<bool>>,
    pub leftover: Vec<bool>,
}

/// Partition a bit stream into disjoint `k`-bit tuples plus leftover bits.
pub fn group_bits(stream: &BitSlice<u8, Msb0>, k: usize) -> Result<BitGrouping> {
    if k == 0 {
        return Err(Error::InvalidParameter(
            "group size must be at least 1".to_string(),
        ));
    }
    let bits: Vec<bool> = stream.iter().by_vals().collect();
    let grouped = bits.len() / k * k;
    let tuples = bits[..grouped]
        .chunks_exact(k)
        .map(|chunk| chunk.to_vec())
        .collect();
    Ok(BitGrouping {
        tuples,
        leftover: bits[grouped..].to_vec(),
    })
}

/// Summary statistics over a run sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunStats {
    /// Total number of runs.
    pub count: usize,
    /// Runs of set bits (alternation streaks).
    pub alternation_runs: usize,
    /// Runs of clear bits (repeat streaks).
    pub repeat_runs: usize,
    /// Mean run length, 0 for an empty sequence.
    pub mean_length: f64,
    /// Longest run, 0 for an empty sequence.
    pub max_length: u32,
}

/// Compute summary statistics for a run sequence.
pub fn run_stats(runs: &[Run]) -> RunStats {
    let count = runs.len();
    let alternation_runs = runs.iter().filter(|r| r.value).count();
    let total: u64 = runs.iter().map(|r| u64::from(r.length)).sum();
    RunStats {
        count,
        alternation_runs,
        repeat_runs: count - alternation_runs,
        mean_length: if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        },
        max_length: runs.iter().map(|r| r.length).max().unwrap_or(0),
    }
}
