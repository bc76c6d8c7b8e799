//! Compressibility analysis for binary outcome sequences.
//!
//! A truly random two-outcome stream cannot be compressed below one bit per
//! symbol, so measurable compressibility is evidence of bias. This crate
//! turns raw H/T text into a bit stream, derives the same/different
//! transition stream, segments it into runs, and evaluates several entropy
//! coding strategies against each other: per-run Huffman, Huffman over
//! k-tuples of run lengths, Golomb/unary run-length coding, and Huffman over
//! n-bit transition chunks. Comparing a candidate stream's savings against an
//! unbiased reference stream's, strategy by strategy, yields a bias-detection
//! signal.
//!
//! ```
//! use bitpress::{analyze, compare, extract_bits, AnalysisConfig};
//!
//! let config = AnalysisConfig::default();
//! let reference = analyze(&extract_bits("HTTHHTHT").unwrap(), &config).unwrap();
//! let candidate = analyze(&extract_bits("HTHTHTHT").unwrap(), &config).unwrap();
//! let comparison = compare(&reference, &candidate).unwrap();
//! assert_eq!(comparison.strategies.len(), reference.results.len());
//! ```

pub mod analysis;
pub mod coding;
pub mod error;
pub mod stream;

pub use analysis::{
    analyze, compare, AnalysisConfig, CompressionResult, Method, StrategyAdvantage,
    StreamAnalysis, StreamComparison,
};
pub use coding::{FrequencyModel, GolombCoder, HuffmanCode};
pub use error::{Error, Result};
pub use stream::{extract_bits, to_transitions, BitStream, Run};
