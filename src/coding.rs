//! Entropy-coding primitives.
//!
//! This module provides the coders the comparator ranks against each other:
//! - Minimal-redundancy prefix codes built from observed frequencies (Huffman)
//! - Golomb/unary codes for geometrically distributed run lengths
//! - Shannon entropy bounds for any frequency model

use crate::error::Error;

/// Result type for coding operations.
pub type Result<T> = std::result::Result<T, Error>;

pub mod entropy;
pub mod frequency;
pub mod golomb;
pub mod huffman;

pub use entropy::{shannon_entropy, theoretical_min_bits};
pub use frequency::FrequencyModel;
pub use golomb::GolombCoder;
pub use huffman::{CodeWord, HuffmanCode};
