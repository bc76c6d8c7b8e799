//! Golomb/unary coding of positive run lengths.
//!
//! A run length l >= 1 splits into q = (l-1) div m and r = (l-1) mod m. The
//! codeword is q ones, a terminating zero, then r in ceil(log2 m) fixed-width
//! bits. The code is length-optimal when run lengths follow a geometric
//! distribution whose parameter matches m, which is exactly the distribution
//! runs of an unbiased transition stream follow.

use crate::coding::huffman::CodeWord;
use crate::coding::Result;
use crate::error::Error;
use bitvec::prelude::*;

/// A Golomb coder with divisor `m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GolombCoder {
    m: u32,
    remainder_bits: u32,
}

/// Bits needed for a remainder in `0..m`, i.e. ceil(log2 m). Zero when m = 1:
/// the remainder is always 0 and is not transmitted.
fn remainder_bits_for(m: u32) -> u32 {
    if m > 1 {
        32 - (m - 1).leading_zeros()
    } else {
        0
    }
}

impl GolombCoder {
    /// Create a coder with divisor `m >= 1`.
    pub fn new(m: u32) -> Result<Self> {
        if m == 0 {
            return Err(Error::InvalidParameter(
                "Golomb divisor must be at least 1".to_string(),
            ));
        }
        Ok(GolombCoder {
            m,
            remainder_bits: remainder_bits_for(m),
        })
    }

    /// Pick the divisor best matched to an observed mean run length.
    ///
    /// Treats run lengths as geometric with success probability 1/mean, for
    /// which the optimal divisor is ceil(-ln 2 / ln(1 - 1/mean)). Means at or
    /// below 1 collapse to m = 1. The choice is made once from the reported
    /// mean; nothing adapts during coding.
    pub fn for_mean_run_length(mean: f64) -> Self {
        let m = if mean.is_finite() && mean > 1.0 {
            let p = 1.0 / mean;
            let m = (-std::f64::consts::LN_2 / (1.0 - p).ln()).ceil();
            if m >= 1.0 && m <= u32::MAX as f64 {
                m as u32
            } else {
                1
            }
        } else {
            1
        };
        GolombCoder {
            m,
            remainder_bits: remainder_bits_for(m),
        }
    }

    /// The divisor this coder was built with.
    pub fn divisor(&self) -> u32 {
        self.m
    }

    /// Codeword length in bits for run length `length >= 1`, without
    /// materializing the bits.
    pub fn encoded_len(&self, length: u32) -> Result<usize> {
        if length == 0 {
            return Err(Error::InvalidParameter(
                "run length must be at least 1".to_string(),
            ));
        }
        let q = (length - 1) / self.m;
        Ok(q as usize + 1 + self.remainder_bits as usize)
    }

    /// Encode one run length.
    pub fn encode(&self, length: u32) -> Result<CodeWord> {
        let mut out = CodeWord::new();
        self.encode_into(length, &mut out)?;
        Ok(out)
    }

    /// Append the codeword for `length` to `out`.
    pub fn encode_into(&self, length: u32, out: &mut CodeWord) -> Result<()> {
        if length == 0 {
            return Err(Error::InvalidParameter(
                "run length must be at least 1".to_string(),
            ));
        }
        let q = (length - 1) / self.m;
        let r = (length - 1) % self.m;
        for _ in 0..q {
            out.push(true);
        }
        out.push(false);
        for shift in (0..self.remainder_bits).rev() {
            out.push(r >> shift & 1 == 1);
        }
        Ok(())
    }

    /// Decode a stream of concatenated codewords back into run lengths.
    ///
    /// Returns `Error::MalformedStream` if the stream ends inside a quotient
    /// or remainder.
    pub fn decode(&self, bits: &BitSlice<u8, Msb0>) -> Result<Vec<u32>> {
        let mut lengths = Vec::new();
        let mut pos = 0;
        while pos < bits.len() {
            let mut q: u32 = 0;
            loop {
                if pos >= bits.len() {
                    return Err(Error::MalformedStream(
                        "stream ended inside a unary quotient".to_string(),
                    ));
                }
                if bits[pos] {
                    q += 1;
                    pos += 1;
                } else {
                    pos += 1;
                    break;
                }
            }
            let mut r: u32 = 0;
            for _ in 0..self.remainder_bits {
                if pos >= bits.len() {
                    return Err(Error::MalformedStream(
                        "stream ended inside a fixed-width remainder".to_string(),
                    ));
                }
                r = r << 1 | u32::from(bits[pos]);
                pos += 1;
            }
            lengths.push(q * self.m + r + 1);
        }
        Ok(lengths)
    }
}
