//! Huffman coding over arbitrary ordered symbol types.
//!
//! The tree is built by repeatedly merging the two lowest-frequency nodes
//! from a priority queue until one root remains. Ties are broken by node
//! creation order, and leaves are created in symbol order, so identical input
//! always produces an identical code table.
//!
//! Nodes live in an arena indexed by position rather than as linked boxes:
//! child links are plain indices, and code extraction is an explicit stack
//! walk, so deeply skewed trees cannot overflow the call stack.

use crate::coding::frequency::FrequencyModel;
use crate::coding::Result;
use crate::error::Error;
use bitvec::prelude::*;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, BTreeMap};
use std::fmt;

/// A single prefix-free codeword.
pub type CodeWord = BitVec<u8, Msb0>;

#[derive(Debug, Clone)]
struct Node<S> {
    freq: u64,
    symbol: Option<S>,
    left: Option<usize>,
    right: Option<usize>,
}

/// A minimal-redundancy prefix code built from a frequency model.
///
/// The code table is complete over the model's alphabet and satisfies the
/// prefix property: no codeword is a prefix of another.
#[derive(Debug, Clone)]
pub struct HuffmanCode<S: Ord> {
    arena: Vec<Node<S>>,
    root: usize,
    table: BTreeMap<S, CodeWord>,
}

impl<S: Ord + Clone + fmt::Debug> HuffmanCode<S> {
    /// Build a code from a frequency model.
    ///
    /// A model with a single distinct symbol gets the 1-bit code `0`; a tree
    /// cannot be built from one leaf. Returns `Error::EmptyAlphabet` for a
    /// model with no symbols at all.
    pub fn build(model: &FrequencyModel<S>) -> Result<Self> {
        if model.is_empty() {
            return Err(Error::EmptyAlphabet(
                "cannot build a code from an empty frequency model".to_string(),
            ));
        }

        let mut arena: Vec<Node<S>> = Vec::with_capacity(2 * model.distinct());
        let mut heap: BinaryHeap<Reverse<(u64, usize)>> = BinaryHeap::new();
        for (symbol, freq) in model.iter() {
            let idx = arena.len();
            arena.push(Node {
                freq,
                symbol: Some(symbol.clone()),
                left: None,
                right: None,
            });
            heap.push(Reverse((freq, idx)));
        }

        while heap.len() > 1 {
            let Reverse((_, left)) = heap.pop().unwrap();
            let Reverse((_, right)) = heap.pop().unwrap();
            let freq = arena[left].freq + arena[right].freq;
            let idx = arena.len();
            arena.push(Node {
                freq,
                symbol: None,
                left: Some(left),
                right: Some(right),
            });
            heap.push(Reverse((freq, idx)));
        }
        let Reverse((_, root)) = heap.pop().unwrap();

        let table = extract_table(&arena, root);
        Ok(HuffmanCode { arena, root, table })
    }

    /// The codeword for `symbol`, if it is in the alphabet.
    pub fn code(&self, symbol: &S) -> Option<&BitSlice<u8, Msb0>> {
        self.table.get(symbol).map(|c| c.as_bitslice())
    }

    /// Length in bits of the codeword for `symbol`.
    pub fn code_len(&self, symbol: &S) -> Result<usize> {
        self.table
            .get(symbol)
            .map(|c| c.len())
            .ok_or_else(|| Error::UnknownSymbol(format!("{symbol:?} is not in the trained alphabet")))
    }

    /// Number of distinct symbols in the code table.
    pub fn distinct(&self) -> usize {
        self.table.len()
    }

    /// The full symbol-to-codeword table, ordered by symbol.
    pub fn table(&self) -> &BTreeMap<S, CodeWord> {
        &self.table
    }

    /// Encode a symbol sequence by concatenating codewords in input order.
    pub fn encode(&self, symbols: &[S]) -> Result<CodeWord> {
        let mut out = CodeWord::new();
        for symbol in symbols {
            let code = self.table.get(symbol).ok_or_else(|| {
                Error::UnknownSymbol(format!("{symbol:?} is not in the trained alphabet"))
            })?;
            out.extend_from_bitslice(code);
        }
        Ok(out)
    }

    /// Decode a bit stream back into the original symbol sequence.
    ///
    /// Walks the tree bit by bit, emitting a symbol and resetting to the root
    /// at every leaf. Returns `Error::MalformedStream` if the stream ends in
    /// the middle of a codeword.
    pub fn decode(&self, bits: &BitSlice<u8, Msb0>) -> Result<Vec<S>> {
        // Single-leaf root: every occurrence is the 1-bit code 0.
        if let Some(symbol) = &self.arena[self.root].symbol {
            if bits.count_ones() > 0 {
                return Err(Error::MalformedStream(
                    "single-symbol alphabet admits only the codeword 0".to_string(),
                ));
            }
            return Ok(vec![symbol.clone(); bits.len()]);
        }

        let mut out = Vec::new();
        let mut current = self.root;
        for bit in bits.iter().by_vals() {
            let node = &self.arena[current];
            let next = if bit { node.right } else { node.left };
            let Some(next) = next else {
                return Err(Error::MalformedStream(
                    "walked off the code tree".to_string(),
                ));
            };
            current = next;
            if let Some(symbol) = &self.arena[current].symbol {
                out.push(symbol.clone());
                current = self.root;
            }
        }
        if current != self.root {
            return Err(Error::MalformedStream(
                "trailing bits do not complete a codeword".to_string(),
            ));
        }
        Ok(out)
    }
}

/// Walk the arena from `root` with an explicit stack, accumulating the 0/1
/// path to each leaf.
fn extract_table<S: Ord + Clone>(arena: &[Node<S>], root: usize) -> BTreeMap<S, CodeWord> {
    let mut table = BTreeMap::new();
    let mut stack: Vec<(usize, CodeWord)> = vec![(root, CodeWord::new())];
    while let Some((idx, prefix)) = stack.pop() {
        let node = &arena[idx];
        match (&node.symbol, node.left, node.right) {
            (Some(symbol), _, _) => {
                // A lone leaf at the root has an empty path; give it code 0.
                let code = if prefix.is_empty() {
                    bitvec![u8, Msb0; 0]
                } else {
                    prefix
                };
                table.insert(symbol.clone(), code);
            }
            (None, Some(left), Some(right)) => {
                let mut right_prefix = prefix.clone();
                right_prefix.push(true);
                stack.push((right, right_prefix));
                let mut left_prefix = prefix;
                left_prefix.push(false);
                stack.push((left, left_prefix));
            }
            _ => {}
        }
    }
    table
}
