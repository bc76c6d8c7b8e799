//! Shannon entropy bounds for frequency models.

use crate::coding::frequency::FrequencyModel;
use crate::coding::Result;
use crate::error::Error;

/// Shannon entropy in bits per symbol: H = -sum p_i * log2(p_i).
///
/// Counts in a well-formed model are strictly positive, so no log-of-zero
/// term arises; a model with a single symbol has entropy 0. Returns
/// `Error::EmptyInput` for an empty model, which is distinct from the
/// zero-entropy case.
pub fn shannon_entropy<S: Ord>(model: &FrequencyModel<S>) -> Result<f64> {
    if model.is_empty() {
        return Err(Error::EmptyInput(
            "entropy of an empty frequency model is undefined".to_string(),
        ));
    }
    let total = model.total() as f64;
    let h: f64 = model
        .iter()
        .map(|(_, count)| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();
    // A one-symbol model yields -1 * log2(1) = -0.0.
    Ok(h.max(0.0))
}

/// Theoretical minimum bits for the whole stream: H times the symbol count.
///
/// Reported alongside the constructed code's actual cost, never in place of
/// it; a Huffman code over a non-power-of-two distribution cannot always
/// reach this bound.
pub fn theoretical_min_bits<S: Ord>(model: &FrequencyModel<S>) -> Result<f64> {
    Ok(shannon_entropy(model)? * model.total() as f64)
}
