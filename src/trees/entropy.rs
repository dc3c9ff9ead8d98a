//! Entropy and information gain
use crate::data::dataset::DatasetView;
use crate::error::{TreeError, TreeResult};
use tracing::{instrument, trace};

/// Binary Shannon entropy of a set of outcomes, in bits.
///
/// Returns `0.0` for a pure set. Callers never pass an empty slice; if they
/// do, the set counts as pure.
pub fn entropy(labels: &[bool]) -> f64 {
    let total = labels.len();
    let true_count = labels.iter().filter(|&&label| label).count();
    let false_count = total - true_count;
    if true_count == 0 || false_count == 0 {
        return 0.0;
    }

    let true_ratio = true_count as f64 / total as f64;
    let false_ratio = false_count as f64 / total as f64;

    -(true_ratio * true_ratio.log2() + false_ratio * false_ratio.log2())
}

/// Reduction in entropy obtained by partitioning `data` on `attribute`.
///
/// # Errors
///
/// Returns [`TreeError::InvalidInput`] if `data` is empty or `attribute` is
/// not part of the dataset.
pub fn information_gain(data: &DatasetView<'_>, attribute: &str) -> TreeResult<f64> {
    if data.is_empty() {
        return Err(TreeError::invalid("Cannot compute information gain of an empty dataset"));
    }

    let total = data.len() as f64;
    let remainder: f64 = data
        .partition(attribute)?
        .iter()
        .map(|(_, subset)| subset.len() as f64 / total * entropy(&subset.labels()))
        .sum();

    // Rounding can push a useless split a hair below zero.
    Ok((entropy(&data.labels()) - remainder).max(0.0))
}

/// Picks the candidate with the highest information gain.
///
/// Ties go to the candidate listed first.
///
/// # Errors
///
/// Returns [`TreeError::InvalidInput`] if `candidates` is empty or names an
/// attribute the dataset does not have.
#[instrument(level = "debug", skip(data), fields(rows = data.len()))]
pub fn find_best_attribute<'c>(
    data: &DatasetView<'_>,
    candidates: &'c [String],
) -> TreeResult<&'c str> {
    if candidates.is_empty() {
        return Err(TreeError::invalid("No candidate attributes to split on"));
    }

    let mut best: Option<(&'c str, f64)> = None;
    for candidate in candidates {
        let gain = information_gain(data, candidate)?;
        trace!(attribute = %candidate, gain, "Scored candidate");
        match best {
            Some((_, best_gain)) if gain <= best_gain => {}
            _ => best = Some((candidate.as_str(), gain)),
        }
    }

    best.map(|(attribute, _)| attribute)
        .ok_or_else(|| TreeError::invalid("No candidate attributes to split on"))
}
