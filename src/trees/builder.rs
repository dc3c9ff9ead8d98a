//! ID3 tree induction
use super::{entropy::find_best_attribute, node::DecisionTree, params::TreeParams};
use crate::data::dataset::{find_duplicate, Dataset, DatasetView};
use crate::error::{TreeError, TreeResult};
use rayon::prelude::*;
use tracing::{debug, instrument, trace};

/// Builds an ID3 decision tree over `candidates`.
///
/// # Errors
///
/// Returns [`TreeError::InvalidInput`] if `data` is empty, or if
/// `candidates` repeats a name or names an attribute `data` does not have.
pub fn build_tree(data: &Dataset, candidates: &[String]) -> TreeResult<DecisionTree> {
    build_tree_with_params(data, candidates, &TreeParams::default())
}

/// Same as [`build_tree`]; `params` only decides whether sibling subtrees are
/// built in parallel, which never changes the result.
#[instrument(level = "debug", skip(data, params), fields(rows = data.len()))]
pub fn build_tree_with_params(
    data: &Dataset,
    candidates: &[String],
    params: &TreeParams,
) -> TreeResult<DecisionTree> {
    validate(data, candidates)?;

    let tree = grow(data.view(), candidates, params)?;
    debug!(
        nodes = tree.node_count(),
        leaves = tree.leaf_count(),
        depth = tree.depth(),
        "Finished building the tree."
    );
    Ok(tree)
}

fn validate(data: &Dataset, candidates: &[String]) -> TreeResult<()> {
    if data.is_empty() {
        return Err(TreeError::invalid("Cannot build a tree from an empty dataset"));
    }

    if let Some(unknown) = candidates
        .iter()
        .find(|candidate| data.attribute_index(candidate).is_none())
    {
        return Err(TreeError::invalid(format!("Unknown attribute '{}'", unknown)));
    }
    if let Some(duplicate) = find_duplicate(candidates) {
        return Err(TreeError::invalid(format!(
            "Attribute '{}' appears more than once",
            duplicate
        )));
    }
    Ok(())
}

fn grow(
    data: DatasetView<'_>,
    candidates: &[String],
    params: &TreeParams,
) -> TreeResult<DecisionTree> {
    let labels = data.labels();

    if let Some(label) = uniform_label(&labels) {
        trace!(label, rows = data.len(), "Pure leaf");
        return Ok(DecisionTree::Leaf(label));
    }

    if candidates.is_empty() {
        let label = majority_label(&labels);
        trace!(label, rows = data.len(), "Majority leaf");
        return Ok(DecisionTree::Leaf(label));
    }

    let attribute = find_best_attribute(&data, candidates)?;
    let remaining: Vec<String> = candidates
        .iter()
        .filter(|candidate| candidate.as_str() != attribute)
        .cloned()
        .collect();
    let partitions = data.partition(attribute)?;
    debug!(
        attribute,
        branches = partitions.len(),
        rows = data.len(),
        "Splitting"
    );

    let branch = |(value, subset): (&str, DatasetView<'_>)| -> TreeResult<(String, DecisionTree)> {
        Ok((value.to_string(), grow(subset, &remaining, params)?))
    };
    let children = if params.parallel_for(data.len()) {
        partitions
            .into_par_iter()
            .map(branch)
            .collect::<TreeResult<Vec<_>>>()?
    } else {
        partitions
            .into_iter()
            .map(branch)
            .collect::<TreeResult<Vec<_>>>()?
    };

    Ok(DecisionTree::Node {
        attribute: attribute.to_string(),
        children,
    })
}

fn uniform_label(labels: &[bool]) -> Option<bool> {
    let first = *labels.first()?;
    labels.iter().all(|&label| label == first).then_some(first)
}

/// Most common label; an even split resolves to `false`.
fn majority_label(labels: &[bool]) -> bool {
    let true_count = labels.iter().filter(|&&label| label).count();
    true_count > labels.len() - true_count
}
