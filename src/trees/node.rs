use crate::data::dataset::Dataset;
use crate::error::{TreeError, TreeResult};

/// Decision tree learned by ID3.
///
/// A `Node` has one child per value of its attribute that was present in the
/// data reaching it, kept in the order those values were first seen. There is
/// no fallback branch for other values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecisionTree {
    Leaf(bool),
    Node {
        attribute: String,
        children: Vec<(String, DecisionTree)>,
    },
}

impl DecisionTree {
    pub fn is_leaf(&self) -> bool {
        matches!(self, DecisionTree::Leaf(_))
    }

    /// Subtree reached by following the branch for `value`.
    pub fn child(&self, value: &str) -> Option<&DecisionTree> {
        match self {
            DecisionTree::Leaf(_) => None,
            DecisionTree::Node { children, .. } => children
                .iter()
                .find(|(branch, _)| branch == value)
                .map(|(_, child)| child),
        }
    }

    /// Number of internal (splitting) nodes.
    pub fn node_count(&self) -> usize {
        match self {
            DecisionTree::Leaf(_) => 0,
            DecisionTree::Node { children, .. } => {
                1 + children.iter().map(|(_, child)| child.node_count()).sum::<usize>()
            }
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            DecisionTree::Leaf(_) => 1,
            DecisionTree::Node { children, .. } => {
                children.iter().map(|(_, child)| child.leaf_count()).sum()
            }
        }
    }

    /// Number of value branches.
    pub fn edge_count(&self) -> usize {
        match self {
            DecisionTree::Leaf(_) => 0,
            DecisionTree::Node { children, .. } => children
                .iter()
                .map(|(_, child)| 1 + child.edge_count())
                .sum(),
        }
    }

    /// Number of splits on the longest path from the root to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            DecisionTree::Leaf(_) => 0,
            DecisionTree::Node { children, .. } => {
                1 + children
                    .iter()
                    .map(|(_, child)| child.depth())
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    /// Classifies record `row` of `dataset`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnseenValue`] when the record carries a value the
    /// tree has no branch for, and [`TreeError::InvalidInput`] when the record
    /// lacks an attribute the tree splits on.
    pub fn predict(&self, dataset: &Dataset, row: usize) -> TreeResult<bool> {
        let mut node = self;
        loop {
            match node {
                DecisionTree::Leaf(label) => return Ok(*label),
                DecisionTree::Node { attribute, .. } => {
                    let value = dataset.value(row, attribute)?;
                    node = node.child(value).ok_or_else(|| TreeError::UnseenValue {
                        attribute: attribute.clone(),
                        value: value.to_string(),
                    })?;
                }
            }
        }
    }
}
