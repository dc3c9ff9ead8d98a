//! Text rendering of decision trees
use super::node::DecisionTree;
use std::fmt::{self, Display, Formatter};

const INDENT_WIDTH: usize = 4;

enum Pending<'a> {
    Tree {
        tree: &'a DecisionTree,
        level: usize,
    },
    Branch {
        value: &'a str,
        child: &'a DecisionTree,
        level: usize,
    },
}

/// Lazily produced lines of a tree rendering.
///
/// Attribute and value names are prefixed with `|-`, leaf labels with `->`.
/// Each level of nesting adds four spaces.
pub struct Lines<'a> {
    stack: Vec<Pending<'a>>,
    offset: usize,
}

impl<'a> Lines<'a> {
    pub fn new(tree: &'a DecisionTree) -> Self {
        Self::with_indent(tree, 0)
    }

    /// Renders with every line shifted right by `offset` spaces.
    pub fn with_indent(tree: &'a DecisionTree, offset: usize) -> Self {
        Self {
            stack: vec![Pending::Tree { tree, level: 0 }],
            offset,
        }
    }

    fn pad(&self, level: usize) -> String {
        " ".repeat(self.offset + level * INDENT_WIDTH)
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let line = match self.stack.pop()? {
            Pending::Tree {
                tree: DecisionTree::Leaf(label),
                level,
            } => format!("{}->{}", self.pad(level), label),
            Pending::Tree {
                tree: DecisionTree::Node {
                    attribute,
                    children,
                },
                level,
            } => {
                self.stack
                    .extend(children.iter().rev().map(|(value, child)| Pending::Branch {
                        value: value.as_str(),
                        child,
                        level: level + 1,
                    }));
                format!("{}|-{}", self.pad(level), attribute)
            }
            Pending::Branch {
                value,
                child,
                level,
            } => {
                self.stack.push(Pending::Tree {
                    tree: child,
                    level: level + 1,
                });
                format!("{}|-{}", self.pad(level), value)
            }
        };
        Some(line)
    }
}

/// Renders `tree` depth-first, one line per node, branch and leaf.
pub fn render_tree(tree: &DecisionTree) -> Lines<'_> {
    Lines::new(tree)
}

impl Display for DecisionTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for line in render_tree(self) {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
