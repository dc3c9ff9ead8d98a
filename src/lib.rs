//! # id3-tree
//!
//! `id3-tree` learns decision trees from small categorical datasets with the ID3
//! algorithm: at every level it splits on the attribute with the highest
//! information gain, and it stops when the records agree on their label or no
//! attribute is left.
//!
//! ## Getting Started
//!
//! To use `id3-tree`, add the following to your `Cargo.toml` file:
//!
//! ```toml
//! [dependencies]
//! id3-tree = "*"
//! ```
//!
//! ## Example Usage
//!
//! Here's how to learn the classic "PlayTennis" tree and print it:
//!
//! ```rust
//! use id3_tree::data::dataset::Dataset;
//! use id3_tree::trees::builder::build_tree;
//! use id3_tree::trees::render::render_tree;
//!
//! let dataset = Dataset::play_tennis();
//! let tree = build_tree(&dataset, dataset.attributes()).unwrap();
//!
//! for line in render_tree(&tree) {
//!     println!("{}", line);
//! }
//! ```

/// Datasets and data loading
pub mod data;
/// Error type shared by the whole crate
pub mod error;
/// Functions for evaluating model performance
pub mod metrics;
/// Decision trees
pub mod trees;
