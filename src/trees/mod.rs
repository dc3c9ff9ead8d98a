/// ID3 tree induction
pub mod builder;
/// Fit/predict wrapper around the tree builder
pub mod classifier;
/// Entropy, information gain and split selection
pub mod entropy;
pub mod node;
pub mod params;
/// Text rendering of learned trees
pub mod render;
