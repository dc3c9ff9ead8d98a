/// Categorical datasets and their loaders
pub mod dataset;
