//! ID3 Decision Tree Classifier
use super::{builder::build_tree_with_params, node::DecisionTree, params::TreeParams, render::Lines};
use crate::{
    data::dataset::Dataset,
    error::{TreeError, TreeResult},
    metrics::confusion::ClassificationMetrics,
};
use nalgebra::DVector;

/// Decision tree classifier trained with ID3 on categorical attributes.
#[derive(Clone, Debug, Default)]
pub struct Id3Classifier {
    root: Option<DecisionTree>,
    tree_params: TreeParams,
}

impl ClassificationMetrics for Id3Classifier {}

impl Id3Classifier {
    /// Creates a new instance of the classifier with default parameters.
    pub fn new() -> Self {
        Self {
            root: None,
            tree_params: TreeParams::new(),
        }
    }

    pub fn with_params(tree_params: TreeParams) -> Self {
        Self {
            root: None,
            tree_params,
        }
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.tree_params.set_parallel(parallel)
    }

    pub fn params(&self) -> &TreeParams {
        &self.tree_params
    }

    /// The learned tree, if [`Id3Classifier::fit`] has succeeded.
    pub fn tree(&self) -> Option<&DecisionTree> {
        self.root.as_ref()
    }

    /// Builds the decision tree from a dataset.
    ///
    /// # Arguments
    ///
    /// * `dataset` - The labeled records.
    /// * `attributes` - Attributes the tree may split on, in priority order for ties.
    ///
    /// # Returns
    ///
    /// A string indicating that the tree was built successfully.
    ///
    /// # Errors
    ///
    /// This method will return an error if the dataset is empty or `attributes`
    /// does not match its schema. A failed fit leaves the previous tree in place.
    pub fn fit(&mut self, dataset: &Dataset, attributes: &[String]) -> TreeResult<String> {
        self.root = Some(build_tree_with_params(
            dataset,
            attributes,
            &self.tree_params,
        )?);
        Ok("Finished building the tree.".into())
    }

    /// Predicts the label of every record in `dataset`.
    ///
    /// # Errors
    ///
    /// This method will return an error if the tree wasn't built yet, or if a
    /// record holds a value the tree never saw at the point it is needed.
    pub fn predict(&self, dataset: &Dataset) -> TreeResult<DVector<bool>> {
        let root = self.root.as_ref().ok_or(TreeError::NotFitted)?;
        let predictions = (0..dataset.len())
            .map(|row| root.predict(dataset, row))
            .collect::<TreeResult<Vec<_>>>()?;

        Ok(DVector::from_vec(predictions))
    }

    /// Text rendering of the learned tree, see [`Lines`].
    pub fn render(&self) -> TreeResult<Lines<'_>> {
        self.root.as_ref().map(Lines::new).ok_or(TreeError::NotFitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::Record;

    #[test]
    fn test_new() {
        let classifier = Id3Classifier::new();
        assert!(classifier.tree().is_none());
        assert!(!classifier.params().parallel());
    }

    #[test]
    fn test_predict_before_fit() {
        let classifier = Id3Classifier::new();
        let result = classifier.predict(&Dataset::play_tennis());
        assert!(matches!(result, Err(TreeError::NotFitted)));
        assert!(classifier.render().is_err());
    }

    #[test]
    fn test_fit_and_predict() {
        let dataset = Dataset::play_tennis();
        let mut classifier = Id3Classifier::new();
        let message = classifier.fit(&dataset, dataset.attributes()).unwrap();
        assert_eq!(message, "Finished building the tree.");

        let predictions = classifier.predict(&dataset).unwrap();
        let truth = DVector::from_vec(dataset.labels());
        assert_eq!(predictions, truth);
        assert_eq!(classifier.accuracy(&truth, &predictions).unwrap(), 1.0);
    }

    #[test]
    fn test_fit_parallel() {
        let dataset = Dataset::play_tennis();
        let mut params = TreeParams::new();
        params.set_parallel(true);
        params.set_parallel_min_rows(2).unwrap();

        let mut parallel = Id3Classifier::with_params(params);
        parallel.fit(&dataset, dataset.attributes()).unwrap();
        let mut sequential = Id3Classifier::new();
        sequential.fit(&dataset, dataset.attributes()).unwrap();

        assert_eq!(parallel.tree(), sequential.tree());
    }

    #[test]
    fn test_predict_unseen_value() {
        let dataset = Dataset::play_tennis();
        let mut classifier = Id3Classifier::new();
        classifier.fit(&dataset, dataset.attributes()).unwrap();

        let foggy = Dataset::new(
            dataset.attributes().to_vec(),
            vec![Record::new(vec!["Fog", "Mild", "High", "Weak"], true)],
        )
        .unwrap();
        let result = classifier.predict(&foggy);
        assert!(matches!(result, Err(TreeError::UnseenValue { .. })));
    }

    #[test]
    fn test_failed_fit_keeps_tree() {
        let dataset = Dataset::play_tennis();
        let mut classifier = Id3Classifier::new();
        classifier.fit(&dataset, dataset.attributes()).unwrap();

        let empty = Dataset::new(dataset.attributes().to_vec(), vec![]).unwrap();
        assert!(classifier.fit(&empty, dataset.attributes()).is_err());
        assert!(classifier.tree().is_some());
    }

    #[test]
    fn test_render() {
        let dataset = Dataset::play_tennis();
        let mut classifier = Id3Classifier::new();
        classifier.fit(&dataset, dataset.attributes()).unwrap();

        let lines: Vec<_> = classifier.render().unwrap().collect();
        assert_eq!(lines.len(), 15);
        assert_eq!(lines[0], "|-Outlook");
    }
}
