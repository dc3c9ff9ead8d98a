use nalgebra::{DMatrix, DVector};

use crate::error::{TreeError, TreeResult};

/// 2x2 counts, rows are true labels and columns predictions; index 0 is `false`.
pub type ConfusionMatrix = DMatrix<usize>;

pub trait ClassificationMetrics {
    /// Computes the confusion matrix based on the true labels and predicted labels.
    ///
    /// # Arguments
    ///
    /// * `y_true` - The true labels.
    /// * `y_pred` - The predicted labels.
    ///
    /// # Returns
    ///
    /// The confusion matrix, or an error if the inputs are empty or differ in length.
    fn confusion_matrix(
        &self,
        y_true: &DVector<bool>,
        y_pred: &DVector<bool>,
    ) -> TreeResult<ConfusionMatrix> {
        if y_true.len() != y_pred.len() {
            return Err(TreeError::invalid(
                "Predictions and labels are of different sizes.",
            ));
        }
        if y_true.is_empty() {
            return Err(TreeError::invalid("No labels to compare."));
        }

        let mut matrix = DMatrix::zeros(2, 2);
        for (&y_t, &y_p) in y_true.iter().zip(y_pred.iter()) {
            matrix[(usize::from(y_t), usize::from(y_p))] += 1;
        }

        Ok(matrix)
    }

    /// Computes the share of predictions that match the true labels.
    fn accuracy(&self, y_true: &DVector<bool>, y_pred: &DVector<bool>) -> TreeResult<f64> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        let correct: usize = matrix.diagonal().iter().sum();

        Ok(correct as f64 / y_true.len() as f64)
    }

    /// Computes the precision of the `true` class, `0.0` when nothing was predicted `true`.
    fn precision(&self, y_true: &DVector<bool>, y_pred: &DVector<bool>) -> TreeResult<f64> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        let tp = matrix[(1, 1)];
        let fp = matrix[(0, 1)];

        match tp + fp {
            0 => Ok(0.0),
            predicted => Ok(tp as f64 / predicted as f64),
        }
    }

    /// Computes the recall of the `true` class, `0.0` when no label is `true`.
    fn recall(&self, y_true: &DVector<bool>, y_pred: &DVector<bool>) -> TreeResult<f64> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        let tp = matrix[(1, 1)];
        let fn_ = matrix[(1, 0)];

        match tp + fn_ {
            0 => Ok(0.0),
            actual => Ok(tp as f64 / actual as f64),
        }
    }

    /// Computes the F1 score, the harmonic mean of precision and recall.
    ///
    /// # Errors
    ///
    /// Fails when precision and recall are both zero.
    fn f1_score(&self, y_true: &DVector<bool>, y_pred: &DVector<bool>) -> TreeResult<f64> {
        let precision = self.precision(y_true, y_pred)?;
        let recall = self.recall(y_true, y_pred)?;

        match (precision + recall).abs() < f64::EPSILON {
            true => Err(TreeError::invalid(
                "Precision and recall are both 0, F1 score undefined.",
            )),
            false => Ok(2.0 * (precision * recall) / (precision + recall)),
        }
    }
}
