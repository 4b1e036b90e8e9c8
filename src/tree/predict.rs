use super::tree::DecisionTree;
use crate::errors::TreeError;
use crate::node::Node;
use crate::Matrix;
use rayon::prelude::*;

impl DecisionTree {
    /// Classify a single feature row, returning the predicted class
    /// code. The row must have `n_features` values.
    pub fn predict_row(&self, row: &[f64]) -> Result<f64, TreeError> {
        if row.len() != self.n_features {
            return Err(TreeError::ShapeMismatch(
                "row".to_string(),
                self.n_features,
                row.len(),
            ));
        }
        Ok(self.predict_row_unchecked(row))
    }

    fn predict_row_unchecked(&self, row: &[f64]) -> f64 {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { value } => return *value,
                Node::Decision {
                    split_feature,
                    split_value,
                    left,
                    right,
                    ..
                } => {
                    node = if row[*split_feature] <= *split_value { left } else { right };
                }
            }
        }
    }

    fn predict_single_threaded(&self, data: &Matrix<f64>) -> Vec<f64> {
        data.index
            .iter()
            .map(|i| self.predict_row_unchecked(data.get_row(*i)))
            .collect()
    }

    fn predict_parallel(&self, data: &Matrix<f64>) -> Vec<f64> {
        data.index
            .par_iter()
            .map(|i| self.predict_row_unchecked(data.get_row(*i)))
            .collect()
    }

    /// Classify every row of `data`, in row order. Each output slot
    /// depends only on its own row, so `parallel` batches may fan the
    /// traversals out over a thread pool.
    pub fn predict(&self, data: &Matrix<f64>, parallel: bool) -> Result<Vec<f64>, TreeError> {
        if data.cols != self.n_features {
            return Err(TreeError::ShapeMismatch(
                "data".to_string(),
                self.n_features,
                data.cols,
            ));
        }
        let preds = if parallel {
            self.predict_parallel(data)
        } else {
            self.predict_single_threaded(data)
        };
        Ok(preds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_row_shape_check() {
        let data_vec = vec![1.0, 2.0, 3.0, 4.0];
        let data = Matrix::new(&data_vec, 2, 2);
        let target = vec![0.0, 1.0];
        let tree = DecisionTree::fit(&data, &target).unwrap();

        assert!(matches!(
            tree.predict_row(&[1.0]),
            Err(TreeError::ShapeMismatch(..))
        ));
        assert!(tree.predict_row(&[1.0, 2.0]).is_ok());
    }

    #[test]
    fn test_predict_batch_shape_check() {
        let data_vec = vec![1.0, 2.0, 3.0, 4.0];
        let data = Matrix::new(&data_vec, 2, 2);
        let target = vec![0.0, 1.0];
        let tree = DecisionTree::fit(&data, &target).unwrap();

        let query_vec = vec![1.0, 2.0, 3.0];
        let query = Matrix::new(&query_vec, 1, 3);
        assert!(matches!(
            tree.predict(&query, false),
            Err(TreeError::ShapeMismatch(..))
        ));
    }

    #[test]
    fn test_predict_parallel_matches_single_threaded() {
        let data_vec = vec![
            1.0, 8.0, //
            2.0, 7.0, //
            3.0, 6.0, //
            4.0, 5.0, //
            5.0, 4.0, //
            6.0, 3.0, //
        ];
        let data = Matrix::new(&data_vec, 6, 2);
        let target = vec![0.0, 0.0, 1.0, 1.0, 2.0, 2.0];
        let tree = DecisionTree::fit(&data, &target).unwrap();

        let sequential = tree.predict(&data, false).unwrap();
        let parallel = tree.predict(&data, true).unwrap();
        assert_eq!(sequential, parallel);
    }
}
