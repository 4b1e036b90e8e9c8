//! Split selection: information gain, and the exhaustive search over
//! feature/threshold candidates for a node's row subset.

use crate::data::{FloatData, Matrix};
use crate::histogram::entropy;

/// The best split found for one node, together with the two row
/// partitions it induces.
///
/// Rows whose split-feature value is `<= split_value` fall in the left
/// partition, the rest in the right. Both partitions keep full row
/// content and labels in original row order. The value lives only for
/// the duration of one node's construction: the grower consumes the
/// partitions to build the two child subtrees and drops the rest.
#[derive(Debug)]
pub struct SplitInfo {
    pub split_feature: usize,
    pub split_value: f64,
    pub split_gain: f64,
    pub left_data: Vec<f64>,
    pub left_target: Vec<f64>,
    pub right_data: Vec<f64>,
    pub right_target: Vec<f64>,
}

impl SplitInfo {
    /// Number of rows in the left partition.
    pub fn left_rows(&self) -> usize {
        self.left_target.len()
    }

    /// Number of rows in the right partition.
    pub fn right_rows(&self) -> usize {
        self.right_target.len()
    }
}

/// Information gain of partitioning `parent` into `left` and `right`:
/// the reduction in entropy, weighting each side by its share of the
/// parent's rows. Non-negative in exact arithmetic; floating point
/// rounding can push it marginally below zero.
pub fn information_gain<T: FloatData<T>>(parent: &[T], left: &[T], right: &[T]) -> T {
    let n = T::from_usize(parent.len());
    let left_prop = T::from_usize(left.len()) / n;
    let right_prop = T::from_usize(right.len()) / n;
    entropy(parent) - (left_prop * entropy(left) + right_prop * entropy(right))
}

/// Exhaustively search all (feature, threshold) candidates for the
/// split of `data` with maximal information gain.
///
/// Features are scanned in index order; within a feature, candidate
/// thresholds are the column's distinct values in the order they first
/// appear. A candidate replaces the running best only on strictly
/// greater gain, so the first-encountered maximum wins on ties.
/// Candidates that leave either side empty separate nothing and are
/// discarded.
///
/// Returns `None` when no candidate partitions the rows into two
/// non-empty sides: rows with duplicate feature vectors but conflicting
/// labels have no separating threshold, and the caller must settle for
/// a leaf instead of recursing into empty children.
pub fn best_split(data: &Matrix<f64>, target: &[f64]) -> Option<SplitInfo> {
    let mut best: Option<SplitInfo> = None;
    // Any achievable gain beats the sentinel.
    let mut best_gain = -1.0;

    for feature in 0..data.cols {
        let mut thresholds: Vec<f64> = Vec::new();
        for v in data.get_col_iter(feature) {
            if !thresholds.contains(v) {
                thresholds.push(*v);
            }
        }

        for &threshold in thresholds.iter() {
            let mut left_data: Vec<f64> = Vec::new();
            let mut left_target: Vec<f64> = Vec::new();
            let mut right_data: Vec<f64> = Vec::new();
            let mut right_target: Vec<f64> = Vec::new();

            for row in 0..data.rows {
                if *data.get(row, feature) <= threshold {
                    left_data.extend_from_slice(data.get_row(row));
                    left_target.push(target[row]);
                } else {
                    right_data.extend_from_slice(data.get_row(row));
                    right_target.push(target[row]);
                }
            }

            if left_target.is_empty() || right_target.is_empty() {
                continue;
            }

            let gain = information_gain(target, &left_target, &right_target);
            if gain > best_gain {
                best_gain = gain;
                best = Some(SplitInfo {
                    split_feature: feature,
                    split_value: threshold,
                    split_gain: gain,
                    left_data,
                    left_target,
                    right_data,
                    right_target,
                });
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::precision_round;

    #[test]
    fn test_information_gain_perfect_split() {
        let parent = vec![0.0, 0.0, 1.0, 1.0];
        let left = vec![0.0, 0.0];
        let right = vec![1.0, 1.0];
        assert_eq!(information_gain(&parent, &left, &right), 1.0);
    }

    #[test]
    fn test_information_gain_useless_split() {
        let parent = vec![0.0, 1.0, 0.0, 1.0];
        let left = vec![0.0, 1.0];
        let right = vec![0.0, 1.0];
        assert_eq!(information_gain(&parent, &left, &right), 0.0);
    }

    #[test]
    fn test_information_gain_non_negative() {
        let parent = vec![0.0, 0.0, 0.0, 1.0, 1.0, 2.0];
        let left = vec![0.0, 1.0, 2.0];
        let right = vec![0.0, 0.0, 1.0];
        assert!(information_gain(&parent, &left, &right) > -1e-9);
    }

    #[test]
    fn test_best_split_separable() {
        // One feature separates the classes at <= 2.0.
        let data_vec = vec![1.0, 2.0, 3.0, 4.0];
        let data = Matrix::new(&data_vec, 4, 1);
        let target = vec![0.0, 0.0, 1.0, 1.0];

        let split = best_split(&data, &target).unwrap();
        assert_eq!(split.split_feature, 0);
        assert_eq!(split.split_value, 2.0);
        assert_eq!(precision_round(split.split_gain, 10), 1.0);
        assert_eq!(split.left_target, vec![0.0, 0.0]);
        assert_eq!(split.right_target, vec![1.0, 1.0]);
    }

    #[test]
    fn test_best_split_picks_informative_feature() {
        // Feature 0 is constant noise, feature 1 separates the classes.
        let data_vec = vec![
            7.0, 1.0, //
            7.0, 1.0, //
            7.0, 5.0, //
            7.0, 5.0, //
        ];
        let data = Matrix::new(&data_vec, 4, 2);
        let target = vec![0.0, 0.0, 1.0, 1.0];

        let split = best_split(&data, &target).unwrap();
        assert_eq!(split.split_feature, 1);
        assert_eq!(split.split_value, 1.0);
        assert_eq!(split.left_rows(), 2);
        assert_eq!(split.right_rows(), 2);
    }

    #[test]
    fn test_best_split_partitions_keep_row_order() {
        let data_vec = vec![
            3.0, 10.0, //
            1.0, 20.0, //
            4.0, 30.0, //
            2.0, 40.0, //
        ];
        let data = Matrix::new(&data_vec, 4, 2);
        let target = vec![1.0, 0.0, 1.0, 0.0];

        let split = best_split(&data, &target).unwrap();
        assert_eq!(split.split_feature, 0);
        assert_eq!(split.split_value, 2.0);
        // Original row order inside each side, full row content retained.
        assert_eq!(split.left_data, vec![1.0, 20.0, 2.0, 40.0]);
        assert_eq!(split.left_target, vec![0.0, 0.0]);
        assert_eq!(split.right_data, vec![3.0, 10.0, 4.0, 30.0]);
        assert_eq!(split.right_target, vec![1.0, 1.0]);
    }

    #[test]
    fn test_best_split_none_on_conflicting_duplicates() {
        // Identical feature rows with different labels cannot be
        // separated; every candidate has an empty side.
        let data_vec = vec![1.0, 2.0, 1.0, 2.0, 1.0, 2.0];
        let data = Matrix::new(&data_vec, 3, 2);
        let target = vec![0.0, 1.0, 0.0];

        assert!(best_split(&data, &target).is_none());
    }

    #[test]
    fn test_best_split_first_maximum_wins() {
        // Both features split the data identically; the tie must go to
        // the one scanned first.
        let data_vec = vec![
            0.0, 0.0, //
            0.0, 0.0, //
            1.0, 1.0, //
            1.0, 1.0, //
        ];
        let data = Matrix::new(&data_vec, 4, 2);
        let target = vec![0.0, 0.0, 1.0, 1.0];

        let split = best_split(&data, &target).unwrap();
        assert_eq!(split.split_feature, 0);
        assert_eq!(split.split_value, 0.0);
    }
}
