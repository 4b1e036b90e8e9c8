use crate::data::Matrix;
use crate::errors::TreeError;
use crate::histogram::{is_pure, majority_class};
use crate::node::Node;
use crate::splitter::best_split;
use crate::utils::validate_labels;
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::fs;
use std::path::Path;

/// Training configuration for a decision tree.
///
/// * `max_depth` - hard ceiling on recursion depth; nodes at this depth
///   become leaves regardless of purity.
/// * `min_sample_split` - minimum row count required to attempt a split;
///   smaller subsets become leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct TreeParam {
    pub max_depth: usize,
    pub min_sample_split: usize,
}

impl Default for TreeParam {
    fn default() -> Self {
        TreeParam {
            max_depth: 5,
            min_sample_split: 1,
        }
    }
}

impl TreeParam {
    /// Set the maximal depth of the tree.
    pub fn set_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the minimum number of rows required to attempt a split.
    pub fn set_min_sample_split(mut self, min_sample_split: usize) -> Self {
        self.min_sample_split = min_sample_split;
        self
    }

    pub fn validate_parameters(&self) -> Result<(), TreeError> {
        if self.min_sample_split < 1 {
            return Err(TreeError::InvalidParameter(
                "min_sample_split".to_string(),
                "an integer of at least 1".to_string(),
                self.min_sample_split.to_string(),
            ));
        }
        Ok(())
    }
}

/// A fitted decision-tree classifier.
///
/// Grown once by [`DecisionTree::fit`] or
/// [`DecisionTree::fit_with_params`]; afterwards immutable. The root
/// node owns the whole tree, so dropping the struct releases every node.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DecisionTree {
    /// Root of the owned node tree.
    pub root: Node,
    /// Parameters the tree was grown with.
    pub params: TreeParam,
    /// Number of feature columns seen at fit time; predictions must
    /// match this width.
    pub n_features: usize,
}

impl DecisionTree {
    /// Train a tree on row-major feature `data` and its parallel label
    /// vector `target`, with default parameters (`max_depth = 5`,
    /// `min_sample_split = 1`).
    ///
    /// Labels encode classes as `0, 1, ..., nclass - 1`, stored as
    /// floats. The contract is checked up front; a tree is either fully
    /// built or not returned at all.
    pub fn fit(data: &Matrix<f64>, target: &[f64]) -> Result<Self, TreeError> {
        Self::fit_with_params(data, target, TreeParam::default())
    }

    /// Train a tree with explicit parameters. See [`DecisionTree::fit`].
    pub fn fit_with_params(data: &Matrix<f64>, target: &[f64], params: TreeParam) -> Result<Self, TreeError> {
        params.validate_parameters()?;
        if data.rows == 0 || data.cols == 0 {
            return Err(TreeError::EmptyDataset);
        }
        if target.len() != data.rows {
            return Err(TreeError::ShapeMismatch(
                "target".to_string(),
                data.rows,
                target.len(),
            ));
        }
        validate_labels(target)?;

        let root = grow(data, target, 0, &params);
        let tree = DecisionTree {
            root,
            params,
            n_features: data.cols,
        };
        info!(
            "fitted tree on {} rows x {} features: depth {}, {} leaves",
            data.rows,
            data.cols,
            tree.depth(),
            tree.n_leaves()
        );
        Ok(tree)
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Number of leaves in the tree.
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }
}

/// Build the node for one row subset, recursing on the partitions of
/// the best split. `data` and `target` are this node's rows only.
fn grow(data: &Matrix<f64>, target: &[f64], depth: usize, params: &TreeParam) -> Node {
    if is_pure(target) || data.rows < params.min_sample_split || depth == params.max_depth {
        return Node::Leaf {
            value: majority_class(target),
        };
    }

    match best_split(data, target) {
        Some(split) => {
            let left_matrix = Matrix::new(&split.left_data, split.left_rows(), data.cols);
            let left = grow(&left_matrix, &split.left_target, depth + 1, params);
            let right_matrix = Matrix::new(&split.right_data, split.right_rows(), data.cols);
            let right = grow(&right_matrix, &split.right_target, depth + 1, params);
            Node::Decision {
                split_feature: split.split_feature,
                split_value: split.split_value,
                split_gain: split.split_gain,
                left: Box::new(left),
                right: Box::new(right),
            }
        }
        None => {
            // Impure rows no feature can separate: duplicate feature
            // vectors carrying conflicting labels.
            warn!("no separating split at depth {}, settling for a majority-vote leaf", depth);
            Node::Leaf {
                value: majority_class(target),
            }
        }
    }
}

impl Display for DecisionTree {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut print_buffer: Vec<(&Node, usize)> = vec![(&self.root, 0)];
        let mut r = String::new();
        while let Some((node, depth)) = print_buffer.pop() {
            r += format!("{}{}\n", "      ".repeat(depth).as_str(), node).as_str();
            if let Node::Decision { left, right, .. } = node {
                print_buffer.push((right, depth + 1));
                print_buffer.push((left, depth + 1));
            }
        }
        write!(f, "{}", r)
    }
}

/// IO
pub trait TreeIO: Serialize + DeserializeOwned + Sized {
    /// Save a tree as a json object to a file.
    ///
    /// * `path` - Path to save tree.
    fn save_tree<P: AsRef<Path>>(&self, path: P) -> Result<(), TreeError> {
        fs::write(path, self.json_dump()?).map_err(|e| TreeError::UnableToWrite(e.to_string()))
    }

    /// Dump a tree as a json object
    fn json_dump(&self) -> Result<String, TreeError> {
        serde_json::to_string(self).map_err(|e| TreeError::UnableToWrite(e.to_string()))
    }

    /// Load a tree from Json string
    ///
    /// * `json_str` - String object, which can be serialized to json.
    fn from_json(json_str: &str) -> Result<Self, TreeError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| TreeError::UnableToRead(e.to_string()))
    }

    /// Load a tree from a path to a json tree object.
    ///
    /// * `path` - Path to load tree from.
    fn load_tree<P: AsRef<Path>>(path: P) -> Result<Self, TreeError> {
        let json_str = fs::read_to_string(path).map_err(|e| TreeError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl TreeIO for DecisionTree {}
