//! Dataset loading boundary.
//!
//! Datasets are JSON files carrying the raw (unaugmented) 2-D points for
//! both classes plus two optional weight vectors, keyed the same way as the
//! historical `.mat` containers this format replaces. Shapes are validated
//! here, before training starts.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed dataset: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("bad shape for {field}: expected {expected} components, got {got}")]
    ShapeMismatch {
        field: &'static str,
        expected: usize,
        got: usize,
    },
}

/// On-disk record. The weight vectors may be missing or empty, both meaning
/// "not provided".
#[derive(Debug, Deserialize)]
struct RawDataset {
    neg_examples_nobias: Vec<Vec<f64>>,
    pos_examples_nobias: Vec<Vec<f64>>,
    #[serde(default)]
    w_init: Vec<f64>,
    #[serde(default)]
    w_gen_feas: Vec<f64>,
}

/// A validated dataset: every row has exactly 2 coordinates and the weight
/// vectors, when present, exactly 3 components.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub negatives: Vec<[f64; 2]>,
    pub positives: Vec<[f64; 2]>,
    /// Initial weight vector; `None` triggers random initialization.
    pub w_init: Option<[f64; 3]>,
    /// Known separating vector; `None` disables distance tracking.
    pub w_feasible: Option<[f64; 3]>,
}

impl Dataset {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self, DatasetError> {
        let raw: RawDataset = serde_json::from_str(text)?;
        Ok(Dataset {
            negatives: rows_to_points("neg_examples_nobias", &raw.neg_examples_nobias)?,
            positives: rows_to_points("pos_examples_nobias", &raw.pos_examples_nobias)?,
            w_init: vec_to_weights("w_init", &raw.w_init)?,
            w_feasible: vec_to_weights("w_gen_feas", &raw.w_gen_feas)?,
        })
    }
}

fn rows_to_points(
    field: &'static str,
    rows: &[Vec<f64>],
) -> Result<Vec<[f64; 2]>, DatasetError> {
    rows.iter()
        .map(|row| match row.as_slice() {
            &[x1, x2] => Ok([x1, x2]),
            other => Err(DatasetError::ShapeMismatch {
                field,
                expected: 2,
                got: other.len(),
            }),
        })
        .collect()
}

fn vec_to_weights(
    field: &'static str,
    components: &[f64],
) -> Result<Option<[f64; 3]>, DatasetError> {
    match components {
        [] => Ok(None),
        &[w1, w2, b] => Ok(Some([w1, w2, b])),
        other => Err(DatasetError::ShapeMismatch {
            field,
            expected: 3,
            got: other.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"{
        "neg_examples_nobias": [[-1.0, -1.0], [-2.0, 0.5]],
        "pos_examples_nobias": [[1.0, 1.0]],
        "w_init": [0.0, 0.0, 0.0],
        "w_gen_feas": [3.0, 4.0, 0.0]
    }"#;

    #[test]
    fn test_parses_complete_dataset() {
        let dataset = Dataset::from_json_str(FULL).unwrap();
        assert_eq!(dataset.negatives, vec![[-1.0, -1.0], [-2.0, 0.5]]);
        assert_eq!(dataset.positives, vec![[1.0, 1.0]]);
        assert_eq!(dataset.w_init, Some([0.0, 0.0, 0.0]));
        assert_eq!(dataset.w_feasible, Some([3.0, 4.0, 0.0]));
    }

    #[test]
    fn test_missing_or_empty_weight_vectors_mean_not_provided() {
        let text = r#"{
            "neg_examples_nobias": [[-1.0, -1.0]],
            "pos_examples_nobias": [[1.0, 1.0]],
            "w_init": []
        }"#;
        let dataset = Dataset::from_json_str(text).unwrap();
        assert_eq!(dataset.w_init, None);
        assert_eq!(dataset.w_feasible, None);
    }

    #[test]
    fn test_rejects_rows_with_wrong_dimensionality() {
        let text = r#"{
            "neg_examples_nobias": [[-1.0, -1.0, 5.0]],
            "pos_examples_nobias": [[1.0, 1.0]]
        }"#;
        let err = Dataset::from_json_str(text).unwrap_err();
        match err {
            DatasetError::ShapeMismatch {
                field,
                expected,
                got,
            } => {
                assert_eq!(field, "neg_examples_nobias");
                assert_eq!(expected, 2);
                assert_eq!(got, 3);
            }
            other => panic!("expected ShapeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_short_weight_vector() {
        let text = r#"{
            "neg_examples_nobias": [[-1.0, -1.0]],
            "pos_examples_nobias": [[1.0, 1.0]],
            "w_gen_feas": [1.0, 2.0]
        }"#;
        let err = Dataset::from_json_str(text).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::ShapeMismatch {
                field: "w_gen_feas",
                expected: 3,
                got: 2
            }
        ));
    }

    #[test]
    fn test_rejects_missing_class_field() {
        let err = Dataset::from_json_str(r#"{"pos_examples_nobias": []}"#).unwrap_err();
        assert!(matches!(err, DatasetError::Malformed(_)));
    }

    #[test]
    fn test_from_path_round_trips_through_a_file() {
        let path = std::env::temp_dir().join("perceptron_learning_dataset_test.json");
        fs::write(&path, FULL).unwrap();
        let dataset = Dataset::from_path(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(dataset.negatives.len(), 2);
        assert_eq!(dataset.positives.len(), 1);
    }
}
