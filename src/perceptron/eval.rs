//! Misclassification evaluation for a fixed weight vector.

use crate::common_types::{Example, Weights};
use num_traits::Float;
use std::iter::Sum;

/// Evaluates the perceptron using a given weight vector. Here, evaluation
/// refers to finding the data points that the perceptron incorrectly
/// classifies.
///
/// Inputs:
/// - `negatives` - the augmented examples with target 0.
/// - `positives` - the augmented examples with target 1.
/// - `w`         - the weight vector; the last component is the bias.
///
/// Returns `(mistakes_neg, mistakes_pos)`: the indices of the negative
/// examples misclassified as positive, and of the positive examples
/// misclassified as negative, each in ascending index order.
///
/// The decision boundary itself belongs to the positive class: a negative
/// example with activation exactly 0 is a mistake, a positive one is
/// correct. The total error count for an epoch is the sum of both lengths.
pub fn eval_perceptron<F>(
    negatives: &[Example<F>],
    positives: &[Example<F>],
    w: &Weights<F>,
) -> (Vec<usize>, Vec<usize>)
where
    F: Float + Sum,
{
    let mut mistakes_neg = Vec::new();
    let mut mistakes_pos = Vec::new();

    for (i, x) in negatives.iter().enumerate() {
        if x.activation(w) >= F::zero() {
            mistakes_neg.push(i);
        }
    }

    for (i, x) in positives.iter().enumerate() {
        if x.activation(w) < F::zero() {
            mistakes_pos.push(i);
        }
    }

    (mistakes_neg, mistakes_pos)
}
