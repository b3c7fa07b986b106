//! The perceptron learning rule: one corrective sweep over the dataset.

use crate::common_types::{Example, Weights};
use num_traits::Float;
use std::iter::Sum;

/// Updates the weights of the perceptron for incorrectly classified points
/// using the perceptron learning rule. This function makes one sweep over
/// the dataset: negatives in index order first, then positives.
///
/// Each misclassified negative example is subtracted from the weight vector
/// and each misclassified positive example is added to it. Corrections are
/// applied immediately, so the activation of example `i + 1` is computed
/// against the weights already corrected for example `i` (the online update,
/// not the batch one).
///
/// There is no stopping condition here; the caller re-evaluates after the
/// sweep to decide whether to keep going.
pub fn update_weights<F>(
    negatives: &[Example<F>],
    positives: &[Example<F>],
    w_current: &Weights<F>,
) -> Weights<F>
where
    F: Float + Sum,
{
    let mut w = *w_current;

    for x in negatives {
        if x.activation(&w) >= F::zero() {
            w = w.sub_example(x);
        }
    }

    for x in positives {
        if x.activation(&w) < F::zero() {
            w = w.add_example(x);
        }
    }

    w
}
