//! This module contains common data structures shared by the perceptron components.

use num_traits::Float;
use std::iter::Sum;

/// Calculates the dot product of two equal-length vectors.
pub fn dot_product<F: Float + Sum>(a: &[F], b: &[F]) -> F {
    a.iter().zip(b.iter()).map(|(&x, &y)| x * y).sum()
}

/// A 2-dimensional training point augmented with a trailing constant 1.0,
/// so that the third weight component acts as a learned bias.
///
/// - `F`: The numeric type of the coordinates (e.g., `f64`, `f32`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Example<F> {
    pub coords: [F; 3],
}

impl<F: Float + Sum> Example<F> {
    /// Builds an augmented example from a raw 2-D point.
    pub fn from_raw(x1: F, x2: F) -> Self {
        Example {
            coords: [x1, x2, F::one()],
        }
    }

    /// Activation of this example under `w`. The sign of the activation is
    /// the predicted class: non-negative means positive class.
    pub fn activation(&self, w: &Weights<F>) -> F {
        dot_product(&self.coords, &w.components)
    }
}

/// Perceptron weight vector `(w1, w2, b)`; the last component is the bias.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights<F> {
    pub components: [F; 3],
}

impl<F: Float + Sum> Weights<F> {
    pub fn new(components: [F; 3]) -> Self {
        Weights { components }
    }

    pub fn zeros() -> Self {
        Weights {
            components: [F::zero(); 3],
        }
    }

    /// `w + x`, the corrective step for a misclassified positive example.
    pub fn add_example(&self, x: &Example<F>) -> Self {
        let w = &self.components;
        let c = &x.coords;
        Weights {
            components: [w[0] + c[0], w[1] + c[1], w[2] + c[2]],
        }
    }

    /// `w - x`, the corrective step for a misclassified negative example.
    pub fn sub_example(&self, x: &Example<F>) -> Self {
        let w = &self.components;
        let c = &x.coords;
        Weights {
            components: [w[0] - c[0], w[1] - c[1], w[2] - c[2]],
        }
    }

    /// Euclidean distance to another weight vector.
    pub fn distance_to(&self, other: &Weights<F>) -> F {
        self.components
            .iter()
            .zip(other.components.iter())
            .map(|(&a, &b)| {
                let diff = a - b;
                diff * diff
            })
            .sum::<F>()
            .sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_appends_constant_one() {
        let x = Example::from_raw(2.0_f64, -3.0);
        assert_eq!(x.coords, [2.0, -3.0, 1.0]);
    }

    #[test]
    fn test_activation_is_dot_product_with_bias() {
        let x = Example::from_raw(2.0_f64, -1.0);
        let w = Weights::new([3.0, 4.0, 0.5]);
        // 2*3 + (-1)*4 + 1*0.5
        assert_eq!(x.activation(&w), 2.5);
    }

    #[test]
    fn test_add_and_sub_example_are_componentwise() {
        let x = Example::from_raw(1.0_f64, 2.0);
        let w = Weights::new([10.0, 10.0, 10.0]);
        assert_eq!(w.add_example(&x).components, [11.0, 12.0, 11.0]);
        assert_eq!(w.sub_example(&x).components, [9.0, 8.0, 9.0]);
    }

    #[test]
    fn test_distance_to() {
        let a = Weights::new([0.0_f64, 0.0, 0.0]);
        let b = Weights::new([3.0, 4.0, 0.0]);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
    }
}
