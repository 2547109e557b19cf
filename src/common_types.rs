//! This module contains common data structures shared by the loader and the classifier.

use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents a single data point, with features and a label.
///
/// - `F`: The type of the features (e.g., `f64`, `f32`).
/// - `L`: The type of the label. For the perceptron this is the same float type as the features.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DataPoint<F, L> {
    pub features: Vec<F>,
    pub label: L,
}

impl<F, L> DataPoint<F, L> {
    pub fn new(features: Vec<F>, label: L) -> Self {
        DataPoint { features, label }
    }
}

/// An ordered set of labeled examples. Order is traversal order during training.
pub type Dataset<F> = Vec<DataPoint<F, F>>;

/// Maps a raw label to the {+1, -1} convention: `0` becomes `-1`, everything else passes through.
pub fn normalize_label<F: Float>(raw: F) -> F {
    if raw == F::zero() { -F::one() } else { raw }
}
