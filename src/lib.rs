//! Binary linear classification with the classic perceptron learning rule.
//!
//! Data comes from delimited text files (see [`data`]), the model lives in [`linear`].

pub mod common_types;
pub mod data;
pub mod error;
pub mod linear;

pub use common_types::{DataPoint, Dataset, normalize_label};
pub use data::{LoaderOptions, load_dataset, read_dataset};
pub use error::{PerceptronError, Result};
pub use linear::perceptron::{Perceptron, TrainingOutcome};

use num_traits::Float;

// --- Helper functions for vector operations ---

/// Calculates the dot product of two vectors.
/// Extra elements of the longer slice are ignored; callers check widths first.
pub fn dot_product<F: Float>(a: &[F], b: &[F]) -> F {
    a.iter().zip(b.iter()).fold(F::zero(), |acc, (&x, &y)| acc + x * y)
}
