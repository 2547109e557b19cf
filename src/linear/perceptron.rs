//! Perceptron classifier trained by the classic mistake-driven update rule.

use crate::common_types::DataPoint;
use crate::dot_product;
use crate::error::{PerceptronError, Result};
use num_traits::Float;
use std::fmt::{self, Debug, Display};

/// What happened during a call to [`Perceptron::train_with_outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingOutcome {
    /// Number of full passes over the dataset that were executed.
    pub epochs: usize,
    /// True if the last executed pass made no mistakes.
    pub converged: bool,
}

/// Binary linear classifier with labels in {+1, -1}.
///
/// The decision function is `bias + weights · x`. An activation of exactly zero is treated as
/// the negative class, both when predicting and when deciding whether an example needs an update.
#[derive(Debug, Clone, PartialEq)]
pub struct Perceptron<F>
where
    F: Float + Debug,
{
    bias: F,
    weights: Vec<F>,
    /// One name per weight, used only for the human readable dump.
    feature_names: Vec<String>,
}

impl<F> Perceptron<F>
where
    F: Float + Debug,
{
    /// Pass cap for callers with no better number.
    pub const DEFAULT_MAX_ITERS: usize = 100;

    /// Creates a model with zero bias and one zero weight per feature name.
    pub fn new<S: AsRef<str>>(feature_names: &[S]) -> Self {
        Perceptron {
            bias: F::zero(),
            weights: vec![F::zero(); feature_names.len()],
            feature_names: feature_names.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    pub fn bias(&self) -> F {
        self.bias
    }

    pub fn weights(&self) -> &[F] {
        &self.weights
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// Returns `bias + Σ weight[i] * features[i]`.
    ///
    /// # Panics
    /// Panics if `features.len()` differs from the number of weights.
    pub fn get_activation(&self, features: &[F]) -> F {
        assert_eq!(
            features.len(),
            self.weights.len(),
            "Feature vector length must match the number of weights."
        );
        self.bias + dot_product(&self.weights, features)
    }

    /// Same as [`get_activation`](Self::get_activation) but reports a width mismatch as an error.
    pub fn try_get_activation(&self, features: &[F]) -> Result<F> {
        if features.len() != self.weights.len() {
            return Err(PerceptronError::DimensionMismatch {
                expected: self.weights.len(),
                actual: features.len(),
            });
        }
        Ok(self.get_activation(features))
    }

    /// Classifies a feature vector: `+1` if the activation is strictly positive, otherwise `-1`.
    pub fn predict(&self, features: &[F]) -> F {
        if self.get_activation(features) > F::zero() {
            F::one()
        } else {
            -F::one()
        }
    }

    /// Performs a single update for one example.
    /// Returns true if the example was already classified correctly, in which case nothing changes.
    pub fn learn(&mut self, example: &DataPoint<F, F>) -> bool {
        let y = example.label;
        // a == 0 is a mistake whatever the sign of y
        let is_correct = self.get_activation(&example.features) * y > F::zero();
        if !is_correct {
            self.bias = self.bias + y;
            for (w, &x) in self.weights.iter_mut().zip(example.features.iter()) {
                *w = *w + y * x;
            }
        }
        is_correct
    }

    /// Runs up to `max_iters` passes over `dataset`, stopping after the first pass without mistakes.
    /// Training continues from the current weights; it never resets them.
    pub fn train(&mut self, dataset: &[DataPoint<F, F>], max_iters: usize) {
        self.train_with_outcome(dataset, max_iters);
    }

    /// Like [`train`](Self::train), but reports how many passes ran and whether they converged.
    pub fn train_with_outcome(
        &mut self,
        dataset: &[DataPoint<F, F>],
        max_iters: usize,
    ) -> TrainingOutcome {
        let mut outcome = TrainingOutcome { epochs: 0, converged: false };
        for _ in 0..max_iters {
            outcome.epochs += 1;
            let mut done = true;
            // Every example is visited, even after a mistake earlier in the pass
            for example in dataset {
                if !self.learn(example) {
                    done = false;
                }
            }
            if done {
                outcome.converged = true;
                break;
            }
        }
        outcome
    }

    /// Number of examples whose predicted class differs from their label. Does not update the model.
    pub fn count_mistakes(&self, dataset: &[DataPoint<F, F>]) -> usize {
        dataset
            .iter()
            .filter(|dp| self.predict(&dp.features) != dp.label)
            .count()
    }

    /// Fraction of `dataset` classified correctly, in `[0, 1]`.
    ///
    /// # Errors
    /// Returns [`PerceptronError::EmptyDataset`] if `dataset` has no examples.
    pub fn test_accuracy(&self, dataset: &[DataPoint<F, F>]) -> Result<F> {
        if dataset.is_empty() {
            return Err(PerceptronError::EmptyDataset);
        }
        // Count in usize; an f32 counter stops at 2^24
        let correct = dataset.len() - self.count_mistakes(dataset);
        let to_float = |count: usize| F::from(count).ok_or(PerceptronError::Unrepresentable { count });
        Ok(to_float(correct)? / to_float(dataset.len())?)
    }
}

impl<F> Display for Perceptron<F>
where
    F: Float + Debug,
{
    /// `bias <b>` followed by one `<name> <weight>` line per feature. Diagnostic only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bias {:?}", self.bias)?;
        for (name, w) in self.feature_names.iter().zip(self.weights.iter()) {
            write!(f, "\n{} {:?}", name, w)?;
        }
        Ok(())
    }
}
