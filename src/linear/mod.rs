//! Linear classifiers.

pub mod perceptron;
