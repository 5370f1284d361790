use serde::{Deserialize, Serialize};

/// Configuration data for gradient-descent training.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Step size applied to every weight and bias update.
    pub learning_rate: f32,
    /// Maximum number of forward/backward iterations
    /// spent on a single example.
    pub max_iterations: usize,
    /// Loss below which training on an example stops early.
    pub loss_threshold: f32,
    /// Number of passes over the dataset.
    pub epochs: usize,
}

impl Default for TrainingConfig {
    /// Returns the reference configuration: a learning
    /// rate of 0.5, at most 10000 iterations per example,
    /// a loss threshold of 1e-6, and 100 epochs.
    fn default() -> TrainingConfig {
        TrainingConfig {
            learning_rate: 0.5,
            max_iterations: 10000,
            loss_threshold: 1e-6,
            epochs: 100,
        }
    }
}
