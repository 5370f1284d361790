//! Online (one example at a time) gradient-descent
//! training of a [`Network`].
//!
//! Each example is trained in isolation until its loss
//! drops below the configured threshold or the iteration
//! budget runs out. Looping over a dataset for several
//! epochs is left to the caller, with [`Trainer::train_epoch`]
//! as a convenience for a single pass.
mod config;
pub mod logging;

pub use config::TrainingConfig;

use crate::network::Network;

/// The outcome of training a network on one example.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExampleReport {
    /// Number of forward sweeps performed.
    pub iterations: usize,
    /// Loss measured at the last forward sweep.
    pub loss: f32,
    /// Whether the loss dropped below the threshold.
    pub converged: bool,
}

/// Drives the propagation sweeps of a network.
#[derive(Clone, Debug)]
pub struct Trainer {
    config: TrainingConfig,
}

impl Trainer {
    pub fn new(config: TrainingConfig) -> Trainer {
        Trainer { config }
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Trains `network` on a single example.
    ///
    /// Inputs are clamped once; each iteration then runs a
    /// forward sweep, measures the loss, and stops if it
    /// is below the threshold. Otherwise output gradients
    /// are seeded with `target - output` and a backward
    /// sweep and weight update follow.
    ///
    /// Failing to converge is not an error: training just
    /// stops with whatever weights resulted.
    ///
    /// # Panics
    /// This function panics if `input` or `target` don't
    /// match the network's input or output counts.
    ///
    /// # Examples
    /// ```
    /// use nodenet::network::{Network, NetworkConfig};
    /// use nodenet::training::{Trainer, TrainingConfig};
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use std::num::NonZeroUsize;
    ///
    /// let config = NetworkConfig {
    ///     input_count: NonZeroUsize::new(2).unwrap(),
    ///     hidden_per_layer: NonZeroUsize::new(2).unwrap(),
    ///     hidden_layers: 1,
    ///     ..NetworkConfig::zero()
    /// };
    /// let mut network = Network::new(&config, &mut StdRng::seed_from_u64(5)).unwrap();
    /// let before = network.evaluate_at(&[0.0, 1.0])[0];
    ///
    /// let trainer = Trainer::new(TrainingConfig {
    ///     max_iterations: 100,
    ///     ..TrainingConfig::default()
    /// });
    /// let report = trainer.train_example(&mut network, &[0.0, 1.0], &[1.0]);
    ///
    /// assert!(report.iterations <= 100);
    /// assert!(network.evaluate_at(&[0.0, 1.0])[0] > before);
    /// ```
    pub fn train_example(
        &self,
        network: &mut Network,
        input: &[f32],
        target: &[f32],
    ) -> ExampleReport {
        network.set_inputs(input);

        let mut report = ExampleReport {
            iterations: 0,
            loss: network.graph().loss(target),
            converged: false,
        };
        for _ in 0..self.config.max_iterations {
            network.forward();
            report.iterations += 1;
            report.loss = network.graph().loss(target);
            if report.loss < self.config.loss_threshold {
                report.converged = true;
                break;
            }
            network.graph_mut().seed_output_gradients(target);
            network.backward();
            network.update(self.config.learning_rate);
        }
        report
    }

    /// Trains `network` on every example in order, once,
    /// and returns one report per example.
    pub fn train_epoch<I, T>(&self, network: &mut Network, examples: &[(I, T)]) -> Vec<ExampleReport>
    where
        I: AsRef<[f32]>,
        T: AsRef<[f32]>,
    {
        examples
            .iter()
            .map(|(input, target)| self.train_example(network, input.as_ref(), target.as_ref()))
            .collect()
    }
}
