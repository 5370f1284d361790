//! A Network pairs a layered graph with the single
//! activation strategy used by all of its non-input nodes.
//!
//! Networks are built once, from a [`NetworkConfig`],
//! and keep their topology for their whole lifetime;
//! only weights, biases and transient node state change.
mod builder;
mod config;

pub use config::NetworkConfig;

use crate::activation::ActivationType;
use crate::graph::Graph;

/// A fully-connected, layered feed-forward network.
#[derive(Clone, Debug)]
pub struct Network {
    graph: Graph,
    activation: ActivationType,
}

impl Network {
    /// Returns the network's graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns a mutable reference to the network's graph.
    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    /// Returns the activation type shared by all non-input nodes.
    pub fn activation(&self) -> ActivationType {
        self.activation
    }

    pub fn input_count(&self) -> usize {
        self.graph.input_indices().len()
    }

    pub fn output_count(&self) -> usize {
        self.graph.output_indices().len()
    }

    /// Clamps the input nodes to `values`.
    ///
    /// # Panics
    /// This function panics if the length of the passed
    /// slice is not equal to the number of inputs in the network.
    pub fn set_inputs(&mut self, values: &[f32]) {
        self.graph.set_inputs(values);
    }

    /// Runs a forward sweep with the network's activation.
    pub fn forward(&mut self) {
        self.graph.forward(&self.activation);
    }

    /// Runs a backward sweep with the network's activation.
    pub fn backward(&mut self) {
        self.graph.backward(&self.activation);
    }

    /// Applies the accumulated gradients.
    pub fn update(&mut self, learning_rate: f32) {
        self.graph.update(learning_rate);
    }

    /// Returns the current output node values as a vector.
    pub fn outputs(&self) -> Vec<f32> {
        self.graph.outputs()
    }

    /// Returns the network's outputs for `inputs`.
    ///
    /// # Panics
    /// This function panics if the length of the passed
    /// slice is not equal to the number of inputs in the network.
    ///
    /// # Examples
    /// ```
    /// use nodenet::network::{Network, NetworkConfig};
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use std::num::NonZeroUsize;
    ///
    /// let config = NetworkConfig {
    ///     input_count: NonZeroUsize::new(2).unwrap(),
    ///     output_count: NonZeroUsize::new(3).unwrap(),
    ///     ..NetworkConfig::zero()
    /// };
    /// let mut network = Network::new(&config, &mut StdRng::seed_from_u64(0)).unwrap();
    ///
    /// let outputs = network.evaluate_at(&[1.0, 0.0]);
    /// assert_eq!(outputs.len(), 3);
    /// assert!(outputs.iter().all(|o| (0.0..=1.0).contains(o)));
    /// ```
    pub fn evaluate_at(&mut self, inputs: &[f32]) -> Vec<f32> {
        self.set_inputs(inputs);
        self.forward();
        self.outputs()
    }
}
