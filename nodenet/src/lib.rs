//! # nodenet
//! A minimal feed-forward neural network engine built on
//! an explicit graph of nodes.
//!
//! A [`Network`] is a layered [`Graph`] of input, hidden and
//! output nodes, whose creation order doubles as topological
//! order. Training runs one forward sweep (ascending order),
//! one backward sweep (descending order) and one weight update
//! per iteration, with gradients derived analytically from
//! the network's [`ActivationType`].
//!
//! [`Network`]: crate::network::Network
//! [`Graph`]: crate::graph::Graph
//! [`ActivationType`]: crate::activation::ActivationType
//!
//! # Example usage: Learning bitwise OR
//! ```
//! use nodenet::activation::ActivationType;
//! use nodenet::network::{Network, NetworkConfig};
//! use nodenet::training::{Trainer, TrainingConfig};
//! use rand::{rngs::StdRng, SeedableRng};
//! use std::num::NonZeroUsize;
//!
//! let config = NetworkConfig {
//!     input_count: NonZeroUsize::new(2).unwrap(),
//!     hidden_per_layer: NonZeroUsize::new(3).unwrap(),
//!     hidden_layers: 1,
//!     output_count: NonZeroUsize::new(1).unwrap(),
//!     activation: ActivationType::Sigmoid,
//!     ..NetworkConfig::zero()
//! };
//! let mut network = Network::new(&config, &mut StdRng::seed_from_u64(0)).unwrap();
//!
//! let trainer = Trainer::new(TrainingConfig {
//!     max_iterations: 200,
//!     epochs: 50,
//!     ..TrainingConfig::default()
//! });
//! let examples: [([f32; 2], [f32; 1]); 4] = [
//!     ([0.0, 0.0], [0.0]),
//!     ([0.0, 1.0], [1.0]),
//!     ([1.0, 0.0], [1.0]),
//!     ([1.0, 1.0], [1.0]),
//! ];
//! for _ in 0..trainer.config().epochs {
//!     trainer.train_epoch(&mut network, &examples);
//! }
//!
//! for (input, target) in examples.iter() {
//!     let output = network.evaluate_at(input)[0];
//!     assert_eq!(output > 0.5, target[0] > 0.5);
//! }
//! ```

pub mod activation;
pub mod graph;
pub mod network;
mod propagation;
pub mod rng;
pub mod training;
