use crate::activation::ActivationType;
use crate::graph::GraphLimits;

use serde::{Deserialize, Serialize};

use std::num::NonZeroUsize;

/// Configuration data for network construction.
///
/// The network is laid out as an input layer,
/// `hidden_layers` layers of `hidden_per_layer`
/// nodes each, and an output layer, every layer
/// fully connected to the next.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Number of input nodes.
    pub input_count: NonZeroUsize,
    /// Number of nodes in each hidden layer.
    pub hidden_per_layer: NonZeroUsize,
    /// Number of hidden layers. If zero, output
    /// nodes are connected directly to the inputs.
    pub hidden_layers: usize,
    /// Number of output nodes.
    pub output_count: NonZeroUsize,
    /// Activation function shared by all
    /// hidden and output nodes.
    pub activation: ActivationType,
    /// Capacity bounds of the underlying graph.
    pub limits: GraphLimits,
}

impl NetworkConfig {
    /// Returns a minimal configuration: one input
    /// connected directly to one sigmoid output,
    /// with the standard graph limits.
    ///
    /// # Note
    /// This value is not suitable for most problems.
    /// It is meant as a way to fill in unused values
    /// during configuration instantiation.
    ///
    /// # Examples
    /// ```
    /// use nodenet::network::NetworkConfig;
    /// use std::num::NonZeroUsize;
    ///
    /// let config = NetworkConfig {
    ///     input_count: NonZeroUsize::new(2).unwrap(),
    ///     hidden_layers: 1,
    ///     // Default the rest...
    ///     ..NetworkConfig::zero()
    /// };
    /// assert_eq!(config.node_count(), 2 + 1 + 1);
    /// ```
    pub const fn zero() -> NetworkConfig {
        NetworkConfig {
            // SAFETY: 1 is a valid NonZeroUsize.
            input_count: unsafe { NonZeroUsize::new_unchecked(1) },
            hidden_per_layer: unsafe { NonZeroUsize::new_unchecked(1) },
            hidden_layers: 0,
            output_count: unsafe { NonZeroUsize::new_unchecked(1) },
            activation: ActivationType::Sigmoid,
            limits: GraphLimits::standard(),
        }
    }

    /// Returns the total number of nodes the configured network holds.
    pub fn node_count(&self) -> usize {
        self.input_count.get()
            + self.hidden_per_layer.get() * self.hidden_layers
            + self.output_count.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_json() {
        let config: NetworkConfig = serde_json::from_str(
            r#"{
                "input_count": 2,
                "hidden_per_layer": 4,
                "hidden_layers": 3,
                "output_count": 3,
                "activation": "Softplus",
                "limits": { "max_nodes": 50, "max_fan_in": 8, "max_fan_out": 8 }
            }"#,
        )
        .unwrap();
        assert_eq!(config.input_count.get(), 2);
        assert_eq!(config.activation, ActivationType::Softplus);
        assert_eq!(config.limits.max_nodes, 50);
        assert_eq!(config.node_count(), 2 + 4 * 3 + 3);
    }

    #[test]
    fn zero_hidden_per_layer_rejected() {
        let result = serde_json::from_str::<NetworkConfig>(
            r#"{
                "input_count": 2,
                "hidden_per_layer": 0,
                "hidden_layers": 1,
                "output_count": 1,
                "activation": "Sigmoid",
                "limits": { "max_nodes": 50, "max_fan_in": 8, "max_fan_out": 8 }
            }"#,
        );
        assert!(result.is_err());
    }
}
