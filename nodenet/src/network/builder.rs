use super::{Network, NetworkConfig};
use crate::graph::{Graph, GraphError, NodeKind};
use crate::rng::XavierUniform;

use rand::Rng;

impl Network {
    /// Builds a new network with the specified configuration,
    /// drawing every weight and bias from `rng`.
    ///
    /// Nodes are created layer by layer (inputs, hidden
    /// layers in sequence, outputs), so that every edge
    /// runs from a lower index to a higher one. Each layer
    /// is fully connected to the one before it only.
    ///
    /// # Errors
    /// Returns an error if the configured topology
    /// doesn't fit in the configured graph limits.
    ///
    /// # Examples
    /// ```
    /// use nodenet::network::{Network, NetworkConfig};
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use std::num::NonZeroUsize;
    ///
    /// let config = NetworkConfig {
    ///     input_count: NonZeroUsize::new(2).unwrap(),
    ///     hidden_per_layer: NonZeroUsize::new(4).unwrap(),
    ///     hidden_layers: 3,
    ///     output_count: NonZeroUsize::new(3).unwrap(),
    ///     ..NetworkConfig::zero()
    /// };
    ///
    /// let network = Network::new(&config, &mut StdRng::seed_from_u64(1)).unwrap();
    ///
    /// assert_eq!(network.graph().len(), 2 + 4 * 3 + 3);
    /// assert_eq!(network.graph().edge_count(), 2 * 4 + 4 * 4 + 4 * 4 + 4 * 3);
    /// ```
    pub fn new<R>(config: &NetworkConfig, rng: &mut R) -> Result<Network, GraphError>
    where
        R: Rng + ?Sized,
    {
        let mut sampler =
            XavierUniform::new(rng, config.input_count.get(), config.output_count.get());
        let mut graph = Graph::new(config.limits);

        let layers = Self::generate_layers(&mut graph, config, &mut sampler)?;
        Self::connect_layers(&mut graph, &layers, &mut sampler)?;

        Ok(Network {
            graph,
            activation: config.activation,
        })
    }

    fn generate_layers<R>(
        graph: &mut Graph,
        config: &NetworkConfig,
        sampler: &mut XavierUniform<'_, R>,
    ) -> Result<Vec<Vec<usize>>, GraphError>
    where
        R: Rng + ?Sized,
    {
        let mut layers = Vec::with_capacity(config.hidden_layers + 2);
        layers.push(Self::generate_layer(
            graph,
            NodeKind::Input,
            config.input_count.get(),
            sampler,
        )?);
        for _ in 0..config.hidden_layers {
            layers.push(Self::generate_layer(
                graph,
                NodeKind::Hidden,
                config.hidden_per_layer.get(),
                sampler,
            )?);
        }
        layers.push(Self::generate_layer(
            graph,
            NodeKind::Output,
            config.output_count.get(),
            sampler,
        )?);
        Ok(layers)
    }

    fn generate_layer<R>(
        graph: &mut Graph,
        kind: NodeKind,
        count: usize,
        sampler: &mut XavierUniform<'_, R>,
    ) -> Result<Vec<usize>, GraphError>
    where
        R: Rng + ?Sized,
    {
        (0..count)
            .map(|_| graph.add_node(kind, sampler.sample()))
            .collect()
    }

    fn connect_layers<R>(
        graph: &mut Graph,
        layers: &[Vec<usize>],
        sampler: &mut XavierUniform<'_, R>,
    ) -> Result<(), GraphError>
    where
        R: Rng + ?Sized,
    {
        for pair in layers.windows(2) {
            let (previous, current) = (&pair[0], &pair[1]);
            for destination in current {
                for source in previous {
                    graph.add_edge(*source, *destination, sampler.sample())?;
                }
            }
        }
        Ok(())
    }
}
