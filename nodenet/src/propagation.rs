//! The three sweeps of a training step.
//!
//! All of them rely on the graph's rank invariant: every
//! edge's source has a lower index than its destination.
//! Splitting the pool at the current node thus puts every
//! source on one side and the node itself on the other.
use crate::activation::Activation;
use crate::graph::{Graph, NodeKind};

impl Graph {
    /// Computes the output of every non-input node, in
    /// ascending index order, and zeroes every weight,
    /// bias and output gradient along the way.
    ///
    /// Input nodes keep their clamped outputs.
    ///
    /// # Examples
    /// ```
    /// use nodenet::activation::{Activation, ActivationType};
    /// use nodenet::graph::{Graph, GraphLimits, NodeKind};
    ///
    /// let mut graph = Graph::new(GraphLimits::standard());
    /// let input = graph.add_node(NodeKind::Input, 0.0).unwrap();
    /// let output = graph.add_node(NodeKind::Output, 0.5).unwrap();
    /// graph.add_edge(input, output, 2.0).unwrap();
    ///
    /// graph.set_inputs(&[1.5]);
    /// graph.forward(&ActivationType::Sigmoid);
    ///
    /// assert_eq!(graph.outputs()[0], ActivationType::Sigmoid.activate(1.5 * 2.0 + 0.5));
    /// ```
    pub fn forward<A: Activation + ?Sized>(&mut self, activation: &A) {
        for index in 0..self.nodes.len() {
            let (upstream, rest) = self.nodes.split_at_mut(index);
            let node = &mut rest[0];
            node.output_gradient = 0.0;
            if node.kind == NodeKind::Input {
                continue;
            }

            let mut net = 0.0;
            for edge in node.incoming.iter_mut() {
                net += upstream[edge.source].output * edge.weight;
                edge.gradient = 0.0;
            }
            net += node.bias;
            node.bias_gradient = 0.0;
            node.output = activation.activate(net);
        }
    }

    /// Accumulates weight, bias and output gradients in
    /// descending index order, starting from the gradients
    /// seeded on the output nodes.
    ///
    /// Descending order guarantees a node has received the
    /// contributions of all its consumers before it passes
    /// its own gradient upstream. Input nodes accumulate
    /// nothing.
    pub fn backward<A: Activation + ?Sized>(&mut self, activation: &A) {
        self.backward_in_order((0..self.nodes.len()).rev(), activation);
    }

    pub(crate) fn backward_in_order<A, I>(&mut self, order: I, activation: &A)
    where
        A: Activation + ?Sized,
        I: IntoIterator<Item = usize>,
    {
        for index in order {
            let (upstream, rest) = self.nodes.split_at_mut(index);
            let node = &mut rest[0];
            if node.kind == NodeKind::Input {
                continue;
            }

            let delta = activation.derivative(node.output) * node.output_gradient;
            for edge in node.incoming.iter_mut() {
                let source = &mut upstream[edge.source];
                edge.gradient += source.output * delta;
                if source.kind != NodeKind::Input {
                    source.output_gradient += edge.weight * delta;
                }
            }
            node.bias_gradient += delta;
        }
    }

    /// Moves every weight and bias along its accumulated
    /// gradient, scaled by `learning_rate`.
    pub fn update(&mut self, learning_rate: f32) {
        for node in self
            .nodes
            .iter_mut()
            .filter(|node| node.kind != NodeKind::Input)
        {
            for edge in node.incoming.iter_mut() {
                edge.weight += learning_rate * edge.gradient;
            }
            node.bias += learning_rate * node.bias_gradient;
        }
    }
}
