//! A Graph is an append-only pool of nodes, wired
//! together by weighted edges.
//!
//! A node's index is both its identity and its topological
//! rank: every edge runs from a lower index to a higher one.
//! Forward propagation is therefore a single ascending pass
//! over the pool, and backward propagation a single
//! descending one, with no explicit topological sort.
mod dot;
mod edge;
mod errors;
mod node;

pub use dot::Dot;
pub use edge::Edge;
pub use errors::GraphError;
pub use node::{Node, NodeKind};

use ahash::RandomState;
use serde::{Deserialize, Serialize};

use std::collections::HashSet;

/// Capacity bounds of a graph. Exceeding any of them
/// while building is a configuration error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLimits {
    /// Maximum number of nodes in the graph.
    pub max_nodes: usize,
    /// Maximum number of incoming edges per node.
    pub max_fan_in: usize,
    /// Maximum number of outgoing edges per node.
    pub max_fan_out: usize,
}

impl GraphLimits {
    /// Returns the reference limits: 100 nodes,
    /// with up to 20 edges in and out of each.
    pub const fn standard() -> GraphLimits {
        GraphLimits {
            max_nodes: 100,
            max_fan_in: 20,
            max_fan_out: 20,
        }
    }
}

/// An ordered, append-only collection of nodes.
#[derive(Clone, Debug)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    input_indices: Vec<usize>,
    hidden_indices: Vec<usize>,
    output_indices: Vec<usize>,
    edge_pairs: HashSet<(usize, usize), RandomState>,
    limits: GraphLimits,
}

impl Graph {
    /// Creates a new, empty graph bounded by `limits`.
    pub fn new(limits: GraphLimits) -> Graph {
        Graph {
            nodes: vec![],
            input_indices: vec![],
            hidden_indices: vec![],
            output_indices: vec![],
            edge_pairs: HashSet::default(),
            limits,
        }
    }

    /// Appends a new node to the graph and returns its index.
    ///
    /// # Errors
    /// Returns an error if the graph already holds
    /// `limits.max_nodes` nodes.
    ///
    /// # Examples
    /// ```
    /// use nodenet::graph::{Graph, GraphLimits, NodeKind};
    ///
    /// let mut graph = Graph::new(GraphLimits { max_nodes: 2, ..GraphLimits::standard() });
    ///
    /// assert_eq!(graph.add_node(NodeKind::Input, 0.0).unwrap(), 0);
    /// assert_eq!(graph.add_node(NodeKind::Output, 0.5).unwrap(), 1);
    /// assert!(graph.add_node(NodeKind::Output, 0.5).is_err());
    /// ```
    pub fn add_node(&mut self, kind: NodeKind, bias: f32) -> Result<usize, GraphError> {
        if self.nodes.len() >= self.limits.max_nodes {
            return Err(GraphError::NodeCapacityExceeded(self.limits.max_nodes));
        }
        let index = self.nodes.len();
        self.nodes.push(Node::new(kind, bias));
        match kind {
            NodeKind::Input => &mut self.input_indices,
            NodeKind::Hidden => &mut self.hidden_indices,
            NodeKind::Output => &mut self.output_indices,
        }
        .push(index);
        Ok(index)
    }

    /// Connects `source` to `destination` with the given weight.
    /// The edge is appended to the destination's incoming list.
    ///
    /// # Errors
    /// Returns an error if either endpoint doesn't exist, if
    /// `source` is not strictly lower than `destination`, if the
    /// destination is an input node, if the pair is already
    /// connected, or if either node's fan limit would be exceeded.
    ///
    /// # Examples
    /// ```
    /// use nodenet::graph::{Graph, GraphLimits, NodeKind};
    ///
    /// let mut graph = Graph::new(GraphLimits::standard());
    /// let input = graph.add_node(NodeKind::Input, 0.0).unwrap();
    /// let output = graph.add_node(NodeKind::Output, 0.0).unwrap();
    ///
    /// graph.add_edge(input, output, 1.5).unwrap();
    /// assert_eq!(graph.node(output).incoming()[0].weight(), 1.5);
    /// assert_eq!(graph.node(input).outgoing(), &[output]);
    ///
    /// // Edges may only point towards later nodes.
    /// assert!(graph.add_edge(output, input, 1.0).is_err());
    /// ```
    pub fn add_edge(
        &mut self,
        source: usize,
        destination: usize,
        weight: f32,
    ) -> Result<(), GraphError> {
        self.check_edge_viability(source, destination)?;
        self.nodes[source].outgoing.push(destination);
        self.nodes[destination]
            .incoming
            .push(Edge::new(source, weight));
        self.edge_pairs.insert((source, destination));
        Ok(())
    }

    fn check_edge_viability(&self, source: usize, destination: usize) -> Result<(), GraphError> {
        if source >= self.nodes.len() || destination >= self.nodes.len() {
            return Err(GraphError::NonexistentEndpoint(source, destination));
        }
        if source >= destination {
            return Err(GraphError::RankViolation(source, destination));
        }
        if self.nodes[destination].kind == NodeKind::Input {
            return Err(GraphError::InputDestination(destination));
        }
        if self.edge_pairs.contains(&(source, destination)) {
            return Err(GraphError::DuplicateEdge(source, destination));
        }
        if self.nodes[destination].incoming.len() >= self.limits.max_fan_in {
            return Err(GraphError::FanInExceeded {
                node: destination,
                limit: self.limits.max_fan_in,
            });
        }
        if self.nodes[source].outgoing.len() >= self.limits.max_fan_out {
            return Err(GraphError::FanOutExceeded {
                node: source,
                limit: self.limits.max_fan_out,
            });
        }
        Ok(())
    }

    /// Returns the node at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    /// Returns a mutable reference to the node at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn node_mut(&mut self, index: usize) -> &mut Node {
        &mut self.nodes[index]
    }

    /// Returns all nodes, in creation order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the total number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edge_pairs.len()
    }

    pub fn input_indices(&self) -> &[usize] {
        &self.input_indices
    }

    pub fn hidden_indices(&self) -> &[usize] {
        &self.hidden_indices
    }

    pub fn output_indices(&self) -> &[usize] {
        &self.output_indices
    }

    /// Returns the limits the graph was created with.
    ///
    /// # Examples
    /// ```
    /// use nodenet::graph::{Graph, GraphLimits};
    ///
    /// let limits = GraphLimits { max_nodes: 3, ..GraphLimits::standard() };
    /// assert_eq!(Graph::new(limits).limits(), limits);
    /// ```
    pub fn limits(&self) -> GraphLimits {
        self.limits
    }

    /// Clamps the output of each input node to the
    /// corresponding value in the passed slice.
    ///
    /// # Panics
    /// This function panics if the length of the passed
    /// slice is not equal to the number of input nodes.
    pub fn set_inputs(&mut self, values: &[f32]) {
        assert_eq!(
            values.len(),
            self.input_indices.len(),
            "input slice length must match the number of input nodes"
        );
        for (index, value) in self.input_indices.iter().zip(values) {
            self.nodes[*index].output = *value;
        }
    }

    /// Returns the current output node values as a vector.
    pub fn outputs(&self) -> Vec<f32> {
        self.output_indices
            .iter()
            .map(|index| self.nodes[*index].output)
            .collect()
    }

    /// Returns the squared-error loss `½ Σ (target - output)²`
    /// of the current output node values.
    ///
    /// # Panics
    /// This function panics if the length of `target` is
    /// not equal to the number of output nodes.
    pub fn loss(&self, target: &[f32]) -> f32 {
        assert_eq!(
            target.len(),
            self.output_indices.len(),
            "target slice length must match the number of output nodes"
        );
        let total: f32 = self
            .output_indices
            .iter()
            .zip(target)
            .map(|(index, target)| (target - self.nodes[*index].output).powi(2))
            .sum();
        total / 2.0
    }

    /// Seeds each output node's gradient with `target - output`.
    ///
    /// The seed points towards decreasing loss, so weight
    /// updates add the accumulated gradients.
    ///
    /// # Panics
    /// This function panics if the length of `target` is
    /// not equal to the number of output nodes.
    pub fn seed_output_gradients(&mut self, target: &[f32]) {
        assert_eq!(
            target.len(),
            self.output_indices.len(),
            "target slice length must match the number of output nodes"
        );
        for (index, target) in self.output_indices.iter().zip(target) {
            let node = &mut self.nodes[*index];
            node.output_gradient = target - node.output;
        }
    }

    /// Returns a displayable view of the graph in
    /// the `graph { ... }` description format.
    pub fn dot(&self) -> Dot<'_> {
        Dot::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits(max_nodes: usize, max_fan_in: usize, max_fan_out: usize) -> GraphLimits {
        GraphLimits {
            max_nodes,
            max_fan_in,
            max_fan_out,
        }
    }

    #[test]
    fn add_node() {
        let mut graph = Graph::new(GraphLimits::standard());
        let kinds = [
            NodeKind::Input,
            NodeKind::Input,
            NodeKind::Hidden,
            NodeKind::Output,
            NodeKind::Hidden,
        ];
        for (i, kind) in kinds.iter().enumerate() {
            assert_eq!(graph.add_node(*kind, i as f32).unwrap(), i);
        }
        assert_eq!(graph.len(), 5);
        assert_eq!(graph.input_indices(), &[0, 1]);
        assert_eq!(graph.hidden_indices(), &[2, 4]);
        assert_eq!(graph.output_indices(), &[3]);
        assert_eq!(graph.node(4).bias(), 4.0);
        assert_eq!(graph.node(3).kind(), NodeKind::Output);
    }

    #[test]
    fn node_capacity() {
        let mut graph = Graph::new(limits(3, 20, 20));
        for _ in 0..3 {
            graph.add_node(NodeKind::Hidden, 0.0).unwrap();
        }
        assert_eq!(
            graph.add_node(NodeKind::Hidden, 0.0),
            Err(GraphError::NodeCapacityExceeded(3))
        );
        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn add_edge_keeps_insertion_order() {
        let mut graph = Graph::new(GraphLimits::standard());
        for _ in 0..3 {
            graph.add_node(NodeKind::Input, 0.0).unwrap();
        }
        let output = graph.add_node(NodeKind::Output, 0.0).unwrap();
        graph.add_edge(2, output, 0.2).unwrap();
        graph.add_edge(0, output, 0.0).unwrap();
        graph.add_edge(1, output, 0.1).unwrap();

        let sources: Vec<_> = graph.node(output).incoming().iter().map(Edge::source).collect();
        let weights: Vec<_> = graph.node(output).incoming().iter().map(Edge::weight).collect();
        assert_eq!(sources, vec![2, 0, 1]);
        assert_eq!(weights, vec![0.2, 0.0, 0.1]);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.node(output).incoming().iter().all(|e| e.gradient() == 0.0));
    }

    #[test]
    fn add_edge_invalid() {
        let mut graph = Graph::new(GraphLimits::standard());
        let input = graph.add_node(NodeKind::Input, 0.0).unwrap();
        let other_input = graph.add_node(NodeKind::Input, 0.0).unwrap();
        let hidden = graph.add_node(NodeKind::Hidden, 0.0).unwrap();

        assert_eq!(
            graph.add_edge(input, 7, 1.0),
            Err(GraphError::NonexistentEndpoint(input, 7))
        );
        assert_eq!(
            graph.add_edge(hidden, hidden, 1.0),
            Err(GraphError::RankViolation(hidden, hidden))
        );
        assert_eq!(
            graph.add_edge(hidden, input, 1.0),
            Err(GraphError::RankViolation(hidden, input))
        );
        assert_eq!(
            graph.add_edge(input, other_input, 1.0),
            Err(GraphError::InputDestination(other_input))
        );
        graph.add_edge(input, hidden, 1.0).unwrap();
        assert_eq!(
            graph.add_edge(input, hidden, 2.0),
            Err(GraphError::DuplicateEdge(input, hidden))
        );
        assert_eq!(graph.node(hidden).incoming().len(), 1);
    }

    #[test]
    fn fan_in_limit() {
        let mut graph = Graph::new(limits(100, 2, 20));
        for _ in 0..3 {
            graph.add_node(NodeKind::Input, 0.0).unwrap();
        }
        let output = graph.add_node(NodeKind::Output, 0.0).unwrap();
        graph.add_edge(0, output, 1.0).unwrap();
        graph.add_edge(1, output, 1.0).unwrap();
        assert_eq!(
            graph.add_edge(2, output, 1.0),
            Err(GraphError::FanInExceeded {
                node: output,
                limit: 2
            })
        );
    }

    #[test]
    fn fan_out_limit() {
        let mut graph = Graph::new(limits(100, 20, 1));
        let input = graph.add_node(NodeKind::Input, 0.0).unwrap();
        let first = graph.add_node(NodeKind::Output, 0.0).unwrap();
        let second = graph.add_node(NodeKind::Output, 0.0).unwrap();
        graph.add_edge(input, first, 1.0).unwrap();
        assert_eq!(
            graph.add_edge(input, second, 1.0),
            Err(GraphError::FanOutExceeded {
                node: input,
                limit: 1
            })
        );
        assert!(graph.node(second).incoming().is_empty());
    }

    #[test]
    fn loss_and_seeding() {
        let mut graph = Graph::new(GraphLimits::standard());
        let first = graph.add_node(NodeKind::Output, 0.0).unwrap();
        let second = graph.add_node(NodeKind::Output, 0.0).unwrap();
        graph.node_mut(first).output = 0.25;
        graph.node_mut(second).output = 1.5;

        assert_eq!(graph.outputs(), vec![0.25, 1.5]);
        assert_eq!(graph.loss(&[1.0, 0.5]), (0.75 * 0.75 + 1.0) / 2.0);

        graph.seed_output_gradients(&[1.0, 0.5]);
        assert_eq!(graph.node(first).output_gradient(), 0.75);
        assert_eq!(graph.node(second).output_gradient(), -1.0);
    }

    #[test]
    fn set_inputs() {
        let mut graph = Graph::new(GraphLimits::standard());
        graph.add_node(NodeKind::Input, 0.0).unwrap();
        graph.add_node(NodeKind::Hidden, 0.0).unwrap();
        graph.add_node(NodeKind::Input, 0.0).unwrap();
        graph.set_inputs(&[3.0, -1.0]);
        assert_eq!(graph.node(0).output(), 3.0);
        assert_eq!(graph.node(1).output(), 0.0);
        assert_eq!(graph.node(2).output(), -1.0);
    }

    #[test]
    #[should_panic]
    fn set_inputs_wrong_length() {
        let mut graph = Graph::new(GraphLimits::standard());
        graph.add_node(NodeKind::Input, 0.0).unwrap();
        graph.set_inputs(&[1.0, 2.0]);
    }
}
