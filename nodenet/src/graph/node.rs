use super::Edge;

use serde::{Deserialize, Serialize};

use std::fmt;

/// A NodeKind indicates the function of a node
/// within the graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Input nodes. Their output is clamped from outside
    /// and they never take part in propagation.
    Input,
    /// Hidden nodes.
    Hidden,
    /// Output nodes. Their gradient is seeded from the loss.
    Output,
}

impl NodeKind {
    /// Returns the numeric code used when exporting the graph.
    ///
    /// # Examples
    /// ```
    /// use nodenet::graph::NodeKind;
    ///
    /// assert_eq!(NodeKind::Input.code(), 0);
    /// assert_eq!(NodeKind::Hidden.code(), 1);
    /// assert_eq!(NodeKind::Output.code(), 2);
    /// ```
    pub fn code(self) -> u8 {
        match self {
            NodeKind::Input => 0,
            NodeKind::Hidden => 1,
            NodeKind::Output => 2,
        }
    }
}

/// A single computational unit of a graph.
#[derive(Clone, PartialEq)]
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) incoming: Vec<Edge>,
    pub(crate) outgoing: Vec<usize>,
    pub(crate) bias: f32,
    pub(crate) bias_gradient: f32,
    pub(crate) output: f32,
    pub(crate) output_gradient: f32,
}

impl Node {
    /// Generate a new, unconnected node with the passed parameters.
    pub fn new(kind: NodeKind, bias: f32) -> Node {
        Node {
            kind,
            incoming: vec![],
            outgoing: vec![],
            bias,
            bias_gradient: 0.0,
            output: 0.0,
            output_gradient: 0.0,
        }
    }

    /// Returns the node's kind.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns the node's incoming edges, in insertion order.
    pub fn incoming(&self) -> &[Edge] {
        &self.incoming
    }

    /// Returns a mutable view of the node's incoming edges.
    pub fn incoming_mut(&mut self) -> &mut [Edge] {
        &mut self.incoming
    }

    /// Returns the indices of the nodes this node feeds into.
    pub fn outgoing(&self) -> &[usize] {
        &self.outgoing
    }

    pub fn bias(&self) -> f32 {
        self.bias
    }

    /// Overwrites the node's bias.
    ///
    /// # Examples
    /// ```
    /// use nodenet::graph::{Graph, GraphLimits, NodeKind};
    ///
    /// let mut graph = Graph::new(GraphLimits::standard());
    /// let index = graph.add_node(NodeKind::Output, 0.0).unwrap();
    /// graph.node_mut(index).set_bias(1.5);
    /// assert_eq!(graph.node(index).bias(), 1.5);
    /// ```
    pub fn set_bias(&mut self, bias: f32) {
        self.bias = bias;
    }

    pub fn bias_gradient(&self) -> f32 {
        self.bias_gradient
    }

    /// Returns the node's output as of the last forward
    /// sweep, or its clamped value for input nodes.
    pub fn output(&self) -> f32 {
        self.output
    }

    /// Returns the loss gradient with respect to the node's
    /// output, as accumulated during the last backward sweep.
    pub fn output_gradient(&self) -> f32 {
        self.output_gradient
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}[out: {}, bias: {}, IN: {:?}, OUT: {:?}]",
            self.kind, self.output, self.bias, self.incoming, self.outgoing,
        )
    }
}
