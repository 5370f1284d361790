use std::fmt;

/// An incoming connection of a node.
///
/// Edges are stored on their destination node, in
/// insertion order; the position of an edge in that
/// list is what ties its weight to its source.
#[derive(Clone, Copy, PartialEq)]
pub struct Edge {
    pub(crate) source: usize,
    pub(crate) weight: f32,
    pub(crate) gradient: f32,
}

impl Edge {
    /// Creates a new edge from the specified
    /// source node, with a zeroed gradient.
    pub fn new(source: usize, weight: f32) -> Edge {
        Edge {
            source,
            weight,
            gradient: 0.0,
        }
    }

    /// Returns the index of the edge's source node.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the edge's weight.
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Returns the gradient accumulated for the
    /// edge's weight during the last backward sweep.
    pub fn gradient(&self) -> f32 {
        self.gradient
    }

    /// Overwrites the edge's weight.
    pub fn set_weight(&mut self, weight: f32) {
        self.weight = weight;
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.9} ({:.9})", self.source, self.weight, self.gradient)
    }
}
