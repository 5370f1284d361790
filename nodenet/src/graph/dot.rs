use super::Graph;

use std::fmt;

/// Renders a graph in an undirected `graph { ... }`
/// description format, for visualization only.
///
/// One line is written per edge, then one per node.
pub struct Dot<'a> {
    graph: &'a Graph,
}

impl<'a> Dot<'a> {
    pub(super) fn new(graph: &'a Graph) -> Dot<'a> {
        Dot { graph }
    }
}

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "graph {{")?;
        for (index, node) in self.graph.nodes().iter().enumerate() {
            for edge in node.incoming() {
                writeln!(
                    f,
                    "{} -- {} [label=\"weight={}\"]",
                    edge.source(),
                    index,
                    edge.weight()
                )?;
            }
        }
        for (index, node) in self.graph.nodes().iter().enumerate() {
            writeln!(
                f,
                "{} [label=\"type: {} w: {} bias: {}\"]",
                index,
                node.kind().code(),
                node.output(),
                node.bias()
            )?;
        }
        writeln!(f, "}}")
    }
}
