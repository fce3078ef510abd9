//! Field mapping between diagram cells and the engine's wire types.

use crate::import::edge_vertices;
use crate::kgraph::{RequestEdge, RequestNode, ResultEdge, ResultNode};
use trellis_graph::{ConnectedLink, Diagram, Node, Point};

/// Converts cells to request entries and writes result entries back onto a diagram.
///
/// The same strategy value is used for both directions of one layout pass, so a custom mapping
/// only has to agree with itself.
pub trait ConversionStrategy {
    fn create_node(&self, node: &Node) -> RequestNode;

    fn create_edge(&self, link: ConnectedLink<'_>) -> RequestEdge;

    /// Applies a laid-out node. Returns `false` when the diagram has no matching node.
    fn import_node(&self, diagram: &mut dyn Diagram, node: &ResultNode) -> bool;

    /// Applies a routed edge. Returns `false` when nothing was written.
    fn import_edge(&self, diagram: &mut dyn Diagram, edge: &ResultEdge) -> bool;

    /// Whether edge routes from the result are written to the diagram at all.
    fn set_link_vertices(&self) -> bool;
}

impl<T: ConversionStrategy + ?Sized> ConversionStrategy for &T {
    fn create_node(&self, node: &Node) -> RequestNode {
        (**self).create_node(node)
    }

    fn create_edge(&self, link: ConnectedLink<'_>) -> RequestEdge {
        (**self).create_edge(link)
    }

    fn import_node(&self, diagram: &mut dyn Diagram, node: &ResultNode) -> bool {
        (**self).import_node(diagram, node)
    }

    fn import_edge(&self, diagram: &mut dyn Diagram, edge: &ResultEdge) -> bool {
        (**self).import_edge(diagram, edge)
    }

    fn set_link_vertices(&self) -> bool {
        (**self).set_link_vertices()
    }
}

/// Maps node size to `width`/`height`, link endpoints to `source`/`target`, and writes back
/// `x`/`y` as the node position and `[sourcePoint, bendPoints.., targetPoint]` as link vertices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultStrategy {
    pub set_link_vertices: bool,
}

impl DefaultStrategy {
    pub fn with_link_vertices() -> Self {
        Self {
            set_link_vertices: true,
        }
    }
}

impl ConversionStrategy for DefaultStrategy {
    fn create_node(&self, node: &Node) -> RequestNode {
        RequestNode {
            id: node.id.clone(),
            width: node.size.width,
            height: node.size.height,
            children: Vec::new(),
        }
    }

    fn create_edge(&self, link: ConnectedLink<'_>) -> RequestEdge {
        RequestEdge {
            id: link.id().to_string(),
            source: link.source.to_string(),
            target: link.target.to_string(),
        }
    }

    fn import_node(&self, diagram: &mut dyn Diagram, node: &ResultNode) -> bool {
        match (node.x, node.y) {
            (Some(x), Some(y)) => diagram.set_position(&node.id, Point::new(x, y)),
            _ => false,
        }
    }

    fn import_edge(&self, diagram: &mut dyn Diagram, edge: &ResultEdge) -> bool {
        match edge_vertices(edge) {
            Some(vertices) => diagram.set_vertices(&edge.id, vertices),
            None => false,
        }
    }

    fn set_link_vertices(&self) -> bool {
        self.set_link_vertices
    }
}
