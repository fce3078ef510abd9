//! Result graph -> diagram.

use crate::kgraph::{ResultEdge, ResultGraph};
use crate::strategy::ConversionStrategy;
use tracing::debug;
use trellis_graph::{Diagram, Point};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub nodes: usize,
    pub edges: usize,
    /// Result nodes that were not written (no matching node, or no coordinates).
    pub skipped_nodes: usize,
    /// Result edges that were not written (no matching link, or no end points).
    pub skipped_edges: usize,
}

/// Writes node positions, then (if the strategy asks for it) link vertices.
///
/// Entries whose id is no longer in the diagram are skipped.
pub fn import_graph(
    diagram: &mut dyn Diagram,
    result: &ResultGraph,
    strategy: &dyn ConversionStrategy,
) -> ImportStats {
    let mut stats = ImportStats::default();
    for node in &result.children {
        if strategy.import_node(diagram, node) {
            stats.nodes += 1;
        } else {
            debug!(node = %node.id, "skipping result node");
            stats.skipped_nodes += 1;
        }
    }

    if strategy.set_link_vertices() {
        for edge in &result.edges {
            if strategy.import_edge(diagram, edge) {
                stats.edges += 1;
            } else {
                debug!(edge = %edge.id, "skipping result edge");
                stats.skipped_edges += 1;
            }
        }
    }

    debug!(
        nodes = stats.nodes,
        edges = stats.edges,
        skipped_nodes = stats.skipped_nodes,
        skipped_edges = stats.skipped_edges,
        "imported layout result"
    );
    stats
}

/// `[sourcePoint, bendPoints.., targetPoint]`, or `None` if either end point is missing.
pub fn edge_vertices(edge: &ResultEdge) -> Option<Vec<Point>> {
    let source = edge.source_point?;
    let target = edge.target_point?;
    let mut vertices = Vec::with_capacity(edge.bend_points.len() + 2);
    vertices.push(source);
    vertices.extend_from_slice(&edge.bend_points);
    vertices.push(target);
    Some(vertices)
}
