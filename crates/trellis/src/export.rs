//! Diagram -> request graph.

use crate::kgraph::RequestGraph;
use crate::strategy::ConversionStrategy;
use tracing::debug;
use trellis_graph::{Cell, Diagram};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportStats {
    pub nodes: usize,
    pub edges: usize,
    /// Links left out because an endpoint is a free point.
    pub skipped_links: usize,
}

/// Appends every node and every fully connected link of `diagram` to `graph`, in the diagram's
/// cell order. Links with a free-point endpoint are left out.
pub fn export_graph(
    diagram: &dyn Diagram,
    graph: &mut RequestGraph,
    strategy: &dyn ConversionStrategy,
) -> ExportStats {
    let mut stats = ExportStats::default();
    for cell in diagram.cells() {
        match cell {
            Cell::Link(link) => {
                let Some(connected) = link.connected() else {
                    debug!(link = %link.id, "skipping link with a free endpoint");
                    stats.skipped_links += 1;
                    continue;
                };
                graph.edges.push(strategy.create_edge(connected));
                stats.edges += 1;
            }
            Cell::Node(node) => {
                graph.children.push(strategy.create_node(node));
                stats.nodes += 1;
            }
        }
    }
    debug!(
        nodes = stats.nodes,
        edges = stats.edges,
        skipped_links = stats.skipped_links,
        "exported diagram"
    );
    stats
}

impl RequestGraph {
    pub fn from_diagram(diagram: &dyn Diagram, strategy: &dyn ConversionStrategy) -> Self {
        let mut graph = Self::new();
        export_graph(diagram, &mut graph, strategy);
        graph
    }
}
