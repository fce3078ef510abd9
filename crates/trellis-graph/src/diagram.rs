//! The read/write surface a layout pass needs from a diagram.

use crate::cell::Cell;
use crate::geom::Point;

pub type Cells<'a> = Box<dyn Iterator<Item = &'a Cell> + 'a>;

/// A mutable diagram as seen by a layout pass.
///
/// Implementations own their cells and any change notification; a layout pass only reads node
/// sizes and link endpoints and writes node positions and link vertices.
pub trait Diagram {
    /// All cells, in the diagram's native order.
    fn cells(&self) -> Cells<'_>;

    fn cell(&self, id: &str) -> Option<&Cell>;

    /// Moves the node `id`. Returns `false` if there is no node with that id.
    fn set_position(&mut self, id: &str, position: Point) -> bool;

    /// Replaces the vertices of link `id`. Returns `false` if there is no link with that id.
    fn set_vertices(&mut self, id: &str, vertices: Vec<Point>) -> bool;
}
