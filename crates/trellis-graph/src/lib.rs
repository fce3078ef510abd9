#![forbid(unsafe_code)]

//! Diagram cell model consumed by `trellis`.
//!
//! A diagram is an ordered collection of cells. A cell is either a node (sized, positioned box)
//! or a link between two endpoints. Links may end at a free point instead of a node; those links
//! carry no node id at that end and are not laid out.
//!
//! Host applications that already own a diagram model implement [`Diagram`] for it; [`Graph`]
//! is the in-memory implementation used by tests and headless callers.

pub mod cell;
pub mod diagram;
pub mod error;
pub mod geom;
pub mod graph;

pub use cell::{Cell, ConnectedLink, Endpoint, Link, Node};
pub use diagram::{Cells, Diagram};
pub use error::{GraphError, Result};
pub use geom::{Point, Size};
pub use graph::Graph;
