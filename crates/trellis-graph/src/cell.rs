//! Cell types: nodes, links, and link endpoints.

use crate::geom::{Point, Size};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Cell {
    Node(Node),
    Link(Link),
}

impl Cell {
    pub fn id(&self) -> &str {
        match self {
            Cell::Node(n) => &n.id,
            Cell::Link(l) => &l.id,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Cell::Link(_))
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Cell::Node(n) => Some(n),
            Cell::Link(_) => None,
        }
    }

    pub fn as_link(&self) -> Option<&Link> {
        match self {
            Cell::Link(l) => Some(l),
            Cell::Node(_) => None,
        }
    }
}

impl From<Node> for Cell {
    fn from(node: Node) -> Self {
        Cell::Node(node)
    }
}

impl From<Link> for Cell {
    fn from(link: Link) -> Self {
        Cell::Link(link)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default)]
    pub size: Size,
    /// Top-left corner in diagram coordinates.
    #[serde(default)]
    pub position: Point,
}

impl Node {
    pub fn new(id: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            size: Size::new(width, height),
            position: Point::default(),
        }
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Point::new(x, y);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    pub source: Endpoint,
    pub target: Endpoint,
    /// Intermediate routing points, in path order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vertices: Vec<Point>,
}

impl Link {
    pub fn new(id: impl Into<String>, source: Endpoint, target: Endpoint) -> Self {
        Self {
            id: id.into(),
            source,
            target,
            vertices: Vec::new(),
        }
    }

    /// Shorthand for a link between two cells.
    pub fn between(id: impl Into<String>, source: &str, target: &str) -> Self {
        Self::new(id, Endpoint::cell(source), Endpoint::cell(target))
    }

    /// Returns the link with both endpoint ids resolved, or `None` when either end is anchored
    /// to a free point.
    pub fn connected(&self) -> Option<ConnectedLink<'_>> {
        Some(ConnectedLink {
            link: self,
            source: self.source.id()?,
            target: self.target.id()?,
        })
    }
}

/// One end of a [`Link`].
///
/// Serialized the way the host diagram library does it: `{"id": "a"}` for a cell reference,
/// `{"x": 10, "y": 20}` for a free point, and `{}` for an endpoint that is not set yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Endpoint {
    Cell { id: String },
    Point(Point),
    /// Anything else, e.g. a freshly created link's `{}`.
    Unset {},
}

impl Endpoint {
    pub fn cell(id: impl Into<String>) -> Self {
        Endpoint::Cell { id: id.into() }
    }

    pub fn point(x: f64, y: f64) -> Self {
        Endpoint::Point(Point::new(x, y))
    }

    pub fn unset() -> Self {
        Endpoint::Unset {}
    }

    /// The referenced cell id. Empty ids count as no reference.
    pub fn id(&self) -> Option<&str> {
        match self {
            Endpoint::Cell { id } if !id.is_empty() => Some(id),
            _ => None,
        }
    }
}

/// A link whose both ends reference cells.
#[derive(Debug, Clone, Copy)]
pub struct ConnectedLink<'a> {
    pub link: &'a Link,
    pub source: &'a str,
    pub target: &'a str,
}

impl<'a> ConnectedLink<'a> {
    pub fn id(&self) -> &'a str {
        &self.link.id
    }
}
