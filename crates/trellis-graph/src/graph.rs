//! In-memory [`Diagram`] implementation.

use crate::cell::{Cell, Link, Node};
use crate::diagram::{Cells, Diagram};
use crate::error::{GraphError, Result};
use crate::geom::Point;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered cell collection with unique ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    cells: IndexMap<String, Cell>,
}

#[derive(Serialize, Deserialize)]
struct GraphJson {
    cells: Vec<Cell>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_cell(&mut self, cell: impl Into<Cell>) -> Result<&mut Self> {
        let cell = cell.into();
        if self.cells.contains_key(cell.id()) {
            return Err(GraphError::DuplicateId {
                id: cell.id().to_string(),
            });
        }
        self.cells.insert(cell.id().to_string(), cell);
        Ok(self)
    }

    /// Adds all cells, stopping at the first duplicate id.
    pub fn add_cells<I, C>(&mut self, cells: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        for cell in cells {
            self.add_cell(cell)?;
        }
        Ok(self)
    }

    /// Removes a cell, keeping the order of the remaining ones.
    pub fn remove_cell(&mut self, id: &str) -> Option<Cell> {
        self.cells.shift_remove(id)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.cells.get(id).and_then(Cell::as_node)
    }

    pub fn link(&self, id: &str) -> Option<&Link> {
        self.cells.get(id).and_then(Cell::as_link)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Parses `{"cells": [...]}` where each cell carries a `"type"` of `"node"` or `"link"`.
    pub fn from_json(text: &str) -> Result<Self> {
        let parsed: GraphJson = serde_json::from_str(text)?;
        let mut graph = Self::new();
        graph.add_cells(parsed.cells)?;
        Ok(graph)
    }

    pub fn to_json(&self) -> Result<String> {
        let out = GraphJson {
            cells: self.cells.values().cloned().collect(),
        };
        Ok(serde_json::to_string(&out)?)
    }
}

impl Diagram for Graph {
    fn cells(&self) -> Cells<'_> {
        Box::new(self.cells.values())
    }

    fn cell(&self, id: &str) -> Option<&Cell> {
        self.cells.get(id)
    }

    fn set_position(&mut self, id: &str, position: Point) -> bool {
        match self.cells.get_mut(id) {
            Some(Cell::Node(node)) => {
                node.position = position;
                true
            }
            _ => false,
        }
    }

    fn set_vertices(&mut self, id: &str, vertices: Vec<Point>) -> bool {
        match self.cells.get_mut(id) {
            Some(Cell::Link(link)) => {
                link.vertices = vertices;
                true
            }
            _ => false,
        }
    }
}
