//! Wire types exchanged with the layout engine.
//!
//! Field names follow the KLay JSON graph format: a root graph with `children` (nodes) and
//! `edges`; results add `x`/`y` to nodes and `sourcePoint`/`targetPoint`/`bendPoints` to edges.

use crate::options::LayoutOptions;
use serde::{Deserialize, Serialize};
use trellis_graph::Point;

pub const ROOT_ID: &str = "root";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestGraph {
    pub id: String,
    pub children: Vec<RequestNode>,
    pub edges: Vec<RequestEdge>,
}

impl Default for RequestGraph {
    fn default() -> Self {
        Self {
            id: ROOT_ID.to_string(),
            children: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl RequestGraph {
    /// An empty graph with the root id.
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestNode {
    pub id: String,
    pub width: f64,
    pub height: f64,
    /// Reserved for compound nodes; always empty here.
    pub children: Vec<RequestNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// What gets handed to the engine: the graph plus the options it should honor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRequest {
    pub graph: RequestGraph,
    pub options: LayoutOptions,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultGraph {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub children: Vec<ResultNode>,
    #[serde(default)]
    pub edges: Vec<ResultEdge>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultNode {
    pub id: String,
    /// Computed top-left corner. Nodes the engine did not place are left where they are.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ResultNode>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEdge {
    pub id: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_point: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_point: Option<Point>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bend_points: Vec<Point>,
}
