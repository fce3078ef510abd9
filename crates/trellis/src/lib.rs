#![forbid(unsafe_code)]

//! Bridge between a diagram cell model and an external KLay-style layout engine.
//!
//! A layout pass exports the diagram's nodes and connected links into the engine's JSON graph
//! format, awaits the engine, and writes the computed node positions (and optionally link
//! routes) back onto the diagram. The engine itself is opaque; see [`LayoutEngine`].
//!
//! APIs are runtime-agnostic: nothing here spawns tasks or needs a specific executor.

pub mod engine;
pub mod error;
pub mod export;
pub mod import;
pub mod kgraph;
pub mod layout;
pub mod options;
pub mod strategy;

pub use engine::{EngineError, FnEngine, JsonEngine, LayoutEngine, from_fn, from_json_fn};
pub use error::{Error, Result};
pub use export::{ExportStats, export_graph};
pub use import::{ImportStats, edge_vertices, import_graph};
pub use kgraph::{
    LayoutRequest, ROOT_ID, RequestEdge, RequestGraph, RequestNode, ResultEdge, ResultGraph,
    ResultNode,
};
pub use layout::{Layout, LayoutHandle, LayoutReport, LayoutState, run_layout};
pub use options::{Direction, EdgeRouting, LayoutOptions, LayoutOptionsOverrides};
pub use strategy::{ConversionStrategy, DefaultStrategy};

pub use trellis_graph as graph;
