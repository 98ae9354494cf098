//! Deterministic graph layout for the algoscope diagram.
//!
//! This crate positions nodes for rendering from nothing but the adjacency
//! structure. It works with any graph implementing petgraph's visitor
//! traits; algoscope feeds it the symmetric projection of its graph model.
//!
//! # Layout Engines
//!
//! - [`LayeredLayout`]: breadth-first layered layout where the layer index
//!   becomes the column and nodes spread evenly inside the column.
//!
//! # Example
//!
//! ```
//! use algoscope_layout::{LayeredLayout, LayoutEngine};
//! use petgraph::graphmap::DiGraphMap;
//!
//! // Create a graph
//! let mut graph = DiGraphMap::new();
//! graph.add_edge("a", "b", ());
//! graph.add_edge("a", "c", ());
//!
//! let engine = LayeredLayout::default();
//!
//! // Use the LayoutEngine trait (simple, single-phase):
//! let positions = engine.layout(&graph, Some("a"));
//! assert_eq!(positions.len(), 3);
//!
//! // Or call each phase for better control
//! let layers = engine.compute_layers(&graph, Some("a"));
//! let positions = engine.compute_positions(&layers);
//! assert_eq!(positions.len(), 3);
//! ```

mod engine;
mod geometry;

pub mod layered;

// Re-export core types and traits
pub use engine::LayoutEngine;
pub use geometry::{Point, Vec2};

// Re-export petgraph visitor traits for graph abstraction
pub use petgraph::visit::{GraphBase, IntoNeighbors, IntoNodeIdentifiers};

// Re-export layered layout types
pub use layered::{LayeredLayout, Layers};
