mod layers;
mod positions;

use crate::{LayoutEngine, Point, Vec2};
use petgraph::visit::{IntoNeighbors, IntoNodeIdentifiers};
use std::collections::HashMap;
use std::hash::Hash;
use tracing::debug;

use layers::assign_layers;
use positions::assign_coordinates;

/// Configuration for the breadth-first layered layout
#[derive(Debug, Clone)]
pub struct LayeredLayout {
    /// Horizontal distance between consecutive layers
    pub column_width: f32,

    /// Vertical span a layer's nodes are distributed across
    pub vertical_span: f32,

    /// Offset applied to every position
    pub origin: Vec2,
}

impl Default for LayeredLayout {
    fn default() -> Self {
        Self {
            column_width: 160.0,
            vertical_span: 600.0,
            origin: Vec2::zero(),
        }
    }
}

impl LayeredLayout {
    /// Create a new layered layout with the given column width and span
    pub fn new(column_width: f32, vertical_span: f32) -> Self {
        Self {
            column_width,
            vertical_span,
            ..Default::default()
        }
    }
}

/// Layer structure that can be cached and reused
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layers<N>
where
    N: Copy + Ord + Hash,
{
    /// Nodes grouped by breadth-first depth from the layout root
    pub nodes: Vec<Vec<N>>,
}

impl<N> Layers<N>
where
    N: Copy + Ord + Hash,
{
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The layer index of `node`, if it was placed.
    pub fn layer_of(&self, node: N) -> Option<usize> {
        self.nodes
            .iter()
            .position(|layer| layer.contains(&node))
    }
}

impl LayeredLayout {
    /// Compute the layer structure (cache this while the graph is stable).
    ///
    /// This phase depends only on the graph structure and the chosen root.
    /// An absent root falls back to the graph's first node; an empty graph
    /// yields empty layers.
    pub fn compute_layers<G>(&self, graph: G, root: Option<G::NodeId>) -> Layers<G::NodeId>
    where
        G: IntoNodeIdentifiers + IntoNeighbors,
        G::NodeId: Copy + Ord + Hash,
    {
        let nodes = assign_layers(graph, root);
        debug!(layers = nodes.len(), "assigned layout layers");
        Layers { nodes }
    }

    /// Compute positions from cached layers (cheap, rerun when geometry
    /// settings change).
    pub fn compute_positions<N>(&self, layers: &Layers<N>) -> HashMap<N, Point>
    where
        N: Copy + Ord + Hash,
    {
        assign_coordinates(
            &layers.nodes,
            self.column_width,
            self.vertical_span,
            self.origin,
        )
    }
}

// Implement LayoutEngine for any graph with the required capabilities
impl<G> LayoutEngine<G> for LayeredLayout
where
    G: IntoNodeIdentifiers + IntoNeighbors,
    G::NodeId: Copy + Ord + Hash,
{
    type NodeId = G::NodeId;

    fn layout(&self, graph: G, root: Option<Self::NodeId>) -> HashMap<Self::NodeId, Point> {
        let layers = self.compute_layers(graph, root);
        self.compute_positions(&layers)
    }
}
