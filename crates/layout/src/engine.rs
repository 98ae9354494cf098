use crate::Point;
use std::collections::HashMap;
use std::hash::Hash;

/// A layout engine that can compute positions for graph nodes
///
/// This trait is generic over the graph type `G`, allowing different layout
/// engines to work with different graph types. Layout computation is
/// infallible: degenerate inputs (empty graph, unknown root) produce
/// degenerate-but-valid outputs rather than errors.
pub trait LayoutEngine<G> {
    /// The type used to identify nodes in the graph
    type NodeId: Copy + Ord + Hash;

    /// Compute node positions for the given graph.
    ///
    /// `root` anchors the traversal; when it is `None` or not a node of
    /// `graph`, the engine falls back to the first node the graph yields.
    fn layout(&self, graph: G, root: Option<Self::NodeId>) -> HashMap<Self::NodeId, Point>;
}
