//! Normalized graph model for the algoscope workspace.
//!
//! Every other crate consumes the [`Graph`] defined here: the trace
//! generators walk its adjacency lists, the layout engine receives its
//! petgraph projection, and the editor collaborators hand graphs over as
//! the serialized key -> edge-list mapping.
//!
//! A `Graph` is normalized on construction and immutable afterwards:
//! referenced-but-missing nodes are auto-created, and both the node set and
//! every adjacency list are kept in [natural order](order::natural_cmp) so
//! that traversals are deterministic.

pub mod graph;
pub mod order;

pub use graph::{Edge, Graph, NodeId};
pub use order::natural_cmp;
