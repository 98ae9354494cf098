//! Instrumented graph algorithms for the algoscope playback engine.
//!
//! Instead of just computing a result, every algorithm here emits an
//! ordered sequence of immutable [`Step`] snapshots that a playback
//! controller can scrub through. Generators are pure: the same graph and
//! start node always produce an identical trace, and degenerate input
//! (missing start node, empty graph) produces a two-banner no-op trace
//! rather than an error.
//!
//! # Example
//!
//! ```
//! use algoscope_model::Graph;
//! use algoscope_trace::{Algorithm, TraceGenerator};
//!
//! let graph = Graph::from_edges([("a", "b", 1), ("b", "c", 1)]);
//! let algorithm: Algorithm = "dfs".parse().unwrap();
//! let trace = algorithm.generate(&graph, "a", true);
//!
//! assert!(trace.steps().len() > 2);
//! assert!(trace.last().unwrap().finished.contains("c"));
//! ```

mod bfs;
mod dfs;
mod dijkstra;
mod floyd;
mod recorder;
mod step;
mod topo;

pub use bfs::{Bfs, BFS_PSEUDOCODE};
pub use dfs::{Dfs, DFS_PSEUDOCODE};
pub use dijkstra::{Dijkstra, DIJKSTRA_PSEUDOCODE};
pub use floyd::{FloydWarshall, FLOYD_PSEUDOCODE};
pub use recorder::Recorder;
pub use step::{Auxiliary, Dist, DistMatrix, Step, Trace};
pub use topo::{TopoSort, TOPO_PSEUDOCODE};

use enum_dispatch::enum_dispatch;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One instrumented algorithm: a pure strategy turning a graph and a start
/// node into a [`Trace`].
///
/// `directed` is honored by Dijkstra and ignored by the others: DFS,
/// Topological Sort and Floyd–Warshall always follow edge direction, BFS
/// always explores the symmetric view.
#[enum_dispatch]
pub trait TraceGenerator {
    fn generate(&self, graph: &algoscope_model::Graph, start: &str, directed: bool) -> Trace;

    /// The pseudocode listing that [`Step::line`] indexes into.
    fn pseudocode(&self) -> &'static [&'static str];

    /// Caption for the auxiliary side panel, when the algorithm has one.
    fn auxiliary_label(&self) -> Option<&'static str>;
}

/// The fixed algorithm selection the UI offers.
#[enum_dispatch(TraceGenerator)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Dfs(Dfs),
    Bfs(Bfs),
    TopoSort(TopoSort),
    Dijkstra(Dijkstra),
    FloydWarshall(FloydWarshall),
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Dfs(Dfs),
        Algorithm::Bfs(Bfs),
        Algorithm::TopoSort(TopoSort),
        Algorithm::Dijkstra(Dijkstra),
        Algorithm::FloydWarshall(FloydWarshall),
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm {0:?}, expected one of dfs, bfs, topo, dijkstra, floyd")]
pub struct ParseAlgorithmError(String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dfs" => Ok(Dfs.into()),
            "bfs" => Ok(Bfs.into()),
            "topo" => Ok(TopoSort.into()),
            "dijkstra" => Ok(Dijkstra.into()),
            "floyd" => Ok(FloydWarshall.into()),
            other => Err(ParseAlgorithmError(other.to_owned())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Algorithm::Dfs(_) => "dfs",
            Algorithm::Bfs(_) => "bfs",
            Algorithm::TopoSort(_) => "topo",
            Algorithm::Dijkstra(_) => "dijkstra",
            Algorithm::FloydWarshall(_) => "floyd",
        };
        f.write_str(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoscope_model::Graph;
    use test_log::test;

    #[test]
    fn tokens_round_trip() {
        for algorithm in Algorithm::ALL {
            let token = algorithm.to_string();
            assert_eq!(token.parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        let err = "prim".parse::<Algorithm>().unwrap_err();
        assert!(err.to_string().contains("prim"));
    }

    #[test]
    fn every_algorithm_handles_empty_input() {
        let graph = Graph::default();
        for algorithm in Algorithm::ALL {
            let trace = algorithm.generate(&graph, "start", true);
            assert_eq!(trace.len(), 2, "{algorithm} should emit banners only");
            assert!(trace.steps().iter().all(|s| s.is_banner()));
        }
    }

    #[test]
    fn every_line_indexes_its_pseudocode() {
        let graph = Graph::from_edges([("0", "1", 4), ("0", "2", 1), ("2", "1", 2)]);
        for algorithm in Algorithm::ALL {
            let listing = algorithm.pseudocode();
            assert!(!listing.is_empty());
            for step in algorithm.generate(&graph, "0", true).steps() {
                if let Some(line) = step.line {
                    assert!(line < listing.len(), "{algorithm} line {line} in range");
                }
            }
        }
    }

    #[test]
    fn traces_remember_their_origin() {
        let graph = Graph::from_edges([("a", "b", 1)]);
        let trace = Algorithm::Dfs(Dfs).generate(&graph, "a", true);
        assert_eq!(trace.algorithm(), Algorithm::Dfs(Dfs));
        assert_eq!(trace.start(), "a");
    }
}
