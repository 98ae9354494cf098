use crate::recorder::Recorder;
use crate::step::{Auxiliary, Trace};
use crate::TraceGenerator;
use algoscope_model::Graph;
use std::collections::VecDeque;
use tracing::debug;

/// Breadth-first search over the symmetric view of the graph.
///
/// BFS deliberately ignores edge direction: exploration, and the layered
/// layout that mirrors it, treat the graph as undirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bfs;

pub const BFS_PSEUDOCODE: &[&str] = &[
    "bfs(s):",
    "  mark s as visited and enqueue it",
    "  while the queue is not empty:",
    "    u = dequeue",
    "    for each neighbor v of u:",
    "      if v is already visited, skip it",
    "      else mark v as visited and enqueue it",
    "    mark u as finished",
];

impl TraceGenerator for Bfs {
    fn generate(&self, graph: &Graph, start: &str, _directed: bool) -> Trace {
        let mut rec = Recorder::new(Auxiliary::Queue(VecDeque::new()));

        if !graph.contains(start) {
            rec.banner(format!("start node {start:?} is not in the graph"));
            rec.banner("nothing to traverse");
            return Trace::new(Bfs.into(), start, rec.into_steps());
        }

        let graph = graph.symmetric();

        rec.banner(format!("breadth-first search from {start}"));
        rec.mark_visited(start);
        rec.enqueue(start);
        rec.step(Some(start), Some(1), format!("mark {start} visited and enqueue it"));

        while let Some(u) = rec.dequeue() {
            rec.step(Some(&u), Some(3), format!("dequeue {u}"));

            for edge in graph.edges(&u) {
                let v = edge.to.as_str();
                rec.step(Some(&u), Some(4), format!("inspect edge {u} -- {v}"));
                if rec.is_discovered(v) {
                    rec.step(Some(&u), Some(5), format!("{v} is already visited, skip"));
                } else {
                    rec.mark_visited(v);
                    rec.enqueue(v);
                    rec.step(Some(v), Some(6), format!("mark {v} visited and enqueue it"));
                }
            }

            rec.mark_finished(&u);
            rec.step(Some(&u), Some(7), format!("finish {u}"));
        }
        rec.banner("breadth-first search complete");

        let steps = rec.into_steps();
        debug!(steps = steps.len(), start, "generated bfs trace");
        Trace::new(Bfs.into(), start, steps)
    }

    fn pseudocode(&self) -> &'static [&'static str] {
        BFS_PSEUDOCODE
    }

    fn auxiliary_label(&self) -> Option<&'static str> {
        Some("Queue Q:")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn is_deterministic() {
        let graph = Graph::from_edges([("a", "b", 1), ("b", "c", 1)]);
        assert_eq!(
            Bfs.generate(&graph, "a", true),
            Bfs.generate(&graph, "a", true)
        );
    }

    #[test]
    fn explores_level_by_level() {
        let graph = Graph::from_edges([
            ("s", "b", 1),
            ("s", "a", 1),
            ("a", "x", 1),
            ("b", "y", 1),
        ]);
        let trace = Bfs.generate(&graph, "s", true);
        let last = trace.last().expect("has steps");
        assert_eq!(
            last.finished_order,
            vec![
                "s".to_owned(),
                "a".to_owned(),
                "b".to_owned(),
                "x".to_owned(),
                "y".to_owned()
            ]
        );
    }

    #[test]
    fn ignores_edge_direction() {
        // Only an edge b -> a exists; starting at a still reaches b
        // because BFS runs on the symmetric view.
        let graph = Graph::from_edges([("b", "a", 1)]);
        let trace = Bfs.generate(&graph, "a", true);
        let last = trace.last().expect("has steps");
        assert!(last.finished.contains("b"));
    }

    #[test]
    fn queue_drains_by_the_end() {
        let graph = Graph::from_edges([("a", "b", 1), ("a", "c", 1)]);
        let last = Bfs.generate(&graph, "a", true).last().cloned().expect("has steps");
        assert_eq!(last.auxiliary, Auxiliary::Queue(VecDeque::new()));
        assert!(last.visited.is_empty());
    }

    #[test]
    fn missing_start_is_a_noop_trace() {
        let graph = Graph::from_edges([("a", "b", 1)]);
        let trace = Bfs.generate(&graph, "zz", true);
        assert_eq!(trace.len(), 2);
    }

    #[test]
    fn empty_graph_yields_banners_only() {
        let trace = Bfs.generate(&Graph::default(), "a", true);
        assert_eq!(trace.len(), 2);
    }
}
