use crate::recorder::Recorder;
use crate::step::{Auxiliary, Trace};
use crate::TraceGenerator;
use algoscope_model::Graph;
use tracing::debug;

/// Depth-first search with an explicit call-stack mirror in the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dfs;

pub const DFS_PSEUDOCODE: &[&str] = &[
    "dfs(u):",
    "  mark u as visited",
    "  for each neighbor v of u:",
    "    if v is already visited, skip it",
    "    else dfs(v)",
    "  mark u as finished",
];

impl TraceGenerator for Dfs {
    fn generate(&self, graph: &Graph, start: &str, _directed: bool) -> Trace {
        let mut rec = Recorder::new(Auxiliary::Stack(Vec::new()));

        if !graph.contains(start) {
            rec.banner(format!("start node {start:?} is not in the graph"));
            rec.banner("nothing to traverse");
            return Trace::new(Dfs.into(), start, rec.into_steps());
        }

        rec.banner(format!("depth-first search from {start}"));
        visit(graph, start, &mut rec);
        rec.banner("depth-first search complete");

        let steps = rec.into_steps();
        debug!(steps = steps.len(), start, "generated dfs trace");
        Trace::new(Dfs.into(), start, steps)
    }

    fn pseudocode(&self) -> &'static [&'static str] {
        DFS_PSEUDOCODE
    }

    fn auxiliary_label(&self) -> Option<&'static str> {
        Some("Stack:")
    }
}

fn visit(graph: &Graph, u: &str, rec: &mut Recorder) {
    rec.mark_visited(u);
    rec.push_stack(u);
    rec.step(Some(u), Some(1), format!("visit {u}"));

    for edge in graph.edges(u) {
        let v = edge.to.as_str();
        rec.step(Some(u), Some(2), format!("inspect edge {u} -> {v}"));
        if rec.is_discovered(v) {
            rec.step(Some(u), Some(3), format!("{v} is already visited, skip"));
        } else {
            visit(graph, v, rec);
            rec.step(Some(u), Some(4), format!("backtrack to {u} from {v}"));
        }
    }

    rec.pop_stack();
    rec.mark_finished(u);
    rec.step(Some(u), Some(5), format!("finish {u}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn chain() -> Graph {
        Graph::from_edges([("a", "b", 1), ("b", "c", 1), ("a", "c", 1)])
    }

    #[test]
    fn is_deterministic() {
        let graph = chain();
        let one = Dfs.generate(&graph, "a", true);
        let two = Dfs.generate(&graph, "a", true);
        assert_eq!(one, two);
    }

    #[test]
    fn neighbors_explored_in_natural_order() {
        let graph = Graph::from_edges([("s", "10", 1), ("s", "2", 1), ("s", "1", 1)]);
        let trace = Dfs.generate(&graph, "s", true);
        let last = trace.last().expect("has steps");
        assert_eq!(
            last.finished_order,
            vec!["1".to_owned(), "2".to_owned(), "10".to_owned(), "s".to_owned()]
        );
    }

    #[test]
    fn reachable_nodes_all_finish() {
        let graph = chain();
        let last = Dfs.generate(&graph, "a", true).last().cloned().expect("has steps");
        for node in ["a", "b", "c"] {
            assert!(last.finished.contains(node));
        }
        assert!(last.visited.is_empty());
        assert_eq!(last.auxiliary, Auxiliary::Stack(Vec::new()));
    }

    #[test]
    fn finished_order_is_append_only() {
        let graph = chain();
        let trace = Dfs.generate(&graph, "a", true);
        let mut previous: &[String] = &[];
        for step in trace.steps() {
            assert!(step.finished_order.starts_with(previous));
            previous = &step.finished_order;
        }
    }

    #[test]
    fn nodes_are_visited_before_finishing() {
        let graph = chain();
        let trace = Dfs.generate(&graph, "a", true);
        for node in ["a", "b", "c"] {
            let first_finished = trace
                .steps()
                .iter()
                .position(|s| s.finished.contains(node))
                .expect("finishes");
            let first_visited = trace
                .steps()
                .iter()
                .position(|s| s.visited.contains(node))
                .expect("visits");
            assert!(first_visited < first_finished);
        }
    }

    #[test]
    fn skipped_neighbors_still_get_a_step() {
        // a -> b -> c and a -> c: c is reached through b first, so the
        // direct a -> c edge is inspected and skipped.
        let graph = chain();
        let trace = Dfs.generate(&graph, "a", true);
        assert!(trace
            .steps()
            .iter()
            .any(|s| s.status == "c is already visited, skip"));
    }

    #[test]
    fn missing_start_is_a_noop_trace() {
        let graph = chain();
        let trace = Dfs.generate(&graph, "nope", true);
        assert_eq!(trace.len(), 2);
        assert!(trace.steps().iter().all(|s| s.is_banner()));
    }

    #[test]
    fn empty_graph_yields_banners_only() {
        let trace = Dfs.generate(&Graph::default(), "a", true);
        assert_eq!(trace.len(), 2);
    }

    #[test]
    fn lines_index_into_the_pseudocode() {
        let graph = chain();
        let trace = Dfs.generate(&graph, "a", true);
        for step in trace.steps() {
            if let Some(line) = step.line {
                assert!(line < DFS_PSEUDOCODE.len());
            }
        }
    }
}
