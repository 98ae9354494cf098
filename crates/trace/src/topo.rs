use crate::recorder::Recorder;
use crate::step::{Auxiliary, Trace};
use crate::TraceGenerator;
use algoscope_model::Graph;
use tracing::debug;

/// Topological sort via DFS finish times.
///
/// Only the component reachable from the start node is ordered; everything
/// else stays out of the output list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TopoSort;

pub const TOPO_PSEUDOCODE: &[&str] = &[
    "topo(u):",
    "  mark u as visited",
    "  for each neighbor v of u:",
    "    if v is already visited, skip it",
    "    else topo(v)",
    "  mark u as finished",
    "  prepend u to the ordering",
];

impl TraceGenerator for TopoSort {
    fn generate(&self, graph: &Graph, start: &str, _directed: bool) -> Trace {
        let mut rec = Recorder::new(Auxiliary::Output(Vec::new()));

        if !graph.contains(start) {
            rec.banner(format!("start node {start:?} is not in the graph"));
            rec.banner("nothing to sort");
            return Trace::new(TopoSort.into(), start, rec.into_steps());
        }

        rec.banner(format!("topological sort from {start}"));
        visit(graph, start, &mut rec);
        rec.banner("topological sort complete");

        let steps = rec.into_steps();
        debug!(steps = steps.len(), start, "generated topological sort trace");
        Trace::new(TopoSort.into(), start, steps)
    }

    fn pseudocode(&self) -> &'static [&'static str] {
        TOPO_PSEUDOCODE
    }

    fn auxiliary_label(&self) -> Option<&'static str> {
        Some("Ordering:")
    }
}

fn visit(graph: &Graph, u: &str, rec: &mut Recorder) {
    rec.mark_visited(u);
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

    rec.mark_finished(u);
    rec.prepend_output(u);
    rec.step(Some(u), Some(6), format!("finish {u} and prepend it to the ordering"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn orders_a_chain() {
        let graph = Graph::from_edges([("a", "b", 1), ("b", "c", 1)]);
        let trace = TopoSort.generate(&graph, "a", true);
        let last = trace.last().expect("has steps");
        assert_eq!(
            last.auxiliary,
            Auxiliary::Output(vec!["a".to_owned(), "b".to_owned(), "c".to_owned()])
        );
    }

    #[test]
    fn output_respects_every_reachable_edge() {
        let graph = Graph::from_edges([
            ("a", "b", 1),
            ("a", "c", 1),
            ("c", "b", 1),
            ("b", "d", 1),
        ]);
        let trace = TopoSort.generate(&graph, "a", true);
        let Auxiliary::Output(order) = &trace.last().expect("has steps").auxiliary else {
            panic!("topological traces carry an output list");
        };

        let position = |n: &str| order.iter().position(|id| id == n).expect("ordered");
        for (from, to) in [("a", "b"), ("a", "c"), ("c", "b"), ("b", "d")] {
            assert!(position(from) < position(to), "{from} before {to}");
        }
    }

    #[test]
    fn only_the_reachable_component_is_sorted() {
        let graph = Graph::from_edges([("a", "b", 1), ("x", "y", 1)]);
        let trace = TopoSort.generate(&graph, "a", true);
        let Auxiliary::Output(order) = &trace.last().expect("has steps").auxiliary else {
            panic!("topological traces carry an output list");
        };
        assert_eq!(order, &["a".to_owned(), "b".to_owned()]);
    }

    #[test]
    fn is_deterministic() {
        let graph = Graph::from_edges([("a", "b", 1), ("a", "c", 1)]);
        assert_eq!(
            TopoSort.generate(&graph, "a", true),
            TopoSort.generate(&graph, "a", true)
        );
    }

    #[test]
    fn missing_start_is_a_noop_trace() {
        let trace = TopoSort.generate(&Graph::default(), "a", true);
        assert_eq!(trace.len(), 2);
    }
}
