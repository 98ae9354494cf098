use crate::recorder::Recorder;
use crate::step::{Auxiliary, Dist, Trace};
use crate::TraceGenerator;
use algoscope_model::{natural_cmp, Graph, NodeId};
use tracing::debug;

/// Single-source shortest paths with a re-sorted candidate list standing in
/// for a priority queue. Graphs stay small enough that the O(V²) re-sort is
/// preferable to a real heap: the sorted list is exactly what the side
/// panel displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dijkstra;

pub const DIJKSTRA_PSEUDOCODE: &[&str] = &[
    "dijkstra(s):",
    "  dist[s] = 0, dist[v] = ∞ for every other v",
    "  while unsettled nodes remain:",
    "    u = unsettled node with the smallest dist",
    "    for each neighbor v of u:",
    "      if dist[u] + w(u, v) < dist[v]:",
    "        dist[v] = dist[u] + w(u, v), prev[v] = u",
    "    settle u",
];

impl TraceGenerator for Dijkstra {
    fn generate(&self, graph: &Graph, start: &str, directed: bool) -> Trace {
        let mut rec = Recorder::with_distances(Auxiliary::PriorityQueue(Vec::new()), graph.nodes());

        if !graph.contains(start) {
            rec.banner(format!("start node {start:?} is not in the graph"));
            rec.banner("nothing to relax");
            return Trace::new(Dijkstra.into(), start, rec.into_steps());
        }

        let symmetrized;
        let graph = if directed {
            graph
        } else {
            symmetrized = graph.symmetric();
            &symmetrized
        };

        rec.banner(format!("shortest paths from {start}"));
        rec.set_dist(start, Dist::ZERO);

        let mut unsettled: Vec<NodeId> = graph.nodes().map(str::to_owned).collect();
        rec.sync_priority(&unsettled);
        rec.step(
            Some(start),
            Some(1),
            format!("initialize distances, dist[{start}] = 0"),
        );

        while !unsettled.is_empty() {
            // Stand-in priority queue: re-sort the whole candidate list by
            // tentative distance before every extraction.
            unsettled.sort_by(|a, b| rec.dist(a).cmp(&rec.dist(b)).then_with(|| natural_cmp(a, b)));
            rec.sync_priority(&unsettled);

            if !rec.dist(&unsettled[0]).is_finite() {
                rec.step(
                    None,
                    Some(2),
                    "remaining nodes are unreachable, stop",
                );
                break;
            }

            let u = unsettled.remove(0);
            rec.sync_priority(&unsettled);
            rec.mark_visited(&u);
            rec.step(
                Some(&u),
                Some(3),
                format!("extract {u} with dist {}", rec.dist(&u)),
            );

            for edge in graph.edges(&u) {
                let v = edge.to.as_str();
                let through = rec.dist(&u) + edge.weight;
                let known = rec.dist(v);
                if through < known {
                    rec.set_dist(v, through);
                    rec.set_pred(v, &u);
                    rec.sync_priority(&unsettled);
                    rec.step(
                        Some(v),
                        Some(6),
                        format!(
                            "{} + {} < {known}: set dist[{v}] = {through}, prev[{v}] = {u}",
                            rec.dist(&u),
                            edge.weight
                        ),
                    );
                } else {
                    rec.step(
                        Some(v),
                        Some(5),
                        format!(
                            "{} + {} >= {known}: keep dist[{v}]",
                            rec.dist(&u),
                            edge.weight
                        ),
                    );
                }
            }

            rec.mark_finished(&u);
            rec.step(Some(&u), Some(7), format!("settle {u}"));
        }
        rec.banner("shortest paths complete");

        let steps = rec.into_steps();
        debug!(steps = steps.len(), start, directed, "generated dijkstra trace");
        Trace::new(Dijkstra.into(), start, steps)
    }

    fn pseudocode(&self) -> &'static [&'static str] {
        DIJKSTRA_PSEUDOCODE
    }

    fn auxiliary_label(&self) -> Option<&'static str> {
        Some("Unsettled:")
    }
}
