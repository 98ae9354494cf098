use crate::recorder::Recorder;
use crate::step::{Dist, DistMatrix, Trace};
use crate::TraceGenerator;
use algoscope_model::Graph;
use tracing::debug;

/// All-pairs shortest paths. Every (k, i, j) comparison becomes a step
/// carrying the full matrix, so the trace is cubic in the node count.
/// Negative cycles cannot occur: edge weights are positive integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FloydWarshall;

pub const FLOYD_PSEUDOCODE: &[&str] = &[
    "floyd():",
    "  dist[i][j] = w(i, j) if an edge exists, ∞ otherwise, dist[v][v] = 0",
    "  for each pivot k:",
    "    for each i:",
    "      for each j:",
    "        if dist[i][k] + dist[k][j] < dist[i][j]:",
    "          dist[i][j] = dist[i][k] + dist[k][j]",
];

impl TraceGenerator for FloydWarshall {
    fn generate(&self, graph: &Graph, start: &str, _directed: bool) -> Trace {
        if !graph.contains(start) {
            let mut rec = Recorder::new(Default::default());
            rec.banner(format!("start node {start:?} is not in the graph"));
            rec.banner("nothing to compute");
            return Trace::new(FloydWarshall.into(), start, rec.into_steps());
        }

        let order: Vec<String> = graph.nodes().map(str::to_owned).collect();
        let mut rec = Recorder::with_matrix(initial_matrix(graph, &order));

        rec.banner("all-pairs shortest paths");
        rec.step(None, Some(1), "initialize the distance matrix from the edges");

        for (k, pivot) in order.iter().enumerate() {
            for (i, from) in order.iter().enumerate() {
                for (j, to) in order.iter().enumerate() {
                    let through = rec.cell(i, k) + rec.cell(k, j);
                    let known = rec.cell(i, j);
                    if through < known {
                        let pred = rec.pred_cell(k, j);
                        rec.improve_cell(i, j, through, pred);
                        rec.step(
                            Some(pivot),
                            Some(6),
                            format!(
                                "k = {pivot}: dist[{from}][{pivot}] + dist[{pivot}][{to}] = {through} < {known}, update dist[{from}][{to}]"
                            ),
                        );
                    } else {
                        rec.step(
                            Some(pivot),
                            Some(5),
                            format!(
                                "k = {pivot}: dist[{from}][{pivot}] + dist[{pivot}][{to}] = {through} >= {known}, keep dist[{from}][{to}]"
                            ),
                        );
                    }
                }
            }
        }
        rec.banner("all-pairs shortest paths complete");

        let steps = rec.into_steps();
        debug!(steps = steps.len(), nodes = order.len(), "generated floyd-warshall trace");
        Trace::new(FloydWarshall.into(), start, steps)
    }

    fn pseudocode(&self) -> &'static [&'static str] {
        FLOYD_PSEUDOCODE
    }

    fn auxiliary_label(&self) -> Option<&'static str> {
        None
    }
}

fn initial_matrix(graph: &Graph, order: &[String]) -> DistMatrix {
    let n = order.len();
    let mut cells = vec![vec![Dist::Infinity; n]; n];
    let mut pred = vec![vec![None; n]; n];

    for (i, from) in order.iter().enumerate() {
        cells[i][i] = Dist::ZERO;
        for edge in graph.edges(from) {
            if let Some(j) = order.iter().position(|id| id == &edge.to) {
                cells[i][j] = Dist::Finite(edge.weight);
                pred[i][j] = Some(from.clone());
            }
        }
    }

    DistMatrix {
        order: order.to_vec(),
        cells,
        pred,
    }
}
