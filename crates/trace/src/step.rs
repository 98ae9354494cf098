use crate::Algorithm;
use algoscope_model::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::ops::Add;

/// A distance that may be unreachable. `Infinity` sorts after every finite
/// value and addition saturates into it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
pub enum Dist {
    #[display("{_0}")]
    Finite(u64),
    #[display("∞")]
    Infinity,
}

impl Dist {
    pub const ZERO: Dist = Dist::Finite(0);

    pub fn is_finite(self) -> bool {
        matches!(self, Dist::Finite(_))
    }
}

impl From<u64> for Dist {
    fn from(value: u64) -> Self {
        Dist::Finite(value)
    }
}

impl Add for Dist {
    type Output = Dist;

    fn add(self, rhs: Dist) -> Dist {
        match (self, rhs) {
            (Dist::Finite(a), Dist::Finite(b)) => Dist::Finite(a.saturating_add(b)),
            _ => Dist::Infinity,
        }
    }
}

impl Add<u64> for Dist {
    type Output = Dist;

    fn add(self, rhs: u64) -> Dist {
        self + Dist::Finite(rhs)
    }
}

/// Algorithm-specific side-panel snapshot carried by every [`Step`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Auxiliary {
    #[default]
    None,
    /// DFS call stack, bottom first
    Stack(Vec<NodeId>),
    /// BFS frontier, front first
    Queue(VecDeque<NodeId>),
    /// Dijkstra candidates with tentative distances, closest first
    PriorityQueue(Vec<(NodeId, Dist)>),
    /// Topological-sort output list, already in final order
    Output(Vec<NodeId>),
}

/// All-pairs distance state for Floyd–Warshall steps.
///
/// `cells[i][j]` is the distance from `order[i]` to `order[j]`;
/// `pred[i][j]` the predecessor of `order[j]` on that path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistMatrix {
    pub order: Vec<NodeId>,
    pub cells: Vec<Vec<Dist>>,
    pub pred: Vec<Vec<Option<NodeId>>>,
}

impl DistMatrix {
    pub fn index_of(&self, node: &str) -> Option<usize> {
        self.order.iter().position(|id| id == node)
    }

    pub fn dist(&self, from: &str, to: &str) -> Dist {
        match (self.index_of(from), self.index_of(to)) {
            (Some(i), Some(j)) => self.cells[i][j],
            _ => Dist::Infinity,
        }
    }
}

/// One immutable snapshot of algorithm state.
///
/// Steps never alias live state: every collection is deep-copied when the
/// step is recorded, so replaying a step renders identically no matter how
/// far the trace has advanced since.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Nodes currently in progress (gray)
    pub visited: BTreeSet<NodeId>,
    /// Nodes fully processed (black)
    pub finished: BTreeSet<NodeId>,
    /// Order nodes were finished in
    pub finished_order: Vec<NodeId>,
    pub auxiliary: Auxiliary,
    /// The node the step is centered on
    pub current: Option<NodeId>,
    /// Index into the algorithm's pseudocode listing; `None` marks a
    /// bookkeeping banner
    pub line: Option<usize>,
    /// Human-readable description of what just happened
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distances: Option<BTreeMap<NodeId, Dist>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predecessors: Option<BTreeMap<NodeId, NodeId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix: Option<DistMatrix>,
}

impl Step {
    /// Whether this is a start/end banner rather than a pseudocode step.
    pub fn is_banner(&self) -> bool {
        self.line.is_none()
    }
}

/// The full ordered step sequence produced for one
/// (graph, algorithm, start node) combination. Read-only after generation;
/// a new graph, algorithm or start node triggers full regeneration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    algorithm: Algorithm,
    start: NodeId,
    steps: Vec<Step>,
}

impl Trace {
    pub fn new(algorithm: Algorithm, start: impl Into<NodeId>, steps: Vec<Step>) -> Self {
        Self {
            algorithm,
            start: start.into(),
            steps,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn dist_orders_infinity_last() {
        assert!(Dist::Finite(u64::MAX) < Dist::Infinity);
        assert!(Dist::Finite(2) < Dist::Finite(10));
        assert_eq!(
            [Dist::Infinity, Dist::Finite(3), Dist::ZERO]
                .into_iter()
                .min(),
            Some(Dist::ZERO)
        );
    }

    #[test]
    fn dist_addition_saturates() {
        assert_eq!(Dist::Finite(2) + 3, Dist::Finite(5));
        assert_eq!(Dist::Infinity + 3, Dist::Infinity);
        assert_eq!(Dist::Finite(u64::MAX) + 1, Dist::Finite(u64::MAX));
    }

    #[test]
    fn dist_displays_infinity_sign() {
        assert_eq!(Dist::Finite(7).to_string(), "7");
        assert_eq!(Dist::Infinity.to_string(), "∞");
    }

    #[test]
    fn step_round_trips_through_ron() {
        let step = Step {
            visited: BTreeSet::from(["a".to_owned()]),
            finished: BTreeSet::new(),
            finished_order: Vec::new(),
            auxiliary: Auxiliary::Stack(vec!["a".to_owned()]),
            current: Some("a".to_owned()),
            line: Some(1),
            status: "visit a".to_owned(),
            distances: None,
            predecessors: None,
            matrix: None,
        };
        let text = ron::to_string(&step).expect("serializable");
        let back: Step = ron::from_str(&text).expect("round-trips");
        assert_eq!(step, back);
    }
}
