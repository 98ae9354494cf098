use crate::step::{Auxiliary, Dist, DistMatrix, Step};
use algoscope_model::NodeId;
use std::collections::{BTreeMap, BTreeSet};

/// Owns the in-flight algorithm state and turns it into [`Step`]s.
///
/// Generators mutate state only through the typed helpers below and call
/// [`Recorder::step`] at every meaningful point; `step` is the one place a
/// snapshot is taken, deep-copying everything so the emitted `Step` can
/// never alias live state.
#[derive(Debug, Default)]
pub struct Recorder {
    visited: BTreeSet<NodeId>,
    finished: BTreeSet<NodeId>,
    finished_order: Vec<NodeId>,
    auxiliary: Auxiliary,
    distances: Option<BTreeMap<NodeId, Dist>>,
    predecessors: Option<BTreeMap<NodeId, NodeId>>,
    matrix: Option<DistMatrix>,
    steps: Vec<Step>,
}

impl Recorder {
    pub fn new(auxiliary: Auxiliary) -> Self {
        Self {
            auxiliary,
            ..Default::default()
        }
    }

    /// A recorder tracking a distance table over `nodes`, all starting at
    /// infinity, plus a predecessor map.
    pub fn with_distances<'a>(auxiliary: Auxiliary, nodes: impl Iterator<Item = &'a str>) -> Self {
        Self {
            auxiliary,
            distances: Some(nodes.map(|n| (n.to_owned(), Dist::Infinity)).collect()),
            predecessors: Some(BTreeMap::new()),
            ..Default::default()
        }
    }

    /// A recorder tracking an all-pairs distance matrix.
    pub fn with_matrix(matrix: DistMatrix) -> Self {
        Self {
            matrix: Some(matrix),
            ..Default::default()
        }
    }

    /// Record a snapshot of the current state.
    pub fn step(&mut self, current: Option<&str>, line: Option<usize>, status: impl Into<String>) {
        self.steps.push(Step {
            visited: self.visited.clone(),
            finished: self.finished.clone(),
            finished_order: self.finished_order.clone(),
            auxiliary: self.auxiliary.clone(),
            current: current.map(str::to_owned),
            line,
            status: status.into(),
            distances: self.distances.clone(),
            predecessors: self.predecessors.clone(),
            matrix: self.matrix.clone(),
        });
    }

    /// Record a start/end bookkeeping banner.
    pub fn banner(&mut self, status: impl Into<String>) {
        self.step(None, None, status);
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }

    // White -> gray -> black bookkeeping

    pub fn mark_visited(&mut self, node: &str) {
        self.visited.insert(node.to_owned());
    }

    pub fn mark_finished(&mut self, node: &str) {
        self.visited.remove(node);
        self.finished.insert(node.to_owned());
        self.finished_order.push(node.to_owned());
    }

    /// Whether `node` is gray or black already.
    pub fn is_discovered(&self, node: &str) -> bool {
        self.visited.contains(node) || self.finished.contains(node)
    }

    // Auxiliary structures. The typed helpers are no-ops when the recorder
    // was built with a different auxiliary variant.

    pub fn push_stack(&mut self, node: &str) {
        if let Auxiliary::Stack(stack) = &mut self.auxiliary {
            stack.push(node.to_owned());
        }
    }

    pub fn pop_stack(&mut self) {
        if let Auxiliary::Stack(stack) = &mut self.auxiliary {
            stack.pop();
        }
    }

    pub fn enqueue(&mut self, node: &str) {
        if let Auxiliary::Queue(queue) = &mut self.auxiliary {
            queue.push_back(node.to_owned());
        }
    }

    pub fn dequeue(&mut self) -> Option<NodeId> {
        match &mut self.auxiliary {
            Auxiliary::Queue(queue) => queue.pop_front(),
            _ => None,
        }
    }

    pub fn prepend_output(&mut self, node: &str) {
        if let Auxiliary::Output(output) = &mut self.auxiliary {
            output.insert(0, node.to_owned());
        }
    }

    /// Mirror the unsettled candidate list, in the given order, with the
    /// current tentative distances.
    pub fn sync_priority(&mut self, unsettled: &[NodeId]) {
        let entries = unsettled
            .iter()
            .map(|n| (n.clone(), self.dist(n)))
            .collect();
        if let Auxiliary::PriorityQueue(queue) = &mut self.auxiliary {
            *queue = entries;
        }
    }

    // Distance table

    pub fn dist(&self, node: &str) -> Dist {
        self.distances
            .as_ref()
            .and_then(|d| d.get(node))
            .copied()
            .unwrap_or(Dist::Infinity)
    }

    pub fn set_dist(&mut self, node: &str, dist: Dist) {
        if let Some(distances) = &mut self.distances {
            distances.insert(node.to_owned(), dist);
        }
    }

    pub fn set_pred(&mut self, node: &str, pred: &str) {
        if let Some(predecessors) = &mut self.predecessors {
            predecessors.insert(node.to_owned(), pred.to_owned());
        }
    }

    // Distance matrix

    pub fn cell(&self, i: usize, j: usize) -> Dist {
        self.matrix
            .as_ref()
            .and_then(|m| m.cells.get(i).and_then(|row| row.get(j)))
            .copied()
            .unwrap_or(Dist::Infinity)
    }

    pub fn pred_cell(&self, i: usize, j: usize) -> Option<NodeId> {
        self.matrix
            .as_ref()
            .and_then(|m| m.pred.get(i).and_then(|row| row.get(j)))
            .cloned()
            .flatten()
    }

    pub fn improve_cell(&mut self, i: usize, j: usize, dist: Dist, pred: Option<NodeId>) {
        if let Some(matrix) = &mut self.matrix {
            matrix.cells[i][j] = dist;
            matrix.pred[i][j] = pred;
        }
    }
}
