use petgraph::visit::{IntoNeighbors, IntoNodeIdentifiers};
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Assign layers to nodes by breadth-first depth from `root`.
///
/// Within a layer, nodes keep the graph's iteration order. Nodes the
/// traversal never reaches are appended to layer 0 after the root, so
/// disconnected graphs still place every node.
pub(crate) fn assign_layers<G>(graph: G, root: Option<G::NodeId>) -> Vec<Vec<G::NodeId>>
where
    G: IntoNodeIdentifiers + IntoNeighbors,
    G::NodeId: Copy + Ord + Hash,
{
    let order: Vec<G::NodeId> = graph.node_identifiers().collect();
    let Some(&first) = order.first() else {
        return Vec::new();
    };
    let root = root
        .filter(|candidate| order.contains(candidate))
        .unwrap_or(first);

    let mut depth: HashMap<G::NodeId, usize> = HashMap::new();
    let mut frontier = VecDeque::new();
    depth.insert(root, 0);
    frontier.push_back(root);
    while let Some(node) = frontier.pop_front() {
        let next = depth[&node] + 1;
        for succ in graph.neighbors(node) {
            if !depth.contains_key(&succ) {
                depth.insert(succ, next);
                frontier.push_back(succ);
            }
        }
    }

    let deepest = depth.values().copied().max().unwrap_or(0);
    let mut layers = vec![Vec::new(); deepest + 1];
    for &node in &order {
        if let Some(&layer) = depth.get(&node) {
            layers[layer].push(node);
        }
    }
    for &node in &order {
        if !depth.contains_key(&node) {
            layers[0].push(node);
        }
    }

    layers
}
