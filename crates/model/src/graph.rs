use crate::order::natural_cmp;
use derive_more::Constructor;
use indexmap::IndexMap;
use petgraph::graphmap::DiGraphMap;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Node identifiers are plain strings, exactly as the graph editor hands
/// them over.
pub type NodeId = String;

/// A directed, weighted edge. The weight defaults to 1 so unweighted input
/// can omit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Constructor)]
pub struct Edge {
    pub to: NodeId,
    #[serde(default = "default_weight")]
    pub weight: u64,
}

fn default_weight() -> u64 {
    1
}

/// Normalized adjacency mapping from node id to its outgoing edges.
///
/// Invariants established at construction and never broken afterwards:
/// - every node referenced as an edge target exists as a key (auto-created
///   with an empty edge list),
/// - node iteration order and each adjacency list follow
///   [`natural_cmp`](crate::order::natural_cmp).
///
/// There are no `&mut` accessors; editors replace the graph wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Graph {
    adjacency: IndexMap<NodeId, Vec<Edge>>,
}

impl Graph {
    /// Build a graph from the key -> edge-list mapping of the editor
    /// contract, normalizing as described on [`Graph`].
    pub fn from_adjacency<I>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, Vec<Edge>)>,
    {
        let mut adjacency: IndexMap<NodeId, Vec<Edge>> = adjacency.into_iter().collect();

        let targets: Vec<NodeId> = adjacency
            .values()
            .flatten()
            .map(|edge| edge.to.clone())
            .collect();
        for target in targets {
            adjacency.entry(target).or_default();
        }

        for edges in adjacency.values_mut() {
            edges.sort_by(|a, b| natural_cmp(&a.to, &b.to));
        }
        adjacency.sort_by(|ka, _, kb, _| natural_cmp(ka, kb));

        debug!(
            nodes = adjacency.len(),
            "normalized graph from adjacency input"
        );
        Self { adjacency }
    }

    /// Build a graph from `(from, to, weight)` triples.
    pub fn from_edges<S, I>(edges: I) -> Self
    where
        S: Into<NodeId>,
        I: IntoIterator<Item = (S, S, u64)>,
    {
        let mut adjacency: IndexMap<NodeId, Vec<Edge>> = IndexMap::new();
        for (from, to, weight) in edges {
            adjacency
                .entry(from.into())
                .or_default()
                .push(Edge::new(to.into(), weight));
        }
        Self::from_adjacency(adjacency)
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Node ids in natural order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.adjacency.keys().map(String::as_str)
    }

    /// The naturally-first node id, used as the layout fallback root.
    pub fn first_node(&self) -> Option<&str> {
        self.nodes().next()
    }

    /// Outgoing edges of `node` in natural target order. Unknown nodes have
    /// no edges.
    pub fn edges(&self, node: &str) -> &[Edge] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edges(from).iter().any(|edge| edge.to == to)
    }

    /// Derived undirected view: every edge (u, v, w) also appears as
    /// (v, u, w) unless some v -> u edge already exists. The receiver is
    /// left untouched.
    pub fn symmetric(&self) -> Graph {
        let mut adjacency = self.adjacency.clone();
        for (from, edges) in &self.adjacency {
            for edge in edges {
                if !self.has_edge(&edge.to, from) {
                    adjacency
                        .entry(edge.to.clone())
                        .or_default()
                        .push(Edge::new(from.clone(), edge.weight));
                }
            }
        }
        Self::from_adjacency(adjacency)
    }

    /// Project the graph onto a petgraph [`DiGraphMap`], inserting nodes
    /// and edges in natural order so downstream iteration stays
    /// deterministic. Parallel edges collapse to the last weight.
    pub fn to_graph_map(&self) -> DiGraphMap<&str, u64> {
        let mut map = DiGraphMap::new();
        for node in self.nodes() {
            map.add_node(node);
        }
        for (from, edges) in &self.adjacency {
            for edge in edges {
                map.add_edge(from.as_str(), edge.to.as_str(), edge.weight);
            }
        }
        map
    }
}

impl<'de> Deserialize<'de> for Graph {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let adjacency = IndexMap::<NodeId, Vec<Edge>>::deserialize(deserializer)?;
        Ok(Self::from_adjacency(adjacency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn sample() -> Graph {
        Graph::from_edges([("a", "10", 1), ("a", "2", 1), ("a", "1", 1), ("10", "a", 3)])
    }

    #[test]
    fn targets_are_auto_created() {
        let graph = sample();
        assert!(graph.contains("1"));
        assert!(graph.contains("2"));
        assert!(graph.edges("1").is_empty());
        assert_eq!(graph.node_count(), 4);
    }

    #[test]
    fn nodes_and_edges_follow_natural_order() {
        let graph = sample();
        assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!["1", "2", "10", "a"]);
        let targets: Vec<_> = graph.edges("a").iter().map(|e| e.to.as_str()).collect();
        assert_eq!(targets, vec!["1", "2", "10"]);
        assert_eq!(graph.first_node(), Some("1"));
    }

    #[test]
    fn symmetric_adds_missing_mirrors_only() {
        let graph = sample();
        let sym = graph.symmetric();

        // a -> 10 already has the reverse 10 -> a(3); both weights survive.
        assert_eq!(sym.edges("10").len(), 1);
        assert_eq!(sym.edges("10")[0].weight, 3);
        // a -> 1 had no reverse; the mirror carries the same weight.
        assert_eq!(sym.edges("1"), &[Edge::new("a".to_owned(), 1)]);

        // The original is untouched.
        assert!(graph.edges("1").is_empty());
    }

    #[test]
    fn graph_map_projection_keeps_weights() {
        let graph = sample();
        let map = graph.to_graph_map();
        assert_eq!(map.node_count(), 4);
        assert_eq!(map.edge_weight("10", "a"), Some(&3));
        assert_eq!(map.edge_weight("a", "2"), Some(&1));
        assert_eq!(map.edge_weight("2", "a"), None);
    }

    #[test]
    fn deserializes_the_editor_contract() {
        let graph: Graph = ron::from_str(
            r#"{
                "a": [(to: "b", weight: 2), (to: "c")],
                "b": [(to: "c", weight: 5)],
            }"#,
        )
        .expect("valid graph text");

        assert_eq!(graph.node_count(), 3);
        // Omitted weight defaults to 1.
        assert_eq!(graph.edges("a")[1].to, "c");
        assert_eq!(graph.edges("a")[1].weight, 1);
        assert_eq!(graph.edges("a")[0].weight, 2);
    }

    #[test]
    fn serializes_back_to_the_same_shape() {
        let graph = Graph::from_edges([("a", "b", 2)]);
        let text = ron::to_string(&graph).expect("serializable");
        let back: Graph = ron::from_str(&text).expect("round-trips");
        assert_eq!(graph, back);
    }

    #[test]
    fn empty_graph() {
        let graph = Graph::default();
        assert!(graph.is_empty());
        assert_eq!(graph.first_node(), None);
        assert!(graph.edges("anything").is_empty());
    }
}
