use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Dense node identifier in `[0, node_count)`.
pub type NodeId = usize;

/// Traversal cost in hundredths of a second.
pub type Cost = u64;

/// Geographic coordinate of a road-network node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Node {
    pub latitude: f64,
    pub longitude: f64,
}

/// Raw directed edge as read from the edge table, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRecord {
    pub from: NodeId,
    pub to: NodeId,
    /// Signed so that negative costs in the input can be detected and rejected.
    pub cost: i64,
    pub length_m: u32,
    pub speed_limit_kmh: u32,
}

/// Edge within an adjacency list.
///
/// In the forward list `target` is the destination; in the reverse list it is
/// the source of the original edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: NodeId,
    pub cost: Cost,
    pub length_m: u32,
    pub speed_limit_kmh: u32,
}

/// Immutable road-network graph shared by all queries.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Arc<Vec<Node>>,
    forward: Arc<Vec<Vec<Edge>>>,
    reverse: Arc<Vec<Vec<Edge>>>,
    edge_count: usize,
}

impl Graph {
    /// Build a graph from node coordinates (indexed by id) and edge records.
    ///
    /// Every edge endpoint must reference an existing node and every cost must
    /// be non-negative. Parallel edges and self-loops are kept as-is.
    pub fn from_records(nodes: Vec<Node>, edges: &[EdgeRecord]) -> Result<Self> {
        let node_count = nodes.len();
        let mut forward: Vec<Vec<Edge>> = vec![Vec::new(); node_count];
        let mut reverse: Vec<Vec<Edge>> = vec![Vec::new(); node_count];

        for (index, record) in edges.iter().enumerate() {
            for endpoint in [record.from, record.to] {
                if endpoint >= node_count {
                    return Err(Error::malformed(
                        "edge table",
                        format!(
                            "edge #{index} references node {endpoint}, but only {node_count} nodes exist"
                        ),
                    ));
                }
            }
            if record.cost < 0 {
                return Err(Error::NegativeEdgeCost {
                    from: record.from,
                    to: record.to,
                    cost: record.cost,
                });
            }

            let cost = record.cost as Cost;
            forward[record.from].push(Edge {
                target: record.to,
                cost,
                length_m: record.length_m,
                speed_limit_kmh: record.speed_limit_kmh,
            });
            reverse[record.to].push(Edge {
                target: record.from,
                cost,
                length_m: record.length_m,
                speed_limit_kmh: record.speed_limit_kmh,
            });
        }

        debug!(nodes = node_count, edges = edges.len(), "built road graph");

        Ok(Self {
            nodes: Arc::new(nodes),
            forward: Arc::new(forward),
            reverse: Arc::new(reverse),
            edge_count: edges.len(),
        })
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges, parallel edges included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id < self.nodes.len()
    }

    /// Coordinates of a node, if the id is in range.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Outgoing edges of `id`. Unknown ids have no neighbours.
    pub fn neighbours(&self, id: NodeId) -> &[Edge] {
        self.forward.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Incoming edges of `id`, with `target` holding the edge's source node.
    pub fn incoming(&self, id: NodeId) -> &[Edge] {
        self.reverse.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Fail with [`Error::InvalidNode`] unless `id` is a node of this graph.
    pub fn check_node(&self, id: NodeId) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(Error::InvalidNode {
                id,
                node_count: self.node_count(),
            })
        }
    }
}
