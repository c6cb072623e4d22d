use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::error::Result;
use crate::graph::{Cost, Graph, NodeId};

/// Per-query record of which node each visited node was reached from.
///
/// Stored densely, indexed by node id; `None` means "no predecessor". The
/// start node never has an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predecessors {
    links: Vec<Option<NodeId>>,
}

impl Predecessors {
    /// An empty map sized for a graph with `node_count` nodes.
    pub fn with_node_count(node_count: usize) -> Self {
        Self {
            links: vec![None; node_count],
        }
    }

    /// Predecessor recorded for `node`, if any.
    pub fn get(&self, node: NodeId) -> Option<NodeId> {
        self.links.get(node).copied().flatten()
    }

    /// A map for `node_count` nodes filled from `(node, predecessor)` links.
    /// Links naming an id outside `[0, node_count)` are skipped.
    pub fn from_links(
        node_count: usize,
        links: impl IntoIterator<Item = (NodeId, NodeId)>,
    ) -> Self {
        let mut predecessors = Self::with_node_count(node_count);
        for (node, from) in links {
            if from < node_count {
                predecessors.set(node, from);
            }
        }
        predecessors
    }

    /// Record (or overwrite) the predecessor of `node`. Ids outside the map
    /// are ignored.
    pub(crate) fn set(&mut self, node: NodeId, from: NodeId) {
        if let Some(link) = self.links.get_mut(node) {
            *link = Some(from);
        }
    }

    /// Number of nodes with a recorded predecessor.
    pub fn len(&self) -> usize {
        self.links.iter().filter(|link| link.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.links.iter().all(Option::is_none)
    }

    /// Upper bound on the length of any valid predecessor chain.
    fn capacity(&self) -> usize {
        self.links.len()
    }
}

/// Result of a single-source, single-target search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Total cost to the target, or `None` when the target is unreachable.
    pub cost: Option<Cost>,
    pub predecessors: Predecessors,
    /// Number of nodes settled before the search stopped.
    pub settled: usize,
}

impl SearchOutcome {
    pub fn is_reachable(&self) -> bool {
        self.cost.is_some()
    }
}

/// Run Dijkstra's algorithm from `start` until `end` is settled.
///
/// Both endpoints must be nodes of `graph`; otherwise the call fails with
/// [`crate::Error::InvalidNode`] before any work is done. An unreachable
/// target is a normal outcome reported through `cost: None`.
pub fn shortest_path(graph: &Graph, start: NodeId, end: NodeId) -> Result<SearchOutcome> {
    graph.check_node(start)?;
    graph.check_node(end)?;

    let node_count = graph.node_count();
    let mut predecessors = Predecessors::with_node_count(node_count);
    let mut visited = vec![false; node_count];
    let mut best = vec![Cost::MAX; node_count];
    let mut queue = BinaryHeap::new();
    let mut settled = 0usize;

    best[start] = 0;
    queue.push(QueueEntry::new(start, 0));

    while let Some(entry) = queue.pop() {
        if visited[entry.node] {
            continue;
        }
        visited[entry.node] = true;
        settled += 1;

        if entry.node == end {
            debug!(start, end, cost = entry.cost, settled, "target settled");
            return Ok(SearchOutcome {
                cost: Some(entry.cost),
                predecessors,
                settled,
            });
        }

        for edge in graph.neighbours(entry.node) {
            let next = edge.target;
            if visited[next] {
                continue;
            }

            let next_cost = entry.cost.saturating_add(edge.cost);
            if next_cost < best[next] {
                best[next] = next_cost;
                predecessors.set(next, entry.node);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    debug!(start, end, settled, "queue exhausted without reaching target");
    Ok(SearchOutcome {
        cost: None,
        predecessors,
        settled,
    })
}

/// Walk predecessor links back from `end` and return the path `start..=end`.
///
/// Returns an empty vector when the chain breaks before reaching `start`,
/// which is how "no path" is distinguished from the single-node path
/// `[start]` produced when `start == end`.
pub fn reconstruct_path(start: NodeId, end: NodeId, predecessors: &Predecessors) -> Vec<NodeId> {
    let mut path = vec![end];
    let mut current = end;

    while current != start {
        let Some(previous) = predecessors.get(current) else {
            return Vec::new();
        };
        // A chain longer than the map itself can only come from a cycle.
        if path.len() > predecessors.capacity() {
            return Vec::new();
        }
        path.push(previous);
        current = previous;
    }

    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeId,
    cost: Cost,
}

impl QueueEntry {
    fn new(node: NodeId, cost: Cost) -> Self {
        Self { node, cost }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
