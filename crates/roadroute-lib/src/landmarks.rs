//! Named interest points attached to road-network nodes.
//!
//! Interest points come from the interest-point table: a node id, a category
//! bit mask and a display name. The index answers `name -> node` lookups for
//! route endpoints and `node -> interest point` lookups for reporting.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::error::{Error, Result};
use crate::graph::NodeId;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Number of suggestions attached to [`Error::UnknownLandmark`].
const MAX_SUGGESTIONS: usize = 3;

/// Bit mask describing what kind of place an interest point is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct InterestCategory(pub u32);

impl InterestCategory {
    pub const PLACE_NAME: Self = Self(1);
    pub const GAS_STATION: Self = Self(2);
    pub const CHARGING_STATION: Self = Self(4);
    pub const EATING: Self = Self(8);
    pub const DRINKING: Self = Self(16);
    pub const ACCOMMODATION: Self = Self(32);

    const LABELS: [(Self, &'static str); 6] = [
        (Self::PLACE_NAME, "place name"),
        (Self::GAS_STATION, "gas station"),
        (Self::CHARGING_STATION, "charging station"),
        (Self::EATING, "eating"),
        (Self::DRINKING, "drinking"),
        (Self::ACCOMMODATION, "accommodation"),
    ];

    /// Whether every bit of `other` is set in this category.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Human-readable labels for the known bits, in bit order.
    pub fn labels(self) -> Vec<&'static str> {
        Self::LABELS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, label)| *label)
            .collect()
    }
}

impl fmt::Display for InterestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = self.labels();
        if labels.is_empty() {
            write!(f, "uncategorised ({})", self.0)
        } else {
            f.write_str(&labels.join(", "))
        }
    }
}

/// A named point of interest located at a graph node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterestPoint {
    pub node: NodeId,
    pub category: InterestCategory,
    pub name: String,
}

/// Lookup tables between landmark names and graph nodes.
#[derive(Debug, Clone, Default)]
pub struct LandmarkIndex {
    by_name: Arc<HashMap<String, NodeId>>,
    by_node: Arc<HashMap<NodeId, Vec<InterestPoint>>>,
}

impl LandmarkIndex {
    /// Build the index for a graph with `node_count` nodes.
    ///
    /// Node ids outside the graph are rejected. When the same name appears
    /// more than once the last point wins the name lookup; the overwrite is
    /// logged because the intent of duplicated names in the source data is
    /// unknown.
    pub fn build(points: Vec<InterestPoint>, node_count: usize) -> Result<Self> {
        let mut by_name: HashMap<String, NodeId> = HashMap::with_capacity(points.len());
        let mut by_node: HashMap<NodeId, Vec<InterestPoint>> = HashMap::new();

        for point in points {
            if point.node >= node_count {
                return Err(Error::malformed(
                    "interest point table",
                    format!(
                        "interest point '{}' references node {}, but only {} nodes exist",
                        point.name, point.node, node_count
                    ),
                ));
            }

            if let Some(previous) = by_name.insert(point.name.clone(), point.node) {
                if previous != point.node {
                    warn!(
                        name = %point.name,
                        previous,
                        replacement = point.node,
                        "duplicate landmark name; keeping the last loaded node"
                    );
                }
            }
            by_node.entry(point.node).or_default().push(point);
        }

        Ok(Self {
            by_name: Arc::new(by_name),
            by_node: Arc::new(by_node),
        })
    }

    /// Number of distinct landmark names.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Resolve a case-sensitive landmark name to its node.
    pub fn node_for_name(&self, name: &str) -> Result<NodeId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownLandmark {
                name: name.to_string(),
                suggestions: self.fuzzy_matches(name, MAX_SUGGESTIONS),
            })
    }

    /// The most recently loaded interest point at `node`.
    pub fn info_for_node(&self, node: NodeId) -> Option<&InterestPoint> {
        self.points_at(node).last()
    }

    /// All interest points located at `node`, in load order.
    pub fn points_at(&self, node: NodeId) -> &[InterestPoint] {
        self.by_node.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Names similar to `name`, best match first, at most `limit` entries.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &String)> = self
            .by_name
            .keys()
            .map(|candidate| {
                let score = strsim::jaro_winkler(&needle, &candidate.to_lowercase());
                (score, candidate)
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.clone())
            .collect()
    }
}
