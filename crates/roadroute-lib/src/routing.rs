//! Route planning between named landmarks.
//!
//! This module provides:
//! - [`RouteRequest`] - landmark names plus output options
//! - [`RoutePlan`] - cost, full node path and simplified waypoints
//! - [`plan_route`] - resolves names, runs the search, reconstructs and simplifies
//!
//! # Example
//!
//! ```ignore
//! use roadroute_lib::{load_road_map, plan_route, DatasetPaths, LoaderConfig, RouteRequest};
//!
//! let map = load_road_map(&DatasetPaths::in_dir("data/norden".as_ref()), &LoaderConfig::default())?;
//! let plan = plan_route(&map, &RouteRequest::new("Orkanger", "Trondheim"))?;
//! println!("{:?} centiseconds", plan.cost);
//! ```

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::graph::{Cost, Graph, NodeId};
use crate::loader::RoadMap;
use crate::search::{reconstruct_path, shortest_path};
use crate::simplify::{simplify, DEFAULT_MAX_WAYPOINTS};

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    /// Waypoint budget used when simplifying the path for output.
    pub max_waypoints: usize,
}

impl RouteRequest {
    /// Request with the default waypoint budget.
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            max_waypoints: DEFAULT_MAX_WAYPOINTS,
        }
    }

    pub fn with_max_waypoints(mut self, max_waypoints: usize) -> Self {
        self.max_waypoints = max_waypoints;
        self
    }
}

/// Planned route returned by the library.
///
/// An unreachable goal is not an error: `cost` is `None` and both `steps` and
/// `waypoints` are empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub start: NodeId,
    pub goal: NodeId,
    /// Total travel time in hundredths of a second.
    pub cost: Option<Cost>,
    /// Every node on the fastest path, start and goal included.
    pub steps: Vec<NodeId>,
    /// Down-sampled subset of `steps` for rendering.
    pub waypoints: Vec<NodeId>,
    /// Nodes settled by the search.
    pub settled: usize,
}

impl RoutePlan {
    pub fn is_reachable(&self) -> bool {
        self.cost.is_some()
    }

    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute the fastest route between two nodes and simplify it.
pub fn plan_between(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    max_waypoints: usize,
) -> Result<RoutePlan> {
    let outcome = shortest_path(graph, start, goal)?;

    let steps = match outcome.cost {
        Some(_) => reconstruct_path(start, goal, &outcome.predecessors),
        None => Vec::new(),
    };
    let waypoints = simplify(&steps, max_waypoints);
    debug!(
        start,
        goal,
        nodes = steps.len(),
        waypoints = waypoints.len(),
        "route planned"
    );

    Ok(RoutePlan {
        start,
        goal,
        cost: outcome.cost,
        steps,
        waypoints,
        settled: outcome.settled,
    })
}

/// Resolve the request's landmark names and plan the route between them.
///
/// Both names are resolved before any search starts, so an unknown name is
/// reported without touching the graph.
pub fn plan_route(map: &RoadMap, request: &RouteRequest) -> Result<RoutePlan> {
    let start = map.landmarks.node_for_name(&request.start)?;
    let goal = map.landmarks.node_for_name(&request.goal)?;

    plan_between(&map.graph, start, goal, request.max_waypoints)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hop_count_counts_edges() {
        let plan = RoutePlan {
            start: 1,
            goal: 3,
            cost: Some(12),
            steps: vec![1, 2, 3],
            waypoints: vec![1, 2, 3],
            settled: 3,
        };
        assert_eq!(plan.hop_count(), 2);
        assert!(plan.is_reachable());
    }

    #[test]
    fn unreachable_plan_has_no_hops() {
        let plan = RoutePlan {
            start: 1,
            goal: 3,
            cost: None,
            steps: Vec::new(),
            waypoints: Vec::new(),
            settled: 1,
        };
        assert_eq!(plan.hop_count(), 0);
        assert!(!plan.is_reachable());
    }

    #[test]
    fn request_defaults_to_standard_budget() {
        let request = RouteRequest::new("Orkanger", "Trondheim");
        assert_eq!(request.max_waypoints, DEFAULT_MAX_WAYPOINTS);
        assert_eq!(request.with_max_waypoints(10).max_waypoints, 10);
    }
}
