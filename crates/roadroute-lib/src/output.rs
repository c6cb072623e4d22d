use std::fmt::{self, Write as _};
use std::fs::File;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Cost, Graph, Node, NodeId};
use crate::routing::{RoutePlan, RouteRequest};

/// Header row of the waypoint CSV.
pub const CSV_HEADER: [&str; 2] = ["latitude", "longitude"];

/// Travel time split into whole hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TravelTime {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TravelTime {
    /// Convert a cost in hundredths of a second, truncating the fraction.
    pub fn from_centiseconds(cost: Cost) -> Self {
        let total_seconds = cost / 100;
        Self {
            hours: total_seconds / 3600,
            minutes: (total_seconds / 60) % 60,
            seconds: total_seconds % 60,
        }
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hours, {} minutes, {} seconds",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    Json,
}

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteEndpoint {
    pub id: NodeId,
    pub name: String,
}

/// Simplified waypoint with resolved coordinates.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Waypoint {
    pub index: usize,
    pub id: NodeId,
    pub latitude: f64,
    pub longitude: f64,
}

/// Structured representation of a planned route that consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_time: Option<TravelTime>,
    /// Number of nodes on the full path.
    pub nodes: usize,
    pub settled: usize,
    pub waypoints: Vec<Waypoint>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved coordinates.
    pub fn from_plan(graph: &Graph, request: &RouteRequest, plan: &RoutePlan) -> Result<Self> {
        let waypoints = plan
            .waypoints
            .iter()
            .enumerate()
            .map(|(index, &id)| {
                let node = node_or_error(graph, id)?;
                Ok(Waypoint {
                    index,
                    id,
                    latitude: node.latitude,
                    longitude: node.longitude,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            start: RouteEndpoint {
                id: plan.start,
                name: request.start.clone(),
            },
            goal: RouteEndpoint {
                id: plan.goal,
                name: request.goal.clone(),
            },
            reachable: plan.is_reachable(),
            cost: plan.cost,
            travel_time: plan.cost.map(TravelTime::from_centiseconds),
            nodes: plan.steps.len(),
            settled: plan.settled,
            waypoints,
        })
    }

    /// Render the summary using the requested mode.
    pub fn render(&self, mode: RouteRenderMode) -> Result<String> {
        match mode {
            RouteRenderMode::PlainText => Ok(self.render_plain()),
            RouteRenderMode::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let Some(travel_time) = self.travel_time else {
            let _ = writeln!(
                buffer,
                "No route found from {} to {} ({} nodes visited)",
                self.start.name, self.goal.name, self.settled
            );
            return buffer;
        };

        let _ = writeln!(
            buffer,
            "Route from {} to {}: {}",
            self.start.name, self.goal.name, travel_time
        );
        let _ = writeln!(
            buffer,
            "{} nodes on path, {} waypoints, {} nodes visited",
            self.nodes,
            self.waypoints.len(),
            self.settled
        );
        buffer
    }
}

fn node_or_error(graph: &Graph, id: NodeId) -> Result<&Node> {
    graph.node(id).ok_or(Error::InvalidNode {
        id,
        node_count: graph.node_count(),
    })
}

/// Write `latitude,longitude` rows for each waypoint.
///
/// The header is written even when `waypoints` is empty, so an unreachable
/// route still yields a well-formed table.
pub fn write_waypoints_csv<W: io::Write>(
    graph: &Graph,
    waypoints: &[NodeId],
    writer: W,
) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for &id in waypoints {
        let node = node_or_error(graph, id)?;
        csv_writer.write_record([node.latitude.to_string(), node.longitude.to_string()])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write the waypoint CSV into it.
pub fn write_waypoints_file(graph: &Graph, waypoints: &[NodeId], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_waypoints_csv(graph, waypoints, file)
}
