//! Route command handler for computing the fastest path between landmarks.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use roadroute_lib::{
    plan_route, write_waypoints_csv, write_waypoints_file, Error as RouteError, RoadMap,
    RouteRequest, RouteSummary,
};

use roadroute_cli::output::{format_unknown_landmark_message, write_route_summary, OutputFormat};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting landmark name.
    pub from: String,
    /// Destination landmark name.
    pub to: String,
    /// Destination for the waypoint CSV; stdout when absent.
    pub output: Option<PathBuf>,
    /// Upper bound on kept waypoints before the final node is appended.
    pub max_waypoints: usize,
}

impl RouteCommandArgs {
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::new(self.from.clone(), self.to.clone())
            .with_max_waypoints(self.max_waypoints)
    }
}

/// Plan a route and emit its waypoints and summary.
///
/// With `--output` the CSV goes to that file and the summary to stdout.
/// Otherwise text mode streams the CSV on stdout with the summary on stderr,
/// and JSON mode prints only the summary, which already carries coordinates.
pub fn handle_route_command(
    map: &RoadMap,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let request = args.to_request();

    let started = Instant::now();
    let plan = plan_route(map, &request).map_err(handle_route_failure)?;
    info!(
        from = %request.start,
        to = %request.goal,
        reachable = plan.is_reachable(),
        settled = plan.settled,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "route search finished"
    );

    let summary = RouteSummary::from_plan(&map.graph, &request, &plan)
        .context("failed to build route summary for display")?;

    match &args.output {
        Some(path) => {
            write_waypoints_file(&map.graph, &plan.waypoints, path)
                .with_context(|| format!("failed to write waypoints to {}", path.display()))?;
            info!(path = %path.display(), waypoints = plan.waypoints.len(), "waypoints written");
            write_route_summary(&summary, format, io::stdout().lock())
        }
        None if format.is_json() => write_route_summary(&summary, format, io::stdout().lock()),
        None => {
            let mut stdout = io::stdout().lock();
            write_waypoints_csv(&map.graph, &plan.waypoints, &mut stdout)
                .context("failed to write waypoints to stdout")?;
            stdout.flush()?;
            write_route_summary(&summary, format, io::stderr().lock())
        }
    }
}

fn handle_route_failure(err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownLandmark { name, suggestions } => {
            anyhow::anyhow!(format_unknown_landmark_message(&name, &suggestions))
        }
        other => anyhow::Error::new(other),
    }
}
