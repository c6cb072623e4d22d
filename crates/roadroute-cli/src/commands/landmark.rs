//! Landmark command handler for inspecting a single name.

use std::io;

use anyhow::{Context, Result};

use roadroute_lib::{Error as RouteError, RoadMap};

use roadroute_cli::output::{
    format_unknown_landmark_message, write_landmark_report, LandmarkReport, OutputFormat,
};

pub fn handle_landmark_command(map: &RoadMap, format: OutputFormat, name: &str) -> Result<()> {
    let node = map.landmarks.node_for_name(name).map_err(|err| match err {
        RouteError::UnknownLandmark { name, suggestions } => {
            anyhow::anyhow!(format_unknown_landmark_message(&name, &suggestions))
        }
        other => anyhow::Error::new(other),
    })?;
    let position = map.graph.node(node).context("landmark refers to a missing node")?;

    let report = LandmarkReport {
        name: name.to_string(),
        node,
        latitude: position.latitude,
        longitude: position.longitude,
        points: map.landmarks.points_at(node).to_vec(),
    };
    write_landmark_report(&report, format, io::stdout().lock())
        .context("failed to write landmark report")
}
