use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use roadroute_cli::output::OutputFormat;
use roadroute_lib::{load_road_map, resolve_data_dir, DatasetPaths, LoaderConfig, RoadMap};

mod commands;

use commands::landmark::handle_landmark_command;
use commands::route::{handle_route_command, RouteCommandArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Fastest-time routing between named places on a road network")]
struct Cli {
    /// Directory holding noder.txt, kanter.txt and interessepkt.txt.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Override the node table path.
    #[arg(long, global = true)]
    nodes: Option<PathBuf>,

    /// Override the edge table path.
    #[arg(long, global = true)]
    edges: Option<PathBuf>,

    /// Override the interest-point table path.
    #[arg(long, global = true)]
    interest_points: Option<PathBuf>,

    /// Accept ',' as the decimal separator in coordinates.
    #[arg(long, global = true)]
    decimal_comma: bool,

    /// Reject tables with data after the declared record count.
    #[arg(long, global = true)]
    strict_counts: bool,

    /// Output format for summaries.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the fastest route between two landmark names.
    Route {
        /// Starting landmark name.
        #[arg(long = "from")]
        from: String,
        /// Destination landmark name.
        #[arg(long = "to")]
        to: String,
        /// Write the waypoint CSV here instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Maximum number of waypoints kept in the CSV.
        #[arg(long, default_value_t = roadroute_lib::DEFAULT_MAX_WAYPOINTS)]
        max_waypoints: usize,
    },
    /// Show the node, coordinates and categories behind a landmark name.
    Landmark {
        /// Landmark name to look up.
        name: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let map = load_map(&cli)?;

    match &cli.command {
        Command::Route {
            from,
            to,
            output,
            max_waypoints,
        } => {
            let args = RouteCommandArgs {
                from: from.clone(),
                to: to.clone(),
                output: output.clone(),
                max_waypoints: *max_waypoints,
            };
            handle_route_command(&map, cli.format, &args)
        }
        Command::Landmark { name } => handle_landmark_command(&map, cli.format, name),
    }
}

fn dataset_paths(cli: &Cli) -> Result<DatasetPaths> {
    let data_dir =
        resolve_data_dir(cli.data_dir.as_deref()).context("failed to resolve data directory")?;
    let mut paths = DatasetPaths::in_dir(&data_dir);
    if let Some(nodes) = &cli.nodes {
        paths.nodes = nodes.clone();
    }
    if let Some(edges) = &cli.edges {
        paths.edges = edges.clone();
    }
    if let Some(points) = &cli.interest_points {
        paths.interest_points = points.clone();
    }
    Ok(paths)
}

fn load_map(cli: &Cli) -> Result<RoadMap> {
    let paths = dataset_paths(cli)?;
    let config = LoaderConfig {
        decimal_comma: cli.decimal_comma,
        strict_counts: cli.strict_counts,
    };

    let started = Instant::now();
    let map = load_road_map(&paths, &config).with_context(|| {
        format!(
            "failed to load road network from {}",
            paths
                .nodes
                .parent()
                .map(|dir| dir.display().to_string())
                .unwrap_or_else(|| paths.nodes.display().to_string())
        )
    })?;
    info!(
        nodes = map.graph.node_count(),
        edges = map.graph.edge_count(),
        landmarks = map.landmarks.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "road network loaded"
    );
    Ok(map)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
