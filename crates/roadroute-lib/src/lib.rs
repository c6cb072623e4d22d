//! Roadroute library entry points.
//!
//! This crate exposes helpers to locate road network files, load them into an
//! immutable graph plus landmark index, run fastest-time searches, and write
//! simplified waypoint tables. Higher-level consumers (the CLI) should only
//! depend on the functions exported here instead of reimplementing behavior.
//!

pub mod dataset;
pub mod error;
pub mod graph;
pub mod landmarks;
pub mod loader;
pub mod output;
pub mod routing;
pub mod search;
pub mod simplify;

pub use dataset::{default_data_dir, resolve_data_dir, DatasetPaths, DATA_DIR_ENV};
pub use error::{Error, Result};
pub use graph::{Cost, Edge, EdgeRecord, Graph, Node, NodeId};
pub use landmarks::{InterestCategory, InterestPoint, LandmarkIndex};
pub use loader::{load_road_map, LoaderConfig, RoadMap};
pub use output::{
    write_waypoints_csv, write_waypoints_file, RouteRenderMode, RouteSummary, TravelTime,
};
pub use routing::{plan_between, plan_route, RoutePlan, RouteRequest};
pub use search::{reconstruct_path, shortest_path, Predecessors, SearchOutcome};
pub use simplify::{simplify, DEFAULT_MAX_WAYPOINTS};
