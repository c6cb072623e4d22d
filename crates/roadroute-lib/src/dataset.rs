use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable that overrides the default data directory.
pub const DATA_DIR_ENV: &str = "ROADROUTE_DATA_DIR";

/// Default filename of the node table inside a data directory.
pub const NODES_FILENAME: &str = "noder.txt";
/// Default filename of the edge table inside a data directory.
pub const EDGES_FILENAME: &str = "kanter.txt";
/// Default filename of the interest-point table inside a data directory.
pub const INTEREST_POINTS_FILENAME: &str = "interessepkt.txt";

/// Locations of the three road network input files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub nodes: PathBuf,
    pub edges: PathBuf,
    pub interest_points: PathBuf,
}

impl DatasetPaths {
    /// Paths using the default filenames inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            nodes: dir.join(NODES_FILENAME),
            edges: dir.join(EDGES_FILENAME),
            interest_points: dir.join(INTEREST_POINTS_FILENAME),
        }
    }

    /// Fail with [`Error::DatasetNotFound`] for the first file that is missing.
    pub fn verify(&self) -> Result<()> {
        for path in [&self.nodes, &self.edges, &self.interest_points] {
            if !path.is_file() {
                return Err(Error::DatasetNotFound { path: path.clone() });
            }
        }
        Ok(())
    }
}

/// Resolve the default data directory using platform-specific project directories.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "roadroute", "roadroute").ok_or(Error::DataDirUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Pick the data directory: explicit override, then `ROADROUTE_DATA_DIR`,
/// then the platform default.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "using explicit data directory");
        return Ok(path.to_path_buf());
    }

    if let Some(value) = env::var_os(DATA_DIR_ENV).filter(|value| !value.is_empty()) {
        let path = PathBuf::from(value);
        debug!(path = %path.display(), "using data directory from {DATA_DIR_ENV}");
        return Ok(path);
    }

    let path = default_data_dir()?;
    debug!(path = %path.display(), "using platform data directory");
    Ok(path)
}
