//! Map data loader.
//!
//! Maps are stored as ASCII rows inside a RON struct. Actors and items are
//! placed separately via scenario files.

use std::path::Path;

use game_core::WorldState;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Map data structure for RON files.
///
/// Legend: `#` wall, `.` floor, `*` rock, `0` boulder.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapDataRon {
    rows: Vec<String>,
}

/// Loader for map data from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load a map layout from a RON file into an empty world.
    pub fn load(path: &Path) -> LoadResult<WorldState> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load map {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<WorldState> {
        let data: MapDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        let world = WorldState::from_rows(&data.rows)?;
        tracing::debug!(
            width = world.dimensions().width,
            height = world.dimensions().height,
            "map loaded"
        );
        Ok(world)
    }
}
