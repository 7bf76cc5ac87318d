//! Session defaults.

use crate::direction::Direction;
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::position::Position;

/// Configuration for a [`MissionControl`](crate::mission::MissionControl) session.
#[derive(Clone, Debug)]
pub struct MissionConfig {
    /// Width of the map created on first use or when a configure request omits it.
    pub default_width: i32,
    /// Height of the map created on first use or when a configure request omits it.
    pub default_height: i32,
    /// Per-cell obstacle chance used for generated maps. Default: 0.1.
    pub default_obstacle_probability: f64,
    /// Where a freshly initialized rover starts.
    pub start_position: Position,
    /// Which way a freshly initialized rover faces.
    pub start_direction: Direction,
    /// Seed for obstacle generation. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Largest map, in cells, the session will generate. Default: 4,000,000.
    pub max_cells: u64,
}

impl MissionConfig {
    pub const DEFAULT_MAX_CELLS: u64 = 4_000_000;

    /// Rejects grids with more cells than [`max_cells`](Self::max_cells).
    pub fn check_map_size(&self, grid: &Grid) -> Result<()> {
        if grid.cell_count() > self.max_cells {
            return Err(Error::InvalidConfiguration(format!(
                "Planet map must not exceed {} cells",
                self.max_cells
            )));
        }
        Ok(())
    }
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            default_width: Grid::DEFAULT_WIDTH,
            default_height: Grid::DEFAULT_HEIGHT,
            default_obstacle_probability: Grid::DEFAULT_OBSTACLE_PROBABILITY,
            start_position: Position::ORIGIN,
            start_direction: Direction::North,
            seed: None,
            max_cells: Self::DEFAULT_MAX_CELLS,
        }
    }
}
