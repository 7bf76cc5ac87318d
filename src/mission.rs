//! Session service tying the rover core to its stored state.

use parking_lot::Mutex;
use rand::{RngCore, SeedableRng};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::MissionConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::interpreter::{CommandExecutor, CommandParser, ExecutionReport};
use crate::repository::{
    InMemoryMapRepository, InMemoryRoverRepository, MapRepository, MemoryStore, RoverRepository,
};
use crate::rover::Rover;

/// Map settings as requested; missing fields take the session defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSettings {
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub obstacle_probability: Option<f64>,
}

/// Map settings after defaults have been filled in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfiguration {
    pub width: i32,
    pub height: i32,
    pub obstacle_probability: f64,
}

/// Loads, drives and stores the single rover and its map.
///
/// Each public operation runs one load/modify/save cycle under a single lock,
/// so concurrent callers never interleave their reads and writes of the
/// stored snapshots. The lock also guards the obstacle rng. Configure only
/// holds it to draw a seed and to store the result; the new map is rolled
/// outside it.
pub struct MissionControl {
    config: MissionConfig,
    maps: Arc<dyn MapRepository>,
    rovers: Arc<dyn RoverRepository>,
    parser: CommandParser,
    executor: CommandExecutor,
    rng: Mutex<StdRng>,
}

impl MissionControl {
    pub fn new(
        config: MissionConfig,
        maps: Arc<dyn MapRepository>,
        rovers: Arc<dyn RoverRepository>,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            maps,
            rovers,
            parser: CommandParser::new(),
            executor: CommandExecutor::new(),
            rng: Mutex::new(rng),
        }
    }

    /// A session over a fresh [`MemoryStore`].
    pub fn in_memory(config: MissionConfig) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(
            config,
            Arc::new(InMemoryMapRepository::new(store.clone())),
            Arc::new(InMemoryRoverRepository::new(store)),
        )
    }

    pub fn config(&self) -> &MissionConfig {
        &self.config
    }

    /// The current rover, initializing the mission if none is stored.
    pub fn rover(&self) -> Result<Rover> {
        let mut rng = self.rng.lock();
        self.load_or_initialize(&mut rng)
    }

    /// Parses `commands` and runs them against the stored rover.
    ///
    /// A parse failure returns before any state is read or written. Otherwise
    /// the map and the rover are saved after the batch, whether or not it
    /// halted early.
    pub fn execute(&self, commands: &str) -> Result<ExecutionReport> {
        let parsed = self.parser.parse(commands)?;

        let mut rng = self.rng.lock();
        let mut rover = self.load_or_initialize(&mut rng)?;
        let report = self.executor.execute(&mut rover, &parsed)?;

        self.maps.save(rover.grid())?;
        self.rovers.save(&rover)?;

        if report.halted() {
            warn!(
                commands,
                steps = report.steps.len(),
                position = %report.final_position,
                "command batch halted"
            );
        } else {
            info!(
                commands,
                steps = report.steps.len(),
                position = %report.final_position,
                direction = %report.final_direction,
                "command batch completed"
            );
        }
        Ok(report)
    }

    /// Replaces the map with a freshly generated one and resets the rover.
    ///
    /// Maps larger than [`MissionConfig::max_cells`] are rejected and leave
    /// the stored state as it was.
    pub fn configure(&self, settings: MapSettings) -> Result<MapConfiguration> {
        let resolved = MapConfiguration {
            width: settings.width.unwrap_or(self.config.default_width),
            height: settings.height.unwrap_or(self.config.default_height),
            obstacle_probability: settings
                .obstacle_probability
                .unwrap_or(self.config.default_obstacle_probability),
        };

        let mut grid = Grid::new(
            resolved.width,
            resolved.height,
            Some(resolved.obstacle_probability),
        )?;
        self.config.check_map_size(&grid)?;

        let seed = self.rng.lock().next_u64();
        grid.initialize(&mut StdRng::seed_from_u64(seed))?;

        let _session = self.rng.lock();
        let rover = self.place_rover(grid)?;

        info!(
            width = resolved.width,
            height = resolved.height,
            obstacle_probability = resolved.obstacle_probability,
            obstacles = rover.grid().obstacle_count(),
            "map configured"
        );
        Ok(resolved)
    }

    fn load_or_initialize(&self, rng: &mut StdRng) -> Result<Rover> {
        let grid = match self.maps.load()? {
            Some(grid) => grid,
            None => {
                debug!("no map on record, storing default map");
                let grid = self.default_grid()?;
                self.maps.save(&grid)?;
                grid
            }
        };

        if let Some(rover) = self.rovers.load(Arc::new(grid))? {
            return Ok(rover);
        }

        info!("no rover on record, initializing mission");
        let mut grid = self.default_grid()?;
        grid.initialize(rng)?;
        self.place_rover(grid)
    }

    /// Puts a rover at the configured start pose on `grid` and stores both.
    ///
    /// The start cell is always cleared of obstacles.
    fn place_rover(&self, mut grid: Grid) -> Result<Rover> {
        if grid.remove_obstacle(self.config.start_position) {
            debug!(position = %self.config.start_position, "cleared obstacle at start cell");
        }
        let rover = Rover::new(
            self.config.start_position,
            self.config.start_direction,
            Arc::new(grid),
        )?;
        self.maps.save(rover.grid())?;
        self.rovers.save(&rover)?;
        Ok(rover)
    }

    fn default_grid(&self) -> Result<Grid> {
        let grid = Grid::new(
            self.config.default_width,
            self.config.default_height,
            Some(self.config.default_obstacle_probability),
        )?;
        self.config.check_map_size(&grid)?;
        Ok(grid)
    }
}
