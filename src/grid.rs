//! The bounded planet surface a rover drives on.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::position::Position;

/// The bounded rectangular area hosting the rover and its obstacles.
///
/// Valid cells run from `0` to `width` and `0` to `height` *inclusive*, so a
/// grid has `(width + 1) * (height + 1)` cells. Obstacle membership is tracked
/// independently of validity.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: i32,
    height: i32,
    obstacle_probability: f64,
    obstacles: BTreeSet<Position>,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            obstacle_probability: Self::DEFAULT_OBSTACLE_PROBABILITY,
            obstacles: BTreeSet::new(),
        }
    }
}

impl Grid {
    pub const DEFAULT_WIDTH: i32 = 200;
    pub const DEFAULT_HEIGHT: i32 = 200;
    /// Chance that any single cell becomes an obstacle during [`initialize`](Self::initialize).
    pub const DEFAULT_OBSTACLE_PROBABILITY: f64 = 0.1;

    /// Creates an obstacle-free grid.
    ///
    /// `obstacle_probability` is only remembered for a later
    /// [`initialize`](Self::initialize); `None` keeps the default of 10%.
    pub fn new(width: i32, height: i32, obstacle_probability: Option<f64>) -> Result<Self> {
        let obstacle_probability = match obstacle_probability {
            Some(p) => check_probability(p)?,
            None => Self::DEFAULT_OBSTACLE_PROBABILITY,
        };

        if width <= 0 || height <= 0 {
            return Err(Error::InvalidConfiguration(
                "Planet map dimensions must be positive".to_string(),
            ));
        }

        Ok(Self {
            width,
            height,
            obstacle_probability,
            obstacles: BTreeSet::new(),
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn obstacle_probability(&self) -> f64 {
        self.obstacle_probability
    }

    /// All obstacle cells in ascending `(x, y)` order.
    pub fn obstacles(&self) -> impl Iterator<Item = Position> + '_ {
        self.obstacles.iter().copied()
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    /// Number of valid cells, `(width + 1) * (height + 1)`.
    pub fn cell_count(&self) -> u64 {
        (self.width as u64 + 1) * (self.height as u64 + 1)
    }

    pub fn is_valid_position(&self, position: Position) -> bool {
        (0..=self.width).contains(&position.x()) && (0..=self.height).contains(&position.y())
    }

    pub fn validate_position(&self, position: Position) -> Result<()> {
        if !self.is_valid_position(position) {
            return Err(Error::OutOfBounds(position));
        }
        Ok(())
    }

    /// Obstacle lookup. Positions off the grid are simply reported clear.
    pub fn has_obstacle_at(&self, position: Position) -> bool {
        self.obstacles.contains(&position)
    }

    pub fn add_obstacle(&mut self, position: Position) -> Result<()> {
        self.validate_position(position)?;
        self.obstacles.insert(position);
        Ok(())
    }

    /// Clears the obstacle at `position`, returning whether there was one.
    pub fn remove_obstacle(&mut self, position: Position) -> bool {
        self.obstacles.remove(&position)
    }

    /// Replaces the obstacle set by rolling every cell independently.
    ///
    /// Each cell in `[0, width] x [0, height]` becomes an obstacle with
    /// chance `probability`, drawn from `rng`.
    pub fn generate_obstacles<R: Rng + ?Sized>(&mut self, probability: f64, rng: &mut R) -> Result<()> {
        let probability = check_probability(probability)?;

        self.obstacles.clear();
        for x in 0..=self.width {
            for y in 0..=self.height {
                if rng.gen_bool(probability) {
                    self.obstacles.insert(Position::new(x, y));
                }
            }
        }
        Ok(())
    }

    /// Generates obstacles using the grid's configured probability.
    pub fn initialize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        self.generate_obstacles(self.obstacle_probability, rng)
    }

    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            width: self.width,
            height: self.height,
            obstacles: self.obstacles().collect(),
        }
    }

    /// Rebuilds a grid from its stored form.
    ///
    /// The probability is not part of the snapshot and falls back to the
    /// default. Obstacles outside the stored bounds are rejected.
    pub fn from_snapshot(snapshot: &GridSnapshot) -> Result<Self> {
        let mut grid = Self::new(snapshot.width, snapshot.height, None)?;
        for &obstacle in &snapshot.obstacles {
            grid.add_obstacle(obstacle)?;
        }
        Ok(grid)
    }
}

/// Stored form of a [`Grid`]: `{width, height, obstacles: [{x, y}, ..]}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub obstacles: Vec<Position>,
}

fn check_probability(p: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidConfiguration(
            "Obstacle probability must be between 0 and 1".to_string(),
        ));
    }
    Ok(p)
}
