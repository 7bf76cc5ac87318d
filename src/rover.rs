//! Rover state and movement.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::direction::Direction;
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::position::Position;

/// A rover bound to a grid.
///
/// Tracks where the rover stands and which way it faces. The grid is shared,
/// never owned: the session layer holds the same `Arc` and the rover only
/// reads it to check moves.
///
/// The rover's position is valid within its grid at all times. Construction
/// rejects invalid positions and a failed move leaves the position untouched.
#[derive(Clone, Debug)]
pub struct Rover {
    position: Position,
    direction: Direction,
    grid: Arc<Grid>,
}

impl Rover {
    pub fn new(position: Position, direction: Direction, grid: Arc<Grid>) -> Result<Self> {
        grid.validate_position(position)?;
        Ok(Self {
            position,
            direction,
            grid,
        })
    }

    /// A rover at the origin facing North.
    pub fn with_defaults(grid: Arc<Grid>) -> Result<Self> {
        Self::new(Position::ORIGIN, Direction::North, grid)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn grid(&self) -> &Arc<Grid> {
        &self.grid
    }

    pub fn turn_left(&mut self) {
        self.direction = self.direction.turn_left();
    }

    pub fn turn_right(&mut self) {
        self.direction = self.direction.turn_right();
    }

    /// Steps one cell in the facing direction.
    ///
    /// The obstacle check runs before the bounds check, so an obstacle
    /// reports [`Error::ObstacleDetected`] even where bounds would also fail.
    /// On any error the rover stays where it was. A step past the `i32`
    /// range is out of bounds and reports the current position.
    pub fn move_forward(&mut self) -> Result<()> {
        let Some(candidate) = self.position.displaced(self.direction) else {
            return Err(Error::OutOfBounds(self.position));
        };

        if self.grid.has_obstacle_at(candidate) {
            return Err(Error::ObstacleDetected(candidate));
        }
        self.grid.validate_position(candidate)?;

        self.position = candidate;
        Ok(())
    }

    pub fn snapshot(&self) -> RoverSnapshot {
        RoverSnapshot {
            position: self.position,
            direction: self.direction.code().to_string(),
        }
    }

    /// Rebuilds a rover from its stored form on `grid`.
    ///
    /// Unknown direction codes fall back to North.
    pub fn from_snapshot(snapshot: &RoverSnapshot, grid: Arc<Grid>) -> Result<Self> {
        let mut code = snapshot.direction.chars();
        let direction = match (code.next(), code.next()) {
            (Some(c), None) => Direction::from_code(c),
            _ => None,
        }
        .unwrap_or_default();
        Self::new(snapshot.position, direction, grid)
    }
}

/// Stored form of a [`Rover`]: `{position: {x, y}, direction: "N"}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoverSnapshot {
    #[serde(default)]
    pub position: Position,
    #[serde(default = "default_direction_code")]
    pub direction: String,
}

fn default_direction_code() -> String {
    Direction::North.code().to_string()
}
