//! Error taxonomy shared by the grid, the rover and the command layer.

use thiserror::Error;

use crate::position::Position;

/// Everything that can go wrong while configuring a grid or driving a rover.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Bad grid dimensions or an obstacle probability outside `[0, 1]`.
    #[error("{0}")]
    InvalidConfiguration(String),

    /// A position that lies outside the grid.
    #[error("Position {0} is outside planet map boundaries")]
    OutOfBounds(Position),

    /// A forward move blocked by an obstacle at the carried position.
    #[error("Obstacle detected at {0}")]
    ObstacleDetected(Position),

    /// A character that is not a known command.
    #[error("Invalid command: {0}")]
    InvalidCommand(char),

    /// A stored snapshot could not be encoded or decoded.
    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Snapshot(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
