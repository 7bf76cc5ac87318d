//! Request and response bodies.

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::interpreter::{ExecutionReport, StepOutcome};
use crate::mission::MapConfiguration;
use crate::position::Position;
use crate::rover::Rover;

/// Where the rover is and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoverState {
    pub position: Position,
    pub direction: Direction,
}

impl From<&Rover> for RoverState {
    fn from(rover: &Rover) -> Self {
        Self {
            position: rover.position(),
            direction: rover.direction(),
        }
    }
}

/// Body of `POST /rover/command`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandRequest {
    /// Command characters, e.g. `"MMRMMRMM"`. Missing means no commands.
    #[serde(default)]
    pub commands: String,
}

/// Outcome of one command as reported to the client.
///
/// Successful steps carry the new pose. An obstacle carries the blocked
/// position. Out-of-bounds carries neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

impl From<StepOutcome> for StepResult {
    fn from(outcome: StepOutcome) -> Self {
        match outcome {
            StepOutcome::Completed {
                position,
                direction,
            } => Self {
                success: true,
                error: None,
                position: Some(position),
                direction: Some(direction),
            },
            StepOutcome::ObstacleDetected(at) => Self {
                success: false,
                error: Some("Obstacle detected".to_string()),
                position: Some(at),
                direction: None,
            },
            StepOutcome::OutOfBounds => Self {
                success: false,
                error: Some("Out of bounds".to_string()),
                position: None,
                direction: None,
            },
        }
    }
}

/// Response of `POST /rover/command`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResponse {
    pub result: Vec<StepResult>,
    pub final_state: RoverState,
}

impl From<ExecutionReport> for CommandResponse {
    fn from(report: ExecutionReport) -> Self {
        Self {
            result: report.steps.into_iter().map(StepResult::from).collect(),
            final_state: RoverState {
                position: report.final_position,
                direction: report.final_direction,
            },
        }
    }
}

/// Response of `POST /mars/configure`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigureResponse {
    pub success: bool,
    pub message: String,
    pub config: MapConfiguration,
}

/// Response of the health check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}
