//! Turns a command string into rover motion.
//!
//! [`CommandParser`] maps each character to a [`Command`] up front, so a bad
//! character rejects the whole batch before the rover moves.
//! [`CommandExecutor`] then applies the commands in order and records one
//! [`StepOutcome`] per attempted command, halting at the first failure.

use crate::command::Command;
use crate::direction::Direction;
use crate::error::{Error, Result};
use crate::position::Position;
use crate::rover::Rover;

/// Parses raw command strings.
#[derive(Clone, Copy, Debug, Default)]
pub struct CommandParser;

impl CommandParser {
    pub fn new() -> Self {
        Self
    }

    /// Maps every character of `commands` to a [`Command`].
    ///
    /// Matching is case-insensitive. The first unknown character fails the
    /// whole parse with [`Error::InvalidCommand`]; no partial list is returned.
    pub fn parse(&self, commands: &str) -> Result<Vec<Command>> {
        commands
            .chars()
            .map(|c| Command::from_symbol(c).ok_or(Error::InvalidCommand(c.to_ascii_uppercase())))
            .collect()
    }
}

/// Result of applying one command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The command succeeded; the rover's pose afterwards.
    Completed {
        position: Position,
        direction: Direction,
    },
    /// A move was blocked by the obstacle at this position.
    ObstacleDetected(Position),
    /// A move would have left the grid.
    OutOfBounds,
}

impl StepOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, StepOutcome::Completed { .. })
    }
}

/// Everything a batch produced: the per-step outcomes and the final pose.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionReport {
    pub steps: Vec<StepOutcome>,
    pub final_position: Position,
    pub final_direction: Direction,
}

impl ExecutionReport {
    /// True if the batch stopped before its last command.
    pub fn halted(&self) -> bool {
        self.steps.last().is_some_and(|s| !s.is_success())
    }
}

/// Applies parsed commands to a rover with fail-fast semantics.
#[derive(Clone, Copy, Debug, Default)]
pub struct CommandExecutor;

impl CommandExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Runs `commands` against `rover` in order.
    ///
    /// An obstacle or an out-of-bounds move is recorded as the final step and
    /// ends the batch; the remaining commands are not applied and nothing is
    /// retried. The final pose is reported either way.
    ///
    /// Errors other than those two cannot come out of a rover command and are
    /// propagated as-is.
    pub fn execute(&self, rover: &mut Rover, commands: &[Command]) -> Result<ExecutionReport> {
        let mut steps = Vec::with_capacity(commands.len());

        for command in commands {
            match command.apply(rover) {
                Ok(()) => steps.push(StepOutcome::Completed {
                    position: rover.position(),
                    direction: rover.direction(),
                }),
                Err(Error::ObstacleDetected(at)) => {
                    steps.push(StepOutcome::ObstacleDetected(at));
                    break;
                }
                Err(Error::OutOfBounds(_)) => {
                    steps.push(StepOutcome::OutOfBounds);
                    break;
                }
                Err(other) => return Err(other),
            }
        }

        Ok(ExecutionReport {
            steps,
            final_position: rover.position(),
            final_direction: rover.direction(),
        })
    }
}
