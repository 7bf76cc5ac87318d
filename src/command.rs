//! Rover commands.

use crate::error::Result;
use crate::rover::Rover;

/// A single instruction the rover understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Step one cell forward (`M`).
    MoveForward,
    /// Rotate 90 degrees counter-clockwise (`L`).
    TurnLeft,
    /// Rotate 90 degrees clockwise (`R`).
    TurnRight,
}

impl Command {
    /// Applies the command to `rover`.
    ///
    /// Turns never fail. A move surfaces whatever the rover reports.
    pub fn apply(&self, rover: &mut Rover) -> Result<()> {
        match self {
            Command::MoveForward => rover.move_forward(),
            Command::TurnLeft => {
                rover.turn_left();
                Ok(())
            }
            Command::TurnRight => {
                rover.turn_right();
                Ok(())
            }
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Command::MoveForward => 'M',
            Command::TurnLeft => 'L',
            Command::TurnRight => 'R',
        }
    }

    /// Looks up a command by its symbol, ignoring case.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'M' => Some(Command::MoveForward),
            'L' => Some(Command::TurnLeft),
            'R' => Some(Command::TurnRight),
            _ => None,
        }
    }
}
