//! Integer grid coordinates.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::direction::Direction;

/// An immutable cell coordinate on the grid.
///
/// Backed by a [`glam::IVec2`] so displacement is plain vector addition.
/// Serializes as `{"x": .., "y": ..}`, the layout used by the HTTP surface
/// and the stored snapshots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "PositionRepr", into = "PositionRepr")]
pub struct Position(IVec2);

impl Position {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self(IVec2::ZERO);

    pub const fn new(x: i32, y: i32) -> Self {
        Self(IVec2::new(x, y))
    }

    pub fn x(&self) -> i32 {
        self.0.x
    }

    pub fn y(&self) -> i32 {
        self.0.y
    }

    /// Returns the neighbouring cell one step towards `direction`, or `None`
    /// if that cell is not representable.
    pub fn displaced(self, direction: Direction) -> Option<Self> {
        let delta = direction.delta();
        Some(Self::new(
            self.x().checked_add(delta.x)?,
            self.y().checked_add(delta.y)?,
        ))
    }
}

// Column-major: x first, then y. Keeps obstacle sets in scan order.
impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x().cmp(&other.x()).then(self.y().cmp(&other.y()))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

/// Wire form of a [`Position`].
///
/// Missing coordinates default to zero, matching how older snapshots were read.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
struct PositionRepr {
    #[serde(default)]
    x: i32,
    #[serde(default)]
    y: i32,
}

impl From<PositionRepr> for Position {
    fn from(r: PositionRepr) -> Self {
        Self::new(r.x, r.y)
    }
}

impl From<Position> for PositionRepr {
    fn from(p: Position) -> Self {
        Self { x: p.x(), y: p.y() }
    }
}
