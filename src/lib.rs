//! # mars-rover
//!
//! A rover that drives over a bounded grid in response to command strings.
//!
//! The core is synchronous and free of I/O: a [`Grid`] with optional
//! obstacles, a [`Rover`] bound to it, and the [`CommandParser`] /
//! [`CommandExecutor`] pair that turns `"MMRMMRMM"` into motion, stopping at
//! the first blocked or out-of-bounds move.
//!
//! Around it sit the adapters: repository ports with an in-memory snapshot
//! store, the [`MissionControl`] session service, and an axum HTTP API in
//! [`api`].

pub mod api;
pub mod command;
pub mod config;
pub mod direction;
pub mod error;
pub mod grid;
pub mod interpreter;
pub mod mission;
pub mod position;
pub mod repository;
pub mod rover;

pub use command::*;
pub use config::*;
pub use direction::*;
pub use error::*;
pub use grid::*;
pub use interpreter::*;
pub use mission::*;
pub use position::*;
pub use repository::*;
pub use rover::*;
