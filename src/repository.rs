//! Persistence ports for the map and the rover, plus an in-memory backend.
//!
//! The session layer only sees [`MapRepository`] and [`RoverRepository`].
//! Both in-memory implementations write JSON snapshots into a shared
//! [`MemoryStore`], keyed independently so the map and the rover can be
//! saved and loaded on their own.

use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Result;
use crate::grid::{Grid, GridSnapshot};
use crate::rover::{Rover, RoverSnapshot};

/// Loads and saves the planet map.
pub trait MapRepository: Send + Sync {
    /// The stored map, or `None` if nothing has been saved yet.
    fn load(&self) -> Result<Option<Grid>>;

    fn save(&self, grid: &Grid) -> Result<()>;
}

/// Loads and saves the rover.
pub trait RoverRepository: Send + Sync {
    /// Rebuilds the stored rover on `grid`, or `None` if nothing has been saved yet.
    fn load(&self, grid: Arc<Grid>) -> Result<Option<Rover>>;

    fn save(&self, rover: &Rover) -> Result<()>;
}

/// A process-local key-value store of JSON documents.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, serde_json::Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let entries = self.entries.read();
        match entries.get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.entries.write().insert(key.to_string(), value);
        Ok(())
    }

    pub fn remove(&self, key: &str) -> bool {
        self.entries.write().remove(key).is_some()
    }

    /// Raw stored document, for inspection.
    pub fn raw(&self, key: &str) -> Option<serde_json::Value> {
        self.entries.read().get(key).cloned()
    }
}

/// [`MapRepository`] backed by a [`MemoryStore`].
#[derive(Clone, Debug)]
pub struct InMemoryMapRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryMapRepository {
    pub const KEY: &'static str = "planet_map";

    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

impl MapRepository for InMemoryMapRepository {
    fn load(&self) -> Result<Option<Grid>> {
        self.store
            .get::<GridSnapshot>(Self::KEY)?
            .map(|snapshot| Grid::from_snapshot(&snapshot))
            .transpose()
    }

    fn save(&self, grid: &Grid) -> Result<()> {
        self.store.put(Self::KEY, &grid.snapshot())
    }
}

/// [`RoverRepository`] backed by a [`MemoryStore`].
#[derive(Clone, Debug)]
pub struct InMemoryRoverRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryRoverRepository {
    pub const KEY: &'static str = "rover";

    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

impl RoverRepository for InMemoryRoverRepository {
    fn load(&self, grid: Arc<Grid>) -> Result<Option<Rover>> {
        self.store
            .get::<RoverSnapshot>(Self::KEY)?
            .map(|snapshot| Rover::from_snapshot(&snapshot, grid))
            .transpose()
    }

    fn save(&self, rover: &Rover) -> Result<()> {
        self.store.put(Self::KEY, &rover.snapshot())
    }
}
