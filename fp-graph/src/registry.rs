//! Name ↔ index bookkeeping for airports.

use std::collections::HashMap;

use tracing::trace;

use crate::errors::{
    GraphError,
    GraphResult,
};
use crate::model::AirportIndex;

/// Assigns dense, stable indices to airport names in first-seen order.
///
/// Both directions of the mapping live here so the bijection can only be extended in one place:
/// `names[i]` is the airport at index `i`, and `indices[name] == i`. Entries are never removed.
#[derive(Clone, Debug, Default)]
pub struct AirportRegistry {
    /// Forward map, name to index.
    indices: HashMap<String, AirportIndex>,
    /// Reverse map; the position in the vector is the index.
    names: Vec<String>,
}

impl AirportRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of `name`, registering it with the next free index if it hasn't been seen before.
    pub fn index_of(&mut self, name: &str) -> AirportIndex {
        if let Some(&index) = self.indices.get(name) {
            return index;
        }

        let index = self.names.len();
        self.names.push(name.to_owned());
        self.indices.insert(name.to_owned(), index);
        trace!(name, index, "registered airport");
        index
    }

    /// Index of `name` if it has been registered; never registers anything.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<AirportIndex> {
        self.indices.get(name).copied()
    }

    /// Name registered at `index`.
    ///
    /// # Errors
    ///
    /// [`GraphError::NotFound`] if no airport has been given that index.
    pub fn name_of(&self, index: AirportIndex) -> GraphResult<&str> {
        self.names.get(index).map(String::as_str).ok_or(GraphError::NotFound(index))
    }

    /// Number of airports registered so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing has been registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `(index, name)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (AirportIndex, &str)> {
        self.names.iter().map(String::as_str).enumerate()
    }
}
