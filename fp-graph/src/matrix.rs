//! Symmetric adjacency matrix of direct route lengths.

use tracing::debug;

use crate::errors::{
    GraphError,
    GraphResult,
};
use crate::model::{
    is_unreachable,
    AirportIndex,
    Distance,
    MAX_ROUTE_DISTANCE,
    UNREACHABLE_DISTANCE,
    ZERO_DISTANCE,
};

/// Dense square table of direct route lengths, indexed by registry indices.
///
/// Cells are stored row-major in a single vector of `capacity * capacity` entries. The diagonal is
/// always zero and every off-diagonal cell starts out as the unreachable sentinel. Writes always
/// touch both `(i, j)` and `(j, i)`, so the table stays symmetric.
#[derive(Clone, Debug, Default)]
pub struct DistanceMatrix {
    /// Number of rows (and columns) currently allocated.
    capacity: usize,
    /// Row-major cells.
    cells: Vec<Distance>,
}

impl DistanceMatrix {
    /// An empty matrix; the first `ensure_capacity` call allocates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A matrix with room for `n` airports.
    #[must_use]
    pub fn with_capacity(n: usize) -> Self {
        let mut matrix = Self::new();
        matrix.ensure_capacity(n);
        matrix
    }

    /// Number of airports the matrix can address without growing.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Grow so that indices `0..n` are addressable.
    ///
    /// Existing cells keep their values; new diagonal cells are zero and every other new cell is
    /// the sentinel. Growth at least doubles the allocation so repeated single-airport additions
    /// stay amortised.
    pub fn ensure_capacity(&mut self, n: usize) {
        if n <= self.capacity {
            return;
        }

        let new_capacity = n.max(self.capacity * 2);
        let mut cells = vec![UNREACHABLE_DISTANCE; new_capacity * new_capacity];
        for i in 0..new_capacity {
            cells[i * new_capacity + i] = ZERO_DISTANCE;
        }
        for i in 0..self.capacity {
            let old_row = &self.cells[i * self.capacity..(i + 1) * self.capacity];
            cells[i * new_capacity..i * new_capacity + self.capacity].copy_from_slice(old_row);
        }

        debug!(old = self.capacity, new = new_capacity, "grew distance matrix");
        self.capacity = new_capacity;
        self.cells = cells;
    }

    /// Record a direct route of length `weight` between `i` and `j`, replacing whatever was there.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidEdge`] for a self-loop, a weight that isn't a positive finite number no
    /// larger than [`MAX_ROUTE_DISTANCE`], or an index outside the allocated capacity. Nothing is
    /// written in that case.
    pub fn set_distance(&mut self, i: AirportIndex, j: AirportIndex, weight: f64) -> GraphResult<()> {
        let valid_weight = weight.is_finite() && weight > 0.0 && weight <= MAX_ROUTE_DISTANCE;
        if i == j || !valid_weight || i >= self.capacity || j >= self.capacity {
            return Err(GraphError::InvalidEdge { from: i, to: j, weight });
        }

        let n = self.capacity;
        self.cells[i * n + j] = Distance::from(weight);
        self.cells[j * n + i] = Distance::from(weight);
        Ok(())
    }

    /// Direct distance between `i` and `j`: zero on the diagonal, the sentinel when no route has
    /// been recorded.
    ///
    /// Indices past the allocated capacity read as if the matrix extended forever.
    #[must_use]
    pub fn get_distance(&self, i: AirportIndex, j: AirportIndex) -> Distance {
        if i == j {
            ZERO_DISTANCE
        } else if i >= self.capacity || j >= self.capacity {
            UNREACHABLE_DISTANCE
        } else {
            self.cells[i * self.capacity + j]
        }
    }

    /// Whether a direct route between two distinct airports has been recorded.
    #[must_use]
    pub fn has_route(&self, i: AirportIndex, j: AirportIndex) -> bool {
        i != j && !is_unreachable(self.get_distance(i, j))
    }

    /// Row-major copy of the leading `n × n` block.
    #[must_use]
    pub fn snapshot(&self, n: usize) -> Vec<Distance> {
        let mut table = Vec::with_capacity(n * n);
        for i in 0..n {
            table.extend((0..n).map(|j| self.get_distance(i, j)));
        }
        table
    }
}
