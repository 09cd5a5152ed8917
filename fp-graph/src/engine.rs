//! All-pairs shortest distances over the route network.
//!
//! The engine copies the current `n × n` block of the [`DistanceMatrix`] and runs Floyd-Warshall
//! relaxation on the copy. The intermediate node `k` is the outermost loop: every pair has to see
//! the improvements made through nodes `0..k` before `k` itself is tried as a stopover.
//!
//! The copy means the returned [`ShortestPathResult`] is a snapshot; later routes never change it.

use std::time::Instant;

use itertools::Itertools;
use serde::Serialize;
use tracing::{
    debug,
    instrument,
};

use crate::errors::{
    GraphError,
    GraphResult,
};
use crate::matrix::DistanceMatrix;
use crate::model::{
    is_unreachable,
    AirportIndex,
    Distance,
    PairDistance,
};
use crate::registry::AirportRegistry;

/// Marker printed in place of the sentinel.
pub const UNREACHABLE_MARKER: &str = "INF";

/// Shortest distances between every ordered pair of airports at the time of computation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ShortestPathResult {
    /// Number of airports covered.
    size: usize,
    /// Row-major `size × size` table.
    distances: Vec<Distance>,
}

impl ShortestPathResult {
    /// Number of airports covered by the table.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Whether the table covers no airports at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Shortest distance from `i` to `j`, the sentinel if no path was found, or `None` if either
    /// index is outside the table.
    #[must_use]
    pub fn distance(&self, i: AirportIndex, j: AirportIndex) -> Option<Distance> {
        (i < self.size && j < self.size).then(|| self.distances[i * self.size + j])
    }

    /// Whether some path from `i` to `j` was found.
    #[must_use]
    pub fn is_reachable(&self, i: AirportIndex, j: AirportIndex) -> bool {
        self.distance(i, j).is_some_and(|d| !is_unreachable(d))
    }
}

/// Computes and renders all-pairs shortest distances for a registry and its matrix.
#[derive(Clone, Copy, Debug)]
pub struct ShortestPathEngine<'a> {
    /// Resolves indices back to airport names.
    registry: &'a AirportRegistry,
    /// Direct route lengths.
    matrix: &'a DistanceMatrix,
}

/// In-place Floyd-Warshall over a row-major `n × n` table.
///
/// Rows whose leg to `k` is the sentinel are skipped, so sentinel sums never reach the table.
fn relax_all_pairs(dist: &mut [Distance], n: usize) {
    for k in 0..n {
        for i in 0..n {
            let via_k = dist[i * n + k];
            if is_unreachable(via_k) {
                continue;
            }
            for j in 0..n {
                let candidate = via_k + dist[k * n + j];
                if candidate < dist[i * n + j] {
                    dist[i * n + j] = candidate;
                }
            }
        }
    }
}

/// Render a distance for display, with the sentinel as [`UNREACHABLE_MARKER`].
fn render(distance: Distance) -> String {
    if is_unreachable(distance) {
        UNREACHABLE_MARKER.to_owned()
    } else {
        distance.to_string()
    }
}

impl<'a> ShortestPathEngine<'a> {
    /// An engine over the given registry and matrix.
    #[must_use]
    pub const fn new(registry: &'a AirportRegistry, matrix: &'a DistanceMatrix) -> Self {
        Self { registry, matrix }
    }

    /// Shortest distances between every pair of currently registered airports.
    ///
    /// `O(n³)` time and `O(n²)` extra space. With no airports registered the result is empty.
    #[must_use]
    #[instrument(skip(self), fields(airports = self.registry.count()))]
    pub fn compute_all(&self) -> ShortestPathResult {
        let n = self.registry.count();
        let start = Instant::now();

        let mut distances = self.matrix.snapshot(n);
        relax_all_pairs(&mut distances, n);

        debug!(elapsed = ?start.elapsed(), "computed all-pairs shortest distances");
        ShortestPathResult { size: n, distances }
    }

    /// The result as named pairs, `i` ascending then `j` ascending, diagonal included.
    ///
    /// # Errors
    ///
    /// [`GraphError::NotFound`] if the result covers an index this registry never assigned (for
    /// example a result computed from a different network).
    pub fn table(&self, result: &ShortestPathResult) -> GraphResult<Vec<PairDistance>> {
        let n = result.size();
        (0..n)
            .cartesian_product(0..n)
            .map(|(i, j)| {
                let distance = result.distances[i * n + j];
                Ok(PairDistance {
                    from: self.registry.name_of(i)?.to_owned(),
                    to: self.registry.name_of(j)?.to_owned(),
                    distance: (!is_unreachable(distance)).then_some(distance),
                })
            })
            .collect()
    }

    /// One display line per ordered pair, in the same order as [`ShortestPathEngine::table`].
    ///
    /// Lines read `From <a> to <b>: <distance>`, with unreachable pairs shown as `INF`.
    ///
    /// # Errors
    ///
    /// [`GraphError::NotFound`] under the same conditions as [`ShortestPathEngine::table`].
    pub fn format(&self, result: &ShortestPathResult) -> GraphResult<Vec<String>> {
        let n = result.size();
        (0..n)
            .cartesian_product(0..n)
            .map(|(i, j)| {
                Ok(format!(
                    "From {} to {}: {}",
                    self.registry.name_of(i)?,
                    self.registry.name_of(j)?,
                    render(result.distances[i * n + j]),
                ))
            })
            .collect()
    }

    /// Shortest distance between two airports by name; `None` if no path was found.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownAirport`] if either name was never registered, or
    /// [`GraphError::NotFound`] if it was registered after `result` was computed.
    pub fn distance_between(&self, result: &ShortestPathResult, from: &str, to: &str) -> GraphResult<Option<Distance>> {
        let lookup = |name: &str| {
            self.registry
                .lookup(name)
                .ok_or_else(|| GraphError::UnknownAirport(name.to_owned()))
        };
        let (i, j) = (lookup(from)?, lookup(to)?);

        let distance = result.distance(i, j).ok_or(GraphError::NotFound(i.max(j)))?;
        Ok((!is_unreachable(distance)).then_some(distance))
    }
}
