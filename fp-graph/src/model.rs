//! Shared value types: distances, the unreachable sentinel, and the records handed to callers.

use ordered_float::OrderedFloat;
use serde::{
    Deserialize,
    Serialize,
};

/// Dense index assigned to an airport by the registry.
pub type AirportIndex = usize;

/// Route length in kilometres.
pub type Distance = OrderedFloat<f64>;

/// Largest direct route the graph accepts.
pub const MAX_ROUTE_DISTANCE: f64 = 1.0e12;

/// Stored for "no direct route known" and reported for "no path found".
///
/// Headroom: a real shortest path visits at most `n - 1` routes, so its cost is bounded by
/// `(n - 1) * MAX_ROUTE_DISTANCE`, which stays below this value for any `n` that fits in memory.
/// Adding two sentinels gives `2.0e300`, still finite in `f64`, so the relaxation step can't
/// produce infinity or NaN even without the explicit skip it performs.
pub const UNREACHABLE: f64 = 1.0e300;

/// The sentinel as a [`Distance`].
pub const UNREACHABLE_DISTANCE: Distance = OrderedFloat(UNREACHABLE);

/// Zero distance, used on the diagonal.
pub const ZERO_DISTANCE: Distance = OrderedFloat(0.0);

/// Whether `d` is the sentinel (or anything at or beyond it).
#[must_use]
pub fn is_unreachable(d: Distance) -> bool {
    d >= UNREACHABLE_DISTANCE
}

/// A direct route between two registered airports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// One end of the route.
    pub from: String,
    /// The other end of the route.
    pub to: String,
    /// Length of the route.
    pub distance: Distance,
}

/// A shortest-path result entry with both airports resolved to their names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PairDistance {
    /// Source airport.
    pub from: String,
    /// Destination airport.
    pub to: String,
    /// Shortest distance, or `None` if no path is known.
    pub distance: Option<Distance>,
}
