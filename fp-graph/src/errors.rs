//! Error types for the airport graph.

use std::fmt;

use thiserror::Error;

use crate::model::AirportIndex;

/// Why `RouteManager::add_route` turned a route down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidRouteReason {
    /// Both ends name the same airport.
    SameAirport,
    /// The distance is NaN, infinite, not positive, or above `MAX_ROUTE_DISTANCE`.
    BadDistance,
    /// One of the airport names is empty.
    EmptyName,
}

impl fmt::Display for InvalidRouteReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::SameAirport => "same airport",
            Self::BadDistance => "bad distance",
            Self::EmptyName => "empty airport name",
        };
        f.write_str(reason)
    }
}

/// Errors surfaced by the airport graph. All of them are recoverable and none of them leave the
/// graph half-updated.
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    /// A user-submitted route was rejected before touching the graph.
    #[error("invalid route: {0}")]
    InvalidRoute(InvalidRouteReason),

    /// A matrix write with a self-loop, a non-positive weight, or an index outside the table.
    #[error("invalid edge {from} -> {to} with weight {weight}")]
    InvalidEdge {
        /// Source index.
        from: AirportIndex,
        /// Destination index.
        to: AirportIndex,
        /// The rejected weight.
        weight: f64,
    },

    /// Reverse lookup on an index that was never registered.
    #[error("no airport registered at index {0}")]
    NotFound(AirportIndex),

    /// Lookup by name on an airport that was never registered.
    #[error("unknown airport: {0}")]
    UnknownAirport(String),
}

/// Result alias used throughout the crate.
pub type GraphResult<T> = Result<T, GraphError>;
