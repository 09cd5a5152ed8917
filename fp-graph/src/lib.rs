#![deny(
    clippy::nursery,
    clippy::pedantic,
    missing_docs,
    clippy::missing_docs_in_private_items,
)]

//! # fp-graph – airport route network and all-pairs shortest distances
//!
//! Routes arrive one at a time as `(from, to, distance)` triples. Each new airport name gets the
//! next dense index from the [`AirportRegistry`], and the route length lands in a symmetric
//! [`DistanceMatrix`] over that index space. On request, the [`ShortestPathEngine`] snapshots the
//! matrix and runs Floyd-Warshall over it, producing a [`ShortestPathResult`] that can be rendered
//! line by line or as named pairs.
//!
//! ```
//! use fp_graph::RouteManager;
//!
//! let mut network = RouteManager::new();
//! network.add_route("Dhaka", "Sylhet", 5.0).unwrap();
//! network.add_route("Sylhet", "Chattogram", 3.0).unwrap();
//!
//! let engine = network.engine();
//! let result = engine.compute_all();
//! let lines = engine.format(&result).unwrap();
//! assert!(lines.contains(&"From Dhaka to Chattogram: 8".to_string()));
//! ```
//!
//! The graph is undirected, append-only, and single-threaded: mutation needs `&mut RouteManager`
//! and the engine only borrows it, so a computation never observes a half-applied route.

pub mod engine;
pub mod errors;
pub mod matrix;
pub mod model;
pub mod registry;
pub mod routes;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

pub use engine::{
    ShortestPathEngine,
    ShortestPathResult,
    UNREACHABLE_MARKER,
};
pub use errors::{
    GraphError,
    GraphResult,
    InvalidRouteReason,
};
pub use matrix::DistanceMatrix;
pub use model::{
    AirportIndex,
    Distance,
    PairDistance,
    Route,
    MAX_ROUTE_DISTANCE,
    UNREACHABLE,
};
pub use registry::AirportRegistry;
pub use routes::RouteManager;

#[cfg(test)]
mod tests;
