//! Shared fixtures for tests in this crate and its dependents.
// rstest expands each fixture into an undocumented public type.
#![allow(missing_docs)]

use rstest::*;

use crate::RouteManager;

/// Dhaka–Sylhet 5, Sylhet–Chattogram 3, no direct Dhaka–Chattogram route.
#[fixture]
pub fn chain_network() -> RouteManager {
    let mut network = RouteManager::new();
    network.add_route("Dhaka", "Sylhet", 5.0).unwrap();
    network.add_route("Sylhet", "Chattogram", 3.0).unwrap();
    network
}

/// Two disconnected components: {Dhaka, Sylhet} and {Paris, London}.
#[fixture]
pub fn split_network() -> RouteManager {
    let mut network = RouteManager::new();
    network.add_route("Dhaka", "Sylhet", 198.0).unwrap();
    network.add_route("Paris", "London", 344.0).unwrap();
    network
}

/// A small network where the direct Dhaka–Dubai route is longer than going through Delhi.
#[fixture]
pub fn detour_network() -> RouteManager {
    let mut network = RouteManager::new();
    network.add_route("Dhaka", "Dubai", 4000.0).unwrap();
    network.add_route("Dhaka", "Delhi", 1400.0).unwrap();
    network.add_route("Delhi", "Dubai", 2200.0).unwrap();
    network.add_route("Dubai", "London", 5500.0).unwrap();
    network
}
