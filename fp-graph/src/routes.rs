//! Validation and bookkeeping for user-submitted routes.

use tracing::{
    debug,
    info,
    instrument,
};

use crate::engine::ShortestPathEngine;
use crate::errors::{
    GraphError,
    GraphResult,
    InvalidRouteReason,
};
use crate::matrix::DistanceMatrix;
use crate::model::{
    Distance,
    Route,
    MAX_ROUTE_DISTANCE,
};
use crate::registry::AirportRegistry;

/// Owns the airport registry and the distance matrix and keeps them in step.
///
/// All mutation goes through [`RouteManager::add_route`], which validates before it registers
/// anything: a rejected route leaves both the registry and the matrix exactly as they were.
#[derive(Clone, Debug, Default)]
pub struct RouteManager {
    /// Airport name ↔ index mapping.
    registry: AirportRegistry,
    /// Direct route lengths over the registry's index space.
    matrix: DistanceMatrix,
}

/// Reject routes the graph can't represent, before any names are registered.
fn validate(from: &str, to: &str, distance: f64) -> GraphResult<()> {
    if from.is_empty() || to.is_empty() {
        return Err(GraphError::InvalidRoute(InvalidRouteReason::EmptyName));
    }
    if from == to {
        return Err(GraphError::InvalidRoute(InvalidRouteReason::SameAirport));
    }
    if !distance.is_finite() || distance <= 0.0 || distance > MAX_ROUTE_DISTANCE {
        return Err(GraphError::InvalidRoute(InvalidRouteReason::BadDistance));
    }
    Ok(())
}

impl RouteManager {
    /// An empty route network.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the undirected route `from`–`to`.
    ///
    /// Unseen airport names are registered and the matrix grows to fit them. An existing route
    /// between the same pair is overwritten; its previous length is returned.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidRoute`] if the two names are equal, either is empty, or `distance` is
    /// not a positive finite number no larger than [`MAX_ROUTE_DISTANCE`].
    #[instrument(level = "debug", skip(self))]
    pub fn add_route(&mut self, from: &str, to: &str, distance: f64) -> GraphResult<Option<Distance>> {
        validate(from, to, distance)?;

        let from_index = self.registry.index_of(from);
        let to_index = self.registry.index_of(to);
        self.matrix.ensure_capacity(from_index.max(to_index) + 1);

        let previous = self
            .matrix
            .has_route(from_index, to_index)
            .then(|| self.matrix.get_distance(from_index, to_index));
        self.matrix.set_distance(from_index, to_index, distance)?;

        if let Some(old) = previous {
            debug!(from, to, %old, new = distance, "replaced existing route");
        }
        info!(from, to, distance, "Route added");
        Ok(previous)
    }

    /// The airport registry.
    #[must_use]
    pub const fn registry(&self) -> &AirportRegistry {
        &self.registry
    }

    /// The direct-route matrix.
    #[must_use]
    pub const fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Number of distinct airports named by accepted routes.
    #[must_use]
    pub fn airport_count(&self) -> usize {
        self.registry.count()
    }

    /// Every known direct route, once per unordered pair, lower index first.
    ///
    /// # Errors
    ///
    /// [`GraphError::NotFound`] if the registry and matrix have drifted apart, which `add_route`
    /// never allows.
    pub fn routes(&self) -> GraphResult<Vec<Route>> {
        let n = self.registry.count();
        let mut routes = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if self.matrix.has_route(i, j) {
                    routes.push(Route {
                        from: self.registry.name_of(i)?.to_owned(),
                        to: self.registry.name_of(j)?.to_owned(),
                        distance: self.matrix.get_distance(i, j),
                    });
                }
            }
        }
        Ok(routes)
    }

    /// A shortest-path engine over the current network.
    #[must_use]
    pub const fn engine(&self) -> ShortestPathEngine<'_> {
        ShortestPathEngine::new(&self.registry, &self.matrix)
    }
}
