use fp_graph::{
    GraphError,
    RouteManager,
};
use thiserror::Error;

use crate::config::RouteSpec;

#[derive(Debug, Error, PartialEq)]
pub enum SubmitError {
    #[error("{0} is not in the airport catalogue")]
    NotInCatalogue(String),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// A route network plus the catalogue of airports users may pick from.
#[derive(Debug, Default)]
pub struct Session {
    catalogue: Vec<String>,
    network: RouteManager,
}

impl Session {
    pub fn new(catalogue: Vec<String>) -> Self {
        Self { catalogue, network: RouteManager::new() }
    }

    pub fn catalogue(&self) -> &[String] {
        &self.catalogue
    }

    pub const fn network(&self) -> &RouteManager {
        &self.network
    }

    fn check_catalogue(&self, name: &str) -> Result<(), SubmitError> {
        if self.catalogue.is_empty() || self.catalogue.iter().any(|known| known == name) {
            Ok(())
        } else {
            Err(SubmitError::NotInCatalogue(name.to_owned()))
        }
    }

    /// Apply one route. Catalogue membership is checked here; everything else is the graph's call.
    pub fn submit(&mut self, spec: &RouteSpec) -> Result<(), SubmitError> {
        self.check_catalogue(&spec.from)?;
        self.check_catalogue(&spec.to)?;
        self.network.add_route(&spec.from, &spec.to, spec.distance)?;
        Ok(())
    }
}
