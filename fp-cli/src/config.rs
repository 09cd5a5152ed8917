use std::fs;
use std::path::Path;
use std::str::FromStr;

use fp_core::errors::*;
use serde::{
    Deserialize,
    Serialize,
};
use tracing::info;

/// Airports offered when the network file doesn't list its own.
pub const DEFAULT_AIRPORTS: [&str; 10] = [
    "Dhaka",
    "Sylhet",
    "Chattogram",
    "Saidpur",
    "Delhi",
    "Dubai",
    "Paris",
    "Barishal",
    "London",
    "NewYork",
];

fn default_airports() -> Vec<String> {
    DEFAULT_AIRPORTS.iter().map(|&name| name.to_owned()).collect()
}

/// A network file: the airport catalogue plus routes to load up front.
///
/// An explicitly empty `airports` list lifts the catalogue restriction.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkConfig {
    #[serde(default = "default_airports")]
    pub airports: Vec<String>,

    #[serde(default)]
    pub routes: Vec<RouteSpec>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self { airports: default_airports(), routes: vec![] }
    }
}

impl NetworkConfig {
    /// Parse a network file's contents, trying JSON first and then YAML.
    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        serde_json::from_str(contents)
            .or_else(|_| serde_yaml::from_str(contents))
            .context("network file is neither valid JSON nor valid YAML")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        info!("Loading network from {}", path.display());
        let contents = fs::read_to_string(path).with_context(|| format!("could not read {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("could not parse {}", path.display()))
    }

    /// `load` when a path was given, the built-in catalogue with no routes otherwise.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}

/// One route as written in a network file or on the command line.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RouteSpec {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

impl FromStr for RouteSpec {
    type Err = String;

    /// Parse `FROM:TO:DISTANCE`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<_> = s.split(':').collect();
        let [from, to, distance] = parts.as_slice() else {
            return Err(format!("'{s}' isn't of the form FROM:TO:DISTANCE"));
        };
        let distance = distance
            .trim()
            .parse()
            .map_err(|_| format!("'{distance}' isn't a valid distance"))?;

        Ok(Self { from: from.trim().to_owned(), to: to.trim().to_owned(), distance })
    }
}
