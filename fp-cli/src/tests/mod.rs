mod airports_test;
mod compute_test;
mod config_test;

use assertables::*;
use rstest::*;

use crate::config::*;
use crate::session::*;

fn spec(from: &str, to: &str, distance: f64) -> RouteSpec {
    RouteSpec { from: from.into(), to: to.into(), distance }
}
