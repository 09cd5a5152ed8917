//! Plumbing shared by every flightpath crate: error helpers and logging setup.

pub mod errors;
pub mod logging;
