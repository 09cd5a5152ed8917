pub use anyhow::{
    anyhow,
    bail,
    ensure,
    Context,
};

/// Result alias for commands that only signal success or failure.
pub type EmptyResult = anyhow::Result<()>;
