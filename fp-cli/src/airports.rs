use std::io::{
    self,
    Write,
};
use std::path::PathBuf;

use fp_core::errors::*;

use crate::config::NetworkConfig;

#[derive(clap::Args)]
pub struct Args {
    #[arg(short, long, help = "network file (YAML or JSON) whose catalogue to list")]
    pub config: Option<PathBuf>,
}

pub fn cmd(args: &Args) -> EmptyResult {
    let config = NetworkConfig::load_or_default(args.config.as_deref())?;
    list(&config, &mut io::stdout().lock())
}

pub(crate) fn list<W: Write>(config: &NetworkConfig, out: &mut W) -> EmptyResult {
    if config.airports.is_empty() {
        writeln!(out, "(no catalogue: any airport name is accepted)")?;
    }
    for airport in &config.airports {
        writeln!(out, "{airport}")?;
    }
    Ok(())
}
