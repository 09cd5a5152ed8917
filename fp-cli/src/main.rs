mod airports;
mod compute;
mod config;
mod session;
mod shell;

use clap::{
    Parser,
    Subcommand,
};
use fp_core::errors::*;

#[derive(Parser)]
#[command(
    about = "command-line app for building airport route networks and computing shortest distances",
    version,
    propagate_version = true
)]
struct Options {
    #[command(subcommand)]
    subcommand: FpSubcommand,

    #[arg(short, long, global = true, default_value = "info", help = "log filter (`warn`, `debug`, `fp_graph=trace`, ...)")]
    verbosity: String,
}

#[derive(Subcommand)]
enum FpSubcommand {
    #[command(about = "list the airport catalogue")]
    Airports(airports::Args),

    #[command(about = "load routes and print shortest distances between all pairs of airports")]
    Compute(compute::Args),

    #[command(about = "add routes interactively and compute shortest distances on demand")]
    Shell(shell::Args),
}

fn main() -> EmptyResult {
    let args = Options::parse();
    fp_core::logging::setup(&args.verbosity);

    match &args.subcommand {
        FpSubcommand::Airports(args) => airports::cmd(args),
        FpSubcommand::Compute(args) => compute::cmd(args),
        FpSubcommand::Shell(args) => shell::cmd(args),
    }
}

#[cfg(test)]
mod tests;
