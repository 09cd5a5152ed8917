use std::io::{
    self,
    Write,
};
use std::path::PathBuf;

use clap::ValueEnum;
use fp_core::errors::*;
use tracing::{
    info,
    warn,
};

use crate::config::{
    NetworkConfig,
    RouteSpec,
};
use crate::session::Session;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(clap::Args)]
pub struct Args {
    #[arg(short, long, help = "network file (YAML or JSON) with airports and routes")]
    pub config: Option<PathBuf>,

    #[arg(
        short,
        long = "route",
        value_name = "FROM:TO:DISTANCE",
        help = "additional route, applied after the network file"
    )]
    pub routes: Vec<RouteSpec>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    #[arg(long, help = "abort on the first invalid route instead of skipping it")]
    pub strict: bool,
}

pub fn cmd(args: &Args) -> EmptyResult {
    let config = NetworkConfig::load_or_default(args.config.as_deref())?;
    let session = build_session(config, &args.routes, args.strict)?;
    render(&session, args.output, &mut io::stdout().lock())
}

pub(crate) fn build_session(config: NetworkConfig, extra_routes: &[RouteSpec], strict: bool) -> anyhow::Result<Session> {
    let mut session = Session::new(config.airports);
    let mut skipped = 0;

    for spec in config.routes.iter().chain(extra_routes) {
        if let Err(err) = session.submit(spec) {
            if strict {
                bail!("route {} -> {} ({}): {err}", spec.from, spec.to, spec.distance);
            }
            warn!(from = %spec.from, to = %spec.to, distance = spec.distance, %err, "skipping invalid route");
            skipped += 1;
        }
    }

    info!(airports = session.network().airport_count(), skipped, "network ready");
    Ok(session)
}

pub(crate) fn render<W: Write>(session: &Session, format: OutputFormat, out: &mut W) -> EmptyResult {
    let engine = session.network().engine();
    let result = engine.compute_all();

    match format {
        OutputFormat::Text => {
            writeln!(out, "Shortest distances between all pairs of airports:")?;
            for line in engine.format(&result)? {
                writeln!(out, "{line}")?;
            }
        },
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &engine.table(&result)?)?;
            writeln!(out)?;
        },
    }
    Ok(())
}
