//! Line-oriented front end: routes are added one command at a time and shortest distances are
//! recomputed on request, the same way a form with "add route" and "calculate" buttons would.

use std::io::{
    self,
    BufRead,
    Write,
};
use std::path::PathBuf;

use fp_core::errors::*;
use fp_graph::{
    GraphError,
    InvalidRouteReason,
};
use tracing::debug;

use crate::compute::{
    render,
    OutputFormat,
};
use crate::config::{
    NetworkConfig,
    RouteSpec,
};
use crate::session::{
    Session,
    SubmitError,
};

const PROMPT: &str = "fp> ";

const HELP: &str = "\
commands:
  add <from> <to> <distance>  add or replace a route
  compute                     shortest distances between all pairs of airports
  routes                      list the routes added so far
  airports                    list the airports you can pick from
  help                        show this message
  quit                        leave the shell";

#[derive(clap::Args)]
pub struct Args {
    #[arg(short, long, help = "network file (YAML or JSON) with airports and routes to preload")]
    pub config: Option<PathBuf>,
}

pub fn cmd(args: &Args) -> EmptyResult {
    let config = NetworkConfig::load_or_default(args.config.as_deref())?;
    let session = crate::compute::build_session(config, &[], false)?;
    run(session, io::stdin().lock(), &mut io::stdout().lock())
}

/// Outcome of one line of input.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub(crate) fn run<R: BufRead, W: Write>(mut session: Session, input: R, out: &mut W) -> EmptyResult {
    write!(out, "{PROMPT}")?;
    out.flush()?;

    for line in input.lines() {
        if handle_line(&mut session, &line?, out)? == Flow::Quit {
            return Ok(());
        }
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}

fn handle_line<W: Write>(session: &mut Session, line: &str, out: &mut W) -> anyhow::Result<Flow> {
    let words: Vec<_> = line.split_whitespace().collect();
    debug!(?words, "shell command");

    match words.as_slice() {
        [] => {},
        ["add", from, to, distance] => add_route(session, from, to, distance, out)?,
        ["add", ..] => writeln!(out, "usage: add <from> <to> <distance>")?,
        ["compute"] => {
            writeln!(out)?;
            render(session, OutputFormat::Text, out)?;
        },
        ["routes"] => {
            for route in session.network().routes()? {
                writeln!(out, "{} - {}: {}", route.from, route.to, route.distance)?;
            }
        },
        ["airports"] => {
            for airport in session.catalogue() {
                writeln!(out, "{airport}")?;
            }
        },
        ["help"] => writeln!(out, "{HELP}")?,
        ["quit" | "exit"] => return Ok(Flow::Quit),
        [other, ..] => writeln!(out, "Unknown command: {other} (try `help`)")?,
    }
    Ok(Flow::Continue)
}

fn add_route<W: Write>(session: &mut Session, from: &str, to: &str, distance: &str, out: &mut W) -> EmptyResult {
    let Ok(distance) = distance.parse::<f64>() else {
        writeln!(out, "Invalid distance. Please enter a number.")?;
        return Ok(());
    };

    let spec = RouteSpec { from: from.to_owned(), to: to.to_owned(), distance };
    match session.submit(&spec) {
        Ok(()) => writeln!(out, "Route added: {from} to {to} with distance {distance}")?,
        Err(SubmitError::NotInCatalogue(name)) => {
            writeln!(out, "Unknown airport: {name}. Type `airports` to list the choices.")?;
        },
        Err(SubmitError::Graph(GraphError::InvalidRoute(InvalidRouteReason::BadDistance))) => {
            writeln!(out, "Invalid distance. Please enter a positive number.")?;
        },
        Err(SubmitError::Graph(GraphError::InvalidRoute(_))) => {
            writeln!(out, "Invalid route selection. Please select different airports.")?;
        },
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
