//! One module per subcommand, each exposing its clap flags and `run`.

pub mod bounds;
pub mod classify;
pub mod registry;
pub mod search;

use std::error::Error;

use inp_core::errors::InpError;
use inp_graph::{from_graph6, Graph};
use serde::Serialize;

pub(crate) fn parse_graph(text: &str) -> Result<Graph, InpError> {
    from_graph6(text.trim()).map_err(|err| err.with_context("argument", text.trim()))
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
