//! A remote control switching a light through command objects.

use pattern_demos::logging::init_logging;
use pattern_demos::patterns::command;
use pattern_demos::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    command::run_demo(&mut StdoutSink::new())?;
    Ok(())
}
