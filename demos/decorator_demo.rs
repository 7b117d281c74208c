//! A plain circle next to one decorated with a red border.

use pattern_demos::logging::init_logging;
use pattern_demos::patterns::decorator;
use pattern_demos::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    decorator::run_demo(&mut StdoutSink::new())?;
    Ok(())
}
