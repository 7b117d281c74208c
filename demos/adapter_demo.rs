//! An mp3 player that handles vlc and mp4 through an adapter.

use pattern_demos::logging::init_logging;
use pattern_demos::patterns::adapter;
use pattern_demos::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    adapter::run_demo(&mut StdoutSink::new())?;
    Ok(())
}
