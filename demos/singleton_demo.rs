//! Two handles to the process-wide configuration store, one write, one shared view.

use pattern_demos::config_store;
use pattern_demos::logging::init_logging;
use pattern_demos::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let mut out = StdoutSink::new();

    let config1 = acquire();
    let config2 = acquire();

    config_store::run_demo(&config1, &config2, &mut out)?;

    tracing::info!(
        instance_id = %config1.instance_id(),
        handles = config1.handle_count(),
        "demo finished"
    );
    tracing::debug!("snapshot: {}", config2.snapshot().to_json_redacted()?);

    Ok(())
}
