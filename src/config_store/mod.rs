//! Process-wide configuration store
//!
//! The store is created lazily on the first call to [`acquire`] and lives until
//! the process exits. Its lifecycle has two states:
//!
//! - **Uninitialized**: nothing has called [`acquire`] yet.
//! - **Initialized**: the store exists and holds at least the defaults.
//!
//! The transition happens exactly once, even when many threads race on the first
//! call: initialization goes through a [`OnceLock`], so the defaults are applied
//! a single time and no caller can observe a half-built store.
//!
//! Callers receive [`ConfigHandle`]s. All handles returned by [`acquire`] point
//! at the same map. [`ConfigHandle::detached`] builds an independent store
//! for tests and for code that takes its configuration by injection.

mod handle;
mod store;

pub use handle::ConfigHandle;
pub use store::{ConfigSnapshot, ConfigStore, InMemoryConfigStore};

use crate::PatternResult;
use crate::output::OutputSink;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Entries present in every store from the moment it is created
pub const DEFAULT_ENTRIES: [(&str, &str); 3] = [
    ("url", "http://example.com"),
    ("username", "admin"),
    ("password", "password"),
];

static GLOBAL_STORE: OnceLock<Arc<InMemoryConfigStore>> = OnceLock::new();

/// Returns a handle to the process-wide store, creating it on first use.
pub fn acquire() -> ConfigHandle {
    let store = GLOBAL_STORE.get_or_init(|| {
        debug!("initializing process-wide configuration store");
        Arc::new(InMemoryConfigStore::new())
    });
    ConfigHandle::from_arc(Arc::clone(store))
}

/// Whether [`acquire`] has created the process-wide store yet
pub fn is_initialized() -> bool {
    GLOBAL_STORE.get().is_some()
}

/// Reads through `config1`, changes `username`, reads it back through `config2`
/// and reports whether the two handles share one store.
pub fn run_demo(
    config1: &ConfigHandle,
    config2: &ConfigHandle,
    sink: &mut dyn OutputSink,
) -> PatternResult<()> {
    sink.line(&format!("URL: {}", config1.require("url")?))?;
    sink.line(&format!("Username: {}", config1.require("username")?))?;

    config1.set("username", "newAdmin");

    sink.line(&format!("Modified Username: {}", config2.require("username")?))?;

    if config1 == config2 {
        sink.line("Both configuration manager instances are the same.")?;
    } else {
        sink.line("Configuration manager instances are different.")?;
    }
    Ok(())
}
