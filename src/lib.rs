//! # pattern-demos
//!
//! Four classical design patterns in Rust, built around one component with a
//! real contract: a **lazily-initialized shared configuration store** (Singleton).
//!
//! - **Config store**: process-wide string map created on first [`acquire`],
//!   pre-populated with `url`, `username` and `password`, shared by every handle
//! - **Adapter / Command / Decorator**: small demonstrations writing to an
//!   [`OutputSink`](output::OutputSink)
//!
//! ## 🏗️ Feature Architecture
//!
//! ### Always available
//! - `config_store`: the Singleton ([`acquire`], [`ConfigHandle`], [`ConfigStore`])
//! - `storage`: [`StorageBackend`] trait and in-memory backend
//! - `output`, `logging`: demo plumbing
//!
//! ### Pattern modules
//! - `adapter`: media player adapter
//! - `command`: remote control and light
//! - `decorator`: shape decorator
//! - `all-patterns`: all of the above (default)
//!
//! ## Example
//!
//! ```rust
//! use pattern_demos::prelude::*;
//!
//! let config1 = acquire();
//! let config2 = acquire();
//!
//! config1.set("username", "newAdmin");
//! assert_eq!(config2.get("username").as_deref(), Some("newAdmin"));
//! assert_eq!(config1, config2);
//! ```

// ============================================================================
// CORE MODULES (always available)
// ============================================================================

pub mod config_store;
pub mod logging;
pub mod output;
pub mod patterns;
pub mod storage;

// ============================================================================
// CORE RE-EXPORTS
// ============================================================================

// Singleton - always available
pub use config_store::{
    ConfigHandle, ConfigSnapshot, ConfigStore, DEFAULT_ENTRIES, InMemoryConfigStore, acquire,
    is_initialized,
};

// Storage traits - always available
pub use storage::{InMemoryStorage, InMemoryStorageError, StorageBackend};

// Output sinks - always available
pub use output::{BufferSink, OutputSink, StdoutSink, WriterSink};

// ============================================================================
// PATTERN RE-EXPORTS (feature-gated)
// ============================================================================

#[cfg(feature = "adapter")]
pub use patterns::adapter::{
    AdvancedMediaPlayer, AudioPlayer, MediaAdapter, MediaFormat, MediaPlayer,
};

#[cfg(feature = "command")]
pub use patterns::command::{
    Command, Light, RemoteControl, TurnOffLightCommand, TurnOnLightCommand,
};

#[cfg(feature = "decorator")]
pub use patterns::decorator::{Circle, RedShapeDecorator, Shape};

/// Convenient re-exports for common types and traits
pub mod prelude {
    pub use crate::{
        BufferSink, ConfigHandle, ConfigSnapshot, ConfigStore, OutputSink, PatternError,
        PatternResult, StdoutSink, StorageBackend, acquire,
    };

    #[cfg(feature = "adapter")]
    pub use crate::patterns::adapter::{AudioPlayer, MediaPlayer};

    #[cfg(feature = "command")]
    pub use crate::patterns::command::{
        Command, Light, RemoteControl, TurnOffLightCommand, TurnOnLightCommand,
    };

    #[cfg(feature = "decorator")]
    pub use crate::patterns::decorator::{Circle, RedShapeDecorator, Shape};
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Result type alias for this crate's operations
pub type PatternResult<T> = Result<T, PatternError>;

/// Common error type for this crate
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// A required key is absent from the configuration store
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// The media player was asked for a format it cannot play
    #[error("Unsupported media format: {0}")]
    UnsupportedFormat(String),

    /// The remote control was pressed before a command was bound
    #[error("No command bound to the button")]
    NoCommand,

    /// Writing to an output sink failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// Error during serialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A storage backend reported a failure
    #[error("Storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl PatternError {
    /// Whether this is the expected "absent key" outcome rather than a failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, PatternError::KeyNotFound(_))
    }
}

// ============================================================================
// INTEGRATION TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json");
        assert!(json_error.is_err());

        let err: PatternError = json_error.unwrap_err().into();
        assert!(matches!(err, PatternError::Serialization(_)));

        let io_err: PatternError = std::io::Error::other("pipe closed").into();
        assert_eq!(io_err.to_string(), "Output error: pipe closed");
    }

    #[test]
    fn test_key_not_found_is_expected_outcome() {
        let err = PatternError::KeyNotFound("timeout".to_string());
        assert!(err.is_not_found());
        assert!(!PatternError::NoCommand.is_not_found());
        assert_eq!(err.to_string(), "Key not found: timeout");
    }

    #[test]
    fn test_detached_store_through_root_exports() {
        let config = ConfigHandle::detached();
        config.set("username", "newAdmin");
        assert_eq!(config.require("username").unwrap(), "newAdmin");
        assert_eq!(config.len(), DEFAULT_ENTRIES.len());
    }
}
