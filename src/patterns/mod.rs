//! Classical object-oriented patterns
//!
//! Each module is gated behind its own feature:
//!
//! - `adapter`: [`adapter::AudioPlayer`] plays foreign formats through a [`adapter::MediaAdapter`]
//! - `command`: [`command::RemoteControl`] invokes [`command::Command`]s on a [`command::Light`]
//! - `decorator`: [`decorator::RedShapeDecorator`] wraps any [`decorator::Shape`]
//!
//! The Singleton lives in [`crate::config_store`] and is always compiled.
//! All modules write their output through an [`OutputSink`](crate::output::OutputSink).

#[cfg(feature = "adapter")]
pub mod adapter;

#[cfg(feature = "command")]
pub mod command;

#[cfg(feature = "decorator")]
pub mod decorator;
