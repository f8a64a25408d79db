//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. All commands that need the
//! environment load it through a shared [`Workspace`], so context, config
//! and identity are resolved the same way everywhere.

pub mod completions;
pub mod dispatcher;
pub mod domain;
pub mod name;
pub mod plan;
pub mod resolve;
pub mod tags;
pub mod workspace;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use workspace::Workspace;
