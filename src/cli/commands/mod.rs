//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. The tool has a
//! single command, [`InfoCommand`], routed by [`CommandDispatcher`].

pub mod dispatcher;
pub mod info;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use info::{InfoCommand, FAILURE_MESSAGE};
