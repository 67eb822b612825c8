//! Command handlers.
//!
//! Each submodule owns one subcommand: translate arguments, call the core,
//! display results. Shared path/name helpers live in `common`.

pub mod attach;
pub mod common;
pub mod completions;
pub mod config;
pub mod guess;
pub mod new;
