//! CLI command handlers for `campus-records`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod backup;
pub mod config;
pub mod import;
pub mod shell;
