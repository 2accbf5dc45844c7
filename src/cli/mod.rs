//! CLI module for campaign-planner - command-line interface and subcommands.
//!
//! Provides plan generation, template preview and the task-status commands
//! that operate on a saved plan file.

pub mod commands;

pub use commands::Cli;
