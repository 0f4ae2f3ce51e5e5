// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Command-line interface for the dataset tools.
//!
//! This module contains argument parsing and the `extract` and `visualize`
//! subcommand implementations.

// Modules
/// CLI arguments.
pub mod args;

/// Interactive frame extraction subcommand.
pub mod extract;

/// Console message macros.
pub mod logging;

/// Annotation visualization subcommand.
pub mod visualize;
