//! # CLI Module
//!
//! Command-line front end of the `hyperdoc` binary.
//!
//! ## Commands
//!
//! ### `write`
//!
//! Write the documentation document of a model file:
//!
//! ```bash
//! hyperdoc write --model api.yaml --format hal --application-url https://api.example.com
//! ```
//!
//! Options:
//! - `--model <FILE>` - Path to the model file (required)
//! - `--format <FORMAT>` - `hydra` or `hal` (default: `HYPERDOC_FORMAT`, then `hydra`)
//! - `--application-url <URL>` - Base URL used for document identifiers
//! - `--accept-language <TAGS>` - Picks localized title and description
//! - `--pretty` - Pretty-print the JSON
//! - `--output <FILE>` - Write to a file instead of stdout
//!
//! ### `lint`
//!
//! Check a model file:
//!
//! ```bash
//! hyperdoc lint --model api.yaml --fail-on-error
//! ```
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use hyperdoc::cli::{Cli, run_cli};
//! use clap::Parser;
//!
//! run_cli(Cli::parse())?;
//! ```

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run_cli, Cli, Commands};
