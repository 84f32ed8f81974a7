//! # Writer Configuration
//!
//! Environment variable based configuration for loading and writing
//! documentation.
//!
//! ## Environment Variables
//!
//! ### `HYPERDOC_MAX_NESTED_DEPTH`
//!
//! Deepest representor nesting a loaded model may declare. Accepts decimal
//! (`8`) or hexadecimal (`0x8`) values. Default: `8`
//!
//! ### `HYPERDOC_FORMAT`
//!
//! Default output format, `hydra` or `hal`. Default: `hydra`
//!
//! Unparseable values fall back to the default with a warning.
//!
//! ## Usage
//!
//! ```rust
//! use hyperdoc::config::WriterConfig;
//!
//! let config = WriterConfig::from_env();
//! println!("max nesting: {}", config.max_nested_depth);
//! ```

use crate::mapper::MapperFormat;
use std::env;
use tracing::warn;

/// Default for [`WriterConfig::max_nested_depth`].
pub const DEFAULT_MAX_NESTED_DEPTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterConfig {
    /// Deepest nesting of representors accepted from a model file
    pub max_nested_depth: usize,
    /// Output format used when none is requested explicitly
    pub format: MapperFormat,
}

impl Default for WriterConfig {
    fn default() -> Self {
        WriterConfig {
            max_nested_depth: DEFAULT_MAX_NESTED_DEPTH,
            format: MapperFormat::default(),
        }
    }
}

impl WriterConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = WriterConfig::default();

        if let Some(val) = lookup("HYPERDOC_MAX_NESTED_DEPTH") {
            match parse_usize(&val) {
                Some(depth) => config.max_nested_depth = depth,
                None => warn!(
                    value = %val,
                    default = DEFAULT_MAX_NESTED_DEPTH,
                    "Invalid HYPERDOC_MAX_NESTED_DEPTH, using default"
                ),
            }
        }

        if let Some(val) = lookup("HYPERDOC_FORMAT") {
            match val.parse() {
                Ok(format) => config.format = format,
                Err(e) => warn!(value = %val, error = %e, "Invalid HYPERDOC_FORMAT, using default"),
            }
        }

        config
    }
}

fn parse_usize(val: &str) -> Option<usize> {
    let val = val.trim();
    if let Some(hex) = val.strip_prefix("0x") {
        usize::from_str_radix(hex, 16).ok()
    } else {
        val.parse().ok()
    }
}
