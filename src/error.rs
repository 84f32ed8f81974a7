//! Error taxonomy for documentation assembly.
//!
//! The writer defines no recovery of its own: every variant here wraps a
//! collaborator failure (supplier, mapper, serializer) and aborts the
//! document that was being assembled. Missing representors, missing routes
//! and non-matching nested route keys are not errors; they are skipped.

use thiserror::Error;

/// Failure raised while loading or writing a documentation document.
#[derive(Error, Debug)]
pub enum DocumentationError {
    /// A named-map supplier of the [`Documentation`](crate::model::Documentation) failed.
    #[error("supplier for {supplier} failed")]
    Supplier {
        supplier: &'static str,
        #[source]
        source: anyhow::Error,
    },

    /// A mapper callback returned an error.
    #[error("mapper callback '{callback}' failed")]
    Mapper {
        callback: &'static str,
        #[source]
        source: anyhow::Error,
    },

    /// The assembled document could not be turned into text.
    #[error("failed to serialize documentation: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A representor nests other representors deeper than the configured guard.
    #[error("representor '{name}' nests {depth} levels deep (limit {limit})")]
    NestingTooDeep {
        name: String,
        depth: usize,
        limit: usize,
    },
}

impl DocumentationError {
    pub(crate) fn mapper(callback: &'static str, source: anyhow::Error) -> Self {
        DocumentationError::Mapper { callback, source }
    }

    pub(crate) fn supplier(supplier: &'static str, source: anyhow::Error) -> Self {
        DocumentationError::Supplier { supplier, source }
    }
}

pub type Result<T> = std::result::Result<T, DocumentationError>;
