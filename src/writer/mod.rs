//! # Documentation Writer
//!
//! Walks a [`Documentation`](crate::model::Documentation) once, in a fixed
//! order, feeding a [`DocumentationMapper`](crate::mapper::DocumentationMapper)
//! and accumulating one JSON document.
//!
//! ## Walk order
//!
//! 1. title and description, when their resolvers yield a value
//! 2. document start
//! 3. every collection route name, in map order: its nested collection
//!    resources, then its own collection resource (identity and page
//!    operations, no fields)
//! 4. every item route name, in map order: its nested collection resources,
//!    then its own item resource (identity, item operations, all fields)
//! 5. document finish
//!
//! Names without a representor, or without the routes an operation set is
//! derived from, are skipped without error.
//!
//! ## Submodules
//!
//! - **[`operations`]** - canonical operation sets for item and collection resources
//! - **[`fields`]** - field enumeration and required-flag resolution
//! - **[`nested`]** - `<parent>-<nested>` route key association

mod core;
pub mod fields;
pub mod nested;
pub mod operations;


pub use self::core::DocumentationWriter;

use crate::error::Result;
use crate::mapper::DocumentationMapper;
use crate::model::Documentation;
use crate::request::RequestInfo;

/// Write `documentation` for `request` with `mapper` in one call.
///
/// # Errors
///
/// See [`DocumentationWriter::write`].
pub fn write_documentation(
    documentation: &Documentation,
    mapper: &dyn DocumentationMapper,
    request: &RequestInfo,
) -> Result<String> {
    DocumentationWriter::new(documentation, mapper, request).write()
}
