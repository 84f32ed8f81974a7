//! # hyperdoc
//!
//! **hyperdoc** writes machine-readable documentation for hypermedia APIs. An
//! API is described by its representors (the field catalog of each resource
//! type) and its routes (collection, item and nested collection); hyperdoc
//! walks that description once and lets a pluggable mapper turn the walk into
//! a concrete JSON document such as a Hydra `ApiDocumentation`.
//!
//! ## Architecture
//!
//! - **[`model`]** - representors, forms, routes, operations and the [`Documentation`] root
//! - **[`request`]** - request context handed to resolvers and mappers
//! - **[`json`]** - incremental JSON object and array builders
//! - **[`mapper`]** - the [`DocumentationMapper`] callback trait plus Hydra and HAL formats
//! - **[`writer`]** - the [`DocumentationWriter`] that drives a mapper over a documentation
//! - **[`loader`]** - YAML, JSON and TOML model files
//! - **[`linter`]** - consistency checks for models
//! - **[`config`]** and **[`logging`]** - environment driven configuration
//! - **[`cli`]** - the `hyperdoc` command line
//!
//! ### Write Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller
//!     participant Writer as DocumentationWriter
//!     participant Doc as Documentation
//!     participant Mapper as DocumentationMapper
//!
//!     Caller->>Writer: write()
//!     Writer->>Doc: title(request) / description(request)
//!     Writer->>Mapper: map_title / map_description
//!     Writer->>Mapper: on_start
//!     Writer->>Doc: representors, nested, collection, item routes (once each)
//!     loop every collection route, then every item route
//!         Writer->>Mapper: nested collection resources of the name
//!         Writer->>Mapper: on_start_resource, map_resource*, operations, properties, on_finish_resource
//!     end
//!     Writer->>Mapper: on_finish
//!     Writer-->>Caller: JSON text
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use hyperdoc::mapper::HydraMapper;
//! use hyperdoc::model::{Documentation, FieldKind, Form, ItemRoutes, NamedMap, Representor, ResourceModel};
//! use hyperdoc::request::RequestInfo;
//! use hyperdoc::writer::DocumentationWriter;
//!
//! let model = ResourceModel {
//!     representors: NamedMap::new().with(
//!         "book",
//!         Representor::new(["Book"]).with_field(FieldKind::String, "title"),
//!     ),
//!     item_routes: NamedMap::new().with(
//!         "book",
//!         ItemRoutes::with_form(Form::default().with_field("title", true)),
//!     ),
//!     ..ResourceModel::default()
//! };
//! let documentation = Documentation::from_model(model);
//! let request = RequestInfo::default();
//!
//! let json = DocumentationWriter::new(&documentation, &HydraMapper, &request).write()?;
//! assert!(json.contains("vocab:Book"));
//! # Ok::<(), hyperdoc::DocumentationError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod json;
pub mod linter;
pub mod loader;
pub mod logging;
pub mod mapper;
pub mod model;
pub mod request;
pub mod writer;

pub use error::DocumentationError;
pub use loader::{load_documentation, load_model};
pub use mapper::{DocumentationMapper, MapperFormat};
pub use model::Documentation;
pub use request::RequestInfo;
pub use writer::{write_documentation, DocumentationWriter};
