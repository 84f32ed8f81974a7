//! # Documentation Mappers
//!
//! A mapper translates the generic documentation walk into a concrete
//! document format. The writer owns the walk and the builders; the mapper
//! decides what each callback writes and where finished scopes are attached.
//!
//! ## Callback order
//!
//! For one document the writer calls, in order:
//!
//! 1. [`map_title`](DocumentationMapper::map_title) and
//!    [`map_description`](DocumentationMapper::map_description), when resolved
//! 2. [`on_start`](DocumentationMapper::on_start)
//! 3. per resource type label:
//!    `on_start_resource`, `map_resource` or `map_resource_collection`,
//!    per operation (`on_start_operation`, `map_operation`, `on_finish_operation`),
//!    per property for item resources (`on_start_property`, `map_property`,
//!    `on_finish_property`), then `on_finish_resource`
//! 4. [`on_finish`](DocumentationMapper::on_finish)
//!
//! Any callback returning an error aborts the document.
//!
//! ## Formats
//!
//! - **[`HydraMapper`]** - JSON-LD with the Hydra vocabulary (`application/ld+json`)
//! - **[`HalMapper`]** - HAL style resource index (`application/hal+json`)

mod hal;
mod hydra;

pub use hal::HalMapper;
pub use hydra::HydraMapper;

use crate::json::JsonObjectBuilder;
use crate::model::{Documentation, Operation};
use crate::request::RequestInfo;
use anyhow::Result;
use std::str::FromStr;

/// Sink for the documentation walk.
///
/// Document-level hooks default to no-ops; scope and mapping callbacks are
/// what a format has to define.
pub trait DocumentationMapper {
    /// Media type of the documents this mapper produces.
    fn media_type(&self) -> &'static str;

    fn map_title(&self, _document: &mut JsonObjectBuilder, _title: &str) -> Result<()> {
        Ok(())
    }

    fn map_description(&self, _document: &mut JsonObjectBuilder, _description: &str) -> Result<()> {
        Ok(())
    }

    fn on_start(
        &self,
        _document: &mut JsonObjectBuilder,
        _documentation: &Documentation,
        _request: &RequestInfo,
    ) -> Result<()> {
        Ok(())
    }

    fn on_finish(
        &self,
        _document: &mut JsonObjectBuilder,
        _documentation: &Documentation,
        _request: &RequestInfo,
    ) -> Result<()> {
        Ok(())
    }

    fn on_start_resource(
        &self,
        _document: &mut JsonObjectBuilder,
        _resource: &mut JsonObjectBuilder,
        _type_name: &str,
    ) -> Result<()> {
        Ok(())
    }

    /// Identify an item resource of `type_name`.
    fn map_resource(&self, resource: &mut JsonObjectBuilder, type_name: &str) -> Result<()>;

    /// Identify the collection resource of `type_name`.
    fn map_resource_collection(&self, resource: &mut JsonObjectBuilder, type_name: &str) -> Result<()>;

    /// Attach the finished `resource` to the document.
    fn on_finish_resource(
        &self,
        document: &mut JsonObjectBuilder,
        resource: &mut JsonObjectBuilder,
        type_name: &str,
    ) -> Result<()>;

    fn on_start_property(
        &self,
        _resource: &mut JsonObjectBuilder,
        _property: &mut JsonObjectBuilder,
        _field_name: &str,
    ) -> Result<()> {
        Ok(())
    }

    fn map_property(&self, property: &mut JsonObjectBuilder, field_name: &str, required: bool) -> Result<()>;

    /// Attach the finished `property` to its resource.
    fn on_finish_property(
        &self,
        resource: &mut JsonObjectBuilder,
        property: &mut JsonObjectBuilder,
        field_name: &str,
    ) -> Result<()>;

    fn on_start_operation(
        &self,
        _resource: &mut JsonObjectBuilder,
        _operation_builder: &mut JsonObjectBuilder,
        _operation: &Operation,
    ) -> Result<()> {
        Ok(())
    }

    fn map_operation(
        &self,
        operation_builder: &mut JsonObjectBuilder,
        resource_name: &str,
        type_name: &str,
        operation: &Operation,
    ) -> Result<()>;

    /// Attach the finished operation to its resource.
    fn on_finish_operation(
        &self,
        resource: &mut JsonObjectBuilder,
        operation_builder: &mut JsonObjectBuilder,
        operation: &Operation,
    ) -> Result<()>;
}

/// Output formats shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapperFormat {
    #[default]
    Hydra,
    Hal,
}

impl MapperFormat {
    #[must_use]
    pub fn mapper(&self) -> Box<dyn DocumentationMapper> {
        match self {
            MapperFormat::Hydra => Box::new(HydraMapper),
            MapperFormat::Hal => Box::new(HalMapper),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            MapperFormat::Hydra => "hydra",
            MapperFormat::Hal => "hal",
        }
    }
}

impl FromStr for MapperFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hydra" | "jsonld" | "json-ld" => Ok(MapperFormat::Hydra),
            "hal" => Ok(MapperFormat::Hal),
            other => anyhow::bail!("unknown documentation format '{other}' (expected hydra or hal)"),
        }
    }
}

impl std::fmt::Display for MapperFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
