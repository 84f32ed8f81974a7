use super::fields::{is_required, item_field_names};
use super::nested::nested_resources_of;
use super::operations::{item_operations, page_operations};
use crate::error::{DocumentationError, Result};
use crate::json::JsonObjectBuilder;
use crate::mapper::DocumentationMapper;
use crate::model::{
    CollectionRoutes, Documentation, Form, ItemRoutes, NamedMap, NestedCollectionRoutes, Operation,
    Representor,
};
use crate::request::RequestInfo;
use serde_json::Value;
use std::cell::Cell;
use tracing::{debug, debug_span, trace};

/// Writes a [`Documentation`] through a [`DocumentationMapper`].
///
/// The writer borrows its three collaborators; one writer can produce any
/// number of documents, each `write` call walking the model from scratch.
///
/// # Example
///
/// ```rust
/// use hyperdoc::mapper::HalMapper;
/// use hyperdoc::model::{Documentation, ResourceModel};
/// use hyperdoc::request::RequestInfo;
/// use hyperdoc::writer::DocumentationWriter;
///
/// let documentation = Documentation::from_model(ResourceModel::default())
///     .with_title(|_| Some("Bookstore".to_string()));
/// let request = RequestInfo::default();
/// let writer = DocumentationWriter::new(&documentation, &HalMapper, &request);
///
/// let json = writer.write()?;
/// assert!(json.contains("Bookstore"));
/// # Ok::<(), hyperdoc::DocumentationError>(())
/// ```
pub struct DocumentationWriter<'a> {
    documentation: &'a Documentation,
    mapper: &'a dyn DocumentationMapper,
    request: &'a RequestInfo,
}

impl<'a> DocumentationWriter<'a> {
    #[must_use]
    pub fn new(
        documentation: &'a Documentation,
        mapper: &'a dyn DocumentationMapper,
        request: &'a RequestInfo,
    ) -> Self {
        DocumentationWriter {
            documentation,
            mapper,
            request,
        }
    }

    /// Media type of the document this writer produces.
    #[must_use]
    pub fn media_type(&self) -> &'static str {
        self.mapper.media_type()
    }

    /// Write the documentation to its textual JSON form.
    ///
    /// # Errors
    ///
    /// Fails on the first supplier or mapper error, or if the assembled
    /// document cannot be serialized. No partial document is returned.
    pub fn write(&self) -> Result<String> {
        let document = self.write_value()?;
        Ok(serde_json::to_string(&document)?)
    }

    /// Write the documentation, returning the assembled JSON value.
    ///
    /// # Errors
    ///
    /// Same as [`DocumentationWriter::write`], minus serialization.
    pub fn write_value(&self) -> Result<Value> {
        let _span = debug_span!("write_documentation", media_type = self.mapper.media_type()).entered();
        let mut document = JsonObjectBuilder::new();

        if let Some(title) = self.documentation.title(self.request) {
            mapped("map_title", self.mapper.map_title(&mut document, &title))?;
        }
        if let Some(description) = self.documentation.description(self.request) {
            mapped(
                "map_description",
                self.mapper.map_description(&mut document, &description),
            )?;
        }

        mapped(
            "on_start",
            self.mapper
                .on_start(&mut document, self.documentation, self.request),
        )?;

        let walk = self.materialize()?;

        for name in walk.collection_routes.keys() {
            walk.write_nested_resources(&mut document, name)?;
            walk.write_collection_resource(&mut document, name)?;
        }

        for (name, routes) in walk.item_routes.iter() {
            walk.write_nested_resources(&mut document, name)?;
            walk.write_item_resource(&mut document, name, routes.form())?;
        }

        mapped(
            "on_finish",
            self.mapper
                .on_finish(&mut document, self.documentation, self.request),
        )?;

        debug!(
            collection_resources = walk.collection_resources.get(),
            item_resources = walk.item_resources.get(),
            nested_resources = walk.nested_resources.get(),
            "Documentation written"
        );

        Ok(document.into_value())
    }

    /// Fetch every supplier exactly once for this document.
    fn materialize(&self) -> Result<Walk<'a>> {
        let representors = self
            .documentation
            .representors()
            .map_err(|source| DocumentationError::supplier("representors", source))?;
        let nested_collection_routes = self
            .documentation
            .nested_collection_routes()
            .map_err(|source| DocumentationError::supplier("nested collection routes", source))?;
        let collection_routes = self
            .documentation
            .collection_routes()
            .map_err(|source| DocumentationError::supplier("collection routes", source))?;
        let item_routes = self
            .documentation
            .item_routes()
            .map_err(|source| DocumentationError::supplier("item routes", source))?;

        Ok(Walk {
            mapper: self.mapper,
            representors,
            collection_routes,
            item_routes,
            nested_collection_routes,
            collection_resources: Cell::new(0),
            item_resources: Cell::new(0),
            nested_resources: Cell::new(0),
        })
    }
}

/// Maps and counters of one document walk.
struct Walk<'a> {
    mapper: &'a dyn DocumentationMapper,
    representors: NamedMap<Representor>,
    collection_routes: NamedMap<CollectionRoutes>,
    item_routes: NamedMap<ItemRoutes>,
    nested_collection_routes: NamedMap<NestedCollectionRoutes>,
    collection_resources: Cell<usize>,
    item_resources: Cell<usize>,
    nested_resources: Cell<usize>,
}

impl Walk<'_> {
    fn write_nested_resources(&self, document: &mut JsonObjectBuilder, parent: &str) -> Result<()> {
        let nested_keys = self.nested_collection_routes.keys();
        for nested in nested_resources_of(parent, nested_keys, &self.representors) {
            trace!(parent, nested, "Writing nested collection resource");
            self.write_collection_resource(document, nested)?;
            self.nested_resources.set(self.nested_resources.get() + 1);
        }
        Ok(())
    }

    fn write_collection_resource(&self, document: &mut JsonObjectBuilder, name: &str) -> Result<()> {
        let Some(representor) = self.representors.get(name) else {
            trace!(resource = name, "No representor, collection resource skipped");
            return Ok(());
        };

        for type_name in representor.types() {
            let mut resource = JsonObjectBuilder::new();
            mapped(
                "on_start_resource",
                self.mapper.on_start_resource(document, &mut resource, type_name),
            )?;
            mapped(
                "map_resource_collection",
                self.mapper.map_resource_collection(&mut resource, type_name),
            )?;
            self.write_page_operations(&mut resource, name, type_name)?;
            mapped(
                "on_finish_resource",
                self.mapper.on_finish_resource(document, &mut resource, type_name),
            )?;
        }
        self.collection_resources.set(self.collection_resources.get() + 1);
        Ok(())
    }

    fn write_item_resource(
        &self,
        document: &mut JsonObjectBuilder,
        name: &str,
        form: Option<&Form>,
    ) -> Result<()> {
        let Some(representor) = self.representors.get(name) else {
            trace!(resource = name, "No representor, item resource skipped");
            return Ok(());
        };

        let fields = item_field_names(representor);
        for type_name in representor.types() {
            let mut resource = JsonObjectBuilder::new();
            mapped(
                "on_start_resource",
                self.mapper.on_start_resource(document, &mut resource, type_name),
            )?;
            mapped(
                "map_resource",
                self.mapper.map_resource(&mut resource, type_name),
            )?;
            self.write_item_operations(&mut resource, name, type_name)?;
            for field_name in &fields {
                self.write_property(&mut resource, field_name, is_required(form, field_name))?;
            }
            mapped(
                "on_finish_resource",
                self.mapper.on_finish_resource(document, &mut resource, type_name),
            )?;
        }
        self.item_resources.set(self.item_resources.get() + 1);
        Ok(())
    }

    fn write_page_operations(
        &self,
        resource: &mut JsonObjectBuilder,
        name: &str,
        type_name: &str,
    ) -> Result<()> {
        let Some(routes) = self.collection_routes.get(name) else {
            trace!(resource = name, "No collection routes, page operations skipped");
            return Ok(());
        };
        for operation in page_operations(name, routes) {
            self.write_operation(resource, name, type_name, &operation)?;
        }
        Ok(())
    }

    fn write_item_operations(
        &self,
        resource: &mut JsonObjectBuilder,
        name: &str,
        type_name: &str,
    ) -> Result<()> {
        let Some(routes) = self.item_routes.get(name) else {
            trace!(resource = name, "No item routes, item operations skipped");
            return Ok(());
        };
        for operation in item_operations(name, routes) {
            self.write_operation(resource, name, type_name, &operation)?;
        }
        Ok(())
    }

    fn write_operation(
        &self,
        resource: &mut JsonObjectBuilder,
        resource_name: &str,
        type_name: &str,
        operation: &Operation,
    ) -> Result<()> {
        let mut builder = JsonObjectBuilder::new();
        mapped(
            "on_start_operation",
            self.mapper.on_start_operation(resource, &mut builder, operation),
        )?;
        mapped(
            "map_operation",
            self.mapper
                .map_operation(&mut builder, resource_name, type_name, operation),
        )?;
        mapped(
            "on_finish_operation",
            self.mapper.on_finish_operation(resource, &mut builder, operation),
        )
    }

    fn write_property(
        &self,
        resource: &mut JsonObjectBuilder,
        field_name: &str,
        required: bool,
    ) -> Result<()> {
        let mut builder = JsonObjectBuilder::new();
        mapped(
            "on_start_property",
            self.mapper.on_start_property(resource, &mut builder, field_name),
        )?;
        mapped(
            "map_property",
            self.mapper.map_property(&mut builder, field_name, required),
        )?;
        mapped(
            "on_finish_property",
            self.mapper.on_finish_property(resource, &mut builder, field_name),
        )
    }
}

fn mapped(callback: &'static str, result: anyhow::Result<()>) -> Result<()> {
    result.map_err(|source| DocumentationError::mapper(callback, source))
}
