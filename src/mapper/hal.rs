use super::DocumentationMapper;
use crate::json::JsonObjectBuilder;
use crate::model::{Documentation, Operation};
use crate::request::RequestInfo;
use anyhow::Result;
use serde_json::json;

/// Writes documentation as a HAL resource index.
///
/// ```json
/// {
///   "title": "Bookstore",
///   "_links": { "self": { "href": "/doc" } },
///   "resources": {
///     "BookCollection": { "name": "BookCollection", "operations": [...] },
///     "Book": { "name": "Book", "operations": [...], "properties": [...] }
///   }
/// }
/// ```
///
/// Collection resources are keyed `<Type>Collection` so that they never
/// collide with the item resource of the same type. Keys keep the order in
/// which the walk first writes them. Two representors sharing a type label
/// share one entry: the later block replaces the earlier one in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct HalMapper;

impl DocumentationMapper for HalMapper {
    fn media_type(&self) -> &'static str {
        "application/hal+json"
    }

    fn map_title(&self, document: &mut JsonObjectBuilder, title: &str) -> Result<()> {
        document.field("title").string_value(title);
        Ok(())
    }

    fn map_description(&self, document: &mut JsonObjectBuilder, description: &str) -> Result<()> {
        document.field("description").string_value(description);
        Ok(())
    }

    fn on_start(
        &self,
        document: &mut JsonObjectBuilder,
        _documentation: &Documentation,
        request: &RequestInfo,
    ) -> Result<()> {
        let href = match request.application_url() {
            Some(url) => format!("{}/doc", url.as_str().trim_end_matches('/')),
            None => "/doc".to_string(),
        };
        document
            .nested_field(&["_links", "self"], "href")
            .string_value(href);
        document.field("resources").value(json!({}));
        Ok(())
    }

    fn map_resource(&self, resource: &mut JsonObjectBuilder, type_name: &str) -> Result<()> {
        resource.field("name").string_value(type_name);
        resource.field("properties").array_value();
        Ok(())
    }

    fn map_resource_collection(&self, resource: &mut JsonObjectBuilder, type_name: &str) -> Result<()> {
        resource
            .field("name")
            .string_value(format!("{type_name}Collection"));
        Ok(())
    }

    fn on_finish_resource(
        &self,
        document: &mut JsonObjectBuilder,
        resource: &mut JsonObjectBuilder,
        type_name: &str,
    ) -> Result<()> {
        let key = resource.get_str("name").unwrap_or(type_name).to_string();
        document
            .nested_field(&["resources"], &key)
            .object_value(resource);
        Ok(())
    }

    fn map_property(&self, property: &mut JsonObjectBuilder, field_name: &str, required: bool) -> Result<()> {
        property.field("name").string_value(field_name);
        property.field("required").bool_value(required);
        Ok(())
    }

    fn on_finish_property(
        &self,
        resource: &mut JsonObjectBuilder,
        property: &mut JsonObjectBuilder,
        _field_name: &str,
    ) -> Result<()> {
        resource.field("properties").array_value().add_builder(property);
        Ok(())
    }

    fn map_operation(
        &self,
        operation_builder: &mut JsonObjectBuilder,
        _resource_name: &str,
        _type_name: &str,
        operation: &Operation,
    ) -> Result<()> {
        operation_builder
            .field("method")
            .string_value(operation.method.as_str());
        operation_builder.field("name").string_value(&operation.name);
        operation_builder.field("collection").bool_value(operation.collection);

        if let Some(form) = &operation.form {
            operation_builder.field("expects").value(json!({
                "required": form.required_fields().collect::<Vec<_>>(),
                "optional": form.optional_fields().collect::<Vec<_>>(),
            }));
        }
        Ok(())
    }

    fn on_finish_operation(
        &self,
        resource: &mut JsonObjectBuilder,
        operation_builder: &mut JsonObjectBuilder,
        _operation: &Operation,
    ) -> Result<()> {
        resource.field("operations").array_value().add_builder(operation_builder);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Form, Method};

    #[test]
    fn test_resources_keyed_by_name() {
        let mut document = JsonObjectBuilder::new();
        let mut collection = JsonObjectBuilder::new();
        HalMapper.map_resource_collection(&mut collection, "Book").unwrap();
        HalMapper.on_finish_resource(&mut document, &mut collection, "Book").unwrap();

        let mut item = JsonObjectBuilder::new();
        HalMapper.map_resource(&mut item, "Book").unwrap();
        HalMapper.on_finish_resource(&mut document, &mut item, "Book").unwrap();

        let resources = document.get("resources").unwrap();
        assert_eq!(resources["BookCollection"]["name"], "BookCollection");
        assert_eq!(resources["Book"]["name"], "Book");
        assert_eq!(resources["Book"]["properties"], json!([]));
    }

    #[test]
    fn test_resources_keep_walk_order() {
        let mut document = JsonObjectBuilder::new();
        for (type_name, collection) in [("Zebra", true), ("Apple", false), ("Mango", true)] {
            let mut resource = JsonObjectBuilder::new();
            if collection {
                HalMapper.map_resource_collection(&mut resource, type_name).unwrap();
            } else {
                HalMapper.map_resource(&mut resource, type_name).unwrap();
            }
            HalMapper.on_finish_resource(&mut document, &mut resource, type_name).unwrap();
        }

        let resources = document.get("resources").unwrap().as_object().unwrap();
        assert_eq!(
            resources.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["ZebraCollection", "Apple", "MangoCollection"]
        );
    }

    #[test]
    fn test_shared_type_label_replaces_entry_in_place() {
        let mut document = JsonObjectBuilder::new();
        let blocks = [
            ("Book", "book/retrieve"),
            ("Shelf", "shelf/retrieve"),
            ("Book", "edition/retrieve"),
        ];
        for (type_name, operation) in blocks {
            let mut resource = JsonObjectBuilder::new();
            HalMapper.map_resource(&mut resource, type_name).unwrap();
            let mut builder = JsonObjectBuilder::new();
            let retrieve = Operation::new(Method::Get, operation, false);
            HalMapper.map_operation(&mut builder, "book", type_name, &retrieve).unwrap();
            HalMapper.on_finish_operation(&mut resource, &mut builder, &retrieve).unwrap();
            HalMapper.on_finish_resource(&mut document, &mut resource, type_name).unwrap();
        }

        let resources = document.get("resources").unwrap().as_object().unwrap();
        assert_eq!(resources.keys().map(String::as_str).collect::<Vec<_>>(), vec!["Book", "Shelf"]);
        assert_eq!(resources["Book"]["operations"][0]["name"], "edition/retrieve");
        assert_eq!(resources["Book"]["operations"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_operation_expects_split_by_requirement() {
        let form = Form::default().with_field("title", true).with_field("pages", false);
        let create = Operation::with_form(form, Method::Post, "books/create");
        let mut builder = JsonObjectBuilder::new();

        HalMapper.map_operation(&mut builder, "books", "Book", &create).unwrap();

        assert_eq!(
            builder.build(),
            json!({
                "method": "POST",
                "name": "books/create",
                "collection": false,
                "expects": { "required": ["title"], "optional": ["pages"] }
            })
        );
    }

    #[test]
    fn test_self_link_defaults_to_relative() {
        let mut document = JsonObjectBuilder::new();
        let documentation = Documentation::from_model(Default::default());
        HalMapper
            .on_start(&mut document, &documentation, &RequestInfo::default())
            .unwrap();
        assert_eq!(document.get("_links").unwrap()["self"]["href"], "/doc");
    }
}
