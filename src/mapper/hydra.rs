use super::DocumentationMapper;
use crate::json::JsonObjectBuilder;
use crate::model::{Documentation, Method, Operation};
use crate::request::RequestInfo;
use anyhow::Result;
use serde_json::json;

const HYDRA_CONTEXT: &str = "http://www.w3.org/ns/hydra/context.jsonld";
const NOTHING: &str = "http://www.w3.org/2002/07/owl#Nothing";

/// Writes documentation as a Hydra `ApiDocumentation` (JSON-LD).
///
/// Resources become `supportedClass` entries, operations
/// `supportedOperation` entries and fields `supportedProperty` entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct HydraMapper;

impl HydraMapper {
    fn base(request: &RequestInfo) -> String {
        request
            .application_url()
            .map(|url| url.as_str().trim_end_matches('/').to_string())
            .unwrap_or_default()
    }
}

impl DocumentationMapper for HydraMapper {
    fn media_type(&self) -> &'static str {
        "application/ld+json"
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
        let base = Self::base(request);
        document
            .field("@context")
            .value(json!([HYDRA_CONTEXT, { "vocab": format!("{base}/vocab#") }]));
        document.field("@id").string_value(format!("{base}/doc"));
        document.field("@type").string_value("ApiDocumentation");
        // present even when the API declares no resources
        document.field("supportedClass").array_value();
        Ok(())
    }

    fn map_resource(&self, resource: &mut JsonObjectBuilder, type_name: &str) -> Result<()> {
        resource.field("@id").string_value(format!("vocab:{type_name}"));
        resource.field("@type").string_value("Class");
        resource.field("title").string_value(type_name);
        Ok(())
    }

    fn map_resource_collection(&self, resource: &mut JsonObjectBuilder, type_name: &str) -> Result<()> {
        resource
            .field("@id")
            .string_value(format!("vocab:{type_name}Collection"));
        resource.field("@type").string_value("Class");
        resource.field("subClassOf").string_value("Collection");
        resource
            .field("title")
            .string_value(format!("{type_name}Collection"));
        resource
            .field("description")
            .string_value(format!("A collection of {type_name}"));
        Ok(())
    }

    fn on_finish_resource(
        &self,
        document: &mut JsonObjectBuilder,
        resource: &mut JsonObjectBuilder,
        _type_name: &str,
    ) -> Result<()> {
        document.field("supportedClass").array_value().add_builder(resource);
        Ok(())
    }

    fn map_property(&self, property: &mut JsonObjectBuilder, field_name: &str, required: bool) -> Result<()> {
        property.field("@type").string_value("SupportedProperty");
        property.field("property").string_value(field_name);
        property.field("readable").bool_value(true);
        property.field("writeable").bool_value(true);
        property.field("required").bool_value(required);
        Ok(())
    }

    fn on_finish_property(
        &self,
        resource: &mut JsonObjectBuilder,
        property: &mut JsonObjectBuilder,
        _field_name: &str,
    ) -> Result<()> {
        resource.field("supportedProperty").array_value().add_builder(property);
        Ok(())
    }

    fn map_operation(
        &self,
        operation_builder: &mut JsonObjectBuilder,
        _resource_name: &str,
        type_name: &str,
        operation: &Operation,
    ) -> Result<()> {
        operation_builder
            .field("@id")
            .string_value(format!("_:{}", operation.name));
        operation_builder.field("@type").string_value("Operation");
        operation_builder
            .field("method")
            .string_value(operation.method.as_str());

        let returns = match (operation.method, operation.collection) {
            (Method::Delete, _) => NOTHING.to_string(),
            (_, true) => format!("vocab:{type_name}Collection"),
            _ => format!("vocab:{type_name}"),
        };
        operation_builder.field("returns").string_value(returns);

        if let Some(form) = &operation.form {
            let mut expects = JsonObjectBuilder::new();
            expects.field("@type").string_value("Class");
            let mut properties = expects.field("supportedProperty").array_value();
            for field in form.fields() {
                properties.add(json!({
                    "@type": "SupportedProperty",
                    "property": field.name,
                    "required": field.required,
                }));
            }
            operation_builder.field("expects").object_value(&expects);
        }
        Ok(())
    }

    fn on_finish_operation(
        &self,
        resource: &mut JsonObjectBuilder,
        operation_builder: &mut JsonObjectBuilder,
        _operation: &Operation,
    ) -> Result<()> {
        resource
            .field("supportedOperation")
            .array_value()
            .add_builder(operation_builder);
        Ok(())
    }
}
