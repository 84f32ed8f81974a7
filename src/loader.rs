//! # Model Loader
//!
//! Reads a [`ResourceModel`] from a file and turns it into a
//! [`Documentation`].
//!
//! The format is picked from the file extension: `.yaml`/`.yml` as YAML,
//! `.toml` as TOML, `.json` and anything else as JSON.
//!
//! ```yaml
//! title: Bookstore
//! representors:
//!   book:
//!     types: [Book]
//!     string: [title]
//! item_routes:
//!   book:
//!     form:
//!       - { name: title, required: true }
//! ```

use crate::config::WriterConfig;
use crate::error::DocumentationError;
use crate::model::{Documentation, ResourceModel};
use anyhow::Context;
use std::path::Path;
use tracing::{debug, info};

/// Serialization format of a model file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    Yaml,
    Json,
    Toml,
}

impl ModelFormat {
    /// Format implied by the extension of `path`; JSON when unknown.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => ModelFormat::Yaml,
            Some("toml") => ModelFormat::Toml,
            _ => ModelFormat::Json,
        }
    }
}

/// Parse a model from `content` in `format`.
pub fn parse_model(content: &str, format: ModelFormat) -> anyhow::Result<ResourceModel> {
    let model = match format {
        ModelFormat::Yaml => serde_yaml::from_str(content).context("invalid YAML model")?,
        ModelFormat::Json => serde_json::from_str(content).context("invalid JSON model")?,
        ModelFormat::Toml => toml::from_str(content).context("invalid TOML model")?,
    };
    Ok(model)
}

/// Load a model file.
pub fn load_model(path: impl AsRef<Path>) -> anyhow::Result<ResourceModel> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read model file {}", path.display()))?;
    let format = ModelFormat::from_path(path);
    let model = parse_model(&content, format)
        .with_context(|| format!("failed to parse model file {}", path.display()))?;

    debug!(
        path = %path.display(),
        format = ?format,
        representors = model.representors.len(),
        collection_routes = model.collection_routes.len(),
        item_routes = model.item_routes.len(),
        nested_collection_routes = model.nested_collection_routes.len(),
        "Model loaded"
    );
    Ok(model)
}

/// Reject any representor nesting deeper than `limit` levels.
pub fn check_nesting(model: &ResourceModel, limit: usize) -> Result<(), DocumentationError> {
    for (name, representor) in model.representors.iter() {
        let depth = representor.nested_depth();
        if depth > limit {
            return Err(DocumentationError::NestingTooDeep {
                name: name.to_string(),
                depth,
                limit,
            });
        }
    }
    Ok(())
}

/// Load a model file and wrap it as a [`Documentation`], enforcing the
/// nesting guard of `config`.
///
/// A nesting violation surfaces as a [`DocumentationError::NestingTooDeep`]
/// inside the returned error.
pub fn load_documentation(path: impl AsRef<Path>, config: &WriterConfig) -> anyhow::Result<Documentation> {
    let path = path.as_ref();
    let model = load_model(path)?;
    check_nesting(&model, config.max_nested_depth)
        .with_context(|| format!("model file {} rejected", path.display()))?;

    info!(
        path = %path.display(),
        representors = model.representors.len(),
        "Documentation loaded"
    );
    Ok(Documentation::from_model(model))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldKind, NamedMap, Representor};

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ModelFormat::from_path(Path::new("api.yaml")), ModelFormat::Yaml);
        assert_eq!(ModelFormat::from_path(Path::new("api.YML")), ModelFormat::Yaml);
        assert_eq!(ModelFormat::from_path(Path::new("api.toml")), ModelFormat::Toml);
        assert_eq!(ModelFormat::from_path(Path::new("api.json")), ModelFormat::Json);
        assert_eq!(ModelFormat::from_path(Path::new("api.model")), ModelFormat::Json);
        assert_eq!(ModelFormat::from_path(Path::new("api")), ModelFormat::Json);
    }

    #[test]
    fn test_parse_yaml_keeps_declaration_order() {
        let model = parse_model(
            "representors:\n  zebra:\n    types: [Zebra]\n  apple:\n    types: [Apple]\n",
            ModelFormat::Yaml,
        )
        .unwrap();
        assert_eq!(model.representors.keys().collect::<Vec<_>>(), vec!["zebra", "apple"]);
    }

    #[test]
    fn test_parse_toml() {
        let model = parse_model(
            "title = \"Bookstore\"\n\n[representors.book]\ntypes = [\"Book\"]\nstring = [\"title\"]\n\n[item_routes.book]\n",
            ModelFormat::Toml,
        )
        .unwrap();
        assert_eq!(model.representors.get("book").unwrap().keys(FieldKind::String), vec!["title"]);
        assert!(model.item_routes.contains_key("book"));
    }

    #[test]
    fn test_parse_rejects_unknown_fields() {
        let err = parse_model("{\"representers\": {}}", ModelFormat::Json).unwrap_err();
        assert!(format!("{err:#}").contains("representers"));
    }

    #[test]
    fn test_check_nesting() {
        let deep = Representor::new(["A"]).with_nested(
            "b",
            Representor::new(["B"]).with_nested("c", Representor::new(["C"])),
        );
        let model = ResourceModel {
            representors: NamedMap::new().with("a", deep),
            ..ResourceModel::default()
        };

        assert!(check_nesting(&model, 2).is_ok());
        match check_nesting(&model, 1) {
            Err(DocumentationError::NestingTooDeep { name, depth, limit }) => {
                assert_eq!((name.as_str(), depth, limit), ("a", 2, 1));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
