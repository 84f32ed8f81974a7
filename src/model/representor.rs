use super::NamedMap;
use serde::{Deserialize, Serialize};

/// Kind of a field declared on a [`Representor`].
///
/// The declaration order of the variants is the order in which fields are
/// written for an item resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKind {
    Binary,
    Boolean,
    BooleanList,
    Link,
    LocalizedString,
    Nested,
    Number,
    NumberList,
    String,
    StringList,
    RelatedModel,
    RelatedCollection,
}

impl FieldKind {
    /// Every kind, in emission order.
    pub const ALL: [FieldKind; 12] = [
        FieldKind::Binary,
        FieldKind::Boolean,
        FieldKind::BooleanList,
        FieldKind::Link,
        FieldKind::LocalizedString,
        FieldKind::Nested,
        FieldKind::Number,
        FieldKind::NumberList,
        FieldKind::String,
        FieldKind::StringList,
        FieldKind::RelatedModel,
        FieldKind::RelatedCollection,
    ];

    /// Kinds that are also written for nested representors: everything
    /// except related collections.
    pub const NESTABLE: [FieldKind; 11] = [
        FieldKind::Binary,
        FieldKind::Boolean,
        FieldKind::BooleanList,
        FieldKind::Link,
        FieldKind::LocalizedString,
        FieldKind::Nested,
        FieldKind::Number,
        FieldKind::NumberList,
        FieldKind::String,
        FieldKind::StringList,
        FieldKind::RelatedModel,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Binary => "binary",
            FieldKind::Boolean => "boolean",
            FieldKind::BooleanList => "boolean_list",
            FieldKind::Link => "link",
            FieldKind::LocalizedString => "localized_string",
            FieldKind::Nested => "nested",
            FieldKind::Number => "number",
            FieldKind::NumberList => "number_list",
            FieldKind::String => "string",
            FieldKind::StringList => "string_list",
            FieldKind::RelatedModel => "related_models",
            FieldKind::RelatedCollection => "related_collections",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field catalog of one resource type.
///
/// Keys are grouped by [`FieldKind`]; nested fields additionally carry the
/// representor of the nested object. In model files every kind is an
/// optional list of keys, and `nested` is a map from key to representor:
///
/// ```yaml
/// types: [Book]
/// boolean: [available]
/// number: [pages]
/// nested:
///   author:
///     types: [Person]
///     string: [name]
/// related_collections: [reviews]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Representor {
    types: Vec<String>,
    binary: Vec<String>,
    boolean: Vec<String>,
    boolean_list: Vec<String>,
    link: Vec<String>,
    localized_string: Vec<String>,
    nested: NamedMap<Representor>,
    number: Vec<String>,
    number_list: Vec<String>,
    string: Vec<String>,
    string_list: Vec<String>,
    related_models: Vec<String>,
    related_collections: Vec<String>,
}

impl Representor {
    /// Create a representor exposing the given type labels and no fields.
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Declare a field of `kind`.
    ///
    /// Keys are unique within a kind: declaring a key its kind already holds
    /// is a no-op. [`FieldKind::Nested`] fields declared this way get an
    /// empty child representor; use [`Representor::with_nested`] to supply one.
    #[must_use]
    pub fn with_field(mut self, kind: FieldKind, key: impl Into<String>) -> Self {
        let key = key.into();
        if self.keys(kind).contains(&key.as_str()) {
            return self;
        }
        match kind {
            FieldKind::Binary => self.binary.push(key),
            FieldKind::Boolean => self.boolean.push(key),
            FieldKind::BooleanList => self.boolean_list.push(key),
            FieldKind::Link => self.link.push(key),
            FieldKind::LocalizedString => self.localized_string.push(key),
            FieldKind::Nested => {
                self.nested.insert(key, Representor::default());
            }
            FieldKind::Number => self.number.push(key),
            FieldKind::NumberList => self.number_list.push(key),
            FieldKind::String => self.string.push(key),
            FieldKind::StringList => self.string_list.push(key),
            FieldKind::RelatedModel => self.related_models.push(key),
            FieldKind::RelatedCollection => self.related_collections.push(key),
        }
        self
    }

    #[must_use]
    pub fn with_nested(mut self, key: impl Into<String>, representor: Representor) -> Self {
        self.nested.insert(key, representor);
        self
    }

    #[must_use]
    pub fn with_related_model(self, key: impl Into<String>) -> Self {
        self.with_field(FieldKind::RelatedModel, key)
    }

    #[must_use]
    pub fn with_related_collection(self, key: impl Into<String>) -> Self {
        self.with_field(FieldKind::RelatedCollection, key)
    }

    /// Declared type labels, in declaration order.
    #[must_use]
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Keys declared for `kind`, in declaration order.
    #[must_use]
    pub fn keys(&self, kind: FieldKind) -> Vec<&str> {
        let keys: &[String] = match kind {
            FieldKind::Binary => &self.binary,
            FieldKind::Boolean => &self.boolean,
            FieldKind::BooleanList => &self.boolean_list,
            FieldKind::Link => &self.link,
            FieldKind::LocalizedString => &self.localized_string,
            FieldKind::Nested => return self.nested.keys().collect(),
            FieldKind::Number => &self.number,
            FieldKind::NumberList => &self.number_list,
            FieldKind::String => &self.string,
            FieldKind::StringList => &self.string_list,
            FieldKind::RelatedModel => &self.related_models,
            FieldKind::RelatedCollection => &self.related_collections,
        };
        keys.iter().map(String::as_str).collect()
    }

    /// Nested fields with their child representors.
    pub fn nested_fields(&self) -> impl Iterator<Item = (&str, &Representor)> {
        self.nested.iter()
    }

    /// Number of representor levels below this one (0 when nothing is nested).
    #[must_use]
    pub fn nested_depth(&self) -> usize {
        self.nested
            .values()
            .map(|child| child.nested_depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_by_kind() {
        let representor = Representor::new(["Book"])
            .with_field(FieldKind::Number, "pages")
            .with_field(FieldKind::Boolean, "active")
            .with_nested("author", Representor::new(["Person"]))
            .with_related_collection("reviews");

        assert_eq!(representor.types(), ["Book".to_string()]);
        assert_eq!(representor.keys(FieldKind::Number), vec!["pages"]);
        assert_eq!(representor.keys(FieldKind::Boolean), vec!["active"]);
        assert_eq!(representor.keys(FieldKind::Nested), vec!["author"]);
        assert_eq!(representor.keys(FieldKind::RelatedCollection), vec!["reviews"]);
        assert!(representor.keys(FieldKind::Binary).is_empty());
    }

    #[test]
    fn test_field_keys_unique_within_kind() {
        let representor = Representor::new(["Book"])
            .with_field(FieldKind::String, "title")
            .with_field(FieldKind::String, "title")
            .with_nested("author", Representor::new(["Person"]))
            .with_field(FieldKind::Nested, "author")
            .with_field(FieldKind::StringList, "title");

        assert_eq!(representor.keys(FieldKind::String), vec!["title"]);
        assert_eq!(representor.keys(FieldKind::StringList), vec!["title"]);
        // an existing nested child is kept
        assert_eq!(
            representor.nested_fields().next().map(|(_, child)| child.types()),
            Some(&["Person".to_string()][..])
        );
    }

    #[test]
    fn test_nested_depth() {
        let leaf = Representor::new(["Address"]);
        let middle = Representor::new(["Person"]).with_nested("address", leaf);
        let root = Representor::new(["Book"])
            .with_nested("author", middle)
            .with_field(FieldKind::Nested, "extra");

        assert_eq!(root.nested_depth(), 2);
        assert_eq!(Representor::new(["Flat"]).nested_depth(), 0);
    }

    #[test]
    fn test_nestable_excludes_related_collections() {
        assert!(!FieldKind::NESTABLE.contains(&FieldKind::RelatedCollection));
        assert_eq!(FieldKind::ALL.last(), Some(&FieldKind::RelatedCollection));
        assert_eq!(&FieldKind::ALL[..11], &FieldKind::NESTABLE[..]);
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let yaml = r#"
types: [Book, CreativeWork]
string: [title]
nested:
  author:
    types: [Person]
    string: [name]
related_models: [publisher]
"#;
        let representor: Representor = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(representor.types().len(), 2);
        assert_eq!(representor.keys(FieldKind::RelatedModel), vec!["publisher"]);
        let (key, child) = representor.nested_fields().next().unwrap();
        assert_eq!(key, "author");
        assert_eq!(child.keys(FieldKind::String), vec!["name"]);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let yaml = "types: [Book]\nintegers: [pages]\n";
        assert!(serde_yaml::from_str::<Representor>(yaml).is_err());
    }
}
