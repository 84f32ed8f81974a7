use serde::{Deserialize, Serialize};

/// One field accepted by a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    #[serde(default)]
    pub required: bool,
}

impl FormField {
    pub fn new(name: impl Into<String>, required: bool) -> Self {
        FormField {
            name: name.into(),
            required,
        }
    }
}

/// Ordered list of fields describing a create or update body.
///
/// In model files a form is written as a plain list:
///
/// ```yaml
/// form:
///   - { name: title, required: true }
///   - { name: pages }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Form {
    fields: Vec<FormField>,
}

impl Form {
    pub fn new(fields: impl IntoIterator<Item = FormField>) -> Self {
        Form {
            fields: fields.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, required: bool) -> Self {
        self.fields.push(FormField::new(name, required));
        self
    }

    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// First field whose name equals `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Whether `name` is a required field of this form. Absent fields are optional.
    #[must_use]
    pub fn is_required(&self, name: &str) -> bool {
        self.field(name).map(|field| field.required).unwrap_or(false)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|field| field.required)
            .map(|field| field.name.as_str())
    }

    pub fn optional_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|field| !field.required)
            .map(|field| field.name.as_str())
    }
}
