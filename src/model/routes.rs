use super::Form;
use serde::{Deserialize, Serialize};

/// Routes declared at collection scope (`GET /books`, `POST /books`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CollectionRoutes {
    form: Option<Form>,
}

impl CollectionRoutes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_form(form: Form) -> Self {
        Self { form: Some(form) }
    }

    /// Form describing the body of the create operation.
    #[must_use]
    pub fn form(&self) -> Option<&Form> {
        self.form.as_ref()
    }
}

/// Routes declared at item scope (`GET|PUT|DELETE /books/{id}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ItemRoutes {
    form: Option<Form>,
}

impl ItemRoutes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_form(form: Form) -> Self {
        Self { form: Some(form) }
    }

    /// Form describing the body of the update operation; also used to
    /// resolve which properties of the item are required.
    #[must_use]
    pub fn form(&self) -> Option<&Form> {
        self.form.as_ref()
    }
}

/// Routes of a collection that only exists below a parent resource.
///
/// Keys of nested collection routes follow the `<parent>-<nested>` naming
/// convention, e.g. `book-reviews`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NestedCollectionRoutes {
    form: Option<Form>,
}

impl NestedCollectionRoutes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_form(form: Form) -> Self {
        Self { form: Some(form) }
    }

    #[must_use]
    pub fn form(&self) -> Option<&Form> {
        self.form.as_ref()
    }
}
