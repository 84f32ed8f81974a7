//! Field enumeration for item resources.

use crate::model::{FieldKind, Form, Representor};

/// Keys of every nestable kind of `representor`, in [`FieldKind::NESTABLE`] order.
#[must_use]
pub fn nestable_field_names(representor: &Representor) -> Vec<&str> {
    FieldKind::NESTABLE
        .iter()
        .flat_map(|kind| representor.keys(*kind))
        .collect()
}

/// Every property written for an item resource of `representor`.
///
/// Nestable fields come first, then related collections, then the nestable
/// fields of each nested representor (one level, flattened; a child's own
/// related collections and grandchildren are not walked).
#[must_use]
pub fn item_field_names(representor: &Representor) -> Vec<&str> {
    let mut names = nestable_field_names(representor);
    names.extend(representor.keys(FieldKind::RelatedCollection));
    for (_, child) in representor.nested_fields() {
        names.extend(nestable_field_names(child));
    }
    names
}

/// Whether `field_name` is required by `form`; fields are optional without a form.
#[must_use]
pub fn is_required(form: Option<&Form>, field_name: &str) -> bool {
    form.is_some_and(|form| form.is_required(field_name))
}
