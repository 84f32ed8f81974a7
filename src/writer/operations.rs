//! Canonical operation sets derived from declared routes.
//!
//! The set does not depend on which HTTP handlers the routes actually
//! declare: an item resource always documents retrieve, update and delete, a
//! collection resource always documents list and create.

use crate::model::{CollectionRoutes, ItemRoutes, Method, Operation};

/// Operations of item resource `name`: retrieve, update (with the item
/// form, if any) and delete, in that order.
#[must_use]
pub fn item_operations(name: &str, routes: &ItemRoutes) -> [Operation; 3] {
    [
        Operation::new(Method::Get, format!("{name}/retrieve"), false),
        Operation::with_optional_form(routes.form(), Method::Put, format!("{name}/update")),
        Operation::new(Method::Delete, format!("{name}/delete"), false),
    ]
}

/// Operations of collection resource `name`: list (a collection operation
/// named after the resource itself) and create (with the collection form, if
/// any), in that order.
#[must_use]
pub fn page_operations(name: &str, routes: &CollectionRoutes) -> [Operation; 2] {
    [
        Operation::new(Method::Get, name, true),
        Operation::with_optional_form(routes.form(), Method::Post, format!("{name}/create")),
    ]
}
