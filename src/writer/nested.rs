//! Association of nested collection routes with their parent resources.
//!
//! A nested route key `K` belongs to parent `name` when splitting `K` on the
//! literal `"<name>-"` leaves exactly an empty prefix and the nested resource
//! name, and that nested name has a representor. `book-reviews` belongs to
//! `book` (nested resource `reviews`); `otherbook-reviews` does not.

use crate::model::{NamedMap, Representor};

/// Nested resource name designated by `key` under `parent`, if `key`
/// follows the `<parent>-<nested>` convention.
///
/// Trailing empty pieces of the split are discarded before counting, so a
/// bare `book-` designates nothing. Representor existence is not checked
/// here.
#[must_use]
pub fn nested_resource_name<'k>(key: &'k str, parent: &str) -> Option<&'k str> {
    if parent.is_empty() {
        return None;
    }

    let separator = format!("{parent}-");
    let mut parts: Vec<&str> = key.split(separator.as_str()).collect();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }

    match parts.as_slice() {
        [route, nested] if route.is_empty() && route != nested => Some(*nested),
        _ => None,
    }
}

/// Every `(parent, nested)` pair `key` associates with, in `parents` order,
/// restricted to nested names that have a representor.
pub fn candidate_parents<'k, 'p>(
    key: &'k str,
    parents: &[&'p str],
    representors: &NamedMap<Representor>,
) -> Vec<(&'p str, &'k str)> {
    parents
        .iter()
        .filter_map(|parent| {
            nested_resource_name(key, parent)
                .filter(|nested| representors.contains_key(nested))
                .map(|nested| (*parent, nested))
        })
        .collect()
}

/// Nested resource names `parent` designates, in nested routes map order.
///
/// Every parent is matched independently: a key like `a-b-c` designates
/// `b-c` under `a` and `c` under `a-b`.
pub(crate) fn nested_resources_of<'k>(
    parent: &str,
    nested_keys: impl Iterator<Item = &'k str>,
    representors: &NamedMap<Representor>,
) -> Vec<&'k str> {
    nested_keys
        .flat_map(|key| candidate_parents(key, &[parent], representors))
        .map(|(_, nested)| nested)
        .collect()
}
