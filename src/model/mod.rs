//! # Resource Model
//!
//! The read-only description of an API that the documentation writer walks:
//!
//! - **[`Representor`]** - field catalog of a resource type, grouped by [`FieldKind`]
//! - **[`CollectionRoutes`] / [`ItemRoutes`] / [`NestedCollectionRoutes`]** - declared
//!   routes per resource name, each with an optional [`Form`]
//! - **[`Documentation`]** - title/description resolvers plus suppliers of the maps above
//! - **[`ResourceModel`]** - the same content as plain data, loadable from a file
//! - **[`Operation`]** - transient action handed to mappers while writing
//!
//! All maps are [`NamedMap`]s, so resource order is the registration order.

mod documentation;
mod form;
mod named_map;
mod operation;
mod representor;
mod routes;

pub use documentation::{Documentation, LocalizedText, MapSupplier, RequestFunction, ResourceModel};
pub use form::{Form, FormField};
pub use named_map::NamedMap;
pub use operation::{Method, Operation};
pub use representor::{FieldKind, Representor};
pub use routes::{CollectionRoutes, ItemRoutes, NestedCollectionRoutes};
