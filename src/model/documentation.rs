use super::{CollectionRoutes, ItemRoutes, NamedMap, NestedCollectionRoutes, Representor};
use crate::request::RequestInfo;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Resolves a value (title, description) against the current request.
pub type RequestFunction<T> = Arc<dyn Fn(&RequestInfo) -> T + Send + Sync>;

/// Hands out a named map on demand; may compute it, may fail.
pub type MapSupplier<T> = Arc<dyn Fn() -> anyhow::Result<NamedMap<T>> + Send + Sync>;

/// Root descriptor of an API: resolvers for its title and description plus
/// suppliers of its representors and routes.
///
/// A `Documentation` is read-only; the writer calls each supplier once per
/// document.
#[derive(Clone)]
pub struct Documentation {
    title: Option<RequestFunction<Option<String>>>,
    description: Option<RequestFunction<Option<String>>>,
    representors: MapSupplier<Representor>,
    collection_routes: MapSupplier<CollectionRoutes>,
    item_routes: MapSupplier<ItemRoutes>,
    nested_collection_routes: MapSupplier<NestedCollectionRoutes>,
}

impl Documentation {
    pub fn new<R, C, I, N>(
        representors: R,
        collection_routes: C,
        item_routes: I,
        nested_collection_routes: N,
    ) -> Self
    where
        R: Fn() -> anyhow::Result<NamedMap<Representor>> + Send + Sync + 'static,
        C: Fn() -> anyhow::Result<NamedMap<CollectionRoutes>> + Send + Sync + 'static,
        I: Fn() -> anyhow::Result<NamedMap<ItemRoutes>> + Send + Sync + 'static,
        N: Fn() -> anyhow::Result<NamedMap<NestedCollectionRoutes>> + Send + Sync + 'static,
    {
        Documentation {
            title: None,
            description: None,
            representors: Arc::new(representors),
            collection_routes: Arc::new(collection_routes),
            item_routes: Arc::new(item_routes),
            nested_collection_routes: Arc::new(nested_collection_routes),
        }
    }

    /// Wrap a static [`ResourceModel`]; every supplier hands out a copy of the
    /// corresponding map.
    #[must_use]
    pub fn from_model(model: ResourceModel) -> Self {
        let model = Arc::new(model);

        let representors = {
            let model = Arc::clone(&model);
            move || -> anyhow::Result<_> { Ok(model.representors.clone()) }
        };
        let collection_routes = {
            let model = Arc::clone(&model);
            move || -> anyhow::Result<_> { Ok(model.collection_routes.clone()) }
        };
        let item_routes = {
            let model = Arc::clone(&model);
            move || -> anyhow::Result<_> { Ok(model.item_routes.clone()) }
        };
        let nested_collection_routes = {
            let model = Arc::clone(&model);
            move || -> anyhow::Result<_> { Ok(model.nested_collection_routes.clone()) }
        };

        let mut documentation = Documentation::new(
            representors,
            collection_routes,
            item_routes,
            nested_collection_routes,
        );

        if let Some(title) = model.title.clone() {
            documentation = documentation.with_title(move |request| title.resolve(request));
        }
        if let Some(description) = model.description.clone() {
            documentation =
                documentation.with_description(move |request| description.resolve(request));
        }
        documentation
    }

    #[must_use]
    pub fn with_title<F>(mut self, title: F) -> Self
    where
        F: Fn(&RequestInfo) -> Option<String> + Send + Sync + 'static,
    {
        self.title = Some(Arc::new(title));
        self
    }

    #[must_use]
    pub fn with_description<F>(mut self, description: F) -> Self
    where
        F: Fn(&RequestInfo) -> Option<String> + Send + Sync + 'static,
    {
        self.description = Some(Arc::new(description));
        self
    }

    /// Title of the API for this request, if a resolver is set and yields one.
    #[must_use]
    pub fn title(&self, request: &RequestInfo) -> Option<String> {
        self.title.as_ref().and_then(|title| title(request))
    }

    #[must_use]
    pub fn description(&self, request: &RequestInfo) -> Option<String> {
        self.description
            .as_ref()
            .and_then(|description| description(request))
    }

    pub fn representors(&self) -> anyhow::Result<NamedMap<Representor>> {
        (self.representors)()
    }

    pub fn collection_routes(&self) -> anyhow::Result<NamedMap<CollectionRoutes>> {
        (self.collection_routes)()
    }

    pub fn item_routes(&self) -> anyhow::Result<NamedMap<ItemRoutes>> {
        (self.item_routes)()
    }

    pub fn nested_collection_routes(&self) -> anyhow::Result<NamedMap<NestedCollectionRoutes>> {
        (self.nested_collection_routes)()
    }
}

impl std::fmt::Debug for Documentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Documentation")
            .field("title", &self.title.is_some())
            .field("description", &self.description.is_some())
            .finish_non_exhaustive()
    }
}

/// Text that is either the same for every request or chosen by language.
///
/// ```yaml
/// title: Bookstore API
/// description:
///   default: A store of books
///   es: Una tienda de libros
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    ByLanguage(BTreeMap<String, String>),
}

impl LocalizedText {
    /// Pick the text for the request's preferred languages.
    ///
    /// A full tag (`es-mx`) also matches its primary subtag (`es`). Falls
    /// back to the `default` entry when no language matches.
    #[must_use]
    pub fn resolve(&self, request: &RequestInfo) -> Option<String> {
        let texts = match self {
            LocalizedText::Plain(text) => return Some(text.clone()),
            LocalizedText::ByLanguage(texts) => texts,
        };

        let lookup = |tag: &str| {
            texts
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(tag))
                .map(|(_, text)| text.clone())
        };

        request
            .languages()
            .iter()
            .find_map(|tag| {
                lookup(tag).or_else(|| tag.split_once('-').and_then(|(primary, _)| lookup(primary)))
            })
            .or_else(|| lookup("default"))
    }
}

/// Static, file-loadable form of a [`Documentation`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourceModel {
    pub title: Option<LocalizedText>,
    pub description: Option<LocalizedText>,
    pub representors: NamedMap<Representor>,
    pub collection_routes: NamedMap<CollectionRoutes>,
    pub item_routes: NamedMap<ItemRoutes>,
    pub nested_collection_routes: NamedMap<NestedCollectionRoutes>,
}
