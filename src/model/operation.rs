use super::Form;

/// HTTP verb of a documented operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => http::Method::GET,
            Method::Post => http::Method::POST,
            Method::Put => http::Method::PUT,
            Method::Delete => http::Method::DELETE,
        }
    }
}

/// One action exposed for a resource.
///
/// Operations are synthesized while the documentation is written and handed
/// to the mapper; they are never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub method: Method,
    pub name: String,
    pub form: Option<Form>,
    /// Whether the operation acts on the whole collection (list) rather than one item.
    pub collection: bool,
}

impl Operation {
    pub fn new(method: Method, name: impl Into<String>, collection: bool) -> Self {
        Operation {
            method,
            name: name.into(),
            form: None,
            collection,
        }
    }

    pub fn with_form(form: Form, method: Method, name: impl Into<String>) -> Self {
        Operation {
            method,
            name: name.into(),
            form: Some(form),
            collection: false,
        }
    }

    /// Operation with `form` when one is present, without one otherwise.
    pub(crate) fn with_optional_form(form: Option<&Form>, method: Method, name: String) -> Self {
        match form {
            Some(form) => Operation::with_form(form.clone(), method, name),
            None => Operation::new(method, name, false),
        }
    }
}
