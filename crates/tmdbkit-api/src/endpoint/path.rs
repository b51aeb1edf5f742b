//! Request path assembly.

use url::form_urlencoded;

/// Accumulates a path and its query parameters in insertion order.
#[derive(Debug)]
pub(crate) struct PathBuilder {
    path: String,
    query: Vec<(&'static str, String)>,
}

impl PathBuilder {
    /// Starts a path (must begin with `/`).
    pub(crate) fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Appends a query parameter.
    pub(crate) fn param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.query.push((name, value.to_string()));
        self
    }

    /// Appends a query parameter when `value` is `Some`.
    pub(crate) fn optional_param<T: ToString>(self, name: &'static str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.param(name, v),
            None => self,
        }
    }

    /// Renders `path?k=v&...`, or just the path when there are no parameters.
    pub(crate) fn build(self) -> String {
        if self.query.is_empty() {
            return self.path;
        }
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.query)
            .finish();
        format!("{}?{query}", self.path)
    }
}
