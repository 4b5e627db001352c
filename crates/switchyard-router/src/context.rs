//! Per-dispatch request context
//!
//! A [`RequestContext`] is built once per dispatch and threaded by
//! reference through middleware and the handler. It is never stored on the
//! router, so a fully-registered router can serve concurrent dispatches
//! without cross-request leakage of matched variables.

use std::collections::HashMap;

/// Read-only view of a single request, exposed to middleware and handlers.
#[derive(Debug, Clone)]
pub struct RequestContext {
    path: String,
    query: HashMap<String, String>,
    attributes: HashMap<String, String>,
}

impl RequestContext {
    /// Build a context from a normalized path and a parsed, sanitized query.
    pub fn new(path: String, query: HashMap<String, String>) -> Self {
        Self {
            path,
            query,
            attributes: HashMap::new(),
        }
    }

    /// The normalized request path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The sanitized query map.
    pub fn query(&self) -> &HashMap<String, String> {
        &self.query
    }

    /// Template variables extracted by the match that produced this
    /// dispatch. Empty until a template route matches.
    pub fn attributes(&self) -> &HashMap<String, String> {
        &self.attributes
    }

    pub(crate) fn set_attributes(&mut self, attributes: HashMap<String, String>) {
        self.attributes = attributes;
    }

    /// Non-empty `/`-delimited components of the path.
    pub fn segments(&self) -> Vec<&str> {
        self.path.split('/').filter(|s| !s.is_empty()).collect()
    }

    /// Path segment by position.
    ///
    /// Negative indices count from the end (`-1` is the last segment).
    /// Out-of-range indices and empty paths yield `""`, never an error.
    pub fn segment(&self, index: isize) -> &str {
        let segments = self.segments();
        let resolved = if index < 0 {
            match segments.len().checked_sub(index.unsigned_abs()) {
                Some(i) => i,
                None => return "",
            }
        } else {
            index as usize
        };
        segments.get(resolved).copied().unwrap_or("")
    }

    /// Template variable by name, or `fallback` when absent.
    pub fn attribute<'a>(&'a self, name: &str, fallback: &'a str) -> &'a str {
        self.attributes.get(name).map(String::as_str).unwrap_or(fallback)
    }

    /// Sanitized query value by name, or `""` when absent.
    pub fn query_parameter(&self, name: &str) -> &str {
        self.query.get(name).map(String::as_str).unwrap_or("")
    }
}
