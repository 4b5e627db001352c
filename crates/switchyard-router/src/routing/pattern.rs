//! Route pattern compilation
//!
//! A registration string compiles into exactly one of two matchable
//! variants, decided once by the presence of `{`/`}` tokens and never
//! re-decided per request:
//!
//! - [`RoutePattern::Regex`] — the string is the regex body, anchored with
//!   `^`/`$` unless already present. Callers may embed metacharacters
//!   (`[0-9]+`, `(opt)?`) directly; registration strings are code-authored
//!   and trusted.
//! - [`RoutePattern::Template`] — `{name}` path variables plus optional
//!   `{?...}` query destructuring.

use std::collections::HashMap;

use regex::Regex;

use super::template::UriTemplate;
use crate::errors::{RouterError, RouterResult};

/// A compiled, matchable route pattern.
#[derive(Debug, Clone)]
pub enum RoutePattern {
    Regex(Regex),
    Template(UriTemplate),
}

impl RoutePattern {
    /// Compile an already-normalized registration string.
    pub fn compile(route: &str) -> RouterResult<Self> {
        if route.contains('{') && route.contains('}') {
            return Ok(RoutePattern::Template(UriTemplate::parse(route)));
        }

        let mut body = String::with_capacity(route.len() + 2);
        if !route.starts_with('^') {
            body.push('^');
        }
        body.push_str(route);
        if !route.ends_with('$') {
            body.push('$');
        }

        let regex = Regex::new(&body)
            .map_err(|e| RouterError::invalid_pattern(route, e.to_string()))?;
        Ok(RoutePattern::Regex(regex))
    }

    /// Attempt to match a normalized request path and its parsed query.
    ///
    /// `Some` carries the extracted template variables; the regex variant
    /// yields an empty map on success.
    pub fn attempt_match(
        &self,
        path: &str,
        query: &HashMap<String, String>,
    ) -> Option<HashMap<String, String>> {
        match self {
            RoutePattern::Regex(regex) => regex.is_match(path).then(HashMap::new),
            RoutePattern::Template(template) => template.extract(path, query),
        }
    }

    /// Whether this pattern compiled as a URI template.
    pub fn is_template(&self) -> bool {
        matches!(self, RoutePattern::Template(_))
    }
}
