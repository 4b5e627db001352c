//! URI-template patterns
//!
//! Supports simple named path variables (`{name}`) and a trailing
//! query-destructuring token (`{?q,limit}`, explode modifiers accepted as
//! `{?q*,limit}`). Extraction aligns pattern segments with path segments
//! one-to-one; the query token's listed parameters must all be present in
//! the request query for the template to match.

use std::collections::HashMap;

/// One token of the template's path portion.
#[derive(Debug, Clone, PartialEq)]
enum TemplateSegment {
    /// Static text, compared for equality.
    Static(String),
    /// `{name}` variable capturing one non-empty segment.
    Variable(String),
}

/// A parsed URI template.
#[derive(Debug, Clone)]
pub struct UriTemplate {
    source: String,
    segments: Vec<TemplateSegment>,
    /// Query parameter names listed by a `{?...}` token, explode
    /// modifiers stripped. Empty when the template has no query token.
    query_vars: Vec<String>,
}

impl UriTemplate {
    /// Parse a registration string that was detected as template-shaped.
    pub fn parse(route: &str) -> Self {
        let mut segments = Vec::new();
        let mut query_vars = Vec::new();

        for part in route.split('/').filter(|s| !s.is_empty()) {
            match part
                .strip_prefix('{')
                .and_then(|inner| inner.strip_suffix('}'))
            {
                Some(inner) => {
                    if let Some(list) = inner.strip_prefix('?') {
                        // Explode (`*`) affects serialization, not presence.
                        query_vars = list
                            .split(',')
                            .map(|name| name.trim().trim_end_matches('*').to_string())
                            .filter(|name| !name.is_empty())
                            .collect();
                    } else {
                        segments.push(TemplateSegment::Variable(inner.trim().to_string()));
                    }
                }
                None => segments.push(TemplateSegment::Static(part.to_string())),
            }
        }

        Self {
            source: route.to_string(),
            segments,
            query_vars,
        }
    }

    /// The registration string this template was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the template carries a `{?...}` token.
    pub fn has_query_token(&self) -> bool {
        !self.query_vars.is_empty()
    }

    /// Attempt to match a normalized request path plus its parsed query.
    ///
    /// Returns the extracted variable map (path variables plus listed
    /// query variables) on success. A query token tolerates one extra
    /// trailing path segment, so `/search/{term}/{?q,limit}` accepts both
    /// `/search/rust?q=x&limit=1` and `/search/rust/full?q=x&limit=1`.
    pub fn extract(
        &self,
        path: &str,
        query: &HashMap<String, String>,
    ) -> Option<HashMap<String, String>> {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let expected = self.segments.len();
        let length_ok = parts.len() == expected
            || (self.has_query_token() && parts.len() == expected + 1);
        if !length_ok {
            return None;
        }

        let mut vars = HashMap::new();
        for (segment, part) in self.segments.iter().zip(&parts) {
            match segment {
                TemplateSegment::Static(text) => {
                    if text != part {
                        return None;
                    }
                }
                TemplateSegment::Variable(name) => {
                    vars.insert(name.clone(), (*part).to_string());
                }
            }
        }

        for name in &self.query_vars {
            let value = query.get(name)?;
            vars.insert(name.clone(), value.clone());
        }

        Some(vars)
    }
}
