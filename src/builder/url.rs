//! URL builder - base URL, path pattern and optional query segments.

use crate::format::placeholder_names;
use crate::resolver::TokenResolver;
use crate::{Error, Result};
use std::any::Any;

/// Builds URLs from a pattern, resolving tokens through a [`TokenResolver`].
///
/// Query segments are optional: a segment is appended only if every
/// placeholder in it is bound. Bound values are inserted as-is, braces
/// included. Segments are given without a leading `?` or `&`.
///
/// ```
/// use hrefkit::{TokenResolver, UrlBuilder};
///
/// let mut builder = UrlBuilder::new("/users/{userId}");
/// builder
///     .set_base_url("http://api.example.com")
///     .with_query("limit={limit}")
///     .with_query("sort=name");
///
/// let mut resolver = TokenResolver::new();
/// resolver.bind("userId", "42");
///
/// let url = builder.build_with(&resolver).unwrap();
/// assert_eq!(url, "http://api.example.com/users/42?sort=name");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlBuilder {
    base_url: Option<String>,
    url_pattern: Option<String>,
    queries: Vec<String>,
}

impl UrlBuilder {
    /// Creates a builder for `url_pattern`, which may be a full URL or, with
    /// [`set_base_url`](Self::set_base_url), just the path (leading `/`).
    pub fn new(url_pattern: impl Into<String>) -> Self {
        Self {
            url_pattern: Some(url_pattern.into()),
            ..Default::default()
        }
    }

    /// Sets the prefix prepended to the pattern, e.g. `http://example.com:8080`.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) -> &mut Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn set_url_pattern(&mut self, url_pattern: impl Into<String>) -> &mut Self {
        self.url_pattern = Some(url_pattern.into());
        self
    }

    pub fn url_pattern(&self) -> Option<&str> {
        self.url_pattern.as_deref()
    }

    /// Adds an optional query-string segment such as `page={page}`.
    pub fn with_query(&mut self, query: impl Into<String>) -> &mut Self {
        self.queries.push(query.into());
        self
    }

    pub fn queries(&self) -> &[String] {
        &self.queries
    }

    pub fn clear_queries(&mut self) -> &mut Self {
        self.queries.clear();
        self
    }

    /// Builds the URL with no bindings; every token stays unresolved.
    pub fn build(&self) -> Result<String> {
        self.build_with(&TokenResolver::new())
    }

    /// Builds the URL, substituting the resolver's current bindings.
    pub fn build_with(&self, resolver: &TokenResolver) -> Result<String> {
        let pattern = self.require_pattern()?;
        Ok(self.assemble(pattern, resolver))
    }

    /// Binds tokens from `object` via the resolver's binders, then builds.
    pub fn build_for(&self, object: &dyn Any, resolver: &mut TokenResolver) -> Result<String> {
        let pattern = self.require_pattern()?;
        resolver.bind_object(object)?;
        Ok(self.assemble(pattern, resolver))
    }

    /// Builds using `pattern` in place of the configured one.
    pub fn build_pattern(&self, pattern: &str, resolver: &TokenResolver) -> String {
        self.assemble(pattern, resolver)
    }

    fn require_pattern(&self) -> Result<&str> {
        self.url_pattern.as_deref().ok_or_else(|| {
            tracing::debug!("build requested without a URL pattern");
            Error::MissingUrlPattern
        })
    }

    fn assemble(&self, pattern: &str, resolver: &TokenResolver) -> String {
        let mut url = match &self.base_url {
            Some(base_url) => resolver.resolve(base_url),
            None => String::new(),
        };
        url.push_str(&resolver.resolve(pattern));

        let mut separator = if url.contains('?') { '&' } else { '?' };
        for query in &self.queries {
            let unbound = placeholder_names(query)
                .into_iter()
                .find(|name| !resolver.is_bound(name));
            if let Some(token) = unbound {
                tracing::trace!(segment = %query, token, "dropping unresolved query segment");
                continue;
            }
            let resolved = resolver.resolve(query);
            if resolved.is_empty() {
                continue;
            }
            url.push(separator);
            url.push_str(&resolved);
            separator = '&';
        }

        tracing::trace!(href = %url, "built url");
        url
    }
}
