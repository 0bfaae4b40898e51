//! Link builder - a URL builder plus link attributes.

use super::UrlBuilder;
use crate::model::{canonical_name, Link, REL, TITLE, TYPE};
use crate::resolver::TokenResolver;
use crate::Result;
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;

/// Reusable template for [`Link`]s.
///
/// Holds the URL configuration and the attributes (`rel`, `title`, `type`
/// and any other name) copied onto every built link. The reserved names are
/// matched case-insensitively. Each `build*` call produces an independent
/// snapshot; later changes to the builder do not affect it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkBuilder {
    url_builder: UrlBuilder,
    attributes: BTreeMap<String, String>,
}

impl LinkBuilder {
    /// Creates a builder for `url_pattern`, e.g. `/users/{userId}` or
    /// `http://www.example.com/api/users/{userId}`.
    pub fn new(url_pattern: impl Into<String>) -> Self {
        Self::from_url_builder(UrlBuilder::new(url_pattern))
    }

    pub fn from_url_builder(url_builder: UrlBuilder) -> Self {
        Self {
            url_builder,
            attributes: BTreeMap::new(),
        }
    }

    pub fn url_builder(&self) -> &UrlBuilder {
        &self.url_builder
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) -> &mut Self {
        self.url_builder.set_base_url(base_url);
        self
    }

    pub fn set_url_pattern(&mut self, url_pattern: impl Into<String>) -> &mut Self {
        self.url_builder.set_url_pattern(url_pattern);
        self
    }

    pub fn url_pattern(&self) -> Option<&str> {
        self.url_builder.url_pattern()
    }

    /// Adds an optional query-string segment; see [`UrlBuilder::with_query`].
    pub fn with_query(&mut self, query: impl Into<String>) -> &mut Self {
        self.url_builder.with_query(query);
        self
    }

    pub fn clear_queries(&mut self) -> &mut Self {
        self.url_builder.clear_queries();
        self
    }

    /// Removes all attributes. Queries and URL settings are kept.
    pub fn clear_attributes(&mut self) -> &mut Self {
        self.attributes.clear();
        self
    }

    pub fn set_rel(&mut self, rel: impl Into<String>) -> &mut Self {
        self.set(REL, rel)
    }

    pub fn rel(&self) -> Option<&str> {
        self.get(REL)
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.set(TITLE, title)
    }

    pub fn title(&self) -> Option<&str> {
        self.get(TITLE)
    }

    pub fn set_type(&mut self, media_type: impl Into<String>) -> &mut Self {
        self.set(TYPE, media_type)
    }

    pub fn media_type(&self) -> Option<&str> {
        self.get(TYPE)
    }

    /// Sets a named attribute, overwriting any previous value.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.attributes
            .insert(canonical_name(name).to_string(), value.into());
        self
    }

    /// Sets `name` when a value is present, otherwise removes it.
    pub fn set_optional<V: Into<String>>(&mut self, name: &str, value: Option<V>) -> &mut Self {
        match value {
            Some(value) => self.set(name, value),
            None => self.unset(name),
        }
    }

    pub fn unset(&mut self, name: &str) -> &mut Self {
        self.attributes.remove(canonical_name(name));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(canonical_name(name))
            .map(String::as_str)
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Builds a link with no token bindings.
    pub fn build(&self) -> Result<Link> {
        Ok(self.create_link(self.url_builder.build()?))
    }

    pub fn build_with(&self, resolver: &TokenResolver) -> Result<Link> {
        Ok(self.create_link(self.url_builder.build_with(resolver)?))
    }

    /// Binds tokens from `object` first, so its values reach every URL part.
    pub fn build_for(&self, object: &dyn Any, resolver: &mut TokenResolver) -> Result<Link> {
        Ok(self.create_link(self.url_builder.build_for(object, resolver)?))
    }

    /// Builds using `pattern` in place of the configured URL pattern.
    pub fn build_pattern(&self, pattern: &str, resolver: &TokenResolver) -> Link {
        self.create_link(self.url_builder.build_pattern(pattern, resolver))
    }

    fn create_link(&self, href: String) -> Link {
        self.attributes
            .iter()
            .filter(|(name, _)| name.as_str() != REL)
            .fold(
                Link::new(self.rel().map(str::to_string), href),
                |link, (name, value)| link.with_attribute(name, value.as_str()),
            )
    }
}

impl fmt::Display for LinkBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LinkBuilder{")?;
        for (i, (name, value)) in self.attributes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        f.write_str("}")
    }
}
