//! Built link record handed to document assembly.

use std::collections::BTreeMap;

/// Attribute name carrying the relation type.
pub const REL: &str = "rel";
pub const TITLE: &str = "title";
pub const TYPE: &str = "type";

/// Maps the reserved names to their lowercase form, case-insensitively.
pub(crate) fn canonical_name(name: &str) -> &str {
    [REL, TITLE, TYPE]
        .into_iter()
        .find(|reserved| reserved.eq_ignore_ascii_case(name))
        .unwrap_or(name)
}

/// An immutable hypermedia link: relation type, href and named attributes.
///
/// The relation type is never stored among the attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    rel: Option<String>,
    href: String,
    attributes: BTreeMap<String, String>,
}

impl Link {
    pub fn new(rel: Option<String>, href: impl Into<String>) -> Self {
        Self {
            rel,
            href: href.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Returns the link with one more attribute. Setting `rel` this way
    /// replaces the relation type.
    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        let name = canonical_name(name);
        if name == REL {
            self.rel = Some(value.into());
        } else {
            self.attributes.insert(name.to_string(), value.into());
        }
        self
    }

    pub fn rel(&self) -> Option<&str> {
        self.rel.as_deref()
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn title(&self) -> Option<&str> {
        self.get(TITLE)
    }

    pub fn media_type(&self) -> Option<&str> {
        self.get(TYPE)
    }

    /// Looks up a named attribute other than `rel`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(canonical_name(name))
            .map(String::as_str)
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }
}
