//! Resource representation - a named-property bag that links attach to.

use super::{Link, TITLE, TYPE};
use crate::{Error, Result};
use serde_json::Value;
use std::collections::BTreeMap;

/// Enumerates the properties of a domain object.
///
/// Implementations list their own fields and, for composed types, the
/// fields of the parts they embed. Fields that should not be exposed are
/// simply left out.
pub trait FieldSource {
    fn fields(&self) -> Vec<(String, Value)>;
}

/// Named properties plus the links attached to them.
///
/// A property name may be written only once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resource {
    properties: BTreeMap<String, Value>,
    links: Vec<Link>,
}

impl Resource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property, failing if the name is already present.
    pub fn with_property(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<&mut Self> {
        let name = name.into();
        if self.properties.contains_key(&name) {
            return Err(Error::DuplicateProperty(name));
        }
        self.properties.insert(name, value.into());
        Ok(self)
    }

    /// Copies every field of `source` in as a property.
    ///
    /// Stops at the first duplicate name; fields before it stay applied.
    pub fn with_fields<S: FieldSource + ?Sized>(&mut self, source: &S) -> Result<&mut Self> {
        for (name, value) in source.fields() {
            self.with_property(name, value)?;
        }
        Ok(self)
    }

    pub fn with_link(&mut self, link: Link) -> &mut Self {
        self.links.push(link);
        self
    }

    /// Builds and attaches a link from its parts; absent title/type are omitted.
    pub fn with_link_parts(
        &mut self,
        rel: &str,
        href: &str,
        title: Option<&str>,
        media_type: Option<&str>,
    ) -> &mut Self {
        let mut link = Link::new(Some(rel.to_string()), href);
        if let Some(title) = title {
            link = link.with_attribute(TITLE, title);
        }
        if let Some(media_type) = media_type {
            link = link.with_attribute(TYPE, media_type);
        }
        self.with_link(link)
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn properties(&self) -> &BTreeMap<String, Value> {
        &self.properties
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Links whose relation type equals `rel`.
    pub fn links_for<'a>(&'a self, rel: &'a str) -> impl Iterator<Item = &'a Link> + 'a {
        self.links.iter().filter(move |link| link.rel() == Some(rel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Entity {
        id: String,
    }

    struct Blog {
        entity: Entity,
        name: String,
        #[allow(dead_code)]
        cache_key: u64,
    }

    impl FieldSource for Entity {
        fn fields(&self) -> Vec<(String, Value)> {
            vec![("id".to_string(), json!(self.id))]
        }
    }

    impl FieldSource for Blog {
        fn fields(&self) -> Vec<(String, Value)> {
            let mut fields = vec![("name".to_string(), json!(self.name))];
            fields.extend(self.entity.fields());
            fields
        }
    }

    #[test]
    fn test_with_fields_includes_embedded_parts() {
        let blog = Blog {
            entity: Entity { id: "b1".into() },
            name: "notes".into(),
            cache_key: 7,
        };
        let mut resource = Resource::new();
        resource.with_fields(&blog).unwrap();
        assert_eq!(resource.property("id"), Some(&json!("b1")));
        assert_eq!(resource.property("name"), Some(&json!("notes")));
        assert!(resource.property("cache_key").is_none());
    }

    #[test]
    fn test_duplicate_property_rejected() {
        let mut resource = Resource::new();
        resource.with_property("id", 1).unwrap();
        let err = resource.with_property("id", 2).unwrap_err();
        assert!(matches!(err, Error::DuplicateProperty(ref n) if n == "id"));
        assert_eq!(resource.property("id"), Some(&json!(1)));
    }

    #[test]
    fn test_links_for_rel() {
        let mut resource = Resource::new();
        resource
            .with_link_parts("self", "/blogs/1", Some("Blog"), None)
            .with_link(Link::new(Some("up".into()), "/blogs"));
        let selves: Vec<_> = resource.links_for("self").collect();
        assert_eq!(selves.len(), 1);
        assert_eq!(selves[0].title(), Some("Blog"));
        assert_eq!(selves[0].media_type(), None);
    }
}
