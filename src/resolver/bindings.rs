//! Token store - name to value bindings used during resolution.

use std::collections::HashMap;

/// Mapping from token name to substitution value.
///
/// A name is bound at most once; binding it again overwrites the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenBindings {
    values: HashMap<String, String>,
}

impl TokenBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any previous value.
    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Binds `name` when a value is present, otherwise unbinds it.
    pub fn bind_optional<V: Into<String>>(&mut self, name: &str, value: Option<V>) -> &mut Self {
        match value {
            Some(value) => self.bind(name, value),
            None => {
                self.values.remove(name);
                self
            }
        }
    }

    /// Unbinds `name`, returning the previous value if there was one.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.values
    }

    /// Bindings sorted by name, for stable display.
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
        pairs
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TokenBindings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bindings = TokenBindings::new();
        for (name, value) in iter {
            bindings.bind(name, value);
        }
        bindings
    }
}
