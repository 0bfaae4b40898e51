//! Token resolution: bindings, binder callbacks and pattern substitution.

mod binder;
mod bindings;

pub use self::binder::{FnBinder, TokenBinder, TypedBinder};
pub use self::bindings::TokenBindings;

use crate::format::{BraceFormatter, PatternFormatter};
use crate::Result;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Replaces tokens in patterns with bound values.
///
/// Values are bound directly with [`bind`](Self::bind) or extracted from a
/// domain object by registered [`TokenBinder`]s, which run in registration
/// order whenever an object is supplied. A resolver is a mutable, reusable
/// helper; share it across threads only behind a lock, or clone it.
#[derive(Clone)]
pub struct TokenResolver {
    bindings: TokenBindings,
    binders: Vec<Arc<dyn TokenBinder>>,
    formatter: Arc<dyn PatternFormatter>,
}

impl Default for TokenResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenResolver {
    /// Creates an empty resolver using `{name}` placeholders.
    pub fn new() -> Self {
        Self::with_formatter(BraceFormatter)
    }

    /// Creates an empty resolver using the given pattern formatter.
    pub fn with_formatter<P: PatternFormatter + 'static>(formatter: P) -> Self {
        Self {
            bindings: TokenBindings::new(),
            binders: Vec::new(),
            formatter: Arc::new(formatter),
        }
    }

    /// Binds a token name (without braces) to a value.
    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.bindings.bind(name, value);
        self
    }

    /// Binds `name` if `value` is present, otherwise removes its binding.
    pub fn bind_optional<V: Into<String>>(&mut self, name: &str, value: Option<V>) -> &mut Self {
        self.bindings.bind_optional(name, value);
        self
    }

    pub fn bind_all<K, V, I>(&mut self, pairs: I) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (name, value) in pairs {
            self.bindings.bind(name, value);
        }
        self
    }

    pub fn remove(&mut self, name: &str) {
        self.bindings.remove(name);
    }

    /// Removes all bindings. Registered binders are kept.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Registers a binder, to be called after those already registered.
    pub fn add_binder<B: TokenBinder + 'static>(&mut self, binder: B) -> &mut Self {
        self.binders.push(Arc::new(binder));
        self
    }

    /// Registers a binder if one is given; `None` is a no-op.
    pub fn add_optional_binder<B>(&mut self, binder: Option<B>) -> &mut Self
    where
        B: TokenBinder + 'static,
    {
        if let Some(binder) = binder {
            self.add_binder(binder);
        }
        self
    }

    /// Registers a closure binder that receives every object.
    pub fn add_binder_fn<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&dyn Any, &mut TokenBindings) -> Result<()> + Send + Sync + 'static,
    {
        self.add_binder(FnBinder::new(f))
    }

    /// Registers a closure binder that only receives objects of type `T`.
    pub fn add_binder_for<T, F>(&mut self, f: F) -> &mut Self
    where
        T: Any,
        F: Fn(&T, &mut TokenBindings) -> Result<()> + Send + Sync + 'static,
    {
        self.add_binder(TypedBinder::new(f))
    }

    /// Removes all bindings and binders, as if newly created.
    pub fn reset(&mut self) {
        self.bindings.clear();
        self.binders.clear();
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.bindings.get(name)
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.bindings.contains(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn bindings(&self) -> &TokenBindings {
        &self.bindings
    }

    pub fn binder_count(&self) -> usize {
        self.binders.len()
    }

    /// Runs every binder against `object`, stopping at the first failure.
    pub fn bind_object(&mut self, object: &dyn Any) -> Result<()> {
        if self.binders.is_empty() {
            return Ok(());
        }

        tracing::debug!(binders = self.binders.len(), "binding tokens from object");
        for (index, binder) in self.binders.iter().enumerate() {
            if let Err(e) = binder.bind(object, &mut self.bindings) {
                tracing::debug!(binder = index, error = %e, "token binder failed");
                return Err(e);
            }
        }
        Ok(())
    }

    /// Substitutes current bindings into `pattern`.
    pub fn resolve(&self, pattern: &str) -> String {
        self.formatter.format(pattern, self.bindings.as_map())
    }

    /// Binds tokens from `object` (if any), then resolves `pattern`.
    pub fn resolve_with(&mut self, pattern: &str, object: Option<&dyn Any>) -> Result<String> {
        if let Some(object) = object {
            self.bind_object(object)?;
        }
        Ok(self.resolve(pattern))
    }

    /// Binds tokens from `object`, then resolves `pattern`.
    pub fn resolve_for(&mut self, pattern: &str, object: &dyn Any) -> Result<String> {
        self.resolve_with(pattern, Some(object))
    }

    /// Resolves each pattern against the same bindings, preserving order.
    pub fn resolve_all<I, S>(&self, patterns: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        patterns
            .into_iter()
            .map(|pattern| self.resolve(pattern.as_ref()))
            .collect()
    }

    /// Binds tokens from `object` once, then resolves every pattern.
    pub fn resolve_all_with<I, S>(
        &mut self,
        patterns: I,
        object: Option<&dyn Any>,
    ) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Some(object) = object {
            self.bind_object(object)?;
        }
        Ok(self.resolve_all(patterns))
    }
}

impl fmt::Display for TokenResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.bindings.sorted().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        f.write_str("}")
    }
}

impl fmt::Debug for TokenResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResolver")
            .field("bindings", &self.bindings)
            .field("binders", &self.binders.len())
            .finish()
    }
}
