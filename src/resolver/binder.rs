//! Token binders - callbacks that derive bindings from domain objects.

use super::TokenBindings;
use crate::Result;
use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

/// Extracts token bindings from an arbitrary object.
///
/// Returning an error stops the resolver before any later binder runs.
pub trait TokenBinder: Send + Sync {
    fn bind(&self, object: &dyn Any, tokens: &mut TokenBindings) -> Result<()>;
}

/// Binder backed by a closure that inspects the object itself.
pub struct FnBinder<F> {
    f: F,
}

impl<F> FnBinder<F>
where
    F: Fn(&dyn Any, &mut TokenBindings) -> Result<()> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> TokenBinder for FnBinder<F>
where
    F: Fn(&dyn Any, &mut TokenBindings) -> Result<()> + Send + Sync,
{
    fn bind(&self, object: &dyn Any, tokens: &mut TokenBindings) -> Result<()> {
        (self.f)(object, tokens)
    }
}

impl<F> fmt::Debug for FnBinder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnBinder")
    }
}

/// Binder that only fires for objects of type `T`; other objects are skipped.
pub struct TypedBinder<T, F> {
    f: F,
    _marker: PhantomData<fn(&T)>,
}

impl<T, F> TypedBinder<T, F>
where
    T: Any,
    F: Fn(&T, &mut TokenBindings) -> Result<()> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self {
            f,
            _marker: PhantomData,
        }
    }
}

impl<T, F> TokenBinder for TypedBinder<T, F>
where
    T: Any,
    F: Fn(&T, &mut TokenBindings) -> Result<()> + Send + Sync,
{
    fn bind(&self, object: &dyn Any, tokens: &mut TokenBindings) -> Result<()> {
        match object.downcast_ref::<T>() {
            Some(typed) => (self.f)(typed, tokens),
            None => Ok(()),
        }
    }
}

impl<T, F> fmt::Debug for TypedBinder<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypedBinder<{}>", std::any::type_name::<T>())
    }
}
