//! NAMED combinator - attaches a field key to a validation outcome
//!
//! [`named`] wraps a `(key, value, builder)` triple. Validating it builds the
//! builder against the value and, on failure, returns a [`KeyError`] carrying
//! the key and the original error. Success stays `Ok(())`.
//!
//! # Examples
//!
//! ```rust,ignore
//! use rulechain_validator::prelude::*;
//!
//! let ctx = Context::background();
//! let err = named("email", "", string().required())
//!     .validate(&ctx)
//!     .unwrap_err();
//!
//! let key = err.as_key().unwrap();
//! assert_eq!(key.key(), "email");
//! assert_eq!(key.inner().kind(), Some(RuleKind::STRING_REQUIRED));
//! ```

use std::fmt;

use crate::foundation::{Builder, Context, Error, KeyError, RuleKind, Validatable};

/// A value and its builder, validated under a field key.
pub struct Named<'a, T: ?Sized, B> {
    key: String,
    value: &'a T,
    builder: B,
}

impl<'a, T: ?Sized, B> Named<'a, T, B> {
    /// Creates a named validation unit.
    pub fn new(key: impl Into<String>, value: &'a T, builder: B) -> Self {
        Self {
            key: key.into(),
            value,
            builder,
        }
    }

    /// Returns the field key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the value under validation.
    pub fn value(&self) -> &'a T {
        self.value
    }

    /// Returns a reference to the builder.
    pub fn builder(&self) -> &B {
        &self.builder
    }
}

impl<T: ?Sized, B> Validatable for Named<'_, T, B>
where
    B: Builder<T>,
{
    fn validate(&self, ctx: &Context) -> Result<(), Error> {
        self.builder
            .build(self.value)
            .validate(ctx)
            .map_err(|err| {
                tracing::debug!(
                    key = %self.key,
                    kind = err.kind().map(RuleKind::as_str),
                    error = %err,
                    "field validation failed"
                );
                KeyError::new(self.key.clone(), err).into()
            })
    }
}

impl<T: ?Sized, B> fmt::Debug for Named<'_, T, B>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Named")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("builder", &"<builder>")
            .finish()
    }
}

/// Wraps `value` and `builder` under `key`.
///
/// # Examples
///
/// ```rust,ignore
/// let age = named("age", &17, number::<i32>().min(18));
/// ```
pub fn named<'a, T, B>(key: impl Into<String>, value: &'a T, builder: B) -> Named<'a, T, B>
where
    T: ?Sized,
    B: Builder<T>,
{
    Named::new(key, value, builder)
}
