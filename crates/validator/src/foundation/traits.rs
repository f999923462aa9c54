//! Core traits for the validation system
//!
//! - [`Validatable`]: anything that can run against a [`Context`].
//! - [`Builder`]: produces a bound [`Validator`] for a value. This is the
//!   only seam a rule catalog has to implement to take part in
//!   [`named`](crate::combinators::named) composition.
//! - [`RuleChain`]: the fluent, immutable chain shape every typed catalog
//!   shares. `with`, `when` and `validate` are written once here.

use crate::foundation::{Context, Error, Rule, Validator};

// ============================================================================
// VALIDATABLE
// ============================================================================

/// A unit of validation that only needs a context to run.
pub trait Validatable {
    /// Runs the validation.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(Error)` with the first failure otherwise
    fn validate(&self, ctx: &Context) -> Result<(), Error>;
}

impl<V: Validatable + ?Sized> Validatable for &V {
    fn validate(&self, ctx: &Context) -> Result<(), Error> {
        (**self).validate(ctx)
    }
}

impl<V: Validatable + ?Sized> Validatable for Box<V> {
    fn validate(&self, ctx: &Context) -> Result<(), Error> {
        (**self).validate(ctx)
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Produces a [`Validator`] bound to a concrete value.
///
/// # Examples
///
/// ```rust,ignore
/// use rulechain_validator::prelude::*;
///
/// struct Even;
///
/// impl Builder<u32> for Even {
///     fn build<'a>(&self, value: &'a u32) -> Validator<'a> {
///         Validator::new(move |_| {
///             if value % 2 == 0 {
///                 Ok(())
///             } else {
///                 Err(RuleError::new(RuleKind::new("even")).into())
///             }
///         })
///     }
/// }
///
/// let err = named("count", &3, Even).validate(&Context::background());
/// assert!(err.is_err());
/// ```
pub trait Builder<T: ?Sized> {
    /// Binds the builder's rules to `value`.
    fn build<'a>(&self, value: &'a T) -> Validator<'a>;
}

impl<T: ?Sized, B: Builder<T> + ?Sized> Builder<T> for &B {
    fn build<'a>(&self, value: &'a T) -> Validator<'a> {
        (**self).build(value)
    }
}

// ============================================================================
// RULE CHAIN
// ============================================================================

/// A typed, immutable rule chain.
///
/// Implementors are thin wrappers around a [`Rule`]; every fluent method
/// returns a new chain and leaves the receiver untouched, so a chain can be
/// shared as the base of several extended variants.
pub trait RuleChain: Clone + Sized {
    /// The type of value the chain validates.
    type Value: ?Sized + 'static;

    /// Wraps a rule.
    fn from_rule(rule: Rule<Self::Value>) -> Self;

    /// Returns the composed rule.
    fn as_rule(&self) -> &Rule<Self::Value>;

    /// Appends another chain of the same kind.
    fn with(&self, next: Self) -> Self {
        Self::from_rule(self.as_rule().chain(next.as_rule()))
    }

    /// Appends a single rule function.
    fn with_rule<F>(&self, f: F) -> Self
    where
        F: Fn(&Context, &Self::Value) -> Result<(), Error> + Send + Sync + 'static,
    {
        Self::from_rule(self.as_rule().chain(&Rule::new(f)))
    }

    /// Swaps in `mapper(self)` for values matching `predicate`.
    ///
    /// See [`when`](crate::combinators::when).
    fn when<P, M>(&self, predicate: P, mapper: M) -> Self
    where
        P: Fn(&Self::Value) -> bool + Send + Sync + 'static,
        M: FnOnce(Self) -> Self,
    {
        crate::combinators::when(self, predicate, mapper)
    }

    /// Runs the chain against `value` immediately.
    fn validate(&self, ctx: &Context, value: &Self::Value) -> Result<(), Error> {
        self.as_rule().check(ctx, value)
    }
}
