//! Rules and bound validators
//!
//! A [`Rule<T>`] is a shareable check over `&T`. Binding a rule to one
//! concrete value yields a [`Validator`], which only needs a [`Context`] to
//! run.

use std::fmt;
use std::sync::Arc;

use crate::foundation::{Context, Error, Validatable};

type CheckFn<T> = dyn Fn(&Context, &T) -> Result<(), Error> + Send + Sync;

// ============================================================================
// RULE
// ============================================================================

/// A single accept/reject step over a value of type `T`.
///
/// Rules are immutable and cheap to clone; composing them always returns a
/// new rule. The no-op rule ([`Rule::nop`]) carries no function at all, so
/// chaining onto it is free.
///
/// # Examples
///
/// ```rust,ignore
/// use rulechain_validator::foundation::{Context, Rule, RuleError, RuleKind};
///
/// let not_blank = Rule::<str>::new(|_ctx, value| {
///     if value.trim().is_empty() {
///         Err(RuleError::new(RuleKind::new("not-blank")).into())
///     } else {
///         Ok(())
///     }
/// });
/// assert!(not_blank.check(&Context::background(), "x").is_ok());
/// ```
pub struct Rule<T: ?Sized> {
    pub(crate) check: Option<Arc<CheckFn<T>>>,
}

impl<T: ?Sized + 'static> Rule<T> {
    /// Creates a rule from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Context, &T) -> Result<(), Error> + Send + Sync + 'static,
    {
        Self {
            check: Some(Arc::new(f)),
        }
    }
}

impl<T: ?Sized> Rule<T> {
    /// The identity rule: always succeeds.
    pub const fn nop() -> Self {
        Self { check: None }
    }

    /// Returns true for the identity rule.
    pub fn is_nop(&self) -> bool {
        self.check.is_none()
    }

    /// Runs the rule against `value`.
    pub fn check(&self, ctx: &Context, value: &T) -> Result<(), Error> {
        match &self.check {
            Some(check) => check(ctx, value),
            None => Ok(()),
        }
    }

    /// Binds the rule to `value`.
    pub fn bind<'a>(&self, value: &'a T) -> Validator<'a>
    where
        T: 'a,
    {
        let rule = self.clone();
        Validator::new(move |ctx| rule.check(ctx, value))
    }
}

impl<T: ?Sized> Clone for Rule<T> {
    fn clone(&self) -> Self {
        Self {
            check: self.check.clone(),
        }
    }
}

impl<T: ?Sized> Default for Rule<T> {
    fn default() -> Self {
        Self::nop()
    }
}

impl<T: ?Sized> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("input", &std::any::type_name::<T>())
            .field("nop", &self.is_nop())
            .finish()
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// A rule bound to one concrete value, ready to run.
///
/// Validators borrow their value and are meant to be created right before
/// [`validate`](Validatable::validate) is called. Running one repeatedly is
/// deterministic as long as the value is not mutated in between.
pub struct Validator<'a> {
    check: Box<dyn Fn(&Context) -> Result<(), Error> + 'a>,
}

impl<'a> Validator<'a> {
    /// Creates a validator from a context-only function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Context) -> Result<(), Error> + 'a,
    {
        Self { check: Box::new(f) }
    }

    /// A validator that always succeeds.
    pub fn nop() -> Self {
        Self::new(|_| Ok(()))
    }
}

impl Validatable for Validator<'_> {
    fn validate(&self, ctx: &Context) -> Result<(), Error> {
        (self.check)(ctx)
    }
}

impl fmt::Debug for Validator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator").finish_non_exhaustive()
    }
}
