//! Nullable rules for `Option` values
//!
//! # Rules
//!
//! - `required`: the value must be `Some`
//! - `optional(builder)`: validate with `builder` only when `Some`
//! - `next(builder)`: always validate with `builder`; `None` fails with
//!   `nil-required`
//!
//! `nil-required` carries no params: the only value it could report is
//! `None` itself.
//!
//! # Examples
//!
//! ```rust,ignore
//! use rulechain_validator::prelude::*;
//!
//! let nickname = nil::<String>().optional(string().required());
//! assert!(nickname.validate(&ctx, &None).is_ok());
//! assert!(nickname.validate(&ctx, &Some(String::new())).is_err());
//! ```

use std::marker::PhantomData;

use crate::foundation::{Builder, Rule, RuleChain, RuleError, RuleKind, Validatable, Validator};

/// A chain of rules over `Option<T>`.
pub struct NilRules<T> {
    rule: Rule<Option<T>>,
    _phantom: PhantomData<fn() -> T>,
}

/// Returns a nullable chain with no rules.
pub fn nil<T: 'static>() -> NilRules<T> {
    NilRules::from_rule(Rule::nop())
}

impl<T> Clone for NilRules<T> {
    fn clone(&self) -> Self {
        Self {
            rule: self.rule.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for NilRules<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NilRules").field("rule", &self.rule).finish()
    }
}

impl<T: 'static> RuleChain for NilRules<T> {
    type Value = Option<T>;

    fn from_rule(rule: Rule<Option<T>>) -> Self {
        Self {
            rule,
            _phantom: PhantomData,
        }
    }

    fn as_rule(&self) -> &Rule<Option<T>> {
        &self.rule
    }
}

impl<T: 'static> Builder<Option<T>> for NilRules<T> {
    fn build<'a>(&self, value: &'a Option<T>) -> Validator<'a> {
        self.rule.bind(value)
    }
}

impl<T: 'static> NilRules<T> {
    /// Ensures the value is present. Fails with a param-less
    /// `nil-required`.
    pub fn required(&self) -> Self {
        self.with_rule(|_, value| match value {
            Some(_) => Ok(()),
            None => Err(RuleError::new(RuleKind::NIL_REQUIRED).into()),
        })
    }

    /// Validates the inner value with `builder` when present; `None` passes.
    pub fn optional<B>(&self, builder: B) -> Self
    where
        B: Builder<T> + Send + Sync + 'static,
    {
        self.with_rule(move |ctx, value| match value {
            Some(inner) => builder.build(inner).validate(ctx),
            None => Ok(()),
        })
    }

    /// Validates the inner value with `builder`; `None` fails with
    /// `nil-required` instead of reaching the builder.
    pub fn next<B>(&self, builder: B) -> Self
    where
        B: Builder<T> + Send + Sync + 'static,
    {
        self.with_rule(move |ctx, value| match value {
            Some(inner) => builder.build(inner).validate(ctx),
            None => Err(RuleError::new(RuleKind::NIL_REQUIRED).into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Context, Error};
    use crate::validators::{number, string};
    use pretty_assertions::assert_eq;

    fn ctx() -> Context {
        Context::background()
    }

    #[test]
    fn test_empty_chain_accepts_none() {
        assert!(nil::<i32>().validate(&ctx(), &None).is_ok());
    }

    #[test]
    fn test_required() {
        let rules = nil::<i32>().required();
        assert!(rules.validate(&ctx(), &Some(0)).is_ok());
        assert_eq!(
            rules.validate(&ctx(), &None).unwrap_err(),
            Error::from(RuleError::new(RuleKind::NIL_REQUIRED))
        );
    }

    #[test]
    fn test_nil_required_has_no_params() {
        let required = nil::<i32>().required().validate(&ctx(), &None).unwrap_err();
        let next = nil::<i32>().next(number::<i32>()).validate(&ctx(), &None).unwrap_err();

        for err in [required, next] {
            let rule = err.as_rule().expect("rule error");
            assert!(rule.params().is_empty());
            assert_eq!(err.to_string(), "nil-required");
        }
    }

    #[test]
    fn test_optional_skips_absent() {
        let rules = nil::<String>().optional(string().required());
        assert!(rules.validate(&ctx(), &None).is_ok());
        assert!(rules.validate(&ctx(), &Some("x".to_owned())).is_ok());
    }

    #[test]
    fn test_optional_reports_nested_error() {
        let rules = nil::<String>().optional(string().required());
        let err = rules.validate(&ctx(), &Some(String::new())).unwrap_err();
        assert_eq!(err, Error::from(RuleError::new(RuleKind::STRING_REQUIRED)));
    }

    #[test]
    fn test_next_requires_presence() {
        let rules = nil::<u32>().next(number::<u32>().min(5));
        assert_eq!(rules.validate(&ctx(), &None).unwrap_err().kind(), Some(RuleKind::NIL_REQUIRED));
        assert_eq!(rules.validate(&ctx(), &Some(1)).unwrap_err().kind(), Some(RuleKind::NUMBER_MIN));
        assert!(rules.validate(&ctx(), &Some(5)).is_ok());
    }

    #[test]
    fn test_required_then_optional() {
        let rules = nil::<u32>().required().optional(number::<u32>().max(3));
        assert_eq!(rules.validate(&ctx(), &None).unwrap_err().kind(), Some(RuleKind::NIL_REQUIRED));
        assert_eq!(rules.validate(&ctx(), &Some(4)).unwrap_err().kind(), Some(RuleKind::NUMBER_MAX));
    }

    #[test]
    fn test_nested_nullable() {
        let rules = nil::<Option<i32>>().optional(nil::<i32>().required());
        assert!(rules.validate(&ctx(), &None).is_ok());
        assert!(rules.validate(&ctx(), &Some(None)).is_err());
        assert!(rules.validate(&ctx(), &Some(Some(1))).is_ok());
    }
}
