//! Numeric rules
//!
//! One generic chain, [`NumberRules<T>`], serves every primitive integer and
//! float type through the [`Number`] trait.
//!
//! # Examples
//!
//! ```rust,ignore
//! use rulechain_validator::prelude::*;
//!
//! let port = number::<u16>().required().min(1024);
//! assert!(port.validate(&ctx, &8080).is_ok());
//!
//! let level = number::<i32>().is_in([1, 2, 3]);
//! assert_eq!(level.validate(&ctx, &5).unwrap_err().to_string(), "number-in: [1 2 3]");
//! ```

use std::fmt;

use crate::foundation::{Builder, Param, Rule, RuleChain, RuleError, RuleKind, Validator};

/// A primitive number usable with [`number`].
///
/// The zero value is `Default::default()`.
pub trait Number:
    Copy + PartialOrd + Default + Into<Param> + fmt::Debug + Send + Sync + 'static
{
}

macro_rules! impl_number {
    ($($t:ty),* $(,)?) => {
        $(impl Number for $t {})*
    };
}

impl_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// A chain of rules over a number type `T`.
#[derive(Debug, Clone, Default)]
pub struct NumberRules<T> {
    rule: Rule<T>,
}

/// Returns a number chain with no rules.
pub fn number<T: Number>() -> NumberRules<T> {
    NumberRules { rule: Rule::nop() }
}

impl<T: Number> RuleChain for NumberRules<T> {
    type Value = T;

    fn from_rule(rule: Rule<T>) -> Self {
        Self { rule }
    }

    fn as_rule(&self) -> &Rule<T> {
        &self.rule
    }
}

impl<T: Number> Builder<T> for NumberRules<T> {
    fn build<'a>(&self, value: &'a T) -> Validator<'a> {
        self.rule.bind(value)
    }
}

impl<T: Number> NumberRules<T> {
    /// Ensures the number is not zero.
    pub fn required(&self) -> Self {
        self.with_rule(|_, value| {
            if *value == T::default() {
                Err(RuleError::new(RuleKind::NUMBER_REQUIRED).into())
            } else {
                Ok(())
            }
        })
    }

    /// Ensures the number is not less than `min`.
    pub fn min(&self, min: T) -> Self {
        self.with_rule(move |_, value| {
            if *value < min {
                Err(RuleError::new(RuleKind::NUMBER_MIN).with_param(min).into())
            } else {
                Ok(())
            }
        })
    }

    /// Ensures the number is not greater than `max`.
    pub fn max(&self, max: T) -> Self {
        self.with_rule(move |_, value| {
            if *value > max {
                Err(RuleError::new(RuleKind::NUMBER_MAX).with_param(max).into())
            } else {
                Ok(())
            }
        })
    }

    /// Ensures the number is one of `options`.
    pub fn is_in<I>(&self, options: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let options: Vec<T> = options.into_iter().collect();
        self.with_rule(move |_, value| {
            if options.contains(value) {
                Ok(())
            } else {
                Err(RuleError::new(RuleKind::NUMBER_IN)
                    .with_param(options.clone())
                    .into())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Context;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn ctx() -> Context {
        Context::background()
    }

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(-1, true)]
    fn test_required_int(#[case] input: i64, #[case] ok: bool) {
        assert_eq!(number::<i64>().required().validate(&ctx(), &input).is_ok(), ok);
    }

    #[test]
    fn test_required_float_treats_negative_zero_as_zero() {
        let rules = number::<f64>().required();
        assert!(rules.validate(&ctx(), &0.0).is_err());
        assert!(rules.validate(&ctx(), &-0.0).is_err());
        assert!(rules.validate(&ctx(), &0.1).is_ok());
    }

    #[test]
    fn test_min_max() {
        let rules = number::<u8>().min(10).max(20);
        assert!(rules.validate(&ctx(), &10).is_ok());
        assert!(rules.validate(&ctx(), &20).is_ok());
        assert_eq!(rules.validate(&ctx(), &9).unwrap_err().to_string(), "number-min: 10");
        assert_eq!(rules.validate(&ctx(), &21).unwrap_err().to_string(), "number-max: 20");
    }

    #[test]
    fn test_float_params_render_plainly() {
        let err = number::<f32>().max(1.5).validate(&ctx(), &2.0).unwrap_err();
        assert_eq!(err.to_string(), "number-max: 1.5");
    }

    #[test]
    fn test_in() {
        let rules = number::<i32>().is_in([1, 2, 3]);
        assert!(rules.validate(&ctx(), &2).is_ok());

        let err = rules.validate(&ctx(), &5).unwrap_err();
        let rule = err.as_rule().expect("rule error");
        assert_eq!(rule.kind(), RuleKind::NUMBER_IN);
        assert_eq!(rule.params(), &[Param::from(vec![1, 2, 3])]);
        assert_eq!(err.to_string(), "number-in: [1 2 3]");
    }

    #[test]
    fn test_in_empty_rejects_everything() {
        let rules = number::<usize>().is_in([]);
        assert_eq!(rules.validate(&ctx(), &0).unwrap_err().to_string(), "number-in: []");
    }

    #[test]
    fn test_build_and_validate() {
        use crate::foundation::Validatable;

        let rules = number::<i16>().min(0);
        assert!(rules.build(&-1).validate(&ctx()).is_err());
        assert!(rules.build(&1).validate(&ctx()).is_ok());
    }

    #[test]
    fn test_shared_base_chain() {
        let base = number::<i32>().min(0);
        let small = base.max(10);
        let large = base.min(100);

        assert!(base.validate(&ctx(), &50).is_ok());
        assert!(small.validate(&ctx(), &50).is_err());
        assert!(large.validate(&ctx(), &50).is_err());
        assert!(large.validate(&ctx(), &150).is_ok());
    }
}
