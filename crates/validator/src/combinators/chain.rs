//! CHAIN combinator - ordered, short-circuiting composition of rules
//!
//! `chain(a, b)` runs `a`; if it fails that error is the result and `b`
//! never runs, otherwise `b` decides. At most one rule reports an error per
//! evaluation. The no-op rule is a two-sided identity and chaining is
//! associative.
//!
//! # Examples
//!
//! ```rust,ignore
//! use rulechain_validator::combinators::chain;
//!
//! let rule = chain(&non_empty, &max_len_20);
//! assert!(rule.check(&ctx, "hello").is_ok());
//! ```

use crate::foundation::Rule;

impl<T: ?Sized + 'static> Rule<T> {
    /// Returns a rule that runs `self`, then `next` if `self` passed.
    ///
    /// Chaining with the no-op rule on either side returns the other rule
    /// unchanged.
    pub fn chain(&self, next: &Rule<T>) -> Rule<T> {
        match (&self.check, &next.check) {
            (None, _) => next.clone(),
            (_, None) => self.clone(),
            (Some(first), Some(second)) => {
                let first = first.clone();
                let second = second.clone();
                Rule::new(move |ctx, value| {
                    first(ctx, value)?;
                    second(ctx, value)
                })
            }
        }
    }
}

/// Creates a rule running `first` then `second`.
pub fn chain<T: ?Sized + 'static>(first: &Rule<T>, second: &Rule<T>) -> Rule<T> {
    first.chain(second)
}

/// Chains any number of rules left to right. An empty input yields the
/// no-op rule.
pub fn chain_all<T, I>(rules: I) -> Rule<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = Rule<T>>,
{
    rules
        .into_iter()
        .fold(Rule::nop(), |acc, rule| acc.chain(&rule))
}
