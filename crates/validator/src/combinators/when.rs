//! WHEN combinator - conditional chain swapping
//!
//! `when(chain, predicate, mapper)` returns a chain that, once bound to a
//! value, evaluates `predicate(value)` and runs `mapper(chain)` when it holds
//! or the original `chain` otherwise. The branch is chosen per value; the
//! combinator itself is built before any value exists.
//!
//! # Use Cases
//!
//! - Tighten rules for a subset of values (longer minimum for admin names)
//! - Apply extra checks only to values with a given prefix
//!
//! # Examples
//!
//! ```rust,ignore
//! use rulechain_validator::prelude::*;
//!
//! let name = string()
//!     .required()
//!     .when(|s: &str| s.starts_with("admin_"), |c| c.min(10));
//!
//! assert!(name.validate(&ctx, "bob").is_ok()); // base chain
//! assert!(name.validate(&ctx, "admin_x").is_err()); // swapped chain, too short
//! ```

use crate::foundation::{Rule, RuleChain};

/// Creates a chain that swaps in `mapper(chain)` for values matching
/// `predicate`.
///
/// `mapper` runs once, here, and must be pure: it receives a copy of
/// `chain` and returns the alternate chain, normally `chain` with extra
/// rules appended.
pub fn when<C, P, M>(chain: &C, predicate: P, mapper: M) -> C
where
    C: RuleChain,
    P: Fn(&C::Value) -> bool + Send + Sync + 'static,
    M: FnOnce(C) -> C,
{
    let base = chain.as_rule().clone();
    let alternate = mapper(chain.clone()).as_rule().clone();

    C::from_rule(Rule::new(move |ctx, value| {
        if predicate(value) {
            alternate.check(ctx, value)
        } else {
            base.check(ctx, value)
        }
    }))
}
