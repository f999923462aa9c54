//! # rulechain-validator
//!
//! Composable, immutable rule chains for validating values.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rulechain_validator::prelude::*;
//!
//! let ctx = Context::background();
//!
//! // Chains are built fluently and never mutated.
//! let username = string().required().min(3).max(20);
//! assert!(username.validate(&ctx, "alice").is_ok());
//!
//! // Field keys are attached with `named`; failures are collected with
//! // `validate_all`.
//! let errors = validate_all(&ctx, [
//!     named("username", "al", username.clone()),
//!     named("nickname", "", username),
//! ]);
//! assert_eq!(errors.to_string(), r#"["username: string-min: 3","nickname: string-required"]"#);
//! ```
//!
//! ## Custom Rules
//!
//! Append a closure with [`RuleChain::with_rule`](foundation::RuleChain::with_rule),
//! or implement [`Builder`](foundation::Builder) for a whole new catalog.
//!
//! ## Built-in Catalogs
//!
//! - **String**: [`string`](validators::string): `required`, `min`, `max`,
//!   `matches`, `is_in`, `in_fold`
//! - **Numeric**: [`number`](validators::number): `required`, `min`, `max`, `is_in`
//! - **Nullable**: [`nil`](validators::nil): `required`, `optional`, `next`
//!
//! ## Features
//!
//! - `pattern` (default): regular-expression matching via `regex`

// Error carries a Box<KeyError> chain and an aggregate; every rule returns it
// by value.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
pub mod prelude;
pub mod validators;
