//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Context**: `Context`, `ContextError`
//! - **Rules**: `Rule`, `Validator`
//! - **Traits**: `Validatable`, `Builder`, `RuleChain`
//! - **Errors**: `RuleKind`, `Param`, `RuleError`, `KeyError`, `Errors`, `Error`
//!
//! # Architecture
//!
//! ## 1. One combinator shape
//!
//! Every typed catalog (strings, numbers, optional values) wraps a
//! [`Rule<T>`]. Chaining, conditional swapping and the identity rule are
//! written once over `Rule<T>` and reused through [`RuleChain`]:
//!
//! ```rust,ignore
//! let username = string().required().min(3).max(20);
//! ```
//!
//! ## 2. Build, then validate
//!
//! A chain is value-agnostic. [`Builder::build`] binds it to a value and the
//! resulting [`Validator`] runs against a [`Context`]:
//!
//! ```rust,ignore
//! let ctx = Context::background();
//! username.build("alice").validate(&ctx)?;
//! ```
//!
//! ## 3. Structured errors
//!
//! Failures carry a [`RuleKind`] tag and ordered params, never a prose
//! message, so callers can localise them:
//!
//! ```rust,ignore
//! let err = string().min(3).validate(&ctx, "ab").unwrap_err();
//! assert_eq!(err.kind(), Some(RuleKind::STRING_MIN));
//! assert_eq!(err.to_string(), "string-min: 3");
//! ```

// Module declarations
pub mod context;
pub mod error;
pub mod rule;
pub mod traits;

// Re-export everything at the foundation level for convenience
pub use context::{Context, ContextError};
pub use error::{Error, Errors, KeyError, Param, RuleError, RuleKind};
pub use rule::{Rule, Validator};
pub use traits::{Builder, RuleChain, Validatable};

/// A validation result using the crate's [`Error`].
pub type ValidationResult<T> = Result<T, Error>;
