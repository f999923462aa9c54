//! Prelude module for convenient imports.
//!
//! Provides a single `use rulechain_validator::prelude::*;` import that
//! brings in the traits, error types, catalogs and combinators.
//!
//! # Examples
//!
//! ```rust,ignore
//! use rulechain_validator::prelude::*;
//!
//! let username = string().required().min(3);
//! let age = number::<u32>().min(18);
//! let nickname = nil::<String>().optional(string().max(16));
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, context
// ============================================================================

pub use crate::foundation::{
    Builder, Context, ContextError, Error, Errors, KeyError, Param, Rule, RuleChain, RuleError,
    RuleKind, Validatable, ValidationResult, Validator,
};

// ============================================================================
// VALIDATORS: Built-in catalogs
// ============================================================================

pub use crate::validators::{NilRules, Number, NumberRules, StringRules, nil, number, string};

#[cfg(feature = "pattern")]
pub use crate::validators::{Pattern, RegexPattern};

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{Named, chain, chain_all, named, validate_all, when};
