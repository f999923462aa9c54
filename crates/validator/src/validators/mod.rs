//! Built-in rule catalogs
//!
//! Each catalog is a [`RuleChain`](crate::foundation::RuleChain) over one
//! value type, started from a constructor function:
//!
//! - **String**: [`string`] for `str` and `String`
//! - **Numeric**: [`number`] for every primitive integer and float
//! - **Nullable**: [`nil`] for `Option<T>`, nesting any other builder
//!
//! # Examples
//!
//! ```rust,ignore
//! use rulechain_validator::prelude::*;
//!
//! // String validation
//! let username = string().required().min(3).max(20);
//!
//! // Numeric validation
//! let age = number::<u8>().min(18).max(130);
//!
//! // Optional values
//! let nickname = nil::<String>().optional(string().max(32));
//! ```

pub mod nullable;
pub mod number;
#[cfg(feature = "pattern")]
pub mod pattern;
pub mod string;

pub use nullable::{NilRules, nil};
pub use number::{Number, NumberRules, number};
#[cfg(feature = "pattern")]
pub use pattern::{Pattern, RegexPattern};
pub use string::{StringRules, string};
