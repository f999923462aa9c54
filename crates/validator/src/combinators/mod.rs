//! Combinators for composing rules and attaching field keys
//!
//! - [`chain`] and [`Rule::chain`](crate::foundation::Rule::chain): ordered,
//!   short-circuiting composition
//! - [`when`]: swap in an alternate chain for values matching a predicate
//! - [`named`]: report failures as [`KeyError`](crate::foundation::KeyError)s
//! - [`validate_all`]: run independent units and collect every failure

pub mod all;
pub mod chain;
pub mod named;
pub mod when;

pub use all::validate_all;
pub use chain::{chain, chain_all};
pub use named::{Named, named};
pub use when::when;
