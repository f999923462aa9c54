//! Error types for validation failures
//!
//! The taxonomy is flat:
//!
//! - [`RuleError`]: one rule's failure: a [`RuleKind`] tag plus ordered [`Param`]s.
//! - [`KeyError`]: any [`Error`] attributed to a named field.
//! - [`Errors`]: an ordered aggregate that distinguishes "never ran"
//!   (absent, renders `null`) from "ran and passed" (empty, renders `[]`).
//! - [`Error`]: the single error type every rule and validator returns.
//!
//! # Examples
//!
//! ```rust,ignore
//! use rulechain_validator::foundation::{KeyError, RuleError, RuleKind};
//!
//! let error = RuleError::new(RuleKind::STRING_MIN).with_param(3usize);
//! assert_eq!(error.to_string(), "string-min: 3");
//!
//! let keyed = KeyError::new("username", error);
//! assert_eq!(keyed.to_string(), "username: string-min: 3");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};
use smallvec::SmallVec;

use crate::foundation::context::ContextError;

// ============================================================================
// RULE KIND
// ============================================================================

/// Opaque tag naming which rule failed.
///
/// Callers match on the kind (never on the rendered message) to localise or
/// otherwise react to a failure. Rule catalogs outside this crate define
/// their own kinds with [`RuleKind::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RuleKind(&'static str);

impl RuleKind {
    /// String must not be empty.
    pub const STRING_REQUIRED: Self = Self::new("string-required");
    /// String byte length below the bound.
    pub const STRING_MIN: Self = Self::new("string-min");
    /// String byte length above the bound.
    pub const STRING_MAX: Self = Self::new("string-max");
    /// String does not match the pattern.
    pub const STRING_MATCH: Self = Self::new("string-match");
    /// String is not one of the options.
    pub const STRING_IN: Self = Self::new("string-in");
    /// String is not one of the options, ignoring case.
    pub const STRING_IN_FOLD: Self = Self::new("string-in-fold");
    /// Number must not be zero.
    pub const NUMBER_REQUIRED: Self = Self::new("number-required");
    /// Number below the bound.
    pub const NUMBER_MIN: Self = Self::new("number-min");
    /// Number above the bound.
    pub const NUMBER_MAX: Self = Self::new("number-max");
    /// Number is not one of the options.
    pub const NUMBER_IN: Self = Self::new("number-in");
    /// Value must be present.
    pub const NIL_REQUIRED: Self = Self::new("nil-required");

    /// Creates a kind from a static tag.
    pub const fn new(tag: &'static str) -> Self {
        Self(tag)
    }

    /// Returns the tag.
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// ============================================================================
// PARAM
// ============================================================================

/// An opaque rule parameter (a bound, a pattern, a list of options).
///
/// Integers compare equal across signedness, so `Param::from(3usize)` equals
/// `Param::from(3)`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum Param {
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    Uint(u64),
    /// Floating point number.
    Float(f64),
    /// Boolean flag.
    Bool(bool),
    /// Text.
    Str(Cow<'static, str>),
    /// Ordered list of parameters.
    List(Vec<Param>),
}

impl PartialEq for Param {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Uint(a), Self::Uint(b)) => a == b,
            (Self::Int(a), Self::Uint(b)) | (Self::Uint(b), Self::Int(a)) => {
                u64::try_from(*a).is_ok_and(|a| a == *b)
            }
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Uint(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Str(v) => f.write_str(v),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

macro_rules! param_from {
    ($variant:ident as $wide:ty: $($t:ty),*) => {
        $(
            #[allow(trivial_numeric_casts, clippy::unnecessary_cast)]
            impl From<$t> for Param {
                fn from(value: $t) -> Self {
                    Self::$variant(value as $wide)
                }
            }
        )*
    };
}

param_from!(Int as i64: i8, i16, i32, i64, isize);
param_from!(Uint as u64: u8, u16, u32, u64, usize);
param_from!(Float as f64: f32, f64);

impl From<bool> for Param {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&'static str> for Param {
    fn from(value: &'static str) -> Self {
        Self::Str(Cow::Borrowed(value))
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Self::Str(Cow::Owned(value))
    }
}

impl From<Cow<'static, str>> for Param {
    fn from(value: Cow<'static, str>) -> Self {
        Self::Str(value)
    }
}

impl<P: Into<Param>> From<Vec<P>> for Param {
    fn from(values: Vec<P>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<P: Clone + Into<Param>> From<&[P]> for Param {
    fn from(values: &[P]) -> Self {
        Self::List(values.iter().cloned().map(Into::into).collect())
    }
}

// ============================================================================
// RULE ERROR
// ============================================================================

/// A single rule's structured failure.
///
/// Renders as `"<kind>"` without params and `"<kind>: <p1> <p2> ..."` with
/// them. Params are kept verbatim and in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleError {
    /// Which rule failed.
    pub kind: RuleKind,
    /// Rule-specific context for message formatting (typically 0-1 params).
    pub params: SmallVec<[Param; 2]>,
}

impl RuleError {
    /// Creates an error without params.
    pub fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            params: SmallVec::new(),
        }
    }

    /// Creates an error with the given params, in order.
    pub fn with_params<I>(kind: RuleKind, params: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Param>,
    {
        Self {
            kind,
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// Appends a param.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, param: impl Into<Param>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Returns the rule kind.
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Returns the params in order.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Returns the param at `index`.
    pub fn param(&self, index: usize) -> Option<&Param> {
        self.params.get(index)
    }
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.as_str())?;
        for (i, param) in self.params.iter().enumerate() {
            f.write_str(if i == 0 { ": " } else { " " })?;
            write!(f, "{param}")?;
        }
        Ok(())
    }
}

impl std::error::Error for RuleError {}

// ============================================================================
// KEY ERROR
// ============================================================================

/// A failure attributed to a named field.
///
/// [`source`](std::error::Error::source) yields the wrapped error, so generic
/// error reporters walk straight through to the rule that failed.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("{key}: {err}")]
pub struct KeyError {
    /// Field identifier.
    pub key: String,
    /// What went wrong with the field.
    #[source]
    #[serde(rename = "error")]
    pub err: Box<Error>,
}

impl KeyError {
    /// Wraps `err` under `key`.
    pub fn new(key: impl Into<String>, err: impl Into<Error>) -> Self {
        Self {
            key: key.into(),
            err: Box::new(err.into()),
        }
    }

    /// Returns the field identifier.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the wrapped error.
    pub fn inner(&self) -> &Error {
        &self.err
    }

    /// Consumes the error and returns the wrapped one.
    pub fn into_inner(self) -> Error {
        *self.err
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// An ordered collection of errors, typically one [`KeyError`] per field.
///
/// The collection is tri-state:
///
/// | state     | constructed by                 | renders as            |
/// |-----------|--------------------------------|-----------------------|
/// | absent    | `Errors::default()`            | `null`                |
/// | empty     | `Errors::new()`, empty collect | `[]`                  |
/// | populated | `push`, collect                | `["a: ...","b: ..."]` |
///
/// Absent means validation never ran; empty means it ran and passed.
/// Population is not synchronised; guard shared instances externally.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Errors(Option<Vec<Error>>);

impl Errors {
    /// Creates an empty (initialised) collection.
    #[must_use]
    pub fn new() -> Self {
        Self(Some(Vec::new()))
    }

    /// Creates an empty collection with room for `capacity` errors.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Some(Vec::with_capacity(capacity)))
    }

    /// Appends an error, initialising an absent collection.
    pub fn push(&mut self, error: impl Into<Error>) {
        self.0.get_or_insert_with(Vec::new).push(error.into());
    }

    /// Returns true if the collection was never initialised.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// Returns true if there are no errors (absent or empty).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.as_ref().is_none_or(Vec::is_empty)
    }

    /// Returns true if any error was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.as_ref().map_or(0, Vec::len)
    }

    /// Returns the errors as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Error] {
        self.0.as_deref().unwrap_or_default()
    }

    /// Iterates over the errors in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.as_slice().iter()
    }

    /// Finds the first error recorded for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Error> {
        self.iter()
            .find(|e| e.as_key().is_some_and(|k| k.key == key))
    }

    /// Returns `Ok(())` when nothing failed, `Err(self)` otherwise.
    ///
    /// This collapses the absent state into success: a collection that
    /// never ran also yields `Ok(())`. Check [`is_absent`](Self::is_absent)
    /// first when "never ran" must be told apart from "passed".
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), Errors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Consumes the collection, returning the underlying vector if initialised.
    #[must_use]
    pub fn into_inner(self) -> Option<Vec<Error>> {
        self.0
    }
}

impl From<Vec<Error>> for Errors {
    fn from(errors: Vec<Error>) -> Self {
        Self(Some(errors))
    }
}

impl<E: Into<Error>> FromIterator<E> for Errors {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self(Some(iter.into_iter().map(Into::into).collect()))
    }
}

impl<E: Into<Error>> Extend<E> for Errors {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.0
            .get_or_insert_with(Vec::new)
            .extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for Errors {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.unwrap_or_default().into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(errors) = &self.0 else {
            return f.write_str("null");
        };
        let rendered: Vec<String> = errors.iter().map(ToString::to_string).collect();
        let json = serde_json::to_string(&rendered).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl std::error::Error for Errors {}

// ============================================================================
// ERROR
// ============================================================================

/// The error returned by every rule, validator and named field.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A rule rejected the value.
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// A named field failed.
    #[error(transparent)]
    Key(#[from] KeyError),

    /// Several failures reported together.
    #[error(transparent)]
    Many(#[from] Errors),

    /// A match pattern could not be compiled.
    #[error("invalid pattern: {0}")]
    Pattern(String),

    /// A fault inside the pattern-matching capability, recovered at its
    /// boundary.
    #[error("panic: {0}")]
    Panic(String),

    /// The execution context was cancelled or its deadline passed.
    #[error(transparent)]
    Context(#[from] ContextError),

    /// A failure from a rule catalog outside this crate.
    #[error(transparent)]
    Custom(Arc<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps an arbitrary error.
    pub fn custom(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(error))
    }

    /// Returns the rule error, if this is one.
    pub fn as_rule(&self) -> Option<&RuleError> {
        match self {
            Self::Rule(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the key error, if this is one.
    pub fn as_key(&self) -> Option<&KeyError> {
        match self {
            Self::Key(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the aggregate, if this is one.
    pub fn as_many(&self) -> Option<&Errors> {
        match self {
            Self::Many(e) => Some(e),
            _ => None,
        }
    }

    /// Unwraps any number of [`KeyError`] layers.
    pub fn root(&self) -> &Error {
        let mut current = self;
        while let Self::Key(key) = current {
            current = &key.err;
        }
        current
    }

    /// Returns the kind of the rule that ultimately failed, looking through
    /// key errors.
    pub fn kind(&self) -> Option<RuleKind> {
        self.root().as_rule().map(RuleError::kind)
    }

    /// Returns the dotted key path down to the originating error, e.g.
    /// `"user.email"`. Empty for unkeyed errors.
    pub fn path(&self) -> String {
        let mut keys = Vec::new();
        let mut current = self;
        while let Self::Key(key) = current {
            keys.push(key.key.as_str());
            current = &key.err;
        }
        keys.join(".")
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Rule(a), Self::Rule(b)) => a == b,
            (Self::Key(a), Self::Key(b)) => a == b,
            (Self::Many(a), Self::Many(b)) => a == b,
            (Self::Pattern(a), Self::Pattern(b)) => a == b,
            (Self::Panic(a), Self::Panic(b)) => a == b,
            (Self::Context(a), Self::Context(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Rule(e) => e.serialize(serializer),
            Self::Key(e) => e.serialize(serializer),
            Self::Many(e) => e.serialize(serializer),
            other => serializer.collect_str(other),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
