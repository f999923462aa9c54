//! Pattern-matching capability for `string().matches(..)`
//!
//! A [`Pattern`] yields a compiled [`Regex`]. Every call into the capability
//! goes through one fault boundary: compile errors become
//! [`Error::Pattern`], and a panic inside the matcher becomes
//! [`Error::Panic`]. A malformed pattern never takes down the caller.

use std::any::Any;
use std::borrow::Cow;
use std::panic::{self, AssertUnwindSafe};
use std::sync::OnceLock;

use regex::Regex;

use crate::foundation::{Error, RuleError, RuleKind};

/// Something that can be compiled into a regular expression.
pub trait Pattern: Send + Sync {
    /// Returns the pattern text, used in error params and logs.
    fn source(&self) -> &str;

    /// Returns the compiled expression.
    fn regex(&self) -> Result<Cow<'_, Regex>, regex::Error>;
}

impl Pattern for Regex {
    fn source(&self) -> &str {
        Regex::as_str(self)
    }

    fn regex(&self) -> Result<Cow<'_, Regex>, regex::Error> {
        Ok(Cow::Borrowed(self))
    }
}

/// Compiled on every evaluation; prefer [`RegexPattern`] for hot paths.
impl Pattern for str {
    fn source(&self) -> &str {
        self
    }

    fn regex(&self) -> Result<Cow<'_, Regex>, regex::Error> {
        Regex::new(self).map(Cow::Owned)
    }
}

/// Compiled on every evaluation; prefer [`RegexPattern`] for hot paths.
impl Pattern for String {
    fn source(&self) -> &str {
        self
    }

    fn regex(&self) -> Result<Cow<'_, Regex>, regex::Error> {
        Regex::new(self).map(Cow::Owned)
    }
}

/// A pattern compiled lazily, once, on first use.
///
/// The compile outcome (including failure) is cached, so an invalid
/// pattern reports the same error on every evaluation.
///
/// # Examples
///
/// ```rust,ignore
/// static PHONE: RegexPattern = RegexPattern::new(r"^\d{3}-\d{4}$");
/// let rules = string().matches(&PHONE);
/// ```
#[derive(Debug)]
pub struct RegexPattern {
    source: Cow<'static, str>,
    compiled: OnceLock<Result<Regex, regex::Error>>,
}

impl RegexPattern {
    /// Creates a pattern from a static source. Usable in `static` items.
    pub const fn new(source: &'static str) -> Self {
        Self {
            source: Cow::Borrowed(source),
            compiled: OnceLock::new(),
        }
    }

    /// Creates a pattern from an owned source.
    pub fn from_string(source: String) -> Self {
        Self {
            source: Cow::Owned(source),
            compiled: OnceLock::new(),
        }
    }

    /// Returns the pattern source.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Pattern for RegexPattern {
    fn source(&self) -> &str {
        &self.source
    }

    fn regex(&self) -> Result<Cow<'_, Regex>, regex::Error> {
        match self.compiled.get_or_init(|| Regex::new(&self.source)) {
            Ok(regex) => Ok(Cow::Borrowed(regex)),
            Err(e) => Err(e.clone()),
        }
    }
}

impl<P: Pattern + ?Sized> Pattern for &P {
    fn source(&self) -> &str {
        (**self).source()
    }

    fn regex(&self) -> Result<Cow<'_, Regex>, regex::Error> {
        (**self).regex()
    }
}

/// Matches `value` against `pattern` inside the fault boundary.
pub(crate) fn check<P: Pattern + ?Sized>(pattern: &P, value: &str) -> Result<(), Error> {
    let mut source = "";
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| -> Result<bool, regex::Error> {
        source = pattern.source();
        Ok(pattern.regex()?.is_match(value))
    }));

    match outcome {
        Ok(Ok(true)) => Ok(()),
        Ok(Ok(false)) => Err(RuleError::new(RuleKind::STRING_MATCH)
            .with_param(source.to_owned())
            .into()),
        Ok(Err(e)) => {
            tracing::warn!(pattern = %source, error = %e, "invalid match pattern");
            Err(Error::Pattern(e.to_string()))
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::warn!(pattern = %source, panic = %message, "pattern matcher panicked");
            Err(Error::Panic(message))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_owned()
    }
}
