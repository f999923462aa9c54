//! String rules
//!
//! # Rules
//!
//! | method      | kind             | params            |
//! |-------------|------------------|-------------------|
//! | `required`  | `string-required`|                   |
//! | `min`       | `string-min`     | bound             |
//! | `max`       | `string-max`     | bound             |
//! | `matches`   | `string-match`   | pattern source    |
//! | `is_in`     | `string-in`      | `[options]`       |
//! | `in_fold`   | `string-in-fold` | `[options]`       |
//!
//! Lengths are byte lengths, matching [`str::len`].
//!
//! # Examples
//!
//! ```rust,ignore
//! use rulechain_validator::prelude::*;
//!
//! let username = string().required().min(3).max(20);
//! assert!(username.validate(&ctx, "alice").is_ok());
//! assert_eq!(username.validate(&ctx, "al").unwrap_err().to_string(), "string-min: 3");
//! ```

use std::sync::Arc;

use crate::foundation::{Builder, Param, Rule, RuleChain, RuleError, RuleKind, Validator};

/// A chain of rules over `str`.
///
/// Builds for both `str` and `String` values, so it can be nested inside
/// [`nil::<String>()`](crate::validators::nil).
#[derive(Debug, Clone, Default)]
pub struct StringRules {
    rule: Rule<str>,
}

/// Returns a string chain with no rules.
pub fn string() -> StringRules {
    StringRules::default()
}

impl RuleChain for StringRules {
    type Value = str;

    fn from_rule(rule: Rule<str>) -> Self {
        Self { rule }
    }

    fn as_rule(&self) -> &Rule<str> {
        &self.rule
    }
}

impl Builder<str> for StringRules {
    fn build<'a>(&self, value: &'a str) -> Validator<'a> {
        self.rule.bind(value)
    }
}

impl Builder<String> for StringRules {
    fn build<'a>(&self, value: &'a String) -> Validator<'a> {
        self.rule.bind(value.as_str())
    }
}

impl StringRules {
    /// Ensures the string is not empty.
    pub fn required(&self) -> Self {
        self.with_rule(|_, value| {
            if value.is_empty() {
                Err(RuleError::new(RuleKind::STRING_REQUIRED).into())
            } else {
                Ok(())
            }
        })
    }

    /// Ensures the string is at least `length` bytes long.
    pub fn min(&self, length: usize) -> Self {
        self.with_rule(move |_, value| {
            if value.len() < length {
                Err(RuleError::new(RuleKind::STRING_MIN).with_param(length).into())
            } else {
                Ok(())
            }
        })
    }

    /// Ensures the string is at most `length` bytes long.
    pub fn max(&self, length: usize) -> Self {
        self.with_rule(move |_, value| {
            if value.len() > length {
                Err(RuleError::new(RuleKind::STRING_MAX).with_param(length).into())
            } else {
                Ok(())
            }
        })
    }

    /// Ensures the string matches `pattern`.
    ///
    /// An invalid pattern, or a fault inside the matcher, is reported as an
    /// ordinary error rather than aborting evaluation.
    #[cfg(feature = "pattern")]
    pub fn matches<P>(&self, pattern: P) -> Self
    where
        P: crate::validators::Pattern + 'static,
    {
        self.with_rule(move |_, value| crate::validators::pattern::check(&pattern, value))
    }

    /// Ensures the string equals one of `options` (case-sensitive).
    ///
    /// Use [`in_fold`](Self::in_fold) for a case-insensitive check.
    pub fn is_in<I, S>(&self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Arc<[String]> = options.into_iter().map(Into::into).collect();
        self.with_rule(move |_, value| {
            if options.iter().any(|opt| opt == value) {
                Ok(())
            } else {
                Err(RuleError::new(RuleKind::STRING_IN)
                    .with_param(options_param(&options))
                    .into())
            }
        })
    }

    /// Ensures the string equals one of `options`, ignoring case.
    pub fn in_fold<I, S>(&self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Arc<[String]> = options.into_iter().map(Into::into).collect();
        self.with_rule(move |_, value| {
            if options.iter().any(|opt| eq_fold(opt, value)) {
                Ok(())
            } else {
                Err(RuleError::new(RuleKind::STRING_IN_FOLD)
                    .with_param(options_param(&options))
                    .into())
            }
        })
    }
}

fn options_param(options: &[String]) -> Param {
    Param::List(options.iter().cloned().map(Param::from).collect())
}

/// Unicode case-insensitive equality under simple (one char to one char)
/// case folding.
fn eq_fold(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(a, b)| char_eq_fold(a, b))
}

/// Two chars fold together when they share a lowercase or an uppercase
/// mapping, so `ς`, `σ` and `Σ` are one class, as are `ſ`, `s` and `S`.
fn char_eq_fold(a: char, b: char) -> bool {
    a == b
        || a.to_lowercase().eq(b.to_lowercase())
        || a.to_uppercase().eq(b.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Context, Validatable};
    use rstest::rstest;

    fn ctx() -> Context {
        Context::background()
    }

    #[test]
    fn test_empty_chain_accepts_everything() {
        assert!(string().validate(&ctx(), "").is_ok());
        assert!(string().as_rule().is_nop());
    }

    #[rstest]
    #[case("", false)]
    #[case(" ", true)]
    #[case("a", true)]
    fn test_required(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(string().required().validate(&ctx(), input).is_ok(), ok);
    }

    #[test]
    fn test_min() {
        let rules = string().min(3);
        let err = rules.validate(&ctx(), "ab").unwrap_err();
        let rule = err.as_rule().expect("rule error");

        assert_eq!(rule.kind(), RuleKind::STRING_MIN);
        assert_eq!(rule.params(), &[Param::from(3)]);
        assert!(rules.validate(&ctx(), "abc").is_ok());
    }

    #[test]
    fn test_max() {
        let rules = string().max(3);
        assert!(rules.validate(&ctx(), "abc").is_ok());
        assert_eq!(
            rules.validate(&ctx(), "abcd").unwrap_err().to_string(),
            "string-max: 3"
        );
    }

    #[test]
    fn test_length_is_bytes() {
        // "é" is two bytes.
        assert!(string().min(2).validate(&ctx(), "é").is_ok());
        assert!(string().max(1).validate(&ctx(), "é").is_err());
    }

    #[test]
    fn test_in_is_case_sensitive() {
        let rules = string().is_in(["red", "green"]);
        assert!(rules.validate(&ctx(), "red").is_ok());

        let err = rules.validate(&ctx(), "RED").unwrap_err();
        assert_eq!(err.to_string(), "string-in: [red green]");
    }

    #[rstest]
    #[case("RED", true)]
    #[case("Green", true)]
    #[case("ΣΊΣΥΦΟΣ", false)]
    #[case("blue", false)]
    #[case("gReEn", true)]
    #[case("greens", false)]
    fn test_in_fold(#[case] input: &str, #[case] ok: bool) {
        let rules = string().in_fold(["red", "green"]);
        assert_eq!(rules.validate(&ctx(), input).is_ok(), ok);
    }

    #[rstest]
    #[case("ς", "Σ", true)]
    #[case("ς", "σ", true)]
    #[case("ΟΔΥΣΣΕΥΣ", "οδυσσευς", true)]
    #[case("ſ", "s", true)]
    #[case("ſ", "S", true)]
    #[case("\u{212A}", "k", true)]
    #[case("ß", "\u{1E9E}", true)]
    #[case("ß", "ss", false)]
    #[case("a", "b", false)]
    fn test_in_fold_simple_case_folding(
        #[case] option: &str,
        #[case] input: &str,
        #[case] ok: bool,
    ) {
        let rules = string().in_fold([option]);
        assert_eq!(rules.validate(&ctx(), input).is_ok(), ok);
    }

    #[test]
    fn test_in_fold_unicode() {
        let rules = string().in_fold(["straße"]);
        assert!(rules.validate(&ctx(), "STRAßE").is_ok());
        assert_eq!(
            rules.validate(&ctx(), "strasse").unwrap_err().kind(),
            Some(RuleKind::STRING_IN_FOLD)
        );
    }

    #[test]
    fn test_first_failure_wins() {
        let rules = string().required().min(3);
        let err = rules.validate(&ctx(), "").unwrap_err();
        assert_eq!(err.kind(), Some(RuleKind::STRING_REQUIRED));
    }

    #[test]
    fn test_builds_for_str_and_string() {
        let rules = string().required();
        let owned = String::new();

        assert!(Builder::<str>::build(&rules, "x").validate(&ctx()).is_ok());
        assert!(Builder::<String>::build(&rules, &owned).validate(&ctx()).is_err());
    }

    #[test]
    fn test_with_appends_chain() {
        let base = string().required();
        let rules = base.with(string().max(2));

        assert!(base.validate(&ctx(), "abc").is_ok());
        assert!(rules.validate(&ctx(), "abc").is_err());
    }

    #[cfg(feature = "pattern")]
    #[test]
    fn test_matches() {
        let rules = string().matches(r"^\d{3}-\d{4}$");
        assert!(rules.validate(&ctx(), "555-1234").is_ok());
        assert_eq!(
            rules.validate(&ctx(), "5551234").unwrap_err().to_string(),
            r"string-match: ^\d{3}-\d{4}$"
        );
    }
}
