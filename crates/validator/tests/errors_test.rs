//! Rendering and serialization of validation errors.

use pretty_assertions::assert_eq;
use rulechain_validator::prelude::*;

fn ctx() -> Context {
    Context::background()
}

// ============================================================================
// ERRORS RENDERING
// ============================================================================

#[test]
fn absent_errors_render_null() {
    insta::assert_snapshot!(Errors::default().to_string(), @"null");
}

#[test]
fn empty_errors_render_empty_array() {
    let errors = validate_all(&ctx(), Vec::<Named<'_, str, StringRules>>::new());
    insta::assert_snapshot!(errors.to_string(), @"[]");
}

#[test]
fn populated_errors_render_json_array_of_messages() {
    let errors = validate_all(
        &ctx(),
        [
            named("name", "", string().required()),
            named("code", "abc", string().is_in(["x", "y"])),
            named("team", "ops", string().in_fold(["Dev", "QA"])),
        ],
    );
    insta::assert_snapshot!(
        errors.to_string(),
        @r#"["name: string-required","code: string-in: [x y]","team: string-in-fold: [Dev QA]"]"#
    );
}

#[test]
fn messages_with_quotes_are_escaped() {
    let errors = validate_all(&ctx(), [named("quote", "\"", string().is_in(["\"a\""]))]);
    assert_eq!(errors.to_string(), r#"["quote: string-in: [\"a\"]"]"#);
}

#[test]
fn errors_roundtrip_through_json_as_strings() {
    let errors = validate_all(
        &ctx(),
        [
            named("a", "", string().required()),
            named("b", "toolong", string().max(3)),
        ],
    );
    let parsed: Vec<String> = serde_json::from_str(&errors.to_string()).unwrap();
    assert_eq!(parsed, vec!["a: string-required", "b: string-max: 3"]);
}

// ============================================================================
// STRUCTURED SERIALIZATION
// ============================================================================

#[test]
fn key_error_serializes_structurally() {
    let err = named("name", "", string().required()).validate(&ctx()).unwrap_err();
    insta::assert_json_snapshot!(err, @r#"
    {
      "key": "name",
      "error": {
        "kind": "string-required",
        "params": []
      }
    }
    "#);
}

#[test]
fn absent_errors_serialize_as_null() {
    assert_eq!(serde_json::to_string(&Errors::default()).unwrap(), "null");
    assert_eq!(serde_json::to_string(&Errors::new()).unwrap(), "[]");
}

#[test]
fn context_errors_serialize_as_messages() {
    let err = Error::from(ContextError::DeadlineExceeded);
    assert_eq!(
        serde_json::to_value(&err).unwrap(),
        serde_json::json!("context deadline exceeded")
    );
}

// ============================================================================
// INSPECTION
// ============================================================================

#[test]
fn key_error_exposes_key_and_original() {
    let err = named("age", &17i32, number::<i32>().min(18))
        .validate(&ctx())
        .unwrap_err();

    let key = err.as_key().expect("key error");
    assert_eq!(key.key(), "age");

    let rule = key.inner().as_rule().expect("rule error");
    assert_eq!(rule.kind(), RuleKind::NUMBER_MIN);
    assert_eq!(rule.param(0), Some(&Param::from(18)));
    assert_eq!(rule.param(1), None);
}

#[test]
fn errors_lookup_by_key() {
    let errors = validate_all(
        &ctx(),
        [
            named("first", "", string().required()),
            named("second", "ok", string().required()),
        ],
    );

    assert_eq!(errors.get("first").and_then(Error::kind), Some(RuleKind::STRING_REQUIRED));
    assert!(errors.get("second").is_none());
    assert!(errors.into_result().is_err());
}

#[test]
fn external_kinds_are_first_class() {
    const EVEN: RuleKind = RuleKind::new("even");

    let rules = number::<u8>().with_rule(|_, value| {
        if value % 2 == 0 {
            Ok(())
        } else {
            Err(RuleError::new(EVEN).with_param(2u8).into())
        }
    });
    let err = rules.validate(&ctx(), &3).unwrap_err();
    assert_eq!(err.kind(), Some(EVEN));
    assert_eq!(err.to_string(), "even: 2");
}
