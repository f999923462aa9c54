//! Aggregate validation across several independent units
//!
//! A chain stops at its first failure; collecting failures across fields is
//! done here, one [`Validatable`] unit per field.

use crate::foundation::{Context, Errors, Validatable};

/// Runs every unit and collects each failure, in order.
///
/// The returned [`Errors`] is always initialised: empty means every unit ran
/// and passed. Units are independent, so a failure never stops the rest.
///
/// # Examples
///
/// ```rust,ignore
/// use rulechain_validator::prelude::*;
///
/// let units: [&dyn Validatable; 2] = [
///     &named("name", form.name.as_str(), string().required()),
///     &named("age", &form.age, number::<u8>().min(18)),
/// ];
/// validate_all(&ctx, units).into_result()?;
/// ```
pub fn validate_all<I>(ctx: &Context, units: I) -> Errors
where
    I: IntoIterator,
    I::Item: Validatable,
{
    let mut errors = Errors::new();
    let mut total = 0usize;

    for unit in units {
        total += 1;
        if let Err(e) = unit.validate(ctx) {
            errors.push(e);
        }
    }

    if errors.has_errors() {
        tracing::debug!(total, failed = errors.len(), "validation failed");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::named;
    use crate::validators::{number, string};

    #[test]
    fn test_validate_all_success_is_empty_not_absent() {
        let units: [&dyn Validatable; 2] = [
            &named("name", "alice", string().required()),
            &named("age", &30, number::<i32>().min(18)),
        ];
        let errors = validate_all(&Context::background(), units);

        assert!(!errors.is_absent());
        assert!(errors.is_empty());
        assert_eq!(errors.to_string(), "[]");
    }

    #[test]
    fn test_validate_all_collects_in_order() {
        let units: [&dyn Validatable; 3] = [
            &named("name", "", string().required()),
            &named("nick", "ok", string().required()),
            &named("age", &17, number::<i32>().min(18)),
        ];
        let errors = validate_all(&Context::background(), units);

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.to_string(),
            r#"["name: string-required","age: number-min: 18"]"#
        );
    }

    #[test]
    fn test_validate_all_empty_input() {
        let units: Vec<Box<dyn Validatable>> = Vec::new();
        let errors = validate_all(&Context::background(), units);
        assert_eq!(errors.to_string(), "[]");
    }
}
