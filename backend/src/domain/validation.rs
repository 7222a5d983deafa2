//! Form value validation.
//!
//! A [`RuleSet`] names the expected fields of a submitted form and the
//! validators each field must pass. Checking a form runs every validator on
//! every field and collects all violations; nothing short-circuits.
//!
//! Validators are plain boxed closures returning the violation message, so
//! new rules compose without touching the rule set itself.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};

/// Error kind tag attached to every violation sent back to the client
pub const FORM_VALUES_ERROR: &str = "form_values_error";

const MISSING_FIELD: &str = "This field is missing.";
const UNEXPECTED_FIELD: &str = "This field was not expected.";
const NOT_BLANK: &str = "This value should not be blank.";
const NOT_INTEGER: &str = "This value should be of type integer.";
const NOT_DATE: &str = "This value is not a valid date.";

/// Submitted field values, keyed by field name
pub type FormValues = BTreeMap<String, String>;

/// A single validator; returns the violation message when the value is rejected
pub type Validator = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// One failed constraint on one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub property: String,
    pub message: String,
}

impl Violation {
    pub fn new(property: &str, message: impl Into<String>) -> Self {
        Self {
            property: property.to_string(),
            message: message.into(),
        }
    }
}

/// Ordered list of violations produced by a failed check
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} form value(s) rejected", .0.len())]
pub struct Violations(pub Vec<Violation>);

impl Violations {
    pub fn single(property: &str, message: impl Into<String>) -> Self {
        Self(vec![Violation::new(property, message)])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Declarative description of the fields a form must contain
#[derive(Default)]
pub struct RuleSet {
    fields: Vec<(&'static str, Vec<Validator>)>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expect `name` in the submitted values and run `validators` on it
    pub fn field(mut self, name: &'static str, validators: Vec<Validator>) -> Self {
        self.fields.push((name, validators));
        self
    }

    /// Validate `values` against every rule.
    ///
    /// Fields named by the rule set but absent from `values` are reported as
    /// missing, and fields present in `values` but unknown to the rule set are
    /// reported as unexpected (in key order, after the per-field violations).
    pub fn check(&self, values: &FormValues) -> Result<(), Violations> {
        let mut violations = Vec::new();

        for (name, validators) in &self.fields {
            match values.get(*name) {
                Some(value) => violations.extend(
                    validators
                        .iter()
                        .filter_map(|validate| validate(value))
                        .map(|message| Violation::new(name, message)),
                ),
                None => violations.push(Violation::new(name, MISSING_FIELD)),
            }
        }

        for key in values.keys() {
            if !self.fields.iter().any(|(name, _)| *name == key.as_str()) {
                violations.push(Violation::new(key, UNEXPECTED_FIELD));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(Violations(violations))
        }
    }
}

/// Rejects empty or whitespace-only values
pub fn not_blank() -> Validator {
    Box::new(|value| value.trim().is_empty().then(|| NOT_BLANK.to_string()))
}

/// Rejects values that are not base-10 integers
pub fn integer() -> Validator {
    Box::new(|value| parse_integer(value).is_none().then(|| NOT_INTEGER.to_string()))
}

/// Inclusive lower bound. Non-integer values are left to [`integer`].
pub fn greater_than_or_equal(min: i64) -> Validator {
    Box::new(move |value| match parse_integer(value) {
        Some(n) if n < min => Some(format!(
            "This value should be greater than or equal to {}.",
            min
        )),
        _ => None,
    })
}

/// Inclusive upper bound. Non-integer values are left to [`integer`].
pub fn less_than_or_equal(max: i64) -> Validator {
    Box::new(move |value| match parse_integer(value) {
        Some(n) if n > max => Some(format!(
            "This value should be less than or equal to {}.",
            max
        )),
        _ => None,
    })
}

/// Rejects values that are not a real calendar day written as YYYY-MM-DD.
/// Blank values are left to [`not_blank`].
pub fn date() -> Validator {
    Box::new(|value| {
        if value.trim().is_empty() {
            return None;
        }
        parse_date(value).is_none().then(|| NOT_DATE.to_string())
    })
}

/// Rejects dates that are not strictly before the current UTC date.
/// Today is read when the validator runs, not when it is built.
pub fn before_today() -> Validator {
    Box::new(|value| {
        let date = parse_date(value)?;
        let today = Utc::now().date_naive();
        (date >= today).then(|| {
            format!(
                "This value should be less than {}.",
                today.format("%Y-%m-%d")
            )
        })
    })
}

pub fn parse_integer(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

/// Strict YYYY-MM-DD parsing
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Read `property` from `values` as a date, reporting a violation instead of
/// guessing when it is absent or malformed.
pub fn require_date(values: &FormValues, property: &str) -> Result<NaiveDate, Violations> {
    let raw = values
        .get(property)
        .ok_or_else(|| Violations::single(property, MISSING_FIELD))?;
    parse_date(raw).ok_or_else(|| Violations::single(property, NOT_DATE))
}

/// Read `property` from `values` as text
pub fn require_text(values: &FormValues, property: &str) -> Result<String, Violations> {
    values
        .get(property)
        .cloned()
        .ok_or_else(|| Violations::single(property, MISSING_FIELD))
}

/// Read `property` from `values` as an integer
pub fn require_integer(values: &FormValues, property: &str) -> Result<i64, Violations> {
    let raw = values
        .get(property)
        .ok_or_else(|| Violations::single(property, MISSING_FIELD))?;
    parse_integer(raw).ok_or_else(|| Violations::single(property, NOT_INTEGER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn form(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn grade_rules() -> RuleSet {
        RuleSet::new()
            .field(
                "value",
                vec![integer(), greater_than_or_equal(0), less_than_or_equal(20)],
            )
            .field("subject", vec![not_blank()])
    }

    #[test]
    fn test_valid_form_passes() {
        let values = form(&[("value", "18"), ("subject", "math")]);
        assert!(grade_rules().check(&values).is_ok());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        for value in ["0", "20"] {
            let values = form(&[("value", value), ("subject", "math")]);
            assert!(grade_rules().check(&values).is_ok(), "{} should pass", value);
        }

        let values = form(&[("value", "21"), ("subject", "math")]);
        let violations = grade_rules().check(&values).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations.0[0].property, "value");
        assert_eq!(
            violations.0[0].message,
            "This value should be less than or equal to 20."
        );

        let values = form(&[("value", "-1"), ("subject", "math")]);
        let violations = grade_rules().check(&values).unwrap_err();
        assert_eq!(
            violations.0[0].message,
            "This value should be greater than or equal to 0."
        );
    }

    #[test]
    fn test_all_violations_are_collected() {
        let values = form(&[("value", "42"), ("subject", "  ")]);
        let violations = grade_rules().check(&values).unwrap_err();

        let properties: Vec<&str> = violations.iter().map(|v| v.property.as_str()).collect();
        assert_eq!(properties, vec!["value", "subject"]);
    }

    #[test]
    fn test_non_integer_reported_once() {
        let values = form(&[("value", "abc"), ("subject", "math")]);
        let violations = grade_rules().check(&values).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations.0[0].message, "This value should be of type integer.");
    }

    #[test]
    fn test_missing_and_unexpected_fields() {
        let values = form(&[("subject", "math"), ("house", "Gryffondor")]);
        let violations = grade_rules().check(&values).unwrap_err();

        assert_eq!(violations.0[0], Violation::new("value", "This field is missing."));
        assert_eq!(
            violations.0[1],
            Violation::new("house", "This field was not expected.")
        );
    }

    #[test]
    fn test_date_format_is_strict() {
        assert!(parse_date("1990-01-01").is_some());
        assert!(parse_date("1990-1-1").is_none());
        assert!(parse_date("1990-02-30").is_none());
        assert!(parse_date("01/01/1990").is_none());
        assert!(parse_date("1990-01-01T00:00:00").is_none());
    }

    #[test]
    fn test_date_skips_blank_values() {
        let rules = RuleSet::new().field("birthdate", vec![not_blank(), date()]);
        let violations = rules.check(&form(&[("birthdate", "")])).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations.0[0].message, "This value should not be blank.");
    }

    #[test]
    fn test_before_today_uses_current_date() {
        let rules = RuleSet::new().field("birthdate", vec![before_today()]);
        let today = Utc::now().date_naive();

        let yesterday = (today - Duration::days(1)).format("%Y-%m-%d").to_string();
        assert!(rules.check(&form(&[("birthdate", &yesterday)])).is_ok());

        let today_str = today.format("%Y-%m-%d").to_string();
        let violations = rules.check(&form(&[("birthdate", &today_str)])).unwrap_err();
        assert_eq!(violations.0[0].property, "birthdate");

        let tomorrow = (today + Duration::days(1)).format("%Y-%m-%d").to_string();
        assert!(rules.check(&form(&[("birthdate", &tomorrow)])).is_err());
    }

    #[test]
    fn test_require_helpers_surface_failures() {
        let values = form(&[("birthdate", "not-a-date"), ("value", "12")]);

        let err = require_date(&values, "birthdate").unwrap_err();
        assert_eq!(err.0[0].message, "This value is not a valid date.");
        assert_eq!(require_integer(&values, "value").unwrap(), 12);
        assert_eq!(
            require_integer(&values, "missing").unwrap_err().0[0].message,
            "This field is missing."
        );
    }
}
