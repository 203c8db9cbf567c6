//! Coercion of URL-encoded form submissions into typed values.
//!
//! Browser forms submit every value as text. The helpers here pull a named
//! field out of the submission and convert it, reporting a
//! [`CoreError::Validation`] that names the offending field when the value
//! is missing or not numeric. Coercion happens before anything is written,
//! so a bad field aborts the whole submission.

use std::collections::HashMap;

use crate::error::CoreError;

/// A decoded form body: field name to raw submitted text.
#[derive(Debug, Clone, Default)]
pub struct FormFields(HashMap<String, String>);

impl FormFields {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self(fields)
    }

    fn raw(&self, name: &str) -> Result<&str, CoreError> {
        self.0
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| CoreError::Validation(format!("Missing form field '{name}'")))
    }

    /// Text fields are returned verbatim.
    pub fn text(&self, name: &str) -> Result<String, CoreError> {
        self.raw(name).map(str::to_string)
    }

    pub fn int(&self, name: &str) -> Result<i64, CoreError> {
        parse_int_field(name, self.raw(name)?)
    }

    pub fn float(&self, name: &str) -> Result<f64, CoreError> {
        parse_float_field(name, self.raw(name)?)
    }
}

impl From<HashMap<String, String>> for FormFields {
    fn from(fields: HashMap<String, String>) -> Self {
        Self::new(fields)
    }
}

/// Parse a base-10 integer, ignoring surrounding whitespace.
pub fn parse_int_field(name: &str, raw: &str) -> Result<i64, CoreError> {
    raw.trim().parse::<i64>().map_err(|_| {
        CoreError::Validation(format!("Field '{name}' must be an integer, got '{raw}'"))
    })
}

/// Parse a finite floating-point number, ignoring surrounding whitespace.
///
/// `NaN` and infinities are rejected even though `f64::from_str` accepts them.
pub fn parse_float_field(name: &str, raw: &str) -> Result<f64, CoreError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CoreError::Validation(format!(
            "Field '{name}' must be a number, got '{raw}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>()
            .into()
    }

    #[test]
    fn int_accepts_whitespace_and_sign() {
        assert_eq!(parse_int_field("age", " 40 ").unwrap(), 40);
        assert_eq!(parse_int_field("age", "+7").unwrap(), 7);
        assert_eq!(parse_int_field("age", "-3").unwrap(), -3);
    }

    #[test]
    fn int_rejects_non_numeric() {
        assert_matches!(parse_int_field("age", "forty"), Err(CoreError::Validation(_)));
        assert_matches!(parse_int_field("age", ""), Err(CoreError::Validation(_)));
        assert_matches!(parse_int_field("age", "4.5"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn int_error_names_the_field() {
        let err = parse_int_field("promises_made", "lots").unwrap_err();
        assert!(err.to_string().contains("promises_made"));
        assert!(err.to_string().contains("lots"));
    }

    #[test]
    fn float_accepts_decimals_and_integers() {
        assert_eq!(parse_float_field("success_rate", "85.5").unwrap(), 85.5);
        assert_eq!(parse_float_field("success_rate", "90").unwrap(), 90.0);
        assert_eq!(parse_float_field("success_rate", " 1e2 ").unwrap(), 100.0);
    }

    #[test]
    fn float_rejects_non_finite_and_text() {
        assert_matches!(parse_float_field("success_rate", "NaN"), Err(CoreError::Validation(_)));
        assert_matches!(parse_float_field("success_rate", "inf"), Err(CoreError::Validation(_)));
        assert_matches!(parse_float_field("success_rate", "high"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn text_is_returned_verbatim() {
        let f = fields(&[("name", "  Asha  ")]);
        assert_eq!(f.text("name").unwrap(), "  Asha  ");
    }

    #[test]
    fn missing_field_is_a_validation_error() {
        let f = fields(&[("name", "Asha")]);
        let err = f.int("age").unwrap_err();
        assert_matches!(&err, CoreError::Validation(msg) if msg.contains("age"));
        assert_matches!(f.text("party"), Err(CoreError::Validation(_)));
    }
}
