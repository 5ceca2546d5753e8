//! Payload validation for record creation and partial updates.
//!
//! Validation reads a JSON object field by field and collects one
//! [`FieldError`] per violated field instead of stopping at the first
//! problem, so a client can highlight every offending input at once.
//! Fields the schema does not name are ignored.

use crate::types::ClosedEnum;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

pub const EMPTY_UPDATE_MESSAGE: &str = "at least one field is required for update";

/// A single violated field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub details: Vec<FieldError>,
}

impl ValidationError {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            details: vec![FieldError::new(field, message)],
        }
    }

    /// True when any detail names `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.details.iter().any(|d| d.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .details
            .iter()
            .map(|d| format!("{}: {}", d.field, d.message))
            .collect();
        write!(f, "validation failed: {}", parts.join("; "))
    }
}

impl std::error::Error for ValidationError {}

/// Unwrap a field the create schema requires. [`Fields::finish`] has
/// already reported it when missing; this turns the `Option` into a value.
pub fn require<T>(value: Option<T>, field: &str) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::single(field, "Required"))
}

/// Which schema a payload is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Required fields must be present.
    Create,
    /// Every field is optional but at least one must be present.
    Update,
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn expected(what: &str, got: &Value) -> String {
    format!("Expected {what}, received {}", kind(got))
}

/// Field-by-field reader over a JSON object payload.
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
    mode: Mode,
    seen: usize,
    errors: Vec<FieldError>,
}

impl<'a> Fields<'a> {
    pub fn new(body: &'a Value, mode: Mode) -> Result<Self, ValidationError> {
        match body {
            Value::Object(map) => Ok(Self {
                map,
                mode,
                seen: 0,
                errors: Vec::new(),
            }),
            other => Err(ValidationError::single("body", expected("object", other))),
        }
    }

    fn lookup(&mut self, name: &str) -> Option<&'a Value> {
        let value = self.map.get(name);
        if value.is_some() {
            self.seen += 1;
        }
        value
    }

    fn fail(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    fn missing(&mut self, name: &str) {
        if self.mode == Mode::Create {
            self.fail(name, "Required");
        }
    }

    /// A non-nullable string that must be present on create.
    pub fn required_string(&mut self, name: &str) -> Option<String> {
        match self.lookup(name) {
            None => {
                self.missing(name);
                None
            }
            Some(Value::Null) if self.mode == Mode::Create => {
                self.fail(name, "Required");
                None
            }
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                self.fail(name, expected("string", other));
                None
            }
        }
    }

    /// A nullable string. `Some(None)` means an explicit `null`.
    pub fn nullable_string(&mut self, name: &str) -> Option<Option<String>> {
        match self.lookup(name)? {
            Value::Null => Some(None),
            Value::String(s) => Some(Some(s.clone())),
            other => {
                self.fail(name, expected("string", other));
                None
            }
        }
    }

    fn enum_value<E: ClosedEnum>(&mut self, name: &str, value: &Value) -> Option<E> {
        match value {
            Value::String(s) => match E::parse(s) {
                Some(v) => Some(v),
                None => {
                    self.fail(
                        name,
                        format!(
                            "Invalid enum value. Expected {}, received '{s}'",
                            E::expected()
                        ),
                    );
                    None
                }
            },
            other => {
                self.fail(name, expected("string", other));
                None
            }
        }
    }

    /// A closed enum that must be present on create.
    pub fn required_enum<E: ClosedEnum>(&mut self, name: &str) -> Option<E> {
        match self.lookup(name) {
            None => {
                self.missing(name);
                None
            }
            Some(Value::Null) if self.mode == Mode::Create => {
                self.fail(name, "Required");
                None
            }
            Some(value) => self.enum_value(name, value),
        }
    }

    /// A non-nullable enum that falls back to a default when absent.
    pub fn defaulted_enum<E: ClosedEnum>(&mut self, name: &str) -> Option<E> {
        let value = self.lookup(name)?;
        self.enum_value(name, value)
    }

    pub fn nullable_enum<E: ClosedEnum>(&mut self, name: &str) -> Option<Option<E>> {
        match self.lookup(name)? {
            Value::Null => Some(None),
            value => self.enum_value(name, value).map(Some),
        }
    }

    /// A non-nullable integer bounded to `[min, max]`.
    pub fn integer(&mut self, name: &str, min: i64, max: Option<i64>) -> Option<i64> {
        let value = self.lookup(name)?;
        let n = match value {
            Value::Number(n) => match n.as_i64() {
                Some(n) => n,
                None => {
                    self.fail(name, "Expected integer, received float");
                    return None;
                }
            },
            other => {
                self.fail(name, expected("number", other));
                return None;
            }
        };
        if n < min {
            self.fail(
                name,
                format!("Number must be greater than or equal to {min}"),
            );
            return None;
        }
        if let Some(max) = max {
            if n > max {
                self.fail(name, format!("Number must be less than or equal to {max}"));
                return None;
            }
        }
        Some(n)
    }

    /// A nullable list of strings.
    pub fn nullable_strings(&mut self, name: &str) -> Option<Option<Vec<String>>> {
        match self.lookup(name)? {
            Value::Null => Some(None),
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                let mut ok = true;
                for (i, item) in items.iter().enumerate() {
                    match item {
                        Value::String(s) => out.push(s.clone()),
                        other => {
                            self.fail(format!("{name}.{i}"), expected("string", other));
                            ok = false;
                        }
                    }
                }
                ok.then_some(Some(out))
            }
            other => {
                self.fail(name, expected("array", other));
                None
            }
        }
    }

    /// Report collected errors. On update, an empty payload is an error too.
    pub fn finish(self) -> Result<(), ValidationError> {
        if !self.errors.is_empty() {
            return Err(ValidationError {
                details: self.errors,
            });
        }
        if self.mode == Mode::Update && self.seen == 0 {
            return Err(ValidationError::single("body", EMPTY_UPDATE_MESSAGE));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IssuePriority, IssueStatus};
    use serde_json::json;

    #[test]
    fn non_object_body_is_rejected() {
        let body = json!([1, 2]);
        let err = Fields::new(&body, Mode::Create).err().unwrap();
        assert_eq!(err.details[0].field, "body");
        assert_eq!(err.details[0].message, "Expected object, received array");
    }

    #[test]
    fn missing_required_fields_are_all_reported() {
        let body = json!({});
        let mut f = Fields::new(&body, Mode::Create).unwrap();
        f.required_string("title");
        f.required_enum::<IssuePriority>("priority");
        let err = f.finish().unwrap_err();
        assert_eq!(err.details.len(), 2);
        assert!(err.has_field("title"));
        assert!(err.has_field("priority"));
        assert!(err.details.iter().all(|d| d.message == "Required"));
    }

    #[test]
    fn required_fields_are_optional_on_update() {
        let body = json!({ "status": "closed" });
        let mut f = Fields::new(&body, Mode::Update).unwrap();
        assert_eq!(f.required_string("title"), None);
        assert_eq!(
            f.defaulted_enum::<IssueStatus>("status"),
            Some(IssueStatus::Closed)
        );
        f.finish().unwrap();
    }

    #[test]
    fn empty_update_is_rejected() {
        let body = json!({});
        let mut f = Fields::new(&body, Mode::Update).unwrap();
        f.required_string("title");
        let err = f.finish().unwrap_err();
        assert_eq!(err.details[0].message, EMPTY_UPDATE_MESSAGE);
    }

    #[test]
    fn unknown_fields_do_not_count_towards_update() {
        let body = json!({ "colour": "blue" });
        let mut f = Fields::new(&body, Mode::Update).unwrap();
        f.nullable_string("description");
        assert!(f.finish().is_err());
    }

    #[test]
    fn invalid_enum_value_names_the_accepted_set() {
        let body = json!({ "status": "blocked" });
        let mut f = Fields::new(&body, Mode::Update).unwrap();
        assert_eq!(f.defaulted_enum::<IssueStatus>("status"), None);
        let err = f.finish().unwrap_err();
        assert_eq!(
            err.details[0].message,
            "Invalid enum value. Expected 'open' | 'in_progress' | 'resolved' | 'closed', received 'blocked'"
        );
    }

    #[test]
    fn nullable_string_distinguishes_null_from_absent() {
        let body = json!({ "assignee": null });
        let mut f = Fields::new(&body, Mode::Update).unwrap();
        assert_eq!(f.nullable_string("assignee"), Some(None));
        assert_eq!(f.nullable_string("description"), None);
        f.finish().unwrap();
    }

    #[test]
    fn integer_bounds_are_enforced() {
        let body = json!({ "progress": 140, "locationCount": -1, "other": 2.5 });
        let mut f = Fields::new(&body, Mode::Update).unwrap();
        assert_eq!(f.integer("progress", 0, Some(100)), None);
        assert_eq!(f.integer("locationCount", 0, None), None);
        assert_eq!(f.integer("other", 0, None), None);
        let err = f.finish().unwrap_err();
        assert_eq!(err.details.len(), 3);
        assert_eq!(
            err.details[0].message,
            "Number must be less than or equal to 100"
        );
        assert_eq!(err.details[2].message, "Expected integer, received float");
    }

    #[test]
    fn string_list_reports_offending_index() {
        let body = json!({ "scripts": ["a.sh", 3] });
        let mut f = Fields::new(&body, Mode::Update).unwrap();
        assert_eq!(f.nullable_strings("scripts"), None);
        let err = f.finish().unwrap_err();
        assert_eq!(err.details[0].field, "scripts.1");
    }

    #[test]
    fn wrong_type_on_required_string() {
        let body = json!({ "name": 12 });
        let mut f = Fields::new(&body, Mode::Create).unwrap();
        f.required_string("name");
        let err = f.finish().unwrap_err();
        assert_eq!(err.details[0].message, "Expected string, received number");
    }

    #[test]
    fn display_joins_details() {
        let err = ValidationError {
            details: vec![
                FieldError::new("name", "Required"),
                FieldError::new("type", "Required"),
            ],
        };
        assert_eq!(
            err.to_string(),
            "validation failed: name: Required; type: Required"
        );
    }
}
