//! Submission validation built from admin-authored field definitions.
//!
//! `build_validator` turns an ordered field list into a [`FieldValidator`]
//! that checks a raw submission payload and produces the normalized
//! values to store. Building is pure and re-entrant: the same
//! definitions always yield a structurally equal validator, so the same
//! payload can be validated on both sides of a request lifecycle with
//! identical results.

use serde_json::{Map, Value};
use shared::validation::is_valid_email;

use crate::error::DomainError;
use crate::models::field::{FieldDefinition, FieldError, FieldType};

/// Prefix applied to field names in the normalized output, so stored
/// custom values can never collide with top-level submission fields.
pub const FIELD_KEY_PREFIX: &str = "custom_";

/// Normalized submission values, keyed by namespaced field name.
pub type NormalizedSubmission = Map<String, Value>;

/// A compiled validator for one field list.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValidator {
    fields: Vec<FieldDefinition>,
}

/// Compiles a field list into a validator.
///
/// Fails with `InvalidConfiguration` when the list itself is broken:
/// a non-separator field with an empty or duplicate name, or a required
/// select field without options. Separators are dropped here; they
/// carry no data and take no part in validation.
pub fn build_validator(fields: &[FieldDefinition]) -> Result<FieldValidator, DomainError> {
    let data_fields: Vec<FieldDefinition> = fields
        .iter()
        .filter(|f| f.is_data_field())
        .cloned()
        .collect();

    let mut seen = std::collections::HashSet::new();
    for field in &data_fields {
        if field.name.is_empty() {
            return Err(DomainError::InvalidConfiguration(format!(
                "Field '{}' has an empty name",
                field.label
            )));
        }
        if !seen.insert(field.name.clone()) {
            return Err(DomainError::InvalidConfiguration(format!(
                "Duplicate field name: {}",
                field.name
            )));
        }
        if field.field_type == FieldType::Select
            && field.required
            && field.options.as_ref().map_or(true, |o| o.is_empty())
        {
            return Err(DomainError::InvalidConfiguration(format!(
                "Required select field '{}' has no options",
                field.name
            )));
        }
    }

    Ok(FieldValidator { fields: data_fields })
}

impl FieldValidator {
    /// The data fields this validator checks, in form order.
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// Validates a raw submission payload.
    ///
    /// Collects every failing constraint across all fields before
    /// returning, so the caller can render all problems at once. On
    /// success the normalized values are returned under namespaced
    /// keys; optional fields left empty are excluded to keep the
    /// stored payload minimal. Payload keys that match no field are
    /// ignored.
    pub fn validate(&self, payload: &Map<String, Value>) -> Result<NormalizedSubmission, DomainError> {
        let mut normalized = Map::new();
        let mut errors = Vec::new();

        for field in &self.fields {
            let raw = payload.get(&field.name);
            match check_field(field, raw) {
                Ok(Some(value)) => {
                    normalized.insert(format!("{FIELD_KEY_PREFIX}{}", field.name), value);
                }
                Ok(None) => {}
                Err(field_errors) => errors.extend(field_errors),
            }
        }

        if errors.is_empty() {
            Ok(normalized)
        } else {
            tracing::debug!(
                error_count = errors.len(),
                "Submission failed field validation"
            );
            Err(DomainError::ValidationFailed(errors))
        }
    }
}

fn error(field: &FieldDefinition, message: impl Into<String>) -> FieldError {
    FieldError {
        field_id: field.id,
        field_name: field.name.clone(),
        message: message.into(),
    }
}

/// Whether a submitted value counts as "not provided".
fn is_empty(raw: Option<&Value>) -> bool {
    match raw {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        _ => false,
    }
}

/// Checks one field. `Ok(Some(value))` is the normalized value to
/// store, `Ok(None)` means "valid but absent".
fn check_field(
    field: &FieldDefinition,
    raw: Option<&Value>,
) -> Result<Option<Value>, Vec<FieldError>> {
    // Checkboxes have their own notion of "provided": required means
    // the box was actually ticked, not merely present.
    if field.field_type == FieldType::Checkbox {
        return check_checkbox(field, raw);
    }

    if is_empty(raw) {
        if field.required {
            return Err(vec![error(field, format!("{} is required", field.label))]);
        }
        return Ok(None);
    }
    let raw = raw.unwrap();

    match field.field_type {
        FieldType::Text | FieldType::Textarea => check_text(field, raw),
        FieldType::Email => check_email(field, raw),
        FieldType::Tel => check_string(field, raw),
        FieldType::Number => check_number(field, raw),
        FieldType::Date => check_date(field, raw),
        FieldType::Select => check_select(field, raw),
        FieldType::Checkbox | FieldType::Separator => unreachable!("handled above"),
    }
}

fn as_string<'a>(field: &FieldDefinition, raw: &'a Value) -> Result<&'a str, Vec<FieldError>> {
    raw.as_str()
        .ok_or_else(|| vec![error(field, format!("{} must be a string", field.label))])
}

fn check_string(field: &FieldDefinition, raw: &Value) -> Result<Option<Value>, Vec<FieldError>> {
    let s = as_string(field, raw)?;
    Ok(Some(Value::String(s.to_string())))
}

fn check_text(field: &FieldDefinition, raw: &Value) -> Result<Option<Value>, Vec<FieldError>> {
    let s = as_string(field, raw)?;
    let mut errors = Vec::new();

    if let Some(rules) = &field.validation {
        let len = s.chars().count();
        if let Some(min) = rules.min_length {
            if len < min {
                errors.push(error(
                    field,
                    format!("{} must be at least {min} characters", field.label),
                ));
            }
        }
        if let Some(max) = rules.max_length {
            if len > max {
                errors.push(error(
                    field,
                    format!("{} must be at most {max} characters", field.label),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(Some(Value::String(s.to_string())))
    } else {
        Err(errors)
    }
}

fn check_email(field: &FieldDefinition, raw: &Value) -> Result<Option<Value>, Vec<FieldError>> {
    let s = as_string(field, raw)?;
    if is_valid_email(s) {
        Ok(Some(Value::String(s.to_string())))
    } else {
        Err(vec![error(
            field,
            format!("{} must be a valid email address", field.label),
        )])
    }
}

fn check_number(field: &FieldDefinition, raw: &Value) -> Result<Option<Value>, Vec<FieldError>> {
    // Form payloads routinely carry numbers as strings; coerce.
    let number = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    let Some(number) = number else {
        return Err(vec![error(field, format!("{} must be a number", field.label))]);
    };

    let mut errors = Vec::new();
    if let Some(rules) = &field.validation {
        if let Some(min) = rules.min {
            if number < min {
                errors.push(error(field, format!("{} must be at least {min}", field.label)));
            }
        }
        if let Some(max) = rules.max {
            if number > max {
                errors.push(error(field, format!("{} must be at most {max}", field.label)));
            }
        }
    }

    if errors.is_empty() {
        let normalized = serde_json::Number::from_f64(number)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(number.to_string()));
        Ok(Some(normalized))
    } else {
        Err(errors)
    }
}

fn check_date(field: &FieldDefinition, raw: &Value) -> Result<Option<Value>, Vec<FieldError>> {
    let s = as_string(field, raw)?;
    let parses = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
        || chrono::DateTime::parse_from_rfc3339(s).is_ok();
    if parses {
        Ok(Some(Value::String(s.to_string())))
    } else {
        Err(vec![error(
            field,
            format!("{} must be an ISO date", field.label),
        )])
    }
}

fn check_select(field: &FieldDefinition, raw: &Value) -> Result<Option<Value>, Vec<FieldError>> {
    let s = as_string(field, raw)?;
    let options = field.options.as_deref().unwrap_or(&[]);
    if options.iter().any(|option| option == s) {
        Ok(Some(Value::String(s.to_string())))
    } else {
        Err(vec![error(
            field,
            format!("{} must be one of the offered options", field.label),
        )])
    }
}

fn check_checkbox(
    field: &FieldDefinition,
    raw: Option<&Value>,
) -> Result<Option<Value>, Vec<FieldError>> {
    match raw {
        None | Some(Value::Null) => {
            if field.required {
                Err(vec![error(field, format!("{} must be accepted", field.label))])
            } else {
                Ok(None)
            }
        }
        Some(Value::Bool(checked)) => {
            if field.required && !checked {
                Err(vec![error(field, format!("{} must be accepted", field.label))])
            } else {
                Ok(Some(Value::Bool(*checked)))
            }
        }
        Some(_) => Err(vec![error(
            field,
            format!("{} must be a boolean", field.label),
        )]),
    }
}
