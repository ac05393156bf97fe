//! Dynamic form field definitions.
//!
//! Administrators author one ordered field list for registration forms
//! and one for abstract submission forms. Order is significant and
//! persisted; the list position is the implicit order.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// The type of a field. Determines what shape a submitted value takes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Textarea,
    Email,
    Tel,
    Number,
    Date,
    Select,
    Checkbox,
    /// A non-data pseudo-field used purely to visually partition a form.
    /// Carries no value and is excluded from validation and payloads.
    Separator,
}

impl FieldType {
    /// Converts to the stable string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Textarea => "textarea",
            FieldType::Email => "email",
            FieldType::Tel => "tel",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Select => "select",
            FieldType::Checkbox => "checkbox",
            FieldType::Separator => "separator",
        }
    }
}

/// Optional numeric/length constraints attached to a field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

/// An admin-authored form field definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    /// Stable id, assigned at creation and never reused.
    pub id: Uuid,
    /// Machine key, unique among non-separator fields in one list.
    /// Empty for separators.
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    /// Only meaningful for `select` fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<FieldRules>,
}

impl FieldDefinition {
    /// Whether this field carries submitted data at all.
    pub fn is_data_field(&self) -> bool {
        self.field_type != FieldType::Separator
    }

    /// The default value a form renderer seeds for this field.
    pub fn default_value(&self) -> Value {
        match self.field_type {
            FieldType::Checkbox => Value::Bool(false),
            _ => Value::String(String::new()),
        }
    }
}

/// Seed values for an empty form, keyed by field name.
///
/// Separators carry no value and are skipped.
pub fn initial_values(fields: &[FieldDefinition]) -> serde_json::Map<String, Value> {
    fields
        .iter()
        .filter(|f| f.is_data_field())
        .map(|f| (f.name.clone(), f.default_value()))
        .collect()
}

/// One failing constraint in a form submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field_id: Uuid,
    pub field_name: String,
    pub message: String,
}
