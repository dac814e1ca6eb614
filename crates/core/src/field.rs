//! Field descriptors served by `GET /dynamic_form_fields`.
//!
//! A descriptor names one form input: its `name`, the input `type` and
//! whether it is `required`. The list order is the render order.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

/// Input type string that selects a multi-line text area.
pub const TEXTAREA_TYPE: &str = "textarea";

/// The control a descriptor renders to.
///
/// Anything other than `"textarea"` is passed through verbatim as the
/// `type` attribute of a single-line `<input>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    TextArea,
    Input(String),
}

impl FieldKind {
    /// The raw `type` string as it appears on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            FieldKind::TextArea => TEXTAREA_TYPE,
            FieldKind::Input(kind) => kind,
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, FieldKind::TextArea)
    }
}

impl From<String> for FieldKind {
    fn from(raw: String) -> Self {
        if raw == TEXTAREA_TYPE {
            FieldKind::TextArea
        } else {
            FieldKind::Input(raw)
        }
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        match kind {
            FieldKind::TextArea => TEXTAREA_TYPE.to_string(),
            FieldKind::Input(kind) => kind,
        }
    }
}

/// One server-supplied form input specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct FieldDescriptor {
    #[validate(length(min = 1, message = "field name must not be empty"))]
    pub name: String,
    #[serde(rename = "type")]
    #[validate(custom(function = "validate_kind"))]
    pub kind: FieldKind,
    /// Coerced like a script's `required || false`: absent, `null`, `false`,
    /// `0` and `""` mean "not required", any other value means required.
    #[serde(default, deserialize_with = "truthy")]
    pub required: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::from(kind.into()),
            required,
        }
    }

    /// Human-readable label: underscores become spaces, then upper-cased.
    pub fn label(&self) -> String {
        label_text(&self.name)
    }
}

/// Wire envelope `{ "fields": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldList {
    pub fields: Vec<FieldDescriptor>,
}

impl FieldList {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldDescriptor> {
        self.fields.iter()
    }

    pub fn required(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.required)
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Derive the label shown next to an input from its field name.
///
/// ```
/// use formular_core::field::label_text;
///
/// assert_eq!(label_text("full_name"), "FULL NAME");
/// assert_eq!(label_text("e_mail_address"), "E MAIL ADDRESS");
/// ```
pub fn label_text(name: &str) -> String {
    name.replace('_', " ").to_uppercase()
}

fn validate_kind(kind: &FieldKind) -> Result<(), ValidationError> {
    if kind.as_str().trim().is_empty() {
        let mut err = ValidationError::new("empty_type");
        err.message = Some("field type must not be empty".into());
        return Err(err);
    }
    Ok(())
}

fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_replaces_every_underscore() {
        assert_eq!(label_text("inspection_date_of_day"), "INSPECTION DATE OF DAY");
    }

    #[test]
    fn label_keeps_consecutive_underscores_as_spaces() {
        assert_eq!(label_text("a__b"), "A  B");
    }

    #[test]
    fn label_of_empty_name_is_empty() {
        assert_eq!(label_text(""), "");
    }

    #[test]
    fn textarea_type_maps_to_multiline() {
        let field: FieldDescriptor =
            serde_json::from_str(r#"{"name":"notes","type":"textarea"}"#).unwrap();
        assert_eq!(field.kind, FieldKind::TextArea);
        assert!(field.kind.is_multiline());
    }

    #[test]
    fn other_types_pass_through() {
        let field: FieldDescriptor =
            serde_json::from_str(r#"{"name":"when","type":"date","required":true}"#).unwrap();
        assert_eq!(field.kind, FieldKind::Input("date".into()));
        assert!(field.required);
    }

    #[test]
    fn missing_required_defaults_to_false() {
        let field: FieldDescriptor =
            serde_json::from_str(r#"{"name":"nick","type":"text"}"#).unwrap();
        assert!(!field.required);
    }

    #[test]
    fn null_required_defaults_to_false() {
        let field: FieldDescriptor =
            serde_json::from_str(r#"{"name":"nick","type":"text","required":null}"#).unwrap();
        assert!(!field.required);
    }

    fn required_of(raw: &str) -> bool {
        let json = format!(r#"{{"name":"x","type":"text","required":{raw}}}"#);
        serde_json::from_str::<FieldDescriptor>(&json).unwrap().required
    }

    #[test]
    fn falsy_required_values_mean_optional() {
        for raw in ["false", "0", "0.0", r#""""#, "null"] {
            assert!(!required_of(raw), "{raw} should not be required");
        }
    }

    #[test]
    fn truthy_required_values_mean_required() {
        for raw in ["true", "1", "-2.5", r#""true""#, r#""false""#, "[]", "{}"] {
            assert!(required_of(raw), "{raw} should be required");
        }
    }

    #[test]
    fn missing_name_is_rejected() {
        let result = serde_json::from_str::<FieldDescriptor>(r#"{"type":"text"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serializes_type_under_wire_name() {
        let json = serde_json::to_value(FieldDescriptor::new("notes", "textarea", false)).unwrap();
        assert_eq!(json["type"], "textarea");
        assert_eq!(json["required"], false);
    }

    #[test]
    fn validation_rejects_empty_name_and_type() {
        assert!(FieldDescriptor::new("", "text", false).validate().is_err());
        assert!(FieldDescriptor::new("ok", " ", false).validate().is_err());
        assert!(FieldDescriptor::new("ok", "text", false).validate().is_ok());
    }

    #[test]
    fn required_iterator_filters() {
        let list = FieldList::new(vec![
            FieldDescriptor::new("a", "text", true),
            FieldDescriptor::new("b", "text", false),
        ]);
        let names: Vec<_> = list.required().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a"]);
    }
}
