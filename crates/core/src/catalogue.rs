//! Server-side source of the field list.

use std::path::Path;

use validator::Validate;

use crate::error::CoreError;
use crate::field::{FieldDescriptor, FieldList};

/// The field list served to the form renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCatalogue {
    fields: FieldList,
}

impl Default for FieldCatalogue {
    /// Built-in device inspection form.
    fn default() -> Self {
        Self {
            fields: FieldList::new(vec![
                FieldDescriptor::new("inspection_location", "text", true),
                FieldDescriptor::new("device_name", "text", true),
                FieldDescriptor::new("inspection_date", "date", true),
                FieldDescriptor::new("inspection_details", "textarea", false),
                FieldDescriptor::new("rating", "number", false),
            ]),
        }
    }
}

impl FieldCatalogue {
    /// Wrap an already validated list.
    pub fn new(fields: FieldList) -> Result<Self, CoreError> {
        validate_fields(&fields)?;
        Ok(Self { fields })
    }

    /// Parse `{ "fields": [...] }` JSON and validate every descriptor.
    pub fn from_json_str(raw: &str) -> Result<Self, CoreError> {
        let fields: FieldList = serde_json::from_str(raw)
            .map_err(|e| CoreError::Validation(format!("invalid field list: {e}")))?;
        Self::new(fields)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Internal(format!("cannot read field list {}: {e}", path.display()))
        })?;
        Self::from_json_str(&raw)
    }

    pub fn fields(&self) -> &FieldList {
        &self.fields
    }
}

fn validate_fields(fields: &FieldList) -> Result<(), CoreError> {
    for (index, field) in fields.iter().enumerate() {
        field
            .validate()
            .map_err(|e| CoreError::Validation(format!("field #{index}: {e}")))?;
    }
    Ok(())
}
