//! Checks applied to a posted form before it is stored.

use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::field::FieldList;

/// Validate posted name/value pairs against `fields` and collect them.
///
/// A repeated key keeps its latest value, and that value is what the
/// required check sees: every required descriptor must end up non-blank.
/// Keys unknown to the list are kept.
pub fn collect_submission(
    fields: &FieldList,
    posted: &[(String, String)],
) -> Result<Map<String, Value>, CoreError> {
    let data = collect_pairs(posted);

    let missing: Vec<&str> = fields
        .required()
        .filter(|field| match data.get(&field.name) {
            Some(Value::String(value)) => value.trim().is_empty(),
            _ => true,
        })
        .map(|field| field.name.as_str())
        .collect();

    if !missing.is_empty() {
        return Err(CoreError::Validation(format!(
            "missing required fields: {}",
            missing.join(", ")
        )));
    }

    Ok(data)
}

/// Collect posted pairs in post order without any checks.
///
/// A repeated key keeps its first position and its latest value.
pub fn collect_pairs(posted: &[(String, String)]) -> Map<String, Value> {
    let mut data = Map::new();
    for (name, value) in posted {
        data.insert(name.clone(), Value::String(value.clone()));
    }
    data
}
