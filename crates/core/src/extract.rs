//! Free-text extraction of `key: value` pairs.
//!
//! Used to pre-fill a dynamic form from dictated or pasted notes such as
//!
//! ```text
//! device_name: Pump 7
//! inspection_location: Hall B
//! ```

use std::collections::HashMap;

use crate::field::{FieldDescriptor, FieldList};

/// Input type given to fields discovered in free text.
const EXTRACTED_FIELD_TYPE: &str = "text";

/// Ordered key/value pairs pulled out of free text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedPairs {
    pairs: Vec<(String, String)>,
}

impl ExtractedPairs {
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// One optional text field per extracted key, in extraction order.
    pub fn to_field_list(&self) -> FieldList {
        FieldList::new(
            self.pairs
                .iter()
                .map(|(key, _)| FieldDescriptor::new(key.clone(), EXTRACTED_FIELD_TYPE, false))
                .collect(),
        )
    }

    pub fn to_value_map(&self) -> HashMap<String, String> {
        self.pairs.iter().cloned().collect()
    }

    fn insert(&mut self, key: String, value: String) {
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((key, value)),
        }
    }
}

/// Parse every line containing a `:` into a trimmed key/value pair.
///
/// The line is split at the first colon only, so values may themselves
/// contain colons. A repeated key keeps its first position but takes the
/// latest value. Lines with an empty key are skipped.
pub fn parse_key_value_lines(text: &str) -> ExtractedPairs {
    let mut out = ExtractedPairs::default();
    for line in text.trim().lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        out.insert(key.to_string(), value.trim().to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_colon_only() {
        let parsed = parse_key_value_lines("start_time: 10:30");
        assert_eq!(parsed.get("start_time"), Some("10:30"));
    }

    #[test]
    fn lines_without_colon_are_ignored() {
        let parsed = parse_key_value_lines("just a sentence\ndevice_name: Pump 7\n");
        assert_eq!(parsed.pairs().len(), 1);
        assert_eq!(parsed.get("device_name"), Some("Pump 7"));
    }

    #[test]
    fn repeated_key_keeps_position_takes_last_value() {
        let parsed = parse_key_value_lines("a: 1\nb: 2\na: 3");
        assert_eq!(
            parsed.pairs(),
            &[("a".to_string(), "3".to_string()), ("b".to_string(), "2".to_string())]
        );
    }

    #[test]
    fn empty_key_is_skipped() {
        assert!(parse_key_value_lines(": orphan").is_empty());
    }

    #[test]
    fn field_list_is_optional_text_in_order() {
        let fields = parse_key_value_lines("zeta: 1\nalpha: 2").to_field_list();
        let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert!(fields.iter().all(|f| !f.required && f.kind.as_str() == "text"));
    }
}
