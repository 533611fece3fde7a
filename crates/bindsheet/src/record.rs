//! Binding records decoded from the window manager's JSON dump.
//!
//! Input is decoded in full before anything is rendered. The document may be
//! a single array of objects, a wrapper object, or several JSON values one
//! after another; every object that carries a binding field is picked up.

use crate::error::SheetError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::io::Read;

/// Fields that mark an object as a binding rather than a container.
pub const RECORD_FIELDS: [&str; 5] = ["key", "modmask", "dispatcher", "arg", "description"];

/// One key or mouse binding. Missing fields default to empty or zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BindingRecord {
    pub key: String,
    #[serde(deserialize_with = "deserialize_modmask")]
    pub modmask: u64,
    pub dispatcher: String,
    pub arg: String,
    pub description: String,
}

impl BindingRecord {
    pub fn new(key: impl Into<String>, modmask: u64, dispatcher: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modmask,
            dispatcher: dispatcher.into(),
            ..Self::default()
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.arg = arg.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Accepts the mask as a JSON integer or as a string of digits.
fn deserialize_modmask<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Mask {
        Number(u64),
        Text(String),
    }

    match Mask::deserialize(deserializer)? {
        Mask::Number(mask) => Ok(mask),
        Mask::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid modmask: {:?}", text))),
    }
}

fn is_record(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|map| RECORD_FIELDS.iter().any(|field| map.contains_key(*field)))
}

/// Collects record objects depth-first, children before their parent.
fn collect_objects<'a>(value: &'a Value, found: &mut Vec<&'a Value>) {
    match value {
        Value::Array(items) => {
            for item in items {
                collect_objects(item, found);
            }
        }
        Value::Object(map) => {
            for child in map.values() {
                collect_objects(child, found);
            }
            if is_record(value) {
                found.push(value);
            }
        }
        _ => {}
    }
}

/// Extracts every binding record from an already decoded JSON value.
pub fn records_from_value(value: &Value) -> Result<Vec<BindingRecord>, SheetError> {
    let mut objects = Vec::new();
    collect_objects(value, &mut objects);
    objects
        .into_iter()
        .map(|object| BindingRecord::deserialize(object).map_err(SheetError::from))
        .collect()
}

/// Reads all JSON values from `reader` and extracts their binding records.
///
/// # Example
///
/// ```rust
/// use bindsheet::record::read_records;
///
/// let input = r#"[{"key":"a","modmask":64,"dispatcher":"exec","arg":"kitty","description":"Open terminal"}]"#;
/// let records = read_records(input.as_bytes()).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].modmask, 64);
/// ```
pub fn read_records<R: Read>(reader: R) -> Result<Vec<BindingRecord>, SheetError> {
    let mut records = Vec::new();
    for value in serde_json::Deserializer::from_reader(reader).into_iter::<Value>() {
        records.extend(records_from_value(&value?)?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_of_records() {
        let value = json!([
            {"key": "a", "modmask": 64, "dispatcher": "exec", "arg": "kitty", "description": "Terminal"},
            {"key": "q", "modmask": 64, "dispatcher": "killactive", "arg": "", "description": ""},
        ]);
        let records = records_from_value(&value).unwrap();
        assert_eq!(
            records,
            vec![
                BindingRecord::new("a", 64, "exec").arg("kitty").description("Terminal"),
                BindingRecord::new("q", 64, "killactive"),
            ]
        );
    }

    #[test]
    fn test_missing_fields_default() {
        let records = records_from_value(&json!([{"key": "x"}])).unwrap();
        assert_eq!(records, vec![BindingRecord::new("x", 0, "")]);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let value = json!([{
            "locked": false, "mouse": false, "release": false, "repeat": true,
            "non_consuming": false, "has_description": true, "modmask": 64,
            "submap": "", "key": "left", "keycode": 0, "catch_all": false,
            "description": "", "dispatcher": "movefocus", "arg": "l"
        }]);
        let records = records_from_value(&value).unwrap();
        assert_eq!(records, vec![BindingRecord::new("left", 64, "movefocus").arg("l")]);
    }

    #[test]
    fn test_wrapper_object_is_not_a_record() {
        let value = json!({"binds": [{"key": "a"}, {"key": "b"}]});
        let keys: Vec<_> = records_from_value(&value)
            .unwrap()
            .into_iter()
            .map(|record| record.key)
            .collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_modmask_as_string() {
        let records = records_from_value(&json!([{"key": "a", "modmask": "65"}])).unwrap();
        assert_eq!(records[0].modmask, 65);
    }

    #[test]
    fn test_modmask_invalid_string() {
        let result = records_from_value(&json!([{"key": "a", "modmask": "super"}]));
        assert!(matches!(result, Err(SheetError::Json(_))));
    }

    #[test]
    fn test_read_records_stream_of_values() {
        let input = r#"{"key":"a"} {"key":"b"}
            [{"key":"c"}]"#;
        let records = read_records(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2].key, "c");
    }

    #[test]
    fn test_read_records_empty_input() {
        assert!(read_records("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_read_records_malformed() {
        let result = read_records(r#"[{"key": "a""#.as_bytes());
        assert!(matches!(result, Err(SheetError::Json(_))));
    }
}
