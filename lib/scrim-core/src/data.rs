//! Small value helpers shared by UI code, built on the serde data model.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("value could not be cloned through serialization: {0}")]
    Clone(#[from] serde_json::Error),
}

/// Deep copy by round-tripping through the serde data model. Works for any
/// value whose serialized form is lossless, which is the contract UI state
/// objects here already meet.
pub fn deep_copy<T>(value: &T) -> Result<T, DataError>
where
    T: Serialize + DeserializeOwned,
{
    let encoded = serde_json::to_value(value)?;
    Ok(serde_json::from_value(encoded)?)
}

/// Null, empty string, empty array and empty object count as empty.
/// Numbers and booleans never do.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    }
}

/// New object holding only the listed keys that exist on `value`, in the
/// order the keys were requested. Non-objects yield an empty object.
pub fn pick(value: &Value, keys: &[&str]) -> Value {
    let mut out = Map::new();
    if let Value::Object(fields) = value {
        for key in keys {
            if let Some(field) = fields.get(*key) {
                out.insert((*key).to_owned(), field.clone());
            }
        }
    }
    Value::Object(out)
}

/// New object holding everything except the listed keys, preserving the
/// source key order. Non-objects yield an empty object.
pub fn omit(value: &Value, keys: &[&str]) -> Value {
    let mut out = Map::new();
    if let Value::Object(fields) = value {
        for (key, field) in fields {
            if !keys.contains(&key.as_str()) {
                out.insert(key.clone(), field.clone());
            }
        }
    }
    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Profile {
        name: String,
        tags: Vec<String>,
    }

    #[test]
    fn test_deep_copy_is_independent() {
        let original = Profile {
            name: "ada".to_owned(),
            tags: vec!["admin".to_owned()],
        };
        let mut copy = deep_copy(&original).unwrap();
        copy.tags.push("extra".to_owned());

        assert_eq!(original.tags.len(), 1);
        assert_eq!(copy.name, original.name);
    }

    #[test]
    fn test_is_empty_table() {
        assert!(is_empty(&Value::Null));
        assert!(is_empty(&json!("")));
        assert!(is_empty(&json!([])));
        assert!(is_empty(&json!({})));

        assert!(!is_empty(&json!(0)));
        assert!(!is_empty(&json!(false)));
        assert!(!is_empty(&json!(" ")));
        assert!(!is_empty(&json!([0])));
        assert!(!is_empty(&json!({ "k": null })));
    }

    #[test]
    fn test_pick_keeps_requested_order_and_skips_absent() {
        let value = json!({ "a": 1, "b": 2, "c": 3 });
        let picked = pick(&value, &["c", "missing", "a"]);
        assert_eq!(picked, json!({ "c": 3, "a": 1 }));

        let keys: Vec<_> = picked.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["c", "a"]);
    }

    #[test]
    fn test_omit_preserves_source_order() {
        let value = json!({ "a": 1, "b": 2, "c": 3 });
        let remaining = omit(&value, &["b"]);
        let keys: Vec<_> = remaining.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn test_pick_and_omit_on_non_objects() {
        assert_eq!(pick(&json!([1, 2]), &["0"]), json!({}));
        assert_eq!(omit(&json!("text"), &["a"]), json!({}));
    }
}
