// Field extractor: typed reads out of loosely-shaped provider payloads.
// Every function walks an ordered list of candidate keys and never fails. A
// missing key, a null or a value of the wrong shape moves on to the next
// candidate; the caller's default is returned when nothing fits.

use serde_json::Value;

static NULL: Value = Value::Null;

/// Returns the first list-shaped value found under `keys`.
///
/// - an array is returned as-is (entries stringified, nulls and blanks dropped)
/// - an object yields its values in the order the provider sent them, nulls and blanks dropped
/// - any other shape is skipped
pub fn extract_list(payload: &Value, keys: &[&str]) -> Vec<String> {
    keys.iter()
        .filter_map(|key| payload.get(*key))
        .find_map(list_from_value)
        .unwrap_or_default()
}

/// Same walk as [`extract_list`], but a bare non-empty string is accepted
/// and wrapped into a one-element list.
pub fn extract_list_or_wrap(payload: &Value, keys: &[&str]) -> Vec<String> {
    keys.iter()
        .filter_map(|key| payload.get(*key))
        .find_map(|value| match value {
            Value::String(s) if !s.trim().is_empty() => Some(vec![s.clone()]),
            other => list_from_value(other),
        })
        .unwrap_or_default()
}

/// Returns the first usable string under `keys`, or `default`.
///
/// Non-string values are serialized rather than discarded so a summary that
/// arrives as an object still reaches the caller.
pub fn extract_string(payload: &Value, keys: &[&str], default: &str) -> String {
    keys.iter()
        .filter_map(|key| payload.get(*key))
        .find_map(entry_from_value)
        .unwrap_or_else(|| default.to_string())
}

/// Returns the first numeric value under `keys` as an integer, or `default`.
///
/// Accepts integers, floats (rounded) and numeric strings such as `"85"`.
pub fn extract_integer(payload: &Value, keys: &[&str], default: i64) -> i64 {
    keys.iter()
        .filter_map(|key| payload.get(*key))
        .find_map(integer_from_value)
        .unwrap_or(default)
}

/// Looks up a nested object, returning `Value::Null` when absent or not an object.
pub fn nested<'a>(payload: &'a Value, key: &str) -> &'a Value {
    match payload.get(key) {
        Some(value @ Value::Object(_)) => value,
        _ => &NULL,
    }
}

fn list_from_value(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => Some(items.iter().filter_map(entry_from_value).collect()),
        Value::Object(map) => Some(map.values().filter_map(entry_from_value).collect()),
        _ => None,
    }
}

fn entry_from_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => serde_json::to_string(value).ok(),
    }
}

fn integer_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| i64::try_from(u).unwrap_or(i64::MAX)))
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.round() as i64)),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(|f| f.round() as i64),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_uses_first_matching_key() {
        let payload = json!({"skills": ["Rust"], "keySkills": ["Go"]});
        assert_eq!(
            extract_list(&payload, &["personalSkills", "skills", "keySkills"]),
            vec!["Rust"]
        );
    }

    #[test]
    fn test_list_skips_non_list_values() {
        let payload = json!({"personalSkills": "Python, SQL", "keySkills": ["Go"]});
        assert_eq!(
            extract_list(&payload, &["personalSkills", "keySkills"]),
            vec!["Go"]
        );
    }

    #[test]
    fn test_list_from_object_values_drops_null_and_empty() {
        let payload = json!({"skills": {"a": "Python", "b": null, "c": "", "d": "SQL"}});
        assert_eq!(extract_list(&payload, &["skills"]), vec!["Python", "SQL"]);
    }

    #[test]
    fn test_list_from_object_keeps_key_order_as_sent() {
        let payload = json!({"skills": {"z": "Python", "m": "Docker", "a": "SQL"}});
        assert_eq!(
            extract_list(&payload, &["skills"]),
            vec!["Python", "Docker", "SQL"]
        );
    }

    #[test]
    fn test_list_stringifies_structured_entries() {
        let payload = json!({"skills": ["Rust", {"name": "Go"}, 3, null]});
        assert_eq!(
            extract_list(&payload, &["skills"]),
            vec!["Rust", r#"{"name":"Go"}"#, "3"]
        );
    }

    #[test]
    fn test_list_never_fails_on_odd_payloads() {
        for payload in [
            json!(null),
            json!(42),
            json!("text"),
            json!([1, 2, 3]),
            json!({"skills": {"deep": {"deeper": [null]}}}),
        ] {
            let _ = extract_list(&payload, &["skills"]);
            let _ = extract_list_or_wrap(&payload, &["skills"]);
            let _ = extract_string(&payload, &["skills"], "");
            let _ = extract_integer(&payload, &["skills"], 0);
        }
        assert!(extract_list(&json!(null), &["skills"]).is_empty());
    }

    #[test]
    fn test_wrap_accepts_bare_string() {
        let payload = json!({"industryFit": "Fintech"});
        assert_eq!(
            extract_list_or_wrap(&payload, &["industryFit"]),
            vec!["Fintech"]
        );
        assert!(extract_list(&payload, &["industryFit"]).is_empty());
    }

    #[test]
    fn test_string_default_when_missing() {
        assert_eq!(extract_string(&json!({}), &["summary"], "n/a"), "n/a");
    }

    #[test]
    fn test_string_skips_empty_and_null() {
        let payload = json!({"a": "", "b": null, "c": "found"});
        assert_eq!(extract_string(&payload, &["a", "b", "c"], ""), "found");
    }

    #[test]
    fn test_string_serializes_objects() {
        let payload = json!({"summary": {"text": "Senior engineer"}});
        assert_eq!(
            extract_string(&payload, &["summary"], ""),
            r#"{"text":"Senior engineer"}"#
        );
    }

    #[test]
    fn test_integer_accepts_numbers_floats_and_strings() {
        assert_eq!(extract_integer(&json!({"s": 85}), &["s"], 75), 85);
        assert_eq!(extract_integer(&json!({"s": 84.6}), &["s"], 75), 85);
        assert_eq!(extract_integer(&json!({"s": " 90 "}), &["s"], 75), 90);
        assert_eq!(extract_integer(&json!({"s": "high"}), &["s"], 75), 75);
        assert_eq!(extract_integer(&json!({"s": null}), &["s"], 75), 75);
    }

    #[test]
    fn test_nested_returns_null_for_non_objects() {
        let payload = json!({"detailedAnalysis": "none", "other": {"x": 1}});
        assert!(nested(&payload, "detailedAnalysis").is_null());
        assert!(nested(&payload, "missing").is_null());
        assert_eq!(nested(&payload, "other")["x"], 1);
    }
}
