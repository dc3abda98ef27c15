//! Deserializers for provider maps whose values are sometimes numbers.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn scalar_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Accepts `{"k": "v"}` as well as `{"k": 12}`.
pub fn string_map<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: HashMap<String, Value> = HashMap::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(k, v)| (k, scalar_to_string(v)))
        .collect())
}

/// Same as [`string_map`], one level deeper.
pub fn nested_string_map<'de, D>(
    deserializer: D,
) -> Result<HashMap<String, HashMap<String, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: HashMap<String, HashMap<String, Value>> = HashMap::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(k, inner)| {
            let inner = inner
                .into_iter()
                .map(|(ik, iv)| (ik, scalar_to_string(iv)))
                .collect();
            (k, inner)
        })
        .collect())
}
