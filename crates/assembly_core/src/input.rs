use crate::error::{ModelError, ModelResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Decodes the wire shape of `record` from `raw`, which must be a JSON object.
pub(crate) fn decode_object<'a, T>(raw: &'a Value, record: &'static str) -> ModelResult<T>
where
    T: Deserialize<'a>,
{
    if !raw.is_object() {
        return Err(ModelError::InvalidInput {
            record,
            expected: "an object",
            found: json_kind(raw),
        });
    }
    T::deserialize(raw).map_err(|source| ModelError::Malformed { record, source })
}

/// `deserialize_with` for optional scalars: a value of the wrong type reads as
/// absent.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match T::deserialize(&value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(error) => {
            warn!(found = json_kind(&value), %error, "ignoring wrongly typed field");
            Ok(None)
        }
    }
}

/// Elements of a nested collection field. Anything but an array counts as empty.
pub(crate) fn elements<'a>(field: &'static str, value: Option<&'a Value>) -> &'a [Value] {
    match value {
        Some(Value::Array(items)) => items,
        None | Some(Value::Null) => &[],
        Some(other) => {
            warn!(field, found = json_kind(other), "ignoring non-array collection");
            &[]
        }
    }
}

/// Builds one record per element of a nested collection, keeping input order.
/// Elements that fail to build are dropped.
pub(crate) fn build_each<T>(
    field: &'static str,
    value: Option<&Value>,
    build: impl Fn(&Value) -> ModelResult<T>,
) -> Vec<T> {
    elements(field, value)
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match build(item) {
            Ok(record) => Some(record),
            Err(error) => {
                warn!(field, index, %error, "dropping malformed element");
                None
            }
        })
        .collect()
}

pub(crate) fn integer(record: &'static str, value: &Value) -> ModelResult<i64> {
    value.as_i64().ok_or(ModelError::InvalidInput {
        record,
        expected: "an integer",
        found: json_kind(value),
    })
}
