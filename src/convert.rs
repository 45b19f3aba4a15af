use crate::error::PlainJsonError;
use crate::value::{JsonObject, Number, Value};

/// Default nesting limit for conversions from `serde_json::Value`.
pub const DEFAULT_RECURSION_LIMIT: usize = 512;

/// Converts a `serde_json::Value` into this crate's [`Value`].
///
/// Object member order is taken as-is from the source map; with
/// `serde_json`'s `preserve_order` feature (enabled by this crate) that is
/// the order the members appeared in the document. `recursion_limit` bounds
/// the descent depth; each nested array or object consumes one unit.
pub fn from_serde_value(
    element: &serde_json::Value,
    recursion_limit: usize,
) -> Result<Value, PlainJsonError> {
    if recursion_limit == 0 {
        return Err(PlainJsonError::DepthLimitExceeded);
    }

    let value = match element {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(val) => Value::Bool(*val),
        serde_json::Value::Number(num) => Value::Number(convert_number(num)),
        serde_json::Value::String(val) => Value::String(val.clone()),
        serde_json::Value::Array(arr) => {
            let mut items = Vec::with_capacity(arr.len());
            for child in arr {
                items.push(from_serde_value(child, recursion_limit - 1)?);
            }
            Value::Array(items)
        }
        serde_json::Value::Object(map) => {
            let mut members = JsonObject::with_capacity(map.len());
            for (key, child) in map.iter() {
                members.insert(key.clone(), from_serde_value(child, recursion_limit - 1)?);
            }
            Value::Object(members)
        }
    };

    Ok(value)
}

fn convert_number(num: &serde_json::Number) -> Number {
    if let Some(n) = num.as_i64() {
        Number::Int(n)
    } else if let Some(n) = num.as_u64() {
        Number::UInt(n)
    } else {
        // serde_json numbers are always finite, so this is total.
        Number::Float(num.as_f64().unwrap_or(0.0))
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = PlainJsonError;

    fn try_from(element: serde_json::Value) -> Result<Self, Self::Error> {
        from_serde_value(&element, DEFAULT_RECURSION_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn converts_scalars_and_containers() {
        let source = json!({"name": "Alice", "age": 30, "tags": [null, true, 2.5]});
        let value = from_serde_value(&source, DEFAULT_RECURSION_LIMIT).unwrap();

        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("name"), Some(&Value::from("Alice")));
        assert_eq!(obj.get("age"), Some(&Value::from(30)));
        let tags = obj.get("tags").unwrap().as_array().unwrap();
        assert_eq!(tags[0], Value::Null);
        assert_eq!(tags[1], Value::Bool(true));
        assert_eq!(tags[2], Value::from(2.5));
    }

    #[test]
    fn preserves_member_order() {
        let source: serde_json::Value =
            serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let value = Value::try_from(source).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn large_unsigned_numbers_survive() {
        let source = json!(u64::MAX);
        let value = from_serde_value(&source, DEFAULT_RECURSION_LIMIT).unwrap();
        assert_eq!(value, Value::from(u64::MAX));
    }

    #[test]
    fn depth_limit_stops_runaway_nesting() {
        let source = json!([[[42]]]);
        let err = from_serde_value(&source, 2).unwrap_err();
        assert_eq!(err, PlainJsonError::DepthLimitExceeded);
    }
}
