use serde::Serialize;

use crate::convert::{from_serde_value, DEFAULT_RECURSION_LIMIT};
use crate::error::PlainJsonError;
use crate::options::{NonFinitePolicy, PlainJsonOptions};
use crate::value::{Number, Value};

/// Formats JSON values into the classic fixed multi-line layout.
///
/// Every container is expanded onto its own lines, members indented one
/// level deeper than their container, object keys in insertion order. The
/// output is a pure function of the input value and the options: formatting
/// structurally identical values yields byte-identical text.
///
/// # Example
///
/// ```rust
/// use plainjson::Formatter;
///
/// let formatter = Formatter::new();
/// let output = formatter.reformat(r#"{"a":1}"#).unwrap();
/// assert_eq!(output, "{\n  \"a\": 1\n}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    /// Formatting options. Adjust fields directly before calling a format
    /// method.
    pub options: PlainJsonOptions,
}

impl Formatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `value` as indented multi-line text.
    ///
    /// A root array carries one trailing newline after its closing `]`; a
    /// root object ends at its closing `}` with none. A root scalar renders
    /// as its bare scalar text. The only failure is a non-finite float
    /// under [`NonFinitePolicy::TreatAsError`].
    pub fn format(&self, value: &Value) -> Result<String, PlainJsonError> {
        let mut out = String::new();
        self.write_value(value, 0, false, &mut out)?;
        if value.is_array() {
            out.push('\n');
        }
        Ok(out)
    }

    /// Parses `input` as JSON and renders it with [`Formatter::format`].
    ///
    /// Member order in the output matches the order in the input document.
    pub fn reformat(&self, input: &str) -> Result<String, PlainJsonError> {
        let parsed: serde_json::Value = serde_json::from_str(input)?;
        let value = from_serde_value(&parsed, DEFAULT_RECURSION_LIMIT)?;
        self.format(&value)
    }

    /// Serializes any [`serde::Serialize`] type and renders the result.
    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<String, PlainJsonError> {
        let parsed = serde_json::to_value(value)?;
        let converted = from_serde_value(&parsed, DEFAULT_RECURSION_LIMIT)?;
        self.format(&converted)
    }

    /// Recursive worker. `depth` counts indent units; `as_property_value`
    /// suppresses the leading indent when the rendering follows `"key": `
    /// on the same line. Array elements always come through with the flag
    /// off, so scalars and containers alike line up under their bracket.
    fn write_value(
        &self,
        value: &Value,
        depth: usize,
        as_property_value: bool,
        out: &mut String,
    ) -> Result<(), PlainJsonError> {
        if !as_property_value {
            self.push_indent(out, depth);
        }

        match value {
            Value::Null => out.push_str("null"),
            Value::Bool(true) => out.push_str("true"),
            Value::Bool(false) => out.push_str("false"),
            Value::Number(num) => self.write_number(*num, out)?,
            Value::String(s) => self.write_string(s, out),
            Value::Array(items) => {
                out.push_str("[\n");
                for (i, item) in items.iter().enumerate() {
                    self.write_value(item, depth + 1, false, out)?;
                    out.push_str(if i + 1 == items.len() { "\n" } else { ",\n" });
                }
                self.push_indent(out, depth);
                out.push(']');
            }
            Value::Object(map) => {
                out.push_str("{\n");
                for (i, (key, member)) in map.iter().enumerate() {
                    if i > 0 {
                        out.push_str(",\n");
                    }
                    self.push_indent(out, depth + 1);
                    self.write_string(key, out);
                    out.push_str(": ");
                    self.write_value(member, depth + 1, true, out)?;
                }
                if !map.is_empty() {
                    out.push('\n');
                }
                self.push_indent(out, depth);
                out.push('}');
            }
        }

        Ok(())
    }

    fn write_number(&self, num: Number, out: &mut String) -> Result<(), PlainJsonError> {
        if !num.is_finite() {
            match self.options.non_finite_policy {
                NonFinitePolicy::TreatAsError => {
                    return Err(PlainJsonError::NonFiniteNumber(num.as_f64()));
                }
                NonFinitePolicy::AsNull => {
                    out.push_str("null");
                    return Ok(());
                }
            }
        }
        out.push_str(&num.to_string());
        Ok(())
    }

    fn write_string(&self, content: &str, out: &mut String) {
        if self.options.escape_strings {
            let quoted = serde_json::to_string(content)
                .unwrap_or_else(|_| format!("\"{}\"", content));
            out.push_str(&quoted);
        } else {
            out.push('"');
            out.push_str(content);
            out.push('"');
        }
    }

    fn push_indent(&self, out: &mut String, depth: usize) {
        for _ in 0..depth * self.options.indent_spaces {
            out.push(' ');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::JsonObject;

    fn fmt(value: &Value) -> String {
        Formatter::new().format(value).unwrap()
    }

    fn obj(members: Vec<(&str, Value)>) -> Value {
        Value::Object(
            members
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    #[test]
    fn flat_object() {
        let value = obj(vec![("a", Value::from(1))]);
        assert_eq!(fmt(&value), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn flat_array() {
        let value = Value::Array(vec![Value::from(1), Value::from(2), Value::from(3)]);
        assert_eq!(fmt(&value), "[\n  1,\n  2,\n  3\n]\n");
    }

    #[test]
    fn nested_array_and_object() {
        let inner = obj(vec![("b", Value::from(2))]);
        let value = obj(vec![("a", Value::Array(vec![Value::from(1), inner]))]);
        assert_eq!(
            fmt(&value),
            "{\n  \"a\": [\n    1,\n    {\n      \"b\": 2\n    }\n  ]\n}"
        );
    }

    #[test]
    fn empty_containers() {
        assert_eq!(fmt(&Value::Array(vec![])), "[\n]\n");
        assert_eq!(fmt(&Value::Object(JsonObject::new())), "{\n}");
    }

    #[test]
    fn null_in_every_position() {
        let value = obj(vec![
            ("x", Value::Null),
            ("y", Value::Array(vec![Value::Null])),
        ]);
        assert_eq!(
            fmt(&value),
            "{\n  \"x\": null,\n  \"y\": [\n    null\n  ]\n}"
        );
        assert_eq!(fmt(&Value::Null), "null");
    }

    #[test]
    fn string_property_value_is_quoted() {
        let value = obj(vec![("greeting", Value::from("hi"))]);
        assert_eq!(fmt(&value), "{\n  \"greeting\": \"hi\"\n}");
    }

    #[test]
    fn booleans_render_as_literals() {
        let value = Value::Array(vec![Value::Bool(true), Value::Bool(false)]);
        assert_eq!(fmt(&value), "[\n  true,\n  false\n]\n");
    }

    #[test]
    fn integral_float_renders_without_fraction() {
        assert_eq!(fmt(&Value::from(1.0_f64)), "1");
        assert_eq!(fmt(&Value::from(2.5_f64)), "2.5");
        assert_eq!(fmt(&Value::from(-7_i64)), "-7");
    }

    #[test]
    fn array_nested_in_array() {
        let value = Value::Array(vec![
            Value::Array(vec![Value::from(1)]),
            Value::from(2),
        ]);
        assert_eq!(fmt(&value), "[\n  [\n    1\n  ],\n  2\n]\n");
    }

    #[test]
    fn empty_object_as_property_value() {
        let value = obj(vec![("a", Value::Object(JsonObject::new()))]);
        assert_eq!(fmt(&value), "{\n  \"a\": {\n  }\n}");
    }

    #[test]
    fn object_keys_keep_insertion_order() {
        let value = obj(vec![
            ("zebra", Value::from(1)),
            ("apple", Value::from(2)),
        ]);
        assert_eq!(fmt(&value), "{\n  \"zebra\": 1,\n  \"apple\": 2\n}");
    }

    #[test]
    fn non_finite_number_is_rejected_by_default() {
        let value = Value::from(f64::INFINITY);
        let err = Formatter::new().format(&value).unwrap_err();
        assert_eq!(err, PlainJsonError::NonFiniteNumber(f64::INFINITY));
    }

    #[test]
    fn non_finite_number_can_fall_back_to_null() {
        let mut formatter = Formatter::new();
        formatter.options.non_finite_policy = NonFinitePolicy::AsNull;
        assert_eq!(formatter.format(&Value::from(f64::NAN)).unwrap(), "null");
    }

    #[test]
    fn raw_strings_pass_through_unescaped_by_default() {
        let value = obj(vec![("path", Value::from("C:\\temp"))]);
        assert_eq!(fmt(&value), "{\n  \"path\": \"C:\\temp\"\n}");
    }

    #[test]
    fn escape_option_produces_reparseable_strings() {
        let mut formatter = Formatter::new();
        formatter.options.escape_strings = true;
        let value = obj(vec![("quote", Value::from("say \"hi\""))]);
        assert_eq!(
            formatter.format(&value).unwrap(),
            "{\n  \"quote\": \"say \\\"hi\\\"\"\n}"
        );
    }

    #[test]
    fn wider_indent_option() {
        let mut formatter = Formatter::new();
        formatter.options.indent_spaces = 4;
        let value = obj(vec![("a", Value::Array(vec![Value::from(1)]))]);
        assert_eq!(
            formatter.format(&value).unwrap(),
            "{\n    \"a\": [\n        1\n    ]\n}"
        );
    }

    #[test]
    fn reformat_round_trips_text() {
        let formatter = Formatter::new();
        let output = formatter.reformat(r#"{"a": [1, 2], "b": {"c": null}}"#).unwrap();
        assert_eq!(
            output,
            "{\n  \"a\": [\n    1,\n    2\n  ],\n  \"b\": {\n    \"c\": null\n  }\n}"
        );
    }

    #[test]
    fn reformat_rejects_invalid_input() {
        let err = Formatter::new().reformat("{oops").unwrap_err();
        assert!(matches!(err, PlainJsonError::Parse(_)));
    }

    #[test]
    fn serialize_formats_rust_types() {
        #[derive(serde::Serialize)]
        struct Player {
            name: String,
            scores: Vec<i32>,
        }

        let player = Player {
            name: "Alice".into(),
            scores: vec![95, 87],
        };
        let output = Formatter::new().serialize(&player).unwrap();
        assert_eq!(
            output,
            "{\n  \"name\": \"Alice\",\n  \"scores\": [\n    95,\n    87\n  ]\n}"
        );
    }
}
