//! # plainjson
//!
//! A plain, predictable JSON pretty-printer.
//!
//! plainjson does one thing: it renders a parsed JSON value as fixed-layout
//! multi-line text. Every array element and object member goes on its own
//! line, indented two spaces per nesting level, with object keys in the
//! order they appeared. No line-length heuristics, no alignment tricks; the
//! output for a given value is always byte-identical.
//!
//! ## Command-Line Tool
//!
//! This crate includes the `pjson` CLI tool for formatting JSON from the
//! terminal:
//!
//! ```sh
//! # Install
//! cargo install plainjson
//!
//! # Format JSON from stdin
//! echo '{"a":1,"b":2}' | pjson
//!
//! # Format a file
//! pjson input.json -o output.json
//! ```
//!
//! Run `pjson --help` for all options.
//!
//! ## Quick Start
//!
//! ```rust
//! use plainjson::Formatter;
//!
//! let input = r#"{"name":"Alice","scores":[95,87,92]}"#;
//!
//! let formatter = Formatter::new();
//! let output = formatter.reformat(input).unwrap();
//!
//! assert_eq!(
//!     output,
//!     "{\n  \"name\": \"Alice\",\n  \"scores\": [\n    95,\n    87,\n    92\n  ]\n}"
//! );
//! ```
//!
//! ## Serializing Rust Types
//!
//! Any type implementing [`serde::Serialize`] can be formatted directly:
//!
//! ```rust
//! use plainjson::Formatter;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Player {
//!     name: String,
//!     scores: Vec<i32>,
//! }
//!
//! let player = Player {
//!     name: "Alice".into(),
//!     scores: vec![95, 87, 92],
//! };
//!
//! let formatter = Formatter::new();
//! let output = formatter.serialize(&player).unwrap();
//! ```
//!
//! ## Building Values Directly
//!
//! The [`Value`] tree can also be constructed in code. Object members keep
//! insertion order:
//!
//! ```rust
//! use plainjson::{Formatter, JsonObject, Value};
//!
//! let mut obj = JsonObject::new();
//! obj.insert("id", Value::from(7));
//! obj.insert("name", Value::from("widget"));
//!
//! let output = Formatter::new().format(&Value::Object(obj)).unwrap();
//! assert_eq!(output, "{\n  \"id\": 7,\n  \"name\": \"widget\"\n}");
//! ```
//!
//! ## Configuration
//!
//! Formatting behavior is adjusted through [`PlainJsonOptions`]:
//!
//! ```rust
//! use plainjson::{Formatter, NonFinitePolicy};
//!
//! let mut formatter = Formatter::new();
//! formatter.options.indent_spaces = 4;
//! formatter.options.escape_strings = true;
//! formatter.options.non_finite_policy = NonFinitePolicy::AsNull;
//! ```
//!
//! ## Output Shape
//!
//! Two fixed quirks of the layout, kept for parity with the original tool:
//! a root-level array ends with a newline after its `]`, while a root-level
//! object ends at its `}`; and string content is written through verbatim
//! unless `escape_strings` is enabled.

mod convert;
mod error;
mod formatter;
mod options;
mod value;

pub use crate::convert::{from_serde_value, DEFAULT_RECURSION_LIMIT};
pub use crate::error::PlainJsonError;
pub use crate::formatter::Formatter;
pub use crate::options::{NonFinitePolicy, PlainJsonOptions};
pub use crate::value::{JsonObject, Number, Value};
