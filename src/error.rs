use std::fmt::{self, Display};

/// Errors reported by this crate.
#[derive(Debug, Clone, PartialEq)]
pub enum PlainJsonError {
    /// A NaN or infinite float reached the formatter while
    /// [`NonFinitePolicy::TreatAsError`](crate::NonFinitePolicy) was in
    /// effect. JSON has no representation for these values.
    NonFiniteNumber(f64),
    /// Nesting exceeded the conversion recursion limit.
    DepthLimitExceeded,
    /// The input text was not valid JSON.
    Parse(String),
}

impl Display for PlainJsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlainJsonError::NonFiniteNumber(n) => {
                write!(f, "number {} has no JSON representation", n)
            }
            PlainJsonError::DepthLimitExceeded => {
                f.write_str("depth limit exceeded while converting value")
            }
            PlainJsonError::Parse(msg) => write!(f, "invalid JSON: {}", msg),
        }
    }
}

impl std::error::Error for PlainJsonError {}

impl From<serde_json::Error> for PlainJsonError {
    fn from(err: serde_json::Error) -> Self {
        PlainJsonError::Parse(err.to_string())
    }
}
