/// Policy for floats with no JSON representation (NaN, ±infinity).
///
/// Such values can only arrive through a [`Value`](crate::Value) built in
/// code; JSON text never parses to one. This enum controls what the
/// formatter does when it meets one anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonFinitePolicy {
    /// Return [`PlainJsonError::NonFiniteNumber`](crate::PlainJsonError).
    /// This is the default.
    TreatAsError,
    /// Emit the literal `null` in place of the number.
    AsNull,
}

/// Configuration options for JSON formatting.
///
/// The defaults reproduce the classic fixed-layout output: 2-space
/// indentation, `\n` line endings, string content written through
/// unescaped.
///
/// # Example
///
/// ```rust
/// use plainjson::{NonFinitePolicy, PlainJsonOptions};
///
/// let mut options = PlainJsonOptions::default();
/// options.indent_spaces = 4;
/// options.escape_strings = true;
/// options.non_finite_policy = NonFinitePolicy::AsNull;
/// ```
#[derive(Debug, Clone)]
pub struct PlainJsonOptions {
    /// Number of spaces per indentation level. Default: 2.
    pub indent_spaces: usize,

    /// Apply JSON escaping to string content and object keys on output.
    ///
    /// Off by default for parity with the original tool, which wrote string
    /// content through verbatim. Leave this off only when inputs are known
    /// to be free of quotes, backslashes, and control characters; otherwise
    /// the output may not reparse.
    pub escape_strings: bool,

    /// What to do with NaN or infinite floats.
    /// Default: [`NonFinitePolicy::TreatAsError`].
    pub non_finite_policy: NonFinitePolicy,
}

impl Default for PlainJsonOptions {
    fn default() -> Self {
        Self {
            indent_spaces: 2,
            escape_strings: false,
            non_finite_policy: NonFinitePolicy::TreatAsError,
        }
    }
}

impl PlainJsonOptions {
    /// Creates a new `PlainJsonOptions` with recommended settings.
    ///
    /// Currently identical to [`Default::default()`].
    pub fn recommended() -> Self {
        Self::default()
    }
}
