//! Purpose: Describe where and why a decoder rejected its input.
//! Exports: `DecodeError`, `DecodeErrorKind`, `PathSegment`.
//! Role: Failure value returned by every `Decoder`.
//! Role: Converted to `core::error::Error` at text boundaries.
//! Invariants: Paths grow by prepending as errors bubble out of `field`/`index`.
//! Invariants: Reasons name the expected shape and the found JSON kind, never the payload.
use std::error::Error as StdError;
use std::fmt;

use serde_json::Value;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecodeErrorKind {
    MissingField,
    MissingIndex,
    TypeMismatch,
    LengthMismatch,
    NoMatch,
    Custom,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodeError {
    kind: DecodeErrorKind,
    path: Vec<PathSegment>,
    reason: String,
}

impl DecodeError {
    pub fn new(kind: DecodeErrorKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            path: Vec::new(),
            reason: reason.into(),
        }
    }

    pub fn custom(reason: impl Into<String>) -> Self {
        Self::new(DecodeErrorKind::Custom, reason)
    }

    /// `expected` reads as a noun phrase, e.g. "a string".
    pub fn mismatch(expected: &str, found: &Value) -> Self {
        Self::new(
            DecodeErrorKind::TypeMismatch,
            format!("expected {expected}, found {}", describe(found)),
        )
    }

    pub fn missing_field(name: &str) -> Self {
        Self::new(
            DecodeErrorKind::MissingField,
            format!("missing field `{name}`"),
        )
    }

    pub fn missing_index(index: usize, len: usize) -> Self {
        Self::new(
            DecodeErrorKind::MissingIndex,
            format!("missing index {index} in an array of length {len}"),
        )
    }

    pub fn kind(&self) -> DecodeErrorKind {
        self.kind
    }

    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Re-roots the error under an enclosing object field.
    pub fn in_field(mut self, name: impl Into<String>) -> Self {
        self.path.insert(0, PathSegment::Field(name.into()));
        self
    }

    /// Re-roots the error under an enclosing array slot.
    pub fn at_index(mut self, index: usize) -> Self {
        self.path.insert(0, PathSegment::Index(index));
        self
    }

    pub fn path_string(&self) -> String {
        let mut out = String::from("$");
        for segment in &self.path {
            match segment {
                PathSegment::Field(name) if is_plain_key(name) => {
                    out.push('.');
                    out.push_str(name);
                }
                PathSegment::Field(name) => {
                    out.push('[');
                    out.push_str(&Value::from(name.as_str()).to_string());
                    out.push(']');
                }
                PathSegment::Index(index) => {
                    out.push_str(&format!("[{index}]"));
                }
            }
        }
        out
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at {}: {}", self.path_string(), self.reason)
    }
}

impl StdError for DecodeError {}

pub(crate) fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn is_plain_key(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

#[cfg(test)]
mod tests {
    use super::{DecodeError, DecodeErrorKind, PathSegment};
    use serde_json::json;

    #[test]
    fn path_renders_fields_and_indices() {
        let err = DecodeError::mismatch("an integer", &json!("x"))
            .in_field("age")
            .at_index(2)
            .in_field("people");
        assert_eq!(
            err.path(),
            &[
                PathSegment::Field("people".to_string()),
                PathSegment::Index(2),
                PathSegment::Field("age".to_string()),
            ]
        );
        assert_eq!(
            err.to_string(),
            "at $.people[2].age: expected an integer, found a string"
        );
    }

    #[test]
    fn unusual_keys_are_quoted() {
        let err = DecodeError::custom("bad").in_field("first name");
        assert_eq!(err.path_string(), r#"$["first name"]"#);
        assert_eq!(err.kind(), DecodeErrorKind::Custom);
    }
}
