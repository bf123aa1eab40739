//! Purpose: Small encoder helpers producing `serde_json::Value`.
//! Exports: `optional`, `list`, `object`, and scalar encoders usable as `Fn(&T) -> Value`.
//! Role: Encoder half of the combinators; keyed-map and result encoders accept these.
//! Invariants: Encoders are total; absent optional values encode as JSON `null`.
use serde_json::{Map, Value};

pub fn string<S>(value: &S) -> Value
where
    S: AsRef<str> + ?Sized,
{
    Value::String(value.as_ref().to_string())
}

pub fn bool(value: &bool) -> Value {
    Value::Bool(*value)
}

pub fn int(value: &i64) -> Value {
    Value::from(*value)
}

pub fn uint(value: &u64) -> Value {
    Value::from(*value)
}

/// Non-finite floats have no JSON form and encode as `null`.
pub fn float(value: &f64) -> Value {
    Value::from(*value)
}

pub fn null() -> Value {
    Value::Null
}

/// `encoder(value)` when present, `null` when absent.
pub fn optional<A, F>(encoder: F, value: Option<&A>) -> Value
where
    A: ?Sized,
    F: Fn(&A) -> Value,
{
    match value {
        Some(inner) => encoder(inner),
        None => Value::Null,
    }
}

pub fn list<'a, A, F, I>(encoder: F, items: I) -> Value
where
    A: 'a,
    F: Fn(&A) -> Value,
    I: IntoIterator<Item = &'a A>,
{
    Value::Array(items.into_iter().map(encoder).collect())
}

/// Builds an object from already-encoded fields; later duplicates overwrite earlier ones.
pub fn object<K, I>(fields: I) -> Value
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Value)>,
{
    let mut map = Map::new();
    for (key, value) in fields {
        map.insert(key.into(), value);
    }
    Value::Object(map)
}
