// Primitive decoders over `serde_json::Value`: scalars, structure lookups, optionality.
// Structural decoders re-root inner failures so the error path points at the bad slot.
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::Decoder;
use super::error::{DecodeError, DecodeErrorKind};

pub fn succeed<T>(value: T) -> Decoder<T>
where
    T: Clone + Send + Sync + 'static,
{
    Decoder::new(move |_| Ok(value.clone()))
}

pub fn fail<T: 'static>(reason: impl Into<String>) -> Decoder<T> {
    let reason = reason.into();
    Decoder::new(move |_| Err(DecodeError::custom(reason.clone())))
}

/// Passes the input through untouched.
pub fn value() -> Decoder<Value> {
    Decoder::new(|input| Ok(input.clone()))
}

/// Succeeds with `value` only when the input is JSON `null`.
pub fn null<T>(value: T) -> Decoder<T>
where
    T: Clone + Send + Sync + 'static,
{
    Decoder::new(move |input| match input {
        Value::Null => Ok(value.clone()),
        other => Err(DecodeError::mismatch("null", other)),
    })
}

pub fn string() -> Decoder<String> {
    Decoder::new(|input| {
        input
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| DecodeError::mismatch("a string", input))
    })
}

pub fn bool() -> Decoder<bool> {
    Decoder::new(|input| {
        input
            .as_bool()
            .ok_or_else(|| DecodeError::mismatch("a boolean", input))
    })
}

pub fn int() -> Decoder<i64> {
    Decoder::new(|input| {
        input
            .as_i64()
            .ok_or_else(|| DecodeError::mismatch("an integer", input))
    })
}

pub fn uint() -> Decoder<u64> {
    Decoder::new(|input| {
        input
            .as_u64()
            .ok_or_else(|| DecodeError::mismatch("a non-negative integer", input))
    })
}

pub fn float() -> Decoder<f64> {
    Decoder::new(|input| {
        input
            .as_f64()
            .ok_or_else(|| DecodeError::mismatch("a number", input))
    })
}

pub fn list<T: 'static>(item: Decoder<T>) -> Decoder<Vec<T>> {
    Decoder::new(move |input| {
        let items = input
            .as_array()
            .ok_or_else(|| DecodeError::mismatch("an array", input))?;
        items
            .iter()
            .enumerate()
            .map(|(idx, value)| item.decode(value).map_err(|err| err.at_index(idx)))
            .collect()
    })
}

pub fn field<T: 'static>(name: impl Into<String>, inner: Decoder<T>) -> Decoder<T> {
    let name = name.into();
    Decoder::new(move |input| {
        let object = input.as_object().ok_or_else(|| {
            DecodeError::mismatch(&format!("an object with a field named `{name}`"), input)
        })?;
        let value = object
            .get(&name)
            .ok_or_else(|| DecodeError::missing_field(&name))?;
        inner.decode(value).map_err(|err| err.in_field(name.clone()))
    })
}

/// Nested `field` lookups, outermost name first.
pub fn at<T: 'static>(path: &[&str], inner: Decoder<T>) -> Decoder<T> {
    path.iter()
        .rev()
        .fold(inner, |acc, name| field(*name, acc))
}

pub fn index<T: 'static>(idx: usize, inner: Decoder<T>) -> Decoder<T> {
    Decoder::new(move |input| {
        let items = input
            .as_array()
            .ok_or_else(|| DecodeError::mismatch("an array", input))?;
        let value = items
            .get(idx)
            .ok_or_else(|| DecodeError::missing_index(idx, items.len()))?;
        inner.decode(value).map_err(|err| err.at_index(idx))
    })
}

/// Object entries in the object's own iteration order.
pub fn key_value_pairs<T: 'static>(inner: Decoder<T>) -> Decoder<Vec<(String, T)>> {
    Decoder::new(move |input| {
        let object = input
            .as_object()
            .ok_or_else(|| DecodeError::mismatch("an object", input))?;
        object
            .iter()
            .map(|(key, value)| {
                inner
                    .decode(value)
                    .map(|decoded| (key.clone(), decoded))
                    .map_err(|err| err.in_field(key.clone()))
            })
            .collect()
    })
}

/// Any failure of `inner` becomes `None`; this wrapper itself never fails.
pub fn maybe<T: 'static>(inner: Decoder<T>) -> Decoder<Option<T>> {
    Decoder::new(move |input| Ok(inner.decode(input).ok()))
}

/// `null` becomes `None`; anything else must satisfy `inner`.
pub fn nullable<T: 'static>(inner: Decoder<T>) -> Decoder<Option<T>> {
    Decoder::new(move |input| match input {
        Value::Null => Ok(None),
        other => inner.decode(other).map(Some),
    })
}

/// Absent or `null` field becomes `None`; a present value that `inner` rejects is an error.
pub fn optional_field<T: 'static>(
    name: impl Into<String>,
    inner: Decoder<T>,
) -> Decoder<Option<T>> {
    let name = name.into();
    Decoder::new(move |input| {
        let object = input
            .as_object()
            .ok_or_else(|| DecodeError::mismatch("an object", input))?;
        match object.get(&name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => inner
                .decode(value)
                .map(Some)
                .map_err(|err| err.in_field(name.clone())),
        }
    })
}

pub fn one_of<T: 'static>(candidates: Vec<Decoder<T>>) -> Decoder<T> {
    Decoder::new(move |input| {
        let mut reasons = Vec::with_capacity(candidates.len());
        for candidate in &candidates {
            match candidate.decode(input) {
                Ok(value) => return Ok(value),
                Err(err) => reasons.push(err.to_string()),
            }
        }
        Err(DecodeError::new(
            DecodeErrorKind::NoMatch,
            format!(
                "none of {} alternatives matched: [{}]",
                candidates.len(),
                reasons.join("; ")
            ),
        ))
    })
}

/// Bridges any serde `Deserialize` type into a decoder.
pub fn from_serde<T>() -> Decoder<T>
where
    T: DeserializeOwned + 'static,
{
    Decoder::new(|input| {
        serde_json::from_value(input.clone()).map_err(|err| DecodeError::custom(err.to_string()))
    })
}
