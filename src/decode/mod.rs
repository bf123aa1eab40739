//! Purpose: Composable decoders that extract typed values from `serde_json::Value`.
//! Exports: `Decoder`, `DecodeError` family, primitive decoders, `map2`, `and_map`,
//! `with_default`, `decode_value`, `decode_str`.
//! Role: Foundation every keyed-map and result helper is built from.
//! Invariants: Decoders are pure; running one twice on the same input gives the same outcome.
//! Invariants: `Decoder<T>` is `Clone + Send + Sync`; clones share the same decode function.
//! Notes: `with_default` is the only combinator that turns a failure into a success.

mod error;
mod primitive;

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::core::error::{Error, ErrorKind};
use crate::json::parse;

pub use error::{DecodeError, DecodeErrorKind, PathSegment};
pub use primitive::{
    at, bool, fail, field, float, from_serde, index, int, key_value_pairs, list, maybe, null,
    nullable, one_of, optional_field, string, succeed, uint, value,
};

type DecodeFn<T> = dyn Fn(&Value) -> Result<T, DecodeError> + Send + Sync;

pub struct Decoder<T> {
    run: Arc<DecodeFn<T>>,
}

impl<T> Clone for Decoder<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T> fmt::Debug for Decoder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder")
            .field("output", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T: 'static> Decoder<T> {
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(&Value) -> Result<T, DecodeError> + Send + Sync + 'static,
    {
        Self { run: Arc::new(run) }
    }

    pub fn decode(&self, input: &Value) -> Result<T, DecodeError> {
        (self.run)(input)
    }

    pub fn map<U, F>(self, f: F) -> Decoder<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        Decoder::new(move |input| self.decode(input).map(&f))
    }

    /// Runs the decoder chosen from the first result against the same input.
    pub fn and_then<U, F>(self, f: F) -> Decoder<U>
    where
        U: 'static,
        F: Fn(T) -> Decoder<U> + Send + Sync + 'static,
    {
        Decoder::new(move |input| {
            let decoded = self.decode(input)?;
            f(decoded).decode(input)
        })
    }

    /// Applies the decoded function to the value decoded by `arg`.
    ///
    /// Chain one call per record field after `succeed(constructor)`:
    ///
    /// ```
    /// use jsonweave::decode::{field, int, string, succeed};
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Person {
    ///     name: String,
    ///     age: i64,
    /// }
    ///
    /// let person = succeed(|name: String| move |age: i64| Person { name, age })
    ///     .and_map(field("name", string()))
    ///     .and_map(field("age", int()));
    ///
    /// let input = serde_json::json!({ "name": "Ann", "age": 5 });
    /// assert_eq!(
    ///     person.decode(&input).unwrap(),
    ///     Person { name: "Ann".to_string(), age: 5 }
    /// );
    /// ```
    pub fn and_map<A, B>(self, arg: Decoder<A>) -> Decoder<B>
    where
        T: FnOnce(A) -> B,
        A: 'static,
        B: 'static,
    {
        and_map(self, arg)
    }

    /// Never fails: any failure of this decoder yields `default` instead.
    pub fn with_default(self, default: T) -> Decoder<T>
    where
        T: Clone + Send + Sync,
    {
        with_default(self, default)
    }
}

/// Runs both decoders against the same input and combines their values.
///
/// Both sides are always evaluated. On failure the first decoder's error wins.
pub fn map2<A, B, C, F>(f: F, first: Decoder<A>, second: Decoder<B>) -> Decoder<C>
where
    A: 'static,
    B: 'static,
    C: 'static,
    F: Fn(A, B) -> C + Send + Sync + 'static,
{
    Decoder::new(move |input| {
        let left = first.decode(input);
        let right = second.decode(input);
        match (left, right) {
            (Ok(a), Ok(b)) => Ok(f(a, b)),
            (Err(err), _) | (_, Err(err)) => Err(err),
        }
    })
}

pub fn and_map<A, B, F>(function: Decoder<F>, arg: Decoder<A>) -> Decoder<B>
where
    F: FnOnce(A) -> B + 'static,
    A: 'static,
    B: 'static,
{
    map2(|f: F, a: A| f(a), function, arg)
}

pub fn with_default<T>(decoder: Decoder<T>, default: T) -> Decoder<T>
where
    T: Clone + Send + Sync + 'static,
{
    maybe(decoder).map(move |decoded| decoded.unwrap_or_else(|| default.clone()))
}

pub fn decode_value<T: 'static>(decoder: &Decoder<T>, input: &Value) -> Result<T, DecodeError> {
    decoder.decode(input)
}

/// Parses `text` and decodes it; failures carry a parse hint or the JSON path.
pub fn decode_str<T: 'static>(decoder: &Decoder<T>, text: &str) -> Result<T, Error> {
    let input = parse::from_str(text).map_err(|err| parse_failure(err, "decode_str"))?;
    decoder
        .decode(&input)
        .map_err(|err| decode_failure(err, "decode_str"))
}

pub(crate) fn parse_failure(err: serde_json::Error, context: &str) -> Error {
    let category = parse::categorize_error(&err);
    tracing::debug!(category = category.label(), context, "json text rejected");
    Error::new(ErrorKind::Parse)
        .with_message("invalid JSON text")
        .with_hint(parse::hint_for_error(&err, context))
        .with_source(err)
}

pub(crate) fn decode_failure(err: DecodeError, context: &str) -> Error {
    tracing::debug!(
        path = %err.path_string(),
        kind = ?err.kind(),
        context,
        "json value rejected"
    );
    Error::from(err)
}
