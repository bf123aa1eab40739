//! Purpose: Encode and decode success/failure values as single-key envelopes.
//! Exports: `encode_result`, `decode_result`, `encode_result_to_string`,
//! `decode_result_from_string`, `OKAY_FIELD`, `ERROR_FIELD`.
//! Role: Wire shape `{"okay": v}` | `{"error": e}` plus compact-text wrappers.
//! Invariants: Encoded envelopes carry exactly one of `okay` / `error`, never both or neither.
//! Invariants: `decode_result` inverts `encode_result` for matching encoder/decoder pairs.
use serde_json::{Map, Value};

use crate::core::error::Error;
use crate::decode::{self, Decoder, field, maybe};
use crate::json::parse;

pub const OKAY_FIELD: &str = "okay";
pub const ERROR_FIELD: &str = "error";

pub fn encode_result<A, E, EE, OE>(
    error_encoder: EE,
    ok_encoder: OE,
    result: &Result<A, E>,
) -> Value
where
    EE: Fn(&E) -> Value,
    OE: Fn(&A) -> Value,
{
    let mut map = Map::new();
    match result {
        Ok(value) => map.insert(OKAY_FIELD.to_string(), ok_encoder(value)),
        Err(err) => map.insert(ERROR_FIELD.to_string(), error_encoder(err)),
    };
    Value::Object(map)
}

/// `okay` wins when it decodes; otherwise `error` must be present and decode.
///
/// A malformed `okay` value falls through to the `error` lookup, so
/// `{"okay": "x"}` against an integer ok decoder fails on the missing `error` field.
pub fn decode_result<A, E>(
    error_decoder: Decoder<E>,
    ok_decoder: Decoder<A>,
) -> Decoder<Result<A, E>>
where
    A: 'static,
    E: 'static,
{
    let okay = maybe(field(OKAY_FIELD, ok_decoder));
    let error = field(ERROR_FIELD, error_decoder);
    Decoder::new(move |input| match okay.decode(input)? {
        Some(value) => Ok(Ok(value)),
        None => error.decode(input).map(Err),
    })
}

pub fn encode_result_to_string<A, E, EE, OE>(
    error_encoder: EE,
    ok_encoder: OE,
    result: &Result<A, E>,
) -> String
where
    EE: Fn(&E) -> Value,
    OE: Fn(&A) -> Value,
{
    parse::to_compact_string(&encode_result(error_encoder, ok_encoder, result))
}

/// Outer `Err` is a parse or decode failure; inner `Result` is the decoded envelope.
pub fn decode_result_from_string<A, E>(
    error_decoder: Decoder<E>,
    ok_decoder: Decoder<A>,
    text: &str,
) -> Result<Result<A, E>, Error>
where
    A: 'static,
    E: 'static,
{
    const CONTEXT: &str = "decode_result_from_string";
    let input = parse::from_str(text).map_err(|err| decode::parse_failure(err, CONTEXT))?;
    decode_result(error_decoder, ok_decoder)
        .decode(&input)
        .map_err(|err| decode::decode_failure(err, CONTEXT))
}
