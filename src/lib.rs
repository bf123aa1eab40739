//! Purpose: Composable JSON decoders and encoders layered over `serde_json::Value`.
//! Exports: `decode` (decoders, `and_map`, `with_default`), `encode` (encoders, `optional`),
//! `dict_json` (keyed maps as parallel arrays), `result_json` (okay/error envelopes),
//! `json` (text boundary), `core` (crate error model).
//! Role: Library crate; pure value transformations with no I/O beyond text parse/serialize.
//! Invariants: Every combinator is stateless and safe to share across threads.
//! Invariants: Only `with_default` turns a decode failure into a success.
pub mod core;
pub mod decode;
pub mod dict_json;
pub mod encode;
pub mod json;
pub mod result_json;

pub use crate::core::error::{Error, ErrorKind};
pub use crate::decode::{DecodeError, DecodeErrorKind, Decoder, decode_str, decode_value};
pub use crate::dict_json::{
    DictOptions, LengthPolicy, decode_dict, decode_dict_with, decode_dict_with_options,
    encode_dict,
};
pub use crate::result_json::{
    decode_result, decode_result_from_string, encode_result, encode_result_to_string,
};
