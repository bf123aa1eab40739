//! Purpose: Encode and decode keyed maps as parallel `keys`/`values` arrays.
//! Exports: `encode_dict`, `decode_dict`, `decode_dict_with`, `decode_dict_with_options`,
//! `DictOptions`, `LengthPolicy`, `KEYS_FIELD`, `VALUES_FIELD`.
//! Role: Wire shape for maps whose keys are not strings (a JSON object would force string keys).
//! Invariants: `values[i]` always belongs to `keys[i]`; both arrays come from one traversal.
//! Invariants: Duplicate decoded keys resolve last-occurrence-wins.
//! Notes: Length mismatch truncates by default; `LengthPolicy::Strict` rejects it instead.
use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::decode::{DecodeError, DecodeErrorKind, Decoder, field, list};

pub const KEYS_FIELD: &str = "keys";
pub const VALUES_FIELD: &str = "values";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LengthPolicy {
    /// Pair entries up to the shorter array; extra entries are dropped.
    #[default]
    Truncate,
    /// Reject arrays of different lengths with `DecodeErrorKind::LengthMismatch`.
    Strict,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DictOptions {
    pub length_policy: LengthPolicy,
}

impl DictOptions {
    pub fn truncating() -> Self {
        Self {
            length_policy: LengthPolicy::Truncate,
        }
    }

    pub fn strict() -> Self {
        Self {
            length_policy: LengthPolicy::Strict,
        }
    }

    pub fn with_length_policy(mut self, length_policy: LengthPolicy) -> Self {
        self.length_policy = length_policy;
        self
    }
}

/// Encodes any `(&K, &V)` traversal; a `BTreeMap` yields ascending key order.
pub fn encode_dict<'a, K, V, KE, VE, I>(key_encoder: KE, value_encoder: VE, dict: I) -> Value
where
    K: 'a + ?Sized,
    V: 'a + ?Sized,
    KE: Fn(&K) -> Value,
    VE: Fn(&V) -> Value,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    let mut keys = Vec::new();
    let mut values = Vec::new();
    for (key, value) in dict {
        keys.push(key_encoder(key));
        values.push(value_encoder(value));
    }

    let mut map = Map::new();
    map.insert(KEYS_FIELD.to_string(), Value::Array(keys));
    map.insert(VALUES_FIELD.to_string(), Value::Array(values));
    Value::Object(map)
}

pub fn decode_dict<K, V>(
    key_decoder: Decoder<K>,
    value_decoder: Decoder<V>,
) -> Decoder<BTreeMap<K, V>>
where
    K: Ord + 'static,
    V: 'static,
{
    decode_dict_with(key_decoder, value_decoder, |value: V| value)
}

pub fn decode_dict_with<K, A, V, F>(
    key_decoder: Decoder<K>,
    element_decoder: Decoder<A>,
    convert: F,
) -> Decoder<BTreeMap<K, V>>
where
    K: Ord + 'static,
    A: 'static,
    V: 'static,
    F: Fn(A) -> V + Send + Sync + 'static,
{
    decode_dict_with_options(DictOptions::default(), key_decoder, element_decoder, convert)
}

pub fn decode_dict_with_options<K, A, V, F>(
    options: DictOptions,
    key_decoder: Decoder<K>,
    element_decoder: Decoder<A>,
    convert: F,
) -> Decoder<BTreeMap<K, V>>
where
    K: Ord + 'static,
    A: 'static,
    V: 'static,
    F: Fn(A) -> V + Send + Sync + 'static,
{
    let keys_decoder = field(KEYS_FIELD, list(key_decoder));
    let values_decoder = field(VALUES_FIELD, list(element_decoder));
    Decoder::new(move |input| {
        let keys = keys_decoder.decode(input)?;
        let values = values_decoder.decode(input)?;
        if keys.len() != values.len() {
            match options.length_policy {
                LengthPolicy::Strict => {
                    return Err(DecodeError::new(
                        DecodeErrorKind::LengthMismatch,
                        format!(
                            "array length mismatch: {} keys but {} values",
                            keys.len(),
                            values.len()
                        ),
                    )
                    .in_field(VALUES_FIELD));
                }
                LengthPolicy::Truncate => {
                    tracing::debug!(
                        keys = keys.len(),
                        values = values.len(),
                        "keyed map arrays differ in length; pairing up to the shorter"
                    );
                }
            }
        }
        Ok(keys
            .into_iter()
            .zip(values.into_iter().map(&convert))
            .collect())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{int, string};
    use crate::encode;
    use serde_json::json;

    #[test]
    fn encode_pairs_keys_with_values_in_key_order() {
        let mut dict = BTreeMap::new();
        dict.insert(3_i64, "c".to_string());
        dict.insert(1, "a".to_string());
        dict.insert(2, "b".to_string());

        let value = encode_dict(encode::int, encode::string, &dict);
        assert_eq!(value, json!({ "keys": [1, 2, 3], "values": ["a", "b", "c"] }));
    }

    #[test]
    fn empty_map_encodes_empty_arrays() {
        let dict: BTreeMap<i64, i64> = BTreeMap::new();
        assert_eq!(
            encode_dict(encode::int, encode::int, &dict),
            json!({ "keys": [], "values": [] })
        );
    }

    #[test]
    fn duplicate_keys_keep_last_value() {
        let input = json!({ "keys": [1, 1], "values": ["first", "second"] });
        let dict = decode_dict(int(), string()).decode(&input).unwrap();
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get(&1).map(String::as_str), Some("second"));
    }

    #[test]
    fn convert_runs_on_each_value() {
        let input = json!({ "keys": ["a", "b"], "values": [1, 2] });
        let dict = decode_dict_with(string(), int(), |n: i64| n * 10)
            .decode(&input)
            .unwrap();
        assert_eq!(dict.get("a"), Some(&10));
        assert_eq!(dict.get("b"), Some(&20));
    }

    #[test]
    fn options_builders() {
        assert_eq!(DictOptions::default(), DictOptions::truncating());
        assert_eq!(
            DictOptions::truncating().with_length_policy(LengthPolicy::Strict),
            DictOptions::strict()
        );
    }
}
