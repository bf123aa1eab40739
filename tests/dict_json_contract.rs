//! Purpose: Lock the keyed-map wire shape and its length-mismatch policies.
//! Exports: Integration tests only (no runtime exports).
//! Role: Pin `{"keys": [...], "values": [...]}` encoding and decoding behavior.
//! Invariants: Truncate (default) pairs up to the shorter array; Strict rejects mismatches.
//! Invariants: Round-trips preserve every entry for matching encoder/decoder pairs.

use std::collections::{BTreeMap, HashMap};

use jsonweave::decode::{bool, field, int, list, string};
use jsonweave::dict_json::{KEYS_FIELD, VALUES_FIELD};
use jsonweave::{
    DecodeErrorKind, DictOptions, decode_dict, decode_dict_with, decode_dict_with_options,
    encode, encode_dict,
};
use serde_json::json;

#[test]
fn round_trip_preserves_non_string_keys() {
    let mut dict = BTreeMap::new();
    dict.insert(10_i64, vec![true, false]);
    dict.insert(-2, vec![]);
    dict.insert(7, vec![true]);

    let encode_flags = |flags: &Vec<bool>| encode::list(encode::bool, flags);
    let encoded = encode_dict(encode::int, encode_flags, &dict);
    let decoded = decode_dict(int(), list(bool())).decode(&encoded).unwrap();
    assert_eq!(decoded, dict);
}

#[test]
fn hash_map_encoding_keeps_pairs_aligned() {
    let mut dict = HashMap::new();
    for n in 0..20_i64 {
        dict.insert(n, format!("v{n}"));
    }
    let encoded = encode_dict(encode::int, encode::string, &dict);
    let keys = encoded[KEYS_FIELD].as_array().unwrap();
    let values = encoded[VALUES_FIELD].as_array().unwrap();
    assert_eq!(keys.len(), 20);
    for (key, value) in keys.iter().zip(values) {
        let key = key.as_i64().unwrap();
        assert_eq!(value.as_str(), Some(format!("v{key}").as_str()));
    }
}

#[test]
fn mismatched_lengths_truncate_by_default() {
    let input = json!({ "keys": [1, 2, 3], "values": ["a", "b"] });
    let dict = decode_dict(int(), string()).decode(&input).unwrap();
    assert_eq!(dict.len(), 2);
    assert_eq!(dict.get(&1).map(String::as_str), Some("a"));
    assert_eq!(dict.get(&2).map(String::as_str), Some("b"));
    assert!(!dict.contains_key(&3));
}

#[test]
fn mismatched_lengths_fail_under_strict_policy() {
    let input = json!({ "keys": [1, 2, 3], "values": ["a", "b"] });
    let err = decode_dict_with_options(DictOptions::strict(), int(), string(), |v: String| v)
        .decode(&input)
        .unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::LengthMismatch);
    assert_eq!(err.path_string(), "$.values");
    assert_eq!(err.reason(), "array length mismatch: 3 keys but 2 values");

    let equal = json!({ "keys": [1], "values": ["a"] });
    let dict = decode_dict_with_options(DictOptions::strict(), int(), string(), |v: String| v)
        .decode(&equal)
        .unwrap();
    assert_eq!(dict.len(), 1);
}

#[test]
fn missing_or_malformed_arrays_fail() {
    let decoder = decode_dict(int(), string());

    let err = decoder.decode(&json!({ "keys": [1] })).unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::MissingField);

    let err = decoder
        .decode(&json!({ "keys": [1, "two"], "values": ["a", "b"] }))
        .unwrap_err();
    assert_eq!(err.path_string(), "$.keys[1]");

    let err = decoder
        .decode(&json!({ "keys": [1], "values": "a" }))
        .unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::TypeMismatch);
    assert_eq!(err.path_string(), "$.values");
}

#[test]
fn decode_with_conversion_inside_larger_record() {
    let input = json!({
        "scores": { "keys": ["ann", "bo"], "values": [3, 4] }
    });
    let decoder = field("scores", decode_dict_with(string(), int(), |n: i64| n as f64 / 2.0));
    let scores = decoder.decode(&input).unwrap();
    assert_eq!(scores.get("ann"), Some(&1.5));
    assert_eq!(scores.get("bo"), Some(&2.0));
}
