//! Property-based tests for the round-trip and rejection guarantees
//!
//! Values are generated recursively; NaN is left out of the generator since
//! it never compares equal to itself (NaN round-trips are covered in
//! wire_format_tests.rs).

use proptest::prelude::*;
use safeson::{decode, encode, from_slice, rle, to_vec, Error, Map, Value};
use serde::{Deserialize, Serialize};

fn roundtrip<T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug>(
    value: &T,
) -> bool {
    match to_vec(value) {
        Ok(bytes) => match from_slice::<T>(&bytes) {
            Ok(deserialized) => *value == deserialized,
            Err(e) => {
                eprintln!("Deserialize failed: {}", e);
                eprintln!("Wire bytes were: {:?}", bytes);
                false
            }
        },
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            false
        }
    }
}

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<f64>()
            .prop_filter("NaN is not equal to itself", |n| !n.is_nan())
            .prop_map(Value::Number),
        any::<i32>().prop_map(Value::from),
        ".{0,20}".prop_map(Value::String),
        ".{250,270}".prop_map(Value::String),
    ];

    leaf.prop_recursive(4, 96, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{0,6}", inner), 0..8)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map>())),
        ]
    })
}

/// Values whose encoding is not a single atom byte.
fn arb_compound() -> impl Strategy<Value = Value> {
    arb_value().prop_filter("atoms are handled by the envelope", |v| {
        !matches!(v, Value::Null | Value::Bool(_))
    })
}

proptest! {
    #[test]
    fn prop_value_roundtrip(value in arb_value()) {
        let wire = encode(&value);
        prop_assert_eq!(decode(&wire), Ok(value));
    }

    #[test]
    fn prop_trailing_byte_rejected(value in arb_compound(), extra in 1..=255u8) {
        let mut wire = encode(&value);
        wire.push(extra);
        let result = decode(&wire);
        prop_assert!(
            matches!(result, Err(Error::ExtraBytes { remaining: 1, .. })),
            "got {:?}",
            result
        );
    }

    #[test]
    fn prop_truncation_rejected(value in arb_compound(), cut in any::<prop::sample::Index>()) {
        let wire = encode(&value);
        let cut = cut.index(wire.len());
        let result = decode(&wire[..cut]);
        prop_assert!(
            matches!(
                result,
                Err(Error::DataShortage { .. })
                    | Err(Error::InvalidLength { .. })
                    | Err(Error::MalformedRun { .. })
            ),
            "cut at {} of {}: got {:?}",
            cut,
            wire.len(),
            result
        );
    }

    #[test]
    fn prop_decode_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = decode(&bytes);
    }

    #[test]
    fn prop_deep_prefix_never_panics(
        depth in 0usize..50_000,
        tail in prop::collection::vec(any::<u8>(), 0..16),
    ) {
        let mut bytes = vec![5u8, 1].repeat(depth);
        bytes.extend(tail);
        let _ = decode(&bytes);
    }

    #[test]
    fn prop_rle_roundtrip(bytes in prop::collection::vec(prop_oneof![Just(0u8), any::<u8>()], 0..1200)) {
        let packed = rle::encode(&bytes);
        prop_assert_eq!(rle::decode(&packed), Ok(bytes));
    }

    #[test]
    fn prop_rle_zero_runs_canonical(k in 1usize..2000) {
        let packed = rle::encode(&vec![0u8; k]);
        prop_assert_eq!(packed.len(), 2 * ((k + 254) / 255));

        let counts: Vec<u8> = packed.chunks(2).map(|pair| pair[1]).collect();
        prop_assert!(packed.chunks(2).all(|pair| pair[0] == 0));
        prop_assert!(counts.iter().all(|&n| n >= 1));
        prop_assert!(counts[..counts.len() - 1].iter().all(|&n| n == 255));
        prop_assert_eq!(counts.iter().map(|&n| n as usize).sum::<usize>(), k);
    }

    #[test]
    fn prop_rle_output_has_no_zero_count(bytes in prop::collection::vec(any::<u8>(), 0..600)) {
        let packed = rle::encode(&bytes);
        let mut iter = packed.iter();
        while let Some(&b) = iter.next() {
            if b == 0 {
                let count = iter.next().copied();
                prop_assert!(matches!(count, Some(n) if n > 0));
            }
        }
    }

    // Serde-driven types
    #[test]
    fn prop_i32(n in any::<i32>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_u32(n in any::<u32>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_i64_within_double_precision(n in -(1i64 << 53)..=(1i64 << 53)) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_bool(b in any::<bool>()) {
        prop_assert!(roundtrip(&b));
    }

    #[test]
    fn prop_string(s in ".*") {
        prop_assert!(roundtrip(&s));
    }

    #[test]
    fn prop_vec_i32(v in prop::collection::vec(any::<i32>(), 0..300)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_option_i32(opt in proptest::option::of(any::<i32>())) {
        prop_assert!(roundtrip(&opt));
    }

    #[test]
    fn prop_simple_struct(id in any::<u32>(), name in "[a-zA-Z ]{0,30}", active in any::<bool>()) {
        #[derive(Serialize, Deserialize, PartialEq, Debug)]
        struct User {
            id: u32,
            name: String,
            active: bool,
        }

        let user = User { id, name, active };
        prop_assert!(roundtrip(&user));
    }

    #[test]
    fn prop_vec_of_structs(items in prop::collection::vec((any::<u16>(), "[a-z]{1,10}"), 0..20)) {
        #[derive(Serialize, Deserialize, PartialEq, Debug)]
        struct Item {
            id: u16,
            label: String,
        }

        let items: Vec<Item> = items
            .into_iter()
            .map(|(id, label)| Item { id, label })
            .collect();
        prop_assert!(roundtrip(&items));
    }
}
