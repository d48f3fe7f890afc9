//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Asserts that a value survives a JSON round-trip unchanged
///
/// # Panics
///
/// Panics if serialization fails, deserialization fails, or the
/// deserialized value is not deep-equal to the original
pub fn assert_json_round_trip<T>(value: &T)
where
    T: Serialize + DeserializeOwned + PartialEq + Debug,
{
    let json = serde_json::to_string(value).expect("serialization should not fail");
    let back: T = serde_json::from_str(&json)
        .unwrap_or_else(|e| panic!("Round-trip deserialization failed for {json}: {e}"));

    assert_eq!(
        &back, value,
        "Round-trip changed the value: json={json}"
    );
}

/// Asserts that a JSON document is rejected when deserialized as `T`
///
/// # Panics
///
/// Panics if the document deserializes successfully
pub fn assert_rejects_json<T>(json: &str)
where
    T: DeserializeOwned + Debug,
{
    if let Ok(value) = serde_json::from_str::<T>(json) {
        panic!("Expected {json} to be rejected, but it deserialized to {value:?}");
    }
}

/// Asserts that a value serializes to exactly the given JSON document
pub fn assert_serializes_to<T: Serialize>(value: &T, expected: serde_json::Value) {
    let actual = serde_json::to_value(value).expect("serialization should not fail");
    assert_eq!(
        actual, expected,
        "Serialized form differs from the expected document"
    );
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that a result is Err and returns the error
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => e,
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => panic!("{}: got Ok({:?})", $msg, value),
            Err(e) => e,
        }
    };
}

/// Asserts that an error matches a specific variant
#[macro_export]
macro_rules! assert_err_variant {
    ($result:expr, $pattern:pat) => {
        match $result {
            Ok(value) => panic!("Expected Err matching {}, got Ok({:?})", stringify!($pattern), value),
            Err(ref e) => {
                assert!(
                    matches!(e, $pattern),
                    "Error {:?} does not match pattern {}",
                    e,
                    stringify!($pattern)
                );
            }
        }
    };
}
