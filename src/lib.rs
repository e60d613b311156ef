//! # safeson
//!
//! A compact binary serialization format for JSON-compatible values, with a
//! zero-run compression pass over the encoded bytes.
//!
//! ## What is SafeSON?
//!
//! SafeSON carries exactly what JSON carries (null, booleans, numbers,
//! strings, arrays and string-keyed objects) as tag-prefixed binary. Every
//! number is an IEEE-754 double. The encoded bytes are then passed through a
//! compressor that collapses runs of zero bytes, which are common in small
//! lengths and integral doubles.
//!
//! Decoding is strict: the buffer's outer shape is checked before any work
//! is done, every read is bounds-checked, and trailing bytes are an error.
//! A decode either returns the whole value or a typed [`Error`].
//!
//! ## Quick Start
//!
//! ```rust
//! use safeson::{decode, encode, safeson};
//!
//! let value = safeson!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["rust", "binary"]
//! });
//!
//! let wire = encode(&value);
//! assert_eq!(decode(&wire).unwrap(), value);
//! ```
//!
//! ### Serde Types
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use safeson::{from_slice, to_vec};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User { id: 123, name: "Alice".to_string(), active: true };
//! let bytes = to_vec(&user).unwrap();
//! let back: User = from_slice(&bytes).unwrap();
//! assert_eq!(user, back);
//! ```
//!
//! ## Pipeline
//!
//! - Encode: [`Value`] -> [`Encoder`] -> [`rle::encode`] -> wire bytes
//! - Decode: wire bytes -> [`envelope::check`] -> [`rle::decode`] ->
//!   [`Decoder`] -> [`Value`], then a check that no bytes remain
//!
//! Every call is independent: no state is shared between calls, so encoding
//! and decoding may run concurrently from any number of threads.
//!
//! See [`format`] for the byte-level layout.

pub mod de;
pub mod envelope;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod rle;
pub mod ser;
pub mod tag;
pub mod value;

pub use de::{Decoder, ValueDeserializer};
pub use error::{Error, Result};
pub use map::Map;
pub use options::DecodeOptions;
pub use ser::{Encoder, ValueSerializer};
pub use tag::Tag;
pub use value::Value;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Encodes `value` into a compressed wire buffer.
///
/// # Examples
///
/// ```rust
/// use safeson::{encode, Value};
///
/// assert_eq!(encode(&Value::Bool(false)), [0, 1]);
/// assert_eq!(encode(&Value::Number(0.0)), [3, 0, 8]);
/// ```
#[must_use]
pub fn encode(value: &Value) -> Vec<u8> {
    let mut encoder = Encoder::new();
    encoder.write_value(value);
    rle::encode(&encoder.into_inner())
}

/// Decodes one value from a compressed wire buffer.
///
/// # Examples
///
/// ```rust
/// use safeson::{decode, Error, Value};
///
/// assert_eq!(decode(&[0, 1]).unwrap(), Value::Bool(false));
/// assert!(matches!(decode(&[1, 1]), Err(Error::InvalidLength { .. })));
/// ```
///
/// # Errors
///
/// Returns an error if the envelope is malformed, a zero run is broken, the
/// tagged encoding is invalid or truncated, or bytes remain after the value.
/// Arrays and objects nested deeper than
/// [`DEFAULT_MAX_DEPTH`](options::DEFAULT_MAX_DEPTH) levels fail with
/// [`Error::DepthLimitExceeded`]; use [`decode_with_options`] to raise it.
pub fn decode(wire: &[u8]) -> Result<Value> {
    decode_with_options(wire, &DecodeOptions::default())
}

/// Decodes one value from a compressed wire buffer with custom options.
///
/// # Errors
///
/// Same as [`decode`], with [`Error::DepthLimitExceeded`] reported against
/// `options.max_depth` instead of the default limit.
pub fn decode_with_options(wire: &[u8], options: &DecodeOptions) -> Result<Value> {
    envelope::check(wire)?;
    let flat = rle::decode(wire)?;

    let mut decoder = Decoder::with_options(&flat, options);
    let value = decoder.read_value()?;
    decoder.finish()?;
    Ok(value)
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use safeson::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(value.get("y"), Some(&Value::Number(2.0)));
/// ```
///
/// # Errors
///
/// Returns an error if `T` has a map with non-string keys or its
/// `Serialize` impl fails.
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    ser::to_value(value)
}

/// Convert a [`Value`] into any `T: Deserialize`.
///
/// # Errors
///
/// Returns an error if the value's shape does not match `T`.
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(ValueDeserializer::new(value))
}

/// Serialize any `T: Serialize` to a compressed wire buffer.
///
/// # Errors
///
/// Returns an error if the value cannot be converted to a [`Value`].
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    Ok(encode(&to_value(value)?))
}

/// Serialize any `T: Serialize` to a writer as a wire buffer.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let bytes = to_vec(value)?;
    writer
        .write_all(&bytes)
        .map_err(|e| Error::io(&e.to_string()))
}

/// Deserialize an instance of type `T` from a wire buffer.
///
/// # Errors
///
/// Returns any [`decode`] error, or an error if the value does not match `T`.
pub fn from_slice<T>(wire: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(decode(wire)?)
}

/// Deserialize an instance of type `T` from a reader holding exactly one
/// wire buffer.
///
/// The reader is drained to its end; the format has no length prefix, so
/// the whole stream is one message.
///
/// # Errors
///
/// Returns an error if reading fails or [`from_slice`] fails.
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_slice(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
        manager: Option<Box<User>>,
    }

    #[test]
    fn test_roundtrip_user() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
            manager: Some(Box::new(User {
                id: 1,
                name: "Bob".to_string(),
                active: false,
                tags: vec![],
                manager: None,
            })),
        };

        let bytes = to_vec(&user).unwrap();
        let back: User = from_slice(&bytes).unwrap();
        assert_eq!(user, back);
    }

    #[test]
    fn test_writer_reader() {
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &vec![1u8, 0, 255]).unwrap();
        let back: Vec<u8> = from_reader(buffer.as_slice()).unwrap();
        assert_eq!(back, [1, 0, 255]);
    }

    #[test]
    fn test_decode_pipeline_order() {
        // envelope runs before zero-run expansion
        assert!(matches!(decode(&[0]), Err(Error::InvalidLength { .. })));
        // expansion runs before the decoder
        assert!(matches!(decode(&[3, 0]), Err(Error::MalformedRun { .. })));
        assert!(matches!(decode(&[3, 0, 7]), Err(Error::DataShortage { .. })));
        assert!(matches!(decode(&[3, 0, 9]), Err(Error::ExtraBytes { .. })));
    }

    #[test]
    fn test_from_value_mismatch() {
        assert!(from_value::<u32>(Value::from("nope")).is_err());
        assert!(from_value::<Vec<bool>>(Value::Null).is_err());
    }
}
