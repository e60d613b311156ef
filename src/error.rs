//! Error types for SafeSON encoding and decoding.
//!
//! Decoding never recovers from bad input: the first violated rule is
//! reported and the whole call fails. Every decode error carries the byte
//! offset at which the violation was detected, so a caller can point at the
//! offending position when logging or rejecting a message.
//!
//! ## Error Categories
//!
//! - **Envelope and length errors**: [`Error::InvalidLength`]
//! - **Unknown tag bytes**: [`Error::InvalidType`]
//! - **Truncated input**: [`Error::DataShortage`]
//! - **Trailing input**: [`Error::ExtraBytes`]
//! - **Broken zero-run pairs**: [`Error::MalformedRun`]
//!
//! Offsets for [`Error::MalformedRun`] and the envelope checks refer to the
//! compressed wire buffer; all other offsets refer to the decompressed
//! tagged encoding.
//!
//! ## Examples
//!
//! ```rust
//! use safeson::{decode, Error};
//!
//! let err = decode(&[]).unwrap_err();
//! assert!(matches!(err, Error::InvalidLength { .. }));
//!
//! let err = decode(&[9]).unwrap_err();
//! assert!(matches!(err, Error::InvalidType { tag: 9, .. }));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur during SafeSON encoding/decoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A length is wrong: empty buffer, an atom envelope with a payload, a
    /// `false` not encoded as `[0, 1]`, or a decoded length that is not a
    /// non-negative integer.
    #[error("Invalid length at byte {offset}: {reason}")]
    InvalidLength { offset: usize, reason: String },

    /// A tag byte outside `0..=6`.
    #[error("Invalid type {tag} at byte {offset}")]
    InvalidType { offset: usize, tag: u8 },

    /// A read ran past the end of the buffer.
    #[error("No more data remaining at byte {offset}: needed {needed} bytes, {remaining} left")]
    DataShortage {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// Bytes remain after one complete value was decoded.
    #[error("Extra bytes at byte {offset}: {remaining} bytes after the end of the value")]
    ExtraBytes { offset: usize, remaining: usize },

    /// A zero byte without a count byte, or a zero count.
    #[error("Malformed zero run at byte {offset}: {reason}")]
    MalformedRun { offset: usize, reason: String },

    /// String or key bytes that are not valid UTF-8.
    #[error("Invalid UTF-8 at byte {offset}: {reason}")]
    InvalidUtf8 { offset: usize, reason: String },

    /// Arrays and objects nested deeper than [`DecodeOptions::max_depth`](crate::DecodeOptions).
    #[error("Nesting deeper than {limit} levels at byte {offset}")]
    DepthLimitExceeded { offset: usize, limit: usize },

    /// A Rust shape with no SafeSON representation
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid length error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safeson::Error;
    ///
    /// let err = Error::invalid_length(3, "length is not an integer");
    /// assert!(err.to_string().contains("byte 3"));
    /// ```
    pub fn invalid_length(offset: usize, reason: &str) -> Self {
        Error::InvalidLength {
            offset,
            reason: reason.to_string(),
        }
    }

    /// Creates an invalid type error for an unknown tag byte.
    pub fn invalid_type(offset: usize, tag: u8) -> Self {
        Error::InvalidType { offset, tag }
    }

    /// Creates a data shortage error for a read of `needed` bytes with only
    /// `remaining` left.
    pub fn data_shortage(offset: usize, needed: usize, remaining: usize) -> Self {
        Error::DataShortage {
            offset,
            needed,
            remaining,
        }
    }

    /// Creates an extra bytes error.
    pub fn extra_bytes(offset: usize, remaining: usize) -> Self {
        Error::ExtraBytes { offset, remaining }
    }

    /// Creates a malformed zero-run error.
    pub fn malformed_run(offset: usize, reason: &str) -> Self {
        Error::MalformedRun {
            offset,
            reason: reason.to_string(),
        }
    }

    pub fn invalid_utf8(offset: usize, err: std::str::Utf8Error) -> Self {
        Error::InvalidUtf8 {
            offset,
            reason: err.to_string(),
        }
    }

    pub fn depth_limit_exceeded(offset: usize, limit: usize) -> Self {
        Error::DepthLimitExceeded { offset, limit }
    }

    /// Creates an unsupported type error for Rust shapes that cannot be represented.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safeson::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the byte offset of a decode error, if it has one.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::InvalidLength { offset, .. }
            | Error::InvalidType { offset, .. }
            | Error::DataShortage { offset, .. }
            | Error::ExtraBytes { offset, .. }
            | Error::MalformedRun { offset, .. }
            | Error::InvalidUtf8 { offset, .. }
            | Error::DepthLimitExceeded { offset, .. } => Some(*offset),
            Error::UnsupportedType(_) | Error::Io(_) | Error::Custom(_) => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
