//! SafeSON Wire Format
//!
//! This module documents the byte layout produced by [`encode`](crate::encode)
//! and accepted by [`decode`](crate::decode). It contains no code.
//!
//! # Overview
//!
//! A wire buffer is built in two passes:
//!
//! ```text
//! wire = zero_run_encode(tagged_encoding(value))
//! ```
//!
//! There is no header, version byte or overall length prefix. The first byte
//! of the wire buffer is the tag of the top-level value.
//!
//! # Tagged Encoding
//!
//! | Tag | Kind | Payload |
//! |---|---|---|
//! | `0` | false | none |
//! | `1` | true | none |
//! | `2` | null | none |
//! | `3` | number | 8 bytes, little-endian IEEE-754 double |
//! | `4` | string | length, UTF-8 bytes |
//! | `5` | array | length, then each element's tagged encoding |
//! | `6` | object | length, then per entry: key length, key bytes, value's tagged encoding |
//!
//! Object keys carry no tag byte; they are always strings. Entries are
//! written in insertion order.
//!
//! ## Lengths
//!
//! Counts (string byte length, array element count, object entry count):
//!
//! - `0..=254`: one byte holding the count;
//! - `255..`: the marker byte `255`, then the count as an 8-byte
//!   little-endian double.
//!
//! ```text
//! 13   -> 0D
//! 255  -> FF 00 00 00 00 00 E0 6F 40
//! 260  -> FF 00 00 00 00 00 40 70 40
//! ```
//!
//! A decoded long-form length that is negative, fractional or not finite is
//! rejected.
//!
//! ## Numbers
//!
//! Every number is a double, including NaN and the infinities, written
//! without special-casing:
//!
//! ```text
//! 123.456 -> 03 77 BE 9F 1A 2F DD 5E 40
//! ```
//!
//! # Zero-Run Compression
//!
//! Non-zero bytes pass through. A run of `k` zero bytes becomes
//! `ceil(k / 255)` pairs `00 n` with `1 <= n <= 255`, every pair but the
//! last holding `255`:
//!
//! ```text
//! 1000 x 00, 01 -> 00 FF 00 FF 00 FF 00 EB 01
//! ```
//!
//! A `00` at the end of the buffer, or a `00 00` pair, is malformed.
//!
//! # Envelope
//!
//! Before expansion the compressed buffer must satisfy:
//!
//! 1. it is non-empty;
//! 2. if it starts with `01` (true) or `02` (null), it is exactly one byte;
//! 3. if it starts with `00` (false), it is exactly `00 01`;
//! 4. its first byte is one of `00..=06`.
//!
//! # Decoding
//!
//! After the envelope check and expansion, exactly one value is read from
//! offset 0. Reading past the end, an unknown nested tag, or any byte left
//! after the value is an error. Nothing is ever truncated or coerced.
//!
//! Nesting is limited: by default an array or object more than 128 levels
//! deep fails with a depth limit error. The limit is a decoder setting, not
//! part of the format.
