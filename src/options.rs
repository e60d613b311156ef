//! Configuration options for SafeSON decoding.
//!
//! The wire format has no variants, so encoding takes no options. Decoding
//! is bounded in nesting depth: a buffer of repeated `[5, 1]` pairs nests one
//! array per two bytes and would otherwise recurse as deep as the buffer is
//! long, overflowing the stack. The default limit is
//! [`DEFAULT_MAX_DEPTH`] levels.
//!
//! ## Examples
//!
//! ```rust
//! use safeson::{decode_with_options, encode, safeson, DecodeOptions};
//!
//! let nested = safeson!([[[1]]]);
//! let wire = encode(&nested);
//!
//! let shallow = DecodeOptions::new().with_max_depth(2);
//! assert!(decode_with_options(&wire, &shallow).is_err());
//!
//! let deep_enough = DecodeOptions::new().with_max_depth(3);
//! assert_eq!(decode_with_options(&wire, &deep_enough).unwrap(), nested);
//! ```

/// Nesting limit used by [`decode`](crate::decode) and [`DecodeOptions::default`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for [`Decoder`](crate::Decoder) and
/// [`decode_with_options`](crate::decode_with_options).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Deepest allowed array/object nesting. `None` means unbounded.
    pub max_depth: Option<usize>,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl DecodeOptions {
    /// Creates default options (depth limited to [`DEFAULT_MAX_DEPTH`]).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use safeson::{options::DEFAULT_MAX_DEPTH, DecodeOptions};
    ///
    /// assert_eq!(DecodeOptions::new().max_depth, Some(DEFAULT_MAX_DEPTH));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits array/object nesting to `depth` levels. A top-level scalar
    /// has depth 0; a top-level array has depth 1.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Removes the nesting limit.
    ///
    /// Decoding recurses once per level, so only use this for trusted input
    /// or on a thread with a stack sized for the expected depth.
    #[must_use]
    pub fn without_max_depth(mut self) -> Self {
        self.max_depth = None;
        self
    }
}
