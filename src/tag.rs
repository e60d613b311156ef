//! Tag bytes identifying the kind of an encoded value.

use std::fmt;

/// The leading byte of every tagged encoding.
///
/// The numbering is fixed by the wire format; any byte above `6` in a tag
/// position is rejected with [`Error::InvalidType`](crate::Error::InvalidType).
///
/// # Examples
///
/// ```rust
/// use safeson::Tag;
///
/// assert_eq!(Tag::try_from(3), Ok(Tag::Number));
/// assert_eq!(u8::from(Tag::Object), 6);
/// assert!(Tag::try_from(7).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    False = 0,
    True = 1,
    Null = 2,
    Number = 3,
    String = 4,
    Array = 5,
    Object = 6,
}

impl Tag {
    /// Returns `true` for tags that carry no payload.
    #[inline]
    #[must_use]
    pub const fn is_atom(self) -> bool {
        matches!(self, Tag::False | Tag::True | Tag::Null)
    }

    /// Lowercase name of the kind, as used in error messages.
    ///
    /// ```rust
    /// use safeson::Tag;
    ///
    /// assert_eq!(Tag::Object.as_str(), "object");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Tag::False => "false",
            Tag::True => "true",
            Tag::Null => "null",
            Tag::Number => "number",
            Tag::String => "string",
            Tag::Array => "array",
            Tag::Object => "object",
        }
    }
}

impl TryFrom<u8> for Tag {
    /// The rejected byte.
    type Error = u8;

    fn try_from(byte: u8) -> std::result::Result<Self, u8> {
        match byte {
            0 => Ok(Tag::False),
            1 => Ok(Tag::True),
            2 => Ok(Tag::Null),
            3 => Ok(Tag::Number),
            4 => Ok(Tag::String),
            5 => Ok(Tag::Array),
            6 => Ok(Tag::Object),
            other => Err(other),
        }
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
