//! Cheap shape check on a received wire buffer.
//!
//! Runs on the *compressed* buffer before zero-run expansion and the
//! recursive decode. Only the leading tag and, for payload-free atoms, the
//! overall length are inspected; everything deeper is left to the decoder.

use crate::{Error, Result, Tag};

/// Validates the outer shape of `wire` and returns its top-level tag.
///
/// Rules, in order:
///
/// 1. the buffer is non-empty;
/// 2. `true` and `null` are exactly one byte;
/// 3. `false` is exactly `[0x00, 0x01]`, the only form the compressor
///    produces for a single zero byte;
/// 4. the first byte is a known tag.
///
/// # Errors
///
/// [`Error::InvalidLength`] for rules 1-3, [`Error::InvalidType`] for rule 4.
///
/// # Examples
///
/// ```rust
/// use safeson::{envelope, Tag};
///
/// assert_eq!(envelope::check(&[0, 1]), Ok(Tag::False));
/// assert!(envelope::check(&[0]).is_err());
/// assert!(envelope::check(&[1, 0]).is_err());
/// ```
pub fn check(wire: &[u8]) -> Result<Tag> {
    let Some(&first) = wire.first() else {
        return Err(Error::invalid_length(0, "empty buffer"));
    };

    let tag = Tag::try_from(first);
    match tag {
        Ok(Tag::True | Tag::Null) if wire.len() != 1 => {
            return Err(Error::invalid_length(1, "payload after an atom"));
        }
        Ok(Tag::False) if wire != [0, 1] => {
            return Err(Error::invalid_length(
                0,
                "false must be encoded as exactly [0, 1]",
            ));
        }
        _ => {}
    }

    tag.map_err(|byte| Error::invalid_type(0, byte))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(matches!(check(&[]), Err(Error::InvalidLength { .. })));
    }

    #[test]
    fn test_atoms() {
        assert_eq!(check(&[1]), Ok(Tag::True));
        assert_eq!(check(&[2]), Ok(Tag::Null));
        assert!(matches!(check(&[1, 0]), Err(Error::InvalidLength { .. })));
        assert!(matches!(check(&[2, 2]), Err(Error::InvalidLength { .. })));
    }

    #[test]
    fn test_false() {
        assert_eq!(check(&[0, 1]), Ok(Tag::False));
        assert!(matches!(check(&[0]), Err(Error::InvalidLength { .. })));
        assert!(matches!(check(&[0, 2]), Err(Error::InvalidLength { .. })));
        assert!(matches!(check(&[0, 1, 25]), Err(Error::InvalidLength { .. })));
    }

    #[test]
    fn test_unknown_tags() {
        for byte in 7..=255u8 {
            assert_eq!(check(&[byte]), Err(Error::invalid_type(0, byte)));
        }
    }

    #[test]
    fn test_payload_tags_pass() {
        for byte in 3..=6u8 {
            assert!(check(&[byte]).is_ok());
        }
    }
}
