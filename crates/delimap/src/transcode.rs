//! Best-effort conversion between the two supported encodings.

use alloc::{string::String, vec::Vec};

use bstr::ByteSlice;

use crate::{error::TranscodeError, text::Text};

/// Conversion capability from one text encoding into another.
///
/// The contract is "codepoint sequence in the source encoding to a
/// best-effort codepoint sequence in `D`": same-encoding conversions copy
/// code units verbatim (byte text is not validated), `str` to `[u8]` is the
/// UTF-8 encoding and cannot fail, and `[u8]` to `str` is a strict UTF-8
/// decode. Implemented for all four source/destination pairs; sealed through
/// the [`Text`] supertrait.
///
/// # Examples
///
/// ```rust
/// use delimap::Transcode;
///
/// let ok = Transcode::<str>::transcode(b"caf\xC3\xA9".as_slice());
/// assert_eq!(ok, "café");
///
/// // Failure substitutes the empty string.
/// let bad = Transcode::<str>::transcode(b"\xFF\xFE".as_slice());
/// assert!(bad.is_empty());
/// ```
pub trait Transcode<D: Text + ?Sized>: Text {
    /// Converts into the destination encoding, reporting failure.
    ///
    /// # Errors
    ///
    /// Returns [`TranscodeError`] when the source cannot be represented in
    /// the destination encoding; of the four pairs only the `[u8]` to `str`
    /// decode can fail.
    fn try_transcode(&self) -> Result<D::Owned, TranscodeError>;

    /// Converts into the destination encoding, substituting the empty string
    /// on failure.
    #[must_use]
    fn transcode(&self) -> D::Owned {
        self.try_transcode().unwrap_or_default()
    }
}

impl Transcode<str> for str {
    #[inline]
    fn try_transcode(&self) -> Result<String, TranscodeError> {
        Ok(self.into())
    }
}

impl Transcode<[u8]> for str {
    #[inline]
    fn try_transcode(&self) -> Result<Vec<u8>, TranscodeError> {
        Ok(self.as_bytes().to_vec())
    }
}

impl Transcode<[u8]> for [u8] {
    #[inline]
    fn try_transcode(&self) -> Result<Vec<u8>, TranscodeError> {
        Ok(self.to_vec())
    }
}

impl Transcode<str> for [u8] {
    fn try_transcode(&self) -> Result<String, TranscodeError> {
        match self.to_str() {
            Ok(s) => Ok(s.into()),
            Err(err) => Err(TranscodeError::InvalidUtf8 {
                valid_up_to: err.valid_up_to(),
            }),
        }
    }
}
