use thiserror::Error;

/// Failure to convert one extracted substring into the requested output
/// encoding.
///
/// Transcoding failures are per-substring and never abort an extraction:
/// [`extract`](crate::extract) substitutes an empty string for the affected
/// key or value and keeps scanning. The fallible surface is
/// [`Transcode::try_transcode`](crate::Transcode::try_transcode).
///
/// Requesting an encoding or container combination outside the supported set
/// is not a runtime condition at all; the sealed traits reject it at compile
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TranscodeError {
    /// The byte-text source was not valid UTF-8.
    #[error("invalid utf-8 after {valid_up_to} bytes")]
    InvalidUtf8 {
        /// Length in bytes of the longest valid prefix.
        valid_up_to: usize,
    },
}
