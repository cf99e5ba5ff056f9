//! The key/value frame extractor.

use crate::{
    sink::PairSink,
    text::{OwnedText, Text},
    transcode::Transcode,
};

/// Extracts `key<KD>value<VD>` frames from the whole of `src`.
///
/// The scan keeps a cursor at the start of the next frame. Each iteration
/// finds the next key delimiter, takes everything before it as the key,
/// then finds the next value delimiter after the key delimiter and takes
/// everything up to it (or to the end of the buffer) as the value. Keys and
/// values are converted into the encoding of the output container, with a
/// failed conversion substituting an empty string for that substring only.
///
/// The scan stops silently, keeping what was accumulated so far, when no
/// further key delimiter exists or when an extracted key is empty. Early
/// termination is ordinary partial success, not an error.
///
/// Duplicate keys resolve per the container: both map kinds keep the last
/// write, `Vec<(K, K)>` keeps every pair. See [`PairSink`].
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
///
/// use delimap::extract;
///
/// let qs = "tag=networking&order=newest&final=section";
/// let params: BTreeMap<String, String> = extract(qs, "=", "&");
///
/// assert_eq!(params.len(), 3);
/// assert_eq!(params["final"], "section");
/// ```
///
/// Byte text extracts into byte containers or, transcoding, into Unicode
/// ones:
///
/// ```rust
/// use std::collections::BTreeMap;
///
/// use delimap::extract;
///
/// let raw: &[u8] = b"id=42&name=sigil";
/// let params: BTreeMap<String, String> = extract(raw, b"=", b"&");
///
/// assert_eq!(params["id"], "42");
/// ```
#[must_use]
pub fn extract<T, C>(src: &T, key_delim: &T, value_delim: &T) -> C
where
    T: Transcode<<C::Item as OwnedText>::Slice> + ?Sized,
    C: PairSink,
{
    scan(src, key_delim, value_delim, src.len())
}

/// Extracts frames from `src`, bounded by the last occurrence of
/// `terminal_delim`.
///
/// When `terminal_delim` is non-empty and occurs in the buffer, no frame may
/// start at or past its last occurrence; a trailing section that merely
/// looks delimiter-shaped (an HTTP message body, say) is thereby excluded
/// even when the same byte sequence also appears earlier. The rightmost
/// match is located once, before scanning. An empty or absent terminal
/// leaves the scan unbounded, identical to [`extract`].
///
/// # Examples
///
/// ```rust
/// use delimap::extract_until;
///
/// let raw = "Host: Duplicate\r\nHost: Hi\r\nAccept: Something\r\n\r\nmy: body";
/// let rows: Vec<(String, String)> = extract_until(raw, ": ", "\r\n", "\r\n\r\n");
///
/// assert_eq!(rows.len(), 3);
/// assert_eq!(rows[1], ("Host".to_string(), "Hi".to_string()));
/// ```
#[must_use]
pub fn extract_until<T, C>(src: &T, key_delim: &T, value_delim: &T, terminal_delim: &T) -> C
where
    T: Transcode<<C::Item as OwnedText>::Slice> + ?Sized,
    C: PairSink,
{
    let boundary = if terminal_delim.is_empty() {
        src.len()
    } else {
        src.rfind(terminal_delim).unwrap_or_else(|| src.len())
    };
    scan(src, key_delim, value_delim, boundary)
}

fn scan<T, C>(src: &T, key_delim: &T, value_delim: &T, boundary: usize) -> C
where
    T: Transcode<<C::Item as OwnedText>::Slice> + ?Sized,
    C: PairSink,
{
    let mut out = C::default();
    let mut cursor = 0;

    while cursor < boundary {
        let Some(key_end) = src.find_from(key_delim, cursor) else {
            break;
        };
        if key_end >= boundary {
            break;
        }
        let key = src.slice(cursor..key_end);
        if key.is_empty() {
            // A frame with no key ends the scan; nothing is emitted for it.
            break;
        }

        let value_start = key_end + key_delim.len();
        let value_end = src.find_from(value_delim, value_start);
        // An unmatched value delimiter still yields a final frame, with the
        // value running to the end of the buffer.
        let value = src.slice(value_start..value_end.unwrap_or_else(|| src.len()));

        out.insert_pair(key.transcode(), value.transcode());

        match value_end {
            Some(at) => cursor = at + value_delim.len(),
            None => break,
        }
    }

    out
}
