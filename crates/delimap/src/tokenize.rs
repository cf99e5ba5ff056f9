//! Character-set tokenizer.

use alloc::vec::Vec;

use crate::text::Text;

/// Splits `src` into maximal runs of characters outside `delimiters`.
///
/// Unlike the extractor's delimiters, `delimiters` is a set: any single
/// member character splits (bytes for byte text, `char`s for Unicode text).
/// Delimiter runs collapse, so the result never contains an empty token,
/// leading or trailing included. An empty buffer yields no tokens; an empty
/// set yields the whole buffer as one token. Tokens stay in the source
/// encoding.
///
/// # Examples
///
/// ```rust
/// use delimap::tokenize;
///
/// assert_eq!(tokenize("a/b/c", "/"), ["a", "b", "c"]);
/// assert_eq!(tokenize("/a//b/", "/"), ["a", "b"]);
/// assert!(tokenize("", "/").is_empty());
/// ```
#[must_use]
pub fn tokenize<T>(src: &T, delimiters: &T) -> Vec<T::Owned>
where
    T: Text + ?Sized,
{
    let mut tokens = Vec::new();
    let mut start = src.find_not_in_set(delimiters, 0);

    while let Some(at) = start {
        let end = src.find_in_set(delimiters, at);
        tokens.push(src.slice(at..end.unwrap_or_else(|| src.len())).to_owned_text());
        start = end.and_then(|from| src.find_not_in_set(delimiters, from));
    }

    tokens
}
