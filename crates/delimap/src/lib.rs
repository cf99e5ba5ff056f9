//! Delimiter-driven key/value extraction and tokenization.
//!
//! Two independent, pure transforms over borrowed text:
//!
//! - [`extract`] / [`extract_until`] scan a buffer for repeated
//!   `key<KD>value<VD>` frames and collect them into a caller-selected
//!   container, optionally converting between byte text and Unicode text on
//!   the way out.
//! - [`tokenize`] splits a buffer into maximal runs of characters outside a
//!   delimiter set.
//!
//! Both operate on either of two text encodings: byte text (`[u8]`, searched
//! with [`bstr`]) and Unicode text (`str`). The supported encoding and
//! container combinations form a closed set enforced at compile time through
//! the sealed [`Text`], [`OwnedText`], [`Transcode`], and [`PairSink`]
//! traits; an unsupported combination does not type-check.
//!
//! # Examples
//!
//! Splitting an HTTP-style header block, stopping at the blank line so the
//! message body is never scanned:
//!
//! ```rust
//! use std::collections::BTreeMap;
//!
//! use delimap::extract_until;
//!
//! let raw = "Host: example.com\r\nAccept: */*\r\n\r\nignored: body";
//! let headers: BTreeMap<String, String> = extract_until(raw, ": ", "\r\n", "\r\n\r\n");
//!
//! assert_eq!(headers.len(), 2);
//! assert_eq!(headers["Host"], "example.com");
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
mod extract;
mod sink;
mod text;
mod tokenize;
mod transcode;


pub use error::TranscodeError;
pub use extract::{extract, extract_until};
pub use sink::PairSink;
pub use text::{OwnedText, Text};
pub use tokenize::tokenize;
pub use transcode::Transcode;
