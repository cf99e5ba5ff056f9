//! The two supported text encodings.
//!
//! Byte text (`[u8]`/`Vec<u8>`) and Unicode text (`str`/`String`) are the
//! only members of the [`Text`]/[`OwnedText`] pair; both traits are sealed.
//! Positions are always code-unit offsets, which for both encodings means
//! byte offsets. Every position handed back by a search method lands on a
//! character boundary, so slicing with it cannot panic.

use alloc::{string::String, vec::Vec};
use core::ops::Range;

use bstr::ByteSlice;

mod sealed {
    use alloc::{string::String, vec::Vec};

    pub trait Sealed {}

    impl Sealed for str {}
    impl Sealed for [u8] {}
    impl Sealed for String {}
    impl Sealed for Vec<u8> {}
}

/// A borrowed text buffer in one of the two supported encodings.
///
/// This trait is sealed; it is implemented exactly for `str` (Unicode text)
/// and `[u8]` (byte text, searched with [`bstr`]).
pub trait Text: sealed::Sealed {
    /// Owned counterpart handed back to callers.
    type Owned: OwnedText<Slice = Self>;

    /// Length in code units.
    fn len(&self) -> usize;

    /// Returns `true` when the buffer holds no code units.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of the first occurrence of the literal `needle` at or after
    /// `start`, or `None` when it does not occur there.
    fn find_from(&self, needle: &Self, start: usize) -> Option<usize>;

    /// Position of the last occurrence of the literal `needle`.
    fn rfind(&self, needle: &Self) -> Option<usize>;

    /// Position of the first character at or after `start` that is a member
    /// of `set`.
    fn find_in_set(&self, set: &Self, start: usize) -> Option<usize>;

    /// Position of the first character at or after `start` that is not a
    /// member of `set`.
    fn find_not_in_set(&self, set: &Self, start: usize) -> Option<usize>;

    /// Sub-slice over `range` of code-unit positions.
    fn slice(&self, range: Range<usize>) -> &Self;

    /// Copies this slice into its owned counterpart.
    fn to_owned_text(&self) -> Self::Owned;
}

/// An owned text buffer, linked back to its borrowed encoding.
///
/// Sealed alongside [`Text`]; implemented exactly for `String` and
/// `Vec<u8>`. The link from owned type to slice type is what lets the output
/// container alone pick the output encoding of an extraction.
pub trait OwnedText: sealed::Sealed + Default + Sized {
    /// The borrowed slice form of this text.
    type Slice: Text<Owned = Self> + ?Sized;
}

impl OwnedText for String {
    type Slice = str;
}

impl OwnedText for Vec<u8> {
    type Slice = [u8];
}

impl Text for str {
    type Owned = String;

    #[inline]
    fn len(&self) -> usize {
        str::len(self)
    }

    fn find_from(&self, needle: &str, start: usize) -> Option<usize> {
        self.get(start..)
            .and_then(|tail| tail.find(needle))
            .map(|at| at + start)
    }

    fn rfind(&self, needle: &str) -> Option<usize> {
        str::rfind(self, needle)
    }

    fn find_in_set(&self, set: &str, start: usize) -> Option<usize> {
        let tail = self.get(start..)?;
        tail.char_indices()
            .find(|&(_, c)| set.contains(c))
            .map(|(at, _)| at + start)
    }

    fn find_not_in_set(&self, set: &str, start: usize) -> Option<usize> {
        let tail = self.get(start..)?;
        tail.char_indices()
            .find(|&(_, c)| !set.contains(c))
            .map(|(at, _)| at + start)
    }

    #[inline]
    fn slice(&self, range: Range<usize>) -> &str {
        &self[range]
    }

    #[inline]
    fn to_owned_text(&self) -> String {
        self.into()
    }
}

impl Text for [u8] {
    type Owned = Vec<u8>;

    #[inline]
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    fn find_from(&self, needle: &[u8], start: usize) -> Option<usize> {
        self.get(start..)
            .and_then(|tail| tail.find(needle))
            .map(|at| at + start)
    }

    fn rfind(&self, needle: &[u8]) -> Option<usize> {
        ByteSlice::rfind(self, needle)
    }

    fn find_in_set(&self, set: &[u8], start: usize) -> Option<usize> {
        self.get(start..)
            .and_then(|tail| tail.find_byteset(set))
            .map(|at| at + start)
    }

    fn find_not_in_set(&self, set: &[u8], start: usize) -> Option<usize> {
        self.get(start..)
            .and_then(|tail| tail.find_not_byteset(set))
            .map(|at| at + start)
    }

    #[inline]
    fn slice(&self, range: Range<usize>) -> &[u8] {
        &self[range]
    }

    #[inline]
    fn to_owned_text(&self) -> Vec<u8> {
        self.to_vec()
    }
}
