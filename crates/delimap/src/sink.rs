//! Output containers and their duplicate-key policies.

use alloc::{collections::BTreeMap, vec::Vec};

#[cfg(feature = "std")]
use core::hash::{BuildHasher, Hash};
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::text::OwnedText;

mod sealed {
    use alloc::{collections::BTreeMap, vec::Vec};

    #[cfg(feature = "std")]
    use std::collections::HashMap;

    pub trait Sealed {}

    impl<K, V> Sealed for BTreeMap<K, V> {}
    impl<K, V> Sealed for Vec<(K, V)> {}
    #[cfg(feature = "std")]
    impl<K, V, S> Sealed for HashMap<K, V, S> {}
}

/// Insertion policy for extracted key/value pairs.
///
/// The container chosen by the caller decides both how duplicate keys are
/// resolved and which text encoding the output carries (through
/// [`Item`](Self::Item)). The trait is sealed; exactly three policies exist:
///
/// - `BTreeMap<K, K>`: unique keys, last write wins, iteration ordered by
///   key.
/// - `HashMap<K, K, S>`: unique keys, last write wins, unspecified order
///   (requires the `std` feature).
/// - `Vec<(K, K)>`: multi-valued, every duplicate retained in scan order.
pub trait PairSink: Default + sealed::Sealed {
    /// Owned text type stored for both keys and values.
    type Item: OwnedText;

    /// Accepts one extracted pair, resolving duplicate keys per the policy.
    fn insert_pair(&mut self, key: Self::Item, value: Self::Item);
}

impl<K: OwnedText + Ord> PairSink for BTreeMap<K, K> {
    type Item = K;

    #[inline]
    fn insert_pair(&mut self, key: K, value: K) {
        self.insert(key, value);
    }
}

#[cfg(feature = "std")]
impl<K: OwnedText + Eq + Hash, S: BuildHasher + Default> PairSink for HashMap<K, K, S> {
    type Item = K;

    #[inline]
    fn insert_pair(&mut self, key: K, value: K) {
        self.insert(key, value);
    }
}

impl<K: OwnedText> PairSink for Vec<(K, K)> {
    type Item = K;

    #[inline]
    fn insert_pair(&mut self, key: K, value: K) {
        self.push((key, value));
    }
}
