//! Generic candidate-set container over a closed 9-value range.
//!
//! [`DomainSet`] stores the remaining candidate values of a cell as a 9-bit
//! mask, parameterized by a [`DomainSemantics`] type that maps user-facing
//! values to bit slots. Membership, add, and remove are all O(1), and the
//! whole domain fits in a single machine word.
//!
//! # Examples
//!
//! ```
//! use pencilmark_core::domain_set::{DomainSemantics, DomainSet};
//!
//! // Semantics mapping the values 1-9 to slots 0-8.
//! struct OneToNine;
//!
//! impl DomainSemantics for OneToNine {
//!     type Value = u8;
//!
//!     fn to_slot(value: u8) -> u8 {
//!         assert!((1..=9).contains(&value));
//!         value - 1
//!     }
//!
//!     fn from_slot(slot: u8) -> u8 {
//!         slot + 1
//!     }
//! }
//!
//! let mut domain = DomainSet::<OneToNine>::FULL;
//! domain.remove(4);
//! assert!(!domain.contains(4));
//! assert_eq!(domain.len(), 8);
//! ```

use std::{
    fmt,
    marker::PhantomData,
    ops::{BitAnd, BitOr},
};

use serde::{Deserialize, Serialize};

/// Defines how user-facing values map to the 9 bit slots of a [`DomainSet`].
///
/// Implementors convert values to and from slot indices 0-8. `to_slot` is
/// expected to panic on values outside the closed range the semantics
/// covers, mirroring the constructors of the value types themselves.
pub trait DomainSemantics {
    /// The value type stored in the set.
    type Value: Copy;

    /// Converts a value to its bit slot (0-8).
    ///
    /// # Panics
    ///
    /// Should panic if the value is outside the covered range.
    fn to_slot(value: Self::Value) -> u8;

    /// Converts a bit slot (0-8) back to its value.
    fn from_slot(slot: u8) -> Self::Value;
}

/// A mutable set of candidate values, stored as a 9-bit mask.
///
/// The canonical serialization form is the ordered list of member values in
/// ascending slot order; deserialization accepts any order and collapses
/// duplicates. All operations are total: adding a present value and
/// removing an absent one are no-ops.
///
/// The type is `Copy`, so a deep, independent copy is a plain assignment.
pub struct DomainSet<S: DomainSemantics> {
    bits: u16,
    _semantics: PhantomData<S>,
}

impl<S: DomainSemantics> DomainSet<S> {
    const MASK: u16 = 0x1FF;

    /// The empty set.
    pub const EMPTY: Self = Self::from_bits(0);

    /// The set containing all nine values.
    pub const FULL: Self = Self::from_bits(Self::MASK);

    const fn from_bits(bits: u16) -> Self {
        Self {
            bits,
            _semantics: PhantomData,
        }
    }

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    fn bit(value: S::Value) -> u16 {
        let slot = S::to_slot(value);
        debug_assert!(slot < 9);
        1 << slot
    }

    /// Returns whether `value` is a member of the set.
    #[must_use]
    pub fn contains(&self, value: S::Value) -> bool {
        self.bits & Self::bit(value) != 0
    }

    /// Adds `value` to the set. Adding a present value is a no-op.
    pub fn insert(&mut self, value: S::Value) {
        self.bits |= Self::bit(value);
    }

    /// Removes `value` from the set. Removing an absent value is a no-op.
    pub fn remove(&mut self, value: S::Value) {
        self.bits &= !Self::bit(value);
    }

    /// Returns the number of values in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns the union of two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self::from_bits(self.bits | other.bits)
    }

    /// Returns the intersection of two sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self::from_bits(self.bits & other.bits)
    }

    /// Returns the values in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self::from_bits(self.bits & !other.bits)
    }

    /// Returns an iterator over the member values in ascending slot order.
    ///
    /// This is the canonical order used by the serialized form.
    pub fn iter(&self) -> Iter<S> {
        Iter {
            bits: self.bits,
            _semantics: PhantomData,
        }
    }
}

impl<S: DomainSemantics> Clone for DomainSet<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: DomainSemantics> Copy for DomainSet<S> {}

impl<S: DomainSemantics> PartialEq for DomainSet<S> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<S: DomainSemantics> Eq for DomainSet<S> {}

impl<S: DomainSemantics> Default for DomainSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DomainSemantics> fmt::Debug for DomainSet<S>
where
    S::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<S: DomainSemantics> BitOr for DomainSet<S> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl<S: DomainSemantics> BitAnd for DomainSet<S> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl<S: DomainSemantics> FromIterator<S::Value> for DomainSet<S> {
    fn from_iter<I: IntoIterator<Item = S::Value>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<S: DomainSemantics> IntoIterator for DomainSet<S> {
    type Item = S::Value;
    type IntoIter = Iter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: DomainSemantics> IntoIterator for &DomainSet<S> {
    type Item = S::Value;
    type IntoIter = Iter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the values of a [`DomainSet`] in ascending slot order.
pub struct Iter<S: DomainSemantics> {
    bits: u16,
    _semantics: PhantomData<S>,
}

impl<S: DomainSemantics> Iterator for Iter<S> {
    type Item = S::Value;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let slot = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(S::from_slot(slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl<S: DomainSemantics> ExactSizeIterator for Iter<S> {}

impl<S: DomainSemantics> Serialize for DomainSet<S>
where
    S::Value: Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, S: DomainSemantics> Deserialize<'de> for DomainSet<S>
where
    S::Value: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = Vec::<S::Value>::deserialize(deserializer)?;
        Ok(values.into_iter().collect())
    }
}
