//! Candidate digits (1-9) for a single cell.

use crate::{
    digit::Digit,
    domain_set::{DomainSemantics, DomainSet},
};

/// Semantics mapping [`Digit`] values to bit slots 0-8.
#[derive(Debug)]
pub struct DigitSemantics;

impl DomainSemantics for DigitSemantics {
    type Value = Digit;

    fn to_slot(value: Digit) -> u8 {
        value.value() - 1
    }

    fn from_slot(slot: u8) -> Digit {
        Digit::from_value(slot + 1)
    }
}

/// The set of candidate digits for a single cell.
///
/// A [`DomainSet`] specialized to [`Digit`], stored as a 9-bit mask.
/// Serializes as an ordered list of integers, e.g. `[1,5,9]`.
///
/// # Examples
///
/// ```
/// use pencilmark_core::{Digit, DigitDomain};
///
/// let mut candidates = DigitDomain::FULL;
/// candidates.remove(Digit::D5);
/// candidates.remove(Digit::D7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::D5));
/// assert!(candidates.contains(Digit::D1));
/// ```
pub type DigitDomain = DomainSet<DigitSemantics>;
