//! An optional assigned value validated against an external domain.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain_set::{DomainSemantics, DomainSet};

/// An optional assigned value paired with an externally owned [`DomainSet`].
///
/// The variable does not own its domain: the caller keeps the domain and
/// passes it to [`set_value`](Self::set_value), which only assigns when the
/// value is a *current* member. The domain may shrink after assignment
/// without re-validating the stored value; callers that care (such as the
/// deserialization path) run [`revalidate`](Self::revalidate) explicitly.
///
/// Serializes as `{"value": <value-or-null>}`.
///
/// # Examples
///
/// ```
/// use pencilmark_core::{CellVar, Digit, DigitDomain, digit_domain::DigitSemantics};
///
/// let mut domain = DigitDomain::FULL;
/// domain.remove(Digit::D5);
///
/// let mut var = CellVar::<DigitSemantics>::new();
/// assert!(!var.set_value(&domain, Digit::D5)); // excluded, silently refused
/// assert!(var.set_value(&domain, Digit::D3));
/// assert_eq!(var.value(), Some(Digit::D3));
///
/// var.unset_value();
/// assert_eq!(var.value(), None);
/// ```
#[derive(Serialize, Deserialize)]
#[serde(bound(
    serialize = "S::Value: Serialize",
    deserialize = "S::Value: Deserialize<'de>"
))]
pub struct CellVar<S: DomainSemantics> {
    value: Option<S::Value>,
}

impl<S: DomainSemantics> CellVar<S> {
    /// Creates an unassigned variable.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// Returns the assigned value, if any.
    #[must_use]
    pub fn value(&self) -> Option<S::Value> {
        self.value
    }

    /// Assigns `value` if it is a current member of `domain`.
    ///
    /// Returns whether the assignment was applied; a value outside the
    /// domain is silently refused.
    pub fn set_value(&mut self, domain: &DomainSet<S>, value: S::Value) -> bool {
        if domain.contains(value) {
            self.value = Some(value);
            true
        } else {
            false
        }
    }

    /// Unconditionally clears the assigned value.
    pub fn unset_value(&mut self) {
        self.value = None;
    }

    /// Clears the assigned value if it is no longer a member of `domain`.
    ///
    /// Used after deserialization to pair the stored value with a live
    /// domain: a stale value degrades to empty rather than failing.
    pub fn revalidate(&mut self, domain: &DomainSet<S>) {
        if let Some(value) = self.value
            && !domain.contains(value)
        {
            self.value = None;
        }
    }
}

impl<S: DomainSemantics> Clone for CellVar<S> {
    fn clone(&self) -> Self {
        Self { value: self.value }
    }
}

impl<S: DomainSemantics> Copy for CellVar<S> {}

impl<S: DomainSemantics> Default for CellVar<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DomainSemantics> PartialEq for CellVar<S>
where
    S::Value: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<S: DomainSemantics> Eq for CellVar<S> where S::Value: Eq {}

impl<S: DomainSemantics> fmt::Debug for CellVar<S>
where
    S::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellVar").field("value", &self.value).finish()
    }
}
