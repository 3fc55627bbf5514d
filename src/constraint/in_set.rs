use std::fmt;

use super::{Constraint, ConstraintError, ConstraintResult, Describe};
use crate::Constrained;

/// Constraint rejecting any value that is not one of a fixed set of members.
///
/// Membership is decided by `PartialEq`, so incomparable values such as
/// `NaN` are never members. Members keep the order in which they were first
/// given; duplicates are dropped.
///
/// This constraint is fallible, so values under it only support the `try_*`
/// operations on [`Constrained`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InSet<T> {
    members: Vec<T>,
}

impl<T: PartialEq> InSet<T> {
    /// Creates a set constraint from the given members.
    pub fn new(members: impl IntoIterator<Item = T>) -> Self {
        members.into_iter().collect()
    }

    /// Returns `true` if `value` is a member.
    pub fn contains(&self, value: &T) -> bool {
        self.members.contains(value)
    }
}

impl<T> InSet<T> {
    /// Returns the members in insertion order.
    pub fn members(&self) -> &[T] {
        &self.members
    }
}

impl<T: PartialEq> FromIterator<T> for InSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut members = Vec::new();
        for member in iter {
            if !members.contains(&member) {
                members.push(member);
            }
        }
        Self { members }
    }
}

/// Wraps `value`, requiring it and every later result to be one of `members`.
///
/// # Errors
///
/// Returns [`ConstraintError::NotInSet`] if `value` is not a member.
///
/// # Examples
///
/// ```
/// use nconstrain::{ConstraintError, in_set};
///
/// let die = in_set(4, 1..=6).unwrap();
/// assert_eq!(die.try_add(2).unwrap(), 6);
/// assert_eq!(die.try_add(3).unwrap_err(), ConstraintError::NotInSet);
///
/// assert!(in_set(7, 1..=6).is_err());
/// assert_eq!(die.to_string(), "<4 in set {1, 2, 3, 4, 5, 6}>");
/// ```
pub fn in_set<T: PartialEq>(
    value: T,
    members: impl IntoIterator<Item = T>,
) -> ConstraintResult<Constrained<T, InSet<T>>> {
    Constrained::new(value, InSet::new(members))
}

impl<T: PartialEq> Constraint<T> for InSet<T> {
    fn apply(&self, value: T) -> ConstraintResult<T> {
        if self.contains(&value) {
            Ok(value)
        } else {
            Err(ConstraintError::NotInSet)
        }
    }
}

impl<T: fmt::Display> Describe<T> for InSet<T> {
    fn describe(&self, value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{value} in set {{")?;
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{member}")?;
        }
        f.write_str("}>")
    }
}
