use std::fmt;

use super::{Constraint, ConstraintResult, Describe, TotalConstraint, max_of, min_of};
use crate::Constrained;

/// Constraint clamping values into the closed range `lo..=hi`.
///
/// The bounds are not validated. With `lo > hi` every value maps to `hi`,
/// since the upper clamp is applied last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Between<T> {
    pub lo: T,
    pub hi: T,
}

/// Wraps `value` so that it stays within `lo..=hi`.
///
/// # Examples
///
/// ```
/// use nconstrain::between;
///
/// let mut percent = between(40, 0, 100);
/// percent += 75;
/// assert_eq!(percent, 100);
///
/// let percent = percent - 250;
/// assert_eq!(percent, 0);
/// assert_eq!(percent.to_string(), "<0 between 0, 100>");
/// ```
pub fn between<T: PartialOrd + Clone>(value: T, lo: T, hi: T) -> Constrained<T, Between<T>> {
    Constrained::new_total(value, Between { lo, hi })
}

impl<T: PartialOrd + Clone> Constraint<T> for Between<T> {
    fn apply(&self, value: T) -> ConstraintResult<T> {
        Ok(self.enforce(value))
    }
}

impl<T: PartialOrd + Clone> TotalConstraint<T> for Between<T> {
    fn enforce(&self, value: T) -> T {
        min_of(max_of(value, &self.lo), &self.hi)
    }
}

impl<T: fmt::Display> Describe<T> for Between<T> {
    fn describe(&self, value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{value} between {}, {}>", self.lo, self.hi)
    }
}
