use std::fmt;

use super::{Constraint, ConstraintResult, Describe, TotalConstraint, min_of};
use crate::Constrained;

/// Constraint lowering any value above `max` to `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AtMost<T> {
    pub max: T,
}

/// Wraps `value` so that it never rises above `max`.
///
/// # Examples
///
/// ```
/// use nconstrain::at_most;
///
/// let volume = at_most(8, 10) * 2;
/// assert_eq!(volume, 10);
/// assert_eq!(volume.to_string(), "<10 at most 10>");
/// ```
pub fn at_most<T: PartialOrd + Clone>(value: T, max: T) -> Constrained<T, AtMost<T>> {
    Constrained::new_total(value, AtMost { max })
}

impl<T: PartialOrd + Clone> Constraint<T> for AtMost<T> {
    fn apply(&self, value: T) -> ConstraintResult<T> {
        Ok(self.enforce(value))
    }
}

impl<T: PartialOrd + Clone> TotalConstraint<T> for AtMost<T> {
    fn enforce(&self, value: T) -> T {
        min_of(value, &self.max)
    }
}

impl<T: fmt::Display> Describe<T> for AtMost<T> {
    fn describe(&self, value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{value} at most {}>", self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(at_most(5, 10).into_inner(), 5);
        assert_eq!(at_most(15, 10).into_inner(), 10);
        assert_eq!(at_most(-15, -10).into_inner(), -15);
    }

    #[test]
    fn floats() {
        assert_eq!(at_most(1.5, 1.0), 1.0);
        assert_eq!(at_most(f64::NEG_INFINITY, 1.0), f64::NEG_INFINITY);
        assert_eq!(at_most(f64::INFINITY, 1.0), 1.0);
    }

    #[test]
    fn description() {
        assert_eq!(at_most(12u8, 9).to_string(), "<9 at most 9>");
    }
}
