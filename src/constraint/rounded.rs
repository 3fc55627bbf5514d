use std::fmt;

use super::{Constraint, ConstraintResult, Describe, TotalConstraint};
use crate::{Constrained, num::RoundDigits};

/// Constraint rounding values to `digits` decimal digits.
///
/// See [`RoundDigits`] for how ties and negative digit counts are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rounded {
    pub digits: i32,
}

/// Wraps `value` so that it is always rounded to `digits` decimal digits.
///
/// # Examples
///
/// ```
/// use nconstrain::rounded;
///
/// let price = rounded(19.999, 2) / 3.0;
/// assert_eq!(price, 6.67);
/// assert_eq!(price.to_string(), "<6.67 rounded to 2 digits>");
/// ```
pub fn rounded<T: RoundDigits>(value: T, digits: i32) -> Constrained<T, Rounded> {
    Constrained::new_total(value, Rounded { digits })
}

impl<T: RoundDigits> Constraint<T> for Rounded {
    fn apply(&self, value: T) -> ConstraintResult<T> {
        Ok(self.enforce(value))
    }
}

impl<T: RoundDigits> TotalConstraint<T> for Rounded {
    fn enforce(&self, value: T) -> T {
        value.round_digits(self.digits)
    }
}

impl<T: fmt::Display> Describe<T> for Rounded {
    fn describe(&self, value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{value} rounded to {} digits>", self.digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn floats() {
        assert_relative_eq!(rounded(2.71828, 3).into_inner(), 2.718);
        assert_relative_eq!(rounded(2.5, 0).into_inner(), 2.0);
        assert_relative_eq!(rounded(1234.0, -2).into_inner(), 1200.0);
    }

    #[test]
    fn arithmetic_rounds_again() {
        let x = rounded(1.0, 2) / 3.0;
        assert_relative_eq!(x.into_inner(), 0.33);

        let y = rounded(0.125, 3) * 0.5;
        assert_relative_eq!(y.into_inner(), 0.062);
    }

    #[test]
    fn integers() {
        assert_eq!(rounded(1234, 1).into_inner(), 1234);
        assert_eq!(rounded(1250, -2).into_inner(), 1200);
        assert_eq!((rounded(1250, -2) + 60).into_inner(), 1300);
    }

    #[test]
    fn description() {
        assert_eq!(rounded(0.5, 1).to_string(), "<0.5 rounded to 1 digits>");
    }
}
