use std::fmt;

use super::{Constraint, ConstraintResult, Describe, TotalConstraint, max_of};
use crate::Constrained;

/// Constraint raising any value below `min` to `min`.
///
/// Use this type with [`Constrained<T, AtLeast<T>>`] directly or through the
/// [`at_least`] factory.
///
/// # Examples
///
/// ```
/// use nconstrain::{Constrained, constraint::AtLeast};
///
/// let x = Constrained::new_total(-3, AtLeast { min: 0 });
/// assert_eq!(x.into_inner(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AtLeast<T> {
    pub min: T,
}

/// Wraps `value` so that it never drops below `min`.
///
/// # Examples
///
/// ```
/// use nconstrain::at_least;
///
/// let hp = at_least(5, 10);
/// assert_eq!(hp, 10);
///
/// let hp = at_least(25, 10) - 20;
/// assert_eq!(hp, 10);
/// assert_eq!(hp.to_string(), "<10 at least 10>");
/// ```
pub fn at_least<T: PartialOrd + Clone>(value: T, min: T) -> Constrained<T, AtLeast<T>> {
    Constrained::new_total(value, AtLeast { min })
}

impl<T: PartialOrd + Clone> Constraint<T> for AtLeast<T> {
    fn apply(&self, value: T) -> ConstraintResult<T> {
        Ok(self.enforce(value))
    }
}

impl<T: PartialOrd + Clone> TotalConstraint<T> for AtLeast<T> {
    fn enforce(&self, value: T) -> T {
        max_of(value, &self.min)
    }
}

impl<T: fmt::Display> Describe<T> for AtLeast<T> {
    fn describe(&self, value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{value} at least {}>", self.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::MassRate, mass_rate::kilogram_per_second};

    #[test]
    fn integers() {
        assert_eq!(at_least(5, 10).into_inner(), 10);
        assert_eq!(at_least(15, 10).into_inner(), 15);
        assert_eq!(at_least(10, 10).into_inner(), 10);
    }

    #[test]
    fn floats() {
        assert_eq!(at_least(-0.5, 0.0), 0.0);
        assert_eq!(at_least(2.5, 0.0), 2.5);
        assert!(at_least(f64::NAN, 0.0).value().is_nan());
    }

    #[test]
    fn mass_rates() {
        let zero = MassRate::new::<kilogram_per_second>(0.0);

        let flow = at_least(MassRate::new::<kilogram_per_second>(-2.0), zero);
        assert_eq!(flow.into_inner(), zero);

        let flow = at_least(MassRate::new::<kilogram_per_second>(3.0), zero)
            - MassRate::new::<kilogram_per_second>(5.0);
        assert_eq!(flow.into_inner(), zero);
    }

    #[test]
    fn description() {
        assert_eq!(at_least(7, 3).to_string(), "<7 at least 3>");
        assert_eq!(at_least(1.5, 2.25).to_string(), "<2.25 at least 2.25>");
    }
}
