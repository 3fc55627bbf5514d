use std::fmt;

use super::{Constraint, ConstraintResult, Describe};
use crate::Constrained;

/// Constraint built from a plain transform function and a label.
///
/// The transform must be idempotent. It may fail, so values under this
/// constraint only support the `try_*` operations on [`Constrained`].
pub struct Custom<T> {
    transform: fn(T) -> ConstraintResult<T>,
    label: &'static str,
}

impl<T> Custom<T> {
    /// Creates a constraint running `transform` and described by `label`.
    pub fn new(transform: fn(T) -> ConstraintResult<T>, label: &'static str) -> Self {
        Self { transform, label }
    }

    /// Returns the label shown after the value.
    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<T> Clone for Custom<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Custom<T> {}

impl<T> fmt::Debug for Custom<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Wraps `value` with a caller-supplied transform.
///
/// # Errors
///
/// Returns whatever error `transform` returns for `value`.
///
/// # Examples
///
/// ```
/// use nconstrain::{ConstraintError, ConstraintResult, custom};
///
/// fn even(x: i32) -> ConstraintResult<i32> {
///     Ok(x - x.rem_euclid(2))
/// }
///
/// let x = custom(7, even, "rounded down to even").unwrap();
/// assert_eq!(x, 6);
/// assert_eq!(x.try_add(3).unwrap(), 8);
/// assert_eq!(x.to_string(), "<6 rounded down to even>");
///
/// fn odd_only(x: i32) -> ConstraintResult<i32> {
///     if x % 2 != 0 { Ok(x) } else { Err(ConstraintError::NotInSet) }
/// }
/// assert!(custom(4, odd_only, "odd").is_err());
/// ```
pub fn custom<T>(
    value: T,
    transform: fn(T) -> ConstraintResult<T>,
    label: &'static str,
) -> ConstraintResult<Constrained<T, Custom<T>>> {
    Constrained::new(value, Custom::new(transform, label))
}

impl<T> Constraint<T> for Custom<T> {
    fn apply(&self, value: T) -> ConstraintResult<T> {
        (self.transform)(value)
    }
}

impl<T: fmt::Display> Describe<T> for Custom<T> {
    fn describe(&self, value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{value} {}>", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ConstraintError;

    fn non_negative(x: f64) -> ConstraintResult<f64> {
        match x.partial_cmp(&0.0) {
            Some(std::cmp::Ordering::Less) => Err(ConstraintError::BelowMinimum),
            Some(_) => Ok(x),
            None => Err(ConstraintError::NotANumber),
        }
    }

    #[test]
    fn validating_transform() {
        assert!(custom(1.5, non_negative, "non-negative").is_ok());
        assert_eq!(
            custom(-1.5, non_negative, "non-negative").unwrap_err(),
            ConstraintError::BelowMinimum
        );
        assert_eq!(
            custom(f64::NAN, non_negative, "non-negative").unwrap_err(),
            ConstraintError::NotANumber
        );
    }

    #[test]
    fn results_are_checked() {
        let x = custom(2.0, non_negative, "non-negative").unwrap();
        assert!(x.try_sub(1.0).is_ok());
        assert_eq!(x.try_sub(3.0).unwrap_err(), ConstraintError::BelowMinimum);
    }

    #[test]
    fn upper_bound_check() {
        fn probability(x: f64) -> ConstraintResult<f64> {
            if x > 1.0 {
                Err(ConstraintError::AboveMaximum)
            } else {
                non_negative(x)
            }
        }

        let p = custom(0.25, probability, "probability").unwrap();
        assert_eq!(p.try_mul(2.0).unwrap(), 0.5);
        assert_eq!(p.try_add(1.0).unwrap_err(), ConstraintError::AboveMaximum);
        assert_eq!(p.try_rsub(0.0).unwrap_err(), ConstraintError::BelowMinimum);
        assert_eq!(p.to_string(), "<0.25 probability>");
    }

    #[test]
    fn debug_shows_label() {
        let c = Custom::new(non_negative, "non-negative");
        assert_eq!(c.label(), "non-negative");
        assert!(format!("{c:?}").contains("non-negative"));
    }
}
