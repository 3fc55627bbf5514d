//! Constraints re-applied to a value after every operation.
//!
//! A constraint maps any raw value to an admissible one (clamping, wrapping,
//! rounding) or rejects it (set membership). [`Constrained<T, C>`] stores a
//! constraint next to its value and runs it on every new value it produces.
//!
//! # Provided constraints
//!
//! - [`AtLeast`]: Raises values below a minimum to the minimum
//! - [`AtMost`]: Lowers values above a maximum to the maximum
//! - [`Between`]: Clamps values into `lo..=hi`
//! - [`ModuloN`]: Wraps values into the residues of `n`
//! - [`Rounded`]: Rounds values to a number of decimal digits
//! - [`InSet`]: Rejects values outside a fixed set of members
//! - [`Custom`]: Runs a plain function as the transform
//!
//! All but [`InSet`] and [`Custom`] are [`TotalConstraint`]s: they never
//! fail, so values constrained by them support the arithmetic operators
//! directly. Fallible constraints go through the `try_*` operations on
//! [`Constrained`].
//!
//! # Extending
//!
//! Implement [`Constraint<T>`] (and [`TotalConstraint<T>`] if the transform
//! cannot fail) for your own type. Transforms must be idempotent:
//! applying one to a value it already produced must return that value
//! unchanged. This is not checked.
//!
//! [`Constrained<T, C>`]: crate::Constrained
//! [`Constrained`]: crate::Constrained

mod at_least;
mod at_most;
mod between;
mod custom;
mod in_set;
mod modulo_n;
mod rounded;

use std::fmt;

use thiserror::Error;

pub use at_least::{AtLeast, at_least};
pub use at_most::{AtMost, at_most};
pub use between::{Between, between};
pub use custom::{Custom, custom};
pub use in_set::{InSet, in_set};
pub use modulo_n::{ModuloN, modulo_n};
pub use rounded::{Rounded, rounded};

/// A transform applied to every value a [`Constrained`](crate::Constrained)
/// stores.
pub trait Constraint<T> {
    /// Maps a raw value to the value that will be stored.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value cannot be made to satisfy
    /// the constraint.
    fn apply(&self, value: T) -> ConstraintResult<T>;
}

/// A [`Constraint`] whose transform accepts every value.
///
/// Values under a total constraint support the standard operators
/// (`+`, `-`, `*`, ...) instead of only the fallible `try_*` forms.
pub trait TotalConstraint<T>: Constraint<T> {
    /// Maps a raw value to the value that will be stored.
    fn enforce(&self, value: T) -> T;
}

/// Writes the label shown by a constrained value's `Display` impl.
pub trait Describe<T> {
    /// Formats `value` together with this constraint's parameters.
    ///
    /// # Errors
    ///
    /// Propagates formatter errors.
    fn describe(&self, value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// An error returned when a [`Constraint`] rejects a value.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value is not a member of the allowed set")]
    NotInSet,
    #[error("modulus must not be zero")]
    ZeroModulus,
    #[error("value cannot be used as an index")]
    NotAnIndex,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// Returns the first argument unless the second is strictly greater.
///
/// Incomparable values (such as `NaN`) pass through unchanged.
fn max_of<T: PartialOrd + Clone>(value: T, floor: &T) -> T {
    if *floor > value { floor.clone() } else { value }
}

/// Returns the first argument unless the second is strictly smaller.
fn min_of<T: PartialOrd + Clone>(value: T, ceiling: &T) -> T {
    if *ceiling < value { ceiling.clone() } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn extrema_keep_first_argument_on_ties_and_nan() {
        assert_eq!(max_of(3, &5), 5);
        assert_eq!(max_of(7, &5), 7);
        assert_eq!(min_of(7, &5), 5);
        assert_eq!(min_of(3, &5), 3);

        assert!(max_of(f64::NAN, &1.0).is_nan());
        assert!(min_of(f64::NAN, &1.0).is_nan());
        assert_eq!(max_of(-0.0_f64, &0.0).to_bits(), (-0.0_f64).to_bits());
    }

    #[test]
    fn errors_have_messages() {
        assert_eq!(
            ConstraintError::NotInSet.to_string(),
            "value is not a member of the allowed set"
        );
        assert_eq!(
            ConstraintError::ZeroModulus.to_string(),
            "modulus must not be zero"
        );
    }
}
