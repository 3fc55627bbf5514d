use std::fmt;

use num_traits::Zero;

use super::{Constraint, ConstraintError, ConstraintResult, Describe, TotalConstraint};
use crate::{Constrained, num::FloorDiv};

/// Constraint wrapping values into the residues of a non-zero modulus `n`.
///
/// The residue takes the sign of `n`: for positive `n` every stored value
/// lies in `0..n`, for negative `n` in `n+1..=0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModuloN<T> {
    n: T,
}

impl<T: Zero> ModuloN<T> {
    /// Creates a modulo constraint.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::ZeroModulus`] if `n` is zero.
    pub fn new(n: T) -> ConstraintResult<Self> {
        if n.is_zero() {
            return Err(ConstraintError::ZeroModulus);
        }
        Ok(Self { n })
    }
}

impl<T> ModuloN<T> {
    /// Returns the modulus.
    pub fn n(&self) -> &T {
        &self.n
    }
}

/// Wraps `value` so that it always stays modulo `n`.
///
/// # Errors
///
/// Returns [`ConstraintError::ZeroModulus`] if `n` is zero.
///
/// # Examples
///
/// ```
/// use nconstrain::modulo_n;
///
/// let hour = modulo_n(22, 24).unwrap() + 5;
/// assert_eq!(hour, 3);
///
/// let hour = hour - 4;
/// assert_eq!(hour, 23);
/// assert_eq!(hour.to_string(), "<23 modulo 24>");
///
/// assert!(modulo_n(1, 0).is_err());
/// ```
pub fn modulo_n<T>(value: T, n: T) -> ConstraintResult<Constrained<T, ModuloN<T>>>
where
    T: FloorDiv + Zero + Clone,
{
    Ok(Constrained::new_total(value, ModuloN::new(n)?))
}

impl<T: FloorDiv + Clone> Constraint<T> for ModuloN<T> {
    fn apply(&self, value: T) -> ConstraintResult<T> {
        Ok(self.enforce(value))
    }
}

impl<T: FloorDiv + Clone> TotalConstraint<T> for ModuloN<T> {
    fn enforce(&self, value: T) -> T {
        value.mod_floor(self.n.clone())
    }
}

impl<T: fmt::Display> Describe<T> for ModuloN<T> {
    fn describe(&self, value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{value} modulo {}>", self.n)
    }
}
