mod cmp;
mod named;
mod operand;
mod ops;

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use num_traits::PrimInt;
use tracing::{debug, trace};

use crate::constraint::{
    Constraint, ConstraintError, ConstraintResult, Describe, TotalConstraint,
};

pub use operand::Operand;

/// A value that re-applies a constraint after every operation.
///
/// Arithmetic never mutates its operands. Each operation computes the raw
/// result with the payload type's own operator, runs it through this value's
/// constraint, and returns a new `Constrained` that carries the same
/// constraint. When the other operand is itself constrained, only its raw
/// value is used; its constraint is ignored.
///
/// Two families of operations are provided:
///
/// - The `try_*` methods work with every [`Constraint`] and return a
///   [`ConstraintResult`], since the constraint may reject the result.
/// - The standard operators (`+`, `-`, `*`, `/`, `%`, `<<`, `>>`, `&`, `|`,
///   `^`, unary `-` and `!`, their compound assignments, and
///   [`num_traits::Pow`]) exist when the constraint is a
///   [`TotalConstraint`] and cannot fail.
///
/// Comparisons and hashing look only at the raw value.
///
/// # Example
///
/// ```
/// use nconstrain::at_least;
///
/// let x = at_least(5, 10);
/// assert_eq!(x, 10);
///
/// let y = x - 3;
/// assert_eq!(y, 10);
///
/// let z = 3 + at_least(12i32, 10);
/// assert_eq!(z, 15);
/// assert_eq!(z.to_string(), "<15 at least 10>");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Constrained<T, C> {
    value: T,
    constraint: C,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value from a raw value.
    ///
    /// The stored value is `constraint.apply(value)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the constraint rejects the value.
    pub fn new(value: T, constraint: C) -> ConstraintResult<Self> {
        let value = admit(&constraint, value)?;
        Ok(Self { value, constraint })
    }

    /// Replaces the inner value with `constraint.apply(value)`.
    ///
    /// This is the only operation that changes a value in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the constraint rejects the value,
    /// in which case the current value is kept.
    pub fn reassign(&mut self, value: T) -> ConstraintResult<()> {
        self.value = admit(&self.constraint, value)?;
        trace!("reassigned constrained value");
        Ok(())
    }

    /// Builds a sibling value under the same constraint.
    fn derive(&self, value: T) -> ConstraintResult<Self>
    where
        C: Clone,
    {
        Self::new(value, self.constraint.clone())
    }
}

impl<T, C: TotalConstraint<T>> Constrained<T, C> {
    /// Constructs a new value under a constraint that cannot fail.
    pub fn new_total(value: T, constraint: C) -> Self {
        let value = constraint.enforce(value);
        Self { value, constraint }
    }
}

impl<T, C> Constrained<T, C> {
    /// Returns a reference to the inner value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns a reference to the constraint.
    pub fn constraint(&self) -> &C {
        &self.constraint
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Consumes the wrapper and returns the inner value and the constraint.
    pub fn into_parts(self) -> (T, C) {
        (self.value, self.constraint)
    }
}

impl<T: PrimInt, C> Constrained<T, C> {
    /// Returns the inner integer as an index.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::NotAnIndex`] if the value is negative or
    /// does not fit in a `usize`.
    ///
    /// # Example
    ///
    /// ```
    /// use nconstrain::{ConstraintError, between};
    ///
    /// let slots = ["a", "b", "c"];
    /// let i = between(7, 0, 2);
    /// assert_eq!(slots[i.to_index().unwrap()], "c");
    ///
    /// let j = between(-3i64, -5, 5);
    /// assert_eq!(j.to_index(), Err(ConstraintError::NotAnIndex));
    /// ```
    pub fn to_index(&self) -> ConstraintResult<usize> {
        self.value.to_usize().ok_or(ConstraintError::NotAnIndex)
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Hashes the inner value only, consistent with equality.
impl<T: Hash, C> Hash for Constrained<T, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T, C: Describe<T>> fmt::Display for Constrained<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.constraint.describe(&self.value, f)
    }
}

fn admit<T, C: Constraint<T>>(constraint: &C, value: T) -> ConstraintResult<T> {
    constraint
        .apply(value)
        .inspect_err(|err| debug!(%err, "constraint rejected value"))
}

#[cfg(test)]
mod tests {
    use std::{
        collections::hash_map::DefaultHasher,
        hash::{Hash, Hasher},
    };

    use crate::*;

    fn hash_of(value: &impl Hash) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn construction_applies_the_transform() {
        for raw in -20i32..20 {
            assert_eq!(at_least(raw, 3).into_inner(), raw.max(3));
            assert_eq!(at_most(raw, 3).into_inner(), raw.min(3));
            assert_eq!(between(raw, -4, 4).into_inner(), raw.clamp(-4, 4));
        }
    }

    #[test]
    fn reassign_mutates_in_place() {
        let mut x = at_least(5, 10);
        assert_eq!(x.value(), &10);

        x.reassign(20).unwrap();
        assert_eq!(x.value(), &20);

        x.reassign(1).unwrap();
        assert_eq!(x.value(), &10);
    }

    #[test]
    fn failed_reassign_keeps_value() {
        let mut x = in_set(2, [1, 2, 3]).unwrap();
        assert_eq!(x.reassign(9), Err(ConstraintError::NotInSet));
        assert_eq!(x.into_inner(), 2);
    }

    #[test]
    fn generic_constructor() {
        let x = Constrained::new(12, constraint::AtMost { max: 10 }).unwrap();
        assert_eq!(x, 10);

        let (value, constraint) = x.into_parts();
        assert_eq!(value, 10);
        assert_eq!(constraint.max, 10);
    }

    #[test]
    fn index_conversion() {
        assert_eq!(at_least(3u8, 0).to_index(), Ok(3));
        assert_eq!(
            at_most(-1i32, 5).to_index(),
            Err(ConstraintError::NotAnIndex)
        );
        assert_eq!(
            modulo_n(4u128 << 100, u128::MAX).unwrap().to_index(),
            Err(ConstraintError::NotAnIndex)
        );
    }

    #[test]
    fn hash_follows_raw_value() {
        let a = at_least(5, 0);
        let b = at_most(5, 100);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(hash_of(&a), hash_of(&5));
    }

    #[test]
    fn as_ref() {
        let x = between(2.5, 0.0, 1.0);
        assert_eq!(x.as_ref(), &1.0);
    }
}
