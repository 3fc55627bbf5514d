use super::Constrained;

/// The right-hand side of a named operation: a raw value or the raw value of
/// another constrained value.
///
/// Any `T` and any `Constrained<T, D>` (owned or borrowed) convert into an
/// `Operand<T>`, so the `try_*` methods accept either directly. When
/// converting by hand, name `T`: a `Constrained` is itself a valid `T`.
///
/// # Example
///
/// ```
/// use nconstrain::{Operand, at_least, at_most};
///
/// let a = at_least(4, 0);
/// let b = at_most(9, 100);
///
/// assert_eq!(Operand::<i32>::from(&b), Operand::Wrapped(9));
/// assert_eq!(a.try_add(&b).unwrap(), 13);
/// assert_eq!(a.try_add(1).unwrap(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand<T> {
    /// A plain value.
    Raw(T),
    /// The inner value of a constrained operand, detached from its constraint.
    Wrapped(T),
}

impl<T> Operand<T> {
    /// Returns the raw value, whichever variant this is.
    pub fn into_raw(self) -> T {
        match self {
            Self::Raw(value) | Self::Wrapped(value) => value,
        }
    }

    /// Returns `true` if the value came from a constrained operand.
    pub fn is_wrapped(&self) -> bool {
        matches!(self, Self::Wrapped(_))
    }
}

impl<T> From<T> for Operand<T> {
    fn from(value: T) -> Self {
        Self::Raw(value)
    }
}

impl<T, D> From<Constrained<T, D>> for Operand<T> {
    fn from(value: Constrained<T, D>) -> Self {
        Self::Wrapped(value.into_inner())
    }
}

impl<T: Clone, D> From<&Constrained<T, D>> for Operand<T> {
    fn from(value: &Constrained<T, D>) -> Self {
        Self::Wrapped(value.value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{Constrained, at_least, rounded};

    #[test]
    fn raw_values_stay_raw() {
        let operand = Operand::<i32>::from(3);
        assert!(!operand.is_wrapped());
        assert_eq!(operand.into_raw(), 3);
    }

    #[test]
    fn constrained_values_are_unwrapped() {
        let x = at_least(1, 5);
        assert_eq!(Operand::<i32>::from(&x), Operand::Wrapped(5));
        assert_eq!(Operand::<i32>::from(x).into_raw(), 5);

        let y = rounded(0.125, 2);
        assert!(Operand::<f64>::from(y).is_wrapped());

        let nested = Operand::<Constrained<i32, _>>::from(x);
        assert!(!nested.is_wrapped());
    }
}
