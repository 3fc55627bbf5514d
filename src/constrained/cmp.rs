//! Equality and ordering on the raw values, ignoring constraints.

use std::cmp::Ordering;

use super::Constrained;

impl<T: PartialEq, C, D> PartialEq<Constrained<T, D>> for Constrained<T, C> {
    fn eq(&self, other: &Constrained<T, D>) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, C> Eq for Constrained<T, C> {}

impl<T: PartialOrd, C, D> PartialOrd<Constrained<T, D>> for Constrained<T, C> {
    fn partial_cmp(&self, other: &Constrained<T, D>) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }

    fn lt(&self, other: &Constrained<T, D>) -> bool {
        self.value < other.value
    }

    fn le(&self, other: &Constrained<T, D>) -> bool {
        self.value <= other.value
    }

    fn gt(&self, other: &Constrained<T, D>) -> bool {
        self.value > other.value
    }

    fn ge(&self, other: &Constrained<T, D>) -> bool {
        self.value >= other.value
    }
}

impl<T: Ord, C> Ord for Constrained<T, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: PartialEq, C> PartialEq<T> for Constrained<T, C> {
    fn eq(&self, other: &T) -> bool {
        self.value == *other
    }
}

impl<T: PartialOrd, C> PartialOrd<T> for Constrained<T, C> {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }

    fn lt(&self, other: &T) -> bool {
        self.value < *other
    }

    fn le(&self, other: &T) -> bool {
        self.value <= *other
    }

    fn gt(&self, other: &T) -> bool {
        self.value > *other
    }

    fn ge(&self, other: &T) -> bool {
        self.value >= *other
    }
}

// A primitive on the left compares against the wrapped value.
macro_rules! reflected_cmp {
    ($($t:ty),* $(,)?) => { $(
        impl<C> PartialEq<Constrained<$t, C>> for $t {
            #[inline]
            fn eq(&self, other: &Constrained<$t, C>) -> bool {
                *self == other.value
            }
        }

        impl<C> PartialOrd<Constrained<$t, C>> for $t {
            #[inline]
            fn partial_cmp(&self, other: &Constrained<$t, C>) -> Option<Ordering> {
                PartialOrd::partial_cmp(self, &other.value)
            }
        }
    )* };
}

reflected_cmp!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn equality_ignores_constraints() {
        assert_eq!(at_least(5, 0), at_most(5, 100));
        assert_ne!(at_least(5, 0), at_most(6, 100));
        assert_eq!(at_least(5, 0), 5);
        assert_eq!(5, at_least(5, 0));
        assert_ne!(7, at_least(5, 0));
    }

    #[test]
    fn ordering_against_wrappers() {
        let five = at_least(5, 0);
        let six = between(6, 0, 10);

        assert!(five < six);
        assert!(five <= six);
        assert!(six > five);
        assert!(six >= five);
        assert!(five <= at_most(5, 9));
        assert!(!(five < at_most(5, 9)));
    }

    #[test]
    fn less_or_equal_is_not_strict() {
        let x = at_least(5, 0);
        assert!(x <= 5);
        assert!(!(x < 5));
        assert!(x >= 5);
        assert!(!(x > 5));
        assert!(5 <= x);
        assert!(!(5 < x));
    }

    #[test]
    fn reflected_ordering() {
        let x = at_most(2.5, 10.0);
        assert!(1.0 < x);
        assert!(3.0 > x);
        assert!(2.5 >= x);
    }

    #[test]
    fn nan_is_unordered() {
        let x = at_least(f64::NAN, 0.0);
        assert_ne!(x, at_most(f64::NAN, 1.0));
        assert!(!(x <= 1.0));
        assert!(!(x >= 1.0));
        assert_eq!(x.partial_cmp(&1.0), None);
    }

    #[test]
    fn sorting() {
        let mut values = vec![at_least(3, 0), at_least(-2, 0), at_least(7, 0)];
        values.sort();
        let raw: Vec<_> = values.into_iter().map(Constrained::into_inner).collect();
        assert_eq!(raw, vec![0, 3, 7]);
    }
}
