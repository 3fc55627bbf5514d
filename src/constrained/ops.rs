//! Standard operators for values under a [`TotalConstraint`].

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use num_traits::{Pow, Signed};

use super::Constrained;
use crate::constraint::TotalConstraint;

macro_rules! binary_ops {
    ($($op:ident::$method:ident / $op_assign:ident::$method_assign:ident;)*) => { $(
        impl<T, C> $op<T> for Constrained<T, C>
        where
            T: $op<Output = T>,
            C: TotalConstraint<T>,
        {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: T) -> Self {
                let (value, constraint) = self.into_parts();
                Self::new_total($op::$method(value, rhs), constraint)
            }
        }

        impl<T, C, D> $op<Constrained<T, D>> for Constrained<T, C>
        where
            T: $op<Output = T>,
            C: TotalConstraint<T>,
        {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Constrained<T, D>) -> Self {
                $op::$method(self, rhs.into_inner())
            }
        }

        impl<T, C> $op_assign<T> for Constrained<T, C>
        where
            T: $op<Output = T> + Clone,
            C: TotalConstraint<T>,
        {
            #[inline]
            fn $method_assign(&mut self, rhs: T) {
                let value = $op::$method(self.value.clone(), rhs);
                self.value = self.constraint.enforce(value);
            }
        }

        impl<T, C, D> $op_assign<Constrained<T, D>> for Constrained<T, C>
        where
            T: $op<Output = T> + Clone,
            C: TotalConstraint<T>,
        {
            #[inline]
            fn $method_assign(&mut self, rhs: Constrained<T, D>) {
                $op_assign::$method_assign(self, rhs.into_inner());
            }
        }
    )* };
}

// A primitive on the left produces a value under the right operand's constraint.
macro_rules! reflected_binary_op {
    ($op:ident::$method:ident for $($t:ty),* $(,)?) => { $(
        impl<C: TotalConstraint<$t>> $op<Constrained<$t, C>> for $t {
            type Output = Constrained<$t, C>;

            #[inline]
            fn $method(self, rhs: Constrained<$t, C>) -> Self::Output {
                let (value, constraint) = rhs.into_parts();
                Constrained::new_total($op::$method(self, value), constraint)
            }
        }
    )* };
}

binary_ops! {
    Add::add / AddAssign::add_assign;
    Sub::sub / SubAssign::sub_assign;
    Mul::mul / MulAssign::mul_assign;
    Div::div / DivAssign::div_assign;
    Rem::rem / RemAssign::rem_assign;
    Shl::shl / ShlAssign::shl_assign;
    Shr::shr / ShrAssign::shr_assign;
    BitAnd::bitand / BitAndAssign::bitand_assign;
    BitOr::bitor / BitOrAssign::bitor_assign;
    BitXor::bitxor / BitXorAssign::bitxor_assign;
}

reflected_binary_op!(Add::add for i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
reflected_binary_op!(Sub::sub for i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
reflected_binary_op!(Mul::mul for i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
reflected_binary_op!(Div::div for i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
reflected_binary_op!(Rem::rem for i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
reflected_binary_op!(Shl::shl for i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
reflected_binary_op!(Shr::shr for i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
reflected_binary_op!(BitAnd::bitand for i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
reflected_binary_op!(BitOr::bitor for i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
reflected_binary_op!(BitXor::bitxor for i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T, C> Neg for Constrained<T, C>
where
    T: Neg<Output = T>,
    C: TotalConstraint<T>,
{
    type Output = Self;

    fn neg(self) -> Self {
        let (value, constraint) = self.into_parts();
        Self::new_total(-value, constraint)
    }
}

impl<T, C> Not for Constrained<T, C>
where
    T: Not<Output = T>,
    C: TotalConstraint<T>,
{
    type Output = Self;

    fn not(self) -> Self {
        let (value, constraint) = self.into_parts();
        Self::new_total(!value, constraint)
    }
}

impl<T, C, R> Pow<R> for Constrained<T, C>
where
    T: Pow<R, Output = T>,
    C: TotalConstraint<T>,
{
    type Output = Self;

    fn pow(self, rhs: R) -> Self {
        let (value, constraint) = self.into_parts();
        Self::new_total(Pow::pow(value, rhs), constraint)
    }
}

impl<T, C: TotalConstraint<T>> Constrained<T, C> {
    /// Returns `|self|` under this value's constraint.
    #[must_use]
    pub fn abs(self) -> Self
    where
        T: Signed,
    {
        let (value, constraint) = self.into_parts();
        Self::new_total(value.abs(), constraint)
    }

    /// Returns `self` with its constraint applied once more.
    ///
    /// For an idempotent constraint this is the identity.
    #[must_use]
    pub fn pos(self) -> Self {
        let (value, constraint) = self.into_parts();
        Self::new_total(value, constraint)
    }
}
