//! Fallible named operations, available under every constraint.
//!
//! Each `try_x` computes `self x rhs` and each reflected `try_rx` computes
//! `lhs x self`. Both re-apply `self`'s constraint to the raw result.

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub};

use num_traits::{Pow, Signed};

use super::{Constrained, Operand};
use crate::{
    constraint::{Constraint, ConstraintResult},
    num::FloorDiv,
};

macro_rules! named_binary_ops {
    ($($op:ident::$method:ident => $try_method:ident, $try_rmethod:ident, $symbol:literal;)*) => { $(
        impl<T, C> Constrained<T, C>
        where
            T: $op<Output = T> + Clone,
            C: Constraint<T> + Clone,
        {
            #[doc = concat!("Returns `self ", $symbol, " rhs` under this value's constraint.")]
            ///
            /// # Errors
            ///
            /// Returns an error if the constraint rejects the result.
            pub fn $try_method(&self, rhs: impl Into<Operand<T>>) -> ConstraintResult<Self> {
                self.derive($op::$method(self.value.clone(), rhs.into().into_raw()))
            }

            #[doc = concat!("Returns `lhs ", $symbol, " self` under this value's constraint.")]
            ///
            /// # Errors
            ///
            /// Returns an error if the constraint rejects the result.
            pub fn $try_rmethod(&self, lhs: impl Into<Operand<T>>) -> ConstraintResult<Self> {
                self.derive($op::$method(lhs.into().into_raw(), self.value.clone()))
            }
        }
    )* };
}

named_binary_ops! {
    Add::add => try_add, try_radd, "+";
    Sub::sub => try_sub, try_rsub, "-";
    Mul::mul => try_mul, try_rmul, "*";
    Div::div => try_div, try_rdiv, "/";
    Rem::rem => try_rem, try_rrem, "%";
    Shl::shl => try_shl, try_rshl, "<<";
    Shr::shr => try_shr, try_rshr, ">>";
    BitAnd::bitand => try_bitand, try_rbitand, "&";
    BitOr::bitor => try_bitor, try_rbitor, "|";
    BitXor::bitxor => try_bitxor, try_rbitxor, "^";
}

impl<T, C> Constrained<T, C>
where
    T: FloorDiv + Clone,
    C: Constraint<T> + Clone,
{
    /// Returns `self` divided by `rhs`, rounded toward negative infinity.
    ///
    /// # Errors
    ///
    /// Returns an error if the constraint rejects the result.
    pub fn try_div_floor(&self, rhs: impl Into<Operand<T>>) -> ConstraintResult<Self> {
        self.derive(self.value.clone().div_floor(rhs.into().into_raw()))
    }

    /// Returns `lhs` divided by `self`, rounded toward negative infinity.
    ///
    /// # Errors
    ///
    /// Returns an error if the constraint rejects the result.
    pub fn try_rdiv_floor(&self, lhs: impl Into<Operand<T>>) -> ConstraintResult<Self> {
        self.derive(lhs.into().into_raw().div_floor(self.value.clone()))
    }

    /// Returns the remainder of [`try_div_floor`](Self::try_div_floor).
    ///
    /// # Errors
    ///
    /// Returns an error if the constraint rejects the result.
    pub fn try_mod_floor(&self, rhs: impl Into<Operand<T>>) -> ConstraintResult<Self> {
        self.derive(self.value.clone().mod_floor(rhs.into().into_raw()))
    }

    /// Returns the remainder of [`try_rdiv_floor`](Self::try_rdiv_floor).
    ///
    /// # Errors
    ///
    /// Returns an error if the constraint rejects the result.
    pub fn try_rmod_floor(&self, lhs: impl Into<Operand<T>>) -> ConstraintResult<Self> {
        self.derive(lhs.into().into_raw().mod_floor(self.value.clone()))
    }

    /// Returns the floor quotient and remainder, each under this value's
    /// constraint.
    ///
    /// # Errors
    ///
    /// Returns an error if the constraint rejects either part.
    pub fn try_div_mod_floor(&self, rhs: impl Into<Operand<T>>) -> ConstraintResult<(Self, Self)> {
        let (quotient, remainder) = self.value.clone().div_mod_floor(rhs.into().into_raw());
        Ok((self.derive(quotient)?, self.derive(remainder)?))
    }
}

impl<T, C> Constrained<T, C>
where
    T: Clone,
    C: Constraint<T> + Clone,
{
    /// Raises `self` to the power `exp`.
    ///
    /// # Errors
    ///
    /// Returns an error if the constraint rejects the result.
    pub fn try_pow<R>(&self, exp: R) -> ConstraintResult<Self>
    where
        T: Pow<R, Output = T>,
    {
        self.derive(Pow::pow(self.value.clone(), exp))
    }

    /// Raises `base` to the power `self`.
    ///
    /// # Errors
    ///
    /// Returns an error if the constraint rejects the result.
    pub fn try_rpow(&self, base: impl Into<Operand<T>>) -> ConstraintResult<Self>
    where
        T: Pow<T, Output = T>,
    {
        self.derive(Pow::pow(base.into().into_raw(), self.value.clone()))
    }

    /// Returns `-self` under this value's constraint.
    ///
    /// # Errors
    ///
    /// Returns an error if the constraint rejects the result.
    pub fn try_neg(&self) -> ConstraintResult<Self>
    where
        T: Neg<Output = T>,
    {
        self.derive(-self.value.clone())
    }

    /// Returns a copy of `self` with the constraint applied once more.
    ///
    /// # Errors
    ///
    /// Returns an error if the constraint rejects the value, which can only
    /// happen for a transform that is not idempotent.
    pub fn try_pos(&self) -> ConstraintResult<Self> {
        self.derive(self.value.clone())
    }

    /// Returns `|self|` under this value's constraint.
    ///
    /// # Errors
    ///
    /// Returns an error if the constraint rejects the result.
    pub fn try_abs(&self) -> ConstraintResult<Self>
    where
        T: Signed,
    {
        self.derive(self.value.abs())
    }

    /// Returns `!self` under this value's constraint.
    ///
    /// # Errors
    ///
    /// Returns an error if the constraint rejects the result.
    pub fn try_not(&self) -> ConstraintResult<Self>
    where
        T: Not<Output = T>,
    {
        self.derive(!self.value.clone())
    }
}
