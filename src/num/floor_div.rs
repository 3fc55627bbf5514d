/// Floor division and floor modulo.
///
/// Unlike the `/` and `%` operators on signed primitives, which truncate
/// toward zero, these round the quotient toward negative infinity.
/// The remainder therefore takes the sign of the divisor, and
/// `lhs == rhs * lhs.div_floor(rhs) + lhs.mod_floor(rhs)` holds.
///
/// # Examples
///
/// ```
/// use nconstrain::num::FloorDiv;
///
/// assert_eq!(FloorDiv::div_floor(-7i32, 2), -4);
/// assert_eq!((-7i32).mod_floor(2), 1);
/// assert_eq!(7i32.mod_floor(-2), -1);
/// assert_eq!(7u8.div_mod_floor(2), (3, 1));
/// ```
pub trait FloorDiv: Sized {
    /// Returns the quotient rounded toward negative infinity.
    fn div_floor(self, rhs: Self) -> Self;

    /// Returns the remainder of [`div_floor`](Self::div_floor).
    ///
    /// The result is zero or has the same sign as `rhs`.
    fn mod_floor(self, rhs: Self) -> Self;

    /// Returns `(self.div_floor(rhs), self.mod_floor(rhs))`.
    fn div_mod_floor(self, rhs: Self) -> (Self, Self);
}

macro_rules! floor_div_signed {
    ($($t:ty),* $(,)?) => { $(
        impl FloorDiv for $t {
            #[inline]
            fn div_floor(self, rhs: Self) -> Self {
                self.div_mod_floor(rhs).0
            }

            #[inline]
            fn mod_floor(self, rhs: Self) -> Self {
                self.div_mod_floor(rhs).1
            }

            // `MIN / -1` wraps to `MIN` with a zero remainder.
            #[inline]
            fn div_mod_floor(self, rhs: Self) -> (Self, Self) {
                let (quotient, remainder) = (self.wrapping_div(rhs), self.wrapping_rem(rhs));
                if remainder != 0 && (remainder < 0) != (rhs < 0) {
                    (quotient - 1, remainder + rhs)
                } else {
                    (quotient, remainder)
                }
            }
        }
    )* };
}

macro_rules! floor_div_unsigned {
    ($($t:ty),* $(,)?) => { $(
        impl FloorDiv for $t {
            #[inline]
            fn div_floor(self, rhs: Self) -> Self {
                self / rhs
            }

            #[inline]
            fn mod_floor(self, rhs: Self) -> Self {
                self % rhs
            }

            #[inline]
            fn div_mod_floor(self, rhs: Self) -> (Self, Self) {
                (self / rhs, self % rhs)
            }
        }
    )* };
}

macro_rules! floor_div_float {
    ($($t:ty),* $(,)?) => { $(
        impl FloorDiv for $t {
            #[inline]
            fn div_floor(self, rhs: Self) -> Self {
                self.div_mod_floor(rhs).0
            }

            #[inline]
            fn mod_floor(self, rhs: Self) -> Self {
                self.div_mod_floor(rhs).1
            }

            fn div_mod_floor(self, rhs: Self) -> (Self, Self) {
                let mut remainder = self % rhs;
                let mut quotient = (self - remainder) / rhs;
                if remainder != 0.0 && (remainder < 0.0) != (rhs < 0.0) {
                    remainder += rhs;
                    quotient -= 1.0;
                }
                // `(self - remainder) / rhs` is integral up to rounding error.
                let quotient = if quotient == 0.0 {
                    (0.0 as $t).copysign(self / rhs)
                } else {
                    quotient.round()
                };
                let remainder = if remainder == 0.0 {
                    (0.0 as $t).copysign(rhs)
                } else {
                    remainder
                };
                (quotient, remainder)
            }
        }
    )* };
}

floor_div_signed!(i8, i16, i32, i64, i128, isize);
floor_div_unsigned!(u8, u16, u32, u64, u128, usize);
floor_div_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn signed_rounds_toward_negative_infinity() {
        assert_eq!(7i32.div_mod_floor(2), (3, 1));
        assert_eq!((-7i32).div_mod_floor(2), (-4, 1));
        assert_eq!(7i32.div_mod_floor(-2), (-4, -1));
        assert_eq!((-7i32).div_mod_floor(-2), (3, -1));
        assert_eq!((-6i64).div_mod_floor(3), (-2, 0));
        assert_eq!((-1i8).mod_floor(5), 4);
    }

    #[test]
    fn signed_minimum_over_negative_one() {
        assert_eq!(i32::MIN.mod_floor(-1), 0);
        assert_eq!(i8::MIN.div_mod_floor(-1), (i8::MIN, 0));
        assert_eq!(i64::MIN.mod_floor(-3), -2);
    }

    #[test]
    fn unsigned_matches_plain_division() {
        assert_eq!(FloorDiv::div_floor(17u32, 5), 3);
        assert_eq!(17u32.mod_floor(5), 2);
        assert_eq!(0usize.div_mod_floor(3), (0, 0));
    }

    #[test]
    fn floats() {
        assert_relative_eq!(FloorDiv::div_floor(7.5_f64, 2.0), 3.0);
        assert_relative_eq!(7.5_f64.mod_floor(2.0), 1.5);
        assert_relative_eq!(FloorDiv::div_floor(-7.5_f64, 2.0), -4.0);
        assert_relative_eq!((-7.5_f64).mod_floor(2.0), 0.5);
        assert_relative_eq!(7.5_f64.mod_floor(-2.0), -0.5);
        assert_relative_eq!(370.0_f64.mod_floor(360.0), 10.0);
    }

    #[test]
    fn float_zero_remainder_takes_divisor_sign() {
        let remainder = 4.0_f64.mod_floor(-2.0);
        assert!(remainder == 0.0 && remainder.is_sign_negative());
    }

    #[test]
    fn identity_holds() {
        for lhs in -20..=20 {
            for rhs in [-7, -3, -1, 1, 4, 9] {
                let (q, r) = i64::div_mod_floor(lhs, rhs);
                assert_eq!(rhs * q + r, lhs);
            }
        }
    }
}
