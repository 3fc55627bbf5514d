/// Rounding to a fixed number of decimal digits.
///
/// Positive `digits` round to that many places after the decimal point,
/// zero rounds to the nearest integer, and negative `digits` round to tens,
/// hundreds, and so on. Ties go to the even neighbour.
///
/// Integers are unchanged for `digits >= 0`. When `10^-digits` does not fit
/// in the integer type the result is zero, and a result that would overflow
/// saturates at the type's bounds.
///
/// # Examples
///
/// ```
/// use nconstrain::num::RoundDigits;
///
/// assert_eq!(2.5_f64.round_digits(0), 2.0);
/// assert_eq!(3.14159_f64.round_digits(2), 3.14);
/// assert_eq!(1250i32.round_digits(-2), 1200);
/// assert_eq!(1350i32.round_digits(-2), 1400);
/// ```
pub trait RoundDigits {
    /// Rounds `self` to `digits` decimal digits.
    #[must_use]
    fn round_digits(self, digits: i32) -> Self;
}

macro_rules! round_digits_int {
    ($($t:ty),* $(,)?) => { $(
        impl RoundDigits for $t {
            fn round_digits(self, digits: i32) -> Self {
                if digits >= 0 {
                    return self;
                }
                let Some(unit) = (10 as $t).checked_pow(digits.unsigned_abs()) else {
                    return 0;
                };

                let quotient = self.div_euclid(unit);
                let remainder = self.rem_euclid(unit);
                let to_next = unit - remainder;
                let round_up = remainder > to_next || (remainder == to_next && quotient % 2 != 0);

                let quotient = if round_up { quotient + 1 } else { quotient };
                quotient.saturating_mul(unit)
            }
        }
    )* };
}

macro_rules! round_digits_float {
    ($($t:ty),* $(,)?) => { $(
        impl RoundDigits for $t {
            fn round_digits(self, digits: i32) -> Self {
                if !self.is_finite() {
                    return self;
                }
                let scale = (10.0 as $t).powi(digits.saturating_abs());
                if !scale.is_finite() {
                    // Too many digits to matter, or too few to keep anything.
                    return if digits > 0 { self } else { 0.0 * self };
                }

                let rounded = if digits >= 0 {
                    let scaled = self * scale;
                    if !scaled.is_finite() {
                        return self;
                    }
                    scaled.round_ties_even() / scale
                } else {
                    (self / scale).round_ties_even() * scale
                };
                if rounded.is_finite() { rounded } else { self }
            }
        }
    )* };
}

round_digits_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
round_digits_float!(f32, f64);
