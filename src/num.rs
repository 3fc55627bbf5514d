//! Numeric operations that the primitive types lack in the form constraints need.
//!
//! - [`FloorDiv`]: division rounded toward negative infinity, with a modulo
//!   whose sign follows the divisor.
//! - [`RoundDigits`]: rounding to a number of decimal digits, ties to even.
//!
//! Both traits are implemented for every primitive integer and float type.
//! Implement them for your own numeric types to use them with
//! [`ModuloN`](crate::constraint::ModuloN) and
//! [`Rounded`](crate::constraint::Rounded).

mod floor_div;
mod round_digits;

pub use floor_div::FloorDiv;
pub use round_digits::RoundDigits;
