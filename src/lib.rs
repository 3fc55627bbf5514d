//! # nconstrain
//!
//! Numeric values that keep an invariant through arithmetic: "stay at least
//! N", "stay modulo N", "stay inside set S".
//!
//! A [`Constrained<T, C>`] pairs a value with a constraint `C`. Every
//! operation computes the raw result with `T`'s own arithmetic, runs it
//! through the constraint, and returns a new value under the same
//! constraint. Operands are never mutated.
//!
//! ```
//! use nconstrain::{at_least, modulo_n};
//!
//! let health = at_least(30, 0) - 45;
//! assert_eq!(health, 0);
//!
//! let minute = modulo_n(55, 60).unwrap() + 10;
//! assert_eq!(minute, 5);
//! assert_eq!(minute.to_string(), "<5 modulo 60>");
//! ```
//!
//! ## Crate layout
//!
//! - [`Constrained`]: The wrapper, its named `try_*` operations, operators,
//!   comparisons, and [`Operand`].
//! - [`constraint`]: The [`Constraint`] traits, [`ConstraintError`], and the
//!   provided constraints with their factory functions.
//! - [`num`]: Floor division and decimal rounding for the primitive types.
//!
//! ## Factories
//!
//! | Factory | Stored value |
//! |---|---|
//! | [`at_least(v, min)`](at_least) | `max(v, min)` |
//! | [`at_most(v, max)`](at_most) | `min(v, max)` |
//! | [`between(v, lo, hi)`](between) | `min(max(v, lo), hi)` |
//! | [`modulo_n(v, n)`](modulo_n) | `v mod n`, with the sign of `n` |
//! | [`rounded(v, digits)`](rounded) | `v` rounded to `digits` decimals |
//! | [`in_set(v, members)`](in_set) | `v`, if it is a member |
//! | [`custom(v, f, label)`](custom) | `f(v)` |
//!
//! ## Fallible and total constraints
//!
//! Clamping, modulo, and rounding never fail. They implement
//! [`TotalConstraint`], so values under them support `+`, `-`, `*`, `/`, `%`,
//! the bit operators, their compound assignments, and unary `-` and `!`.
//! A primitive on the left of an operator (`3 + x`) also works and yields a
//! value under `x`'s constraint. Either the literal or `x` must have a known
//! type, e.g. `3 + at_least(12i32, 10)` or `1.0_f64 / y`, since the left-hand
//! impls exist for every primitive.
//!
//! Set membership and custom transforms can reject a result. Values under
//! them use the named operations (`try_add`, `try_rsub`, `try_neg`, ...),
//! which every constraint supports and which return a
//! [`ConstraintResult`].
//!
//! ## Comparisons
//!
//! Equality, ordering, and hashing look only at the raw values, so
//! `at_least(5, 0) == at_most(5, 100)`.

pub mod constraint;
pub mod num;

mod constrained;

pub use constrained::{Constrained, Operand};
pub use constraint::{
    Constraint, ConstraintError, ConstraintResult, Describe, TotalConstraint, at_least, at_most,
    between, custom, in_set, modulo_n, rounded,
};
