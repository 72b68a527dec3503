//! Two-parameter monads - sequencing with a fixed secondary channel.
//!
//! Some containers carry a second, independent type parameter alongside the
//! value channel, most commonly an error. Their computations sequence on the
//! first parameter while the second rides along unchanged:
//!
//! ```text
//! Outcome<T, E>.flat_map(T -> Outcome<U, E>) -> Outcome<U, E>
//! ```
//!
//! Rust cannot make a trait generic over its own arity, so this is a separate
//! family of traits mirroring the one-parameter hierarchy:
//!
//! | one parameter | two parameters |
//! |---------------|----------------|
//! | [`TypeConstructor`](super::TypeConstructor) | [`TypeConstructor2`](super::TypeConstructor2) |
//! | [`Functor`](super::Functor) | [`Functor2`](super::Functor2) |
//! | [`Applicative`](super::Applicative) | [`Applicative2`](super::Applicative2) |
//! | [`Monad`](super::Monad) | [`Monad2`] |
//!
//! As with `Monad`, implementors supply only `pure` and `flat_map`.
//!
//! # Laws
//!
//! The same three monad laws hold, read over the first channel:
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! m.flat_map(Self::pure) == m
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use catena::control::Outcome;
//! use catena::typeclass::Monad2;
//!
//! fn checked_half(n: i32) -> Outcome<i32, String> {
//!     if n % 2 == 0 {
//!         Outcome::Success(n / 2)
//!     } else {
//!         Outcome::Failure(format!("{n} is odd"))
//!     }
//! }
//!
//! assert_eq!(Outcome::pure(12).flat_map(checked_half).flat_map(checked_half), Outcome::Success(3));
//! assert_eq!(
//!     Outcome::pure(6).flat_map(checked_half).flat_map(checked_half),
//!     Outcome::Failure("3 is odd".to_string())
//! );
//! ```

use super::higher::TypeConstructor2;

/// A type class for two-parameter types that sequence on their first
/// parameter.
///
/// See the module documentation for the laws.
pub trait Monad2: TypeConstructor2 + Sized {
    /// Lifts a value into the first channel.
    fn pure<C>(value: C) -> Self::WithFirst<C>;

    /// Applies a function to the first-channel value and flattens the result.
    ///
    /// The second channel is never transformed; a container holding only a
    /// second-channel value short-circuits without calling `function`.
    fn flat_map<C, F>(self, function: F) -> Self::WithFirst<C>
    where
        F: FnMut(Self::First) -> Self::WithFirst<C>;
}
