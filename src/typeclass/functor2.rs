//! Functor over the first channel of a two-parameter type.
//!
//! Every [`Monad2`] is a [`Functor2`] through the blanket implementation in
//! this module. `map` touches the first parameter only; the second parameter
//! is fixed.
//!
//! # Examples
//!
//! ```rust
//! use catena::control::Outcome;
//! use catena::typeclass::Functor2;
//!
//! let success: Outcome<i32, String> = Outcome::Success(20);
//! assert_eq!(success.map(|n| n + 1), Outcome::Success(21));
//!
//! let failure: Outcome<i32, String> = Outcome::Failure("boom".to_string());
//! assert_eq!(failure.map(|n| n + 1), Outcome::Failure("boom".to_string()));
//! ```

use super::higher::TypeConstructor2;
use super::monad2::Monad2;

/// A type class for two-parameter types that can map their first channel.
///
/// # Laws
///
/// ```text
/// fa.map(|x| x) == fa
/// fa.map(f).map(g) == fa.map(|x| g(f(x)))
/// ```
pub trait Functor2: TypeConstructor2 {
    /// Applies a function to the first-channel value.
    fn map<C, F>(self, function: F) -> Self::WithFirst<C>
    where
        F: FnMut(Self::First) -> C;
}

impl<M: Monad2> Functor2 for M {
    #[inline]
    fn map<C, F>(self, mut function: F) -> M::WithFirst<C>
    where
        F: FnMut(M::First) -> C,
    {
        self.flat_map(move |value| <M as Monad2>::pure(function(value)))
    }
}
