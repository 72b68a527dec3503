//! Applicative over the first channel of a two-parameter type.
//!
//! Every `Monad2 + Clone` is an [`Applicative2`] through the blanket
//! implementation below. As in the one-parameter hierarchy, `apply` is called
//! on the value container, takes the function container, and sequences the
//! function container first:
//!
//! ```text
//! values.apply(functions) == functions.flat_map(|f| values.map(f))
//! ```
//!
//! So when both sides hold second-channel values, the one carried by
//! `functions` wins.
//!
//! # Examples
//!
//! ```rust
//! use catena::control::Outcome;
//! use catena::typeclass::Applicative2;
//!
//! let increment: Outcome<fn(i32) -> i32, String> = Outcome::Success(|n| n + 1);
//! assert_eq!(Outcome::Success(1).apply(increment), Outcome::Success(2));
//! ```

use super::functor2::Functor2;
use super::monad2::Monad2;

/// A type class for two-parameter types that support lifting values and
/// applying contained functions on the first channel.
pub trait Applicative2: Functor2 {
    /// Lifts a value into the first channel.
    fn pure<C>(value: C) -> Self::WithFirst<C>;

    /// Applies the function inside `functions` to the value inside `self`.
    fn apply<C, F>(self, functions: Self::WithFirst<F>) -> Self::WithFirst<C>
    where
        F: FnMut(Self::First) -> C,
        Self::WithFirst<F>: Monad2<First = F, WithFirst<C> = Self::WithFirst<C>>;
}

impl<M: Monad2 + Clone> Applicative2 for M {
    #[inline]
    fn pure<C>(value: C) -> M::WithFirst<C> {
        <M as Monad2>::pure(value)
    }

    fn apply<C, F>(self, functions: M::WithFirst<F>) -> M::WithFirst<C>
    where
        F: FnMut(M::First) -> C,
        M::WithFirst<F>: Monad2<First = F, WithFirst<C> = M::WithFirst<C>>,
    {
        functions.flat_map::<C, _>(move |function| Functor2::map(self.clone(), function))
    }
}
