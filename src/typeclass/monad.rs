//! Monad type class - sequencing computations within a context.
//!
//! `Monad` is the one trait a container implements to join the capability
//! hierarchy. It supplies exactly two primitives:
//!
//! - [`Monad::pure`]: lift a value into the container.
//! - [`Monad::flat_map`]: feed each contained value to a function that
//!   returns a new container, and flatten the results.
//!
//! Everything else is derived from these two, once, for every monad:
//! [`Functor::map`](super::Functor::map) and
//! [`Applicative::apply`](super::Applicative::apply) are provided by blanket
//! implementations over `Monad`.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! The derived `map` and `apply` satisfy the functor and applicative laws
//! whenever `flat_map` satisfies these three, so each implementation is
//! tested against them on its own.
//!
//! # Examples
//!
//! ```rust
//! use catena::control::Optional;
//! use catena::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Optional<i32> {
//!     Optional::from_nullable(text.parse::<i32>().ok().filter(|&n| n > 0))
//! }
//!
//! let result = Optional::pure("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Optional::pure(n * 2));
//! assert_eq!(result, Optional::Some(84));
//! ```

use super::higher::TypeConstructor;

/// A type class for types that support sequencing of computations.
///
/// Implementors provide [`pure`](Monad::pure) and
/// [`flat_map`](Monad::flat_map) and receive `map` and `apply` for free.
///
/// `flat_map` takes an `FnMut` because containers such as
/// [`List`](crate::persistent::List) call the function once per element.
/// The result element type must be `Clone`: persistent containers rebuild
/// nodes when they concatenate the intermediate results.
///
/// `Monad` is not a subtrait of [`Applicative`](crate::typeclass::Applicative):
/// `apply` is only derived for monads that are also `Clone`, so generic code
/// bounded by `M: Monad` alone cannot call `apply`, and a container of a
/// non-`Clone` value such as `Optional<Mutex<i32>>` has `flat_map` and `map`
/// but no `apply`.
///
/// # Examples
///
/// ```rust
/// use catena::list;
/// use catena::typeclass::Monad;
///
/// let pairs = list![1, 2].flat_map(|n| list![n, n * 10]);
/// assert_eq!(pairs.to_string(), "1 :: 10 :: 2 :: 20 :: Nil");
/// ```
pub trait Monad: TypeConstructor + Sized {
    /// Lifts a value into the minimal context of this monad.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::persistent::List;
    /// use catena::typeclass::Monad;
    ///
    /// let single: List<&str> = <List<i32> as Monad>::pure("one");
    /// assert_eq!(single.to_string(), "one :: Nil");
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies a function to the value(s) inside the monad and flattens the
    /// result.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes an inner value and returns a new monad
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::control::Optional;
    /// use catena::typeclass::Monad;
    ///
    /// let halved = Optional::Some(10).flat_map(|n| {
    ///     if n % 2 == 0 { Optional::Some(n / 2) } else { Optional::Nothing }
    /// });
    /// assert_eq!(halved, Optional::Some(5));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>,
        B: Clone;

    /// Sequences two monadic computations, discarding the values of the first.
    ///
    /// `next` is produced once per value of `self`; an empty `self` yields an
    /// empty result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::control::Optional;
    /// use catena::typeclass::Monad;
    ///
    /// assert_eq!(Optional::Some(5).then(Optional::Some("hello")), Optional::Some("hello"));
    /// assert_eq!(Optional::<i32>::Nothing.then(Optional::Some("hello")), Optional::Nothing);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        B: Clone,
        Self::WithType<B>: Clone,
    {
        self.flat_map(move |_| next.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// The smallest possible monad, used to check the trait in isolation.
    #[derive(Debug, Clone, PartialEq)]
    struct Identity<A>(A);

    impl<A> TypeConstructor for Identity<A> {
        type Inner = A;
        type WithType<B> = Identity<B>;
    }

    impl<A> Monad for Identity<A> {
        fn pure<B>(value: B) -> Identity<B> {
            Identity(value)
        }

        fn flat_map<B, F>(self, mut function: F) -> Identity<B>
        where
            F: FnMut(A) -> Identity<B>,
        {
            function(self.0)
        }
    }

    #[rstest]
    fn identity_left_identity() {
        let function = |n: i32| Identity(n + 1);
        assert_eq!(<Identity<()> as Monad>::pure(4).flat_map(function), function(4));
    }

    #[rstest]
    fn identity_right_identity() {
        let value = Identity("text");
        assert_eq!(
            value.clone().flat_map(<Identity<&str> as Monad>::pure),
            value
        );
    }

    #[rstest]
    fn identity_then_discards_first_value() {
        assert_eq!(Identity(1).then(Identity('x')), Identity('x'));
    }

    #[cfg(feature = "persistent")]
    #[rstest]
    fn list_then_repeats_next_per_element() {
        use crate::list;
        let result = list![1, 2, 3].then(list!['a', 'b']);
        assert_eq!(result, list!['a', 'b', 'a', 'b', 'a', 'b']);
    }

    #[cfg(feature = "control")]
    #[rstest]
    fn optional_flat_map_chains() {
        use crate::control::Optional;
        let result = Optional::Some(3)
            .flat_map(|n| Optional::Some(n * 3))
            .flat_map(|n| if n > 5 { Optional::Some(n) } else { Optional::Nothing });
        assert_eq!(result, Optional::Some(9));
    }

    #[cfg(feature = "control")]
    #[rstest]
    fn test_non_clone_contents_still_map_and_flat_map() {
        use crate::control::Optional;
        use crate::typeclass::Functor;
        use std::sync::Mutex;

        let guarded = Optional::Some(Mutex::new(4));
        let doubled = guarded
            .flat_map(|mutex| Optional::Some(mutex.into_inner().unwrap_or_default()))
            .map(|n| n * 2);
        assert_eq!(doubled, Optional::Some(8));
    }
}
