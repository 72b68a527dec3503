//! Removing one level of monadic nesting.

use std::convert::identity;

use crate::typeclass::{Monad, TypeConstructor};

/// Flattens a monad of monads into a single monad.
///
/// Equivalent to `nested.flat_map(identity)`, so it works for any [`Monad`]
/// whose elements are containers of the same kind.
///
/// # Examples
///
/// ```rust
/// use catena::combinator::flatten;
/// use catena::control::Optional;
/// use catena::list;
/// use catena::persistent::List;
///
/// let nested: List<List<i32>> = list![list![1, 2], List::empty(), list![3]];
/// let flat: List<i32> = flatten(nested);
/// assert_eq!(flat.to_string(), "1 :: 2 :: 3 :: Nil");
///
/// assert_eq!(flatten(Optional::Some(Optional::Some(5))), Optional::Some(5));
/// assert_eq!(flatten(Optional::Some(Optional::<i32>::Nothing)), Optional::Nothing);
/// ```
pub fn flatten<M, N>(nested: M) -> N
where
    N: TypeConstructor,
    N::Inner: Clone,
    M: Monad<Inner = N, WithType<N::Inner> = N>,
{
    nested.flat_map::<N::Inner, _>(identity)
}
