//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends `Functor` with:
//!
//! - [`pure`](Applicative::pure): lift a value into the context.
//! - [`apply`](Applicative::apply): apply the function(s) held by one
//!   container to the value(s) held by another.
//!
//! Like `Functor`, it is never implemented by hand. Every `Monad + Clone`
//! receives it from the blanket implementation below, where `apply` is
//! written once as
//!
//! ```text
//! values.apply(functions) == functions.flat_map(|f| values.map(f))
//! ```
//!
//! Note the receiver: `apply` is called on the *value* container and takes
//! the *function* container as its argument. The function container is the
//! outer loop, so for lists every function is applied to every value, grouped
//! by function.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! v.apply(pure(|x| x)) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(x).apply(pure(f)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use catena::list;
//! use catena::persistent::List;
//! use catena::typeclass::Applicative;
//!
//! type Unary = fn(i32) -> i32;
//!
//! let functions: List<Unary> = list![(|x| x + 1) as Unary, (|x| x * 10) as Unary];
//! let result = list![1, 2].apply(functions);
//! assert_eq!(result.to_string(), "2 :: 3 :: 10 :: 20 :: Nil");
//! ```

use super::functor::Functor;
use super::monad::Monad;

/// A type class for types that support lifting values and applying
/// contained functions.
///
/// # Examples
///
/// ```rust
/// use catena::control::Optional;
/// use catena::typeclass::Applicative;
///
/// let lifted: Optional<i32> = <Optional<()> as Applicative>::pure(42);
/// assert_eq!(lifted, Optional::Some(42));
///
/// let add_one: Optional<fn(i32) -> i32> = Optional::Some(|x| x + 1);
/// assert_eq!(Optional::Some(5).apply(add_one), Optional::Some(6));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies the function(s) inside `functions` to the value(s) inside `self`.
    ///
    /// `functions` is sequenced first. If either container is empty, so is
    /// the result.
    ///
    /// # Arguments
    ///
    /// * `functions` - The same container type, holding functions
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::control::Optional;
    /// use catena::typeclass::Applicative;
    ///
    /// let missing: Optional<fn(i32) -> i32> = Optional::Nothing;
    /// assert_eq!(Optional::Some(5).apply(missing), Optional::Nothing);
    /// ```
    fn apply<B, F>(self, functions: Self::WithType<F>) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B,
        B: Clone,
        Self::WithType<F>: Monad<Inner = F, WithType<B> = Self::WithType<B>>;
}

impl<M: Monad + Clone> Applicative for M {
    #[inline]
    fn pure<B>(value: B) -> M::WithType<B> {
        <M as Monad>::pure(value)
    }

    fn apply<B, F>(self, functions: M::WithType<F>) -> M::WithType<B>
    where
        F: FnMut(M::Inner) -> B,
        B: Clone,
        M::WithType<F>: Monad<Inner = F, WithType<B> = M::WithType<B>>,
    {
        functions.flat_map::<B, _>(move |function| Functor::map(self.clone(), function))
    }
}
