//! Functor type class - mapping over container values.
//!
//! A `Functor` can have a function applied to its inner value(s) while its
//! shape is preserved. No container implements `Functor` by hand: every
//! [`Monad`] is a `Functor` through the blanket implementation in this
//! module, where `map` is written once as
//!
//! ```text
//! fa.map(f) == fa.flat_map(|a| pure(f(a)))
//! ```
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.map(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.map(f).map(g) == fa.map(|x| g(f(x)))
//! ```
//!
//! Both follow from the monad laws of the underlying `flat_map`.
//!
//! # Examples
//!
//! ```rust
//! use catena::control::Optional;
//! use catena::typeclass::Functor;
//!
//! let some_value = Optional::Some(5);
//! assert_eq!(some_value.map(|n| n.to_string()), Optional::Some("5".to_string()));
//!
//! let nothing: Optional<i32> = Optional::Nothing;
//! assert_eq!(nothing.map(|n| n.to_string()), Optional::Nothing);
//! ```

use super::higher::TypeConstructor;
use super::monad::Monad;

/// A type class for types that can have a function mapped over their contents.
///
/// The function is `FnMut` because multi-element containers call it once
/// per element.
///
/// # Examples
///
/// ```rust
/// use catena::list;
/// use catena::typeclass::Functor;
///
/// let doubled = list![1, 2, 3].map(|n| n * 2);
/// assert_eq!(doubled.to_string(), "2 :: 4 :: 6 :: Nil");
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value(s) inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms each inner value
    fn map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B,
        B: Clone;

    /// Replaces every value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::control::Optional;
    /// use catena::typeclass::Functor;
    ///
    /// assert_eq!(Optional::Some(5).replace("replaced"), Optional::Some("replaced"));
    /// assert_eq!(Optional::<i32>::Nothing.replace("replaced"), Optional::Nothing);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone,
    {
        self.map(move |_| value.clone())
    }

    /// Discards the values inside the functor, keeping only its shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list;
    /// use catena::typeclass::Functor;
    ///
    /// assert_eq!(list![1, 2].void(), list![(), ()]);
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<M: Monad> Functor for M {
    #[inline]
    fn map<B, F>(self, mut function: F) -> M::WithType<B>
    where
        F: FnMut(M::Inner) -> B,
        B: Clone,
    {
        self.flat_map(move |value| <M as Monad>::pure(function(value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq)]
    struct Logged<A> {
        value: A,
        log: Vec<&'static str>,
    }

    impl<A> TypeConstructor for Logged<A> {
        type Inner = A;
        type WithType<B> = Logged<B>;
    }

    impl<A> Monad for Logged<A> {
        fn pure<B>(value: B) -> Logged<B> {
            Logged {
                value,
                log: Vec::new(),
            }
        }

        fn flat_map<B, F>(self, mut function: F) -> Logged<B>
        where
            F: FnMut(A) -> Logged<B>,
        {
            let Logged { value, mut log } = function(self.value);
            let mut combined = self.log;
            combined.append(&mut log);
            Logged {
                value,
                log: combined,
            }
        }
    }

    fn logged<A>(value: A, entry: &'static str) -> Logged<A> {
        Logged {
            value,
            log: vec![entry],
        }
    }

    #[rstest]
    fn derived_map_keeps_the_context() {
        assert_eq!(logged(2, "start").map(|n| n * 10), logged(20, "start"));
    }

    #[rstest]
    fn derived_map_identity_law() {
        let value = logged("a", "entry");
        assert_eq!(value.clone().map(|x| x), value);
    }

    #[rstest]
    fn derived_map_composition_law() {
        let function1 = |n: i32| n + 1;
        let function2 = |n: i32| n * 2;
        assert_eq!(
            logged(3, "x").map(function1).map(function2),
            logged(3, "x").map(|x| function2(function1(x)))
        );
    }

    #[rstest]
    fn replace_and_void() {
        assert_eq!(logged(1, "x").replace('z'), logged('z', "x"));
        assert_eq!(logged(1, "x").void(), logged((), "x"));
    }

    #[cfg(feature = "persistent")]
    #[rstest]
    fn list_map_preserves_order() {
        use crate::list;
        assert_eq!(list![1, 2, 3].map(|n| n + 1), list![2, 3, 4]);
    }

    #[cfg(feature = "persistent")]
    #[rstest]
    fn list_map_calls_function_front_to_back() {
        use crate::list;
        let mut seen = Vec::new();
        let _ = list![1, 2, 3].map(|n| {
            seen.push(n);
            n
        });
        assert_eq!(seen, vec![1, 2, 3]);
    }
}
