//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `List<_>` directly.
//! The traits in this module name "the same container, holding something
//! else" through a generic associated type, which is all that `Functor`,
//! `Applicative` and `Monad` need.
//!
//! Two families exist:
//!
//! - [`TypeConstructor`] for containers with one type parameter
//!   (`List<T>`, `Optional<T>`).
//! - [`TypeConstructor2`] for containers with a second, independent channel
//!   (`Outcome<T, E>`). Only the first parameter varies; the second stays
//!   fixed.
//!
//! # Example
//!
//! ```rust
//! use catena::persistent::List;
//! use catena::typeclass::TypeConstructor;
//!
//! fn assert_with_type<T>()
//! where
//!     T: TypeConstructor<Inner = i32, WithType<String> = List<String>>,
//! {
//! }
//!
//! assert_with_type::<List<i32>>();
//! ```

/// A trait representing a type constructor with one type parameter.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

/// A trait representing a type constructor with two type parameters, of
/// which only the first is ever replaced.
///
/// The second parameter is usually an error channel. Keeping it out of the
/// generic associated type is what fixes it across `map` and `flat_map`.
///
/// # Laws
///
/// `<F as TypeConstructor2>::WithFirst<F::First>` is `F`, and
/// `WithFirst<C>::Second` is always `Self::Second`.
///
/// # Example
///
/// ```rust
/// use catena::control::Outcome;
/// use catena::typeclass::TypeConstructor2;
///
/// fn assert_keeps_second<T>()
/// where
///     T: TypeConstructor2<First = i32, Second = String, WithFirst<bool> = Outcome<bool, String>>,
/// {
/// }
///
/// assert_keeps_second::<Outcome<i32, String>>();
/// ```
pub trait TypeConstructor2 {
    /// The type of the primary (success) channel.
    type First;

    /// The type of the secondary channel, fixed across transformations.
    type Second;

    /// The same type constructor with its first parameter replaced by `C`.
    type WithFirst<C>: TypeConstructor2<First = C, Second = Self::Second>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Cell<A>(A);

    impl<A> TypeConstructor for Cell<A> {
        type Inner = A;
        type WithType<B> = Cell<B>;
    }

    struct Tagged<A, Tag>(A, Tag);

    impl<A, Tag> TypeConstructor2 for Tagged<A, Tag> {
        type First = A;
        type Second = Tag;
        type WithFirst<C> = Tagged<C, Tag>;
    }

    #[rstest]
    fn cell_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Cell<i32>>();
    }

    #[rstest]
    fn cell_with_type_produces_correct_type() {
        fn transform<T: TypeConstructor<WithType<String> = Cell<String>>>(_value: T) -> Cell<String> {
            Cell(String::from("replaced"))
        }

        let result = transform(Cell(42));
        assert_eq!(result.0, "replaced");
    }

    #[rstest]
    fn with_type_chains_back_to_itself() {
        fn assert_chain<T>()
        where
            T: TypeConstructor<Inner = u8>,
            T::WithType<char>: TypeConstructor<Inner = char, WithType<u8> = Cell<u8>>,
        {
        }

        assert_chain::<Cell<u8>>();
    }

    #[rstest]
    fn tagged_with_first_preserves_second() {
        fn assert_second<T>()
        where
            T: TypeConstructor2<First = i32, Second = &'static str>,
            T::WithFirst<bool>: TypeConstructor2<First = bool, Second = &'static str>,
        {
        }

        assert_second::<Tagged<i32, &'static str>>();
        let tagged = Tagged(1, "tag");
        assert_eq!((tagged.0, tagged.1), (1, "tag"));
    }

    #[cfg(feature = "persistent")]
    #[rstest]
    fn list_implements_type_constructor() {
        use crate::persistent::List;

        fn assert_list<T>()
        where
            T: TypeConstructor<Inner = i32, WithType<bool> = List<bool>>,
        {
        }

        assert_list::<List<i32>>();
    }

    #[cfg(feature = "control")]
    #[rstest]
    fn outcome_implements_type_constructor2() {
        use crate::control::Outcome;

        fn assert_outcome<T>()
        where
            T: TypeConstructor2<First = i32, Second = String, WithFirst<u8> = Outcome<u8, String>>,
        {
        }

        assert_outcome::<Outcome<i32, String>>();
    }
}
