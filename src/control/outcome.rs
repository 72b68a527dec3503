//! Outcome type - the result of a computation that may fail.
//!
//! `Outcome<T, E>` is either `Success(T)` or `Failure(E)`. It is a
//! two-parameter monad over its success channel: `flat_map` continues with
//! the success value and passes a failure through untouched, so the error
//! type stays fixed along a chain.
//!
//! # Examples
//!
//! ```rust
//! use catena::control::Outcome;
//! use catena::typeclass::{Functor2, Monad2};
//!
//! fn parse(text: &str) -> Outcome<i32, String> {
//!     text.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled.to_string(), "Success(42)");
//!
//! let failed = parse("x").flat_map(|n| Outcome::Success(n + 1));
//! assert!(failed.is_failure());
//! ```

use std::fmt;

use crate::typeclass::{Monad2, TypeConstructor2};

/// The result of a computation: `Success` with a value or `Failure` with an
/// error.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the failure value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// A successful computation holding its value.
    Success(T),
    /// A failed computation holding its error.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Wraps a value in `Success`.
    #[inline]
    pub const fn pure(value: T) -> Self {
        Self::Success(value)
    }

    /// Returns `true` if this is a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::control::Outcome;
    ///
    /// let success: Outcome<i32, &str> = Outcome::Success(1);
    /// assert!(success.is_success());
    /// assert!(!success.is_failure());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the success value, if any.
    #[inline]
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure value, if any.
    #[inline]
    pub fn failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts into a standard `Result`.
    ///
    /// # Errors
    ///
    /// Returns the failure value as `Err`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(error) => write!(formatter, "Failure({error})"),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T, E> TypeConstructor2 for Outcome<T, E> {
    type First = T;
    type Second = E;
    type WithFirst<C> = Outcome<C, E>;
}

impl<T, E> Monad2 for Outcome<T, E> {
    #[inline]
    fn pure<C>(value: C) -> Outcome<C, E> {
        Outcome::Success(value)
    }

    #[inline]
    fn flat_map<C, F>(self, mut function: F) -> Outcome<C, E>
    where
        F: FnMut(T) -> Outcome<C, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_failure_short_circuits_with_same_error() {
        let outcome: Outcome<i32, String> = Outcome::Failure("bad input".to_string());
        let mut called = false;
        let result = outcome.flat_map(|n| {
            called = true;
            Outcome::Success(n * 2)
        });
        assert_eq!(result, Outcome::Failure("bad input".to_string()));
        assert!(!called);
    }

    #[rstest]
    #[case(Ok(1), Outcome::Success(1))]
    #[case(Err('e'), Outcome::Failure('e'))]
    fn test_result_conversion_roundtrip(
        #[case] result: Result<i32, char>,
        #[case] expected: Outcome<i32, char>,
    ) {
        let outcome = Outcome::from(result);
        assert_eq!(outcome, expected);
        assert_eq!(Result::from(outcome), result);
    }

    #[rstest]
    fn test_narrowing() {
        let success: Outcome<i32, &str> = Outcome::pure(3);
        assert_eq!(success.success(), Some(3));
        assert_eq!(success.failure(), None);

        let failure: Outcome<i32, &str> = Outcome::Failure("no");
        assert_eq!(failure.success(), None);
        assert_eq!(failure.failure(), Some("no"));
    }

    #[rstest]
    fn test_display() {
        assert_eq!(Outcome::<i32, &str>::Success(7).to_string(), "Success(7)");
        assert_eq!(Outcome::<i32, &str>::Failure("oops").to_string(), "Failure(oops)");
    }
}
