//! Optional type - a value that may be absent.
//!
//! This module provides `Optional<T>`, which is either `Some(T)` or the
//! canonical absent value `Nothing`. It is a monad: `flat_map` runs the next
//! step only when a value is present, and `map`/`apply` follow from the
//! type class blanket implementations.
//!
//! `Optional` converts losslessly to and from `std::option::Option`, so it
//! can be introduced at any boundary with [`Optional::from_nullable`] and
//! left again with [`Optional::into_option`].
//!
//! # Examples
//!
//! ```rust
//! use catena::control::Optional;
//! use catena::typeclass::{Functor, Monad};
//!
//! let port = Optional::from_nullable(Some("8080"))
//!     .flat_map(|text| Optional::from_nullable(text.parse::<u16>().ok()))
//!     .map(|port| port + 1);
//! assert_eq!(port, Optional::Some(8081));
//! assert_eq!(port.to_string(), "Some(8081)");
//!
//! let missing: Optional<u16> = Optional::from_nullable(None);
//! assert_eq!(missing.to_string(), "Nothing");
//! ```

use std::fmt;

use crate::error::AbsentValueError;
use crate::typeclass::{Empty, Monad, TypeConstructor};

/// A value that is either present (`Some`) or absent (`Nothing`).
///
/// # Examples
///
/// ```rust
/// use catena::control::Optional;
///
/// let present = Optional::pure(3);
/// assert!(present.is_some());
/// assert_eq!(present.len(), 1);
///
/// let absent: Optional<i32> = Optional::empty();
/// assert!(absent.is_nothing());
/// assert_eq!(absent.len(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// The canonical absent value.
    #[default]
    Nothing,
    /// A present value.
    Some(T),
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Lifts a standard `Option` into an `Optional`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::control::Optional;
    ///
    /// assert_eq!(Optional::from_nullable(Some(1)), Optional::Some(1));
    /// assert_eq!(Optional::<i32>::from_nullable(None), Optional::Nothing);
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        value.map_or(Self::Nothing, Self::Some)
    }

    /// Wraps a value in `Some`.
    #[inline]
    pub const fn pure(value: T) -> Self {
        Self::Some(value)
    }

    /// Returns `Nothing`.
    #[inline]
    pub const fn empty() -> Self {
        Self::Nothing
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is `Nothing`.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Returns the number of contained values: 1 for `Some`, 0 for `Nothing`.
    #[inline]
    pub const fn len(&self) -> usize {
        match self {
            Self::Some(_) => 1,
            Self::Nothing => 0,
        }
    }

    /// Returns `true` if this is `Nothing`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.is_nothing()
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns a reference to the value, if present.
    #[inline]
    pub const fn get(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Returns the value, or `error` if it is absent.
    ///
    /// # Errors
    ///
    /// Returns `error` when called on `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::control::Optional;
    ///
    /// assert_eq!(Optional::Some(4).unwrap_or_error("missing"), Ok(4));
    /// assert_eq!(Optional::<i32>::Nothing.unwrap_or_error("missing"), Err("missing"));
    /// ```
    #[inline]
    pub fn unwrap_or_error<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Some(value) => Ok(value),
            Self::Nothing => Err(error),
        }
    }

    /// Returns the value, failing with the canonical absent-value error.
    ///
    /// # Errors
    ///
    /// Returns [`AbsentValueError`] when called on `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::control::Optional;
    ///
    /// let error = Optional::<i32>::Nothing.try_unwrap().unwrap_err();
    /// assert_eq!(
    ///     error.to_string(),
    ///     "Unexpectedly found `Nothing` in a call to 'try_unwrap'"
    /// );
    /// ```
    #[inline]
    pub fn try_unwrap(self) -> Result<T, AbsentValueError> {
        self.unwrap_or_error(AbsentValueError {
            function_name: "try_unwrap",
        })
    }

    /// Converts into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::Nothing => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::Nothing => write!(formatter, "Nothing"),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Optional<T> {
    type Inner = T;
    type WithType<B> = Optional<B>;
}

impl<T> Monad for Optional<T> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Some(value)
    }

    #[inline]
    fn flat_map<B, F>(self, mut function: F) -> Optional<B>
    where
        F: FnMut(T) -> Optional<B>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::Nothing => Optional::Nothing,
        }
    }
}

impl<T> Empty for Optional<T> {
    #[inline]
    fn empty() -> Self {
        Self::Nothing
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_nothing()
    }
}
