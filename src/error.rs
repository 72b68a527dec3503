//! Error types for the data types in this crate.
//!
//! Each failing operation returns a small, dedicated error struct. The
//! [`CatenaError`] enum unifies them so that callers can chain operations on
//! different containers with `?`.

/// Returned when an operation needs more elements than a list holds.
///
/// Raised by [`List::first`], [`List::take_first`], [`List::drop_first`] and
/// [`List::split_first`] when they run into `Nil`.
///
/// # Examples
///
/// ```rust
/// use catena::error::EmptyListError;
///
/// let error = EmptyListError { method_name: "first" };
/// assert_eq!(format!("{error}"), "Cannot call `first()` on `Nil`");
/// ```
///
/// [`List::first`]: crate::persistent::List::first
/// [`List::take_first`]: crate::persistent::List::take_first
/// [`List::drop_first`]: crate::persistent::List::drop_first
/// [`List::split_first`]: crate::persistent::List::split_first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyListError {
    /// The name of the list method that reached `Nil`.
    pub method_name: &'static str,
}

impl std::fmt::Display for EmptyListError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "Cannot call `{}()` on `Nil`", self.method_name)
    }
}

impl std::error::Error for EmptyListError {}

/// Returned when a value is demanded from an `Optional` holding `Nothing`.
///
/// # Examples
///
/// ```rust
/// use catena::error::AbsentValueError;
///
/// let error = AbsentValueError { function_name: "try_unwrap" };
/// assert_eq!(
///     format!("{error}"),
///     "Unexpectedly found `Nothing` in a call to 'try_unwrap'"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AbsentValueError {
    /// The name of the function that found `Nothing`.
    pub function_name: &'static str,
}

impl std::fmt::Display for AbsentValueError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "Unexpectedly found `Nothing` in a call to '{}'",
            self.function_name
        )
    }
}

impl std::error::Error for AbsentValueError {}

/// Returned when two values of a type without a combine rule are combined.
///
/// # Examples
///
/// ```rust
/// use catena::error::UnsupportedCombinationError;
///
/// let error = UnsupportedCombinationError { type_name: "List" };
/// assert_eq!(format!("{error}"), "Combining two `List` values is not supported");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnsupportedCombinationError {
    /// The name of the type that cannot be combined.
    pub type_name: &'static str,
}

impl std::fmt::Display for UnsupportedCombinationError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "Combining two `{}` values is not supported",
            self.type_name
        )
    }
}

impl std::error::Error for UnsupportedCombinationError {}

/// Any error produced by this crate.
///
/// # Examples
///
/// ```rust
/// use catena::error::{CatenaError, EmptyListError};
///
/// fn first_even(values: &[i32]) -> Result<i32, CatenaError> {
///     let list: catena::persistent::List<i32> = values.iter().copied().collect();
///     let evens = list.filter(|value| value % 2 == 0);
///     Ok(*evens.first()?)
/// }
///
/// assert_eq!(first_even(&[1, 4, 6]), Ok(4));
/// assert_eq!(
///     first_even(&[1, 3]),
///     Err(CatenaError::EmptyList(EmptyListError { method_name: "first" }))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatenaError {
    /// A list operation reached `Nil`.
    EmptyList(EmptyListError),
    /// An `Optional` held `Nothing` where a value was required.
    AbsentValue(AbsentValueError),
    /// Two values could not be combined.
    UnsupportedCombination(UnsupportedCombinationError),
}

impl std::fmt::Display for CatenaError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyList(error) => write!(formatter, "{error}"),
            Self::AbsentValue(error) => write!(formatter, "{error}"),
            Self::UnsupportedCombination(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for CatenaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyList(error) => Some(error),
            Self::AbsentValue(error) => Some(error),
            Self::UnsupportedCombination(error) => Some(error),
        }
    }
}

impl From<EmptyListError> for CatenaError {
    fn from(error: EmptyListError) -> Self {
        Self::EmptyList(error)
    }
}

impl From<AbsentValueError> for CatenaError {
    fn from(error: AbsentValueError) -> Self {
        Self::AbsentValue(error)
    }
}

impl From<UnsupportedCombinationError> for CatenaError {
    fn from(error: UnsupportedCombinationError) -> Self {
        Self::UnsupportedCombination(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_empty_list_error_display() {
        let error = EmptyListError {
            method_name: "take_first",
        };
        assert_eq!(format!("{error}"), "Cannot call `take_first()` on `Nil`");
    }

    #[test]
    fn test_absent_value_error_display() {
        let error = AbsentValueError {
            function_name: "try_unwrap",
        };
        assert_eq!(
            format!("{error}"),
            "Unexpectedly found `Nothing` in a call to 'try_unwrap'"
        );
    }

    #[test]
    fn test_unsupported_combination_error_display() {
        let error = UnsupportedCombinationError { type_name: "List" };
        assert_eq!(
            format!("{error}"),
            "Combining two `List` values is not supported"
        );
    }

    #[test]
    fn test_catena_error_display_delegates() {
        let error = CatenaError::from(EmptyListError {
            method_name: "split_first",
        });
        assert_eq!(format!("{error}"), "Cannot call `split_first()` on `Nil`");
    }

    #[test]
    fn test_catena_error_source_is_inner_error() {
        let error = CatenaError::from(AbsentValueError {
            function_name: "try_unwrap",
        });
        let source = error.source().map(ToString::to_string);
        assert_eq!(
            source,
            Some("Unexpectedly found `Nothing` in a call to 'try_unwrap'".to_string())
        );
    }

    #[test]
    fn test_catena_error_from_conversions() {
        let combination = UnsupportedCombinationError { type_name: "List" };
        assert_eq!(
            CatenaError::from(combination),
            CatenaError::UnsupportedCombination(combination)
        );
    }
}
