//! Combining two containers of the same type element by element.
//!
//! Combination follows the semigroup intuition: two present values are
//! merged with a binary function, and an absent side yields the other side.
//! Not every container has an agreed combine rule, so combining can fail
//! with [`UnsupportedCombinationError`].

use std::ops::Add;

use crate::error::UnsupportedCombinationError;

/// A container whose values can be combined pairwise.
///
/// # Examples
///
/// ```rust
/// use catena::combinator::Combinable;
/// use catena::control::Optional;
///
/// let longest = Optional::Some("pear").combine_with(Optional::Some("fig"), |left, right| {
///     if right.len() > left.len() { right } else { left }
/// });
/// assert_eq!(longest, Ok(Optional::Some("pear")));
/// ```
pub trait Combinable: Sized {
    /// The type of the values being combined.
    type Element;

    /// Combines `self` with `other`, merging two present values with
    /// `function`.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedCombinationError`] if the container has no
    /// combine rule.
    fn combine_with<F>(self, other: Self, function: F) -> Result<Self, UnsupportedCombinationError>
    where
        F: FnOnce(Self::Element, Self::Element) -> Self::Element;
}

/// Combines two containers, merging present values with `+`.
///
/// # Errors
///
/// Returns [`UnsupportedCombinationError`] if the container has no combine
/// rule.
///
/// # Examples
///
/// ```rust
/// use catena::combinator::combine;
/// use catena::control::Optional;
///
/// assert_eq!(combine(Optional::Some(2), Optional::Some(3)), Ok(Optional::Some(5)));
/// assert_eq!(combine(Optional::Some(2), Optional::Nothing), Ok(Optional::Some(2)));
/// assert_eq!(combine(Optional::<i32>::Nothing, Optional::Nothing), Ok(Optional::Nothing));
/// ```
pub fn combine<C>(this: C, other: C) -> Result<C, UnsupportedCombinationError>
where
    C: Combinable,
    C::Element: Add<Output = C::Element>,
{
    this.combine_with(other, Add::add)
}

/// Combines two containers, merging present values with `function`.
///
/// # Errors
///
/// Returns [`UnsupportedCombinationError`] if the container has no combine
/// rule.
///
/// # Examples
///
/// ```rust
/// use catena::combinator::combine_with;
/// use catena::control::Optional;
///
/// let product = combine_with(Optional::Some(4), Optional::Some(5), |a, b| a * b);
/// assert_eq!(product, Ok(Optional::Some(20)));
/// ```
pub fn combine_with<C, F>(this: C, other: C, function: F) -> Result<C, UnsupportedCombinationError>
where
    C: Combinable,
    F: FnOnce(C::Element, C::Element) -> C::Element,
{
    this.combine_with(other, function)
}

impl<T> Combinable for crate::control::Optional<T> {
    type Element = T;

    fn combine_with<F>(self, other: Self, function: F) -> Result<Self, UnsupportedCombinationError>
    where
        F: FnOnce(T, T) -> T,
    {
        use crate::control::Optional;

        Ok(match (self, other) {
            (Optional::Some(left), Optional::Some(right)) => Optional::Some(function(left, right)),
            (Optional::Some(value), Optional::Nothing) | (Optional::Nothing, Optional::Some(value)) => {
                Optional::Some(value)
            }
            (Optional::Nothing, Optional::Nothing) => Optional::Nothing,
        })
    }
}

/// Lists have no agreed combine rule; combining two lists always fails.
impl<T> Combinable for crate::persistent::List<T> {
    type Element = T;

    fn combine_with<F>(self, _other: Self, _function: F) -> Result<Self, UnsupportedCombinationError>
    where
        F: FnOnce(T, T) -> T,
    {
        Err(UnsupportedCombinationError { type_name: "List" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    mod optional {
        use super::*;
        use crate::control::Optional;

        #[rstest]
        #[case(Optional::Some(2), Optional::Some(3), Optional::Some(5))]
        #[case(Optional::Some(2), Optional::Nothing, Optional::Some(2))]
        #[case(Optional::Nothing, Optional::Some(3), Optional::Some(3))]
        #[case(Optional::Nothing, Optional::Nothing, Optional::Nothing)]
        fn test_combine(
            #[case] this: Optional<i32>,
            #[case] other: Optional<i32>,
            #[case] expected: Optional<i32>,
        ) {
            assert_eq!(combine(this, other), Ok(expected));
        }

        #[rstest]
        fn test_combine_with_is_not_called_for_single_value() {
            let result = combine_with(Optional::Some(1), Optional::Nothing, |_, _| unreachable!());
            assert_eq!(result, Ok(Optional::Some(1)));
        }

        #[rstest]
        fn test_combine_strings() {
            let result = combine_with(
                Optional::Some(String::from("foo")),
                Optional::Some(String::from("bar")),
                |left, right| left + &right,
            );
            assert_eq!(result, Ok(Optional::Some(String::from("foobar"))));
        }
    }

    #[rstest]
    fn test_combine_lists_is_unsupported() {
        use crate::list;

        let error = combine(list![1, 2], list![3]).unwrap_err();
        assert_eq!(error.type_name, "List");
    }
}
