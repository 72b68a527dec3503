//! Integration tests for the combinators.

use catena::combinator::{Combinable, combine, combine_with, flatten};
use catena::control::Optional;
use catena::error::{CatenaError, UnsupportedCombinationError};
use catena::list;
use catena::persistent::List;
use rstest::rstest;

// =============================================================================
// flatten
// =============================================================================

#[rstest]
fn test_flatten_list_of_lists() {
    let nested: List<List<i32>> = list![list![1, 2], list![], list![3, 4, 5]];
    let flat: List<i32> = flatten(nested);
    assert_eq!(flat.to_string(), "1 :: 2 :: 3 :: 4 :: 5 :: Nil");
}

#[rstest]
fn test_flatten_shares_last_inner_list() {
    let last = list![9];
    let nested = list![list![1], last.clone()];
    let flat: List<i32> = flatten(nested);
    assert!(flat.tail().unwrap().ptr_eq(&last));
}

#[rstest]
#[case(Optional::Some(Optional::Some(1)), Optional::Some(1))]
#[case(Optional::Some(Optional::Nothing), Optional::Nothing)]
#[case(Optional::Nothing, Optional::Nothing)]
fn test_flatten_optional(#[case] nested: Optional<Optional<i32>>, #[case] expected: Optional<i32>) {
    assert_eq!(flatten(nested), expected);
}

// =============================================================================
// combine
// =============================================================================

#[rstest]
fn test_combine_scenarios() {
    assert_eq!(combine(Optional::Some(2), Optional::Some(3)), Ok(Optional::Some(5)));
    assert_eq!(combine(Optional::Some(2), Optional::Nothing), Ok(Optional::Some(2)));
    assert_eq!(
        combine(Optional::<i32>::Nothing, Optional::Nothing),
        Ok(Optional::Nothing)
    );
}

#[rstest]
fn test_combine_with_custom_function() {
    let result = combine_with(Optional::Some(7), Optional::Some(3), i32::max);
    assert_eq!(result, Ok(Optional::Some(7)));
}

#[rstest]
fn test_combine_is_associative_for_optional() {
    let a = Optional::Some(1);
    let b = Optional::Nothing;
    let c = Optional::Some(10);

    let left = combine(combine(a, b).unwrap(), c).unwrap();
    let right = combine(a, combine(b, c).unwrap()).unwrap();
    assert_eq!(left, right);
}

#[rstest]
fn test_combine_lists_is_unsupported() {
    let result = combine(list![1], list![2]);
    assert_eq!(
        result.unwrap_err(),
        UnsupportedCombinationError { type_name: "List" }
    );
}

#[rstest]
fn test_combine_error_converts_into_crate_error() {
    fn merge(left: List<i32>, right: List<i32>) -> Result<List<i32>, CatenaError> {
        Ok(left.combine_with(right, |a, b| a + b)?)
    }

    let error = merge(list![1], list![2]).unwrap_err();
    assert_eq!(error.to_string(), "Combining two `List` values is not supported");
}
