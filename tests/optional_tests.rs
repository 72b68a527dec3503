//! Unit tests for Optional.
//!
//! These tests cover conversion at the `Option` boundary, value extraction
//! with and without errors, and chaining through the type classes.

use catena::control::Optional;
use catena::error::{AbsentValueError, CatenaError};
use catena::typeclass::{Applicative, Empty, Functor, Monad};
use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_pure_and_empty() {
    assert_eq!(Optional::pure('x'), Optional::Some('x'));
    assert_eq!(Optional::<char>::empty(), Optional::Nothing);
    assert_eq!(<Optional<char> as Empty>::empty(), Optional::Nothing);
}

#[rstest]
#[case(Some("value"), true)]
#[case(None, false)]
fn test_from_nullable_boolean_view(#[case] input: Option<&str>, #[case] present: bool) {
    let optional = Optional::from_nullable(input);
    assert_eq!(optional.is_some(), present);
    assert_eq!(optional.is_nothing(), !present);
    assert_eq!(optional.len(), usize::from(present));
}

// =============================================================================
// Extraction
// =============================================================================

#[rstest]
fn test_unwrap_or_error_with_custom_error() {
    #[derive(Debug, PartialEq)]
    struct MissingConfig(&'static str);

    let absent: Optional<u16> = Optional::Nothing;
    assert_eq!(
        absent.unwrap_or_error(MissingConfig("port")),
        Err(MissingConfig("port"))
    );
    assert_eq!(Optional::Some(80_u16).unwrap_or_error(MissingConfig("port")), Ok(80));
}

#[rstest]
fn test_try_unwrap_reports_absent_value() {
    let absent: Optional<u16> = Optional::Nothing;
    assert_eq!(
        absent.try_unwrap(),
        Err(AbsentValueError {
            function_name: "try_unwrap"
        })
    );
}

#[rstest]
fn test_try_unwrap_converts_into_crate_error() {
    fn port(optional: Optional<u16>) -> Result<u16, CatenaError> {
        Ok(optional.try_unwrap()?)
    }

    assert_eq!(port(Optional::Some(8080)), Ok(8080));
    assert!(matches!(
        port(Optional::Nothing),
        Err(CatenaError::AbsentValue(_))
    ));
}

// =============================================================================
// Chaining
// =============================================================================

#[rstest]
fn test_chain_stops_at_first_nothing() {
    let mut steps = Vec::new();
    let result = Optional::Some(10)
        .flat_map(|n| {
            steps.push("first");
            if n > 5 { Optional::Nothing } else { Optional::Some(n) }
        })
        .flat_map(|n: i32| {
            steps.push("second");
            Optional::Some(n + 1)
        });
    assert_eq!(result, Optional::Nothing);
    assert_eq!(steps, vec!["first"]);
}

#[rstest]
fn test_map_and_apply_are_available() {
    let add: Optional<fn(i32) -> i32> = Optional::Some(|n| n + 100);
    assert_eq!(Optional::Some(1).map(|n| n * 2).apply(add), Optional::Some(102));
}

#[rstest]
fn test_option_interop_round_trip() {
    let option: Option<Vec<u8>> = Some(vec![1, 2]);
    let optional: Optional<Vec<u8>> = option.clone().into();
    let back: Option<Vec<u8>> = optional.into();
    assert_eq!(back, option);
}
