//! Generic combinators built on the type classes.
//!
//! - [`flatten`]: Remove one level of nesting from any monad
//! - [`combine`] / [`combine_with`]: Merge two containers pairwise
//! - [`Combinable`]: The per-container combine rule behind `combine`
//!
//! # Examples
//!
//! ```rust
//! use catena::combinator::{combine, flatten};
//! use catena::control::Optional;
//!
//! let nested = Optional::Some(Optional::Some(2));
//! assert_eq!(combine(flatten(nested), Optional::Some(3)), Ok(Optional::Some(5)));
//! ```

mod combine;
mod flatten;

pub use combine::{Combinable, combine, combine_with};
pub use flatten::flatten;
