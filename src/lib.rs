//! # catena
//!
//! Persistent cons lists, optional values and two-channel outcomes, all
//! sharing one Functor / Applicative / Monad hierarchy.
//!
//! ## Overview
//!
//! - **Persistent List**: [`List`](persistent::List), an immutable cons list
//!   with structural sharing and loop-based algorithms
//! - **Control Structures**: [`Optional`](control::Optional) and
//!   [`Outcome`](control::Outcome)
//! - **Type Classes**: `Functor`, `Applicative` and `Monad`, where `map` and
//!   `apply` are derived once from `pure` and `flat_map`
//! - **Combinators**: `flatten`, `combine` and `combine_with`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `persistent`: The persistent list
//! - `control`: `Optional` and `Outcome`
//! - `combinator`: `flatten` and `combine`
//! - `arc`: Share list nodes through `Arc` instead of `Rc`
//! - `serde`: `Serialize`/`Deserialize` implementations
//! - `full`: Enable all features
//!
//! All features except `serde` are enabled by default.
//!
//! ## Example
//!
//! ```rust
//! use catena::prelude::*;
//! use catena::list;
//!
//! let words = list!["persistent", "cons", "list"];
//! let lengths = words.map(str::len);
//! assert_eq!(lengths.to_string(), "10 :: 4 :: 4 :: Nil");
//!
//! let first_long = Optional::from_nullable(lengths.filter(|n| *n > 5).head().copied());
//! assert_eq!(first_long, Optional::Some(10));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use catena::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "combinator")]
    pub use crate::combinator::*;

    pub use crate::error::*;
}

pub mod error;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "combinator")]
pub mod combinator;
