//! Control structures for values that may be absent or may have failed.
//!
//! - [`Optional`]: A value that is either present or `Nothing`
//! - [`Outcome`]: A computation that ended in `Success` or `Failure`
//!
//! `Optional` is a one-parameter [`Monad`](crate::typeclass::Monad);
//! `Outcome` is a two-parameter [`Monad2`](crate::typeclass::Monad2) whose
//! error channel stays fixed along a chain.
//!
//! # Examples
//!
//! ```rust
//! use catena::control::{Optional, Outcome};
//!
//! fn lookup(key: &str) -> Optional<u32> {
//!     Optional::from_nullable(match key {
//!         "answer" => Some(42),
//!         _ => None,
//!     })
//! }
//!
//! fn require(key: &str) -> Outcome<u32, String> {
//!     lookup(key)
//!         .unwrap_or_error(format!("no value for {key}"))
//!         .into()
//! }
//!
//! assert_eq!(require("answer").to_string(), "Success(42)");
//! assert_eq!(require("question").to_string(), "Failure(no value for question)");
//! ```

mod optional;
mod outcome;

pub use optional::Optional;
pub use outcome::Outcome;
