//! Type class traits shared by every container in this crate.
//!
//! The hierarchy is deliberately small:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and applying contained functions
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Empty`]: A canonical empty value
//!
//! ## Derived Operations
//!
//! A container joins the hierarchy by implementing [`Monad`] alone, that is
//! by supplying `pure` and `flat_map`. `map` and `apply` are then provided by
//! blanket implementations, written once in terms of those two primitives:
//!
//! ```text
//! map(f)      := flat_map(|a| pure(f(a)))
//! apply(fs)   := fs.flat_map(|f| self.map(f))
//! ```
//!
//! Concrete types never implement `Functor` or `Applicative` directly.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! Generic Associated Types (GAT) emulate them: [`TypeConstructor`] exposes
//! the element type and a way to swap it, which is enough to state the
//! signatures above generically.
//!
//! Types with a second, fixed parameter such as an error channel use the
//! parallel family [`TypeConstructor2`], [`Functor2`], [`Applicative2`] and
//! [`Monad2`].
//!
//! # Examples
//!
//! ```rust
//! use catena::control::Optional;
//! use catena::list;
//! use catena::typeclass::{Functor, Monad};
//!
//! // `map` comes from the blanket implementation over `Monad`.
//! assert_eq!(list![1, 2, 3].map(|n| n * 2), list![2, 4, 6]);
//! assert_eq!(Optional::Some("hi").map(str::len), Optional::Some(2));
//!
//! let chained = Optional::Some(3).flat_map(|n| Optional::Some(n + 1));
//! assert_eq!(chained, Optional::Some(4));
//! ```

mod applicative;
mod applicative2;
mod empty;
mod functor;
mod functor2;
mod higher;
mod monad;
mod monad2;

pub use applicative::Applicative;
pub use applicative2::Applicative2;
pub use empty::Empty;
pub use functor::Functor;
pub use functor2::Functor2;
pub use higher::{TypeConstructor, TypeConstructor2};
pub use monad::Monad;
pub use monad2::Monad2;
