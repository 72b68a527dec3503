//! Persistent (immutable) data structures.
//!
//! This module provides [`List`], an immutable singly-linked cons list that
//! uses structural sharing to avoid copying:
//!
//! - prepending shares the whole original list as the new tail,
//! - concatenation rebuilds the left list and shares the right one,
//! - dropping a prefix is a pointer advance that shares the suffix.
//!
//! # Examples
//!
//! ```rust
//! use catena::list;
//!
//! let list = list![2, 3];
//! let longer = list.prepend(1);
//!
//! // The original list is preserved
//! assert_eq!(list.to_string(), "2 :: 3 :: Nil");
//! assert_eq!(longer.to_string(), "1 :: 2 :: 3 :: Nil");
//!
//! // ...and shared, not copied
//! assert!(longer.tail().unwrap().ptr_eq(&list));
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer used for list nodes.
///
/// When the `arc` feature is enabled (default), this is `std::sync::Arc`,
/// which makes lists `Send + Sync` for `Send + Sync` elements.
///
/// When the `arc` feature is disabled, this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod list;

pub use list::List;
pub use list::ListIntoIterator;
pub use list::ListIterator;

// =============================================================================
// Tests
// =============================================================================
