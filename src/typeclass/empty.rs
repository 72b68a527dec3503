//! Canonical empty values.
//!
//! Containers with an "empty" variant expose it through [`Empty`]. The empty
//! value is canonical: it carries no payload and no allocation, so every
//! empty instance of a type is interchangeable with every other one.
//!
//! `Empty` is a weaker cousin of a monoid's identity. It says nothing about
//! combining values, only that a distinguished "no elements" value exists.

/// A type with a single, canonical empty value.
///
/// # Laws
///
/// ```text
/// Self::empty().is_empty() == true
/// ```
///
/// # Examples
///
/// ```rust
/// use catena::control::Optional;
/// use catena::persistent::List;
/// use catena::typeclass::Empty;
///
/// fn blank<T: Empty>() -> T {
///     T::empty()
/// }
///
/// let list: List<i32> = blank();
/// let optional: Optional<i32> = blank();
/// assert!(list.is_empty());
/// assert!(optional.is_empty());
/// ```
pub trait Empty {
    /// Returns the canonical empty value.
    fn empty() -> Self;

    /// Returns `true` if this value is the empty value.
    fn is_empty(&self) -> bool;
}
