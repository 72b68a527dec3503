//! Persistent (immutable) singly-linked list.
//!
//! This module provides [`List`], a cons list with structural sharing.
//!
//! # Overview
//!
//! A `List<T>` is either `Nil` or `Cons(value, rest)`. It provides:
//!
//! - O(1) prepend (`prepend`)
//! - O(1) head access (`first`, `head`)
//! - O(n) prefix drop that shares the suffix (`drop_first`, `tail`)
//! - O(n) concatenation that shares the right operand (`extend`)
//! - O(n) reverse, filter, interleave and monadic bind
//!
//! The length is not cached, so there is no O(1) `len`.
//!
//! All operations return new lists without modifying the original. Every
//! algorithm is a loop, so list length never translates into call-stack
//! depth, including when a list is dropped.
//!
//! # Examples
//!
//! ```rust
//! use catena::list;
//! use catena::persistent::List;
//!
//! let list = list![1, 2, 3];
//! assert_eq!(list.to_string(), "1 :: 2 :: 3 :: Nil");
//! assert_eq!(list.reverse().to_string(), "3 :: 2 :: 1 :: Nil");
//! assert_eq!(list.extend(&list![4, 5]).to_string(), "1 :: 2 :: 3 :: 4 :: 5 :: Nil");
//!
//! let empty: List<i32> = List::empty();
//! assert_eq!(empty.to_string(), "Nil");
//! ```
//!
//! # Structural Sharing
//!
//! ```text
//! list1:                     1 -> 2 -> 3 -> Nil
//! list2 = list1.prepend(0):  0 -> [1 -> 2 -> 3 -> Nil]   // shares list1
//! list3 = list2.drop_first(2): [2 -> 3 -> Nil]           // shares list1's tail
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use super::ReferenceCounter;
use crate::error::EmptyListError;
use crate::typeclass::{Empty, Monad, TypeConstructor};

/// Internal node structure for the persistent list.
///
/// A node is never mutated after construction.
struct Node<T> {
    /// The element stored in this node.
    element: T,
    /// Reference to the next node, `None` at the end of the list.
    next: Option<ReferenceCounter<Self>>,
}

/// A persistent (immutable) singly-linked list.
///
/// `Nil` is represented without allocation; every empty list equals the
/// associated constant [`List::NIL`].
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `empty`        | O(1)       |
/// | `prepend`      | O(1)       |
/// | `first`        | O(1)       |
/// | `drop_first`   | O(n)       |
/// | `take_first`   | O(n)       |
/// | `extend`       | O(n)       |
/// | `reverse`      | O(n)       |
/// | `filter`       | O(n)       |
/// | `clone`        | O(1)       |
///
/// # Examples
///
/// ```rust
/// use catena::persistent::List;
///
/// let list = List::of(1, [2, 3]);
/// assert_eq!(list.first(), Ok(&1));
/// ```
pub struct List<T> {
    /// Reference to the head node, `None` for `Nil`.
    head: Option<ReferenceCounter<Node<T>>>,
}

impl<T> List<T> {
    /// The canonical empty list.
    pub const NIL: Self = Self { head: None };

    /// Returns the canonical empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::persistent::List;
    ///
    /// let list: List<i32> = List::empty();
    /// assert!(list.is_empty());
    /// assert!(list.ptr_eq(&List::NIL));
    /// ```
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::NIL
    }

    /// Creates a list containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::persistent::List;
    ///
    /// assert_eq!(List::pure(42).to_string(), "42 :: Nil");
    /// ```
    #[inline]
    #[must_use]
    pub fn pure(element: T) -> Self {
        Self::NIL.prepend(element)
    }

    /// Creates a list from a first element followed by the rest, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::persistent::List;
    ///
    /// let list = List::of('a', ['b', 'c']);
    /// assert_eq!(list.to_string(), "a :: b :: c :: Nil");
    /// ```
    #[must_use]
    pub fn of<I>(head: T, rest: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_sequence(std::iter::once(head).chain(rest))
    }

    /// Creates a list holding the items of a sequence, in order.
    ///
    /// The whole input is materialized first; the list is then built from the
    /// back by prepending, so every element gets a new node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::persistent::List;
    ///
    /// let list = List::from_sequence(vec![1, 2, 3]);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn from_sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::build_from_vec(items.into_iter().collect())
    }

    /// Builds a list from a Vec using `Vec::pop()`, which visits the elements
    /// back to front without a separate reverse step.
    fn build_from_vec(elements: Vec<T>) -> Self {
        Self::build_onto(elements, None)
    }

    /// Prepends `elements`, in order, onto an existing chain of nodes.
    fn build_onto(mut elements: Vec<T>, tail: Option<ReferenceCounter<Node<T>>>) -> Self {
        let mut head = tail;
        while let Some(element) = elements.pop() {
            head = Some(ReferenceCounter::new(Node {
                element,
                next: head,
            }));
        }
        Self { head }
    }

    /// Returns a new list with `element` in front of this one.
    ///
    /// The whole of `self` becomes the tail of the new list.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list;
    ///
    /// let list = list![2, 3];
    /// let prepended = list.prepend(1);
    /// assert_eq!(prepended.to_string(), "1 :: 2 :: 3 :: Nil");
    /// assert_eq!(list.to_string(), "2 :: 3 :: Nil");
    /// ```
    #[inline]
    #[must_use]
    pub fn prepend(&self, element: T) -> Self {
        Self {
            head: Some(ReferenceCounter::new(Node {
                element,
                next: self.head.clone(),
            })),
        }
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyListError`] when called on `Nil`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list;
    /// use catena::persistent::List;
    ///
    /// assert_eq!(list![7, 8].first(), Ok(&7));
    /// assert!(List::<i32>::empty().first().is_err());
    /// ```
    #[inline]
    pub fn first(&self) -> Result<&T, EmptyListError> {
        self.head().ok_or(EmptyListError {
            method_name: "first",
        })
    }

    /// Returns a reference to the first element, or `None` for `Nil`.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.element)
    }

    /// Returns the list without its first `count` elements.
    ///
    /// The result shares the remaining suffix; no node is allocated.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyListError`] if the list has fewer than `count` elements.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list;
    ///
    /// let list = list![1, 2, 3];
    /// assert_eq!(list.drop_first(2).unwrap().to_string(), "3 :: Nil");
    /// assert!(list.drop_first(3).unwrap().is_empty());
    /// assert!(list.drop_first(4).is_err());
    /// ```
    pub fn drop_first(&self, count: usize) -> Result<Self, EmptyListError> {
        assert!(count >= 1, "drop_first requires a count of at least 1");
        let mut current = self.head.as_ref();
        for _ in 0..count {
            let node = current.ok_or(EmptyListError {
                method_name: "drop_first",
            })?;
            current = node.next.as_ref();
        }
        Ok(Self {
            head: current.cloned(),
        })
    }

    /// Returns the list without its first element.
    ///
    /// Same as `drop_first(1)`.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyListError`] when called on `Nil`.
    #[inline]
    pub fn tail(&self) -> Result<Self, EmptyListError> {
        self.drop_first(1)
    }

    /// Decomposes the list into its first element and the rest.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyListError`] when called on `Nil`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list;
    ///
    /// let xs = list![1, 2];
    /// let (first, rest) = xs.split_first().unwrap();
    /// assert_eq!(*first, 1);
    /// assert_eq!(rest.to_string(), "2 :: Nil");
    /// ```
    pub fn split_first(&self) -> Result<(&T, Self), EmptyListError> {
        let node = self.head.as_ref().ok_or(EmptyListError {
            method_name: "split_first",
        })?;
        Ok((
            &node.element,
            Self {
                head: node.next.clone(),
            },
        ))
    }

    /// Returns `true` if this list is `Nil`.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns `true` if both lists start at the same node.
    ///
    /// Any two empty lists are identical.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list;
    ///
    /// let list = list![1, 2];
    /// let same = list.clone();
    /// let equal = list![1, 2];
    /// assert!(list.ptr_eq(&same));
    /// assert!(!list.ptr_eq(&equal));
    /// ```
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.head, &other.head) {
            (None, None) => true,
            (Some(left), Some(right)) => ReferenceCounter::ptr_eq(left, right),
            _ => false,
        }
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> ListIterator<'_, T> {
        ListIterator {
            current: self.head.as_ref(),
        }
    }
}

impl<T: Clone> List<T> {
    /// Concatenates `other` after this list.
    ///
    /// Every node of `self` is rebuilt; `other` becomes the tail of the
    /// result and is shared, not copied. `Nil.extend(other)` returns `other`
    /// itself.
    ///
    /// # Complexity
    ///
    /// O(n) where n is the length of `self`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list;
    /// use catena::persistent::List;
    ///
    /// let right = list![3, 4];
    /// let joined = list![1, 2].extend(&right);
    /// assert_eq!(joined.to_string(), "1 :: 2 :: 3 :: 4 :: Nil");
    /// assert!(joined.drop_first(2).unwrap().ptr_eq(&right));
    ///
    /// assert!(List::empty().extend(&right).ptr_eq(&right));
    /// ```
    #[must_use]
    pub fn extend(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        let elements: Vec<T> = self.iter().cloned().collect();
        Self::build_onto(elements, other.head.clone())
    }

    /// Returns a new list holding the first `count` elements.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyListError`] if the list has fewer than `count` elements.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list;
    ///
    /// let list = list![1, 2, 3];
    /// assert_eq!(list.take_first(2).unwrap().to_string(), "1 :: 2 :: Nil");
    /// assert!(list.take_first(4).is_err());
    /// ```
    pub fn take_first(&self, count: usize) -> Result<Self, EmptyListError> {
        assert!(count >= 1, "take_first requires a count of at least 1");
        let elements: Vec<T> = self.iter().take(count).cloned().collect();
        if elements.len() < count {
            return Err(EmptyListError {
                method_name: "take_first",
            });
        }
        Ok(Self::build_from_vec(elements))
    }

    /// Returns a new list with the elements in reverse order.
    ///
    /// # Complexity
    ///
    /// O(n) time and space, in a single pass
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut result = Self::empty();
        for element in self {
            result = result.prepend(element.clone());
        }
        result
    }

    /// Returns the elements satisfying `predicate`, in order.
    ///
    /// Every kept element gets a new node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list;
    ///
    /// let list = list![1, 2, 3, 4, 5];
    /// assert_eq!(list.filter(|n| n % 2 == 1).to_string(), "1 :: 3 :: 5 :: Nil");
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self::build_from_vec(
            self.iter()
                .filter(|element| predicate(element))
                .cloned()
                .collect(),
        )
    }

    /// Returns the elements not satisfying `predicate`, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list;
    ///
    /// let list = list![1, 2, 3, 4, 5];
    /// assert_eq!(list.filter_not(|n| n % 2 == 1).to_string(), "2 :: 4 :: Nil");
    /// ```
    #[must_use]
    pub fn filter_not<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.filter(|element| !predicate(element))
    }

    /// Inserts `separator` between every pair of adjacent elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list;
    ///
    /// assert_eq!(list![1, 2, 3].intercalate(0).to_string(), "1 :: 0 :: 2 :: 0 :: 3 :: Nil");
    /// assert_eq!(list![1].intercalate(0).to_string(), "1 :: Nil");
    /// ```
    #[must_use]
    pub fn intercalate(&self, separator: T) -> Self {
        let mut iter = self.iter();
        let Some(first) = iter.next() else {
            return Self::empty();
        };

        let mut result = vec![first.clone()];
        for element in iter {
            result.push(separator.clone());
            result.push(element.clone());
        }

        Self::build_from_vec(result)
    }

    /// Applies `function` to each element and concatenates the results.
    ///
    /// This is the monadic bind for lists. `function` is called front to
    /// back, once per element. The list returned for the last element is
    /// shared as the tail of the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catena::list;
    ///
    /// let list = list![1, 2, 3];
    /// let result = list.flat_map(|n| list![n, n * 10]);
    /// assert_eq!(result.to_string(), "1 :: 10 :: 2 :: 20 :: 3 :: 30 :: Nil");
    /// ```
    #[must_use]
    pub fn flat_map<U, F>(self, function: F) -> List<U>
    where
        U: Clone,
        F: FnMut(T) -> List<U>,
    {
        let mut parts: Vec<List<U>> = self.into_iter().map(function).collect();
        let mut result = parts.pop().unwrap_or_default();
        while let Some(part) = parts.pop() {
            result = part.extend(&result);
        }
        result
    }
}

/// Builds a [`List`] from its elements, in order.
///
/// # Examples
///
/// ```rust
/// use catena::list;
/// use catena::persistent::List;
///
/// let list = list![1, 2, 3];
/// assert_eq!(list.to_string(), "1 :: 2 :: 3 :: Nil");
///
/// let empty: List<i32> = list![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::persistent::List::empty()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::persistent::List::from_sequence([$($element),+])
    };
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`List`].
pub struct ListIterator<'a, T> {
    current: Option<&'a ReferenceCounter<Node<T>>>,
}

impl<'a, T> Iterator for ListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_ref();
            &node.element
        })
    }
}

/// An owning iterator over elements of a [`List`].
///
/// Nodes that nothing else references are unwrapped and their elements
/// moved out; shared nodes have their elements cloned.
pub struct ListIntoIterator<T> {
    list: List<T>,
}

impl<T: Clone> Iterator for ListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.head.take()?;
        match ReferenceCounter::try_unwrap(node) {
            Ok(node) => {
                self.list.head = node.next;
                Some(node.element)
            }
            Err(shared) => {
                // `next` is cloned before `shared` is released, so releasing
                // the node never cascades into the rest of the list.
                self.list.head = shared.next.clone();
                Some(shared.element.clone())
            }
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for List<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
        }
    }
}

impl<T> Default for List<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

/// Releases uniquely owned nodes one at a time.
///
/// The derived drop would recurse once per node through `next`.
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            // `into_inner` hands the node to exactly one of several
            // concurrent droppers, so the last owner always keeps looping.
            match ReferenceCounter::into_inner(node) {
                Some(mut node) => current = node.next.take(),
                None => break,
            }
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_sequence(iter)
    }
}

impl<T: Clone> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = ListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        ListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = ListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

/// Hashes each element in order, followed by the element count so that no
/// list hashes as a prefix of another.
impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut count: usize = 0;
        for element in self {
            element.hash(state);
            count += 1;
        }
        count.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in self {
            write!(formatter, "{element:?} :: ")?;
        }
        write!(formatter, "Nil")
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in self {
            write!(formatter, "{element} :: ")?;
        }
        write!(formatter, "Nil")
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(List<i32>: Send, Sync);

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for List<T> {
    type Inner = T;
    type WithType<B> = List<B>;
}

impl<T: Clone> Monad for List<T> {
    #[inline]
    fn pure<B>(value: B) -> List<B> {
        List::<B>::pure(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> List<B>
    where
        F: FnMut(T) -> List<B>,
        B: Clone,
    {
        Self::flat_map(self, function)
    }
}

impl<T> Empty for List<T> {
    #[inline]
    fn empty() -> Self {
        Self::NIL
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for List<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self)
    }
}

#[cfg(feature = "serde")]
struct ListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> ListVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for ListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = List<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(List::build_from_vec(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for List<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ListVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
