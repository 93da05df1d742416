use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;

use crate::AvlMap;
use crate::avl_map::{IntoKeys, Keys};
use crate::error::Error;
use crate::status::InsertStatus;

mod capacity;

/// An ordered set based on an arena-backed AVL tree.
///
/// See [`AvlMap`]'s documentation for how storage is managed. An `AvlSet<T>`
/// is an `AvlMap<T, ()>`: the same engine with no value slot.
///
/// It is a logic error for an item to be modified in such a way that the
/// item's ordering relative to any other item, as determined by the [`Ord`]
/// trait, changes while it is in the set.
///
/// # Examples
///
/// ```
/// use avl_arena::AvlSet;
///
/// let mut names = AvlSet::new();
/// for name in ["alice", "bob", "carl", "david", "eve"] {
///     assert!(names.insert(name).is_inserted());
/// }
///
/// assert!(names.remove("carl"));
/// assert!(!names.contains("carl"));
/// assert_eq!(names.len(), 4);
///
/// let sorted: Vec<_> = names.iter().copied().collect();
/// assert_eq!(sorted, ["alice", "bob", "david", "eve"]);
/// ```
pub struct AvlSet<T> {
    map: AvlMap<T, ()>,
}

/// An iterator over the items of an `AvlSet`, in order.
///
/// This `struct` is created by the [`iter`] method on [`AvlSet`].
///
/// [`iter`]: AvlSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    inner: Keys<'a, T, ()>,
}

/// An owning iterator over the items of an `AvlSet`, in order.
///
/// This `struct` is created by the [`into_iter`] method on [`AvlSet`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<T> {
    inner: IntoKeys<T, ()>,
}

impl<T> AvlSet<T> {
    /// Makes a new, empty `AvlSet`.
    ///
    /// # Panics
    ///
    /// Panics if the initial slots cannot be allocated.
    #[must_use]
    pub fn new() -> Self {
        AvlSet { map: AvlMap::new() }
    }

    /// Clears the set, removing all items. The arena keeps its capacity.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns the number of items in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set contains no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the minimum item.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_arena::AvlSet;
    ///
    /// let set = AvlSet::from([3, 1, 2]);
    /// assert_eq!(set.first(), Some(&1));
    /// assert_eq!(set.last(), Some(&3));
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.map.first_key_value().map(|(item, ())| item)
    }

    /// Returns the maximum item.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.map.last_key_value().map(|(item, ())| item)
    }

    /// Removes and returns the minimum item.
    pub fn pop_first(&mut self) -> Option<T> {
        self.map.pop_first().map(|(item, ())| item)
    }

    /// Removes and returns the maximum item.
    pub fn pop_last(&mut self) -> Option<T> {
        self.map.pop_last().map(|(item, ())| item)
    }

    /// Gets an iterator that visits the items in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.map.keys() }
    }
}

impl<T: Ord> AvlSet<T> {
    /// Returns `true` if the set contains an item equal to `value`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.contains_key(value)
    }

    /// Returns a reference to the stored item equal to `value`.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.get_key_value(value).map(|(item, ())| item)
    }

    /// Adds an item to the set.
    ///
    /// With the default [`DuplicatePolicy::Reject`](crate::DuplicatePolicy::Reject)
    /// an item already present is left in place and `value` is handed back in
    /// [`InsertStatus::Rejected`].
    ///
    /// # Panics
    ///
    /// Panics if the arena needs to grow and cannot. Use
    /// [`try_insert`](Self::try_insert) to handle that case.
    pub fn insert(&mut self, value: T) -> InsertStatus<T> {
        self.map.insert(value, ())
    }

    /// Adds an item to the set, reporting allocation failure.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the arena needed to grow and could not. The set
    /// is unchanged in that case.
    pub fn try_insert(&mut self, value: T) -> Result<InsertStatus<T>, Error> {
        self.map.try_insert(value, ())
    }

    /// Removes an item from the set. Returns whether it was present.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.remove_entry(value).is_some()
    }

    /// Removes and returns the stored item equal to `value`.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.map.remove_entry(value).map(|(item, ())| item)
    }
}

impl<T: Clone> Clone for AvlSet<T> {
    fn clone(&self) -> Self {
        AvlSet { map: self.map.clone() }
    }
}

impl<T: PartialEq> PartialEq for AvlSet<T> {
    fn eq(&self, other: &AvlSet<T>) -> bool {
        self.map.eq(&other.map)
    }
}

impl<T: Eq> Eq for AvlSet<T> {}

impl<T: fmt::Debug> fmt::Debug for AvlSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for AvlSet<T> {
    fn default() -> Self {
        AvlSet::new()
    }
}

impl<T: Ord> FromIterator<T> for AvlSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = AvlSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for AvlSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.map.extend(iter.into_iter().map(|item| (item, ())));
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for AvlSet<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for AvlSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an owning iterator over the items of the set, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_arena::AvlSet;
    ///
    /// let set = AvlSet::from([2, 3, 1]);
    /// let items: Vec<_> = set.into_iter().collect();
    /// assert_eq!(items, [1, 2, 3]);
    /// ```
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.map.into_keys(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}
