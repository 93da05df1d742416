use super::AvlSet;
use crate::AvlMap;
use crate::config::Config;
use crate::error::Error;

impl<T> AvlSet<T> {
    /// Creates an empty set with `capacity` slots reserved up front.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_arena::AvlSet;
    ///
    /// let set: AvlSet<i32> = AvlSet::with_capacity(32);
    /// assert_eq!(set.capacity(), 32);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the slots cannot be allocated.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        AvlSet {
            map: AvlMap::with_capacity(capacity),
        }
    }

    /// Creates an empty set from a [`Config`].
    ///
    /// # Panics
    ///
    /// Panics if the initial slots cannot be allocated.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        AvlSet {
            map: AvlMap::with_config(config),
        }
    }

    /// Creates an empty set from a [`Config`], reporting allocation failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] if the initial slots cannot be reserved.
    pub fn try_with_config(config: Config) -> Result<Self, Error> {
        Ok(AvlSet {
            map: AvlMap::try_with_config(config)?,
        })
    }

    /// Returns the number of slots in the arena, live or free.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }

    /// Returns the height of the tree, zero when empty.
    #[must_use]
    pub fn height(&self) -> usize {
        self.map.height()
    }
}
