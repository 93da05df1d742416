use super::AvlMap;
use crate::config::Config;
use crate::error::Error;
use crate::raw::RawAvlTree;

impl<K, V> AvlMap<K, V> {
    /// Creates an empty map with `capacity` slots reserved up front.
    ///
    /// A `capacity` of zero selects [`DEFAULT_RESERVE`](crate::DEFAULT_RESERVE).
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_arena::AvlMap;
    ///
    /// let map: AvlMap<i32, i32> = AvlMap::with_capacity(16);
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), 16);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the slots cannot be allocated.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(Config::default().with_reserve(capacity))
    }

    /// Creates an empty map from a [`Config`].
    ///
    /// # Panics
    ///
    /// Panics if the initial slots cannot be allocated. Use
    /// [`try_with_config`](Self::try_with_config) to handle that case.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        match Self::try_with_config(config) {
            Ok(map) => map,
            Err(error) => panic!("`AvlMap::with_config()` - {error}"),
        }
    }

    /// Creates an empty map from a [`Config`], reporting allocation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_arena::{AvlMap, Config};
    ///
    /// let map: Result<AvlMap<u8, u8>, _> = AvlMap::try_with_config(Config::default());
    /// assert_eq!(map.unwrap().capacity(), 8);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Alloc`] if the initial slots cannot be reserved.
    pub fn try_with_config(config: Config) -> Result<Self, Error> {
        Ok(AvlMap {
            raw: RawAvlTree::try_with_config(&config)?,
        })
    }

    /// Returns the number of slots in the arena, live or free.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Returns the height of the tree, zero when empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_arena::AvlMap;
    ///
    /// let map: AvlMap<u32, ()> = (0..7).map(|key| (key, ())).collect();
    /// assert_eq!(map.height(), 3);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn height(&self) -> usize {
        self.raw.height()
    }
}
