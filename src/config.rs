//! Creation-time settings shared by [`AvlMap`](crate::AvlMap) and
//! [`AvlSet`](crate::AvlSet).

/// The number of slots reserved when no (or a zero) reserve is configured.
pub const DEFAULT_RESERVE: usize = 8;

/// What an insert does when the key is already present.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum DuplicatePolicy {
    /// Leave the stored entry untouched and hand the offered one back.
    #[default]
    Reject,
    /// Store the offered key and value in place and hand the old ones back.
    Replace,
}

/// Configuration for creating a tree.
///
/// # Examples
///
/// ```
/// use avl_arena::{AvlMap, Config, DuplicatePolicy};
///
/// let config = Config::default()
///     .with_reserve(64)
///     .with_duplicates(DuplicatePolicy::Replace);
/// let map: AvlMap<u32, &str> = AvlMap::with_config(config);
/// assert_eq!(map.capacity(), 64);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// Slots reserved up front. Zero selects [`DEFAULT_RESERVE`].
    pub reserve: usize,
    /// How inserts treat a key that is already present.
    pub duplicates: DuplicatePolicy,
    /// Upper bound on arena slots; growth past it fails with
    /// [`Error::CapacityExhausted`](crate::Error::CapacityExhausted).
    ///
    /// `None` allows growth up to the addressable limit. Values below one are
    /// treated as one, and a larger `reserve` is clamped to it.
    pub max_capacity: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reserve: DEFAULT_RESERVE,
            duplicates: DuplicatePolicy::Reject,
            max_capacity: None,
        }
    }
}

impl Config {
    /// Set the initial reserve.
    #[must_use]
    pub const fn with_reserve(mut self, reserve: usize) -> Self {
        self.reserve = reserve;
        self
    }

    /// Set the duplicate-key policy.
    #[must_use]
    pub const fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Set the maximum arena capacity.
    #[must_use]
    pub const fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = Some(max_capacity);
        self
    }

    /// The reserve that will actually be used.
    pub(crate) const fn effective_reserve(&self) -> usize {
        if self.reserve == 0 { DEFAULT_RESERVE } else { self.reserve }
    }
}
