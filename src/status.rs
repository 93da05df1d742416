/// The outcome of an insert.
///
/// Keys and values are never silently dropped: whatever the tree does not keep
/// is handed back to the caller.
///
/// # Examples
///
/// ```
/// use avl_arena::{AvlSet, InsertStatus};
///
/// let mut set = AvlSet::new();
/// assert!(set.insert("bob").is_inserted());
/// assert_eq!(set.insert("bob"), InsertStatus::Rejected { key: "bob", value: () });
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[must_use = "an insert may hand back a rejected or displaced entry"]
pub enum InsertStatus<K, V = ()> {
    /// The key was absent and a new entry now holds it.
    Inserted,
    /// The key was present and the offered entry took its place
    /// ([`DuplicatePolicy::Replace`](crate::DuplicatePolicy::Replace)).
    /// Carries the displaced entry.
    Replaced {
        /// The key that was stored before.
        key: K,
        /// The value that was stored before.
        value: V,
    },
    /// The key was present and the tree was left unchanged
    /// ([`DuplicatePolicy::Reject`](crate::DuplicatePolicy::Reject)).
    /// Carries the offered entry.
    Rejected {
        /// The key that was offered.
        key: K,
        /// The value that was offered.
        value: V,
    },
}

impl<K, V> InsertStatus<K, V> {
    /// Returns true if a new entry was created.
    pub const fn is_inserted(&self) -> bool {
        matches!(self, InsertStatus::Inserted)
    }

    /// Returns true if the insert found the key already present.
    pub const fn is_duplicate(&self) -> bool {
        !self.is_inserted()
    }

    /// Returns the entry handed back by the tree, if any.
    pub fn into_entry(self) -> Option<(K, V)> {
        match self {
            InsertStatus::Inserted => None,
            InsertStatus::Replaced { key, value } | InsertStatus::Rejected { key, value } => Some((key, value)),
        }
    }
}
