use super::handle::Handle;

/// Past this many slots the arena stops doubling and grows additively.
pub(crate) const LARGE_TREE_THRESHOLD: usize = 1 << 20;

/// Decides the next arena capacity once every slot is in use.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GrowthPolicy {
    limit: usize,
}

impl GrowthPolicy {
    /// The most slots any arena can address.
    pub(crate) const MAX_CAPACITY: usize = Handle::MAX + 1;

    /// `max_capacity` below one slot is raised to one.
    pub(crate) fn new(max_capacity: Option<usize>) -> Self {
        let limit = max_capacity.map_or(Self::MAX_CAPACITY, |max| max.clamp(1, Self::MAX_CAPACITY));
        Self { limit }
    }

    pub(crate) const fn limit(self) -> usize {
        self.limit
    }

    /// Returns the capacity to grow to from `current`, or `None` once the
    /// limit has been reached.
    pub(crate) fn next_capacity(self, current: usize) -> Option<usize> {
        if current >= self.limit {
            return None;
        }

        let doubled = current.saturating_mul(2);
        let next = if doubled <= LARGE_TREE_THRESHOLD {
            doubled.max(current + 1)
        } else {
            current.saturating_add(LARGE_TREE_THRESHOLD)
        };
        Some(next.min(self.limit))
    }
}
