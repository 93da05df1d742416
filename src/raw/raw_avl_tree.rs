use core::borrow::Borrow;
use core::cmp::Ordering;
use core::mem;

use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use super::arena::Arena;
use super::growth::GrowthPolicy;
use super::handle::Handle;
use super::node::Node;
use crate::config::{Config, DuplicatePolicy};
use crate::error::Error;
use crate::status::InsertStatus;

/// Ancestor stack for in-order walks. AVL height stays well below 32 for
/// any tree that fits in memory, so this rarely spills.
pub(crate) type Path = SmallVec<[Handle; 32]>;

/// The AVL engine backing `AvlMap` and `AvlSet`.
#[derive(Clone)]
pub(crate) struct RawAvlTree<K, V> {
    /// Every node, linked by handle.
    nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Number of live entries.
    len: usize,
    duplicates: DuplicatePolicy,
    growth: GrowthPolicy,
}

impl<K, V> RawAvlTree<K, V> {
    /// Creates an empty tree with `config.reserve` free slots.
    pub(crate) fn try_with_config(config: &Config) -> Result<Self, Error> {
        let growth = GrowthPolicy::new(config.max_capacity);
        let reserve = config.effective_reserve().min(growth.limit());
        let nodes = Arena::try_with_capacity(reserve).map_err(|source| Error::Alloc {
            requested: reserve,
            source,
        })?;

        Ok(Self {
            nodes,
            root: None,
            len: 0,
            duplicates: config.duplicates,
            growth,
        })
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    /// Height of the whole tree, zero when empty.
    pub(crate) fn height(&self) -> usize {
        usize::from(self.height_of(self.root))
    }

    /// Drops every entry but keeps the arena's storage.
    pub(crate) fn clear(&mut self) {
        trace!(len = self.len, capacity = self.nodes.capacity(), "clearing tree");
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    pub(crate) fn first_key_value(&self) -> Option<(&K, &V)> {
        let mut current = self.root?;
        while let Some(left) = self.nodes.get(current).left {
            current = left;
        }
        let node = self.nodes.get(current);
        Some((&node.key, &node.value))
    }

    pub(crate) fn last_key_value(&self) -> Option<(&K, &V)> {
        let mut current = self.root?;
        while let Some(right) = self.nodes.get(current).right {
            current = right;
        }
        let node = self.nodes.get(current);
        Some((&node.key, &node.value))
    }

    pub(crate) fn pop_first(&mut self) -> Option<(K, V)> {
        let root = self.root?;
        let (root, victim) = self.detach_min(root);
        self.root = root;
        self.len -= 1;
        Some(victim.into_entry())
    }

    pub(crate) fn pop_last(&mut self) -> Option<(K, V)> {
        let root = self.root?;
        let (root, victim) = self.detach_max(root);
        self.root = root;
        self.len -= 1;
        Some(victim.into_entry())
    }

    #[inline]
    fn height_of(&self, link: Option<Handle>) -> u8 {
        link.map_or(0, |handle| self.nodes.get(handle).height)
    }

    fn update_height(&mut self, handle: Handle) {
        let node = self.nodes.get(handle);
        let height = 1 + self.height_of(node.left).max(self.height_of(node.right));
        self.nodes.get_mut(handle).height = height;
    }

    /// `height(left) - height(right)`.
    fn balance_factor(&self, handle: Handle) -> i16 {
        let node = self.nodes.get(handle);
        i16::from(self.height_of(node.left)) - i16::from(self.height_of(node.right))
    }

    /// Lifts the left child of `handle` into its place and returns it.
    fn rotate_right(&mut self, handle: Handle) -> Handle {
        let pivot = self.nodes.get(handle).left.expect("`RawAvlTree::rotate_right()` - no left child!");
        let inner = self.nodes.get(pivot).right;
        self.nodes.get_mut(handle).left = inner;
        self.nodes.get_mut(pivot).right = Some(handle);
        self.update_height(handle);
        self.update_height(pivot);
        pivot
    }

    /// Lifts the right child of `handle` into its place and returns it.
    fn rotate_left(&mut self, handle: Handle) -> Handle {
        let pivot = self.nodes.get(handle).right.expect("`RawAvlTree::rotate_left()` - no right child!");
        let inner = self.nodes.get(pivot).left;
        self.nodes.get_mut(handle).right = inner;
        self.nodes.get_mut(pivot).left = Some(handle);
        self.update_height(handle);
        self.update_height(pivot);
        pivot
    }

    /// Recomputes the height of `handle` and restores the AVL balance of its
    /// subtree. Returns the subtree's new root.
    fn rebalance(&mut self, handle: Handle) -> Handle {
        self.update_height(handle);
        let balance = self.balance_factor(handle);

        if balance > 1 {
            let left = self.nodes.get(handle).left.expect("`RawAvlTree::rebalance()` - left-heavy without left child!");
            if self.balance_factor(left) < 0 {
                // Left-right case.
                let left = self.rotate_left(left);
                self.nodes.get_mut(handle).left = Some(left);
            }
            self.rotate_right(handle)
        } else if balance < -1 {
            let right = self.nodes.get(handle).right.expect("`RawAvlTree::rebalance()` - right-heavy without right child!");
            if self.balance_factor(right) > 0 {
                // Right-left case.
                let right = self.rotate_right(right);
                self.nodes.get_mut(handle).right = Some(right);
            }
            self.rotate_left(handle)
        } else {
            handle
        }
    }

    /// Unlinks the minimum of the subtree at `handle`, freeing its slot
    /// without dropping its contents. Returns the new subtree root and the
    /// detached node.
    fn detach_min(&mut self, handle: Handle) -> (Option<Handle>, Node<K, V>) {
        let node = self.nodes.get(handle);
        match node.left {
            None => {
                let right = node.right;
                (right, self.nodes.take(handle))
            }
            Some(left) => {
                let (left, victim) = self.detach_min(left);
                self.nodes.get_mut(handle).left = left;
                (Some(self.rebalance(handle)), victim)
            }
        }
    }

    /// Mirror image of [`Self::detach_min`].
    fn detach_max(&mut self, handle: Handle) -> (Option<Handle>, Node<K, V>) {
        let node = self.nodes.get(handle);
        match node.right {
            None => {
                let left = node.left;
                (left, self.nodes.take(handle))
            }
            Some(right) => {
                let (right, victim) = self.detach_max(right);
                self.nodes.get_mut(handle).right = right;
                (Some(self.rebalance(handle)), victim)
            }
        }
    }

    /// Grows the arena by one step of the growth policy.
    fn grow(&mut self) -> Result<(), Error> {
        let current = self.nodes.capacity();
        let Some(target) = self.growth.next_capacity(current) else {
            warn!(capacity = current, "node arena is at its capacity limit");
            return Err(Error::CapacityExhausted { capacity: current });
        };

        debug!(from = current, to = target, live = self.nodes.len(), "growing node arena");
        self.nodes.grow(target).map_err(|source| {
            warn!(from = current, to = target, "node arena reservation failed");
            Error::Alloc {
                requested: target,
                source,
            }
        })
    }
}

impl<K: Ord, V> RawAvlTree<K, V> {
    /// Returns the handle of the node whose key equals `key`.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let node = self.nodes.get(self.search(key)?);
        Some((&node.key, &node.value))
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.search(key)?;
        Some(&mut self.nodes.get_mut(handle).value)
    }

    /// Inserts `key` and `value`, growing the arena first if a new slot is
    /// needed. On error nothing has changed.
    pub(crate) fn try_insert(&mut self, key: K, value: V) -> Result<InsertStatus<K, V>, Error> {
        if self.nodes.is_full() && self.search(&key).is_none() {
            self.grow()?;
        }

        let (root, status) = self.insert_at(self.root, key, value);
        self.root = Some(root);
        Ok(status)
    }

    fn insert_at(&mut self, link: Option<Handle>, key: K, value: V) -> (Handle, InsertStatus<K, V>) {
        let Some(handle) = link else {
            self.len += 1;
            return (self.nodes.alloc(Node::leaf(key, value)), InsertStatus::Inserted);
        };

        let node = self.nodes.get(handle);
        match key.cmp(&node.key) {
            Ordering::Equal => {
                let status = match self.duplicates {
                    DuplicatePolicy::Reject => InsertStatus::Rejected { key, value },
                    DuplicatePolicy::Replace => {
                        let node = self.nodes.get_mut(handle);
                        InsertStatus::Replaced {
                            key: mem::replace(&mut node.key, key),
                            value: mem::replace(&mut node.value, value),
                        }
                    }
                };
                (handle, status)
            }
            Ordering::Less => {
                let left = node.left;
                let (left, status) = self.insert_at(left, key, value);
                self.nodes.get_mut(handle).left = Some(left);
                (self.rebalance(handle), status)
            }
            Ordering::Greater => {
                let right = node.right;
                let (right, status) = self.insert_at(right, key, value);
                self.nodes.get_mut(handle).right = Some(right);
                (self.rebalance(handle), status)
            }
        }
    }

    /// Removes the entry whose key equals `key`.
    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let root = self.root?;
        let (root, removed) = self.remove_at(root, key);
        if removed.is_some() {
            self.root = root;
            self.len -= 1;
        }
        removed
    }

    fn remove_at<Q>(&mut self, handle: Handle, key: &Q) -> (Option<Handle>, Option<(K, V)>)
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let node = self.nodes.get(handle);
        match key.cmp(node.key.borrow()) {
            Ordering::Less => {
                let Some(left) = node.left else {
                    return (Some(handle), None);
                };
                let (left, removed) = self.remove_at(left, key);
                if removed.is_none() {
                    return (Some(handle), None);
                }
                self.nodes.get_mut(handle).left = left;
                (Some(self.rebalance(handle)), removed)
            }
            Ordering::Greater => {
                let Some(right) = node.right else {
                    return (Some(handle), None);
                };
                let (right, removed) = self.remove_at(right, key);
                if removed.is_none() {
                    return (Some(handle), None);
                }
                self.nodes.get_mut(handle).right = right;
                (Some(self.rebalance(handle)), removed)
            }
            Ordering::Equal => match (node.left, node.right) {
                (Some(left), Some(right)) => {
                    // Keep the node in place and move the nearest neighbour from
                    // the taller side into it.
                    let victim = if self.height_of(Some(right)) >= self.height_of(Some(left)) {
                        let (right, victim) = self.detach_min(right);
                        self.nodes.get_mut(handle).right = right;
                        victim
                    } else {
                        let (left, victim) = self.detach_max(left);
                        self.nodes.get_mut(handle).left = left;
                        victim
                    };
                    let (victim_key, victim_value) = victim.into_entry();
                    let node = self.nodes.get_mut(handle);
                    let removed = (mem::replace(&mut node.key, victim_key), mem::replace(&mut node.value, victim_value));
                    (Some(self.rebalance(handle)), Some(removed))
                }
                (child, None) | (None, child) => (child, Some(self.nodes.take(handle).into_entry())),
            },
        }
    }
}

/// A double-ended in-order cursor over a `RawAvlTree`.
///
/// Each end keeps its own ancestor stack; `remaining` stops the two ends
/// before they cross.
pub(crate) struct RawIter<'a, K, V> {
    tree: &'a RawAvlTree<K, V>,
    front: Path,
    back: Path,
    remaining: usize,
}

impl<'a, K, V> RawIter<'a, K, V> {
    pub(crate) fn new(tree: &'a RawAvlTree<K, V>) -> Self {
        let mut iter = Self {
            tree,
            front: Path::new(),
            back: Path::new(),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree.root());
        iter.push_right_spine(tree.root());
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<Handle>) {
        while let Some(handle) = link {
            self.front.push(handle);
            link = self.tree.node(handle).left;
        }
    }

    fn push_right_spine(&mut self, mut link: Option<Handle>) {
        while let Some(handle) = link {
            self.back.push(handle);
            link = self.tree.node(handle).right;
        }
    }

    pub(crate) const fn remaining(&self) -> usize {
        self.remaining
    }

    pub(crate) fn next(&mut self) -> Option<&'a Node<K, V>> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.front.pop()?;
        let tree = self.tree;
        let node = tree.node(handle);
        self.push_left_spine(node.right);
        self.remaining -= 1;
        Some(node)
    }

    pub(crate) fn next_back(&mut self) -> Option<&'a Node<K, V>> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.back.pop()?;
        let tree = self.tree;
        let node = tree.node(handle);
        self.push_right_spine(node.left);
        self.remaining -= 1;
        Some(node)
    }
}

impl<K, V> Clone for RawIter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    impl<K: Ord, V> RawAvlTree<K, V> {
        /// Walks the whole tree and checks ordering, balance, cached heights
        /// and slot accounting. Returns the keys in order.
        fn assert_invariants(&self) -> Vec<&K> {
            fn walk<'a, K: Ord, V>(
                tree: &'a RawAvlTree<K, V>,
                link: Option<Handle>,
                seen: &mut BTreeSet<usize>,
                keys: &mut Vec<&'a K>,
            ) -> u8 {
                let Some(handle) = link else {
                    return 0;
                };
                assert!(seen.insert(handle.to_index()), "node reachable twice");
                let node = tree.node(handle);
                let left = walk(tree, node.left, seen, keys);
                keys.push(&node.key);
                let right = walk(tree, node.right, seen, keys);
                assert!(left.abs_diff(right) <= 1, "unbalanced node");
                assert_eq!(node.height, 1 + left.max(right), "stale height");
                node.height
            }

            let mut seen = BTreeSet::new();
            let mut keys = Vec::new();
            walk(self, self.root, &mut seen, &mut keys);

            assert!(keys.windows(2).all(|pair| pair[0] < pair[1]), "keys out of order");
            assert_eq!(keys.len(), self.len);
            assert_eq!(self.len, self.nodes.len());
            assert_eq!(self.len, self.nodes.capacity() - self.nodes.free_count());
            assert_eq!(self.root.is_none(), self.len == 0);
            keys
        }
    }

    fn tree<K: Ord, V>(config: Config) -> RawAvlTree<K, V> {
        RawAvlTree::try_with_config(&config).unwrap()
    }

    #[test]
    fn ascending_inserts_stay_balanced() {
        let mut t = tree(Config::default());
        for key in 0..1000_u32 {
            assert!(t.try_insert(key, key * 2).unwrap().is_inserted());
        }
        t.assert_invariants();
        // A perfectly packed tree of 1000 nodes has height 10.
        assert_eq!(t.height(), 10);
        assert_eq!(t.get_key_value(&500), Some((&500, &1000)));
    }

    #[test]
    fn left_right_and_right_left_cases() {
        let mut t = tree(Config::default());
        for key in [3, 1, 2] {
            let _ = t.try_insert(key, ()).unwrap();
        }
        assert_eq!(t.node(t.root().unwrap()).key, 2);
        t.assert_invariants();

        let mut t = tree(Config::default());
        for key in [1, 3, 2] {
            let _ = t.try_insert(key, ()).unwrap();
        }
        assert_eq!(t.node(t.root().unwrap()).key, 2);
        t.assert_invariants();
    }

    #[test]
    fn reject_leaves_entry_untouched() {
        let mut t = tree(Config::default());
        assert_eq!(t.try_insert(1, "a").unwrap(), InsertStatus::Inserted);
        assert_eq!(t.try_insert(1, "b").unwrap(), InsertStatus::Rejected { key: 1, value: "b" });
        assert_eq!(t.len(), 1);
        assert_eq!(t.get_key_value(&1), Some((&1, &"a")));
    }

    #[test]
    fn replace_swaps_entry_in_place() {
        let mut t = tree(Config::default().with_duplicates(DuplicatePolicy::Replace));
        let _ = t.try_insert(1, "a").unwrap();
        let _ = t.try_insert(2, "b").unwrap();
        assert_eq!(t.try_insert(1, "c").unwrap(), InsertStatus::Replaced { key: 1, value: "a" });
        assert_eq!(t.len(), 2);
        assert_eq!(t.get_key_value(&1), Some((&1, &"c")));
        t.assert_invariants();
    }

    #[test]
    fn two_child_removal_uses_taller_side() {
        let mut t = tree(Config::default());
        // Right subtree of 20 is taller, so the successor 25 moves up.
        for key in [20, 10, 30, 25, 40] {
            let _ = t.try_insert(key, ()).unwrap();
        }
        let root = t.root().unwrap();
        assert_eq!(t.remove_entry(&20), Some((20, ())));
        assert_eq!(t.root(), Some(root));
        assert_eq!(t.node(root).key, 25);
        t.assert_invariants();

        // Left subtree taller: the predecessor moves up.
        let mut t = tree(Config::default());
        for key in [20, 10, 30, 5, 15] {
            let _ = t.try_insert(key, ()).unwrap();
        }
        assert_eq!(t.remove_entry(&20), Some((20, ())));
        assert_eq!(t.node(t.root().unwrap()).key, 15);
        assert_eq!(t.assert_invariants(), [&5, &10, &15, &30]);
    }

    #[test]
    fn removal_that_rotates_with_balanced_sibling() {
        let mut t = tree(Config::default());
        for key in [4, 2, 6, 1, 3, 5, 7, 8] {
            let _ = t.try_insert(key, ()).unwrap();
        }
        for key in [1, 3, 2] {
            assert!(t.remove_entry(&key).is_some());
            t.assert_invariants();
        }
        assert_eq!(t.assert_invariants(), [&4, &5, &6, &7, &8]);
    }

    #[test]
    fn missing_key_changes_nothing() {
        let mut t: RawAvlTree<i32, ()> = tree(Config::default());
        assert_eq!(t.remove_entry(&1), None);
        for key in [2, 4, 6] {
            let _ = t.try_insert(key, ()).unwrap();
        }
        assert_eq!(t.remove_entry(&5), None);
        assert_eq!(t.len(), 3);
        t.assert_invariants();
    }

    #[test]
    fn freed_slot_is_reused_without_growth() {
        let mut t = tree(Config::default().with_reserve(4));
        for key in 0..4 {
            let _ = t.try_insert(key, ()).unwrap();
        }
        assert_eq!(t.capacity(), 4);
        let _ = t.remove_entry(&0);
        let _ = t.try_insert(9, ()).unwrap();
        assert_eq!(t.capacity(), 4);
        t.assert_invariants();
    }

    #[test]
    fn growth_doubles_and_keeps_entries() {
        let mut t = tree(Config::default().with_reserve(5));
        for key in 0..6 {
            let _ = t.try_insert(key, key).unwrap();
        }
        assert_eq!(t.capacity(), 10);
        for key in 0..6 {
            assert_eq!(t.get_key_value(&key), Some((&key, &key)));
        }
        t.assert_invariants();
    }

    #[test]
    fn duplicate_into_full_tree_does_not_grow() {
        let mut t = tree(Config::default().with_reserve(2));
        let _ = t.try_insert(1, ()).unwrap();
        let _ = t.try_insert(2, ()).unwrap();
        assert!(t.try_insert(2, ()).unwrap().is_duplicate());
        assert_eq!(t.capacity(), 2);
    }

    #[test]
    fn capacity_limit_leaves_tree_intact() {
        let mut t = tree(Config::default().with_reserve(2).with_max_capacity(3));
        for key in 0..3 {
            let _ = t.try_insert(key, ()).unwrap();
        }
        assert_eq!(t.try_insert(3, ()), Err(Error::CapacityExhausted { capacity: 3 }));
        assert_eq!(t.len(), 3);
        assert_eq!(t.capacity(), 3);
        assert_eq!(t.assert_invariants(), [&0, &1, &2]);

        let _ = t.remove_entry(&1);
        assert!(t.try_insert(3, ()).unwrap().is_inserted());
    }

    #[test]
    fn pop_ends_in_order() {
        let mut t = tree(Config::default());
        for key in [5, 3, 8, 1, 4, 7, 9] {
            let _ = t.try_insert(key, ()).unwrap();
        }
        assert_eq!(t.pop_first(), Some((1, ())));
        assert_eq!(t.pop_last(), Some((9, ())));
        assert_eq!(t.first_key_value(), Some((&3, &())));
        assert_eq!(t.last_key_value(), Some((&8, &())));
        t.assert_invariants();
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut t = tree(Config::default());
        for key in 0..20 {
            let _ = t.try_insert(key, ()).unwrap();
        }
        let capacity = t.capacity();
        t.clear();
        assert!(t.is_empty());
        assert_eq!(t.capacity(), capacity);
        assert_eq!(t.height(), 0);
        t.assert_invariants();
    }

    #[test]
    fn iterator_meets_in_the_middle() {
        let mut t = tree(Config::default());
        for key in 0..10 {
            let _ = t.try_insert(key, ()).unwrap();
        }
        let mut iter = RawIter::new(&t);
        let mut seen = Vec::new();
        while let Some(node) = iter.next() {
            seen.push(node.key);
            if let Some(node) = iter.next_back() {
                seen.push(node.key);
            }
        }
        assert_eq!(seen, [0, 9, 1, 8, 2, 7, 3, 6, 4, 5]);
        assert_eq!(iter.remaining(), 0);
    }

    #[derive(Clone, Debug)]
    enum Operation {
        Insert(i16),
        Remove(i16),
        PopFirst,
        PopLast,
    }

    fn strategy() -> impl Strategy<Value = Operation> {
        prop_oneof![
            6 => (-200_i16..200).prop_map(Operation::Insert),
            4 => (-200_i16..200).prop_map(Operation::Remove),
            1 => Just(Operation::PopFirst),
            1 => Just(Operation::PopLast),
        ]
    }

    proptest! {
        #[test]
        fn invariants_hold_after_every_operation(operations in prop::collection::vec(strategy(), 0..512)) {
            let mut t = tree(Config::default().with_reserve(1));
            let mut model = BTreeSet::new();

            for operation in operations {
                match operation {
                    Operation::Insert(key) => {
                        let status = t.try_insert(key, ()).unwrap();
                        prop_assert_eq!(status.is_inserted(), model.insert(key));
                    }
                    Operation::Remove(key) => {
                        prop_assert_eq!(t.remove_entry(&key).is_some(), model.remove(&key));
                    }
                    Operation::PopFirst => {
                        prop_assert_eq!(t.pop_first().map(|(key, ())| key), model.pop_first());
                    }
                    Operation::PopLast => {
                        prop_assert_eq!(t.pop_last().map(|(key, ())| key), model.pop_last());
                    }
                }

                let keys: Vec<i16> = t.assert_invariants().into_iter().copied().collect();
                let expected: Vec<i16> = model.iter().copied().collect();
                prop_assert_eq!(keys, expected);
            }
        }
    }
}
