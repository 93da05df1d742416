use super::handle::Handle;

/// One arena slot's worth of tree: links, cached height and the entry.
#[derive(Clone, Debug)]
pub(crate) struct Node<K, V> {
    pub(crate) left: Option<Handle>,
    pub(crate) right: Option<Handle>,
    // AVL height stays below 1.45 * log2(n + 2), so `u8` covers every arena size.
    pub(crate) height: u8,
    pub(crate) key: K,
    pub(crate) value: V,
}

impl<K, V> Node<K, V> {
    /// Creates a leaf holding `key` and `value`.
    pub(crate) const fn leaf(key: K, value: V) -> Self {
        Self {
            left: None,
            right: None,
            height: 1,
            key,
            value,
        }
    }

    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}
