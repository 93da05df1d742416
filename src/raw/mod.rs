mod arena;
mod free_list;
mod growth;
mod handle;
mod node;
mod raw_avl_tree;

pub(crate) use raw_avl_tree::{RawAvlTree, RawIter};
