//! Arena-backed AVL tree collections for Rust.
//!
//! This crate provides [`AvlMap`] and [`AvlSet`], ordered collections built on
//! a single self-balancing binary search tree engine. Instead of allocating
//! each node separately and linking them by pointer, every node lives in one
//! contiguous arena and refers to its children by index:
//!
//! - Removing an entry pushes its slot onto a free-slot stack; the next insert
//!   reuses the most recently freed slot.
//! - When no slot is free the arena grows (doubling, then in fixed steps for
//!   very large trees). Indices stay valid across growth.
//! - Growth is fallible: [`AvlMap::try_insert`] reports an [`Error`] and
//!   leaves the tree untouched if storage cannot be obtained.
//!
//! # Example
//!
//! ```
//! use avl_arena::{AvlMap, InsertStatus};
//!
//! let mut names = AvlMap::new();
//! for (id, name) in ["alice", "bob", "carl", "david", "eve"].into_iter().enumerate() {
//!     assert_eq!(names.insert(id, name), InsertStatus::Inserted);
//! }
//!
//! // Duplicates are rejected by default and the offered entry comes back.
//! assert_eq!(names.insert(2, "carol"), InsertStatus::Rejected { key: 2, value: "carol" });
//!
//! assert_eq!(names.remove(&3), Some("david"));
//! assert_eq!(names.get(&3), None);
//! assert_eq!(names.get(&2), Some(&"carl"));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`
//! - **Index-linked nodes** - `Option<Handle>` children cost four bytes each
//! - **Configurable duplicates** - Reject (default) or replace in place, see [`DuplicatePolicy`]
//! - **Bounded storage** - [`Config::max_capacity`] caps how far the arena may grow

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;
#[cfg(test)]
extern crate std;

mod config;
mod error;
mod raw;
mod status;

pub mod avl_map;
pub mod avl_set;

pub use avl_map::AvlMap;
pub use avl_set::AvlSet;
pub use config::{Config, DEFAULT_RESERVE, DuplicatePolicy};
pub use error::Error;
pub use status::InsertStatus;
