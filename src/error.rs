//! Errors raised when a tree cannot obtain storage.
//!
//! Missing keys and duplicate keys are ordinary results (`Option` and
//! [`InsertStatus`](crate::InsertStatus)), never errors.

use alloc::collections::TryReserveError;

use thiserror::Error;

/// The error returned when an arena cannot be created or grown.
///
/// A failed insert leaves the collection exactly as it was before the call.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The arena already holds the configured maximum number of slots.
    #[error("arena is at its capacity limit of {capacity} slots")]
    CapacityExhausted {
        /// The capacity that could not be exceeded.
        capacity: usize,
    },

    /// The allocator refused to provide storage for the arena.
    #[error("failed to reserve an arena of {requested} slots")]
    Alloc {
        /// The total slot count that was requested.
        requested: usize,
        /// The underlying reservation failure.
        #[source]
        source: TryReserveError,
    },
}
