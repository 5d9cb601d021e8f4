//! Concurrent in-process state
//!
//! The store is the persistence collaborator of the scoring engine: it owns
//! the only mutable shared state (team and user score books, memberships)
//! and provides the locking primitives the accumulator's atomicity unit is
//! built on.

mod memory;

pub use memory::{LeaveOutcome, MemoryStore, ScoreBook, StoreError, TeamEntry, UserEntry};
