//! Event store abstractions and implementations.
//!
//! # Responsibility
//! - Define the append-only event storage contract.
//! - Provide the in-memory store and the SQLite store adapter.
//!
//! # Invariants
//! - Stores only accept events built from validated drafts.
//! - Stores return semantic errors (`DuplicateId`) in addition to DB errors.
//!
//! Stores are single-writer. A host sharing one across threads must wrap it
//! in a lock.

pub mod event_repo;
pub mod sqlite_event_repo;
