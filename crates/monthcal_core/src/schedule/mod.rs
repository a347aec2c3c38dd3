//! Pure scheduling algorithms.
//!
//! # Responsibility
//! - Month grid generation, same-day conflict detection, time formatting.
//!
//! # Invariants
//! - Every function here is deterministic and free of I/O and global state.

pub mod conflict;
pub mod grid;
pub mod labels;
pub mod time;
