//! Calendar domain model.
//!
//! # Responsibility
//! - Define the canonical event record, month value and grid cell shapes.
//! - Keep validation next to the data it protects.
//!
//! # Invariants
//! - Every stored event is identified by a stable `EventId`.
//! - Grid cells are derived values and are never persisted.

pub mod day_cell;
pub mod event;
pub mod month;
