//! Flutter bridge for the month calendar core.

pub mod api;
pub mod style;
