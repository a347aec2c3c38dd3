//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls and pure scheduling functions into host APIs.
//! - Keep presentation/FFI layers decoupled from storage details.

pub mod event_service;
pub mod navigation;
pub mod seed;
