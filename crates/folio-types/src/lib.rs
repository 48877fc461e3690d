//! Foundation types for FOLIO_DESK.
//!
//! This crate contains the platform-agnostic types shared by all FOLIO_DESK
//! crates: overlay panels, typed interactive elements, pointer events,
//! desktop configuration, and error types.

pub mod config;
pub mod error;
pub mod input;
pub mod panel;
