//! FOLIO_DESK core framework.
//!
//! A retro desktop shell for a portfolio: desktop icons that open pages,
//! links and overlay windows, a terminal pane that narrates every gesture,
//! a photo gallery, and a tiny audio studio. The crate never touches a
//! real document or device: it renders into a [`sdi::SurfaceRegistry`]
//! and consumes platform capabilities through [`platform`] traits.

// Re-exports from folio-types (foundation types).
pub use folio_types::config;
pub use folio_types::error;
pub use folio_types::input;
pub use folio_types::panel;

pub use folio_platform as platform;
pub use folio_sdi as sdi;
pub use folio_terminal as terminal;

pub mod action;
pub mod bindings;
pub mod clock;
pub mod context;
pub mod desktop;
pub mod gallery;
pub mod layout;
pub mod panels;
pub mod router;
pub mod schedule;
pub mod studio;

pub use desktop::{Desktop, Dispatch};

#[cfg(test)]
pub(crate) mod test_utils;
