//! Platform service abstractions for FOLIO_DESK.
//!
//! Every capability the desktop consumes (wall clock, page navigation,
//! microphone capture, audio output) is a trait here. Hosts provide
//! implementations; [`DesktopPlatform`] is the default `std` one.

pub mod audio;
mod services;

pub use services::*;
