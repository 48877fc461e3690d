//! Terminal log pane.
//!
//! The pane is a fake shell at the bottom of the desktop. Every interaction
//! appends a timestamped line to a bounded ring; the rendered output always
//! ends with a live prompt + cursor line that is never stored.

mod entry;
mod pane;
mod ring;

/// Kind of a log line (interaction, system, success, error).
pub use entry::LogKind;
/// A single immutable log line.
pub use entry::LogEntry;
/// Surface-backed pane that renders the ring.
pub use pane::{TERMINAL_OUTPUT, TerminalPane};
/// Bounded, insertion-ordered entry buffer.
pub use ring::LogRing;
