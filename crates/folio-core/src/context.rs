//! Per-dispatch context handed to component operations.

use folio_platform::SystemTime;
use folio_sdi::SurfaceRegistry;
use folio_terminal::{LogEntry, LogKind, TerminalPane};

/// Mutable view of the shared render state for one event dispatch.
///
/// The timestamp is sampled once when the dispatch starts, so every line a
/// single gesture produces carries the same time.
pub struct Context<'a> {
    pub sdi: &'a mut SurfaceRegistry,
    pub terminal: &'a mut TerminalPane,
    pub now: SystemTime,
}

impl<'a> Context<'a> {
    pub fn new(sdi: &'a mut SurfaceRegistry, terminal: &'a mut TerminalPane, now: SystemTime) -> Self {
        Self { sdi, terminal, now }
    }

    /// Append a line to the terminal pane.
    pub fn log(&mut self, message: impl Into<String>, kind: LogKind) {
        self.terminal
            .append(self.sdi, LogEntry::new(self.now, message, kind));
    }
}
