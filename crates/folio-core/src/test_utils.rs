//! Shared test utilities for folio-core component tests.

use folio_platform::SystemTime;
use folio_sdi::SurfaceRegistry;
use folio_terminal::{LogKind, TERMINAL_OUTPUT, TerminalPane};
use folio_types::config::DesktopConfig;
use rand_core::RngCore;

use crate::context::Context;

/// Surface + pane pair for component tests.
pub struct Harness {
    pub sdi: SurfaceRegistry,
    pub terminal: TerminalPane,
}

impl Harness {
    /// Harness with the full default desktop surface.
    pub fn new() -> Self {
        let mut sdi = SurfaceRegistry::new();
        crate::layout::populate_surface(&mut sdi, &DesktopConfig::default());
        Self {
            sdi,
            terminal: TerminalPane::new("$ ", 20),
        }
    }

    /// Harness with only the terminal output object.
    pub fn bare() -> Self {
        let mut sdi = SurfaceRegistry::new();
        sdi.create(TERMINAL_OUTPUT);
        Self {
            sdi,
            terminal: TerminalPane::new("$ ", 20),
        }
    }

    pub fn ctx(&mut self) -> Context<'_> {
        Context::new(&mut self.sdi, &mut self.terminal, SystemTime::at(10, 0, 0))
    }

    /// Logged messages, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.terminal
            .ring()
            .entries()
            .map(|e| e.message.clone())
            .collect()
    }

    /// Logged (message, kind) pairs, oldest first.
    pub fn entries(&self) -> Vec<(String, LogKind)> {
        self.terminal
            .ring()
            .entries()
            .map(|e| (e.message.clone(), e.kind))
            .collect()
    }
}

/// Deterministic xorshift generator for shuffle tests.
pub struct TestRng(pub u64);

impl RngCore for TestRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
