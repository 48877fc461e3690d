//! Surface-backed terminal pane.

use folio_sdi::{SurfaceLine, SurfaceRegistry};

use crate::entry::LogEntry;
use crate::ring::LogRing;

/// Surface object that receives the terminal's rendered lines.
pub const TERMINAL_OUTPUT: &str = "terminal_output";

/// The terminal pane: a log ring plus the prompt rendered after it.
#[derive(Debug, Clone)]
pub struct TerminalPane {
    ring: LogRing,
    prompt: String,
    max_lines: usize,
}

impl TerminalPane {
    /// Create a pane that renders at most `max_lines` lines, cursor included.
    pub fn new(prompt: &str, max_lines: usize) -> Self {
        let max_lines = max_lines.max(2);
        Self {
            ring: LogRing::for_lines(max_lines),
            prompt: prompt.to_string(),
            max_lines,
        }
    }

    /// Append an entry and re-render.
    ///
    /// Never fails. If the output surface is missing the entry is dropped so
    /// the gesture that produced it still completes.
    pub fn append(&mut self, sdi: &mut SurfaceRegistry, entry: LogEntry) {
        if !sdi.contains(TERMINAL_OUTPUT) {
            log::warn!("terminal output missing, dropped: {}", entry.message);
            return;
        }
        log::debug!("terminal: {}", entry.line());
        self.ring.push(entry);
        self.sync(sdi);
    }

    /// Rendered lines: every entry followed by the cursor line.
    pub fn render_lines(&self) -> Vec<SurfaceLine> {
        self.ring
            .entries()
            .map(|e| SurfaceLine::new(e.line(), e.kind.class()))
            .chain(std::iter::once(self.cursor_line()))
            .collect()
    }

    fn cursor_line(&self) -> SurfaceLine {
        SurfaceLine::new(format!("{}_", self.prompt), "cursor-line")
    }

    /// Write the rendered lines to the output surface and scroll to the end.
    pub fn sync(&self, sdi: &mut SurfaceRegistry) {
        if let Ok(obj) = sdi.get_mut(TERMINAL_OUTPUT) {
            obj.lines = self.render_lines();
            obj.scroll_to_bottom(self.max_lines);
        }
    }

    pub fn ring(&self) -> &LogRing {
        &self.ring
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::LogKind;
    use folio_platform::SystemTime;

    fn entry(msg: &str, kind: LogKind) -> LogEntry {
        LogEntry::new(SystemTime::at(9, 15, 0), msg, kind)
    }

    fn surface() -> SurfaceRegistry {
        let mut sdi = SurfaceRegistry::new();
        sdi.create(TERMINAL_OUTPUT).visible = true;
        sdi
    }

    #[test]
    fn cursor_is_always_last() {
        let mut sdi = surface();
        let mut pane = TerminalPane::new("user@portfolio:~$ ", 20);
        pane.append(&mut sdi, entry("hello", LogKind::System));
        let lines = &sdi.get(TERMINAL_OUTPUT).unwrap().lines;
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "[09:15:00] hello");
        assert_eq!(lines[0].class, "system-log");
        assert_eq!(lines[1].text, "user@portfolio:~$ _");
        assert_eq!(lines[1].class, "cursor-line");
    }

    #[test]
    fn caps_at_twenty_lines() {
        let mut sdi = surface();
        let mut pane = TerminalPane::new("$ ", 20);
        for i in 0..50 {
            pane.append(&mut sdi, entry(&format!("line {i}"), LogKind::Interaction));
        }
        let obj = sdi.get(TERMINAL_OUTPUT).unwrap();
        assert_eq!(obj.lines.len(), 20);
        assert_eq!(obj.lines[0].text, "[09:15:00] line 31");
        assert_eq!(obj.lines[18].text, "[09:15:00] line 49");
        assert_eq!(obj.lines[19].text, "$ _");
        assert_eq!(obj.scroll_top, 0);
    }

    #[test]
    fn missing_surface_is_noop() {
        let mut sdi = SurfaceRegistry::new();
        let mut pane = TerminalPane::new("$ ", 20);
        pane.append(&mut sdi, entry("lost", LogKind::Error));
        assert!(pane.ring().is_empty());
        assert!(sdi.is_empty());
    }

    #[test]
    fn tiny_pane_keeps_one_entry() {
        let mut sdi = surface();
        let mut pane = TerminalPane::new("$ ", 1);
        assert_eq!(pane.max_lines(), 2);
        pane.append(&mut sdi, entry("a", LogKind::System));
        pane.append(&mut sdi, entry("b", LogKind::System));
        let lines = &sdi.get(TERMINAL_OUTPUT).unwrap().lines;
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "[09:15:00] b");
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        fn arb_kind() -> impl Strategy<Value = LogKind> {
            prop_oneof![
                Just(LogKind::Interaction),
                Just(LogKind::System),
                Just(LogKind::Success),
                Just(LogKind::Error),
            ]
        }

        proptest! {
            #[test]
            fn never_exceeds_cap_and_cursor_last(
                msgs in proptest::collection::vec(("[a-z ]{0,12}", arb_kind()), 0..80),
                max_lines in 2usize..30,
            ) {
                let mut sdi = surface();
                let mut pane = TerminalPane::new("$ ", max_lines);
                for (msg, kind) in &msgs {
                    pane.append(&mut sdi, entry(msg, *kind));
                    let lines = &sdi.get(TERMINAL_OUTPUT).unwrap().lines;
                    prop_assert!(lines.len() <= max_lines);
                    prop_assert_eq!(lines.last().unwrap().class.as_str(), "cursor-line");
                }
                prop_assert_eq!(pane.ring().len(), msgs.len().min(max_lines - 1));
            }
        }
    }
}
