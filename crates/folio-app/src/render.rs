//! Text and JSON rendering of the desktop state for the host.

use serde::Serialize;

use folio_core::Desktop;
use folio_core::gallery::ModalContent;
use folio_core::layout::CLOCK;
use folio_core::platform::Platform;
use folio_core::sdi::SurfaceLine;
use folio_core::studio::RecordingState;

/// What the host prints after a script run.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub clock: String,
    pub open_panels: Vec<String>,
    pub viewer: Option<ModalContent>,
    pub recording: RecordingState,
    pub lines: Vec<SurfaceLine>,
}

impl Snapshot {
    pub fn capture<P: Platform>(desktop: &Desktop<P>) -> Self {
        let clock = desktop
            .sdi()
            .get(CLOCK)
            .map(|o| o.text.clone())
            .unwrap_or_default();
        Self {
            clock,
            open_panels: desktop
                .panels()
                .open_panels()
                .map(|p| p.surface_name().to_string())
                .collect(),
            viewer: desktop.gallery().content().cloned(),
            recording: desktop.studio().state(),
            lines: desktop.terminal().render_lines(),
        }
    }

    /// Plain-text pane: the clock, then one terminal line per row.
    pub fn to_text(&self) -> String {
        let mut out = format!("[{}]", self.clock);
        if !self.open_panels.is_empty() {
            out.push_str(&format!(" open: {}", self.open_panels.join(", ")));
        }
        out.push('\n');
        for line in &self.lines {
            out.push_str(&line.text);
            out.push('\n');
        }
        out
    }
}
