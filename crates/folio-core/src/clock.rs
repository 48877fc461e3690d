//! Menu-bar clock.

use folio_platform::SystemTime;
use folio_sdi::SurfaceRegistry;

use crate::layout::CLOCK;

/// Format a time as a 12-hour clock string, e.g. `2:05 PM`.
pub fn format_12h(t: &SystemTime) -> String {
    let hour = match t.hour % 12 {
        0 => 12,
        h => h,
    };
    let suffix = if t.hour < 12 { "AM" } else { "PM" };
    format!("{hour}:{:02} {suffix}", t.minute)
}

/// Runtime state for the menu-bar clock.
#[derive(Debug, Default)]
pub struct ClockDisplay {
    /// Cached clock string from the last tick.
    text: String,
}

impl ClockDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `now` into the clock surface. A missing surface only skips
    /// the write; the cached text is still refreshed.
    pub fn tick(&mut self, sdi: &mut SurfaceRegistry, now: &SystemTime) {
        self.text = format_12h(now);
        match sdi.get_mut(CLOCK) {
            Ok(obj) => obj.text.clone_from(&self.text),
            Err(e) => log::warn!("clock not rendered: {e}"),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
