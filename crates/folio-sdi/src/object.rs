//! A single named surface object.

use serde::Serialize;

/// One rendered line inside a multi-line object (terminal, grid).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurfaceLine {
    pub text: String,
    /// Style class tag, e.g. `system-log`.
    pub class: String,
    /// Optional image reference (gallery thumbnails).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl SurfaceLine {
    pub fn new(text: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: class.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// A named render object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurfaceObject {
    pub visible: bool,
    /// Single text payload (clock, captions, status).
    pub text: String,
    /// Image reference shown by the object, if any.
    pub image: Option<String>,
    /// Ordered child lines.
    pub lines: Vec<SurfaceLine>,
    /// Transient pressed-state highlight.
    pub highlighted: bool,
    /// Whether the control accepts input.
    pub enabled: bool,
    /// Index of the first line scrolled into view.
    pub scroll_top: usize,
}

impl Default for SurfaceObject {
    fn default() -> Self {
        Self {
            visible: false,
            text: String::new(),
            image: None,
            lines: Vec::new(),
            highlighted: false,
            enabled: true,
            scroll_top: 0,
        }
    }
}

impl SurfaceObject {
    /// Scroll so the last line is in view for a viewport of `rows` lines.
    pub fn scroll_to_bottom(&mut self, rows: usize) {
        self.scroll_top = self.lines.len().saturating_sub(rows);
    }
}
