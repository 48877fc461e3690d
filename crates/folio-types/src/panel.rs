//! Overlay panels that can be shown over the desktop.

use serde::{Deserialize, Serialize};

/// One of the fixed overlay windows on the desktop.
///
/// Panels are mutually independent: any subset may be open at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    /// Contact card opened from the character icon.
    Contact,
    /// Photo gallery grid.
    Gallery,
    /// Recorder and sound pad.
    MusicStudio,
    /// Trash contents popup.
    TrashPopup,
    /// Single-photo viewer (also hosts the About text).
    PhotoViewModal,
}

impl Panel {
    /// All panels in declaration order.
    pub const ALL: [Panel; 5] = [
        Panel::Contact,
        Panel::Gallery,
        Panel::MusicStudio,
        Panel::TrashPopup,
        Panel::PhotoViewModal,
    ];

    /// Name of the surface object holding this panel's window.
    pub fn surface_name(self) -> &'static str {
        match self {
            Self::Contact => "contact_window",
            Self::Gallery => "gallery_window",
            Self::MusicStudio => "music_window",
            Self::TrashPopup => "trash_popup",
            Self::PhotoViewModal => "photo_modal",
        }
    }

    /// Short human-readable title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Contact => "Contact",
            Self::Gallery => "Photo Gallery",
            Self::MusicStudio => "Music Studio",
            Self::TrashPopup => "Trash",
            Self::PhotoViewModal => "Photo Viewer",
        }
    }

    /// Parse a panel from its snake_case name (as used in scripts and config).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "contact" => Some(Self::Contact),
            "gallery" => Some(Self::Gallery),
            "music_studio" | "music" => Some(Self::MusicStudio),
            "trash_popup" | "trash" => Some(Self::TrashPopup),
            "photo_view_modal" | "modal" => Some(Self::PhotoViewModal),
            _ => None,
        }
    }
}
