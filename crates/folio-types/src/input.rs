//! Platform-agnostic input event types.
//!
//! Every host maps its native pointer input to these types. The core
//! framework never sees raw platform events or free-form element attributes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;
use crate::panel::Panel;

/// Buttons in the contact window's title-bar chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowButton {
    Close,
    Minimize,
    Maximize,
}

impl WindowButton {
    pub fn label(self) -> &'static str {
        match self {
            Self::Close => "close",
            Self::Minimize => "minimize",
            Self::Maximize => "maximize",
        }
    }
}

/// Typed identity of every interactive element on the desktop.
///
/// Indices refer to configuration order (`Icon`, `Sound`) or to display
/// slots in the gallery grid (`Photo`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// The desktop background area.
    Desktop,
    /// A configured desktop icon.
    Icon(usize),
    /// The trash can icon.
    Trash,
    /// The character icon that opens the contact card.
    Character,
    /// The full-screen backdrop behind a panel.
    Backdrop(Panel),
    /// The content area of a panel (inside its bounds).
    PanelContent(Panel),
    /// A chrome button of the contact window.
    WindowButton(WindowButton),
    /// Close control of the trash popup.
    ClosePopup,
    /// Close control of the music studio.
    CloseMusic,
    /// Close control of the gallery window.
    CloseGallery,
    /// Close control of the photo viewer.
    CloseModal,
    Record,
    Stop,
    Play,
    /// A sound pad button.
    Sound(usize),
    /// Master volume slider.
    VolumeSlider,
    /// A gallery grid slot.
    Photo(usize),
    /// Gallery shuffle toolbar button.
    Shuffle,
    /// Gallery About toolbar button.
    About,
}

impl Element {
    /// The element an event bubbles to after this one, if any.
    pub fn parent(self) -> Option<Element> {
        match self {
            Self::Icon(_) | Self::Trash | Self::Character => Some(Self::Desktop),
            Self::WindowButton(_) => Some(Self::PanelContent(Panel::Contact)),
            Self::ClosePopup => Some(Self::PanelContent(Panel::TrashPopup)),
            Self::CloseMusic
            | Self::Record
            | Self::Stop
            | Self::Play
            | Self::Sound(_)
            | Self::VolumeSlider => Some(Self::PanelContent(Panel::MusicStudio)),
            Self::CloseGallery | Self::Photo(_) | Self::Shuffle | Self::About => {
                Some(Self::PanelContent(Panel::Gallery))
            },
            Self::CloseModal => Some(Self::PanelContent(Panel::PhotoViewModal)),
            Self::PanelContent(p) => Some(Self::Backdrop(p)),
            Self::Desktop | Self::Backdrop(_) => None,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Desktop => write!(f, "desktop"),
            Self::Icon(i) => write!(f, "icon:{i}"),
            Self::Trash => write!(f, "trash"),
            Self::Character => write!(f, "character"),
            Self::Backdrop(p) => write!(f, "backdrop:{}", panel_key(*p)),
            Self::PanelContent(p) => write!(f, "content:{}", panel_key(*p)),
            Self::WindowButton(b) => write!(f, "button:{}", b.label()),
            Self::ClosePopup => write!(f, "close_popup"),
            Self::CloseMusic => write!(f, "close_music"),
            Self::CloseGallery => write!(f, "close_gallery"),
            Self::CloseModal => write!(f, "close_modal"),
            Self::Record => write!(f, "record"),
            Self::Stop => write!(f, "stop"),
            Self::Play => write!(f, "play"),
            Self::Sound(i) => write!(f, "sound:{i}"),
            Self::VolumeSlider => write!(f, "volume"),
            Self::Photo(i) => write!(f, "photo:{i}"),
            Self::Shuffle => write!(f, "shuffle"),
            Self::About => write!(f, "about"),
        }
    }
}

fn panel_key(p: Panel) -> &'static str {
    match p {
        Panel::Contact => "contact",
        Panel::Gallery => "gallery",
        Panel::MusicStudio => "music",
        Panel::TrashPopup => "trash",
        Panel::PhotoViewModal => "modal",
    }
}

impl FromStr for Element {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || FolioError::Script(format!("unknown element '{s}'"));
        let index = |v: &str| v.parse::<usize>().map_err(|_| bad());
        let panel = |v: &str| Panel::from_name(v).ok_or_else(bad);

        if let Some((head, arg)) = s.split_once(':') {
            return match head {
                "icon" => Ok(Self::Icon(index(arg)?)),
                "sound" => Ok(Self::Sound(index(arg)?)),
                "photo" => Ok(Self::Photo(index(arg)?)),
                "backdrop" => Ok(Self::Backdrop(panel(arg)?)),
                "content" => Ok(Self::PanelContent(panel(arg)?)),
                "button" => match arg {
                    "close" => Ok(Self::WindowButton(WindowButton::Close)),
                    "minimize" => Ok(Self::WindowButton(WindowButton::Minimize)),
                    "maximize" => Ok(Self::WindowButton(WindowButton::Maximize)),
                    _ => Err(bad()),
                },
                _ => Err(bad()),
            };
        }
        match s {
            "desktop" => Ok(Self::Desktop),
            "trash" => Ok(Self::Trash),
            "character" => Ok(Self::Character),
            "close_popup" => Ok(Self::ClosePopup),
            "close_music" => Ok(Self::CloseMusic),
            "close_gallery" => Ok(Self::CloseGallery),
            "close_modal" => Ok(Self::CloseModal),
            "record" => Ok(Self::Record),
            "stop" => Ok(Self::Stop),
            "play" => Ok(Self::Play),
            "volume" => Ok(Self::VolumeSlider),
            "shuffle" => Ok(Self::Shuffle),
            "about" => Ok(Self::About),
            _ => Err(bad()),
        }
    }
}

/// Kinds of pointer / control events an element can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Click,
    DoubleClick,
    /// Pointer entered the element (hover).
    Enter,
    /// Pointer left the element.
    Leave,
    /// Primary button pressed on the element.
    Down,
    /// Primary button released on the element.
    Up,
    /// Secondary-button / context-menu gesture.
    ContextMenu,
    /// A value control (slider) changed.
    Input,
}

impl FromStr for EventKind {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "click" => Ok(Self::Click),
            "dblclick" | "double_click" => Ok(Self::DoubleClick),
            "hover" | "enter" => Ok(Self::Enter),
            "leave" => Ok(Self::Leave),
            "down" => Ok(Self::Down),
            "up" => Ok(Self::Up),
            "contextmenu" | "context_menu" => Ok(Self::ContextMenu),
            "input" => Ok(Self::Input),
            _ => Err(FolioError::Script(format!("unknown event '{s}'"))),
        }
    }
}

/// A platform-agnostic input event delivered to the desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A pointer gesture aimed at `target`.
    Pointer { target: Element, kind: EventKind },
    /// A value control changed to `value`.
    Value { target: Element, value: i32 },
}

impl InputEvent {
    pub fn click(target: Element) -> Self {
        Self::Pointer {
            target,
            kind: EventKind::Click,
        }
    }

    pub fn target(&self) -> Element {
        match self {
            Self::Pointer { target, .. } | Self::Value { target, .. } => *target,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::Pointer { kind, .. } => *kind,
            Self::Value { .. } => EventKind::Input,
        }
    }
}
