//! Typed handlers and deferred actions.
//!
//! Elements are bound to a [`Handler`] once; dispatch matches on the enum
//! instead of reading markers off elements at event time.

use folio_types::input::WindowButton;
use folio_types::panel::Panel;

/// How a panel was closed. Only affects the logged wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloseReason {
    /// An explicit close control.
    Control,
    /// A click on the panel's backdrop, outside its content.
    Outside,
}

/// Behaviour bound to an (element, event kind) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    IconClick(usize),
    IconDoubleClick(usize),
    IconHover(usize),
    IconPress(usize),
    IconRelease(usize),
    IconLeave(usize),
    /// Logs only when the desktop itself is the click target.
    DesktopClick,
    DesktopContextMenu,
    TrashClick,
    TrashHover,
    CharacterClick,
    CharacterHover,
    /// Closes the panel only when its backdrop is the click target.
    BackdropClick(Panel),
    ClosePanel(Panel),
    ContactClick,
    WindowButtonClick(WindowButton),
    WindowButtonHover,
    CloseButtonHover,
    Record,
    Stop,
    Play,
    Sound(usize),
    Volume,
    ViewPhoto(usize),
    Shuffle,
    About,
}

/// Work queued on the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
    /// In-place navigation to a site path.
    Navigate(String),
    /// Open an external URL in a new tab.
    OpenTab(String),
    OpenPanel(Panel),
    /// Remove the pressed highlight from an icon.
    ClearHighlight(usize),
    /// Periodic clock refresh.
    ClockTick,
}
