//! Panel visibility controller.
//!
//! Tracks open/closed state for the overlay panels and mirrors it onto the
//! surface. Every `open` / `close` emits exactly one terminal line.

use std::collections::BTreeSet;

use folio_sdi::SurfaceRegistry;
use folio_terminal::LogKind;
use folio_types::error::Result;
use folio_types::panel::Panel;

use crate::action::CloseReason;
use crate::context::Context;

fn open_message(panel: Panel) -> &'static str {
    match panel {
        Panel::Contact => "Opening contact information...",
        Panel::Gallery => "Opening photo gallery interface...",
        Panel::MusicStudio => "Opening music recording interface...",
        Panel::TrashPopup => "Opening trash contents window...",
        Panel::PhotoViewModal => "Opening photo viewer...",
    }
}

fn close_message(panel: Panel, reason: CloseReason) -> &'static str {
    match (panel, reason) {
        (Panel::Contact, CloseReason::Control) => "User clicked close button on Contact window",
        (Panel::Gallery, CloseReason::Control) => {
            "User clicked red traffic light to close photo gallery"
        },
        (Panel::MusicStudio, CloseReason::Control) => "User closed Music Studio window",
        (Panel::TrashPopup, CloseReason::Control) => "User closed trash contents window",
        (Panel::PhotoViewModal, CloseReason::Control) => {
            "User clicked red traffic light to close photo viewer"
        },
        (Panel::Contact, CloseReason::Outside) => "User clicked outside contact window to close",
        (Panel::Gallery, CloseReason::Outside) => "User clicked outside gallery window to close",
        (Panel::MusicStudio, CloseReason::Outside) => "User clicked outside music window to close",
        (Panel::TrashPopup, CloseReason::Outside) => "User clicked outside popup to close",
        (Panel::PhotoViewModal, CloseReason::Outside) => {
            "User clicked outside photo viewer to close"
        },
    }
}

/// Open/closed state of every panel. All start closed.
#[derive(Debug, Default)]
pub struct PanelController {
    open: BTreeSet<Panel>,
}

impl PanelController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, panel: Panel) -> bool {
        self.open.contains(&panel)
    }

    /// Currently open panels in declaration order.
    pub fn open_panels(&self) -> impl Iterator<Item = Panel> + '_ {
        self.open.iter().copied()
    }

    /// Show a panel and log it. Returns `false` (after logging an error) if
    /// the panel's surface is missing.
    pub fn open(&mut self, ctx: &mut Context<'_>, panel: Panel) -> bool {
        if let Err(e) = self.set_visible(ctx.sdi, panel, true) {
            log::warn!("cannot open {panel:?}: {e}");
            ctx.log(
                format!("Error: {} element not found", panel.title()),
                LogKind::Error,
            );
            return false;
        }
        log::info!("Panel opened: {panel:?}");
        ctx.log(open_message(panel), LogKind::System);
        true
    }

    /// Hide a panel and log it. Returns `false` (after logging an error) if
    /// the panel's surface is missing.
    pub fn close(&mut self, ctx: &mut Context<'_>, panel: Panel, reason: CloseReason) -> bool {
        if let Err(e) = self.set_visible(ctx.sdi, panel, false) {
            log::warn!("cannot close {panel:?}: {e}");
            ctx.log(
                format!("Error: {} element not found", panel.title()),
                LogKind::Error,
            );
            return false;
        }
        log::info!("Panel closed: {panel:?} ({reason:?})");
        ctx.log(close_message(panel, reason), LogKind::Interaction);
        true
    }

    /// Change visibility without logging. Used by components that narrate
    /// the change themselves (the photo viewer).
    pub fn set_visible(&mut self, sdi: &mut SurfaceRegistry, panel: Panel, visible: bool) -> Result<()> {
        folio_sdi::helpers::set_visible(sdi, panel.surface_name(), visible)?;
        if visible {
            self.open.insert(panel);
        } else {
            self.open.remove(&panel);
        }
        Ok(())
    }
}
