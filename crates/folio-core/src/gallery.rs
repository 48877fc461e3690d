//! Photo gallery: a shuffleable thumbnail grid and a single-slot viewer.

use rand_core::RngCore;
use serde::Serialize;

use folio_terminal::LogKind;
use folio_types::config::PhotoConfig;
use folio_types::input::{Element, EventKind};
use folio_types::panel::Panel;

use crate::action::{CloseReason, Handler};
use crate::bindings::BindingTable;
use crate::context::Context;
use crate::layout::{GALLERY_GRID, MODAL_IMAGE, MODAL_INFO, MODAL_TITLE};
use crate::panels::PanelController;

const ABOUT_TITLE: &str = "About Photo Gallery";
const ABOUT_LINES: &[&str] = &[
    "Mac OS X Photo Gallery",
    "A nostalgic recreation of early 2000s Mac photo management software.",
    "Features the classic Aqua interface with brushed metal styling.",
    "Current Features:",
    "- View photos in full-size modal",
    "- Shuffle gallery layout",
];

/// A photo in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PhotoEntry {
    pub source_ref: String,
    pub display_name: String,
}

impl From<&PhotoConfig> for PhotoEntry {
    fn from(p: &PhotoConfig) -> Self {
        Self {
            source_ref: p.src.clone(),
            display_name: p.name.clone(),
        }
    }
}

/// What the viewer's single content slot currently holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ModalContent {
    Photo(PhotoEntry),
    About,
}

/// Gallery state. Photos are fixed; only their display order changes.
#[derive(Debug)]
pub struct Gallery {
    photos: Vec<PhotoEntry>,
    /// Display slot -> index into `photos`.
    order: Vec<usize>,
    content: Option<ModalContent>,
}

impl Gallery {
    pub fn new(photos: Vec<PhotoEntry>) -> Self {
        let order = (0..photos.len()).collect();
        Self {
            photos,
            order,
            content: None,
        }
    }

    pub fn from_config(photos: &[PhotoConfig]) -> Self {
        Self::new(photos.iter().map(PhotoEntry::from).collect())
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Photos in display order.
    pub fn displayed(&self) -> impl Iterator<Item = &PhotoEntry> {
        self.order.iter().map(|&i| &self.photos[i])
    }

    /// Photo shown in display slot `slot`.
    pub fn at_slot(&self, slot: usize) -> Option<&PhotoEntry> {
        self.order.get(slot).map(|&i| &self.photos[i])
    }

    /// The photo being viewed, if the viewer holds one.
    pub fn current(&self) -> Option<&PhotoEntry> {
        match &self.content {
            Some(ModalContent::Photo(p)) => Some(p),
            _ => None,
        }
    }

    pub fn content(&self) -> Option<&ModalContent> {
        self.content.as_ref()
    }

    /// Bind (or re-bind) one click handler per grid slot.
    ///
    /// Safe to call on every gallery open: the binding table replaces
    /// existing handlers, so each slot keeps exactly one.
    pub fn bind_photo_handlers(&self, bindings: &mut BindingTable<Handler>) -> usize {
        for slot in 0..self.order.len() {
            bindings.bind(Element::Photo(slot), EventKind::Click, Handler::ViewPhoto(slot));
        }
        log::debug!("Bound click handlers for {} photos", self.order.len());
        self.order.len()
    }

    /// A grid slot was clicked.
    pub fn click_slot(&mut self, ctx: &mut Context<'_>, panels: &mut PanelController, slot: usize) {
        let Some(entry) = self.at_slot(slot).cloned() else {
            log::warn!("click on empty gallery slot {slot}");
            return;
        };
        ctx.log(format!("Photo clicked: {}", entry.display_name), LogKind::System);
        self.activate(ctx, panels, entry);
    }

    /// Show `entry` in the viewer. Logs an error and does nothing else if
    /// the viewer surfaces are missing.
    pub fn activate(&mut self, ctx: &mut Context<'_>, panels: &mut PanelController, entry: PhotoEntry) -> bool {
        if !viewer_ready(ctx) {
            return false;
        }
        if let Ok(img) = ctx.sdi.get_mut(MODAL_IMAGE) {
            img.image = Some(entry.source_ref.clone());
            img.text.clone_from(&entry.display_name);
        }
        if let Ok(info) = ctx.sdi.get_mut(MODAL_INFO) {
            info.text.clone_from(&entry.display_name);
            info.lines.clear();
        }
        if let Ok(title) = ctx.sdi.get_mut(MODAL_TITLE) {
            title.text = format!("Photo Viewer - {}", entry.display_name);
        }
        if panels.set_visible(ctx.sdi, Panel::PhotoViewModal, true).is_err() {
            return false;
        }
        ctx.log(
            format!("User viewed photo: {}", entry.display_name),
            LogKind::Interaction,
        );
        self.content = Some(ModalContent::Photo(entry));
        true
    }

    /// Fill the viewer with the static About text instead of a photo.
    pub fn show_about(&mut self, ctx: &mut Context<'_>, panels: &mut PanelController) -> bool {
        if !viewer_ready(ctx) {
            return false;
        }
        if let Ok(img) = ctx.sdi.get_mut(MODAL_IMAGE) {
            img.image = None;
            img.text.clear();
        }
        if let Ok(info) = ctx.sdi.get_mut(MODAL_INFO) {
            info.text.clear();
            info.lines = ABOUT_LINES
                .iter()
                .map(|l| folio_sdi::SurfaceLine::new(*l, "about-text"))
                .collect();
        }
        if let Ok(title) = ctx.sdi.get_mut(MODAL_TITLE) {
            title.text = ABOUT_TITLE.to_string();
        }
        if panels.set_visible(ctx.sdi, Panel::PhotoViewModal, true).is_err() {
            return false;
        }
        ctx.log("User opened About dialog", LogKind::Interaction);
        self.content = Some(ModalContent::About);
        true
    }

    /// Hide the viewer and clear the selection.
    pub fn close(&mut self, ctx: &mut Context<'_>, panels: &mut PanelController, reason: CloseReason) -> bool {
        if !panels.close(ctx, Panel::PhotoViewModal, reason) {
            return false;
        }
        self.content = None;
        true
    }

    /// Uniform in-place Fisher-Yates over the display order.
    pub fn shuffle(&mut self, ctx: &mut Context<'_>, rng: &mut dyn RngCore) {
        for i in (1..self.order.len()).rev() {
            let j = uniform_index(rng, i + 1);
            self.order.swap(i, j);
        }
        self.sync_grid(ctx);
        ctx.log("User shuffled photos in gallery", LogKind::Interaction);
    }

    /// Rewrite the thumbnail grid in display order.
    pub fn sync_grid(&self, ctx: &mut Context<'_>) {
        match ctx.sdi.get_mut(GALLERY_GRID) {
            Ok(grid) => {
                grid.lines = self
                    .displayed()
                    .map(|p| {
                        folio_sdi::SurfaceLine::new(&p.display_name, "photo-item")
                            .with_image(&p.source_ref)
                    })
                    .collect();
            },
            Err(e) => log::warn!("gallery grid not rendered: {e}"),
        }
    }
}

fn viewer_ready(ctx: &mut Context<'_>) -> bool {
    let missing = folio_sdi::helpers::missing(
        ctx.sdi,
        &[
            Panel::PhotoViewModal.surface_name(),
            MODAL_IMAGE,
            MODAL_INFO,
            MODAL_TITLE,
        ],
    );
    if missing.is_empty() {
        return true;
    }
    log::warn!("photo viewer surfaces missing: {missing:?}");
    ctx.log("Error: Modal elements not found", LogKind::Error);
    false
}

/// Unbiased index in `0..bound` (rejection sampling).
fn uniform_index(rng: &mut dyn RngCore, bound: usize) -> usize {
    let bound = bound as u64;
    let reject = (u64::MAX % bound + 1) % bound;
    loop {
        let v = rng.next_u64();
        if v <= u64::MAX - reject {
            return (v % bound) as usize;
        }
    }
}
