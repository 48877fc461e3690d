//! Surface object names and the page-load surface layout.

use folio_sdi::{SurfaceLine, SurfaceRegistry};
use folio_terminal::TERMINAL_OUTPUT;
use folio_types::config::DesktopConfig;
use folio_types::panel::Panel;

/// Menu-bar clock text.
pub const CLOCK: &str = "current_time";
/// Desktop background area.
pub const DESKTOP_AREA: &str = "desktop_area";
pub const TRASH: &str = "trash_can";
pub const CHARACTER: &str = "character";

/// Photo viewer parts.
pub const MODAL_IMAGE: &str = "modal_image";
pub const MODAL_INFO: &str = "modal_info";
pub const MODAL_TITLE: &str = "modal_title";
/// Gallery thumbnail grid.
pub const GALLERY_GRID: &str = "gallery_grid";

/// Music studio controls.
pub const RECORD_BUTTON: &str = "record_button";
pub const STOP_BUTTON: &str = "stop_button";
pub const PLAY_BUTTON: &str = "play_button";
pub const RECORDING_STATUS: &str = "recording_status";
pub const MASTER_VOLUME: &str = "master_volume";

/// Surface name of desktop icon `index`.
pub fn icon_surface(index: usize) -> String {
    format!("icon_{index}")
}

/// Build the initial surface: every object the desktop renders into, with
/// all panels hidden.
pub fn populate_surface(sdi: &mut SurfaceRegistry, config: &DesktopConfig) {
    sdi.create(TERMINAL_OUTPUT).visible = true;
    sdi.create(CLOCK).visible = true;
    sdi.create(DESKTOP_AREA).visible = true;

    for (i, icon) in config.icons.iter().enumerate() {
        let obj = sdi.create(&icon_surface(i));
        obj.visible = true;
        obj.text = icon.label.clone();
    }
    sdi.create(TRASH).visible = true;
    let character = sdi.create(CHARACTER);
    character.visible = true;
    character.text = config.character.name.clone();

    for panel in Panel::ALL {
        sdi.create(panel.surface_name());
    }
    for name in [MODAL_IMAGE, MODAL_INFO, MODAL_TITLE] {
        sdi.create(name).visible = true;
    }

    let grid = sdi.create(GALLERY_GRID);
    grid.visible = true;
    grid.lines = config
        .photos
        .iter()
        .map(|p| SurfaceLine::new(&p.name, "photo-item").with_image(&p.src))
        .collect();

    sdi.create(RECORD_BUTTON).visible = true;
    for name in [STOP_BUTTON, PLAY_BUTTON] {
        let obj = sdi.create(name);
        obj.visible = true;
        obj.enabled = false;
    }
    sdi.create(RECORDING_STATUS).visible = true;
    let volume = sdi.create(MASTER_VOLUME);
    volume.visible = true;
    volume.text = format!("{}%", config.studio.master_volume);

    log::debug!("Surface populated with {} objects", sdi.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panels_start_hidden() {
        let mut sdi = SurfaceRegistry::new();
        populate_surface(&mut sdi, &DesktopConfig::default());
        for panel in Panel::ALL {
            assert!(!sdi.get(panel.surface_name()).unwrap().visible);
        }
        assert!(sdi.get(TERMINAL_OUTPUT).unwrap().visible);
    }

    #[test]
    fn icons_and_grid_follow_config() {
        let cfg = DesktopConfig::default();
        let mut sdi = SurfaceRegistry::new();
        populate_surface(&mut sdi, &cfg);
        assert_eq!(sdi.get(&icon_surface(2)).unwrap().text, cfg.icons[2].label);
        let grid = sdi.get(GALLERY_GRID).unwrap();
        assert_eq!(grid.lines.len(), cfg.photos.len());
        assert_eq!(grid.lines[0].image.as_deref(), Some(cfg.photos[0].src.as_str()));
    }

    #[test]
    fn studio_controls_initial_state() {
        let mut sdi = SurfaceRegistry::new();
        populate_surface(&mut sdi, &DesktopConfig::default());
        assert!(sdi.get(RECORD_BUTTON).unwrap().enabled);
        assert!(!sdi.get(STOP_BUTTON).unwrap().enabled);
        assert!(!sdi.get(PLAY_BUTTON).unwrap().enabled);
        assert_eq!(sdi.get(MASTER_VOLUME).unwrap().text, "75%");
    }
}
