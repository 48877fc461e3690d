//! Interaction router for desktop icons.
//!
//! Icon behaviour is resolved once from configuration into an
//! [`IconAction`]. Click handling logs the gesture and returns the
//! [`Deferred`] work to queue; double-click returns work to run at once.

use std::collections::BTreeMap;

use folio_sdi::SurfaceRegistry;
use folio_terminal::LogKind;
use folio_types::config::{DesktopConfig, IconConfig};
use folio_types::input::Element;
use folio_types::panel::Panel;

use crate::action::Deferred;
use crate::context::Context;
use crate::layout::icon_surface;

/// What clicking an icon does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconAction {
    /// Navigate in place to a site path.
    Page(String),
    /// Open a URL in a new tab. `description` is what the terminal shows.
    External { url: String, description: String },
    MusicStudio,
    Gallery,
    /// No marker: clicking does nothing.
    Inert,
}

impl IconAction {
    /// Resolve markers in precedence order: page, external, music, photos.
    pub fn resolve(icon: &IconConfig, descriptions: &BTreeMap<String, String>) -> Self {
        if let Some(page) = icon.page.as_deref().filter(|p| !p.is_empty()) {
            return Self::Page(page.to_string());
        }
        if let Some(url) = icon.external.as_deref().filter(|u| !u.is_empty()) {
            let description = descriptions
                .get(&icon.label)
                .cloned()
                .unwrap_or_else(|| url.to_string());
            return Self::External {
                url: url.to_string(),
                description,
            };
        }
        if icon.music {
            return Self::MusicStudio;
        }
        if icon.photos {
            return Self::Gallery;
        }
        Self::Inert
    }
}

/// A bound desktop icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopIcon {
    pub label: String,
    pub action: IconAction,
}

/// Routes gestures on desktop icons, the trash, the character and the
/// desktop background.
#[derive(Debug)]
pub struct Router {
    icons: Vec<DesktopIcon>,
    character_name: String,
}

impl Router {
    pub fn from_config(config: &DesktopConfig) -> Self {
        let icons = config
            .icons
            .iter()
            .map(|icon| DesktopIcon {
                label: icon.label.clone(),
                action: IconAction::resolve(icon, &config.link_descriptions),
            })
            .collect();
        Self {
            icons,
            character_name: config.character.name.clone(),
        }
    }

    pub fn icons(&self) -> &[DesktopIcon] {
        &self.icons
    }

    pub fn icon(&self, index: usize) -> Option<&DesktopIcon> {
        self.icons.get(index)
    }

    /// Single click: log, then hand back the deferred action.
    pub fn click(&self, ctx: &mut Context<'_>, index: usize) -> Option<Deferred> {
        let icon = self.icon(index)?;
        match &icon.action {
            IconAction::Page(path) => {
                ctx.log(
                    format!("User opened folder: {} → {path}", icon.label),
                    LogKind::Interaction,
                );
                Some(Deferred::Navigate(path.clone()))
            },
            IconAction::External { url, description } => {
                ctx.log(
                    format!("User opened external link: {} → {description}", icon.label),
                    LogKind::Interaction,
                );
                Some(Deferred::OpenTab(url.clone()))
            },
            IconAction::MusicStudio => {
                ctx.log("User opened Music Studio window", LogKind::Interaction);
                Some(Deferred::OpenPanel(Panel::MusicStudio))
            },
            IconAction::Gallery => {
                ctx.log("User opened Photo Gallery window", LogKind::Interaction);
                Some(Deferred::OpenPanel(Panel::Gallery))
            },
            IconAction::Inert => None,
        }
    }

    /// Double click: log, then hand back navigation to run immediately.
    /// Panel-opening icons only log.
    pub fn double_click(&self, ctx: &mut Context<'_>, index: usize) -> Option<Deferred> {
        let icon = self.icon(index)?;
        ctx.log(
            format!("User double-clicked: {}", icon.label),
            LogKind::Success,
        );
        match &icon.action {
            IconAction::Page(path) => Some(Deferred::Navigate(path.clone())),
            IconAction::External { url, .. } => Some(Deferred::OpenTab(url.clone())),
            _ => None,
        }
    }

    pub fn hover(&self, ctx: &mut Context<'_>, index: usize) {
        if let Some(icon) = self.icon(index) {
            ctx.log(
                format!("User hovering over: {}", icon.label),
                LogKind::System,
            );
        }
    }

    /// Mouse-down: apply the pressed highlight.
    pub fn press(&self, sdi: &mut SurfaceRegistry, index: usize) {
        if let Ok(obj) = sdi.get_mut(&icon_surface(index)) {
            obj.highlighted = true;
        }
    }

    /// Remove the pressed highlight (mouse-leave, or the delayed mouse-up).
    pub fn clear_highlight(&self, sdi: &mut SurfaceRegistry, index: usize) {
        if let Ok(obj) = sdi.get_mut(&icon_surface(index)) {
            obj.highlighted = false;
        }
    }

    /// Click reaching the desktop background. Only a click aimed at the
    /// background itself is logged; clicks bubbling up from icons are not.
    pub fn desktop_click(&self, ctx: &mut Context<'_>, target: Element) {
        if target == Element::Desktop {
            ctx.log("User clicked on desktop background", LogKind::System);
        }
    }

    /// Context-menu gesture anywhere on the desktop. Always suppressed.
    pub fn context_menu(&self, ctx: &mut Context<'_>) {
        ctx.log(
            "User attempted right-click (context menu disabled)",
            LogKind::System,
        );
    }

    pub fn trash_click(&self, ctx: &mut Context<'_>) -> Deferred {
        ctx.log("User clicked on Trash can", LogKind::Interaction);
        Deferred::OpenPanel(Panel::TrashPopup)
    }

    pub fn trash_hover(&self, ctx: &mut Context<'_>) {
        ctx.log("User hovering over Trash can", LogKind::System);
    }

    pub fn character_click(&self, ctx: &mut Context<'_>) -> Deferred {
        ctx.log(
            format!("User clicked on {} character", self.character_name),
            LogKind::Interaction,
        );
        Deferred::OpenPanel(Panel::Contact)
    }

    pub fn character_hover(&self, ctx: &mut Context<'_>) {
        ctx.log(
            format!("User hovering over {}", self.character_name),
            LogKind::System,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::Harness;

    fn icon(label: &str) -> IconConfig {
        IconConfig {
            label: label.to_string(),
            ..IconConfig::default()
        }
    }

    fn router_with(icons: Vec<IconConfig>) -> Router {
        Router::from_config(&DesktopConfig {
            icons,
            ..DesktopConfig::default()
        })
    }

    #[test]
    fn page_wins_over_everything() {
        let cfg = IconConfig {
            page: Some("/a.html".into()),
            external: Some("https://x".into()),
            music: true,
            photos: true,
            ..icon("A")
        };
        assert_eq!(
            IconAction::resolve(&cfg, &BTreeMap::new()),
            IconAction::Page("/a.html".into())
        );
    }

    #[test]
    fn music_wins_over_photos() {
        let cfg = IconConfig {
            music: true,
            photos: true,
            ..icon("M")
        };
        assert_eq!(IconAction::resolve(&cfg, &BTreeMap::new()), IconAction::MusicStudio);
    }

    #[test]
    fn no_markers_is_inert() {
        assert_eq!(IconAction::resolve(&icon("X"), &BTreeMap::new()), IconAction::Inert);
    }

    #[test]
    fn empty_page_falls_through() {
        let cfg = IconConfig {
            page: Some(String::new()),
            photos: true,
            ..icon("P")
        };
        assert_eq!(IconAction::resolve(&cfg, &BTreeMap::new()), IconAction::Gallery);
    }

    #[test]
    fn page_click_logs_and_defers_navigation() {
        let router = router_with(vec![IconConfig {
            page: Some("/about.html".into()),
            ..icon("About")
        }]);
        let mut h = Harness::new();
        let d = router.click(&mut h.ctx(), 0);
        assert_eq!(d, Some(Deferred::Navigate("/about.html".into())));
        assert_eq!(h.messages(), vec!["User opened folder: About → /about.html"]);
    }

    #[test]
    fn known_external_label_uses_description() {
        let router = router_with(vec![IconConfig {
            external: Some("https://example.com".into()),
            ..icon("Press")
        }]);
        let mut h = Harness::new();
        let d = router.click(&mut h.ctx(), 0);
        assert_eq!(d, Some(Deferred::OpenTab("https://example.com".into())));
        assert_eq!(
            h.messages(),
            vec!["User opened external link: Press → Notion Press"]
        );
    }

    #[test]
    fn unknown_external_label_shows_url() {
        let router = router_with(vec![IconConfig {
            external: Some("https://blog.example".into()),
            ..icon("Blog")
        }]);
        let mut h = Harness::new();
        router.click(&mut h.ctx(), 0);
        assert_eq!(
            h.messages(),
            vec!["User opened external link: Blog → https://blog.example"]
        );
    }

    #[test]
    fn inert_click_does_nothing() {
        let router = router_with(vec![icon("Nothing")]);
        let mut h = Harness::new();
        assert_eq!(router.click(&mut h.ctx(), 0), None);
        assert!(h.messages().is_empty());
        assert_eq!(router.click(&mut h.ctx(), 42), None);
    }

    #[test]
    fn double_click_skips_panels() {
        let router = router_with(vec![
            IconConfig {
                music: true,
                ..icon("Music")
            },
            IconConfig {
                page: Some("/r.html".into()),
                ..icon("Resume")
            },
        ]);
        let mut h = Harness::new();
        assert_eq!(router.double_click(&mut h.ctx(), 0), None);
        assert_eq!(
            router.double_click(&mut h.ctx(), 1),
            Some(Deferred::Navigate("/r.html".into()))
        );
        assert_eq!(
            h.entries(),
            vec![
                ("User double-clicked: Music".to_string(), LogKind::Success),
                ("User double-clicked: Resume".to_string(), LogKind::Success),
            ]
        );
    }

    #[test]
    fn hover_logs_system() {
        let router = router_with(vec![icon("Docs")]);
        let mut h = Harness::new();
        router.hover(&mut h.ctx(), 0);
        assert_eq!(
            h.entries(),
            vec![("User hovering over: Docs".to_string(), LogKind::System)]
        );
    }

    #[test]
    fn highlight_press_and_clear() {
        let router = router_with(vec![icon("A")]);
        let mut h = Harness::new();
        router.press(&mut h.sdi, 0);
        assert!(h.sdi.get(&icon_surface(0)).unwrap().highlighted);
        router.clear_highlight(&mut h.sdi, 0);
        assert!(!h.sdi.get(&icon_surface(0)).unwrap().highlighted);
    }

    #[test]
    fn desktop_click_only_logs_direct_hits() {
        let router = router_with(vec![]);
        let mut h = Harness::new();
        router.desktop_click(&mut h.ctx(), Element::Icon(0));
        assert!(h.messages().is_empty());
        router.desktop_click(&mut h.ctx(), Element::Desktop);
        assert_eq!(h.messages(), vec!["User clicked on desktop background"]);
    }

    #[test]
    fn character_uses_configured_name() {
        let router = Router::from_config(&DesktopConfig::default());
        let mut h = Harness::new();
        assert_eq!(
            router.character_click(&mut h.ctx()),
            Deferred::OpenPanel(Panel::Contact)
        );
        router.character_hover(&mut h.ctx());
        assert_eq!(
            h.messages(),
            vec!["User clicked on Billie character", "User hovering over Billie"]
        );
    }
}
