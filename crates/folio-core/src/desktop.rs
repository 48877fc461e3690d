//! The desktop: owns every component and dispatches input through the
//! binding table.

use rand_core::{OsRng, RngCore};

use folio_platform::audio::AudioChunk;
use folio_platform::{NavigationService, Platform, SystemTime};
use folio_sdi::SurfaceRegistry;
use folio_terminal::{LogKind, TerminalPane};
use folio_types::config::DesktopConfig;
use folio_types::input::{Element, EventKind, InputEvent, WindowButton};
use folio_types::panel::Panel;

use crate::action::{CloseReason, Deferred, Handler};
use crate::bindings::BindingTable;
use crate::clock::ClockDisplay;
use crate::context::Context;
use crate::gallery::Gallery;
use crate::layout;
use crate::panels::PanelController;
use crate::router::Router;
use crate::schedule::Scheduler;
use crate::studio::{AudioStudio, RecordingState};

/// Outcome of dispatching one input event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// At least one handler ran.
    pub handled: bool,
    /// The platform's default action (the context menu) was suppressed.
    pub default_prevented: bool,
}

/// The whole desktop shell over a platform `P`.
pub struct Desktop<P: Platform> {
    config: DesktopConfig,
    sdi: SurfaceRegistry,
    terminal: TerminalPane,
    panels: PanelController,
    router: Router,
    gallery: Gallery,
    studio: AudioStudio,
    clock: ClockDisplay,
    bindings: BindingTable<Handler>,
    scheduler: Scheduler<Deferred>,
    platform: P,
    rng: Box<dyn RngCore>,
}

impl<P: Platform> Desktop<P> {
    /// Build the desktop, shuffling with the OS random source.
    pub fn new(config: DesktopConfig, platform: P) -> Self {
        Self::with_rng(config, platform, Box::new(OsRng))
    }

    pub fn with_rng(config: DesktopConfig, platform: P, rng: Box<dyn RngCore>) -> Self {
        let mut sdi = SurfaceRegistry::new();
        layout::populate_surface(&mut sdi, &config);
        let terminal = TerminalPane::new(&config.terminal.prompt, config.terminal.max_lines);

        let mut desktop = Self {
            router: Router::from_config(&config),
            gallery: Gallery::from_config(&config.photos),
            studio: AudioStudio::new(config.sounds.clone(), config.studio.master_volume),
            config,
            sdi,
            terminal,
            panels: PanelController::new(),
            clock: ClockDisplay::new(),
            bindings: BindingTable::new(),
            scheduler: Scheduler::new(),
            platform,
            rng,
        };
        desktop.bind_all();
        desktop.studio.sync_controls(&mut desktop.sdi);
        desktop.terminal.sync(&mut desktop.sdi);

        let now = desktop.now();
        desktop.clock.tick(&mut desktop.sdi, &now);
        let interval = desktop.clock_interval_ms();
        desktop.scheduler.schedule(interval, Deferred::ClockTick);

        let mut ctx = Context::new(&mut desktop.sdi, &mut desktop.terminal, now);
        ctx.log("Desktop environment loaded successfully", LogKind::Success);
        ctx.log("Ready for user interaction...", LogKind::System);
        log::info!(
            "Desktop ready: {} icons, {} photos, {} bindings",
            desktop.router.icons().len(),
            desktop.gallery.len(),
            desktop.bindings.len()
        );
        desktop
    }

    fn bind_all(&mut self) {
        let b = &mut self.bindings;
        for i in 0..self.router.icons().len() {
            let icon = Element::Icon(i);
            b.bind(icon, EventKind::Click, Handler::IconClick(i));
            b.bind(icon, EventKind::DoubleClick, Handler::IconDoubleClick(i));
            b.bind(icon, EventKind::Enter, Handler::IconHover(i));
            b.bind(icon, EventKind::Down, Handler::IconPress(i));
            b.bind(icon, EventKind::Up, Handler::IconRelease(i));
            b.bind(icon, EventKind::Leave, Handler::IconLeave(i));
        }
        b.bind(Element::Desktop, EventKind::Click, Handler::DesktopClick);
        b.bind(Element::Desktop, EventKind::ContextMenu, Handler::DesktopContextMenu);
        b.bind(Element::Trash, EventKind::Click, Handler::TrashClick);
        b.bind(Element::Trash, EventKind::Enter, Handler::TrashHover);
        b.bind(Element::Character, EventKind::Click, Handler::CharacterClick);
        b.bind(Element::Character, EventKind::Enter, Handler::CharacterHover);

        for panel in Panel::ALL {
            b.bind(Element::Backdrop(panel), EventKind::Click, Handler::BackdropClick(panel));
        }
        b.bind(
            Element::PanelContent(Panel::Contact),
            EventKind::Click,
            Handler::ContactClick,
        );
        for button in [WindowButton::Close, WindowButton::Minimize, WindowButton::Maximize] {
            let el = Element::WindowButton(button);
            b.bind(el, EventKind::Click, Handler::WindowButtonClick(button));
            b.bind(el, EventKind::Enter, Handler::WindowButtonHover);
        }
        b.bind(Element::ClosePopup, EventKind::Click, Handler::ClosePanel(Panel::TrashPopup));
        b.bind(Element::ClosePopup, EventKind::Enter, Handler::CloseButtonHover);
        b.bind(Element::CloseMusic, EventKind::Click, Handler::ClosePanel(Panel::MusicStudio));
        b.bind(Element::CloseGallery, EventKind::Click, Handler::ClosePanel(Panel::Gallery));
        b.bind(
            Element::CloseModal,
            EventKind::Click,
            Handler::ClosePanel(Panel::PhotoViewModal),
        );

        b.bind(Element::Record, EventKind::Click, Handler::Record);
        b.bind(Element::Stop, EventKind::Click, Handler::Stop);
        b.bind(Element::Play, EventKind::Click, Handler::Play);
        for i in 0..self.studio.sounds().len() {
            b.bind(Element::Sound(i), EventKind::Click, Handler::Sound(i));
        }
        b.bind(Element::VolumeSlider, EventKind::Input, Handler::Volume);
        b.bind(Element::Shuffle, EventKind::Click, Handler::Shuffle);
        b.bind(Element::About, EventKind::Click, Handler::About);
    }

    fn clock_interval_ms(&self) -> u32 {
        self.config.timing.clock_interval_secs.saturating_mul(1000)
    }

    /// Sample the platform clock. A failing clock renders as midnight.
    fn now(&self) -> SystemTime {
        self.platform.now().unwrap_or_else(|e| {
            log::warn!("time service failed: {e}");
            SystemTime::default()
        })
    }

    /// Dispatch one input event along its bubble path.
    pub fn handle_event(&mut self, event: InputEvent) -> Dispatch {
        let route = self.bindings.route(event.target(), event.kind());
        log::debug!(
            "{:?} on {} -> {} handler(s)",
            event.kind(),
            event.target(),
            route.len()
        );
        let mut dispatch = Dispatch {
            handled: !route.is_empty(),
            default_prevented: false,
        };
        if route.is_empty() {
            return dispatch;
        }
        let now = self.now();
        for (_, handler) in route {
            if handler == Handler::DesktopContextMenu {
                dispatch.default_prevented = true;
            }
            self.run(handler, event, now);
        }
        dispatch
    }

    fn run(&mut self, handler: Handler, event: InputEvent, now: SystemTime) {
        let delay = self.config.timing.action_delay_ms;
        let highlight = self.config.timing.highlight_ms;
        let Self {
            sdi,
            terminal,
            panels,
            router,
            gallery,
            studio,
            scheduler,
            platform,
            rng,
            ..
        } = self;
        let mut ctx = Context::new(sdi, terminal, now);

        match handler {
            Handler::IconClick(i) => {
                if let Some(action) = router.click(&mut ctx, i) {
                    scheduler.schedule(delay, action);
                }
            },
            Handler::IconDoubleClick(i) => {
                if let Some(action) = router.double_click(&mut ctx, i) {
                    follow_link(platform, &mut ctx, &action);
                }
            },
            Handler::IconHover(i) => router.hover(&mut ctx, i),
            Handler::IconPress(i) => router.press(ctx.sdi, i),
            Handler::IconRelease(i) => scheduler.schedule(highlight, Deferred::ClearHighlight(i)),
            Handler::IconLeave(i) => router.clear_highlight(ctx.sdi, i),
            Handler::DesktopClick => router.desktop_click(&mut ctx, event.target()),
            Handler::DesktopContextMenu => router.context_menu(&mut ctx),
            Handler::TrashClick => scheduler.schedule(delay, router.trash_click(&mut ctx)),
            Handler::TrashHover => router.trash_hover(&mut ctx),
            Handler::CharacterClick => scheduler.schedule(delay, router.character_click(&mut ctx)),
            Handler::CharacterHover => router.character_hover(&mut ctx),
            Handler::BackdropClick(panel) => {
                if event.target() == Element::Backdrop(panel) && panels.is_open(panel) {
                    close_panel(&mut ctx, panels, gallery, panel, CloseReason::Outside);
                }
            },
            Handler::ClosePanel(panel) => {
                close_panel(&mut ctx, panels, gallery, panel, CloseReason::Control);
            },
            Handler::ContactClick => ctx.log("User clicked on Contact window", LogKind::Interaction),
            Handler::WindowButtonClick(WindowButton::Close) => {
                panels.close(&mut ctx, Panel::Contact, CloseReason::Control);
            },
            Handler::WindowButtonClick(button) => ctx.log(
                format!("User clicked {} button on Contact window", button.label()),
                LogKind::Interaction,
            ),
            Handler::WindowButtonHover => {
                ctx.log("User hovering over window button", LogKind::System);
            },
            Handler::CloseButtonHover => ctx.log("User hovering over close button", LogKind::System),
            Handler::Record => studio.start(&mut ctx, platform),
            Handler::Stop => studio.stop(&mut ctx, platform),
            Handler::Play => studio.play(&mut ctx, platform),
            Handler::Sound(i) => studio.play_pad(&mut ctx, platform, i),
            Handler::Volume => {
                if let InputEvent::Value { value, .. } = event {
                    studio.set_volume(&mut ctx, value);
                }
            },
            Handler::ViewPhoto(slot) => gallery.click_slot(&mut ctx, panels, slot),
            Handler::Shuffle => gallery.shuffle(&mut ctx, &mut **rng),
            Handler::About => {
                gallery.show_about(&mut ctx, panels);
            },
        }
    }

    /// Advance the scheduler by `dt_ms` and run whatever fell due. Returns
    /// the number of deferred actions run.
    pub fn tick(&mut self, dt_ms: u32) -> usize {
        if self.studio.state() == RecordingState::Recording {
            for chunk in self.platform.take_chunks(dt_ms) {
                self.studio.deliver_chunk(chunk);
            }
        }
        let due = self.scheduler.tick(dt_ms);
        if due.is_empty() {
            return 0;
        }
        let now = self.now();
        let count = due.len();
        for action in due {
            self.run_deferred(action, now);
        }
        count
    }

    fn run_deferred(&mut self, action: Deferred, now: SystemTime) {
        log::debug!("deferred: {action:?}");
        match action {
            Deferred::Navigate(_) | Deferred::OpenTab(_) => {
                let mut ctx = Context::new(&mut self.sdi, &mut self.terminal, now);
                follow_link(&mut self.platform, &mut ctx, &action);
            },
            Deferred::OpenPanel(panel) => {
                self.open_panel_at(panel, now);
            },
            Deferred::ClearHighlight(i) => self.router.clear_highlight(&mut self.sdi, i),
            Deferred::ClockTick => {
                self.clock.tick(&mut self.sdi, &now);
                let interval = self.clock_interval_ms();
                self.scheduler.schedule(interval, Deferred::ClockTick);
            },
        }
    }

    /// Show a panel immediately. Opening the gallery re-binds its photo
    /// handlers first.
    pub fn open_panel(&mut self, panel: Panel) -> bool {
        let now = self.now();
        self.open_panel_at(panel, now)
    }

    fn open_panel_at(&mut self, panel: Panel, now: SystemTime) -> bool {
        let mut ctx = Context::new(&mut self.sdi, &mut self.terminal, now);
        if panel == Panel::Gallery {
            self.gallery.bind_photo_handlers(&mut self.bindings);
            self.gallery.sync_grid(&mut ctx);
        }
        self.panels.open(&mut ctx, panel)
    }

    /// Feed a chunk from an external capture device to the studio.
    pub fn deliver_chunk(&mut self, chunk: AudioChunk) -> bool {
        self.studio.deliver_chunk(chunk)
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    pub fn sdi(&self) -> &SurfaceRegistry {
        &self.sdi
    }

    pub fn terminal(&self) -> &TerminalPane {
        &self.terminal
    }

    pub fn panels(&self) -> &PanelController {
        &self.panels
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn studio(&self) -> &AudioStudio {
        &self.studio
    }

    pub fn clock(&self) -> &ClockDisplay {
        &self.clock
    }

    pub fn bindings(&self) -> &BindingTable<Handler> {
        &self.bindings
    }

    pub fn scheduler(&self) -> &Scheduler<Deferred> {
        &self.scheduler
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }
}

fn close_panel(
    ctx: &mut Context<'_>,
    panels: &mut PanelController,
    gallery: &mut Gallery,
    panel: Panel,
    reason: CloseReason,
) {
    if panel == Panel::PhotoViewModal {
        gallery.close(ctx, panels, reason);
    } else {
        panels.close(ctx, panel, reason);
    }
}

/// Perform a navigation action, logging a platform refusal.
fn follow_link<N: NavigationService + ?Sized>(nav: &mut N, ctx: &mut Context<'_>, action: &Deferred) {
    let result = match action {
        Deferred::Navigate(path) => nav.navigate(path),
        Deferred::OpenTab(url) => nav.open_new_tab(url),
        _ => return,
    };
    if let Err(e) = result {
        log::warn!("{action:?} failed: {e}");
        ctx.log(format!("Error: {e}"), LogKind::Error);
    }
}
