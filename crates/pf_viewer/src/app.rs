use std::path::Path;
use std::time::{Duration, Instant};

use eframe::egui;
use pf_effects::{ElementId, Error as EffectsError, FlagStore, JsonFlagStore, MemoryFlagStore};
use pf_effects::{decor, NotificationKind, Theme};
use pf_navigation::controller::Transition;
use pf_navigation::settings::Layout;
use pf_navigation::site::SiteDefinition;
use pf_navigation::visibility::{IntersectionTracker, Region, ScrollSpy};
use pf_navigation::{NavigationKey, ViewController, ViewId};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error, info, warn};

use crate::app_state::{AppState, PREFERENCES_PATH, STATE_PATH};
use crate::command_sender::command_channel;
use crate::command_sender::{CommandReceiver, CommandSender, UICommand};
use crate::host::{self, ViewerHost};

/// Where the sections and animated elements ended up this frame, in
/// document coordinates
#[derive(Default)]
pub struct PageGeometry {
    pub viewport: Option<Region>,
    pub content_height: f32,
    pub sections: Vec<(ViewId, Region)>,
    pub elements: Vec<(ElementId, Region)>,
    pub hovering: bool,
}

#[derive(Default, Clone, Copy)]
pub struct ScrollMetrics {
    pub y: f32,
    pub content_height: f32,
    pub viewport_height: f32,
}

pub struct App {
    // Serialized state of the app
    pub app_state: AppState,

    pub site: SiteDefinition,
    pub controller: ViewController<ViewerHost>,
    pub host: ViewerHost,

    // Continuous layout observation
    spy: ScrollSpy,
    tracker: IntersectionTracker<ElementId>,
    pub scroll: ScrollMetrics,

    pub top_bar: egui::Rect,
    // Effect clock readings for the link dim and the title glitch
    pub transition_started: Option<Duration>,
    pub title_hover: Option<Duration>,
    applied_theme: Option<Theme>,
    last_frame: Option<Instant>,

    // Commands that will be run at the end of the frame
    pub command_sender: CommandSender,
    command_receiver: CommandReceiver,
}

impl App {
    /// Opens the last used site, or the portfolio, at `anchor`
    pub fn new(anchor: Option<&str>) -> pf_navigation::Result<Self> {
        let app_state = AppState::load(Path::new(STATE_PATH));

        let mut host = ViewerHost::new(open_flag_store(), StdRng::from_entropy());
        let (site, mut controller) = load_site(app_state.site_path.as_deref(), anchor)?;

        controller.start(&mut host)?;
        host.effects.start();

        let mut spy = ScrollSpy::default();
        spy.sync(controller.active_view());

        let (command_sender, command_receiver) = command_channel();

        info!(site = site.title.as_str(), "Viewer ready");

        Ok(Self {
            app_state,
            site,
            controller,
            host,
            spy,
            tracker: IntersectionTracker::default(),
            scroll: ScrollMetrics::default(),
            top_bar: egui::Rect::NOTHING,
            transition_started: None,
            title_hover: None,
            applied_theme: None,
            last_frame: None,
            command_sender,
            command_receiver,
        })
    }

    /// Keeps the scroll spy from reporting a section the viewer scrolled to
    /// on its own
    pub(crate) fn sync_scroll(&mut self, view: &ViewId) {
        self.spy.sync(view);
    }

    fn advance_clock(&mut self) {
        let now = Instant::now();
        if let Some(last) = self.last_frame {
            self.host.effects.advance(now - last);
        }
        self.last_frame = Some(now);
    }

    fn apply_theme(&mut self, ctx: &egui::Context) {
        let theme = self.host.effects.theme().theme();
        if self.applied_theme == Some(theme) {
            return;
        }

        ctx.set_visuals(match theme {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        });
        self.applied_theme = Some(theme);
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let keys: Vec<egui::Key> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => Some(*key),
                    _ => None,
                })
                .collect()
        });

        for key in keys {
            let Some(name) = key_name(key) else {
                continue;
            };

            self.host.effects.key_pressed(name);

            if let Some(key) = NavigationKey::from_key_name(name) {
                let result = self.controller.on_key(key, &mut self.host);
                self.report(result);
            }
        }
    }

    fn track_pointer(&mut self, ctx: &egui::Context) {
        let cursor = self.host.effects.cursor_mut();

        if let Some(pos) = ctx.input(|i| i.pointer.hover_pos()) {
            cursor.move_to(pos.x, pos.y);
        }
        cursor.frame();
    }

    /// Feeds this frame's layout to the scroll spy and the element tracker
    fn observe(&mut self, geometry: PageGeometry) {
        let Some(viewport) = geometry.viewport else {
            return;
        };

        self.scroll = ScrollMetrics {
            y: viewport.top,
            content_height: geometry.content_height,
            viewport_height: viewport.height,
        };
        self.host.effects.cursor_mut().set_hovering(geometry.hovering);

        if self.app_state.layout == Layout::Continuous {
            let sections = geometry
                .sections
                .iter()
                .map(|(view, region)| (view, *region));

            if let Some(view) = self.spy.observe(viewport.top, sections) {
                let result = self.controller.on_visible(view.as_str(), &mut self.host);
                // Already in view, nothing to scroll to
                self.host.take_scroll_request();
                self.report(result);
            }
        }

        for (element, region) in &geometry.elements {
            if self.tracker.observe(element, *region, viewport) {
                self.host.effects.on_element_visible(element.clone());
            }
        }
    }

    fn report(&self, result: pf_navigation::Result<Option<Transition>>) {
        match result {
            Ok(Some(transition)) => {
                debug!(
                    from = %transition.from,
                    to = %transition.to,
                    source = ?transition.source,
                    "Navigated"
                );
            }
            Ok(None) => {}
            Err(e) => warn!("Navigation failed: {}", e),
        }
    }

    fn save(&self) {
        info!("Save viewer state");
        self.app_state.save(Path::new(STATE_PATH));
    }

    fn run_ui_command(&mut self, command: UICommand) {
        debug!(?command, "Run ui command");

        match command {
            UICommand::Save => {
                self.save();
            }
            UICommand::ToggleTheme => match self.host.effects.toggle_theme() {
                Ok(theme) => info!(%theme, "Theme saved"),
                Err(e) => error!("Failed to save theme: {}", e),
            },
            UICommand::SetLayout(layout) => {
                self.app_state.layout = layout;

                let active = self.controller.active_view().clone();
                self.spy.sync(&active);
                self.host.request_scroll(active);
            }
            UICommand::ClickIndicator(indicator) => {
                self.host.effects.menu_mut().close_on_link();
                self.transition_started = Some(self.host.effects.now());
                let result = self.controller.on_indicator_click(indicator, &mut self.host);
                self.report(result);
            }
            UICommand::Navigate(view) => {
                let result = self.controller.activate(&view, &mut self.host);
                self.report(result);
            }
            UICommand::SubmitForm => match self.host.effects.submit_form() {
                Ok(()) => {}
                Err(EffectsError::FormIncomplete(field)) => {
                    self.host.effects.notify(
                        &format!("Please check the {} field.", field),
                        NotificationKind::Info,
                    );
                }
                Err(e) => debug!("Form not submitted: {}", e),
            },
            UICommand::CloseNotification(id) => self.host.effects.close_notification(id),
            UICommand::SelectSlide(index) => self.host.effects.select_slide(index),
        }
    }

    fn run_pending_ui_commands(&mut self) {
        while let Some(cmd) = self.command_receiver.receive_ui() {
            self.run_ui_command(cmd);
        }
    }

    /// The top-level ui
    fn ui(&mut self, ctx: &egui::Context) {
        crate::ui::top_panel(ctx, self);

        crate::ui::bottom_panel(ctx, self);

        crate::ui::navigation_panels(ctx, self);

        let geometry = crate::ui::central_panel(ctx, self);
        self.observe(geometry);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance_clock();
        self.apply_theme(ctx);
        self.handle_keys(ctx);
        self.track_pointer(ctx);

        if self.host.effects.loading().is_visible() {
            crate::ui::loading_screen(ctx, self);
        } else {
            self.ui(ctx);
        }

        crate::ui::notifications(ctx, self);
        crate::ui::cursor(ctx, self);

        self.run_pending_ui_commands();

        let now = self.host.effects.now();
        let transient = self
            .transition_started
            .map_or(false, |start| now - start < decor::PAGE_TRANSITION)
            || self
                .title_hover
                .map_or(false, |start| now - start < decor::GLITCH_DURATION);

        // Timers only fire while frames are drawn
        if self.host.effects.pending_timers() > 0 || transient {
            ctx.request_repaint();
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.controller.teardown(&mut self.host);
    }
}

fn open_flag_store() -> Box<dyn FlagStore> {
    match JsonFlagStore::open(Path::new(PREFERENCES_PATH)) {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!("Preferences unavailable, the theme will not be kept: {}", e);
            Box::new(MemoryFlagStore::new())
        }
    }
}

fn load_site(
    path: Option<&str>,
    anchor: Option<&str>,
) -> pf_navigation::Result<(SiteDefinition, ViewController<ViewerHost>)> {
    if let Some(path) = path {
        let loaded = SiteDefinition::load(Path::new(path)).and_then(|site| {
            let controller = host::build_controller(&site, anchor)?;
            Ok((site, controller))
        });

        match loaded {
            Ok(loaded) => return Ok(loaded),
            Err(e) => error!("Could not open site {}, using the portfolio: {}", path, e),
        }
    }

    let site = SiteDefinition::portfolio();
    let controller = host::build_controller(&site, anchor)?;

    Ok((site, controller))
}

/// Browser style name of a key, as understood by the navigation and the
/// konami detector
pub fn key_name(key: egui::Key) -> Option<&'static str> {
    use egui::Key;

    let name = match key {
        Key::ArrowUp => "ArrowUp",
        Key::ArrowDown => "ArrowDown",
        Key::ArrowLeft => "ArrowLeft",
        Key::ArrowRight => "ArrowRight",
        Key::PageUp => "PageUp",
        Key::PageDown => "PageDown",
        Key::Home => "Home",
        Key::End => "End",
        Key::Space => "Space",
        Key::Num1 => "1",
        Key::Num2 => "2",
        Key::Num3 => "3",
        Key::Num4 => "4",
        Key::Num5 => "5",
        Key::Num6 => "6",
        Key::Num7 => "7",
        Key::Num8 => "8",
        Key::Num9 => "9",
        Key::A => "a",
        Key::B => "b",
        _ => return None,
    };

    Some(name)
}
