use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use pf_effects::{EffectsRuntime, EffectsSetup, ElementId, FlagStore};
use pf_navigation::site::SiteDefinition;
use pf_navigation::{
    animation_fn, Animation, IndicatorId, Navigator, PresentationCommand, Presenter, Result,
    ViewController, ViewId,
};
use rand::rngs::StdRng;
use tracing::debug;

use crate::content;

pub struct NavigationLogEntry {
    pub at: Duration,
    pub command: PresentationCommand,
}

/// Presentation state of the desktop viewer: which views are shown, which
/// indicators are lit, and the effects that run alongside.
pub struct ViewerHost {
    pub effects: EffectsRuntime,
    shown: BTreeSet<ViewId>,
    indicators: BTreeMap<IndicatorId, bool>,
    scroll_request: Option<ViewId>,
    log: Vec<NavigationLogEntry>,
}

impl ViewerHost {
    pub fn new(flags: Box<dyn FlagStore>, rng: StdRng) -> Self {
        let setup = EffectsSetup {
            phrases: content::TYPING_PHRASES
                .iter()
                .map(|phrase| phrase.to_string())
                .collect(),
            hero_elements: content::HERO_LINES.len(),
            slides: content::PROJECTS.len(),
            ..Default::default()
        };

        let mut effects = EffectsRuntime::new(setup, flags, rng);
        for stat in &content::STATS {
            effects.register_counter(ElementId::new(stat.element), stat.target);
        }
        for skill in &content::SKILLS {
            effects.register_progress_bar(ElementId::new(skill.element), skill.percent);
        }

        Self {
            effects,
            shown: BTreeSet::new(),
            indicators: BTreeMap::new(),
            scroll_request: None,
            log: vec![],
        }
    }

    pub fn is_shown(&self, view: &ViewId) -> bool {
        self.shown.contains(view)
    }

    pub fn is_indicator_lit(&self, indicator: IndicatorId) -> bool {
        self.indicators.get(&indicator).copied().unwrap_or(false)
    }

    /// The view most recently shown, for hosts that scroll to it
    pub fn take_scroll_request(&mut self) -> Option<ViewId> {
        self.scroll_request.take()
    }

    pub fn request_scroll(&mut self, view: ViewId) {
        self.scroll_request = Some(view);
    }

    pub fn log(&self) -> &[NavigationLogEntry] {
        &self.log
    }

    fn record(&mut self, command: PresentationCommand) {
        self.log.push(NavigationLogEntry {
            at: self.effects.now(),
            command,
        });
    }
}

impl Presenter for ViewerHost {
    fn show_view(&mut self, view: &ViewId) {
        self.shown.insert(view.clone());
        self.scroll_request = Some(view.clone());
        self.record(PresentationCommand::Show(view.clone()));
    }

    fn hide_view(&mut self, view: &ViewId) {
        self.shown.remove(view);
        self.record(PresentationCommand::Hide(view.clone()));
    }

    fn set_indicator(&mut self, indicator: IndicatorId, active: bool) {
        self.indicators.insert(indicator, active);
        self.record(PresentationCommand::Indicator { indicator, active });
    }
}

/// Project carousel, running only while the projects view is active
struct ProjectSlides;

impl Animation<ViewerHost> for ProjectSlides {
    fn activate(&mut self, _view: &ViewId, host: &mut ViewerHost, _navigator: &mut Navigator<'_>) {
        host.effects.start_slides();
    }

    fn deactivate(&mut self, _view: &ViewId, host: &mut ViewerHost) {
        host.effects.stop_slides();
    }
}

/// Builds the controller for `site`, attaching the portfolio animations to
/// the views the site has.
pub fn build_controller(
    site: &SiteDefinition,
    anchor: Option<&str>,
) -> Result<ViewController<ViewerHost>> {
    let has_view = |id: &str| site.views.iter().any(|view| view.id == id);

    let mut builder = site.builder();

    if has_view("about") {
        builder = builder.on_activate(
            "about",
            animation_fn(|view: &ViewId, host: &mut ViewerHost, _: &mut Navigator<'_>| {
                debug!(%view, "Counting up stats");
                for stat in &content::STATS {
                    host.effects.on_element_visible(ElementId::new(stat.element));
                }
            }),
        );
    }

    if has_view("skills") {
        builder = builder.on_activate(
            "skills",
            animation_fn(|view: &ViewId, host: &mut ViewerHost, _: &mut Navigator<'_>| {
                debug!(%view, "Filling skill bars");
                for skill in &content::SKILLS {
                    host.effects.on_element_visible(ElementId::new(skill.element));
                }
            }),
        );
    }

    if has_view("projects") {
        builder = builder.on_activate("projects", ProjectSlides);
    }

    if let Some(anchor) = anchor {
        builder = builder.initial_anchor(anchor);
    }

    builder.build()
}
