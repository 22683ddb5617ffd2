use std::collections::VecDeque;

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::indicator::{Indicator, IndicatorId, IndicatorSet};
use crate::keyboard::NavigationKey;
use crate::presentation::Presenter;
use crate::settings::{BindingPolicy, ControllerSettings, ReentrancyPolicy, UnknownViewPolicy};
use crate::state::NavigationState;
use crate::view::{View, ViewId};

/// Upper bound on deferred activations chained from one request
const MAX_DEFERRED_ACTIVATIONS: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationSource {
    Startup,
    Explicit,
    Indicator,
    Keyboard,
    Visibility,
    Deferred,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub from: ViewId,
    pub to: ViewId,
    pub source: ActivationSource,
}

impl Transition {
    pub fn is_self_transition(&self) -> bool {
        self.from == self.to
    }
}

/// Per-view animation, run after the view becomes the active one.
///
/// `deactivate` runs when the view is left or the controller is torn down,
/// and is where repeating timers started by `activate` get cancelled.
pub trait Animation<H> {
    fn activate(&mut self, view: &ViewId, host: &mut H, navigator: &mut Navigator<'_>);

    fn deactivate(&mut self, _view: &ViewId, _host: &mut H) {}
}

impl<H, F> Animation<H> for F
where
    F: FnMut(&ViewId, &mut H, &mut Navigator<'_>),
{
    fn activate(&mut self, view: &ViewId, host: &mut H, navigator: &mut Navigator<'_>) {
        self(view, host, navigator)
    }
}

/// Pins the closure signature so it is inferred as an `Animation`
pub fn animation_fn<H, F>(f: F) -> F
where
    F: FnMut(&ViewId, &mut H, &mut Navigator<'_>),
{
    f
}

type BoxedAnimation<H> = Box<dyn Animation<H>>;

/// The only way back into navigation from a running animation
pub struct Navigator<'a> {
    current: &'a ViewId,
    views: &'a [View],
    policy: ReentrancyPolicy,
    deferred: &'a mut VecDeque<ViewId>,
}

impl<'a> Navigator<'a> {
    /// The view whose activation is in progress
    pub fn current(&self) -> &ViewId {
        self.current
    }

    pub fn activate(&mut self, requested: &str) -> Result<()> {
        match self.policy {
            ReentrancyPolicy::Reject => {
                warn!(requested, in_progress = %self.current, "Nested activation rejected");
                Err(Error::ReentrantActivation {
                    requested: requested.to_string(),
                    in_progress: self.current.clone(),
                })
            }
            ReentrancyPolicy::Defer => {
                let view = self
                    .views
                    .iter()
                    .find(|view| view.id == *requested)
                    .ok_or_else(|| Error::UnknownView(requested.to_string()))?;

                debug!(requested, in_progress = %self.current, "Nested activation deferred");
                self.deferred.push_back(view.id.clone());

                Ok(())
            }
        }
    }
}

pub struct ViewControllerBuilder<H> {
    views: Vec<(String, String)>,
    indicators: Vec<(String, String)>,
    animations: Vec<(String, BoxedAnimation<H>)>,
    anchor: Option<String>,
    settings: ControllerSettings,
}

impl<H> ViewControllerBuilder<H> {
    pub fn new() -> Self {
        Self {
            views: vec![],
            indicators: vec![],
            animations: vec![],
            anchor: None,
            settings: ControllerSettings::new(),
        }
    }

    pub fn register_view(mut self, id: &str, title: &str) -> Self {
        self.views.push((id.to_string(), title.to_string()));
        self
    }

    pub fn register_indicator(mut self, label: &str, view: &str) -> Self {
        self.indicators.push((label.to_string(), view.to_string()));
        self
    }

    pub fn on_activate<A>(mut self, view: &str, animation: A) -> Self
    where
        A: Animation<H> + 'static,
    {
        self.animations.push((view.to_string(), Box::new(animation)));
        self
    }

    /// Deep link, e.g. `#skills`; unknown anchors fall back to the first view
    pub fn initial_anchor(mut self, anchor: &str) -> Self {
        self.anchor = Some(anchor.to_string());
        self
    }

    pub fn settings(mut self, settings: ControllerSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn build(self) -> Result<ViewController<H>> {
        if self.views.is_empty() {
            return Err(Error::NoViews);
        }

        let mut views: Vec<View> = Vec::with_capacity(self.views.len());
        for (ordinal, (id, title)) in self.views.into_iter().enumerate() {
            let id = ViewId::parse(&id)?;
            if views.iter().any(|view| view.id == id) {
                return Err(Error::DuplicateView(id));
            }
            views.push(View { id, title, ordinal });
        }

        let position = |id: &str| views.iter().position(|view| view.id == *id);

        let mut indicators = Vec::with_capacity(self.indicators.len());
        for (index, (label, view)) in self.indicators.into_iter().enumerate() {
            let ordinal = position(view.as_str()).ok_or_else(|| Error::UnknownView(view.clone()))?;
            indicators.push(Indicator {
                id: IndicatorId(index),
                label,
                view: views[ordinal].id.clone(),
                ordinal,
                active: false,
            });
        }
        let mut indicators = IndicatorSet::new(indicators, views.len());

        for view in &views {
            if indicators.for_view(view.ordinal).is_empty() {
                match self.settings.bindings {
                    BindingPolicy::Strict => return Err(Error::MissingIndicator(view.id.clone())),
                    BindingPolicy::Tolerant => {
                        warn!(view = %view.id, "View has no indicator")
                    }
                }
            }
        }

        let mut animations: Vec<Option<BoxedAnimation<H>>> =
            (0..views.len()).map(|_| None).collect();
        for (view, animation) in self.animations {
            let ordinal = position(view.as_str()).ok_or_else(|| Error::UnknownView(view.clone()))?;
            if animations[ordinal].is_some() {
                return Err(Error::DuplicateAnimation(views[ordinal].id.clone()));
            }
            animations[ordinal] = Some(animation);
        }

        let initial = match &self.anchor {
            Some(anchor) => {
                match ViewId::from_anchor(anchor)
                    .ok()
                    .and_then(|id| position(id.as_str()))
                {
                    Some(ordinal) => ordinal,
                    None => {
                        warn!(anchor = anchor.as_str(), "Unknown anchor, starting at the first view");
                        0
                    }
                }
            }
            None => 0,
        };

        for id in indicators.for_view(initial).to_vec() {
            indicators.set_active(id, true);
        }

        info!(
            views = views.len(),
            indicators = indicators.len(),
            initial = %views[initial].id,
            "View controller ready"
        );

        Ok(ViewController {
            views,
            animations,
            indicators,
            state: NavigationState::new(initial),
            settings: self.settings,
            deferred: VecDeque::new(),
        })
    }
}

impl<H> Default for ViewControllerBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps exactly one view active and the indicators in sync with it
pub struct ViewController<H> {
    views: Vec<View>,
    animations: Vec<Option<BoxedAnimation<H>>>,
    indicators: IndicatorSet,
    state: NavigationState,
    settings: ControllerSettings,
    deferred: VecDeque<ViewId>,
}

impl<H> ViewController<H> {
    pub fn builder() -> ViewControllerBuilder<H> {
        ViewControllerBuilder::new()
    }

    pub fn active_view(&self) -> &ViewId {
        &self.views[self.state.active()].id
    }

    pub fn active_ordinal(&self) -> usize {
        self.state.active()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn views(&self) -> &[View] {
        &self.views
    }

    pub fn view(&self, id: &str) -> Option<&View> {
        self.views.iter().find(|view| view.id == *id)
    }

    pub fn indicators(&self) -> &IndicatorSet {
        &self.indicators
    }

    pub fn is_indicator_active(&self, indicator: IndicatorId) -> bool {
        self.indicators
            .get(indicator)
            .map(Indicator::is_active)
            .unwrap_or(false)
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.views.iter().position(|view| view.id == *id)
    }
}

impl<H: Presenter> ViewController<H> {
    /// Presents the initial view and runs its animation
    pub fn start(&mut self, host: &mut H) -> Result<Transition> {
        self.ensure_idle(self.state.active())?;

        let active = self.state.active();
        for view in &self.views {
            if view.ordinal != active {
                host.hide_view(&view.id);
            }
        }
        host.show_view(&self.views[active].id);
        for indicator in self.indicators.iter() {
            host.set_indicator(indicator.id, indicator.ordinal == active);
        }

        self.animate(active, host);
        self.drain_deferred(host);

        let view = self.views[active].id.clone();
        Ok(Transition {
            from: view.clone(),
            to: view,
            source: ActivationSource::Startup,
        })
    }

    /// Makes `target` the sole active view.
    ///
    /// `Ok(None)` means the request was dropped under
    /// `UnknownViewPolicy::Ignore`.
    pub fn activate(&mut self, target: &str, host: &mut H) -> Result<Option<Transition>> {
        self.request(target, ActivationSource::Explicit, host)
    }

    pub fn on_indicator_click(
        &mut self,
        indicator: IndicatorId,
        host: &mut H,
    ) -> Result<Option<Transition>> {
        let ordinal = self
            .indicators
            .get(indicator)
            .map(Indicator::ordinal)
            .ok_or(Error::UnknownIndicator(indicator.0))?;

        self.activate_ordinal(ordinal, ActivationSource::Indicator, host)
            .map(Some)
    }

    pub fn on_key(&mut self, key: NavigationKey, host: &mut H) -> Result<Option<Transition>> {
        self.step(key, ActivationSource::Keyboard, host)
    }

    /// A view crossed into the viewport.
    ///
    /// The active view is not animated again, its activation already did.
    pub fn on_visible(&mut self, view: &str, host: &mut H) -> Result<Option<Transition>> {
        if *self.active_view() == *view {
            debug!(view, "Visible view already active");
            return Ok(None);
        }

        self.request(view, ActivationSource::Visibility, host)
    }

    pub fn next(&mut self, host: &mut H) -> Result<Option<Transition>> {
        self.step(NavigationKey::Next, ActivationSource::Explicit, host)
    }

    pub fn previous(&mut self, host: &mut H) -> Result<Option<Transition>> {
        self.step(NavigationKey::Previous, ActivationSource::Explicit, host)
    }

    pub fn goto_ordinal(&mut self, ordinal: usize, host: &mut H) -> Result<Option<Transition>> {
        match self.views.get(ordinal) {
            Some(_) => self
                .activate_ordinal(ordinal, ActivationSource::Explicit, host)
                .map(Some),
            None => Ok(None),
        }
    }

    /// Ends the session, cancelling whatever the active view's animation runs
    pub fn teardown(&mut self, host: &mut H) {
        let active = self.state.active();

        if let Some(animation) = self.animations[active].as_mut() {
            animation.deactivate(&self.views[active].id, host);
        }
        self.deferred.clear();

        info!(view = %self.views[active].id, "View controller torn down");
    }

    fn step(
        &mut self,
        key: NavigationKey,
        source: ActivationSource,
        host: &mut H,
    ) -> Result<Option<Transition>> {
        match key.target(self.state.active(), self.views.len(), self.settings.wrap) {
            Some(ordinal) => self.activate_ordinal(ordinal, source, host).map(Some),
            None => {
                debug!(?key, "No view for key");
                Ok(None)
            }
        }
    }

    fn request(
        &mut self,
        target: &str,
        source: ActivationSource,
        host: &mut H,
    ) -> Result<Option<Transition>> {
        match self.position(target) {
            Some(ordinal) => self.activate_ordinal(ordinal, source, host).map(Some),
            None => match self.settings.unknown_view {
                UnknownViewPolicy::Reject => {
                    warn!(view = target, "Activation of unknown view rejected");
                    Err(Error::UnknownView(target.to_string()))
                }
                UnknownViewPolicy::Ignore => {
                    warn!(view = target, "Activation of unknown view ignored");
                    Ok(None)
                }
            },
        }
    }

    fn ensure_idle(&self, requested: usize) -> Result<()> {
        match self.state.activating() {
            Some(running) => Err(Error::ReentrantActivation {
                requested: self.views[requested].id.to_string(),
                in_progress: self.views[running].id.clone(),
            }),
            None => Ok(()),
        }
    }

    fn activate_ordinal(
        &mut self,
        ordinal: usize,
        source: ActivationSource,
        host: &mut H,
    ) -> Result<Transition> {
        self.ensure_idle(ordinal)?;

        let transition = self.transition(ordinal, source, host);
        self.drain_deferred(host);

        Ok(transition)
    }

    fn transition(&mut self, ordinal: usize, source: ActivationSource, host: &mut H) -> Transition {
        let previous = self.state.active();
        let from = self.views[previous].id.clone();
        let to = self.views[ordinal].id.clone();

        info!(%from, %to, ?source, "Activate view");

        // The old view is fully retired before the new one shows up
        if previous != ordinal {
            if let Some(animation) = self.animations[previous].as_mut() {
                animation.deactivate(&from, host);
            }
            host.hide_view(&from);
            self.mark(previous, false, host);
        }

        self.state.set_active(ordinal);

        if previous != ordinal {
            host.show_view(&to);
            self.mark(ordinal, true, host);
        }

        self.animate(ordinal, host);

        Transition { from, to, source }
    }

    fn mark(&mut self, ordinal: usize, active: bool, host: &mut H) {
        for id in self.indicators.for_view(ordinal).to_vec() {
            self.indicators.set_active(id, active);
            host.set_indicator(id, active);
        }
    }

    fn animate(&mut self, ordinal: usize, host: &mut H) {
        let Some(animation) = self.animations[ordinal].as_mut() else {
            return;
        };

        self.state.begin(ordinal);

        let view = &self.views[ordinal].id;
        let mut navigator = Navigator {
            current: view,
            views: &self.views,
            policy: self.settings.reentrancy,
            deferred: &mut self.deferred,
        };
        animation.activate(view, host, &mut navigator);

        self.state.finish();
    }

    fn drain_deferred(&mut self, host: &mut H) {
        let mut chained = 0;

        while let Some(view) = self.deferred.pop_front() {
            if chained == MAX_DEFERRED_ACTIVATIONS {
                warn!(
                    dropped = self.deferred.len() + 1,
                    "Too many chained activations, dropping the rest"
                );
                self.deferred.clear();
                break;
            }
            chained += 1;

            if let Some(ordinal) = self.position(view.as_str()) {
                self.transition(ordinal, ActivationSource::Deferred, host);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use proptest::test_runner::{Config, FileFailurePersistence, TestRunner};

    use super::*;
    use crate::presentation::PresentationCommand;
    use crate::settings::{BindingPolicy, ReentrancyPolicy};

    #[derive(Default)]
    struct TestHost {
        commands: Vec<PresentationCommand>,
        animated: Vec<String>,
        deactivated: Vec<String>,
        nested: Vec<Result<()>>,
    }

    impl Presenter for TestHost {
        fn show_view(&mut self, view: &ViewId) {
            self.commands.show_view(view);
        }

        fn hide_view(&mut self, view: &ViewId) {
            self.commands.hide_view(view);
        }

        fn set_indicator(&mut self, indicator: IndicatorId, active: bool) {
            self.commands.set_indicator(indicator, active);
        }
    }

    fn record(view: &ViewId, host: &mut TestHost, _navigator: &mut Navigator<'_>) {
        host.animated.push(view.to_string());
    }

    fn three_views() -> ViewControllerBuilder<TestHost> {
        ViewController::builder()
            .register_view("home", "Home")
            .register_view("about", "About")
            .register_view("skills", "Skills")
            .register_indicator("Home", "home")
            .register_indicator("About", "about")
            .register_indicator("Skills", "skills")
    }

    fn animated_three_views() -> ViewController<TestHost> {
        three_views()
            .on_activate("home", record)
            .on_activate("about", record)
            .on_activate("skills", record)
            .build()
            .unwrap()
    }

    fn assert_consistent(controller: &ViewController<TestHost>) {
        let active = controller.active_view();

        for indicator in controller.indicators().iter() {
            assert_eq!(indicator.is_active(), indicator.view == *active);
        }
        assert!(!controller.state().is_activating());
    }

    #[test]
    fn activate_skills() {
        let mut controller = animated_three_views();
        let mut host = TestHost::default();

        let transition = controller.activate("skills", &mut host).unwrap().unwrap();

        assert_eq!(transition.from, "home");
        assert_eq!(transition.to, "skills");
        assert_eq!(controller.active_view(), &"skills");
        assert!(controller.is_indicator_active(IndicatorId(2)));
        assert!(!controller.is_indicator_active(IndicatorId(0)));
        assert_eq!(host.animated, vec!["skills"]);
        assert_consistent(&controller);
    }

    #[test]
    fn deactivation_precedes_activation() {
        let mut controller = animated_three_views();
        let mut host = TestHost::default();

        controller.activate("skills", &mut host).unwrap();

        assert_eq!(
            host.commands,
            vec![
                PresentationCommand::Hide(ViewId::parse("home").unwrap()),
                PresentationCommand::Indicator {
                    indicator: IndicatorId(0),
                    active: false
                },
                PresentationCommand::Show(ViewId::parse("skills").unwrap()),
                PresentationCommand::Indicator {
                    indicator: IndicatorId(2),
                    active: true
                },
            ]
        );
    }

    #[test]
    fn next_wraps_from_last_view() {
        let mut controller = animated_three_views();
        let mut host = TestHost::default();

        controller.activate("skills", &mut host).unwrap();
        let transition = controller
            .on_key(NavigationKey::Next, &mut host)
            .unwrap()
            .unwrap();

        assert_eq!(transition.to, "home");
        assert_eq!(transition.source, ActivationSource::Keyboard);
        assert_consistent(&controller);
    }

    #[test]
    fn next_stops_at_last_view_without_wrap() {
        let mut controller = three_views()
            .settings(ControllerSettings {
                wrap: false,
                ..ControllerSettings::new()
            })
            .build()
            .unwrap();
        let mut host = TestHost::default();

        controller.activate("skills", &mut host).unwrap();

        assert_eq!(controller.next(&mut host).unwrap(), None);
        assert_eq!(controller.active_view(), &"skills");
    }

    #[test]
    fn goto_ordinal_ignores_out_of_range() {
        let mut controller = animated_three_views();
        let mut host = TestHost::default();

        let transition = controller.goto_ordinal(1, &mut host).unwrap().unwrap();
        assert_eq!(transition.to, "about");
        assert_eq!(controller.active_ordinal(), 1);

        assert_eq!(controller.goto_ordinal(3, &mut host).unwrap(), None);
        assert_eq!(controller.active_view(), &"about");
    }

    #[test]
    fn self_activation_reruns_animation_only() {
        let mut controller = animated_three_views();
        let mut host = TestHost::default();

        controller.activate("about", &mut host).unwrap();
        host.commands.clear();

        let transition = controller.activate("about", &mut host).unwrap().unwrap();

        assert!(transition.is_self_transition());
        assert_eq!(host.animated, vec!["about", "about"]);
        assert!(host.commands.is_empty());
        assert_consistent(&controller);
    }

    #[test]
    fn unknown_view_is_rejected() {
        let mut controller = animated_three_views();
        let mut host = TestHost::default();

        controller.activate("about", &mut host).unwrap();
        let result = controller.activate("nonexistent", &mut host);

        assert!(matches!(result, Err(Error::UnknownView(id)) if id == "nonexistent"));
        assert_eq!(controller.active_view(), &"about");
        assert_consistent(&controller);
    }

    #[test]
    fn unknown_view_is_ignored_when_lenient() {
        let mut controller = three_views()
            .settings(ControllerSettings::lenient())
            .build()
            .unwrap();
        let mut host = TestHost::default();

        assert_eq!(controller.activate("nonexistent", &mut host).unwrap(), None);
        assert_eq!(controller.active_view(), &"home");
        assert!(host.commands.is_empty());
    }

    #[test]
    fn indicator_click_activates_bound_view() {
        let mut controller = three_views()
            .register_indicator("Footer about", "about")
            .build()
            .unwrap();
        let mut host = TestHost::default();

        let transition = controller
            .on_indicator_click(IndicatorId(3), &mut host)
            .unwrap()
            .unwrap();

        assert_eq!(transition.to, "about");
        assert!(controller.is_indicator_active(IndicatorId(1)));
        assert!(controller.is_indicator_active(IndicatorId(3)));

        assert!(matches!(
            controller.on_indicator_click(IndicatorId(9), &mut host),
            Err(Error::UnknownIndicator(9))
        ));
    }

    #[test]
    fn digit_keys_select_by_ordinal() {
        let mut controller = animated_three_views();
        let mut host = TestHost::default();

        controller.on_key(NavigationKey::Digit(2), &mut host).unwrap();
        assert_eq!(controller.active_view(), &"about");

        assert_eq!(
            controller.on_key(NavigationKey::Digit(7), &mut host).unwrap(),
            None
        );
        assert_eq!(controller.active_view(), &"about");
    }

    #[test]
    fn visible_event_for_active_view_is_absorbed() {
        let mut controller = animated_three_views();
        let mut host = TestHost::default();

        controller.activate("skills", &mut host).unwrap();
        assert_eq!(controller.on_visible("skills", &mut host).unwrap(), None);
        assert_eq!(host.animated, vec!["skills"]);

        let transition = controller.on_visible("about", &mut host).unwrap().unwrap();
        assert_eq!(transition.source, ActivationSource::Visibility);
        assert_eq!(host.animated, vec!["skills", "about"]);
    }

    #[test]
    fn nested_activation_is_rejected() {
        let mut controller = three_views()
            .on_activate(
                "about",
                animation_fn(|_view, host: &mut TestHost, navigator| {
                    let result = navigator.activate("home");
                    host.nested.push(result);
                }),
            )
            .build()
            .unwrap();
        let mut host = TestHost::default();

        controller.activate("about", &mut host).unwrap();

        assert!(matches!(
            host.nested[0],
            Err(Error::ReentrantActivation { ref requested, ref in_progress })
                if requested == "home" && *in_progress == "about"
        ));
        assert_eq!(controller.active_view(), &"about");
        assert_consistent(&controller);
    }

    #[test]
    fn nested_activation_is_deferred() {
        let mut controller = three_views()
            .settings(ControllerSettings {
                reentrancy: ReentrancyPolicy::Defer,
                ..ControllerSettings::new()
            })
            .on_activate(
                "about",
                animation_fn(|_view, host: &mut TestHost, navigator| {
                    host.animated.push("about".to_string());
                    let result = navigator.activate("skills");
                    host.nested.push(result);
                }),
            )
            .on_activate("skills", record)
            .build()
            .unwrap();
        let mut host = TestHost::default();

        let transition = controller.activate("about", &mut host).unwrap().unwrap();

        assert_eq!(transition.to, "about");
        assert!(host.nested[0].is_ok());
        assert_eq!(host.animated, vec!["about", "skills"]);
        assert_eq!(controller.active_view(), &"skills");
        assert_consistent(&controller);
    }

    #[test]
    fn deferred_ping_pong_is_bounded() {
        let ping_pong = |target: &'static str| {
            animation_fn(move |_view, host: &mut TestHost, navigator| {
                host.animated.push(target.to_string());
                let _ = navigator.activate(target);
            })
        };

        let mut controller = three_views()
            .settings(ControllerSettings {
                reentrancy: ReentrancyPolicy::Defer,
                ..ControllerSettings::new()
            })
            .on_activate("about", ping_pong("skills"))
            .on_activate("skills", ping_pong("about"))
            .build()
            .unwrap();
        let mut host = TestHost::default();

        controller.activate("about", &mut host).unwrap();

        assert_eq!(host.animated.len(), 1 + MAX_DEFERRED_ACTIVATIONS);
        assert_consistent(&controller);
    }

    #[test]
    fn deactivate_runs_when_leaving_and_on_teardown() {
        struct Slides;

        impl Animation<TestHost> for Slides {
            fn activate(&mut self, view: &ViewId, host: &mut TestHost, _: &mut Navigator<'_>) {
                host.animated.push(view.to_string());
            }

            fn deactivate(&mut self, view: &ViewId, host: &mut TestHost) {
                host.deactivated.push(view.to_string());
            }
        }

        let mut controller = three_views().on_activate("about", Slides).build().unwrap();
        let mut host = TestHost::default();

        controller.activate("about", &mut host).unwrap();
        controller.activate("skills", &mut host).unwrap();
        assert_eq!(host.deactivated, vec!["about"]);

        controller.activate("about", &mut host).unwrap();
        controller.teardown(&mut host);
        assert_eq!(host.deactivated, vec!["about", "about"]);
    }

    #[test]
    fn start_presents_initial_view() {
        let mut controller = animated_three_views();
        let mut host = TestHost::default();

        let transition = controller.start(&mut host).unwrap();

        assert_eq!(transition.source, ActivationSource::Startup);
        assert_eq!(host.animated, vec!["home"]);
        assert!(host
            .commands
            .contains(&PresentationCommand::Hide(ViewId::parse("about").unwrap())));
        assert!(host
            .commands
            .contains(&PresentationCommand::Show(ViewId::parse("home").unwrap())));
    }

    #[test]
    fn anchor_selects_initial_view() {
        let controller = three_views().initial_anchor("#about").build().unwrap();
        assert_eq!(controller.active_view(), &"about");
        assert!(controller.is_indicator_active(IndicatorId(1)));

        let controller = three_views().initial_anchor("#missing").build().unwrap();
        assert_eq!(controller.active_view(), &"home");
    }

    #[test]
    fn build_validation() {
        let no_views = ViewController::<TestHost>::builder().build();
        assert!(matches!(no_views, Err(Error::NoViews)));

        let invalid = three_views().register_view("bad id", "Bad").build();
        assert!(matches!(invalid, Err(Error::InvalidViewId(_))));

        let duplicate = three_views().register_view("home", "Again").build();
        assert!(matches!(duplicate, Err(Error::DuplicateView(_))));

        let dangling = three_views().register_indicator("Blog", "blog").build();
        assert!(matches!(dangling, Err(Error::UnknownView(id)) if id == "blog"));

        let twice = three_views()
            .on_activate("home", record)
            .on_activate("home", record)
            .build();
        assert!(matches!(twice, Err(Error::DuplicateAnimation(_))));

        let orphan_animation = three_views().on_activate("blog", record).build();
        assert!(matches!(orphan_animation, Err(Error::UnknownView(_))));
    }

    #[test]
    fn missing_indicator_depends_on_binding_policy() {
        let strict = three_views().register_view("contact", "Contact").build();
        assert!(matches!(strict, Err(Error::MissingIndicator(id)) if id == "contact"));

        let tolerant = three_views()
            .register_view("contact", "Contact")
            .settings(ControllerSettings {
                bindings: BindingPolicy::Tolerant,
                ..ControllerSettings::new()
            })
            .build();
        assert!(tolerant.is_ok());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Activate(usize),
        Click(usize),
        Key(NavigationKey),
        Visible(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        let key = prop_oneof![
            Just(NavigationKey::Next),
            Just(NavigationKey::Previous),
            Just(NavigationKey::First),
            Just(NavigationKey::Last),
            (0u8..10).prop_map(NavigationKey::Digit),
        ];

        // Index 3 is past the declared views
        prop_oneof![
            (0usize..4).prop_map(Op::Activate),
            (0usize..4).prop_map(Op::Click),
            key.prop_map(Op::Key),
            (0usize..4).prop_map(Op::Visible),
        ]
    }

    #[test]
    fn exactly_one_view_active_for_any_sequence() {
        let mut runner = TestRunner::new(Config {
            failure_persistence: Some(Box::new(FileFailurePersistence::Off)),
            ..Config::default()
        });

        let names = ["home", "about", "skills", "nonexistent"];

        runner
            .run(&proptest::collection::vec(op(), 0..40), |ops| {
                let mut controller = animated_three_views();
                let mut host = TestHost::default();
                controller.start(&mut host).unwrap();

                let mut shown = vec![true, false, false];

                for op in ops {
                    let before = controller.active_ordinal();
                    let result = match op {
                        Op::Activate(i) => controller.activate(names[i], &mut host),
                        Op::Click(i) => controller.on_indicator_click(IndicatorId(i), &mut host),
                        Op::Key(key) => controller.on_key(key, &mut host),
                        Op::Visible(i) => controller.on_visible(names[i], &mut host),
                    };

                    if result.is_err() {
                        prop_assert_eq!(controller.active_ordinal(), before);
                    }

                    for command in host.commands.drain(..) {
                        match command {
                            PresentationCommand::Show(id) => {
                                shown[controller.view(id.as_str()).unwrap().ordinal] = true
                            }
                            PresentationCommand::Hide(id) => {
                                shown[controller.view(id.as_str()).unwrap().ordinal] = false
                            }
                            PresentationCommand::Indicator { .. } => {}
                        }
                    }

                    prop_assert_eq!(shown.iter().filter(|shown| **shown).count(), 1);
                    prop_assert!(shown[controller.active_ordinal()]);

                    let active = controller.active_view().clone();
                    for indicator in controller.indicators().iter() {
                        prop_assert_eq!(indicator.is_active(), indicator.view == active);
                    }
                }

                Ok(())
            })
            .unwrap();
    }
}
