use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use pf_navigation::repeat_guard::RepeatGuard;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info};

use crate::console;
use crate::contact_form::ContactForm;
use crate::counter::CounterAnimation;
use crate::decor::CursorTrail;
use crate::error::Result;
use crate::konami::{EasterEgg, KonamiDetector};
use crate::loading::LoadingScreen;
use crate::mobile_menu::MobileMenu;
use crate::notification::{NotificationKind, Notifications};
use crate::progress_bar::ProgressBarAnimation;
use crate::scheduler::{Fired, Scheduler, TimerId};
use crate::slides::SlideShow;
use crate::theme::{FlagStore, Theme, ThemeToggle};
use crate::typing::TypingEffect;

/// Name of an element that animates when it scrolls into view
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EffectTask {
    LoadingTick,
    LoadingFade,
    LoadingHide,
    HeroReveal(usize),
    CodeWindowReveal,
    CounterFrame(ElementId),
    ProgressTick(ElementId),
    TypingStep,
    NotificationShow(u64),
    NotificationClose(u64),
    NotificationRemove(u64),
    FormSent,
    FormReset,
    ThemeSpinEnd,
    EasterEggFlash,
    EasterEggEnd,
    SlideAdvance,
    ConsoleJoke,
}

/// Content-dependent parts of the runtime
#[derive(Debug, Clone)]
pub struct EffectsSetup {
    pub phrases: Vec<String>,
    pub hero_elements: usize,
    pub slides: usize,
    pub slide_interval: Duration,
}

impl Default for EffectsSetup {
    fn default() -> Self {
        Self {
            phrases: vec![],
            hero_elements: 0,
            slides: 0,
            slide_interval: SlideShow::DEFAULT_INTERVAL,
        }
    }
}

/// Owns every peripheral effect and drives them from one virtual clock.
///
/// Hosts call `start` once, forward their events and call `advance` with the
/// frame time. All timers fire from inside `advance`.
pub struct EffectsRuntime {
    scheduler: Scheduler<EffectTask>,
    guard: RepeatGuard<ElementId>,
    rng: StdRng,
    flags: Box<dyn FlagStore>,

    loading: LoadingScreen,
    loading_timer: Option<TimerId>,
    hero_elements: usize,
    hero_revealed: usize,
    code_window_revealed: bool,

    counters: BTreeMap<ElementId, CounterAnimation>,
    progress_bars: BTreeMap<ElementId, ProgressBarAnimation>,
    revealed: BTreeSet<ElementId>,

    typing: TypingEffect,
    notifications: Notifications,
    form: ContactForm,
    theme: ThemeToggle,
    konami: KonamiDetector,
    easter_egg: EasterEgg,
    easter_egg_timers: Vec<TimerId>,
    slides: SlideShow,
    menu: MobileMenu,
    cursor: CursorTrail,
    console: Vec<String>,
}

impl EffectsRuntime {
    pub fn new(setup: EffectsSetup, flags: Box<dyn FlagStore>, rng: StdRng) -> Self {
        let theme = ThemeToggle::load(flags.as_ref());

        Self {
            scheduler: Scheduler::new(),
            guard: RepeatGuard::new(),
            rng,
            flags,
            loading: LoadingScreen::new(),
            loading_timer: None,
            hero_elements: setup.hero_elements,
            hero_revealed: 0,
            code_window_revealed: false,
            counters: BTreeMap::new(),
            progress_bars: BTreeMap::new(),
            revealed: BTreeSet::new(),
            typing: TypingEffect::new(setup.phrases),
            notifications: Notifications::new(),
            form: ContactForm::new(),
            theme,
            konami: KonamiDetector::new(),
            easter_egg: EasterEgg::new(),
            easter_egg_timers: vec![],
            slides: SlideShow::new(setup.slides, setup.slide_interval),
            menu: MobileMenu::new(),
            cursor: CursorTrail::new(),
            console: vec![],
        }
    }

    /// Kicks off the page-load effects: loading screen, typing and the
    /// console greeting
    pub fn start(&mut self) {
        self.loading_timer = Some(
            self.scheduler
                .every(LoadingScreen::TICK, EffectTask::LoadingTick),
        );
        self.scheduler
            .after(TypingEffect::START_DELAY, EffectTask::TypingStep);

        self.console.push(console::BANNER.to_string());
        self.console.push(console::HIRE_ME.to_string());
        self.scheduler
            .after(console::JOKE_DELAY, EffectTask::ConsoleJoke);

        info!("Effects started");
    }

    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Moves the clock forward and runs every timer that became due
    pub fn advance(&mut self, elapsed: Duration) {
        self.scheduler.advance(elapsed);

        while let Some(fired) = self.scheduler.next_due() {
            self.dispatch(fired);
        }
    }

    pub fn register_counter(&mut self, element: ElementId, target: u64) {
        self.counters.insert(element, CounterAnimation::new(target));
    }

    pub fn register_progress_bar(&mut self, element: ElementId, percent: u8) {
        self.progress_bars
            .insert(element, ProgressBarAnimation::new(percent));
    }

    /// Starts the element's entrance animation. Each element animates once
    /// per session; false for repeats.
    pub fn on_element_visible(&mut self, element: ElementId) -> bool {
        if !self.guard.first_time(element.clone()) {
            return false;
        }

        debug!(element = element.as_str(), "Element revealed");
        self.revealed.insert(element.clone());

        if let Some(counter) = self.counters.get_mut(&element) {
            if counter.step() {
                self.scheduler.after(
                    CounterAnimation::FRAME,
                    EffectTask::CounterFrame(element.clone()),
                );
            }
        }

        if self.progress_bars.contains_key(&element) {
            self.scheduler.after(
                ProgressBarAnimation::TICK,
                EffectTask::ProgressTick(element),
            );
        }

        true
    }

    pub fn is_revealed(&self, element: &ElementId) -> bool {
        self.revealed.contains(element)
    }

    pub fn counter(&self, element: &ElementId) -> Option<&CounterAnimation> {
        self.counters.get(element)
    }

    pub fn progress_bar(&self, element: &ElementId) -> Option<&ProgressBarAnimation> {
        self.progress_bars.get(element)
    }

    pub fn notify(&mut self, message: &str, kind: NotificationKind) -> u64 {
        let id = self.notifications.push(message, kind);

        self.scheduler
            .after(Notifications::ENTER_DELAY, EffectTask::NotificationShow(id));
        self.scheduler
            .after(Notifications::AUTO_CLOSE, EffectTask::NotificationClose(id));

        id
    }

    pub fn close_notification(&mut self, id: u64) {
        if self.notifications.close(id) {
            self.scheduler.after(
                Notifications::LEAVE_DURATION,
                EffectTask::NotificationRemove(id),
            );
        }
    }

    pub fn submit_form(&mut self) -> Result<()> {
        self.form.submit()?;
        self.scheduler
            .after(ContactForm::SEND_DURATION, EffectTask::FormSent);

        info!("Contact form submitted");
        Ok(())
    }

    /// Flips the theme. The spin always runs, even when the preference
    /// could not be written.
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let result = self.theme.toggle(self.flags.as_mut());
        self.scheduler
            .after(ThemeToggle::SPIN, EffectTask::ThemeSpinEnd);

        result
    }

    /// Feeds a key to the konami detector; true when it set off the easter
    /// egg
    pub fn key_pressed(&mut self, key: &str) -> bool {
        if !self.konami.feed(key) {
            return false;
        }

        for timer in self.easter_egg_timers.drain(..) {
            self.scheduler.cancel(timer);
        }
        self.easter_egg_timers.push(
            self.scheduler
                .every(EasterEgg::FLASH, EffectTask::EasterEggFlash),
        );
        self.easter_egg_timers.push(
            self.scheduler
                .after(EasterEgg::DURATION, EffectTask::EasterEggEnd),
        );
        self.notify(EasterEgg::MESSAGE, NotificationKind::Success);

        info!("Easter egg activated");
        true
    }

    pub fn start_slides(&mut self) {
        self.slides
            .start(&mut self.scheduler, EffectTask::SlideAdvance);
    }

    pub fn stop_slides(&mut self) {
        self.slides.cancel(&mut self.scheduler);
    }

    pub fn select_slide(&mut self, index: usize) {
        self.slides.select(index);
    }

    pub fn loading(&self) -> &LoadingScreen {
        &self.loading
    }

    pub fn hero_revealed(&self) -> usize {
        self.hero_revealed
    }

    pub fn is_code_window_revealed(&self) -> bool {
        self.code_window_revealed
    }

    pub fn typing_text(&self) -> &str {
        self.typing.text()
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn theme(&self) -> &ThemeToggle {
        &self.theme
    }

    pub fn easter_egg(&self) -> &EasterEgg {
        &self.easter_egg
    }

    pub fn slides(&self) -> &SlideShow {
        &self.slides
    }

    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut MobileMenu {
        &mut self.menu
    }

    pub fn cursor(&self) -> &CursorTrail {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut CursorTrail {
        &mut self.cursor
    }

    pub fn console_lines(&self) -> &[String] {
        &self.console
    }

    fn dispatch(&mut self, fired: Fired<EffectTask>) {
        match fired.task {
            EffectTask::LoadingTick => {
                let increment = self.rng.gen_range(0.0..LoadingScreen::MAX_INCREMENT);
                if self.loading.tick(increment) {
                    if let Some(timer) = self.loading_timer.take() {
                        self.scheduler.cancel(timer);
                    }
                    self.scheduler
                        .after(LoadingScreen::FADE_DELAY, EffectTask::LoadingFade);
                }
            }
            EffectTask::LoadingFade => {
                self.loading.fade();
                self.scheduler
                    .after(LoadingScreen::HIDE_DELAY, EffectTask::LoadingHide);
            }
            EffectTask::LoadingHide => {
                self.loading.hide();
                debug!(at = ?fired.at, "Loading screen hidden");

                for index in 0..self.hero_elements {
                    self.scheduler
                        .after(HERO_STAGGER * index as u32, EffectTask::HeroReveal(index));
                }
                self.scheduler
                    .after(CODE_WINDOW_DELAY, EffectTask::CodeWindowReveal);
            }
            EffectTask::HeroReveal(index) => {
                self.hero_revealed = self.hero_revealed.max(index + 1);
            }
            EffectTask::CodeWindowReveal => self.code_window_revealed = true,
            EffectTask::CounterFrame(element) => {
                let running = self
                    .counters
                    .get_mut(&element)
                    .map_or(false, |counter| counter.step());
                if running {
                    self.scheduler
                        .after(CounterAnimation::FRAME, EffectTask::CounterFrame(element));
                }
            }
            EffectTask::ProgressTick(element) => {
                let running = self
                    .progress_bars
                    .get_mut(&element)
                    .map_or(false, |bar| bar.step());
                if running {
                    self.scheduler
                        .after(ProgressBarAnimation::TICK, EffectTask::ProgressTick(element));
                }
            }
            EffectTask::TypingStep => {
                if let Some(delay) = self.typing.step() {
                    self.scheduler.after(delay, EffectTask::TypingStep);
                }
            }
            EffectTask::NotificationShow(id) => self.notifications.show(id),
            EffectTask::NotificationClose(id) => self.close_notification(id),
            EffectTask::NotificationRemove(id) => self.notifications.remove(id),
            EffectTask::FormSent => {
                self.form.sent();
                self.notify(ContactForm::SENT_MESSAGE, NotificationKind::Success);
                self.scheduler
                    .after(ContactForm::RESET_DELAY, EffectTask::FormReset);
            }
            EffectTask::FormReset => self.form.reset(),
            EffectTask::ThemeSpinEnd => self.theme.stop_spin(),
            EffectTask::EasterEggFlash => self.easter_egg.flash(),
            EffectTask::EasterEggEnd => {
                for timer in self.easter_egg_timers.drain(..) {
                    self.scheduler.cancel(timer);
                }
                self.easter_egg.stop();
            }
            EffectTask::SlideAdvance => {
                if self.slides.owns(fired.id) {
                    self.slides.advance();
                }
            }
            EffectTask::ConsoleJoke => {
                let joke = console::random_joke(&mut self.rng);
                self.console.push(joke.to_string());
            }
        }
    }
}

const HERO_STAGGER: Duration = Duration::from_millis(200);
const CODE_WINDOW_DELAY: Duration = Duration::from_millis(1000);

impl std::fmt::Debug for EffectsRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectsRuntime")
            .field("now", &self.scheduler.now())
            .field("pending", &self.scheduler.pending())
            .field("theme", &self.theme.theme())
            .field("loading", &self.loading.phase())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact_form::FormStage;
    use crate::error::Error;
    use crate::loading::LoadingPhase;
    use crate::notification::NotificationStage;
    use crate::theme::MemoryFlagStore;
    use rand::SeedableRng;

    fn runtime() -> EffectsRuntime {
        let setup = EffectsSetup {
            phrases: vec!["Hi".to_string()],
            hero_elements: 3,
            slides: 3,
            slide_interval: Duration::from_millis(100),
        };

        EffectsRuntime::new(
            setup,
            Box::new(MemoryFlagStore::new()),
            StdRng::seed_from_u64(42),
        )
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn counter_runs_once_per_session() {
        let mut effects = runtime();
        let years = ElementId::new("years");
        effects.register_counter(years.clone(), 42);

        assert!(effects.on_element_visible(years.clone()));
        effects.advance(ms(16 * 120));
        assert_eq!(effects.counter(&years).unwrap().displayed(), 42);

        let pending = effects.pending_timers();
        assert!(!effects.on_element_visible(years.clone()));
        assert_eq!(effects.pending_timers(), pending);
        assert_eq!(effects.counter(&years).unwrap().displayed(), 42);
    }

    #[test]
    fn progress_bar_fills_to_target() {
        let mut effects = runtime();
        let rust = ElementId::new("rust");
        effects.register_progress_bar(rust.clone(), 90);

        effects.on_element_visible(rust.clone());
        effects.advance(ms(30 * 10));
        assert_eq!(effects.progress_bar(&rust).unwrap().width(), 20);

        effects.advance(ms(30 * 50));
        assert_eq!(effects.progress_bar(&rust).unwrap().width(), 90);
        assert_eq!(effects.pending_timers(), 0);
    }

    #[test]
    fn plain_elements_are_only_revealed() {
        let mut effects = runtime();
        let title = ElementId::from("about-title");

        assert!(effects.on_element_visible(title.clone()));
        assert!(effects.is_revealed(&title));
        assert_eq!(effects.pending_timers(), 0);
    }

    #[test]
    fn loading_then_hero_reveal() {
        let mut effects = runtime();
        effects.start();

        // 0..30 % per tick needs at least four ticks
        effects.advance(ms(300));
        assert_eq!(effects.loading().phase(), LoadingPhase::Loading);

        for _ in 0..200 {
            if !effects.loading().is_visible() {
                break;
            }
            effects.advance(ms(100));
        }
        assert_eq!(effects.loading().phase(), LoadingPhase::Hidden);
        assert_eq!(effects.loading().progress(), 100.0);

        effects.advance(ms(1000));
        assert_eq!(effects.hero_revealed(), 3);
        assert!(effects.is_code_window_revealed());
    }

    #[test]
    fn typing_starts_after_a_second() {
        let mut effects = runtime();
        effects.start();

        effects.advance(ms(999));
        assert_eq!(effects.typing_text(), "");

        effects.advance(ms(1));
        assert_eq!(effects.typing_text(), "H");
    }

    #[test]
    fn console_greets_then_jokes() {
        let mut effects = runtime();
        effects.start();
        assert_eq!(effects.console_lines().len(), 2);

        effects.advance(console::JOKE_DELAY);
        assert_eq!(effects.console_lines().len(), 3);
        assert!(console::JOKES.contains(&effects.console_lines()[2].as_str()));
    }

    #[test]
    fn notification_auto_closes() {
        let mut effects = runtime();
        let id = effects.notify("Hello", NotificationKind::Info);

        effects.advance(ms(100));
        assert_eq!(
            effects.notifications().iter().next().unwrap().stage,
            NotificationStage::Shown
        );

        effects.advance(ms(4900));
        assert_eq!(
            effects.notifications().iter().next().unwrap().stage,
            NotificationStage::Leaving
        );

        effects.advance(ms(300));
        assert!(effects.notifications().is_empty());

        // Closing an already removed toast is harmless
        effects.close_notification(id);
        assert_eq!(effects.pending_timers(), 0);
    }

    #[test]
    fn manual_close_then_auto_close() {
        let mut effects = runtime();
        let id = effects.notify("Hello", NotificationKind::Info);

        effects.advance(ms(200));
        effects.close_notification(id);
        effects.advance(ms(300));
        assert!(effects.notifications().is_empty());

        effects.advance(Notifications::AUTO_CLOSE);
        assert!(effects.notifications().is_empty());
    }

    #[test]
    fn form_submission_cycle() {
        let mut effects = runtime();
        {
            let form = effects.form_mut();
            form.name = "Ada".to_string();
            form.email = "ada@example.com".to_string();
            form.message = "Hi".to_string();
        }

        effects.submit_form().unwrap();
        assert!(matches!(effects.submit_form(), Err(Error::FormBusy)));

        effects.advance(ContactForm::SEND_DURATION);
        assert_eq!(effects.form().stage(), FormStage::Sent);
        assert_eq!(effects.notifications().len(), 1);
        assert_eq!(
            effects.notifications().iter().next().unwrap().message,
            ContactForm::SENT_MESSAGE
        );

        effects.advance(ContactForm::RESET_DELAY);
        assert_eq!(effects.form().stage(), FormStage::Idle);
    }

    #[test]
    fn theme_spin_resets() {
        let mut effects = runtime();

        assert_eq!(effects.toggle_theme().unwrap(), Theme::Dark);
        assert!(effects.theme().is_spinning());

        effects.advance(ThemeToggle::SPIN);
        assert!(!effects.theme().is_spinning());
    }

    #[test]
    fn konami_sets_off_easter_egg() {
        let mut effects = runtime();
        let keys = [
            "ArrowUp",
            "ArrowUp",
            "ArrowDown",
            "ArrowDown",
            "ArrowLeft",
            "ArrowRight",
            "ArrowLeft",
            "ArrowRight",
            "b",
        ];
        for key in keys {
            assert!(!effects.key_pressed(key));
        }
        assert!(effects.key_pressed("a"));

        effects.advance(ms(100));
        assert_eq!(effects.easter_egg().color(), Some(EasterEgg::COLORS[0]));
        assert_eq!(
            effects.notifications().iter().next().unwrap().message,
            EasterEgg::MESSAGE
        );

        effects.advance(ms(1900));
        assert!(!effects.easter_egg().is_active());
    }

    #[test]
    fn slides_stop_when_cancelled() {
        let mut effects = runtime();

        effects.start_slides();
        effects.advance(ms(250));
        assert_eq!(effects.slides().current(), 2);

        effects.stop_slides();
        effects.advance(ms(500));
        assert_eq!(effects.slides().current(), 2);
        assert!(!effects.slides().is_running());
    }
}
