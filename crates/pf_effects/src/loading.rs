use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadingPhase {
    Loading,
    /// Progress is complete, the screen is about to fade
    Complete,
    FadingOut,
    Hidden,
}

/// Simulated page-load progress shown before the portfolio appears
#[derive(Debug, Clone)]
pub struct LoadingScreen {
    progress: f32,
    phase: LoadingPhase,
}

impl LoadingScreen {
    pub const TICK: Duration = Duration::from_millis(100);
    pub const MAX_INCREMENT: f32 = 30.0;
    pub const FADE_DELAY: Duration = Duration::from_millis(500);
    pub const HIDE_DELAY: Duration = Duration::from_millis(500);

    pub fn new() -> Self {
        Self {
            progress: 0.0,
            phase: LoadingPhase::Loading,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }

    pub fn opacity(&self) -> f32 {
        match self.phase {
            LoadingPhase::Loading | LoadingPhase::Complete => 1.0,
            LoadingPhase::FadingOut | LoadingPhase::Hidden => 0.0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.phase != LoadingPhase::Hidden
    }

    /// Adds `increment` percent; true when this tick completed the load
    pub fn tick(&mut self, increment: f32) -> bool {
        if self.phase != LoadingPhase::Loading {
            return false;
        }

        self.progress = (self.progress + increment.max(0.0)).min(100.0);

        if self.progress >= 100.0 {
            self.phase = LoadingPhase::Complete;
            return true;
        }

        false
    }

    pub fn fade(&mut self) {
        if self.phase == LoadingPhase::Complete {
            self.phase = LoadingPhase::FadingOut;
        }
    }

    pub fn hide(&mut self) {
        if self.phase == LoadingPhase::FadingOut {
            self.phase = LoadingPhase::Hidden;
        }
    }
}

impl Default for LoadingScreen {
    fn default() -> Self {
        Self::new()
    }
}
