use std::time::Duration;

/// Counts a statistic up from zero in a hundred frames
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    displayed: u64,
    finished: bool,
}

impl CounterAnimation {
    pub const FRAME: Duration = Duration::from_millis(16);
    const STEPS: f64 = 100.0;

    pub fn new(target: u64) -> Self {
        Self {
            target,
            increment: target as f64 / Self::STEPS,
            current: 0.0,
            displayed: 0,
            finished: false,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn displayed(&self) -> u64 {
        self.displayed
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances one frame; false once the target is shown
    pub fn step(&mut self) -> bool {
        if self.finished {
            return false;
        }

        self.current += self.increment;
        self.displayed = self.current.ceil() as u64;

        if self.current >= self.target as f64 {
            self.displayed = self.target;
            self.finished = true;
        }

        !self.finished
    }
}
