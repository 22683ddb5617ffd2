use std::time::Duration;

use tracing::debug;

use crate::scheduler::{Scheduler, TimerId};

/// Carousel that advances on a repeating timer while running
#[derive(Debug)]
pub struct SlideShow {
    count: usize,
    current: usize,
    interval: Duration,
    timer: Option<TimerId>,
}

impl SlideShow {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(4);

    pub fn new(count: usize, interval: Duration) -> Self {
        Self {
            count,
            current: 0,
            interval,
            timer: None,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Starts auto-advance, restarting the interval if already running
    pub fn start<T: Clone>(&mut self, scheduler: &mut Scheduler<T>, task: T) {
        self.cancel(scheduler);

        if self.count > 1 {
            self.timer = Some(scheduler.every(self.interval, task));
            debug!(slides = self.count, "Slide show started");
        }
    }

    pub fn cancel<T: Clone>(&mut self, scheduler: &mut Scheduler<T>) {
        if let Some(timer) = self.timer.take() {
            scheduler.cancel(timer);
            debug!("Slide show stopped");
        }
    }

    pub fn owns(&self, timer: TimerId) -> bool {
        self.timer == Some(timer)
    }

    pub fn advance(&mut self) {
        if self.count > 0 {
            self.current = (self.current + 1) % self.count;
        }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.count {
            self.current = index;
        }
    }
}
