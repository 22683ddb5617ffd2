use std::time::Duration;

use tracing::trace;

/// Repeating timers never fire more often than this
const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Timer<T> {
    id: TimerId,
    due: Duration,
    interval: Option<Duration>,
    task: T,
}

#[derive(Debug, PartialEq)]
pub struct Fired<T> {
    pub id: TimerId,
    pub at: Duration,
    pub task: T,
}

/// Virtual-clock timer queue.
///
/// The host moves the horizon forward with `advance` and then drains
/// `next_due` until it returns `None`. Timers fire in due order, ties in
/// creation order, and a timer cancelled while draining does not fire.
/// Delays count from `now`, so a timer scheduled by a fired task is due
/// relative to that task's firing time.
#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    horizon: Duration,
    next_id: u64,
    timers: Vec<Timer<T>>,
}

impl<T: Clone> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            horizon: Duration::ZERO,
            next_id: 0,
            timers: vec![],
        }
    }

    /// Time of the last fired timer, or of the last completed drain
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.iter().any(|timer| timer.id == id)
    }

    pub fn after(&mut self, delay: Duration, task: T) -> TimerId {
        self.insert(self.now + delay, None, task)
    }

    pub fn every(&mut self, interval: Duration, task: T) -> TimerId {
        let interval = interval.max(MIN_INTERVAL);
        self.insert(self.now + interval, Some(interval), task)
    }

    /// Returns false when the timer already fired or was cancelled
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|timer| timer.id != id);

        before != self.timers.len()
    }

    pub fn advance(&mut self, elapsed: Duration) {
        self.horizon += elapsed;
    }

    pub fn next_due(&mut self) -> Option<Fired<T>> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= self.horizon)
            .min_by_key(|(_, timer)| (timer.due, timer.id))
            .map(|(index, _)| index);

        let Some(index) = index else {
            self.now = self.horizon;
            return None;
        };

        let timer = &mut self.timers[index];
        let fired = Fired {
            id: timer.id,
            at: timer.due,
            task: timer.task.clone(),
        };
        self.now = timer.due;

        match timer.interval {
            Some(interval) => timer.due += interval,
            None => {
                self.timers.remove(index);
            }
        }

        trace!(id = fired.id.0, at = ?fired.at, "Timer fired");

        Some(fired)
    }

    fn insert(&mut self, due: Duration, interval: Option<Duration>, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        self.timers.push(Timer {
            id,
            due,
            interval,
            task,
        });

        id
    }
}

impl<T: Clone> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
