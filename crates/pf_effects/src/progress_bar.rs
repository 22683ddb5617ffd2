use std::time::Duration;

/// Skill bar filling up to its percentage
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBarAnimation {
    target: u8,
    width: u8,
}

impl ProgressBarAnimation {
    pub const TICK: Duration = Duration::from_millis(30);
    const STEP: u8 = 2;

    pub fn new(percent: u8) -> Self {
        Self {
            target: percent.min(100),
            width: 0,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn target(&self) -> u8 {
        self.target
    }

    pub fn fraction(&self) -> f32 {
        self.width as f32 / 100.0
    }

    pub fn is_finished(&self) -> bool {
        self.width >= self.target
    }

    /// Widens the bar one tick; false once the target is reached
    pub fn step(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }

        self.width = self.width.saturating_add(Self::STEP).min(self.target);

        !self.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_to_target() {
        let mut bar = ProgressBarAnimation::new(85);
        let mut ticks = 1;
        while bar.step() {
            ticks += 1;
        }

        assert_eq!(bar.width(), 85);
        assert_eq!(ticks, 43);
    }

    #[test]
    fn odd_target_is_clamped() {
        let mut bar = ProgressBarAnimation::new(3);

        assert!(bar.step());
        assert_eq!(bar.width(), 2);
        assert!(!bar.step());
        assert_eq!(bar.width(), 3);
    }

    #[test]
    fn over_hundred_is_capped() {
        assert_eq!(ProgressBarAnimation::new(250).target(), 100);
    }
}
