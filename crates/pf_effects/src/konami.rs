use std::time::Duration;

const SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Watches key presses for the konami code
#[derive(Debug, Default)]
pub struct KonamiDetector {
    matched: usize,
}

impl KonamiDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `key` completes the sequence
    pub fn feed(&mut self, key: &str) -> bool {
        if key.eq_ignore_ascii_case(SEQUENCE[self.matched]) {
            self.matched += 1;
        } else if key.eq_ignore_ascii_case(SEQUENCE[0]) {
            // A stray extra "up" still counts as a fresh start
            self.matched = if self.matched == 2 { 2 } else { 1 };
        } else {
            self.matched = 0;
        }

        if self.matched == SEQUENCE.len() {
            self.matched = 0;
            return true;
        }

        false
    }
}

/// Background colour cycle shown when the code is entered
#[derive(Debug, Clone)]
pub struct EasterEgg {
    color: Option<usize>,
}

impl EasterEgg {
    pub const COLORS: [[u8; 3]; 6] = [
        [0xff, 0x00, 0x00],
        [0x00, 0xff, 0x00],
        [0x00, 0x00, 0xff],
        [0xff, 0xff, 0x00],
        [0xff, 0x00, 0xff],
        [0x00, 0xff, 0xff],
    ];
    pub const FLASH: Duration = Duration::from_millis(100);
    pub const DURATION: Duration = Duration::from_secs(2);
    pub const MESSAGE: &'static str = "🎉 Easter egg activated! You found the secret!";

    pub fn new() -> Self {
        Self { color: None }
    }

    pub fn is_active(&self) -> bool {
        self.color.is_some()
    }

    pub fn color(&self) -> Option<[u8; 3]> {
        self.color.map(|index| Self::COLORS[index])
    }

    pub fn flash(&mut self) {
        self.color = Some(match self.color {
            Some(index) => (index + 1) % Self::COLORS.len(),
            None => 0,
        });
    }

    pub fn stop(&mut self) {
        self.color = None;
    }
}

impl Default for EasterEgg {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(detector: &mut KonamiDetector, keys: &[&str]) -> bool {
        keys.iter().fold(false, |_, key| detector.feed(key))
    }

    #[test]
    fn detects_the_code() {
        let mut detector = KonamiDetector::new();

        assert!(feed_all(&mut detector, &SEQUENCE));
        assert!(feed_all(&mut detector, &SEQUENCE));
    }

    #[test]
    fn mistake_resets() {
        let mut detector = KonamiDetector::new();

        assert!(!feed_all(
            &mut detector,
            &["ArrowUp", "ArrowUp", "ArrowDown", "x", "ArrowDown", "ArrowLeft"]
        ));
        assert!(!feed_all(&mut detector, &SEQUENCE[4..]));
    }

    #[test]
    fn extra_leading_up_is_tolerated() {
        let mut detector = KonamiDetector::new();

        detector.feed("ArrowUp");
        assert!(feed_all(&mut detector, &SEQUENCE));
    }

    #[test]
    fn letters_ignore_case() {
        let mut detector = KonamiDetector::new();

        feed_all(&mut detector, &SEQUENCE[..8]);
        detector.feed("B");
        assert!(detector.feed("A"));
    }

    #[test]
    fn easter_egg_cycles_colours() {
        let mut egg = EasterEgg::new();
        assert_eq!(egg.color(), None);

        for _ in 0..7 {
            egg.flash();
        }
        assert_eq!(egg.color(), Some(EasterEgg::COLORS[0]));

        egg.stop();
        assert!(!egg.is_active());
    }
}
