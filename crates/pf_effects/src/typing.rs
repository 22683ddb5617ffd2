use std::time::Duration;

/// Hero text that types and deletes a rotating list of phrases
#[derive(Debug, Clone)]
pub struct TypingEffect {
    phrases: Vec<String>,
    phrase: usize,
    chars: usize,
    deleting: bool,
    text: String,
}

impl TypingEffect {
    pub const START_DELAY: Duration = Duration::from_millis(1000);
    pub const TYPE_DELAY: Duration = Duration::from_millis(100);
    pub const DELETE_DELAY: Duration = Duration::from_millis(50);
    pub const HOLD_DELAY: Duration = Duration::from_millis(2000);
    pub const NEXT_PHRASE_DELAY: Duration = Duration::from_millis(500);

    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            phrase: 0,
            chars: 0,
            deleting: false,
            text: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Types or deletes one character and returns the delay until the next
    /// step. `None` when there is nothing to type.
    pub fn step(&mut self) -> Option<Duration> {
        let current = self.phrases.get(self.phrase)?;
        let length = current.chars().count();
        if length == 0 {
            self.phrase = (self.phrase + 1) % self.phrases.len();
            return Some(Self::NEXT_PHRASE_DELAY);
        }

        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
        } else {
            self.chars = (self.chars + 1).min(length);
        }
        self.text = current.chars().take(self.chars).collect();

        let delay = if !self.deleting && self.chars == length {
            self.deleting = true;
            Self::HOLD_DELAY
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.phrases.len();
            Self::NEXT_PHRASE_DELAY
        } else if self.deleting {
            Self::DELETE_DELAY
        } else {
            Self::TYPE_DELAY
        };

        Some(delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effect(phrases: &[&str]) -> TypingEffect {
        TypingEffect::new(phrases.iter().map(|p| p.to_string()).collect())
    }

    #[test]
    fn types_holds_deletes_and_moves_on() {
        let mut typing = effect(&["Hi", "Yo"]);

        assert_eq!(typing.step(), Some(TypingEffect::TYPE_DELAY));
        assert_eq!(typing.text(), "H");

        assert_eq!(typing.step(), Some(TypingEffect::HOLD_DELAY));
        assert_eq!(typing.text(), "Hi");
        assert!(typing.is_deleting());

        assert_eq!(typing.step(), Some(TypingEffect::DELETE_DELAY));
        assert_eq!(typing.text(), "H");

        assert_eq!(typing.step(), Some(TypingEffect::NEXT_PHRASE_DELAY));
        assert_eq!(typing.text(), "");

        typing.step();
        assert_eq!(typing.text(), "Y");
    }

    #[test]
    fn wraps_to_first_phrase() {
        let mut typing = effect(&["A"]);

        typing.step();
        typing.step();
        typing.step();

        assert_eq!(typing.text(), "A");
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut typing = effect(&["héé"]);

        typing.step();
        typing.step();
        assert_eq!(typing.text(), "hé");
    }

    #[test]
    fn no_phrases_no_steps() {
        assert_eq!(effect(&[]).step(), None);
    }
}
