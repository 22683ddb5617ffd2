#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKey {
    Next,
    Previous,
    First,
    Last,
    /// Number keys `1`..`9`, one-based
    Digit(u8),
}

impl NavigationKey {
    /// Maps a DOM-style key name (`ArrowRight`, `PageUp`, `3`, ...)
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowRight" | "ArrowDown" | "PageDown" | " " | "Space" => Some(NavigationKey::Next),
            "ArrowLeft" | "ArrowUp" | "PageUp" => Some(NavigationKey::Previous),
            "Home" => Some(NavigationKey::First),
            "End" => Some(NavigationKey::Last),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c @ '1'..='9'), None) => Some(NavigationKey::Digit(c as u8 - b'0')),
                    _ => None,
                }
            }
        }
    }

    /// Resolves the target ordinal from `current` among `count` views.
    ///
    /// Returns `None` when the key leads nowhere, i.e. past an edge without
    /// wrapping or to a digit with no view.
    pub fn target(&self, current: usize, count: usize, wrap: bool) -> Option<usize> {
        if count == 0 {
            return None;
        }

        match self {
            NavigationKey::Next if current + 1 < count => Some(current + 1),
            NavigationKey::Next if wrap => Some(0),
            NavigationKey::Next => None,
            NavigationKey::Previous if current > 0 => Some(current - 1),
            NavigationKey::Previous if wrap => Some(count - 1),
            NavigationKey::Previous => None,
            NavigationKey::First => Some(0),
            NavigationKey::Last => Some(count - 1),
            NavigationKey::Digit(n) => {
                let ordinal = (*n as usize).checked_sub(1)?;
                (ordinal < count).then_some(ordinal)
            }
        }
    }
}
