use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum NotificationKind {
    Info,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStage {
    /// Off-screen, sliding in
    Entering,
    Shown,
    /// Sliding out before removal
    Leaving,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub stage: NotificationStage,
}

/// Toast messages in display order
#[derive(Debug, Default)]
pub struct Notifications {
    next_id: u64,
    items: Vec<Notification>,
}

impl Notifications {
    pub const ENTER_DELAY: Duration = Duration::from_millis(100);
    pub const AUTO_CLOSE: Duration = Duration::from_secs(5);
    pub const LEAVE_DURATION: Duration = Duration::from_millis(300);

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: &str, kind: NotificationKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.items.push(Notification {
            id,
            message: message.to_string(),
            kind,
            stage: NotificationStage::Entering,
        });

        id
    }

    pub fn show(&mut self, id: u64) {
        if let Some(item) = self.find_mut(id) {
            if item.stage == NotificationStage::Entering {
                item.stage = NotificationStage::Shown;
            }
        }
    }

    /// Starts the slide-out; false if the toast is gone or already leaving
    pub fn close(&mut self, id: u64) -> bool {
        match self.find_mut(id) {
            Some(item) if item.stage != NotificationStage::Leaving => {
                item.stage = NotificationStage::Leaving;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn find_mut(&mut self, id: u64) -> Option<&mut Notification> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle() {
        let mut notifications = Notifications::new();
        let id = notifications.push("Hello", NotificationKind::Info);

        notifications.show(id);
        assert_eq!(
            notifications.iter().next().unwrap().stage,
            NotificationStage::Shown
        );

        assert!(notifications.close(id));
        assert!(!notifications.close(id));

        notifications.remove(id);
        assert!(notifications.is_empty());
        assert!(!notifications.close(id));
    }

    #[test]
    fn ids_are_unique() {
        let mut notifications = Notifications::new();

        let a = notifications.push("a", NotificationKind::Info);
        let b = notifications.push("b", NotificationKind::Success);

        assert_ne!(a, b);
        assert_eq!(notifications.len(), 2);
    }
}
