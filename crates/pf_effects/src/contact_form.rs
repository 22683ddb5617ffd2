use std::time::Duration;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStage {
    Idle,
    Sending,
    Sent,
}

impl FormStage {
    pub fn button_label(&self) -> &'static str {
        match self {
            FormStage::Idle => "Send Message",
            FormStage::Sending => "Sending...",
            FormStage::Sent => "Message Sent!",
        }
    }
}

/// Contact form whose submission is simulated locally
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    stage: FormStage,
}

impl ContactForm {
    pub const SEND_DURATION: Duration = Duration::from_secs(2);
    pub const RESET_DELAY: Duration = Duration::from_secs(3);
    pub const SENT_MESSAGE: &'static str = "Message sent successfully! I'll get back to you soon.";

    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            stage: FormStage::Idle,
        }
    }

    pub fn stage(&self) -> FormStage {
        self.stage
    }

    pub fn is_busy(&self) -> bool {
        self.stage != FormStage::Idle
    }

    pub fn submit(&mut self) -> Result<()> {
        if self.is_busy() {
            return Err(Error::FormBusy);
        }

        if self.name.trim().is_empty() {
            return Err(Error::FormIncomplete("name".to_string()));
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(Error::FormIncomplete("email".to_string()));
        }
        if self.message.trim().is_empty() {
            return Err(Error::FormIncomplete("message".to_string()));
        }

        self.stage = FormStage::Sending;

        Ok(())
    }

    /// Sending finished, the fields are cleared
    pub fn sent(&mut self) {
        if self.stage == FormStage::Sending {
            self.stage = FormStage::Sent;
            self.name.clear();
            self.email.clear();
            self.message.clear();
        }
    }

    pub fn reset(&mut self) {
        if self.stage == FormStage::Sent {
            self.stage = FormStage::Idle;
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
            ..ContactForm::new()
        }
    }

    #[test]
    fn submit_send_reset() {
        let mut form = filled();

        form.submit().unwrap();
        assert_eq!(form.stage(), FormStage::Sending);
        assert!(matches!(form.submit(), Err(Error::FormBusy)));

        form.sent();
        assert_eq!(form.stage(), FormStage::Sent);
        assert!(form.name.is_empty());

        form.reset();
        assert_eq!(form.stage(), FormStage::Idle);
    }

    #[test]
    fn incomplete_fields_are_reported() {
        let mut form = filled();
        form.email = "not-an-email".to_string();

        assert!(matches!(form.submit(), Err(Error::FormIncomplete(field)) if field == "email"));
        assert_eq!(form.stage(), FormStage::Idle);

        let mut form = filled();
        form.message = "   ".to_string();
        assert!(matches!(form.submit(), Err(Error::FormIncomplete(field)) if field == "message"));
    }
}
