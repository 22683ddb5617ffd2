use pf_navigation::settings::Layout;
use pf_navigation::IndicatorId;

/// Work requested by the UI, run at the end of the frame
#[derive(Debug)]
pub enum UICommand {
    Save,
    ToggleTheme,
    SetLayout(Layout),
    ClickIndicator(IndicatorId),
    Navigate(String),
    SubmitForm,
    CloseNotification(u64),
    SelectSlide(usize),
}

pub struct CommandSender {
    ui_sender: std::sync::mpsc::Sender<UICommand>,
}

impl CommandSender {
    pub fn send_ui(&self, command: UICommand) {
        self.ui_sender.send(command).ok();
    }
}

pub struct CommandReceiver {
    ui_receiver: std::sync::mpsc::Receiver<UICommand>,
}

impl CommandReceiver {
    pub fn receive_ui(&self) -> Option<UICommand> {
        self.ui_receiver.try_recv().ok()
    }
}

pub fn command_channel() -> (CommandSender, CommandReceiver) {
    let (ui_sender, ui_receiver) = std::sync::mpsc::channel();
    (CommandSender { ui_sender }, CommandReceiver { ui_receiver })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_arrive_in_order() {
        let (sender, receiver) = command_channel();

        sender.send_ui(UICommand::Navigate("skills".to_string()));
        sender.send_ui(UICommand::Save);

        assert!(matches!(receiver.receive_ui(), Some(UICommand::Navigate(view)) if view == "skills"));
        assert!(matches!(receiver.receive_ui(), Some(UICommand::Save)));
        assert!(receiver.receive_ui().is_none());
    }
}
