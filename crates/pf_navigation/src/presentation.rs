use crate::indicator::IndicatorId;
use crate::view::ViewId;

/// Outbound commands to the presentation layer
pub trait Presenter {
    fn show_view(&mut self, view: &ViewId);

    fn hide_view(&mut self, view: &ViewId);

    fn set_indicator(&mut self, indicator: IndicatorId, active: bool);
}

#[derive(Debug, Clone, PartialEq)]
pub enum PresentationCommand {
    Show(ViewId),
    Hide(ViewId),
    Indicator { indicator: IndicatorId, active: bool },
}

impl std::fmt::Display for PresentationCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresentationCommand::Show(view) => write!(f, "show {}", view),
            PresentationCommand::Hide(view) => write!(f, "hide {}", view),
            PresentationCommand::Indicator { indicator, active } => {
                let state = if *active { "on" } else { "off" };
                write!(f, "indicator {} {}", indicator, state)
            }
        }
    }
}

/// Records every command, in order
impl Presenter for Vec<PresentationCommand> {
    fn show_view(&mut self, view: &ViewId) {
        self.push(PresentationCommand::Show(view.clone()));
    }

    fn hide_view(&mut self, view: &ViewId) {
        self.push(PresentationCommand::Hide(view.clone()));
    }

    fn set_indicator(&mut self, indicator: IndicatorId, active: bool) {
        self.push(PresentationCommand::Indicator { indicator, active });
    }
}
