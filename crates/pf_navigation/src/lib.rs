pub mod controller;
pub mod error;
pub mod indicator;
pub mod keyboard;
pub mod presentation;
pub mod repeat_guard;
pub mod settings;
pub mod site;
pub mod state;
pub mod view;
pub mod visibility;

pub use controller::{
    animation_fn, ActivationSource, Animation, Navigator, Transition, ViewController,
    ViewControllerBuilder,
};
pub use error::{Error, Result};
pub use indicator::IndicatorId;
pub use keyboard::NavigationKey;
pub use presentation::{PresentationCommand, Presenter};
pub use view::ViewId;
