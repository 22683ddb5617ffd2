pub mod console;
pub mod contact_form;
pub mod counter;
pub mod decor;
pub mod error;
pub mod konami;
pub mod loading;
pub mod mobile_menu;
pub mod notification;
pub mod progress_bar;
pub mod runtime;
pub mod scheduler;
pub mod slides;
pub mod theme;
pub mod typing;

pub use error::{Error, Result};
pub use notification::NotificationKind;
pub use runtime::{EffectTask, EffectsRuntime, EffectsSetup, ElementId};
pub use scheduler::{Scheduler, TimerId};
pub use theme::{FlagStore, JsonFlagStore, MemoryFlagStore, Theme};
