pub mod bottom_panel;
pub mod navigation_panels;
pub mod overlays;
pub mod sections;
pub mod top_panel;

pub(crate) use {
    self::bottom_panel::bottom_panel,
    self::navigation_panels::navigation_panels,
    self::overlays::{cursor, loading_screen, notifications},
    self::sections::central_panel,
    self::top_panel::top_panel,
};

use eframe::egui;

/// Below this width the navigation collapses into the mobile menu
const MOBILE_BREAKPOINT: f32 = 768.0;

pub(crate) fn is_narrow(ctx: &egui::Context) -> bool {
    ctx.screen_rect().width() < MOBILE_BREAKPOINT
}

pub(crate) const ACCENT: egui::Color32 = egui::Color32::from_rgb(99, 102, 241);
pub(crate) const SUCCESS: egui::Color32 = egui::Color32::from_rgb(6, 214, 160);
