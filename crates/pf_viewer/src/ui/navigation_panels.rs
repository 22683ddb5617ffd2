use eframe::egui;

use crate::app::App;
use crate::command_sender::UICommand;

pub fn navigation_panels(ctx: &egui::Context, app: &mut App) {
    if !super::is_narrow(ctx) {
        egui::SidePanel::left("nav_panel")
            .resizable(true)
            .default_width(150.0)
            .width_range(100.0..=300.0)
            .show(ctx, |ui| nav_panel(app, ui));
        return;
    }

    if !app.host.effects.menu().is_open() {
        return;
    }

    let menu = egui::SidePanel::right("mobile_menu")
        .resizable(false)
        .exact_width(200.0)
        .show(ctx, |ui| nav_panel(app, ui));

    // The top bar holds the toggle, clicks there are not "outside"
    let menu_rect = menu.response.rect;
    let top_bar = app.top_bar;
    let clicked_outside = ctx.input(|i| {
        i.pointer.any_click()
            && i
                .pointer
                .interact_pos()
                .map_or(false, |pos| !menu_rect.contains(pos) && !top_bar.contains(pos))
    });
    app.host
        .effects
        .menu_mut()
        .close_on_outside_click(!clicked_outside);
}

fn nav_panel(app: &App, ui: &mut egui::Ui) {
    ui.with_layout(egui::Layout::top_down_justified(egui::Align::LEFT), |ui| {
        ui.label(
            egui::RichText::new("Sections")
                .color(egui::Color32::from_rgb(23, 147, 209))
                .size(15.0),
        );

        for indicator in app.controller.indicators().iter() {
            let lit = app.host.is_indicator_lit(indicator.id);

            if ui.selectable_label(lit, &indicator.label).clicked() {
                app.command_sender
                    .send_ui(UICommand::ClickIndicator(indicator.id));
            }
        }

        ui.separator();

        ui.label(
            egui::RichText::new("Keys")
                .color(egui::Color32::from_rgb(23, 147, 209))
                .size(15.0),
        );
        ui.small("← → ↑ ↓  PageUp PageDown");
        ui.small("Home End  1-9");
    });
}
