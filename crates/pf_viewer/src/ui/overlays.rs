use eframe::egui;
use pf_effects::notification::NotificationStage;
use pf_effects::NotificationKind;

use crate::app::App;
use crate::command_sender::UICommand;

pub fn loading_screen(ctx: &egui::Context, app: &App) {
    let loading = app.host.effects.loading();
    let opacity =
        ctx.animate_value_with_time(egui::Id::new("loading_opacity"), loading.opacity(), 0.5);

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);

            let color = ui.visuals().text_color().gamma_multiply(opacity);
            ui.heading(egui::RichText::new(&app.site.title).size(28.0).color(color));
            ui.add_space(12.0);
            ui.add(
                egui::ProgressBar::new(loading.progress() / 100.0)
                    .desired_width(300.0)
                    .fill(super::ACCENT.gamma_multiply(opacity)),
            );
        });
    });
}

/// Toasts stacked in the top right corner
pub fn notifications(ctx: &egui::Context, app: &App) {
    let notifications = app.host.effects.notifications();
    if notifications.is_empty() {
        return;
    }

    egui::Area::new("notifications")
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-20.0, 20.0))
        .show(ctx, |ui| {
            for notification in notifications.iter() {
                let fade = match notification.stage {
                    // Still sliding in
                    NotificationStage::Entering => continue,
                    NotificationStage::Shown => 1.0,
                    NotificationStage::Leaving => 0.4,
                };
                let fill = match notification.kind {
                    NotificationKind::Info => super::ACCENT,
                    NotificationKind::Success => super::SUCCESS,
                };

                egui::Frame::popup(ui.style())
                    .fill(fill.gamma_multiply(fade))
                    .show(ui, |ui| {
                        ui.set_max_width(350.0);
                        ui.horizontal(|ui| {
                            ui.colored_label(egui::Color32::WHITE, &notification.message);
                            if ui.small_button("×").clicked() {
                                app.command_sender
                                    .send_ui(UICommand::CloseNotification(notification.id));
                            }
                        });
                    });
            }
        });
}

/// Trail ring following the pointer
pub fn cursor(ctx: &egui::Context, app: &App) {
    let cursor = app.host.effects.cursor();
    let (x, y) = cursor.trail();

    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Tooltip,
        egui::Id::new("cursor_trail"),
    ));
    painter.circle_stroke(
        egui::pos2(x, y),
        10.0 * cursor.trail_scale(),
        egui::Stroke::new(1.5, super::ACCENT.gamma_multiply(0.6)),
    );

    let (x, y) = cursor.pointer();
    painter.circle_filled(egui::pos2(x, y), 3.0 * cursor.cursor_scale(), super::ACCENT);
}
