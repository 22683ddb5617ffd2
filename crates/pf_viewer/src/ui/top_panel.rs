use eframe::egui;
use pf_effects::decor;
use pf_effects::Theme;
use pf_navigation::settings::Layout;

use crate::app::App;
use crate::command_sender::UICommand;

pub fn top_panel(ctx: &egui::Context, app: &mut App) {
    let mut frame = egui::Frame::side_top_panel(&ctx.style());
    if decor::navbar_elevated(app.scroll.y) {
        frame = frame.shadow(ctx.style().visuals.popup_shadow);
    }

    let response = egui::TopBottomPanel::top("top_panel_main_menu")
        .frame(frame)
        .min_height(32.0)
        .show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                let now = app.host.effects.now();
                let glitch = app
                    .title_hover
                    .and_then(|start| decor::glitch_offset(now - start));
                ui.add_space(4.0 + glitch.unwrap_or(0.0));

                let mut title = egui::RichText::new(&app.site.title).strong().size(18.0);
                if glitch.is_some() {
                    title = title.color(super::ACCENT);
                }
                let hovered = ui.label(title).hovered();
                app.title_hover = match (hovered, app.title_hover) {
                    (true, None) => Some(now),
                    (true, started) => started,
                    (false, _) => None,
                };
                ui.separator();

                if super::is_narrow(ctx) && ui.button("☰").clicked() {
                    app.host.effects.menu_mut().toggle();
                }

                let toggle = app.host.effects.theme();
                let icon = match toggle.theme() {
                    Theme::Light => "🌙",
                    Theme::Dark => "☀",
                };
                let label = if toggle.is_spinning() {
                    format!("↻ {icon}")
                } else {
                    icon.to_string()
                };
                if ui.button(label).on_hover_text("Toggle theme").clicked() {
                    app.command_sender.send_ui(UICommand::ToggleTheme);
                }

                ui.separator();

                let layout = app.app_state.layout;
                if ui
                    .selectable_label(layout == Layout::Paged, "📄 Paged")
                    .clicked()
                {
                    app.command_sender
                        .send_ui(UICommand::SetLayout(Layout::Paged));
                }
                if ui
                    .selectable_label(layout == Layout::Continuous, "📜 Continuous")
                    .clicked()
                {
                    app.command_sender
                        .send_ui(UICommand::SetLayout(Layout::Continuous));
                }

                ui.separator();

                if ui.button("Save...").clicked() {
                    app.command_sender.send_ui(UICommand::Save);
                }
            });

            scroll_progress(ui, app);
        });

    app.top_bar = response.response.rect;
}

fn scroll_progress(ui: &mut egui::Ui, app: &App) {
    let percent = decor::scroll_progress(
        app.scroll.y,
        app.scroll.content_height,
        app.scroll.viewport_height,
    );

    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 3.0),
        egui::Sense::hover(),
    );
    let mut filled = rect;
    filled.set_width(rect.width() * percent / 100.0);

    ui.painter().rect_filled(filled, 0.0, super::ACCENT);
}
