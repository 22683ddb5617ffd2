use eframe::egui;
use egui_extras::{Column, TableBuilder};
use pf_navigation::PresentationCommand;

use crate::app::App;
use crate::app_state::DetailsNavigation;

pub fn bottom_panel(ctx: &egui::Context, app: &mut App) {
    egui::TopBottomPanel::bottom("bottom_details_panel")
        .resizable(true)
        .min_height(120.0)
        .default_height(160.0)
        .show(ctx, |ui| {
            egui::TopBottomPanel::top("bottom_tools_panel").show_inside(ui, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.selectable_value(
                        &mut app.app_state.details,
                        DetailsNavigation::Log,
                        format!("🧭 Navigation ({})", app.host.log().len()),
                    );

                    ui.separator();

                    ui.selectable_value(
                        &mut app.app_state.details,
                        DetailsNavigation::Console,
                        "🖳 Console",
                    );
                });
            });

            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .stick_to_bottom(true)
                .show(ui, |ui| match app.app_state.details {
                    DetailsNavigation::Log => log_table(app, ui),
                    DetailsNavigation::Console => console(app, ui),
                });
        });
}

fn log_table(app: &App, ui: &mut egui::Ui) {
    let entries = app.host.log();

    let table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::remainder().clip(false));

    table
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Row");
            });

            header.col(|ui| {
                ui.strong("Time");
            });

            header.col(|ui| {
                ui.strong("Kind");
            });

            header.col(|ui| {
                ui.strong("Command");
            });
        })
        .body(|mut body| {
            for (index, entry) in entries.iter().enumerate() {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label((index + 1).to_string());
                    });

                    row.col(|ui| {
                        ui.monospace(format!("{:.3}s", entry.at.as_secs_f32()));
                    });

                    row.col(|ui| {
                        let kind = match entry.command {
                            PresentationCommand::Show(_) => "Show",
                            PresentationCommand::Hide(_) => "Hide",
                            PresentationCommand::Indicator { .. } => "Indicator",
                        };
                        ui.label(kind);
                    });

                    row.col(|ui| {
                        ui.label(entry.command.to_string());
                    });
                })
            }
        })
}

fn console(app: &App, ui: &mut egui::Ui) {
    for line in app.host.effects.console_lines() {
        ui.monospace(line);
    }
}
