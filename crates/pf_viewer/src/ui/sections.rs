use eframe::egui;
use pf_effects::decor;
use pf_effects::ElementId;
use pf_navigation::settings::Layout;
use pf_navigation::visibility::Region;
use pf_navigation::ViewId;

use crate::app::{App, PageGeometry};
use crate::command_sender::UICommand;
use crate::content;

const SECTION_SPACING: f32 = 48.0;

/// Draws the page and reports where everything was laid out
pub fn central_panel(ctx: &egui::Context, app: &mut App) -> PageGeometry {
    let mut frame = egui::Frame::central_panel(&ctx.style());
    if let Some([r, g, b]) = app.host.effects.easter_egg().color() {
        frame = frame.fill(egui::Color32::from_rgb(r, g, b));
    }

    let dim = app.transition_started.map_or(1.0, |start| {
        decor::page_transition_opacity(app.host.effects.now() - start)
    });
    frame = frame.fill(frame.fill.gamma_multiply(dim));

    let scroll_to = app.host.take_scroll_request();
    let layout = app.app_state.layout;

    let views: Vec<ViewId> = match layout {
        Layout::Paged => vec![app.controller.active_view().clone()],
        Layout::Continuous => app
            .controller
            .views()
            .iter()
            .map(|view| view.id.clone())
            .collect(),
    };

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| {
            let mut scroll_area = egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .enable_scrolling(!app.host.effects.menu().body_scroll_locked());
            if layout == Layout::Paged && scroll_to.is_some() {
                scroll_area = scroll_area.vertical_scroll_offset(0.0);
            }

            scroll_area
                .show_viewport(ui, |ui, viewport| {
                    let origin = ui.min_rect().top();
                    let mut geometry = PageGeometry {
                        viewport: Some(Region::new(viewport.top(), viewport.height())),
                        ..Default::default()
                    };

                    parallax_shapes(ui, app.scroll.y);

                    for view in views {
                        let rect = ui
                            .vertical(|ui| section(app, ui, &view, origin, &mut geometry))
                            .response
                            .rect;
                        geometry
                            .sections
                            .push((view.clone(), Region::new(rect.top() - origin, rect.height())));

                        if layout == Layout::Continuous && scroll_to.as_ref() == Some(&view) {
                            ui.scroll_to_rect(rect, Some(egui::Align::TOP));
                            app.sync_scroll(&view);
                        }

                        ui.add_space(SECTION_SPACING);
                    }

                    geometry.content_height = ui.min_rect().height();
                    geometry
                })
                .inner
        })
        .inner
}

fn section(
    app: &mut App,
    ui: &mut egui::Ui,
    view: &ViewId,
    origin: f32,
    geometry: &mut PageGeometry,
) {
    let title = app
        .controller
        .view(view.as_str())
        .map(|view| view.title.clone())
        .unwrap_or_else(|| view.to_string());

    if view != "home" {
        ui.heading(egui::RichText::new(title).size(26.0).strong());
        ui.add_space(12.0);
    }

    match view.as_str() {
        "home" => home(app, ui),
        "about" => about(app, ui, origin, geometry),
        "skills" => skills(app, ui, origin, geometry),
        "projects" => projects(app, ui, geometry),
        "contact" => contact(app, ui),
        _ => {
            ui.label(view.anchor());
        }
    }
}

fn home(app: &App, ui: &mut egui::Ui) {
    let effects = &app.host.effects;

    ui.add_space(24.0);

    let revealed = effects.hero_revealed();
    if let Some(greeting) = content::HERO_LINES.first().filter(|_| revealed > 0) {
        ui.label(egui::RichText::new(*greeting).size(18.0));
    }
    ui.label(
        egui::RichText::new(format!("{}▌", effects.typing_text()))
            .size(36.0)
            .strong()
            .color(super::ACCENT),
    );
    for line in content::HERO_LINES.iter().take(revealed).skip(1) {
        ui.label(*line);
    }

    if effects.is_code_window_revealed() {
        ui.add_space(16.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.monospace(content::CODE_WINDOW);
        });
    }
}

fn about(app: &App, ui: &mut egui::Ui, origin: f32, geometry: &mut PageGeometry) {
    for paragraph in content::ABOUT {
        ui.label(paragraph);
    }
    ui.add_space(12.0);

    ui.horizontal_wrapped(|ui| {
        for stat in &content::STATS {
            let element = ElementId::new(stat.element);
            let displayed = app
                .host
                .effects
                .counter(&element)
                .map_or(0, |counter| counter.displayed());

            let rect = egui::Frame::group(ui.style())
                .show(ui, |ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(displayed.to_string())
                                .size(28.0)
                                .strong(),
                        );
                        ui.small(stat.label);
                    });
                })
                .response
                .rect;

            geometry
                .elements
                .push((element, Region::new(rect.top() - origin, rect.height())));
        }
    });
}

fn skills(app: &App, ui: &mut egui::Ui, origin: f32, geometry: &mut PageGeometry) {
    for skill in &content::SKILLS {
        let element = ElementId::new(skill.element);
        let (width, fraction) = app
            .host
            .effects
            .progress_bar(&element)
            .map_or((0, 0.0), |bar| (bar.width(), bar.fraction()));

        let response = ui
            .horizontal(|ui| {
                ui.add_sized([120.0, 18.0], egui::Label::new(skill.name));
                ui.add(
                    egui::ProgressBar::new(fraction)
                        .desired_width(260.0)
                        .text(format!("{width}%")),
                );
            })
            .response;

        geometry.hovering |= response.hovered();
        geometry.elements.push((
            element,
            Region::new(response.rect.top() - origin, response.rect.height()),
        ));
    }
}

fn projects(app: &App, ui: &mut egui::Ui, geometry: &mut PageGeometry) {
    let slides = app.host.effects.slides();
    let Some(project) = content::PROJECTS.get(slides.current()) else {
        return;
    };

    let card = egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(360.0);
        ui.label(egui::RichText::new(project.title).size(20.0).strong());
        ui.label(project.description);
        ui.small(project.tech);
    });
    geometry.hovering |= card.response.hovered();

    ui.horizontal(|ui| {
        for index in 0..slides.count() {
            let dot = if index == slides.current() { "●" } else { "○" };
            if ui.selectable_label(false, dot).clicked() {
                app.command_sender.send_ui(UICommand::SelectSlide(index));
            }
        }
    });
}

fn contact(app: &mut App, ui: &mut egui::Ui) {
    for (method, value) in content::CONTACT_METHODS {
        ui.horizontal(|ui| {
            ui.strong(method);
            ui.label(value);
        });
    }
    ui.add_space(12.0);

    let busy = app.host.effects.form().is_busy();
    let stage = app.host.effects.form().stage();

    ui.add_enabled_ui(!busy, |ui| {
        let form = app.host.effects.form_mut();

        egui::Grid::new("contact_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Name");
                ui.text_edit_singleline(&mut form.name);
                ui.end_row();

                ui.label("Email");
                ui.text_edit_singleline(&mut form.email);
                ui.end_row();

                ui.label("Message");
                ui.text_edit_multiline(&mut form.message);
                ui.end_row();
            });
    });

    let button = egui::Button::new(stage.button_label()).fill(if busy {
        super::SUCCESS
    } else {
        super::ACCENT
    });
    if ui.add_enabled(!busy, button).clicked() {
        app.command_sender.send_ui(UICommand::SubmitForm);
    }
}

fn parallax_shapes(ui: &egui::Ui, scroll_y: f32) {
    let top = ui.min_rect().top();
    let right = ui.max_rect().right();

    for index in 0..content::SHAPES {
        let center = egui::pos2(
            right - 60.0 - 110.0 * index as f32,
            top + 140.0 + decor::parallax_offset(scroll_y, index),
        );
        ui.painter().circle_filled(
            center,
            14.0 + 4.0 * index as f32,
            super::ACCENT.gamma_multiply(0.15),
        );
    }
}
