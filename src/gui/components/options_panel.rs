// src/gui/components/options_panel.rs

use eframe::egui;

use crate::{config::options::Source, gui::{actions, app::App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Timetable");
    ui.add_space(4.0);

    egui::Grid::new("form_fields")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Faculty:");
            ui.text_edit_singleline(&mut app.form.faculty);
            ui.end_row();

            ui.label("Group:");
            ui.text_edit_singleline(&mut app.form.group);
            ui.end_row();

            ui.label("Course:");
            ui.text_edit_singleline(&mut app.form.course);
            ui.end_row();

            ui.label("Term:")
                .on_hover_text("Leave empty to use the term preselected on the site");
            ui.text_edit_singleline(&mut app.form.term);
            ui.end_row();
        });

    ui.separator();

    ui.label("Output:");
    ui.add(egui::TextEdit::singleline(&mut app.form.out_path).font(egui::TextStyle::Monospace));

    ui.separator();

    ui.horizontal(|ui| {
        if ui.button("Fetch").on_hover_text("Download the current timetable").clicked() {
            actions::load(app, Source::Remote);
        }
        if ui.button("Load cached").on_hover_text("Rebuild from the last downloaded page").clicked() {
            actions::load(app, Source::Cache);
        }
    });

    let can_export = app.built.is_some();
    if ui.add_enabled(can_export, egui::Button::new("Export")).clicked() {
        actions::export(app);
    }

    if let Some(built) = &app.built {
        ui.separator();
        ui.label(format!("Rows: {}", built.rows.len()));
        ui.label(format!("Weeks: {}", built.schedule.weeks().len()));
        ui.label(format!("Grid: {} rows", built.layout.final_row));
    }
}
