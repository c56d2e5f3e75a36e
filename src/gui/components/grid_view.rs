// src/gui/components/grid_view.rs
//
// Read-only preview of the sheet: one table column per weekday, one table row
// per sheet row, header cells filled with the sheet's colours.

use eframe::egui::{self, Align, Color32, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{
    config::consts::{COLOR_PAIR_HEADER, COLOR_WEEKDAY},
    gui::{app::App, table_model::CellView},
    layout::StyleTag,
};

fn rgb(hex: u32) -> Color32 {
    Color32::from_rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

fn fill_for(style: StyleTag) -> Option<Color32> {
    match style {
        StyleTag::None => None,
        StyleTag::WeekdayHeader => Some(rgb(COLOR_WEEKDAY)),
        StyleTag::PairHeader => Some(rgb(COLOR_PAIR_HEADER)),
    }
}

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let grid = &app.grid;
    if grid.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No timetable loaded.");
        });
        return;
    }

    let ncols = grid.ncols();
    let avail_h = ui.available_height();

    egui::ScrollArea::new([true, false])
        .id_salt("grid_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(false)
                .min_scrolled_height(0.0)
                .column(Column::exact(36.0))
                .columns(Column::initial(200.0).resizable(true).clip(true).at_least(40.0), ncols)
                .header(22.0, |mut header| {
                    header.col(|ui| { ui.strong("#"); });
                    for ci in 0..ncols {
                        header.col(|ui| {
                            ui.centered_and_justified(|ui| { ui.strong(grid.column_label(ci)); });
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, grid.nrows(), |mut row| {
                        let ri = row.index();
                        row.col(|ui| {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.weak((ri + 1).to_string());
                            });
                        });
                        for ci in 0..ncols {
                            let cell = grid.cell(ri, ci);
                            row.col(|ui| draw_cell(ui, cell));
                        }
                    });
                });
        });
}

fn draw_cell(ui: &mut egui::Ui, cell: Option<&CellView>) {
    let Some(cell) = cell else { return };
    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);

    let mut text = RichText::new(&cell.value);
    if let Some(fill) = fill_for(cell.style) {
        ui.painter().rect_filled(ui.max_rect(), 0.0, fill);
        text = text.color(Color32::BLACK).strong();
    }
    ui.centered_and_justified(|ui| { ui.label(text); });
}
