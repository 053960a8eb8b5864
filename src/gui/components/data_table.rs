// src/gui/components/data_table.rs
//
// Read-only table of the last export. Numeric columns are centered.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::config::consts::CSV_HEADERS;
use crate::specs::channels::ChannelRecord;

/// Initial widths, one per CSV column.
const WIDTHS: [f32; 5] = [220.0, 220.0, 100.0, 90.0, 130.0];
/// URL and name are text; the rest are counts.
const FIRST_NUMERIC: usize = 2;

pub fn draw(ui: &mut egui::Ui, records: &[ChannelRecord]) {
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
    }

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt("channels_table");
    for w in WIDTHS {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(40.0));
    }

    table
        .header(24.0, |mut header| {
            for (ci, h) in CSV_HEADERS.iter().enumerate() {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    cell(ui, ci, RichText::new(*h).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, records.len(), |mut row| {
                let rec = &records[row.index()];
                for (ci, value) in rec.to_row().into_iter().enumerate() {
                    row.col(|ui| {
                        if ci == 0 && !value.is_empty() {
                            ui.hyperlink(&value);
                        } else {
                            cell(ui, ci, RichText::new(value));
                        }
                    });
                }
            });
        });
}

fn cell(ui: &mut egui::Ui, ci: usize, text: RichText) {
    let label = egui::Label::new(text).selectable(true);
    if ci >= FIRST_NUMERIC {
        ui.with_layout(Layout::top_down(Align::Center), |ui| { ui.add(label); });
    } else {
        ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.add(label); });
    }
}
