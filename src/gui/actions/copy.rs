// src/gui/actions/copy.rs
use eframe::egui;
use crate::{export::build_csv, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.records.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let txt = build_csv(&app.records);
    logf!("Copy: rows={}, bytes={}", app.records.len(), txt.len());

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
