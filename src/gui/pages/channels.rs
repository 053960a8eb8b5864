// src/gui/pages/channels.rs
use eframe::egui;

use crate::config::options::PageKind;
use crate::gui::{actions, app::App, components::data_table};
use super::Page;

pub struct ChannelsPage;
pub static PAGE: ChannelsPage = ChannelsPage;

impl Page for ChannelsPage {
    fn title(&self) -> &'static str { "Channels" }
    fn kind(&self) -> PageKind { PageKind::Channels }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        take_dropped_file(ui.ctx(), app);

        egui::Grid::new("channels_paths")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Saved page:");
                ui.add(
                    egui::TextEdit::singleline(&mut app.state.gui.input_path)
                        .hint_text("listing.html (or drop the file here)")
                        .desired_width(420.0),
                );
                ui.end_row();

                ui.label("Output:");
                ui.add(
                    egui::TextEdit::singleline(&mut app.state.gui.out_path_text)
                        .desired_width(420.0),
                );
                ui.end_row();
            });

        ui.checkbox(&mut app.state.options.export.follow_up, "Offer the follow-up channel after export");

        ui.horizontal(|ui| {
            if ui.button("Export CSV").clicked() {
                actions::export(app);
            }
            if ui.add_enabled(!app.records.is_empty(), egui::Button::new("Copy CSV")).clicked() {
                actions::copy(app, ui.ctx());
            }
            ui.separator();
            ui.label(&app.status);
        });

        ui.separator();

        if app.records.is_empty() {
            ui.weak("No channels yet. Export a saved TGStat listing page to see them here.");
        } else {
            data_table::draw(ui, &app.records);
        }
    }

    fn on_enter(&self, app: &mut App) {
        if app.state.gui.out_path_text.trim().is_empty() {
            app.state.gui.out_path_text =
                app.state.options.export.out_path().to_string_lossy().into_owned();
        }
    }
}

/// A file dropped onto the window becomes the input path.
fn take_dropped_file(ctx: &egui::Context, app: &mut App) {
    let dropped = ctx.input(|i| {
        i.raw.dropped_files.iter().find_map(|f| f.path.clone())
    });
    if let Some(path) = dropped {
        logd!("UI: dropped {}", path.display());
        app.state.gui.input_path = path.to_string_lossy().into_owned();
    }
}
