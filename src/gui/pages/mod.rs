// src/gui/pages/mod.rs
use eframe::egui;

use crate::config::options::PageKind;
use super::app::App;

pub mod channels;
pub mod timer;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Draw the whole tab body.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);

    /// Called when the tab becomes active.
    fn on_enter(&self, _app: &mut App) {}
}
