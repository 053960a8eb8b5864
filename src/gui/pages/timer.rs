// src/gui/pages/timer.rs
use std::time::{Duration, Instant};

use eframe::egui::{self, Color32, RichText};

use crate::config::consts::PULSE_MS;
use crate::config::options::PageKind;
use crate::gui::app::App;
use crate::timer::StatusClass;
use super::Page;

const RUNNING_COLOR: Color32 = Color32::from_rgb(0x2e, 0x7d, 0x32);
const COMPLETED_COLOR: Color32 = Color32::from_rgb(0xc6, 0x28, 0x28);
const PULSE_COLOR: Color32 = Color32::from_rgb(0xff, 0x98, 0x00);

pub struct TimerPage;
pub static PAGE: TimerPage = TimerPage;

impl Page for TimerPage {
    fn title(&self) -> &'static str { "Timer" }
    fn kind(&self) -> PageKind { PageKind::Timer }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.vertical_centered(|ui| {
            display(ui, app);
            ui.add_space(8.0);
            controls(ui, app);
            ui.add_space(12.0);
            presets(ui, app);
            ui.add_space(8.0);
            custom(ui, app);
        });
    }
}

fn display(ui: &mut egui::Ui, app: &App) {
    let view = app.timer.view();
    let pulsing = view.pulse_active(Instant::now(), Duration::from_millis(PULSE_MS));

    let mut time = RichText::new(&view.time_text).size(64.0).monospace().strong();
    if pulsing {
        time = time.color(PULSE_COLOR);
    }
    ui.label(time);

    ui.add(
        egui::ProgressBar::new(view.progress / 100.0)
            .desired_width(320.0)
            .show_percentage(),
    );

    let status = RichText::new(&view.status).size(16.0);
    let status = match view.status_class {
        StatusClass::Plain => status,
        StatusClass::Running => status.color(RUNNING_COLOR),
        StatusClass::Completed => status.color(COMPLETED_COLOR).strong(),
    };
    ui.label(status);
}

fn controls(ui: &mut egui::Ui, app: &mut App) {
    let (start_on, pause_on) = {
        let v = app.timer.view();
        (v.start_enabled, v.pause_enabled)
    };

    ui.horizontal(|ui| {
        if ui.add_enabled(start_on, egui::Button::new("Start")).clicked() {
            app.timer.start();
        }
        if ui.add_enabled(pause_on, egui::Button::new("Pause")).clicked() {
            app.timer.pause();
        }
        if ui.button("Reset").clicked() {
            app.timer.reset();
        }
    });
}

fn presets(ui: &mut egui::Ui, app: &mut App) {
    let presets = app.timer.options().presets.clone();
    ui.horizontal(|ui| {
        for p in presets {
            if ui.button(&p.label).clicked() {
                app.timer.set_preset_duration(p.minutes);
            }
        }
    });
}

fn custom(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Minutes:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.timer.view_mut().custom_input)
                .desired_width(60.0),
        );
        let entered = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Set").clicked() || entered {
            let text = app.timer.view().custom_input.clone();
            // Rejections surface through the view alert.
            let _ = app.timer.set_custom_duration_text(&text);
        }
    });
}
