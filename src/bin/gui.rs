// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{ IconData, ViewportBuilder };
use image::{ Rgba, RgbaImage };
use tgstat_tools::{ config::state::GuiState, gui, log };

const ICON_SIZE: u32 = 64;

/// Round red "tomato" with a light ring, drawn in memory.
fn app_icon() -> IconData {
    let c = (ICON_SIZE as f32 - 1.0) / 2.0;
    let rgba = RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let d = ((x as f32 - c).powi(2) + (y as f32 - c).powi(2)).sqrt();
        if d < c * 0.78 {
            Rgba([0xe5, 0x39, 0x35, 0xff])
        } else if d < c {
            Rgba([0xf5, 0xf5, 0xf5, 0xff])
        } else {
            Rgba([0, 0, 0, 0])
        }
    });
    IconData { rgba: rgba.into_raw(), width: ICON_SIZE, height: ICON_SIZE }
}

fn main() {
    if let Err(e) = log::init() {
        eprintln!("Logging disabled: {}", e);
    }

    let gui_defaults = GuiState::default();
    let options = eframe::NativeOptions {
        // eframe 0.32: icon set via viewport builder
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([gui_defaults.window_w as f32, gui_defaults.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
