// src/gui/components/dialogs.rs
//
// Floating windows: exporter alerts/confirms, the timer's validation alert,
// the notification-permission prompt and completion toasts.

use eframe::egui::{self, Align2, Vec2};

use crate::config::consts::APP_NAME;
use crate::gui::{app::App, notices::Modal};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    modal(ctx, app);
    permission_prompt(ctx, app);
    toasts(ctx, app);
}

/// Oldest pending modal first; the rest wait their turn.
fn modal(ctx: &egui::Context, app: &mut App) {
    let Some(current) = app.modals.first().cloned() else { return };

    let mut close = false;
    let mut open_url: Option<String> = None;

    egui::Window::new(APP_NAME)
        .id(egui::Id::new("app_modal"))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            match &current {
                Modal::Alert(msg) => {
                    ui.label(msg);
                    ui.add_space(6.0);
                    if ui.button("OK").clicked() {
                        close = true;
                    }
                }
                Modal::Confirm { prompt, url } => {
                    ui.label(prompt);
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        if ui.button("Yes").clicked() {
                            open_url = Some(url.clone());
                            close = true;
                        }
                        if ui.button("No").clicked() {
                            close = true;
                        }
                    });
                }
            }
        });

    if let Some(url) = open_url {
        logf!("UI: opening {url}");
        ctx.open_url(egui::OpenUrl::new_tab(url));
    }
    if close {
        app.modals.remove(0);
    }
}

fn permission_prompt(ctx: &egui::Context, app: &mut App) {
    let asking = app.notices.lock().map(|c| c.is_asking()).unwrap_or(false);
    if !asking {
        return;
    }

    let mut answer: Option<bool> = None;
    egui::Window::new("Notifications")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::RIGHT_TOP, Vec2::new(-12.0, 12.0))
        .show(ctx, |ui| {
            ui.label("Show a notification when the timer runs out?");
            ui.horizontal(|ui| {
                if ui.button("Allow").clicked() { answer = Some(true); }
                if ui.button("Block").clicked() { answer = Some(false); }
            });
        });

    if let Some(granted) = answer {
        if let Ok(mut c) = app.notices.lock() {
            c.answer(granted);
        }
    }
}

fn toasts(ctx: &egui::Context, app: &mut App) {
    let Ok(mut center) = app.notices.lock() else { return };
    if center.toasts.is_empty() {
        return;
    }

    // Fresh toast: ask the OS to flash the window too.
    if center.toasts.iter().any(|t| t.shown_at.elapsed().as_millis() < 500) {
        ctx.send_viewport_cmd(egui::ViewportCommand::RequestUserAttention(
            egui::UserAttentionType::Informational,
        ));
    }

    let mut dismiss: Option<usize> = None;
    for (i, toast) in center.toasts.iter().enumerate() {
        egui::Window::new(&toast.notice.title)
            .id(egui::Id::new(("toast", i)))
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::RIGHT_BOTTOM, Vec2::new(-12.0, -12.0 - 70.0 * i as f32))
            .show(ctx, |ui| {
                ui.label(&toast.notice.body);
                if ui.small_button("Dismiss").clicked() {
                    dismiss = Some(i);
                }
            });
    }
    if let Some(i) = dismiss {
        center.dismiss(i);
    }
}
