// src/timer/view.rs
use std::time::{Duration, Instant};

use super::ports::{StatusClass, TimerView};

/// Plain-data UI binding. Immediate-mode frontends draw from it each frame.
#[derive(Clone, Debug, Default)]
pub struct WidgetView {
    pub time_text: String,
    pub progress: f32,
    pub status: String,
    pub status_class: StatusClass,
    pub start_enabled: bool,
    pub pause_enabled: bool,
    pub title: String,
    /// Contents of the custom-minutes input (user-editable).
    pub custom_input: String,
    pub alert: Option<String>,
    pub pulses: u32,
    pub pulse_started: Option<Instant>,
}

impl WidgetView {
    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    pub fn pulse_active(&self, now: Instant, len: Duration) -> bool {
        self.pulse_started
            .is_some_and(|t| now.saturating_duration_since(t) < len)
    }

    /// Drop a finished pulse. Returns whether one is still showing.
    pub fn settle_pulse(&mut self, now: Instant, len: Duration) -> bool {
        let active = self.pulse_active(now, len);
        if !active {
            self.pulse_started = None;
        }
        active
    }
}

impl TimerView for WidgetView {
    fn show_time(&mut self, text: &str) { self.time_text = s!(text); }

    fn show_progress(&mut self, percent: f32) { self.progress = percent; }

    fn show_status(&mut self, text: &str, class: StatusClass) {
        self.status = s!(text);
        self.status_class = class;
    }

    fn set_controls(&mut self, start_enabled: bool, pause_enabled: bool) {
        self.start_enabled = start_enabled;
        self.pause_enabled = pause_enabled;
    }

    fn set_title(&mut self, title: &str) { self.title = s!(title); }

    fn set_custom_minutes(&mut self, minutes: u32) { self.custom_input = minutes.to_string(); }

    fn alert(&mut self, msg: &str) { self.alert = Some(s!(msg)); }

    fn pulse(&mut self) {
        self.pulses += 1;
        self.pulse_started = Some(Instant::now());
    }
}
