// src/timer/ports.rs
//
// Everything the timer needs from its host: a clock, a UI binding,
// notifications and sound.

use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::config::consts::{NOTICE_BODY, NOTICE_TITLE};
use crate::error::BeepError;
use super::tone::Tone;

pub trait Clock {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant { Instant::now() }
}

/// Hand-driven clock. Clones share the same time.
#[derive(Clone, Debug)]
pub struct ManualClock(Arc<Mutex<Instant>>);

impl ManualClock {
    pub fn new() -> Self { Self(Arc::new(Mutex::new(Instant::now()))) }

    pub fn advance(&self, by: Duration) {
        let mut t = self.0.lock().unwrap_or_else(|e| e.into_inner());
        *t += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self { Self::new() }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.0.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/* ---------------- UI binding ---------------- */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusClass {
    #[default]
    Plain,
    Running,
    Completed,
}

pub trait TimerView {
    /// Remaining time as "MM:SS".
    fn show_time(&mut self, text: &str);
    /// 0.0..=100.0
    fn show_progress(&mut self, percent: f32);
    fn show_status(&mut self, text: &str, class: StatusClass);
    fn set_controls(&mut self, start_enabled: bool, pause_enabled: bool);
    fn set_title(&mut self, title: &str);
    /// Mirror the active duration into the custom-minutes input.
    fn set_custom_minutes(&mut self, minutes: u32);
    /// Blocking validation message.
    fn alert(&mut self, msg: &str);
    /// Brief "changed" highlight on the display.
    fn pulse(&mut self);
}

/* ---------------- Notifications ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
    /// Not asked yet.
    Default,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn completion() -> Self {
        Self { title: s!(NOTICE_TITLE), body: s!(NOTICE_BODY) }
    }
}

pub trait Notifier {
    fn permission(&self) -> Permission;

    /// Ask the user. The answer arrives later on the returned channel.
    fn request_permission(&mut self) -> Receiver<Permission>;

    fn show(&mut self, notice: &Notice);
}

/// Host without notifications: never granted, never asks.
pub struct NoNotifier;

impl Notifier for NoNotifier {
    fn permission(&self) -> Permission { Permission::Denied }

    fn request_permission(&mut self) -> Receiver<Permission> {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(Permission::Denied);
        rx
    }

    fn show(&mut self, _notice: &Notice) {}
}

/* ---------------- Sound ---------------- */

pub trait Beeper {
    fn beep(&mut self, tone: &Tone) -> Result<(), BeepError>;
}

/// Host without audio.
pub struct NoBeeper;

impl Beeper for NoBeeper {
    fn beep(&mut self, _tone: &Tone) -> Result<(), BeepError> {
        Err(BeepError::Unsupported)
    }
}
