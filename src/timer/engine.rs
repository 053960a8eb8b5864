// src/timer/engine.rs
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use crate::config::consts::*;
use crate::config::options::TimerOptions;
use crate::error::DurationError;
use super::ports::{Beeper, Clock, Notice, Notifier, Permission, StatusClass, TimerView};
use super::ticker::Ticker;
use super::tone::Tone;

/// Remaining time as zero-padded "MM:SS".
pub fn format_mmss(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[derive(Clone, Debug)]
pub enum Phase {
    Idle,
    Running(Ticker),
    Paused,
    /// Ran out. Behaves like `Idle` with nothing left until reset or a new duration.
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseKind {
    Idle,
    Running,
    Paused,
    Completed,
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Idle => PhaseKind::Idle,
            Phase::Running(_) => PhaseKind::Running,
            Phase::Paused => PhaseKind::Paused,
            Phase::Completed => PhaseKind::Completed,
        }
    }
}

/// Host capabilities other than the view.
pub struct Ports {
    pub clock: Box<dyn Clock>,
    pub notifier: Box<dyn Notifier>,
    pub beeper: Box<dyn Beeper>,
}

struct PendingPermission {
    answer: Receiver<Permission>,
    /// Shown once the answer is `Granted`; `None` for a plain up-front request.
    notice: Option<Notice>,
}

pub struct Pomodoro<V: TimerView> {
    total_secs: u32,
    remaining_secs: u32,
    phase: Phase,
    options: TimerOptions,
    view: V,
    ports: Ports,
    pending: Option<PendingPermission>,
}

impl<V: TimerView> Pomodoro<V> {
    pub fn new(view: V, options: TimerOptions, ports: Ports) -> Self {
        let total_secs = options.default_minutes.max(1).saturating_mul(60);
        let mut timer = Self {
            total_secs,
            remaining_secs: total_secs,
            phase: Phase::Idle,
            options,
            view,
            ports,
            pending: None,
        };
        timer.refresh();
        timer.view.show_status(STATUS_READY, StatusClass::Plain);
        timer.view.set_controls(true, false);
        timer.view.set_title(APP_TITLE);
        timer.view.set_custom_minutes(total_secs / 60);
        timer
    }

    /* ---------- queries ---------- */

    pub fn total_secs(&self) -> u32 { self.total_secs }
    pub fn remaining_secs(&self) -> u32 { self.remaining_secs }
    pub fn phase(&self) -> PhaseKind { self.phase.kind() }
    pub fn is_running(&self) -> bool { matches!(self.phase, Phase::Running(_)) }
    pub fn options(&self) -> &TimerOptions { &self.options }
    pub fn view(&self) -> &V { &self.view }
    pub fn view_mut(&mut self) -> &mut V { &mut self.view }

    pub fn progress_percent(&self) -> f32 {
        self.remaining_secs as f32 / self.total_secs as f32 * 100.0
    }

    /// Time until the next tick, while running.
    pub fn next_tick_in(&self) -> Option<Duration> {
        match &self.phase {
            Phase::Running(t) => Some(t.until_next(self.ports.clock.now())),
            _ => None,
        }
    }

    /* ---------- operations ---------- */

    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        let now = self.ports.clock.now();
        self.phase = Phase::Running(Ticker::start(now, self.options.tick));
        self.view.set_controls(false, true);
        self.view.show_status(STATUS_RUNNING, StatusClass::Running);
        logd!("Timer: start at {}", format_mmss(self.remaining_secs));
    }

    pub fn pause(&mut self) {
        if !self.is_running() {
            return;
        }
        self.phase = Phase::Paused;
        self.view.set_controls(true, false);
        self.view.show_status(STATUS_PAUSED, StatusClass::Plain);
        logd!("Timer: pause at {}", format_mmss(self.remaining_secs));
    }

    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.remaining_secs = self.total_secs;
        self.refresh();
        self.view.show_status(STATUS_READY, StatusClass::Plain);
        self.view.set_controls(true, false);
        logd!("Timer: reset to {}", format_mmss(self.total_secs));
    }

    /// Preset button. Ignored while running or for a zero preset.
    pub fn set_preset_duration(&mut self, minutes: u32) {
        if minutes == 0 {
            logw!("Timer: ignoring zero-minute preset");
            return;
        }
        self.apply_duration(minutes);
    }

    /// Custom minutes; must fall in the configured range.
    /// Out of range alerts and changes nothing. In range but running: ignored.
    pub fn set_custom_duration(&mut self, minutes: i64) -> Result<(), DurationError> {
        let range = self.options.custom_range.clone();
        let ok = u32::try_from(minutes).is_ok_and(|m| range.contains(&m));
        if !ok {
            self.view.alert(MSG_BAD_MINUTES);
            return Err(DurationError::OutOfRange {
                got: minutes,
                min: *range.start(),
                max: *range.end(),
            });
        }
        self.apply_duration(minutes as u32);
        Ok(())
    }

    /// Custom minutes as typed in the input field.
    pub fn set_custom_duration_text(&mut self, text: &str) -> Result<(), DurationError> {
        match text.trim().parse::<i64>() {
            Ok(m) => self.set_custom_duration(m),
            Err(_) => {
                self.view.alert(MSG_BAD_MINUTES);
                Err(DurationError::NotANumber(s!(text)))
            }
        }
    }

    /// Ask for notification permission now if it was never asked.
    pub fn request_notification_permission(&mut self) {
        if self.ports.notifier.permission() == Permission::Default && self.pending.is_none() {
            let answer = self.ports.notifier.request_permission();
            self.pending = Some(PendingPermission { answer, notice: None });
        }
    }

    /// Drive the timer: fire due ticks and pick up a permission answer.
    pub fn advance(&mut self) {
        self.poll_permission();

        let now = self.ports.clock.now();
        let due = match &mut self.phase {
            Phase::Running(t) => t.due(now),
            _ => 0,
        };
        for _ in 0..due {
            if !self.is_running() {
                break;
            }
            self.tick();
        }
    }

    /* ---------- internals ---------- */

    fn apply_duration(&mut self, minutes: u32) {
        if self.is_running() {
            logd!("Timer: duration change to {minutes} min ignored while running");
            return;
        }
        self.total_secs = minutes.saturating_mul(60);
        self.remaining_secs = self.total_secs;
        self.phase = Phase::Idle;
        self.refresh();
        self.view.show_status(STATUS_READY, StatusClass::Plain);
        self.view.set_custom_minutes(minutes);
        self.view.pulse();
        logf!("Timer: duration set to {minutes} min");
    }

    fn tick(&mut self) {
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
            self.refresh();
            let title = join!(&format_mmss(self.remaining_secs), TITLE_SUFFIX);
            self.view.set_title(&title);
        }
        if self.remaining_secs == 0 {
            self.complete();
        }
    }

    fn complete(&mut self) {
        self.phase = Phase::Completed;
        self.view.set_controls(true, false);
        self.view.show_status(STATUS_DONE, StatusClass::Completed);
        self.view.set_title(&join!(TITLE_DONE, TITLE_SUFFIX));
        logf!("Timer: completed ({} min)", self.total_secs / 60);

        self.notify();
        self.beep();
        self.view.pulse();
    }

    fn notify(&mut self) {
        let notice = Notice::completion();
        match self.ports.notifier.permission() {
            Permission::Granted => self.ports.notifier.show(&notice),
            Permission::Default => {
                let answer = self.ports.notifier.request_permission();
                self.pending = Some(PendingPermission { answer, notice: Some(notice) });
            }
            Permission::Denied => logd!("Timer: notifications denied, skipping"),
        }
    }

    fn beep(&mut self) {
        if let Err(e) = self.ports.beeper.beep(&Tone::completion()) {
            logd!("Audio notification not supported: {e}");
        }
    }

    fn poll_permission(&mut self) {
        let Some(pending) = &self.pending else { return };
        match pending.answer.try_recv() {
            Ok(answer) => {
                logd!("Timer: notification permission {answer:?}");
                if let Some(p) = self.pending.take() {
                    if answer == Permission::Granted {
                        if let Some(notice) = p.notice {
                            self.ports.notifier.show(&notice);
                        }
                    }
                }
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => self.pending = None,
        }
    }

    fn refresh(&mut self) {
        self.view.show_time(&format_mmss(self.remaining_secs));
        let pct = self.progress_percent();
        self.view.show_progress(pct);
    }
}
