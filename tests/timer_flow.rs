// tests/timer_flow.rs
//
// Whole-timer scenarios on a hand-driven clock.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tgstat_tools::config::consts::{MSG_BAD_MINUTES, STATUS_DONE};
use tgstat_tools::config::options::TimerOptions;
use tgstat_tools::error::{BeepError, DurationError};
use tgstat_tools::timer::{
    Beeper, ManualClock, Notice, Notifier, Permission, PhaseKind, Pomodoro, Ports, StatusClass,
    Tone, WidgetView,
};

const SEC: Duration = Duration::from_secs(1);

/* ---------- counting ports ---------- */

#[derive(Clone, Default)]
struct Counts {
    shown: Arc<AtomicUsize>,
    asked: Arc<AtomicUsize>,
    beeps: Arc<AtomicUsize>,
}

struct FakeNotifier {
    permission: Arc<Mutex<Permission>>,
    counts: Counts,
    /// Held back so the test decides when the user answers.
    answer_tx: Arc<Mutex<Option<Sender<Permission>>>>,
}

impl Notifier for FakeNotifier {
    fn permission(&self) -> Permission { *self.permission.lock().unwrap() }

    fn request_permission(&mut self) -> Receiver<Permission> {
        self.counts.asked.fetch_add(1, Ordering::SeqCst);
        let (tx, rx) = mpsc::channel();
        *self.answer_tx.lock().unwrap() = Some(tx);
        rx
    }

    fn show(&mut self, notice: &Notice) {
        assert_eq!(notice, &Notice::completion());
        self.counts.shown.fetch_add(1, Ordering::SeqCst);
    }
}

struct FakeBeeper {
    counts: Counts,
    works: bool,
}

impl Beeper for FakeBeeper {
    fn beep(&mut self, tone: &Tone) -> Result<(), BeepError> {
        assert_eq!(tone.freq_hz, 800.0);
        self.counts.beeps.fetch_add(1, Ordering::SeqCst);
        if self.works { Ok(()) } else { Err(BeepError::Unsupported) }
    }
}

struct Rig {
    clock: ManualClock,
    counts: Counts,
    permission: Arc<Mutex<Permission>>,
    answer_tx: Arc<Mutex<Option<Sender<Permission>>>>,
    timer: Pomodoro<WidgetView>,
}

impl Rig {
    fn new(permission: Permission, beep_works: bool) -> Self {
        let clock = ManualClock::new();
        let counts = Counts::default();
        let permission = Arc::new(Mutex::new(permission));
        let answer_tx = Arc::new(Mutex::new(None));
        let ports = Ports {
            clock: Box::new(clock.clone()),
            notifier: Box::new(FakeNotifier {
                permission: permission.clone(),
                counts: counts.clone(),
                answer_tx: answer_tx.clone(),
            }),
            beeper: Box::new(FakeBeeper { counts: counts.clone(), works: beep_works }),
        };
        let timer = Pomodoro::new(WidgetView::default(), TimerOptions::default(), ports);
        Self { clock, counts, permission, answer_tx, timer }
    }

    /// Simulate `n` seconds, one frame per second.
    fn run_secs(&mut self, n: u32) {
        for _ in 0..n {
            self.clock.advance(SEC);
            self.timer.advance();
        }
    }

    fn answer(&self, p: Permission) {
        *self.permission.lock().unwrap() = p;
        let tx = self.answer_tx.lock().unwrap().take().expect("permission was requested");
        tx.send(p).unwrap();
    }

    fn shown(&self) -> usize { self.counts.shown.load(Ordering::SeqCst) }
    fn asked(&self) -> usize { self.counts.asked.load(Ordering::SeqCst) }
    fn beeps(&self) -> usize { self.counts.beeps.load(Ordering::SeqCst) }
}

/* ---------- scenarios ---------- */

#[test]
fn default_run_completes_once() {
    let mut rig = Rig::new(Permission::Granted, true);
    rig.timer.start();
    rig.run_secs(1499);
    assert_eq!(rig.timer.phase(), PhaseKind::Running);
    assert_eq!(rig.timer.remaining_secs(), 1);

    rig.run_secs(1);
    assert_eq!(rig.timer.phase(), PhaseKind::Completed);
    assert_eq!(rig.timer.remaining_secs(), 0);
    assert_eq!(rig.shown(), 1);
    assert_eq!(rig.beeps(), 1);

    let view = rig.timer.view();
    assert_eq!(view.time_text, "00:00");
    assert_eq!(view.progress, 0.0);
    assert_eq!(view.status, STATUS_DONE);
    assert_eq!(view.status_class, StatusClass::Completed);
    assert_eq!(view.title, "Время вышло! - Pomodoro Timer");
    assert!(view.start_enabled && !view.pause_enabled);

    // Ticker is gone: more time changes nothing.
    rig.run_secs(10);
    assert_eq!(rig.shown(), 1);
    assert_eq!(rig.beeps(), 1);
    assert!(rig.timer.next_tick_in().is_none());
}

#[test]
fn one_big_clock_jump_still_completes_once() {
    let mut rig = Rig::new(Permission::Granted, true);
    rig.timer.start();
    rig.clock.advance(Duration::from_secs(2_000));
    rig.timer.advance();
    assert_eq!(rig.timer.phase(), PhaseKind::Completed);
    assert_eq!(rig.shown(), 1);
    assert_eq!(rig.beeps(), 1);
}

#[test]
fn custom_minutes_bounds() {
    let mut rig = Rig::new(Permission::Denied, true);

    for bad in [0, 181, -5] {
        let err = rig.timer.set_custom_duration(bad).unwrap_err();
        assert_eq!(err, DurationError::OutOfRange { got: bad, min: 1, max: 180 });
        assert_eq!(rig.timer.view_mut().take_alert().as_deref(), Some(MSG_BAD_MINUTES));
        assert_eq!(rig.timer.total_secs(), 1500);
        assert_eq!(rig.timer.remaining_secs(), 1500);
    }

    rig.timer.set_custom_duration(1).unwrap();
    assert_eq!(rig.timer.total_secs(), 60);
    assert_eq!(rig.timer.view().time_text, "01:00");

    rig.timer.set_custom_duration_text(" 180 ").unwrap();
    assert_eq!(rig.timer.total_secs(), 10_800);
    assert_eq!(rig.timer.view().time_text, "180:00");
    assert!(rig.timer.view_mut().take_alert().is_none());
}

#[test]
fn double_start_keeps_one_ticker() {
    let mut rig = Rig::new(Permission::Denied, true);
    rig.timer.start();
    rig.timer.start();
    rig.run_secs(3);
    assert_eq!(rig.timer.remaining_secs(), 1497);
}

#[test]
fn pause_then_start_resumes() {
    let mut rig = Rig::new(Permission::Denied, true);
    rig.timer.start();
    rig.run_secs(5);
    rig.timer.pause();
    assert_eq!(rig.timer.phase(), PhaseKind::Paused);

    // Paused time does not count.
    rig.run_secs(30);
    assert_eq!(rig.timer.remaining_secs(), 1495);
    assert!(rig.timer.view().start_enabled && !rig.timer.view().pause_enabled);

    rig.timer.start();
    assert_eq!(rig.timer.remaining_secs(), 1495);
    rig.run_secs(1);
    assert_eq!(rig.timer.remaining_secs(), 1494);
}

#[test]
fn pending_permission_granted_shows_notice() {
    let mut rig = Rig::new(Permission::Default, true);
    rig.timer.set_preset_duration(1);
    rig.timer.start();
    rig.run_secs(60);

    assert_eq!(rig.timer.phase(), PhaseKind::Completed);
    assert_eq!(rig.asked(), 1);
    assert_eq!(rig.shown(), 0);

    rig.answer(Permission::Granted);
    rig.timer.advance();
    assert_eq!(rig.shown(), 1);
}

#[test]
fn pending_permission_denied_stays_silent() {
    let mut rig = Rig::new(Permission::Default, true);
    rig.timer.set_preset_duration(1);
    rig.timer.start();
    rig.run_secs(60);

    rig.answer(Permission::Denied);
    rig.timer.advance();
    assert_eq!(rig.asked(), 1);
    assert_eq!(rig.shown(), 0);
    assert_eq!(rig.beeps(), 1);
}

#[test]
fn broken_audio_is_not_an_error() {
    let mut rig = Rig::new(Permission::Granted, false);
    rig.timer.set_preset_duration(1);
    rig.timer.start();
    rig.run_secs(60);
    assert_eq!(rig.timer.phase(), PhaseKind::Completed);
    assert_eq!(rig.beeps(), 1);
    assert!(rig.timer.view_mut().take_alert().is_none());
}

#[test]
fn restart_after_completion_completes_again() {
    let mut rig = Rig::new(Permission::Granted, true);
    rig.timer.set_preset_duration(1);
    rig.timer.start();
    rig.run_secs(60);
    assert_eq!(rig.shown(), 1);

    rig.timer.start();
    rig.run_secs(1);
    assert_eq!(rig.timer.phase(), PhaseKind::Completed);
    assert_eq!(rig.shown(), 2);
    assert_eq!(rig.beeps(), 2);
}

#[test]
fn reset_from_completed_and_paused() {
    let mut rig = Rig::new(Permission::Denied, true);
    rig.timer.set_preset_duration(1);
    rig.timer.start();
    rig.run_secs(60);
    assert_eq!(rig.timer.phase(), PhaseKind::Completed);

    rig.timer.reset();
    assert_eq!((rig.timer.phase(), rig.timer.remaining_secs()), (PhaseKind::Idle, 60));
    assert_eq!(rig.timer.view().time_text, "01:00");
    assert_eq!(rig.timer.view().status_class, StatusClass::Plain);

    rig.timer.start();
    rig.run_secs(7);
    rig.timer.pause();
    rig.timer.reset();
    assert_eq!((rig.timer.phase(), rig.timer.remaining_secs()), (PhaseKind::Idle, 60));
    assert!(rig.timer.view().start_enabled && !rig.timer.view().pause_enabled);

    // Nothing left ticking after a reset.
    rig.run_secs(5);
    assert_eq!(rig.timer.remaining_secs(), 60);
}

#[test]
fn pause_outside_running_does_nothing() {
    let mut rig = Rig::new(Permission::Denied, true);
    rig.timer.pause();
    assert_eq!(rig.timer.phase(), PhaseKind::Idle);
    assert_eq!(rig.timer.view().status, "Готов к работе");

    rig.timer.set_preset_duration(1);
    rig.timer.start();
    rig.run_secs(60);
    rig.timer.pause();
    assert_eq!(rig.timer.phase(), PhaseKind::Completed);
    assert_eq!(rig.timer.view().status, STATUS_DONE);
}

#[test]
fn custom_minutes_ignored_while_running() {
    let mut rig = Rig::new(Permission::Denied, true);
    rig.timer.set_preset_duration(1);
    rig.timer.start();
    rig.run_secs(2);

    rig.timer.set_custom_duration(10).unwrap();
    assert_eq!(rig.timer.total_secs(), 60);
    assert_eq!(rig.timer.remaining_secs(), 58);
    assert!(rig.timer.is_running());
    assert_eq!(rig.timer.view().custom_input, "1");
    assert!(rig.timer.view_mut().take_alert().is_none());
}

#[test]
fn startup_permission_grant_shows_nothing_until_completion() {
    let mut rig = Rig::new(Permission::Default, true);
    rig.timer.request_notification_permission();
    rig.timer.request_notification_permission();
    assert_eq!(rig.asked(), 1);

    rig.answer(Permission::Granted);
    rig.timer.advance();
    assert_eq!(rig.shown(), 0);

    rig.timer.set_preset_duration(1);
    rig.timer.start();
    rig.run_secs(60);
    assert_eq!(rig.asked(), 1);
    assert_eq!(rig.shown(), 1);
}
