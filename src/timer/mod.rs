// src/timer/mod.rs
//
// Countdown ("Pomodoro") timer: a phase machine over injected ports.
//
//   Idle ──start──▶ Running ──pause──▶ Paused ──start──▶ Running
//                     │ remaining hits 0
//                     ▼
//                 Completed ──start/reset/set duration──▶ …
//
// The 1-second ticker lives inside `Phase::Running`, so there is never more
// than one. Frontends call `Pomodoro::advance()` from their loop.

pub mod engine;
pub mod ports;
pub mod ticker;
pub mod tone;
pub mod view;

pub use engine::{format_mmss, Phase, PhaseKind, Pomodoro, Ports};
pub use ports::{
    Beeper, Clock, ManualClock, NoBeeper, NoNotifier, Notice, Notifier, Permission, StatusClass,
    SystemClock, TimerView,
};
pub use ticker::Ticker;
pub use tone::{SystemBeeper, Tone};
pub use view::WidgetView;
