// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use eframe::egui;

use crate::{
    config::{
        consts::{APP_NAME, PULSE_MS},
        options::PageKind,
        state::AppState,
    },
    specs::channels::ChannelRecord,
    timer::{Pomodoro, Ports, SystemBeeper, SystemClock, WidgetView},
};

use super::{
    notices::{DesktopNotifier, Modal, NoticeCenter},
    pages::Page,
    router,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // Channels page
    pub records: Vec<ChannelRecord>,
    pub status: String,

    // Timer page
    pub timer: Pomodoro<WidgetView>,
    pub notices: Arc<Mutex<NoticeCenter>>,
    pub last_title: String,

    // Pending alert/confirm windows, oldest first
    pub modals: Vec<Modal>,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        state.gui.out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        let notices = Arc::new(Mutex::new(NoticeCenter::default()));
        let ports = Ports {
            clock: Box::new(SystemClock),
            notifier: Box::new(DesktopNotifier::new(notices.clone())),
            beeper: Box::new(SystemBeeper::new()),
        };
        let mut timer = Pomodoro::new(WidgetView::default(), state.options.timer.clone(), ports);

        // Ask once up front, like a page asking on load.
        timer.request_notification_permission();

        logf!("Init: pages={}, timer default={} min",
            router::all_pages().len(),
            state.options.timer.default_minutes
        );

        Self {
            state,
            records: Vec::new(),
            status: s!("Idle"),
            timer,
            notices,
            last_title: s!(),
            modals: Vec::new(),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Keep the window title in step with the timer.
    fn sync_title(&mut self, ctx: &egui::Context) {
        let title = &self.timer.view().title;
        if *title != self.last_title {
            self.last_title = title.clone();
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
        }
    }

    /// Schedule the next frame: next tick or the end of a running pulse.
    fn schedule_repaint(&mut self, ctx: &egui::Context) {
        let mut wait = Duration::from_secs(1);
        if let Some(next) = self.timer.next_tick_in() {
            wait = wait.min(next);
        }
        let pulse_len = Duration::from_millis(PULSE_MS);
        if self.timer.view_mut().settle_pulse(Instant::now(), pulse_len) {
            wait = wait.min(Duration::from_millis(PULSE_MS / 3));
        }
        ctx.request_repaint_after(wait);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Timer keeps running whichever tab is visible.
        self.timer.advance();
        if let Some(msg) = self.timer.view_mut().take_alert() {
            self.modals.push(Modal::Alert(msg));
        }
        self.sync_title(ctx);

        eframe::egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::tabs::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            page.draw(ui, self);
        });

        crate::gui::components::dialogs::draw(ctx, self);

        self.schedule_repaint(ctx);
    }
}
