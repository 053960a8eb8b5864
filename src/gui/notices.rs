// src/gui/notices.rs
//
// GUI-side hosts for the exporter dialogs and the timer notifications.
// egui cannot block, so both queue work that the next frame draws.

use std::sync::{
    mpsc::{self, Receiver, Sender},
    Arc, Mutex, MutexGuard,
};
use std::time::Instant;

use crate::config::consts::APP_NAME;
use crate::export::Dialogs;
use crate::timer::{Notice, Notifier, Permission};

/* ---------------- Dialogs ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Modal {
    Alert(String),
    /// Yes opens `url` in the browser.
    Confirm { prompt: String, url: String },
}

/// Collects what one export wants to say; drained into `App::modals`.
#[derive(Default)]
pub struct ModalQueue {
    pub modals: Vec<Modal>,
}

impl Dialogs for ModalQueue {
    fn alert(&mut self, msg: &str) {
        self.modals.push(Modal::Alert(s!(msg)));
    }

    fn confirm_open(&mut self, prompt: &str, url: &str) {
        self.modals.push(Modal::Confirm { prompt: s!(prompt), url: s!(url) });
    }
}

/* ---------------- Notifications ---------------- */

/// Toast shown in the corner until dismissed.
#[derive(Clone, Debug)]
pub struct Toast {
    pub notice: Notice,
    pub shown_at: Instant,
}

#[derive(Debug)]
pub struct NoticeCenter {
    pub permission: Permission,
    /// Open permission prompt; answered from the UI.
    asking: Option<Sender<Permission>>,
    pub toasts: Vec<Toast>,
}

impl Default for NoticeCenter {
    fn default() -> Self {
        Self { permission: Permission::Default, asking: None, toasts: Vec::new() }
    }
}

impl NoticeCenter {
    pub fn is_asking(&self) -> bool {
        self.asking.is_some()
    }

    /// Record the user's choice and hand it to whoever asked.
    pub fn answer(&mut self, granted: bool) {
        self.permission = if granted { Permission::Granted } else { Permission::Denied };
        if let Some(tx) = self.asking.take() {
            let _ = tx.send(self.permission);
        }
        logf!("Notifications: permission {:?}", self.permission);
    }

    pub fn dismiss(&mut self, idx: usize) {
        if idx < self.toasts.len() {
            self.toasts.remove(idx);
        }
    }
}

/// `Notifier` backed by the OS notification centre plus an in-window toast.
#[derive(Clone)]
pub struct DesktopNotifier {
    center: Arc<Mutex<NoticeCenter>>,
    system: bool,
}

impl DesktopNotifier {
    pub fn new(center: Arc<Mutex<NoticeCenter>>) -> Self {
        Self { center, system: true }
    }

    /// Toasts only; nothing leaves the window.
    pub fn in_window(center: Arc<Mutex<NoticeCenter>>) -> Self {
        Self { center, system: false }
    }

    fn lock(&self) -> MutexGuard<'_, NoticeCenter> {
        self.center.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Notifier for DesktopNotifier {
    fn permission(&self) -> Permission {
        self.lock().permission
    }

    fn request_permission(&mut self) -> Receiver<Permission> {
        let (tx, rx) = mpsc::channel();
        let mut center = self.lock();
        match center.permission {
            Permission::Default => center.asking = Some(tx),
            answered => {
                let _ = tx.send(answered);
            }
        }
        rx
    }

    fn show(&mut self, notice: &Notice) {
        if self.system {
            if let Err(e) = system_notification(notice).show() {
                logd!("Notifications: OS delivery failed: {e}");
            }
        }
        self.lock().toasts.push(Toast { notice: notice.clone(), shown_at: Instant::now() });
    }
}

pub fn system_notification(notice: &Notice) -> notify_rust::Notification {
    let mut n = notify_rust::Notification::new();
    n.appname(APP_NAME).summary(&notice.title).body(&notice.body);
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_answer_reaches_requester() {
        let center = Arc::new(Mutex::new(NoticeCenter::default()));
        let mut n = DesktopNotifier::in_window(center.clone());

        let rx = n.request_permission();
        assert!(rx.try_recv().is_err());
        assert!(center.lock().unwrap().is_asking());

        center.lock().unwrap().answer(true);
        assert_eq!(rx.try_recv().unwrap(), Permission::Granted);
        assert_eq!(n.permission(), Permission::Granted);
    }

    #[test]
    fn answered_permission_is_replayed() {
        let center = Arc::new(Mutex::new(NoticeCenter::default()));
        center.lock().unwrap().answer(false);

        let mut n = DesktopNotifier::in_window(center);
        let rx = n.request_permission();
        assert_eq!(rx.try_recv().unwrap(), Permission::Denied);
    }

    #[test]
    fn shown_notice_becomes_toast() {
        let center = Arc::new(Mutex::new(NoticeCenter::default()));
        let mut n = DesktopNotifier::in_window(center.clone());
        n.show(&Notice::completion());

        let c = center.lock().unwrap();
        assert_eq!(c.toasts.len(), 1);
        assert_eq!(c.toasts[0].notice, Notice::completion());
    }

    #[test]
    fn system_notification_carries_notice_text() {
        let n = system_notification(&Notice::completion());
        assert_eq!(n.appname, APP_NAME);
        assert_eq!(n.summary, "Pomodoro Timer");
        assert_eq!(n.body, "Время вышло! Пора сделать перерыв.");
    }

    #[test]
    fn modal_queue_keeps_order() {
        let mut q = ModalQueue::default();
        q.alert("a");
        q.confirm_open("b", "https://x");
        assert_eq!(q.modals, vec![
            Modal::Alert(s!("a")),
            Modal::Confirm { prompt: s!("b"), url: s!("https://x") },
        ]);
    }
}
