//! # Notifications Widget
//!
//! Toast notifications via egui-notify for save/unsave confirmations and
//! transient errors.

use egui_notify::Toasts;

/// Notification manager for the application.
pub struct NotificationManager {
    toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default(),
        }
    }
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: String) {
        self.toasts.success(message);
    }

    pub fn error(&mut self, message: String) {
        self.toasts.error(message);
    }

    pub fn info(&mut self, message: String) {
        self.toasts.info(message);
    }

    /// Queue one toast from the event handler's (level, message) pairs.
    pub fn push(&mut self, level: &str, message: String) {
        match level {
            "success" => self.success(message),
            "error" => self.error(message),
            _ => self.info(message),
        }
    }

    /// Render queued toasts. Called once per frame.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
