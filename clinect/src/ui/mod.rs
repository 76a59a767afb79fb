//! # GUI Rendering
//!
//! Top-level render dispatch. Every frame: snapshot state under a brief
//! read lock, flush queued toasts, enforce the auth gate, draw the nav bar
//! for authenticated sessions, then hand off to the active screen.

pub mod screens;
pub mod theme;
pub mod widgets;

use egui;

use crate::app::{App, Screen};
use widgets::notifications::NotificationManager;

/// Main render function, called every frame.
pub fn render(ctx: &egui::Context, app: &mut App, notifications: &mut NotificationManager) {
    // Snapshot state so rendering never holds the lock. If a writer holds
    // it, skip this frame.
    let state = match app.state.try_read() {
        Some(guard) => guard.clone(),
        None => return,
    };

    for (level, message) in app.take_notifications() {
        notifications.push(&level, message);
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        // Deny-by-default gate: protected screens never render for an
        // anonymous session, whatever state claims.
        if state.current_screen.requires_auth() && !state.is_authenticated() {
            app.handle_screen_change(Screen::Login);
            screens::login::render(ui, &state, app);
            return;
        }

        if state.is_authenticated() {
            widgets::nav_bar::render(ui, &state, app);
            ui.separator();
            ui.add_space(4.0);
        }

        match state.current_screen {
            Screen::Landing => screens::landing::render(ui, &state, app),
            Screen::Login => screens::login::render(ui, &state, app),
            Screen::Search => screens::search::render(ui, &state, app),
            Screen::TrialDetail => screens::trial_detail::render(ui, &state, app),
            Screen::Saved => screens::saved::render(ui, &state, app),
            Screen::Profile => screens::profile::render(ui, &state, app),
            Screen::Chat => screens::chat::render(ui, &state, app),
        }
    });

    notifications.show(ctx);
}
