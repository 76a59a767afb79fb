//! eframe entry point: logging, runtime guard, window bootstrap.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::time::Duration;

use clinect::app::App;
use clinect::ui;
use clinect::ui::theme::Theme;
use clinect::ui::widgets::notifications::NotificationManager;
use clinect::utils::runtime::TOKIO_RT;

/// Frame wrapper owning the orchestrator and the toast manager.
struct ClinectApp {
    app: App,
    notifications: NotificationManager,
}

impl ClinectApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Theme::apply(&cc.egui_ctx);
        ClinectApp {
            app: App::new(),
            notifications: NotificationManager::new(),
        }
    }
}

impl eframe::App for ClinectApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        ui::render(ctx, &mut self.app, &mut self.notifications);

        // Async results arrive between frames; poll at a gentle cadence even
        // without input so loading states resolve on screen.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

fn main() -> eframe::Result<()> {
    clinect::logging::init();

    // Spawned tasks need an ambient runtime for reqwest's internals.
    let _runtime_guard = TOKIO_RT.enter();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Clinect"),
        ..Default::default()
    };

    tracing::info!("Starting Clinect desktop client");
    eframe::run_native(
        "Clinect",
        options,
        Box::new(|cc| Ok(Box::new(ClinectApp::new(cc)))),
    )
}
