//! Cubic-Bezier Editor.
//!
//! Interaktiver Editor für CSS-Timing-Funktionen `cubic-bezier(x1, y1, x2, y2)`
//! mit Presets und animierter Vorschau (egui + eframe).

use eframe::egui;
use cubic_bezier_editor::{ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Cubic-Bezier Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([720.0, 480.0])
                .with_title("Cubic-Bezier Editor"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Cubic-Bezier Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    target_attached: bool,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::with_options(editor_options);
        state.options_path = Some(config_path);

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
            target_attached: false,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Angeforderte Animations-Frames zuerst ausliefern
        if self.state.needs_animation_frame() {
            let timestamp_ms = ctx.input(|i| i.time) * 1000.0;
            self.process_events(vec![AppIntent::AnimationFrame { timestamp_ms }]);
        }

        let events = self.collect_ui_events(ctx);
        self.process_events(events);

        if let Some(text) = self.state.ui.take_clipboard() {
            ctx.copy_text(text);
        }

        if self.state.needs_animation_frame() {
            ctx.request_repaint();
        }
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        if !self.target_attached {
            self.target_attached = true;
            events.push(AppIntent::PreviewTargetAttached);
        }

        let scene = self.controller.build_render_scene(&self.state);

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_options_panel(ctx, &self.state));

        egui::CentralPanel::default().show(ctx, |ui| {
            events.extend(ui::render_preset_panel(ui, &self.state));
            ui.separator();

            let (rect, _response) =
                ui.allocate_exact_size(ui::EDITOR_SIZE, egui::Sense::click_and_drag());
            events.extend(self.input.collect_editor_events(ui, rect));
            ui::paint_editor(ui.painter(), rect, &scene);

            ui.add_space(8.0);

            let track_size = ui::preview_track_size(scene.options.preview.track_width);
            let (track_rect, _) = ui.allocate_exact_size(track_size, egui::Sense::hover());
            ui::paint_preview_track(ui.painter(), track_rect, &scene);
        });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
