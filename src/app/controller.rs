//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Ein Fehler landet zusätzlich in der Statusleiste; der nächste erfolgreich
    /// verarbeitete Nutzer-Intent (kein Animations-Frame) leert sie wieder.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let from_user = !matches!(intent, AppIntent::AnimationFrame { .. });
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            if let Err(e) = self.handle_command(state, command) {
                state.ui.report_error(&e);
                return Err(e);
            }
        }

        if from_user {
            state.ui.clear_status();
        }
        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Kurve ===
            AppCommand::BeginCurveDrag {
                frame_pos,
                page_pos,
            } => handlers::curve::begin_drag(state, frame_pos, page_pos),
            AppCommand::UpdateCurveDrag { page_pos } => {
                handlers::curve::update_drag(state, page_pos)
            }
            AppCommand::EndCurveDrag => handlers::curve::end_drag(state),
            AppCommand::CopyValueToClipboard => handlers::curve::copy_value(state),

            // === Presets ===
            AppCommand::ApplyPreset { category } => handlers::presets::apply(state, category),
            AppCommand::ChangePreset { delta } => handlers::presets::change(state, delta),
            AppCommand::ResetPreset => handlers::presets::reset(state),

            // === Vorschau ===
            AppCommand::TriggerPreview => handlers::preview::trigger(state),
            AppCommand::AdvancePreview { timestamp_ms } => {
                handlers::preview::advance(state, timestamp_ms)
            }
            AppCommand::AttachPreviewTarget => handlers::preview::attach_target(state),
            AppCommand::DetachPreviewTarget => handlers::preview::detach_target(state),

            // === Optionen ===
            AppCommand::ApplyOptions { options } => {
                handlers::options::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::options::reset_options(state)?,
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen State.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
