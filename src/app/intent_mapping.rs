//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::to_frame_space;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        // Ein frei gezogener Wert ist kein benanntes Preset mehr
        AppIntent::PointerPressed { offset, page } => vec![
            AppCommand::ResetPreset,
            AppCommand::BeginCurveDrag {
                frame_pos: to_frame_space(offset),
                page_pos: page,
            },
        ],
        AppIntent::PointerMoved { page } => vec![AppCommand::UpdateCurveDrag { page_pos: page }],
        AppIntent::PointerReleased => {
            let mut commands = vec![AppCommand::EndCurveDrag];
            if state.drag.is_dragging() && state.options.preview_on_drag_end {
                commands.push(AppCommand::TriggerPreview);
            }
            commands
        }
        AppIntent::PresetRequested { category } => vec![
            AppCommand::ApplyPreset { category },
            AppCommand::TriggerPreview,
        ],
        AppIntent::PresetStepRequested { delta } => {
            if state.presets.active_category().is_some() {
                vec![AppCommand::ChangePreset { delta }, AppCommand::TriggerPreview]
            } else {
                vec![AppCommand::ChangePreset { delta }]
            }
        }
        AppIntent::PresetResetRequested => vec![AppCommand::ResetPreset],
        AppIntent::PreviewRequested => vec![AppCommand::TriggerPreview],
        AppIntent::AnimationFrame { timestamp_ms } => {
            vec![AppCommand::AdvancePreview { timestamp_ms }]
        }
        AppIntent::PreviewTargetAttached => vec![AppCommand::AttachPreviewTarget],
        AppIntent::PreviewTargetDetached => vec![AppCommand::DetachPreviewTarget],
        AppIntent::CopyValueRequested => vec![AppCommand::CopyValueToClipboard],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::OptionsResetRequested => vec![AppCommand::ResetOptions],
    }
}
