//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState, EditMode};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Klicks auf Segmente und Ränder hängen vom aktiven Bearbeitungsmodus ab.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SvgFileSelected { path } => vec![AppCommand::LoadSvg { path }],
        AppIntent::GenerateRequested {
            track_width,
            segment_length,
        } => vec![AppCommand::RegenerateTrack {
            track_width,
            segment_length,
        }],
        AppIntent::BorderOffsetChanged { ratio } => {
            vec![AppCommand::SetBorderOffsetRatio { ratio }]
        }
        AppIntent::EditModeSelected { mode } => vec![AppCommand::SetEditMode { mode }],
        AppIntent::DefaultSpeedLimitChanged { limit } => {
            vec![AppCommand::SetDefaultSpeedLimit { limit }]
        }
        AppIntent::SegmentClicked { segment_number } => {
            let edit = match state.editor.mode {
                EditMode::Select | EditMode::WhiteLine => None,
                EditMode::Curve => Some(AppCommand::ToggleCurve { segment_number }),
                EditMode::Kerb => Some(AppCommand::CycleKerb { segment_number }),
                EditMode::Number => Some(AppCommand::ToggleNumberSide { segment_number }),
                EditMode::Outline => Some(AppCommand::ToggleOutline { segment_number }),
            };
            std::iter::once(AppCommand::SelectSegment { segment_number })
                .chain(edit)
                .collect()
        }
        AppIntent::BorderClicked {
            segment_number,
            side,
        } => match state.editor.mode {
            EditMode::Kerb => vec![
                AppCommand::SelectSegment { segment_number },
                AppCommand::SetKerbSide {
                    segment_number,
                    side,
                },
            ],
            EditMode::WhiteLine => vec![
                AppCommand::SelectSegment { segment_number },
                AppCommand::ToggleWhiteLine {
                    segment_number,
                    side,
                },
            ],
            // Ohne seitenabhängigen Modus wirkt der Randklick wie ein Segmentklick
            _ => map_intent_to_commands(state, AppIntent::SegmentClicked { segment_number }),
        },
        AppIntent::CurveRangeRequested {
            start,
            end,
            speed_limit,
        } => vec![AppCommand::MarkCurveRange {
            start,
            end,
            speed_limit,
        }],
        AppIntent::SpeedLimitEdited {
            segment_number,
            limit,
        } => vec![AppCommand::SetSpeedLimit {
            segment_number,
            limit,
        }],
        AppIntent::SegmentDragged {
            segment_number,
            distance,
        } => vec![AppCommand::RepositionSegment {
            segment_number,
            distance,
        }],
        AppIntent::SegmentInsertRequested { distance } => {
            vec![AppCommand::InsertSegment { distance }]
        }
        AppIntent::SegmentRemoveRequested { segment_number } => {
            vec![AppCommand::RemoveSegment { segment_number }]
        }
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::ExportRequested { path } => vec![AppCommand::ExportTrack { path }],
        AppIntent::SaveSessionRequested { path } => vec![AppCommand::SaveSession { path }],
        AppIntent::LoadSessionRequested { path } => vec![AppCommand::LoadSession { path }],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}

#[cfg(test)]
mod tests;
