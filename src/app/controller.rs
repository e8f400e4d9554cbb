//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::render::{self, DrawCommand};

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
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
            // === Track-Lebenszyklus ===
            AppCommand::LoadSvg { path } => handlers::track::load_svg(state, path)?,
            AppCommand::RegenerateTrack {
                track_width,
                segment_length,
            } => handlers::track::regenerate(state, track_width, segment_length)?,
            AppCommand::SetBorderOffsetRatio { ratio } => {
                handlers::track::set_border_offset_ratio(state, ratio)?
            }

            // === Editor ===
            AppCommand::SetEditMode { mode } => handlers::editor::set_mode(state, mode),
            AppCommand::SetDefaultSpeedLimit { limit } => {
                handlers::editor::set_default_speed_limit(state, limit)
            }
            AppCommand::SelectSegment { segment_number } => {
                handlers::editor::select_segment(state, segment_number)
            }

            // === Segment-Attribute ===
            AppCommand::ToggleCurve { segment_number } => {
                handlers::segments::toggle_curve(state, segment_number)
            }
            AppCommand::MarkCurveRange {
                start,
                end,
                speed_limit,
            } => handlers::segments::mark_curve_range(state, start, end, speed_limit),
            AppCommand::SetSpeedLimit {
                segment_number,
                limit,
            } => handlers::segments::set_speed_limit(state, segment_number, limit),
            AppCommand::CycleKerb { segment_number } => {
                handlers::segments::cycle_kerb(state, segment_number)
            }
            AppCommand::SetKerbSide {
                segment_number,
                side,
            } => handlers::segments::set_kerb_side(state, segment_number, side),
            AppCommand::ToggleWhiteLine {
                segment_number,
                side,
            } => handlers::segments::toggle_white_line(state, segment_number, side),
            AppCommand::ToggleNumberSide { segment_number } => {
                handlers::segments::toggle_number_side(state, segment_number)
            }
            AppCommand::ToggleOutline { segment_number } => {
                handlers::segments::toggle_outline(state, segment_number)
            }

            // === Struktur ===
            AppCommand::RepositionSegment {
                segment_number,
                distance,
            } => handlers::segments::reposition_segment(state, segment_number, distance),
            AppCommand::InsertSegment { distance } => {
                handlers::segments::insert_segment(state, distance)
            }
            AppCommand::RemoveSegment { segment_number } => {
                handlers::segments::remove_segment(state, segment_number)
            }

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Datei-I/O ===
            AppCommand::ExportTrack { path } => handlers::track::export_track(state, &path)?,
            AppCommand::SaveSession { path } => handlers::track::save_session(state, &path)?,
            AppCommand::LoadSession { path } => handlers::track::load_session(state, &path)?,
            AppCommand::ApplyOptions { options } => {
                handlers::track::apply_options(state, *options)?
            }
        }

        Ok(())
    }

    /// Baut die Zeichenliste aus dem aktuellen AppState.
    ///
    /// Ohne geladenen Track ist die Liste leer.
    pub fn build_draw_list(&self, state: &AppState) -> Vec<DrawCommand> {
        state
            .track
            .as_deref()
            .map(|track| render::build_draw_list(track, &state.options.render))
            .unwrap_or_default()
    }
}
