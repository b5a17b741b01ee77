//! Editor-Controller für zentrale Event-Verarbeitung.

use super::{handlers, EditorCommand, EditorIntent, EditorState};

/// Orchestriert UI-Events auf den EditorState.
#[derive(Default)]
pub struct EditorController;

impl EditorController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut EditorState,
        intent: EditorIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem EditorState aus.
    pub fn handle_command(
        &mut self,
        state: &mut EditorState,
        command: EditorCommand,
    ) -> anyhow::Result<()> {
        log::trace!("Command: {:?}", command);

        match command {
            EditorCommand::CreatePoint {
                pos,
                add_to_pending,
            } => handlers::create_point(state, pos, add_to_pending)?,
            EditorCommand::AddToPendingSegment { id } => {
                handlers::add_to_pending_segment(state, id)?
            }
            EditorCommand::BeginMovePoint { id } => handlers::begin_move(state, id),
            EditorCommand::MovePoint { id, pos } => handlers::move_point(state, id, pos),
            EditorCommand::EndMovePoint => handlers::end_move(state),
            EditorCommand::StartNewSegment => handlers::start_new_segment(state),
            EditorCommand::DeletePoint { id } => handlers::delete_point(state, id),
            EditorCommand::ExportTrack => handlers::export(state),
        }

        Ok(())
    }
}
