//! Mapping von UI-Intents auf mutierende Editor-Commands.

use super::{EditorCommand, EditorIntent, EditorState};

/// Übersetzt einen `EditorIntent` in eine Sequenz ausführbarer `EditorCommand`s.
pub fn map_intent_to_commands(state: &EditorState, intent: EditorIntent) -> Vec<EditorCommand> {
    match intent {
        EditorIntent::PointerPressed { pos } => {
            let hit = state
                .points
                .hit_test(pos, state.options.point_hit_radius);
            match hit {
                Some(id) if state.creating_segment => {
                    vec![EditorCommand::AddToPendingSegment { id }]
                }
                Some(id) => vec![EditorCommand::BeginMovePoint { id }],
                None => vec![EditorCommand::CreatePoint {
                    pos,
                    add_to_pending: state.creating_segment,
                }],
            }
        }
        EditorIntent::PointerDragged { pos } => state
            .moving_point
            .map(|id| EditorCommand::MovePoint { id, pos })
            .into_iter()
            .collect(),
        EditorIntent::PointerReleased => vec![EditorCommand::EndMovePoint],
        EditorIntent::NewSegmentRequested => vec![EditorCommand::StartNewSegment],
        EditorIntent::DeleteRequested => state
            .last_moved_point
            .map(|id| EditorCommand::DeletePoint { id })
            .into_iter()
            .collect(),
        EditorIntent::ExportRequested => vec![EditorCommand::ExportTrack],
    }
}
