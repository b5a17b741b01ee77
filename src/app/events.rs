//! Editor-Intent und Editor-Command Events.

use crate::core::PointId;
use glam::DVec2;

/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorIntent {
    /// Linke Maustaste gedrückt
    PointerPressed { pos: DVec2 },
    /// Maus bei gedrückter Taste bewegt
    PointerDragged { pos: DVec2 },
    /// Linke Maustaste losgelassen
    PointerReleased,
    /// "+"-Button: nächste 4 Punkte bilden ein neues Segment
    NewSegmentRequested,
    /// Entfernen-Taste: zuletzt verschobenen Punkt löschen
    DeleteRequested,
    /// "PRINT"-Button: Strecke im Dateiformat ausgeben
    ExportRequested,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    /// Neuen Punkt anlegen, optional direkt ins Segment im Aufbau
    CreatePoint { pos: DVec2, add_to_pending: bool },
    /// Bestehenden Punkt ins Segment im Aufbau übernehmen
    AddToPendingSegment { id: PointId },
    /// Drag eines Punkts beginnen
    BeginMovePoint { id: PointId },
    /// Punkt verschieben und abhängige Segmente neu berechnen
    MovePoint { id: PointId, pos: DVec2 },
    /// Drag beenden
    EndMovePoint,
    /// Aufbau eines neuen Segments starten
    StartNewSegment,
    /// Punkt samt referenzierender Segmente löschen
    DeletePoint { id: PointId },
    /// Strecke im Dateiformat exportieren
    ExportTrack,
}
