//! Zentrale Konfiguration für Streckenaufbau und Editor.
//!
//! `TrackOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Strecke ─────────────────────────────────────────────────────────

/// Anzahl der Mittellinien-Samples pro Segment.
pub const SAMPLE_COUNT: usize = 20;
/// Seitlicher Abstand der Randlinien von der Mittellinie.
pub const OFFSET_RADIUS: f64 = 30.0;

// ── Editor ──────────────────────────────────────────────────────────

/// Klick-Radius um einen Kontrollpunkt (Pixel).
pub const POINT_HIT_RADIUS: f64 = 10.0;

/// Alle zur Laufzeit änderbaren Strecken-Optionen.
/// Wird als `race_track_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackOptions {
    /// Mittellinien-Samples pro Segment (mindestens 2)
    pub sample_count: usize,
    /// Randabstand links und rechts der Mittellinie
    pub offset_radius: f64,
    /// Hit-Radius für Kontrollpunkte im Editor
    #[serde(default = "default_point_hit_radius")]
    pub point_hit_radius: f64,
}

impl Default for TrackOptions {
    fn default() -> Self {
        Self {
            sample_count: SAMPLE_COUNT,
            offset_radius: OFFSET_RADIUS,
            point_hit_radius: POINT_HIT_RADIUS,
        }
    }
}

/// Serde-Default für `point_hit_radius` (ältere TOML-Dateien ohne Editor-Sektion).
fn default_point_hit_radius() -> f64 {
    POINT_HIT_RADIUS
}

impl TrackOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("race_track_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("race_track_editor.toml")
    }
}
