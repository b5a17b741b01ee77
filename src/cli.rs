//! Kommandozeilen-Argumente der Binary.

use clap::{Parser, Subcommand};
use race_track_editor::TrackOptions;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Optionen-Datei (TOML); Standard: neben der Binary
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Mittellinien-Samples pro Segment (überschreibt die Optionen-Datei)
    #[arg(long)]
    pub samples: Option<usize>,

    /// Randabstand links/rechts (überschreibt die Optionen-Datei)
    #[arg(long)]
    pub radius: Option<f64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Streckendatei laden und Segmente zusammenfassen
    Inspect {
        /// Streckendatei
        track: PathBuf,
    },
    /// Randband einer Streckendatei als JSON ausgeben
    Ribbon {
        /// Streckendatei
        track: PathBuf,
        /// Zieldatei; ohne Angabe auf stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Randlinien statt Randpunkt-Paaren ausgeben
        #[arg(long, default_value_t = false)]
        lines: bool,
    },
    /// Streckendatei validieren und normalisiert neu schreiben
    Normalize {
        /// Quelldatei
        track: PathBuf,
        /// Zieldatei
        output: PathBuf,
    },
    /// Aktuelle Optionen als TOML speichern
    SaveConfig {
        /// Zieldatei; Standard: `--config` bzw. neben der Binary
        output: Option<PathBuf>,
    },
}

impl CliArgs {
    /// Pfad der Optionen-Datei
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(TrackOptions::config_path)
    }

    /// Lädt die Optionen und wendet die CLI-Overrides an
    pub fn track_options(&self) -> TrackOptions {
        let mut options = TrackOptions::load_from_file(&self.config_path());
        if let Some(samples) = self.samples {
            options.sample_count = samples;
        }
        if let Some(radius) = self.radius {
            options.offset_radius = radius;
        }
        options
    }
}
