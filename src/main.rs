//! Race Track Editor.
//!
//! Kommandozeilen-Frontend: lädt Streckendateien, fasst sie zusammen und
//! exportiert das Randband für externe Renderer.

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{CliArgs, Command};
use race_track_editor::{load_track_file, save_track_file, Track};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Logger initialisieren (RUST_LOG überschreibt den Standard)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    log::debug!(
        "Race Track Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> anyhow::Result<()> {
    let options = args.track_options();

    match &args.command {
        Command::Inspect { track } => {
            let track = load_track_file(track, &options)?;
            print_summary(&track);
        }
        Command::Ribbon {
            track,
            output,
            lines,
        } => {
            let track = load_track_file(track, &options)?;
            let json = if *lines {
                serde_json::to_string_pretty(&track.boundary_lines())?
            } else {
                serde_json::to_string_pretty(&track.boundary_ribbon())?
            };
            write_output(output.as_deref(), &json)?;
        }
        Command::Normalize { track, output } => {
            let track = load_track_file(track, &options)?;
            save_track_file(output, &track)?;
        }
        Command::SaveConfig { output } => {
            let path = output.clone().unwrap_or_else(|| args.config_path());
            options.save_to_file(&path)?;
        }
    }

    Ok(())
}

fn print_summary(track: &Track) {
    println!(
        "{} Segmente, {} Randpunkt-Paare, Mittellinie {:.1}",
        track.segment_count(),
        track.boundary_ribbon().len(),
        track.centerline_length()
    );
    for (index, segment) in track.segments().iter().enumerate() {
        let [p1, _, _, p4] = segment.control_points();
        println!(
            "  #{:<3} {} -> {}  ({} Samples, Radius {})",
            index,
            p1,
            p4,
            segment.sample_count(),
            segment.offset_radius()
        );
    }
}

fn write_output(path: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Ausgabe nicht schreibbar: {}", path.display()))?;
            log::info!("Ausgabe geschrieben nach: {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}
