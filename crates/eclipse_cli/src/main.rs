use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use eclipse_core::{compute_circumstances, EclipseRecord, LocalKind, Observer};
use eclipse_ingest::parse_record;
use eclipse_track::build_overlays;

#[derive(Parser)]
#[command(name = "eclipse", about = "Eclipse circumstances and ground-track CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute contact times, magnitude, and local classification for an observer
    ComputeCircumstances {
        /// Path to a JSON eclipse record
        #[arg(long)]
        record: PathBuf,
        /// Observer latitude, degrees north-positive
        #[arg(long)]
        lat: f64,
        /// Observer longitude, degrees east-positive
        #[arg(long)]
        lon: f64,
        /// Observer elevation above the ellipsoid, meters
        #[arg(long, default_value = "0")]
        elev: f64,
    },
    /// Build penumbral visibility and central-path ground-track overlays
    BuildOverlays {
        /// Path to a JSON eclipse record
        #[arg(long)]
        record: PathBuf,
    },
}

fn load_record(path: &PathBuf) -> EclipseRecord {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {e}", path.display());
        std::process::exit(1);
    });
    parse_record(&text).unwrap_or_else(|e| {
        eprintln!("Failed to parse eclipse record: {e}");
        std::process::exit(1);
    })
}

fn kind_name(kind: LocalKind) -> &'static str {
    match kind {
        LocalKind::None => "none",
        LocalKind::Partial => "partial",
        LocalKind::Total => "total",
        LocalKind::Annular => "annular",
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::ComputeCircumstances {
            record,
            lat,
            lon,
            elev,
        } => {
            let record = load_record(&record);
            let observer = Observer {
                lat_deg: lat,
                lon_deg: lon,
                elev_m: elev,
            };

            match compute_circumstances(&record, &observer) {
                Ok(result) => {
                    println!("Eclipse: {}", result.eclipse_id);
                    println!("  Visible: {}", result.visible);
                    println!("  Classification: {}", kind_name(result.kind_at_location));
                    if let Some(c1) = &result.c1_utc {
                        println!("  C1: {c1}");
                    }
                    if let Some(c2) = &result.c2_utc {
                        println!("  C2: {c2}");
                    }
                    if let Some(max) = &result.max_utc {
                        println!("  Max: {max}");
                    }
                    if let Some(c3) = &result.c3_utc {
                        println!("  C3: {c3}");
                    }
                    if let Some(c4) = &result.c4_utc {
                        println!("  C4: {c4}");
                    }
                    if let Some(magnitude) = result.magnitude {
                        println!("  Magnitude: {magnitude:.4}");
                    }
                    if let Some(duration) = result.duration_seconds {
                        println!("  Central duration: {duration:.1} s");
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::BuildOverlays { record } => {
            let record = load_record(&record);
            let overlays = build_overlays(&record);

            println!("Eclipse: {}", record.id);
            println!("Visibility envelope: {} ring(s)", overlays.visible.len());
            for (i, ring) in overlays.visible.iter().enumerate() {
                println!("  ring {i}: {} vertices", ring.len());
            }
            println!("Central path: {} ring(s)", overlays.central.len());
            for (i, ring) in overlays.central.iter().enumerate() {
                println!("  ring {i}: {} vertices", ring.len());
            }
        }
    }
}
