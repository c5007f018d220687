// Generates and saves 128×128 preview images:
// Sine terrain (grayscale)
// Peaks layered on top of the sine terrain (coloured)

use std::path::Path;

use terrain::preview::{to_grayscale, to_terrain_image};
use terrain::{Peak, PeakGenerator, SineGenerator, TerrainChunk, TerrainGenerator};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let size = 128;
    let mut chunk = TerrainChunk::new(42, size, 0.0)?;

    // 1) Sine waves, gently scaled so they read as hills at this size
    let mut sine = SineGenerator::new();
    sine.set_parameter("xscale", 0.11);
    sine.set_parameter("yscale", 0.07);
    chunk.generate(&mut sine);

    let path = Path::new("terrain_sine.png");
    to_grayscale(&chunk).save(path)?;
    info!(?path, "saved preview");

    // 2) A second pass adds two peaks on top of the same chunk
    let mut peaks = PeakGenerator::new()
        .with_peak(Peak {
            max_radius: 40.0,
            ..Peak::new(40.0, 50.0)
        })
        .with_peak(Peak {
            height: 60.0,
            max_radius: 30.0,
            ..Peak::new(90.0, 80.0)
        });
    peaks.set_parameter("height", 0.0);
    peaks.set_parameter("roughness", 0.2);
    chunk.generate(&mut peaks);

    let path = Path::new("terrain_layered.png");
    to_terrain_image(&chunk).save(path)?;
    info!(?path, "saved preview");

    Ok(())
}
