// Builds a chunk from a RON config: `cargo run --example config_demo [path]`.
// Without a path the built-in config below is used.

use terrain::TerrainConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = r#"(
    chunk: (seed: 7, width: 16, base_height: 0.0),
    generator: (
        kind: sine,
        parameters: { "amplitude": 10.0, "roughness": 0.1 },
    ),
)"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let text = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEFAULT_CONFIG.to_string(),
    };

    let config = TerrainConfig::from_ron(&text)?;
    let chunk = config.generate()?;
    let (min, max) = chunk.min_max();
    info!(width = chunk.width(), min, max, "generated chunk");

    println!("{}", config.to_ron()?);
    Ok(())
}
