use terrain::{SineGenerator, TerrainGenerator, create_chunk};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 32×32 chunk with seed 2025, flat at height 0
    let mut chunk = create_chunk(2025, 32, 0.0)?;

    let mut sine = SineGenerator::new();
    sine.set_parameter("roughness", 0.05);
    chunk.generate(&mut sine);

    // Print the top-left 8×8 corner of the chunk
    for y in 0..8 {
        for x in 0..8 {
            print!("{:>7.3} ", chunk.get(x, y)?);
        }
        println!();
    }

    // A few in-between samples
    for &(x, y) in &[(0.5, 0.5), (3.25, 7.75), (31.0, 31.0), (-4.0, 100.0)] {
        println!("sample({x}, {y}) = {:.3}", chunk.sample(x, y));
    }

    Ok(())
}
