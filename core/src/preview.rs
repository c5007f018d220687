// In-memory debug images of a chunk, for eyeballing generator output.
// Saving them to disk is left to callers.

use image::{GrayImage, Luma, Rgb, RgbImage};
use palette::{Gradient, LinSrgb};

use crate::chunk::TerrainChunk;

// Height in [0, 1] for every cell, lowest cell → 0, highest → 1.
// A perfectly flat chunk maps to 0.5 everywhere.
pub fn normalized(chunk: &TerrainChunk) -> Vec<f32> {
    let (min, max) = chunk.min_max();
    let range = max - min;
    chunk
        .heights()
        .iter()
        .map(|&h| {
            if range.abs() < f64::EPSILON {
                0.5
            } else {
                ((h - min) / range) as f32
            }
        })
        .collect()
}

fn terrain_gradient() -> Gradient<LinSrgb> {
    Gradient::with_domain(vec![
        (0.00, LinSrgb::new(0.0, 0.0, 0.5)), // deep water
        (0.30, LinSrgb::new(0.8, 0.8, 0.5)), // sand
        (0.50, LinSrgb::new(0.1, 0.6, 0.2)), // grass
        (0.75, LinSrgb::new(0.5, 0.4, 0.3)), // rock
        (1.00, LinSrgb::new(1.0, 1.0, 1.0)), // snow
    ])
}

// Image side length. `TerrainChunk::new` rejects any width whose square
// overflows usize, which bounds width by u32::MAX on 64-bit targets and by
// usize itself on 32-bit ones.
fn image_side(width: usize) -> u32 {
    u32::try_from(width).unwrap_or(u32::MAX)
}

pub fn to_terrain_image(chunk: &TerrainChunk) -> RgbImage {
    let width = chunk.width();
    let size = image_side(width);
    let gradient = terrain_gradient();
    let norm = normalized(chunk);

    RgbImage::from_fn(size, size, |x, y| {
        let h = norm[y as usize * width + x as usize];
        let rgb = gradient.get(h).into_format::<u8>();
        Rgb([rgb.red, rgb.green, rgb.blue])
    })
}

pub fn to_grayscale(chunk: &TerrainChunk) -> GrayImage {
    let width = chunk.width();
    let size = image_side(width);
    let norm = normalized(chunk);

    GrayImage::from_fn(size, size, |x, y| {
        let h = norm[y as usize * width + x as usize];
        Luma([(h * 255.0).round() as u8])
    })
}
