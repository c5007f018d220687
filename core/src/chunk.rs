use tracing::debug;

use crate::TerrainGenerator;
use crate::cursor::ChunkCursor;
use crate::error::{Result, TerrainError};
use crate::sampler;

// Square terrain height-map, stored row-major as a flat Vec<f64>.
// Cell (x, y) lives at index `y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainChunk {
    pub(crate) heights: Vec<f64>,
    seed: i64,
    width: usize,
}

impl TerrainChunk {
    // Allocates width×width cells, all at `base_height`.
    // A zero width, or one whose cells can't be allocated, is rejected.
    pub fn new(seed: i64, width: usize, base_height: f64) -> Result<Self> {
        let area = match width.checked_mul(width) {
            Some(area) if area > 0 => area,
            _ => return Err(TerrainError::InvalidWidth { width }),
        };

        debug!(seed, width, base_height, "allocating terrain chunk");

        // Byte-size overflow and allocator refusal both surface here instead of panicking
        let mut heights = Vec::new();
        heights
            .try_reserve_exact(area)
            .map_err(|_| TerrainError::InvalidWidth { width })?;
        heights.resize(area, base_height);

        Ok(Self {
            heights,
            seed,
            width,
        })
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn area(&self) -> usize {
        self.heights.len()
    }

    // Row-major view of every stored elevation
    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    fn flat_index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.width {
            return Err(TerrainError::OutOfBounds {
                x,
                y,
                width: self.width,
            });
        }
        Ok(y * self.width + x)
    }

    fn checked_index(&self, index: usize) -> Result<usize> {
        if index >= self.heights.len() {
            return Err(TerrainError::IndexOutOfBounds {
                index,
                area: self.heights.len(),
            });
        }
        Ok(index)
    }

    pub fn get(&self, x: usize, y: usize) -> Result<f64> {
        let i = self.flat_index(x, y)?;
        Ok(self.heights[i])
    }

    pub fn get_index(&self, index: usize) -> Result<f64> {
        let i = self.checked_index(index)?;
        Ok(self.heights[i])
    }

    pub fn set(&mut self, x: usize, y: usize, value: f64) -> Result<()> {
        let i = self.flat_index(x, y)?;
        self.heights[i] = value;
        Ok(())
    }

    pub fn set_index(&mut self, index: usize, value: f64) -> Result<()> {
        let i = self.checked_index(index)?;
        self.heights[i] = value;
        Ok(())
    }

    // Accumulates into a cell, e.g. to layer several generator passes
    pub fn add(&mut self, x: usize, y: usize, amount: f64) -> Result<()> {
        let i = self.flat_index(x, y)?;
        self.heights[i] += amount;
        Ok(())
    }

    pub fn add_index(&mut self, index: usize, amount: f64) -> Result<()> {
        let i = self.checked_index(index)?;
        self.heights[i] += amount;
        Ok(())
    }

    // Fresh traversal cursor; one per pass
    pub fn cursor(&mut self) -> ChunkCursor<'_> {
        ChunkCursor::new(self)
    }

    // Seeds the generator with this chunk's own seed, then lets it fill the chunk
    pub fn generate(&mut self, generator: &mut dyn TerrainGenerator) {
        generator.seed(self.seed);
        generator.generate(self);
    }

    // Continuous height at fractional coordinates, see `sampler::bilinear`
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        sampler::bilinear(self, x, y)
    }

    // Lowest and highest stored elevation
    pub fn min_max(&self) -> (f64, f64) {
        self.heights
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &h| {
                (lo.min(h), hi.max(h))
            })
    }
}

// Construction entry point for collaborators outside the crate
pub fn create_chunk(seed: i64, width: usize, base_height: f64) -> Result<TerrainChunk> {
    TerrainChunk::new(seed, width, base_height)
}
