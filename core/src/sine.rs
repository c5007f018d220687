use rand::Rng;
use tracing::debug_span;

use crate::base::{GeneratorBase, Parameters};
use crate::chunk::TerrainChunk;
use crate::TerrainGenerator;

pub const AMPLITUDE: &str = "amplitude";
pub const OFFSET: &str = "offset";
pub const XSCALE: &str = "xscale";
pub const YSCALE: &str = "yscale";
pub const ROUGHNESS: &str = "roughness";

const DEFAULT_AMPLITUDE: f64 = 18.0;
const DEFAULT_OFFSET: f64 = 30.0;
const DEFAULT_XSCALE: f64 = 32.0;
const DEFAULT_YSCALE: f64 = 42.0;
const DEFAULT_ROUGHNESS: f64 = 0.15;

// Wavy terrain from one sine along x plus one along y, with optional jitter.
//
// Reads `amplitude`, `offset`, `xscale`, `yscale`, `roughness`:
//   h(x, y) = offset + jitter + amplitude/2 * (sin(x*xscale) + sin(y*yscale))
// where jitter is uniform in [-roughness*amplitude, +roughness*amplitude].
//
// Stream consumption: one unit draw in [-1, 1] per cell, scaled by the spread,
// when roughness != 0; none at all when roughness == 0. Two runs only line up
// if they agree on that. A non-finite spread is treated like roughness == 0.
#[derive(Debug, Clone)]
pub struct SineGenerator {
    base: GeneratorBase,
}

impl SineGenerator {
    pub fn new() -> Self {
        Self {
            base: GeneratorBase::new(Self::default_parameters()),
        }
    }

    pub fn default_parameters() -> Parameters {
        [
            (AMPLITUDE, DEFAULT_AMPLITUDE),
            (OFFSET, DEFAULT_OFFSET),
            (XSCALE, DEFAULT_XSCALE),
            (YSCALE, DEFAULT_YSCALE),
            (ROUGHNESS, DEFAULT_ROUGHNESS),
        ]
        .into_iter()
        .collect()
    }
}

impl Default for SineGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TerrainGenerator for SineGenerator {
    fn name(&self) -> &'static str {
        "sine"
    }

    fn base(&self) -> &GeneratorBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut GeneratorBase {
        &mut self.base
    }

    fn generate(&mut self, target: &mut TerrainChunk) {
        let params = &self.base.params;
        let amplitude = params.get_or(AMPLITUDE, DEFAULT_AMPLITUDE);
        let offset = params.get_or(OFFSET, DEFAULT_OFFSET);
        let x_scale = params.get_or(XSCALE, DEFAULT_XSCALE);
        let y_scale = params.get_or(YSCALE, DEFAULT_YSCALE);
        let roughness = params.get_or(ROUGHNESS, DEFAULT_ROUGHNESS);

        let _span = debug_span!(
            "generate",
            generator = "sine",
            width = target.width(),
            seed = self.base.seed(),
            amplitude,
            roughness
        )
        .entered();

        let half_amplitude = amplitude / 2.0;
        let spread = (roughness * amplitude).abs();
        let jitter = roughness != 0.0 && spread.is_finite();
        let rng = self.base.rng_mut();

        let mut cursor = target.cursor();
        while cursor.next() {
            let rough = if jitter {
                rng.random_range(-1.0..=1.0) * spread
            } else {
                0.0
            };

            let val = offset
                + rough
                + half_amplitude
                    * ((cursor.x() as f64 * x_scale).sin() + (cursor.y() as f64 * y_scale).sin());

            cursor.add(val);
        }
    }
}
