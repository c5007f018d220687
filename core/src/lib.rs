// terrain holds the height-map chunk, its cursor, the generators and the sampler
pub mod base;
pub mod chunk;
pub mod config;
pub mod cursor;
pub mod error;
pub mod peak;
pub mod preview;
pub mod registry;
pub mod sampler;
pub mod sine;

pub use base::{GeneratorBase, Parameters};
pub use chunk::{TerrainChunk, create_chunk};
pub use config::{ChunkConfig, GeneratorConfig, TerrainConfig};
pub use cursor::ChunkCursor;
pub use error::{Result, TerrainError};
pub use peak::{Peak, PeakGenerator};
pub use registry::GeneratorKind;
pub use sampler::{bilinear, bilinear_weights};
pub use sine::SineGenerator;

// A pluggable algorithm that fills a chunk from a seed and named parameters.
// Variants only provide their shared state and `generate`; seeding and the
// parameter bag come for free through `GeneratorBase`.
pub trait TerrainGenerator {
    fn name(&self) -> &'static str;

    fn base(&self) -> &GeneratorBase;

    fn base_mut(&mut self) -> &mut GeneratorBase;

    // Adds this generator's heights onto `target`, walking it with a fresh cursor.
    // Same seed + same parameters + same width ⇒ same output.
    fn generate(&mut self, target: &mut TerrainChunk);

    // Restarts the random stream; identical seeds replay identical streams
    fn seed(&mut self, seed: i64) {
        self.base_mut().reseed(seed);
    }

    // Unknown names are stored and simply ignored by variants that don't read them
    fn set_parameter(&mut self, name: &str, value: f64) {
        self.base_mut().params.set(name, value);
    }

    fn parameter(&self, name: &str) -> Option<f64> {
        self.base().params.get(name)
    }

    fn parameters(&self) -> &Parameters {
        &self.base().params
    }
}
