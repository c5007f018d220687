// RON-backed configuration for building and generating a chunk.
// Only text in, text out: loading the file is up to the caller.

use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

use crate::TerrainGenerator;
use crate::base::Parameters;
use crate::chunk::TerrainChunk;
use crate::error::{Result, TerrainError};
use crate::registry::GeneratorKind;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub chunk: ChunkConfig,
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkConfig {
    pub seed: i64,
    // Cells per side
    pub width: usize,
    pub base_height: f64,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            width: 32,
            base_height: 0.0,
        }
    }
}

impl ChunkConfig {
    pub fn build(&self) -> Result<TerrainChunk> {
        TerrainChunk::new(self.seed, self.width, self.base_height)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub kind: GeneratorKind,
    // Falls back to the chunk seed when generating through TerrainConfig
    pub seed: Option<i64>,
    // Overrides on top of the variant's defaults
    pub parameters: Parameters,
}

impl GeneratorConfig {
    pub fn build(&self) -> Box<dyn TerrainGenerator> {
        let mut generator = self.kind.build();
        if let Some(seed) = self.seed {
            generator.seed(seed);
        }
        for (name, value) in self.parameters.iter() {
            generator.set_parameter(name, value);
        }
        generator
    }
}

impl TerrainConfig {
    pub fn from_ron(text: &str) -> Result<Self> {
        ron::from_str(text).map_err(TerrainError::ConfigParse)
    }

    pub fn to_ron(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(TerrainError::ConfigSerialize)
    }

    // Allocate the chunk and run the configured generator over it once
    pub fn generate(&self) -> Result<TerrainChunk> {
        let _span = info_span!(
            "terrain_config",
            generator = self.generator.kind.name(),
            width = self.chunk.width
        )
        .entered();

        let mut chunk = self.chunk.build()?;
        let mut generator = self.generator.build();
        let seed = self.generator.seed.unwrap_or(self.chunk.seed);
        generator.seed(seed);
        generator.generate(&mut chunk);

        debug!(seed, "chunk generated from config");
        Ok(chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"(
        chunk: (seed: 42, width: 8, base_height: 1.5),
        generator: (
            kind: sine,
            parameters: { "roughness": 0.0, "offset": 10.0 },
        ),
    )"#;

    #[test]
    fn config_parses_ron() {
        let cfg = TerrainConfig::from_ron(SAMPLE).unwrap();
        assert_eq!(cfg.chunk.seed, 42);
        assert_eq!(cfg.chunk.width, 8);
        assert_eq!(cfg.generator.kind, GeneratorKind::Sine);
        assert_eq!(cfg.generator.seed, None);
        assert_eq!(cfg.generator.parameters.get("offset"), Some(10.0));
    }

    #[test]
    fn config_missing_fields_use_defaults() {
        let cfg = TerrainConfig::from_ron("(generator: (kind: peak))").unwrap();
        assert_eq!(cfg.chunk, ChunkConfig::default());
        assert_eq!(cfg.generator.kind, GeneratorKind::Peak);
        assert!(cfg.generator.parameters.is_empty());
    }

    #[test]
    fn config_rejects_garbage() {
        let err = TerrainConfig::from_ron("(chunk: (width: \"wide\"))").unwrap_err();
        assert!(matches!(err, TerrainError::ConfigParse(_)));
    }

    #[test]
    fn config_round_trips_through_ron() {
        let cfg = TerrainConfig::from_ron(SAMPLE).unwrap();
        let text = cfg.to_ron().unwrap();
        assert_eq!(TerrainConfig::from_ron(&text).unwrap(), cfg);
    }

    #[test]
    fn config_generates_chunk() {
        let chunk = TerrainConfig::from_ron(SAMPLE).unwrap().generate().unwrap();
        assert_eq!(chunk.width(), 8);
        assert_eq!(chunk.seed(), 42);
        // base 1.5 + offset 10 + 9 * (sin 0 + sin 0)
        assert!((chunk.get(0, 0).unwrap() - 11.5).abs() < 1e-12);
    }

    #[test]
    fn config_zero_width_is_an_error() {
        let cfg = TerrainConfig {
            chunk: ChunkConfig {
                width: 0,
                ..ChunkConfig::default()
            },
            ..TerrainConfig::default()
        };
        assert!(matches!(
            cfg.generate(),
            Err(TerrainError::InvalidWidth { width: 0 })
        ));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn config_huge_width_is_an_error() {
        let cfg = TerrainConfig::from_ron("(chunk: (width: 3037000000))").unwrap();
        assert!(matches!(
            cfg.generate(),
            Err(TerrainError::InvalidWidth { width: 3_037_000_000 })
        ));
    }

    #[test]
    fn generator_config_seed_matches_chunk_seed() {
        // Explicit seed equal to the chunk seed gives the same jittered chunk
        let mut cfg = TerrainConfig::default();
        cfg.chunk.seed = 11;
        let implicit = cfg.generate().unwrap();
        cfg.generator.seed = Some(11);
        let explicit = cfg.generate().unwrap();
        assert_eq!(implicit, explicit);

        cfg.generator.seed = Some(12);
        assert_ne!(cfg.generate().unwrap(), implicit);
    }
}
