use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::TerrainGenerator;
use crate::error::TerrainError;
use crate::peak::PeakGenerator;
use crate::sine::SineGenerator;

// Built-in generator variants, selectable by name
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    #[default]
    Sine,
    Peak,
}

impl GeneratorKind {
    pub const ALL: [GeneratorKind; 2] = [GeneratorKind::Sine, GeneratorKind::Peak];

    pub fn name(self) -> &'static str {
        match self {
            GeneratorKind::Sine => "sine",
            GeneratorKind::Peak => "peak",
        }
    }

    // Fresh generator with its default parameters and an unseeded stream
    pub fn build(self) -> Box<dyn TerrainGenerator> {
        debug!(generator = self.name(), "building terrain generator");
        match self {
            GeneratorKind::Sine => Box::new(SineGenerator::new()),
            GeneratorKind::Peak => Box::new(PeakGenerator::new()),
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeneratorKind {
    type Err = TerrainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TerrainError::UnknownGenerator(s.to_string()))
    }
}
