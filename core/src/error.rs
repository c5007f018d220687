use thiserror::Error;

// Every fallible operation in the crate reports one of these
#[derive(Debug, Error)]
pub enum TerrainError {
    #[error("chunk width must be positive and width*width must fit in memory, got {width}")]
    InvalidWidth { width: usize },

    #[error("coordinate ({x}, {y}) is outside a chunk of width {width}")]
    OutOfBounds { x: usize, y: usize, width: usize },

    #[error("flat index {index} is outside a chunk of area {area}")]
    IndexOutOfBounds { index: usize, area: usize },

    #[error("unknown terrain generator `{0}`")]
    UnknownGenerator(String),

    #[error("failed to parse terrain config: {0}")]
    ConfigParse(#[source] ron::error::SpannedError),

    #[error("failed to serialize terrain config: {0}")]
    ConfigSerialize(#[source] ron::Error),
}

pub type Result<T> = std::result::Result<T, TerrainError>;
