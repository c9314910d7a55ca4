use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum HeightmapError {
    #[error("Failed to open heightmap {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Heightmap size does not match width: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("Heightmap width must be at least 2, got {0}")]
    InvalidWidth(usize),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MeshError {
    #[error("Grid width must be at least 2, got {0}")]
    GridTooSmall(usize),
    #[error("Index list length {0} is not a multiple of 3")]
    PartialTriangle(usize),
    #[error("Index {index} out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds { index: u32, vertex_count: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum TerrainError {
    #[error(transparent)]
    Heightmap(#[from] HeightmapError),
    #[error(transparent)]
    Mesh(#[from] MeshError),
}
