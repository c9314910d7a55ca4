pub mod config;
pub mod error;
pub mod fog;
pub mod generation;
pub mod heightmap;
pub mod meshing;
pub mod scene;
pub mod terrain;

pub use heightmap::HeightMap;
