use std::path::PathBuf;

use bevy::prelude::*;

use crate::{
    heightmap::HEIGHT_SCALE,
    meshing::{TEXTURE_TILING, WATER_LEVEL},
};

/// Runtime configuration for the demo, stored as a Bevy `Resource`.
///
/// Environment variables:
/// - `TERRAIN_HEIGHTMAP`       (default: `assets/heightmap.raw`)
/// - `TERRAIN_WIDTH`           (default: `65`)
/// - `TERRAIN_SEED`            (optional; when set, terrain comes from Perlin noise instead of the file)
/// - `TERRAIN_SHADE_BY_HEIGHT` (`1`/`true` multiplies the grass texture by the grayscale heights)
/// - `TERRAIN_GRASS_TEXTURE`   (default: `grass.png`, relative to the asset folder)
/// - `TERRAIN_WATER_TEXTURE`   (default: `water.png`)
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct TerrainConfig {
    pub heightmap_path: PathBuf,
    /// Samples per side of the square heightmap.
    pub width: usize,
    pub seed: Option<u32>,
    pub shade_by_height: bool,
    pub grass_texture: String,
    pub water_texture: String,
    pub height_scale: f32,
    pub water_level: f32,
    pub texture_tiling: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            heightmap_path: PathBuf::from("assets/heightmap.raw"),
            width: 65,
            seed: None,
            shade_by_height: false,
            grass_texture: "grass.png".to_string(),
            water_texture: "water.png".to_string(),
            height_scale: HEIGHT_SCALE,
            water_level: WATER_LEVEL,
            texture_tiling: TEXTURE_TILING,
        }
    }
}

impl TerrainConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unset, empty or unparsable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());
        let defaults = Self::default();

        Self {
            heightmap_path: get("TERRAIN_HEIGHTMAP")
                .map(PathBuf::from)
                .unwrap_or(defaults.heightmap_path),
            width: get("TERRAIN_WIDTH")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(defaults.width),
            seed: get("TERRAIN_SEED").and_then(|s| s.trim().parse().ok()),
            shade_by_height: get("TERRAIN_SHADE_BY_HEIGHT")
                .map(|s| matches!(s.trim(), "1" | "true"))
                .unwrap_or(defaults.shade_by_height),
            grass_texture: get("TERRAIN_GRASS_TEXTURE").unwrap_or(defaults.grass_texture),
            water_texture: get("TERRAIN_WATER_TEXTURE").unwrap_or(defaults.water_texture),
            ..defaults
        }
    }
}
