use bevy::{app::AppExit, prelude::*};

use crate::{
    config::TerrainConfig,
    error::TerrainError,
    generation::{perlin_heightmap_bytes, NoiseSettings},
    heightmap::HeightMap,
    meshing::{heightmap_to_grid_mesh, water_plane_mesh, GridSpec, TerrainMeshData, WaterMeshData},
};

/// Terrain and water geometry, built once at startup and only read afterwards.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct TerrainGeometry {
    pub terrain: TerrainMeshData,
    pub water: WaterMeshData,
}

impl TerrainGeometry {
    pub fn from_heightmap(heightmap: &HeightMap, config: &TerrainConfig) -> Result<Self, TerrainError> {
        let terrain = heightmap_to_grid_mesh(heightmap, config.texture_tiling)?;
        let water = water_plane_mesh(
            GridSpec::new(heightmap.width())?,
            config.water_level,
            config.texture_tiling,
        );

        Ok(Self { terrain, water })
    }

    pub fn build(config: &TerrainConfig) -> Result<Self, TerrainError> {
        let heightmap = load_heightmap(config)?;
        Self::from_heightmap(&heightmap, config)
    }
}

pub fn load_heightmap(config: &TerrainConfig) -> Result<HeightMap, TerrainError> {
    let heightmap = match config.seed {
        Some(seed) => {
            info!("Generating {0}x{0} heightmap from seed {1}", config.width, seed);
            let bytes = perlin_heightmap_bytes(config.width, seed, NoiseSettings::default());
            HeightMap::from_raw_bytes(&bytes, config.width, config.height_scale)?
        }
        None => HeightMap::load_raw(&config.heightmap_path, config.width, config.height_scale)?,
    };

    Ok(heightmap)
}

pub fn load_terrain_geometry(
    mut commands: Commands,
    config: Res<TerrainConfig>,
    mut exit: EventWriter<AppExit>,
) {
    match TerrainGeometry::build(&config) {
        Ok(geometry) => {
            info!(
                "Built terrain: {} vertices, {} triangles",
                geometry.terrain.vertices().len(),
                geometry.terrain.triangles().len() / 3
            );
            commands.insert_resource(geometry);
        }
        Err(err) => {
            error!("Could not load the terrain: {err}");
            exit.send(AppExit);
        }
    }
}

pub fn terrain_material(grass: Handle<Image>) -> StandardMaterial {
    StandardMaterial {
        base_color_texture: Some(grass),
        perceptual_roughness: 0.8,
        reflectance: 0.3,
        ..default()
    }
}

/// Unlit and added on top of whatever is behind it, so the terrain shows through.
pub fn water_material(water: Handle<Image>) -> StandardMaterial {
    StandardMaterial {
        base_color_texture: Some(water),
        alpha_mode: AlphaMode::Add,
        unlit: true,
        ..default()
    }
}

pub fn spawn_terrain_meshes(
    mut commands: Commands,
    geometry: Option<Res<TerrainGeometry>>,
    config: Res<TerrainConfig>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(geometry) = geometry else {
        return;
    };

    commands.spawn(PbrBundle {
        mesh: meshes.add(geometry.terrain.to_render_mesh(config.shade_by_height)),
        material: materials.add(terrain_material(
            asset_server.load(config.grass_texture.as_str()),
        )),
        ..default()
    });

    commands.spawn(PbrBundle {
        mesh: meshes.add(geometry.water.to_render_mesh()),
        material: materials.add(water_material(
            asset_server.load(config.water_texture.as_str()),
        )),
        ..default()
    });
}
